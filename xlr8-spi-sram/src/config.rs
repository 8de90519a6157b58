use xlr8_pac::spisram::{MEMCR, SPISRAM};

use crate::{ClockDivider, Error, Mode};

/// Complete set of controller settings held in `MEMCR`.
///
/// `Default` matches the controller's reset value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SramConfig {
    pub mode: Mode,
    pub clock: ClockDivider,
    pub extended_address: bool,
}

impl SramConfig {
    /// Register image for this configuration. Reserved bits are zero.
    pub const fn bits(&self) -> u8 {
        let extaddr = if self.extended_address {
            MEMCR::extaddr::RW::Enabled
        } else {
            MEMCR::extaddr::RW::Disabled
        };
        self.mode.bits()
            | ((self.clock.code() << MEMCR::clksel::offset) & MEMCR::clksel::mask)
            | (extaddr << MEMCR::extaddr::offset)
    }

    /// Decodes a register image, ignoring the reserved bits.
    pub fn from_bits(bits: u8) -> Result<Self, Error> {
        let mode = Mode::try_from((bits & MEMCR::mode::mask) >> MEMCR::mode::offset)?;
        let clock = ClockDivider::from_field((bits & MEMCR::clksel::mask) >> MEMCR::clksel::offset);
        Ok(SramConfig {
            mode,
            clock,
            extended_address: bits & MEMCR::extaddr::mask != 0,
        })
    }

    /// The configuration the controller comes out of reset with.
    pub fn reset() -> Self {
        // The reset image never holds the reserved mode encoding.
        Self::from_bits(SPISRAM::reset.MEMCR).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reset_value() {
        assert_eq!(SramConfig::default().bits(), SPISRAM::reset.MEMCR);
        assert_eq!(SramConfig::reset(), SramConfig::default());
    }

    #[test]
    fn bits_places_every_field() {
        let config = SramConfig {
            mode: Mode::Sequential,
            clock: ClockDivider::Div2,
            extended_address: true,
        };
        assert_eq!(config.bits(), 0x19);
        assert_eq!(SramConfig::from_bits(0x19), Ok(config));
    }

    #[test]
    fn from_bits_ignores_reserved_bits() {
        let config = SramConfig::from_bits(0xe4).unwrap();
        assert_eq!(config.mode, Mode::Page);
        assert_eq!(config.clock, ClockDivider::Div64);
        assert!(!config.extended_address);
    }

    #[test]
    fn from_bits_rejects_reserved_mode() {
        assert_eq!(SramConfig::from_bits(0x30), Err(Error::ReservedMode));
    }
}
