use xlr8_pac::spisram::MEMCR;

use crate::Error;

/// SRAM access mode, as held in bits 5:4 of `MEMCR`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    /// Every byte transfer is preceded by a command and a fresh address.
    #[default]
    Byte = MEMCR::mode::RW::Byte,
    /// The address auto-increments and wraps at the end of each
    /// [`PAGE_SIZE`](crate::PAGE_SIZE)-byte page.
    Page = MEMCR::mode::RW::Page,
    /// The address auto-increments across the whole array.
    Sequential = MEMCR::mode::RW::Sequential,
}

impl Mode {
    /// Unshifted 2-bit field value.
    #[inline]
    pub const fn field(self) -> u8 {
        self as u8
    }

    /// The field value shifted into place within `MEMCR`.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.field() << MEMCR::mode::offset
    }
}

impl TryFrom<u8> for Mode {
    type Error = Error;

    /// Decodes an unshifted field value; only the low two bits are looked at.
    fn try_from(field: u8) -> Result<Self, Error> {
        match field & 0b11 {
            MEMCR::mode::RW::Byte => Ok(Mode::Byte),
            MEMCR::mode::RW::Page => Ok(Mode::Page),
            MEMCR::mode::RW::Sequential => Ok(Mode::Sequential),
            _ => Err(Error::ReservedMode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodings_follow_the_register_layout() {
        assert_eq!(Mode::Byte.bits(), 0b00_0000);
        assert_eq!(Mode::Page.bits(), 0b10_0000);
        assert_eq!(Mode::Sequential.bits(), 0b01_0000);
    }

    #[test]
    fn field_decodes_back_to_mode() {
        for mode in [Mode::Byte, Mode::Page, Mode::Sequential] {
            assert_eq!(Mode::try_from(mode.field()), Ok(mode));
        }
        assert_eq!(Mode::try_from(0b11), Err(Error::ReservedMode));
    }
}
