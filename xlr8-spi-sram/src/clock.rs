//! SPI bit clock select codes.
//!
//! The codes are the SPI2X:SPR1:SPR0 encoding of the host MCU's SPI block,
//! so a code picked for the regular SPI library selects the same divisor here.

use crate::Error;

pub const SPI_CLOCK_DIV4: u8 = 0x00;
pub const SPI_CLOCK_DIV16: u8 = 0x01;
pub const SPI_CLOCK_DIV64: u8 = 0x02;
pub const SPI_CLOCK_DIV128: u8 = 0x03;
pub const SPI_CLOCK_DIV2: u8 = 0x04;
pub const SPI_CLOCK_DIV8: u8 = 0x05;
pub const SPI_CLOCK_DIV32: u8 = 0x06;
/// Second encoding of clk/64 (SPI2X set on top of clk/128).
pub const SPI_CLOCK_DIV64_ALT: u8 = 0x07;

/// Typed view of the clock select field.
///
/// Defaults to clk/2, the controller's reset setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ClockDivider {
    Div4 = SPI_CLOCK_DIV4,
    Div16 = SPI_CLOCK_DIV16,
    Div64 = SPI_CLOCK_DIV64,
    Div128 = SPI_CLOCK_DIV128,
    #[default]
    Div2 = SPI_CLOCK_DIV2,
    Div8 = SPI_CLOCK_DIV8,
    Div32 = SPI_CLOCK_DIV32,
    Div64Alt = SPI_CLOCK_DIV64_ALT,
}

impl ClockDivider {
    /// Every code the field can hold, in code order.
    pub const ALL: [ClockDivider; 8] = [
        ClockDivider::Div4,
        ClockDivider::Div16,
        ClockDivider::Div64,
        ClockDivider::Div128,
        ClockDivider::Div2,
        ClockDivider::Div8,
        ClockDivider::Div32,
        ClockDivider::Div64Alt,
    ];

    /// The 3-bit code written to the clock select field.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// System clock cycles per SPI bit.
    pub const fn divisor(self) -> u16 {
        match self {
            ClockDivider::Div2 => 2,
            ClockDivider::Div4 => 4,
            ClockDivider::Div8 => 8,
            ClockDivider::Div16 => 16,
            ClockDivider::Div32 => 32,
            ClockDivider::Div64 | ClockDivider::Div64Alt => 64,
            ClockDivider::Div128 => 128,
        }
    }

    /// Picks the canonical code for `divisor`. `Div64Alt` is never returned.
    pub const fn from_divisor(divisor: u16) -> Option<Self> {
        match divisor {
            2 => Some(ClockDivider::Div2),
            4 => Some(ClockDivider::Div4),
            8 => Some(ClockDivider::Div8),
            16 => Some(ClockDivider::Div16),
            32 => Some(ClockDivider::Div32),
            64 => Some(ClockDivider::Div64),
            128 => Some(ClockDivider::Div128),
            _ => None,
        }
    }

    /// Decodes a field value that is already known to be 3 bits wide.
    pub(crate) const fn from_field(code: u8) -> Self {
        ClockDivider::ALL[(code & 0x7) as usize]
    }
}

impl TryFrom<u8> for ClockDivider {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Error> {
        if code > 0x7 {
            return Err(Error::InvalidClockCode(code));
        }
        Ok(ClockDivider::from_field(code))
    }
}

impl From<ClockDivider> for u8 {
    fn from(divider: ClockDivider) -> u8 {
        divider.code()
    }
}
