use core::fmt;

/// Errors from decoding or converting control register values.
///
/// Writes to the register never fail; only the typed views can.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A clock select code that does not fit the 3-bit field.
    InvalidClockCode(u8),
    /// The mode field holds the reserved `0b11` encoding.
    ReservedMode,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidClockCode(code) => {
                write!(f, "clock select code {:#04x} does not fit in 3 bits", code)
            }
            Error::ReservedMode => f.write_str("SRAM mode field holds the reserved encoding"),
        }
    }
}
