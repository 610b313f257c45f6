use core::fmt;

/// Errors reported by the checked (`try_`) conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The byte is not one of `0-9`, `a-f`, `A-F`.
    IllegalCharacter(u8),
    /// The value does not fit in a nibble (it is 16 or more).
    NibbleOverflow(u8),
    /// Nothing to convert.
    EmptyInput,
    /// The output buffer cannot hold the result.
    BufferTooSmall { needed: usize, available: usize },
    /// A hex digit is missing its pair at the end of the input.
    OddDigitCount,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IllegalCharacter(ch) => write!(f, "illegal hex character {:#04x}", ch),
            Error::NibbleOverflow(num) => write!(f, "value {} does not fit in a nibble", num),
            Error::EmptyInput => f.write_str("empty input"),
            Error::BufferTooSmall { needed, available } => write!(
                f,
                "output buffer too small: {} bytes needed, {} available",
                needed, available
            ),
            Error::OddDigitCount => f.write_str("dangling hex digit at the end of the input"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
