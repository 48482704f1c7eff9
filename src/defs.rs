//! Definitions.

use core::fmt::Display;

/// A single decimal digit of a number, always in the range 0 to 9.
pub type Digit = u8;

/// Machine word used by the multiplication fast path.
pub type Word = u64;

/// Base of the digits.
pub const RADIX: Word = 10;

/// Maximum number of decimal digits in a product computed directly in a `Word`
/// (10^19 does not exceed `u64::MAX`).
pub const WORD_MUL_DIGITS: usize = 19;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns 1 for the positive sign and -1 for the negative sign.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }
}

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input string contains an unexpected character.
    InvalidCharacter(char),

    /// Divisor is zero.
    DivisionByZero,

    /// The argument of the operation must be positive.
    NonPositiveArgument,

    /// The value does not fit the range of the target integer type.
    ConversionOverflow,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidCharacter(c) => write!(f, "unexpected character '{}'", c),
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::NonPositiveArgument => f.write_str("argument must be positive"),
            Error::ConversionOverflow => f.write_str("conversion overflow"),
        }
    }
}
