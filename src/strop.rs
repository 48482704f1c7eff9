//! Conversion to and from a string representation.

use crate::common::buf::DigitBuf;
use crate::defs::Error;
use crate::num::BigDecimal;
use crate::parser;
use core::fmt::Write;

#[cfg(not(feature = "std"))]
use alloc::string::String;

impl BigDecimal {
    /// Parse a number from string `s`.
    /// The expected format is an optional sign, the integer digits, and optionally
    /// a decimal point followed by at least one fraction digit.
    /// An empty string parses to zero.
    ///
    /// ## Errors
    ///
    ///  - InvalidCharacter: the input is malformed; the error holds the offending character.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let ps = parser::parse(s)?;
        let (digits, scale, sign) = ps.raw_parts();
        Ok(Self::from_raw_parts(sign, DigitBuf::from_digits(digits), scale))
    }

    /// Writes the textual representation of `self` to `w`.
    /// The fraction part is written only when the scale is greater than zero,
    /// and always contains exactly `scale` digits.
    ///
    /// ## Errors
    ///
    ///  - Fmt: could not write to `w`.
    pub fn write_str<T: Write>(&self, w: &mut T) -> Result<(), core::fmt::Error> {
        if self.sign().is_negative() {
            w.write_char('-')?;
        }

        for &d in self.int_digits() {
            w.write_char((d + b'0') as char)?;
        }

        if self.scale() > 0 {
            w.write_char('.')?;

            for &d in self.frac_digits() {
                w.write_char((d + b'0') as char)?;
            }
        }

        Ok(())
    }

    /// Returns the textual representation of `self`.
    pub fn format(&self) -> String {
        let mut s = String::new();
        self.write_str(&mut s).unwrap(); // write to String never fails.
        s
    }
}
