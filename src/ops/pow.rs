//! Integer power.

use crate::common::consts::ONE;
use crate::defs::Error;
use crate::num::BigDecimal;

impl BigDecimal {
    /// Raises `self` to the power `n`.
    /// A negative exponent inverts the positive power via division at the given `scale`.
    /// The resulting number of digits after the decimal point does not exceed
    /// the larger of the scale of `self` and `scale`, and never exceeds the scale
    /// of the exact power.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero and `n` is negative.
    pub fn pow(&self, n: i32, scale: usize) -> Result<Self, Error> {
        if n >= 0 {
            Ok(self.pow_unsigned(n as u32, scale))
        } else {
            let p = self.pow_unsigned(n.unsigned_abs(), scale);
            ONE.div(&p, scale)
        }
    }

    // Binary exponentiation with exact intermediate products.
    fn pow_unsigned(&self, n: u32, scale: usize) -> Self {
        let mut acc = ONE.clone();
        let mut base = self.clone();
        let mut e = n;

        while e > 0 {
            if e & 1 == 1 {
                acc = acc.mul(&base);
            }

            e >>= 1;
            if e > 0 {
                base = base.mul(&base);
            }
        }

        let full_scale = self.scale.saturating_mul(n as usize);

        acc.rescale(full_scale.min(self.scale.max(scale)))
    }
}
