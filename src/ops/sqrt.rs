//! Square root.

use crate::common::buf::DigitBuf;
use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::defs::Error;
use crate::defs::Sign;
use crate::num::BigDecimal;

impl BigDecimal {
    /// Returns the square root of `self` with `scale` digits after the decimal point,
    /// computed by Newton's iteration and truncated toward zero.
    ///
    /// ## Errors
    ///
    ///  - NonPositiveArgument: `self` is zero or negative.
    pub fn sqrt(&self, scale: usize) -> Result<Self, Error> {
        if self.is_zero() || self.s.is_negative() {
            return Err(Error::NonPositiveArgument);
        }

        // coarse magnitude estimate: a power of ten with half the integer digit count
        let mut g = if self.cmp(&ONE) <= 0 {
            ONE.clone()
        } else {
            let mut m = DigitBuf::new_zeroed(self.int_len() / 2 + 1);
            m[0] = 1;
            Self::from_raw_parts(Sign::Pos, m, 0)
        };

        // the estimate may lie below the root, the first step always brings
        // the guess to the decreasing side
        g = self.newton_step(&g, scale)?;

        // the guesses decrease monotonically toward the root; the cap is a
        // safety net in case the convergence test is ever violated
        let max_iter = 2 * (self.m.len() + scale) + 16;

        for _ in 0..max_iter {
            let next = self.newton_step(&g, scale)?;

            if next.cmp(&g) >= 0 || next.is_zero() {
                break;
            }

            g = next;
        }

        Ok(g.rescale(scale))
    }

    // next = (self / guess + guess) * 0.5, truncated to `scale`
    fn newton_step(&self, g: &Self, scale: usize) -> Result<Self, Error> {
        Ok(self.div(g, scale + 1)?.add(g).mul_scaled(&HALF, scale))
    }
}
