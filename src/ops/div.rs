//! Division and remainder.

use crate::common::buf::DigitBuf;
use crate::common::util;
use crate::defs::Digit;
use crate::defs::Error;
use crate::defs::Sign;
use crate::defs::Word;
use crate::defs::RADIX;
use crate::num::BigDecimal;

// Divides the magnitudes of two digit slices, returning the integer quotient.
// The divisor must not be zero.
pub(crate) fn div_digits(u: &[Digit], v: &[Digit]) -> DigitBuf {
    let u = util::strip_leading_zeroes(u);
    let v = util::strip_leading_zeroes(v);

    debug_assert!(!v.is_empty());

    if util::cmp_digits(u, v) < 0 {
        return DigitBuf::from_digits(&[0]);
    }

    if v.len() == 1 {
        return div_by_digit(u, v[0]);
    }

    // pad both operands with the same number of trailing zeroes so the divisor
    // provides the two lookahead digits; the quotient is unchanged
    let pad = 3usize.saturating_sub(v.len());
    let mut ub = DigitBuf::from_digits(u);
    ub.append_zeroes(pad);
    let mut vb = DigitBuf::from_digits(v);
    vb.append_zeroes(pad);

    knuth_d(&ub, &vb)
}

// Short division by a single digit.
fn div_by_digit(u: &[Digit], d: Digit) -> DigitBuf {
    let mut q = DigitBuf::new_zeroed(u.len());
    let mut r: Word = 0;

    for (x, &a) in q.iter_mut().zip(u.iter()) {
        let t = r * RADIX + a as Word;
        *x = (t / d as Word) as Digit;
        r = t % d as Word;
    }

    q
}

// Knuth's Algorithm D over base-10 digits. Requires a divisor of at least 3 digits
// with a non-zero leading digit, and `|u| >= |v|`.
fn knuth_d(u: &[Digit], v: &[Digit]) -> DigitBuf {
    let n = v.len();

    // normalization drives the leading divisor digit to at least RADIX / 2,
    // which bounds the error of the quotient digit guess
    let d = (RADIX / (v[0] as Word + 1)) as Digit;
    let vn_buf = util::mul_by_digit(v, d);
    let vn = &vn_buf[1..]; // d * v[0] < RADIX, the carry digit is always zero
    let mut un = util::mul_by_digit(u, d);

    let mut q = DigitBuf::new_zeroed(u.len() - n + 1);

    for j in 0..q.len() {
        // two-digit lookahead guess of the quotient digit
        let mut qh = (un[j] as u32 * 10 + un[j + 1] as u32) / vn[0] as u32;
        let mut rh = (un[j] as u32 * 10 + un[j + 1] as u32) % vn[0] as u32;

        loop {
            if qh >= 10 || qh * vn[1] as u32 > rh * 10 + un[j + 2] as u32 {
                qh -= 1;
                rh += vn[0] as u32;
                if rh < 10 {
                    continue;
                }
            }
            break;
        }

        // multiply and subtract qh * vn from the window un[j ..= j+n]
        let mut borrow = 0;
        for i in (0..n).rev() {
            let p = qh as i32 * vn[i] as i32 + borrow;
            borrow = p / 10;
            let mut t = un[j + 1 + i] as i32 - p % 10;
            if t < 0 {
                t += 10;
                borrow += 1;
            }
            un[j + 1 + i] = t as Digit;
        }
        let top = un[j] as i32 - borrow;

        if top < 0 {
            // the guess overshot by one, add the divisor back
            qh -= 1;
            let mut c = 0;
            for i in (0..n).rev() {
                let s = un[j + 1 + i] as i32 + vn[i] as i32 + c;
                un[j + 1 + i] = (s % 10) as Digit;
                c = s / 10;
            }
            un[j] = (top + c) as Digit;
        } else {
            un[j] = top as Digit;
        }

        q[j] = qh as Digit;
    }

    q
}

impl BigDecimal {
    /// Returns `self` divided by `d2` with `scale` digits after the decimal point.
    /// The quotient is truncated toward zero, not rounded.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    pub fn div(&self, d2: &Self, scale: usize) -> Result<Self, Error> {
        if d2.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if self.is_zero() {
            return Ok(Self::new());
        }

        // shift the dividend left so the integer quotient carries `scale` fraction digits
        let mut u = self.m.clone();
        u.append_zeroes(scale + d2.scale);

        let mut q = div_digits(&u, &d2.m);

        // drop the digits contributed by the scale of the dividend
        if q.len() <= self.scale {
            return Ok(Self::new());
        }
        q.trunc_tail(self.scale);

        if q.len() < scale + 1 {
            q.prepend_zeroes(scale + 1 - q.len());
        }

        let s = if self.s == d2.s { Sign::Pos } else { Sign::Neg };

        Ok(Self::from_raw_parts(s, q, scale))
    }

    /// Returns the remainder of `self` divided by `d2`, consistent with the
    /// truncating division at the given `scale`: `self - self.div(d2, scale) * d2`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    pub fn rem(&self, d2: &Self, scale: usize) -> Result<Self, Error> {
        let q = self.div(d2, scale)?;
        Ok(self.sub(&q.mul(d2)))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn num(s: &str) -> BigDecimal {
        BigDecimal::parse(s).unwrap()
    }

    #[test]
    fn test_div() {
        // truncating division at the requested scale
        assert_eq!(num("10").div(&num("3"), 0).unwrap().format(), "3");
        assert_eq!(num("10").div(&num("3"), 10).unwrap().format(), "3.3333333333");
        assert_eq!(num("1").div(&num("8"), 3).unwrap().format(), "0.125");
        assert_eq!(num("123.456").div(&num("7.89"), 8).unwrap().format(), "15.64714828");

        // sign of the quotient
        assert_eq!(num("-10").div(&num("3"), 0).unwrap().format(), "-3");
        assert_eq!(num("10").div(&num("-3"), 0).unwrap().format(), "-3");
        assert_eq!(num("-10").div(&num("-3"), 0).unwrap().format(), "3");

        // smaller magnitude dividend
        assert_eq!(num("1").div(&num("100"), 0).unwrap().format(), "0");
        assert_eq!(num("1").div(&num("100"), 4).unwrap().format(), "0.0100");

        // zero dividend short-circuits to the canonical zero
        let d = num("0").div(&num("1.5"), 5).unwrap();
        assert!(d.is_zero());
        assert_eq!(d.as_raw_parts(), (&[0][..], 0, Sign::Pos));

        // zero divisor
        assert_eq!(num("1").div(&num("0"), 0).unwrap_err(), Error::DivisionByZero);
        assert_eq!(num("1").div(&num("0.00"), 0).unwrap_err(), Error::DivisionByZero);

        // multi-digit divisor exercising the quotient guess correction
        assert_eq!(num("8765432109876543210").div(&num("123456789"), 0).unwrap().format(), "71000000736");
        assert_eq!(
            num("100000000000000000000000000000000000000")
                .div(&num("99999999999999999999"), 0)
                .unwrap()
                .format(),
            "1000000000000000000"
        );
    }

    #[test]
    fn test_rem() {
        assert_eq!(num("10").rem(&num("3"), 0).unwrap().format(), "1");
        assert_eq!(num("-2").rem(&num("1.60"), 0).unwrap().format(), "-0.40");
        assert_eq!(num("7.5").rem(&num("2.5"), 1).unwrap().format(), "0");
        assert_eq!(num("1").rem(&num("0"), 0).unwrap_err(), Error::DivisionByZero);
    }

    #[test]
    fn test_div_random() {
        for _ in 0..1000 {
            let v1 = rand::random::<u64>();
            let v2 = rand::random::<u64>() % 1000000 + 1;

            let q = BigDecimal::from_u64(v1).div(&BigDecimal::from_u64(v2), 0).unwrap();
            assert_eq!(q.to_u64().unwrap(), v1 / v2, "{} / {}", v1, v2);

            let r = BigDecimal::from_u64(v1).rem(&BigDecimal::from_u64(v2), 0).unwrap();
            assert_eq!(r.to_u64().unwrap(), v1 % v2, "{} % {}", v1, v2);
        }
    }
}
