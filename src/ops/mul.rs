//! Multiplication.

use crate::common::buf::DigitBuf;
use crate::common::util;
use crate::defs::Digit;
use crate::defs::Sign;
use crate::defs::WORD_MUL_DIGITS;
use crate::num::BigDecimal;

// Multiplies the magnitudes of two digit slices.
// Recursion: operands whose halves do not fit the machine word are split in two and
// the halves are multiplied separately; short operands are multiplied directly in
// a machine word; everything in between goes through Karatsuba's algorithm.
pub(crate) fn mul_digits(m1: &[Digit], m2: &[Digit]) -> DigitBuf {
    let m1 = util::strip_leading_zeroes(m1);
    let m2 = util::strip_leading_zeroes(m2);

    if m1.is_empty() || m2.is_empty() {
        return DigitBuf::from_digits(&[0]);
    }

    if (m1.len() + 1) / 2 > WORD_MUL_DIGITS / 2 || (m2.len() + 1) / 2 > WORD_MUL_DIGITS / 2 {
        // the longer operand is split at the midpoint, and the halves are
        // multiplied by the other operand separately
        let (l, s) = if m1.len() >= m2.len() { (m1, m2) } else { (m2, m1) };
        let (hi, lo) = l.split_at(l.len() / 2);

        let mut p1 = mul_digits(hi, s);
        p1.append_zeroes(lo.len());

        let p2 = mul_digits(lo, s);

        return util::add_digits(&p1, &p2);
    }

    if m1.len() + m2.len() <= WORD_MUL_DIGITS {
        // the product fits the machine word
        let w = util::digits_to_word(m1) * util::digits_to_word(m2);
        return util::word_to_digits(w);
    }

    karatsuba(m1, m2)
}

// Karatsuba multiplication: three sub-products of half size instead of four.
fn karatsuba(m1: &[Digit], m2: &[Digit]) -> DigitBuf {
    let n = (m1.len().min(m2.len()) + 1) / 2;

    let (x1, x0) = m1.split_at(m1.len() - n);
    let (y1, y0) = m2.split_at(m2.len() - n);

    let z0 = mul_digits(x0, y0);
    let z2 = mul_digits(x1, y1);

    let (dx, sx) = abs_diff(x1, x0);
    let (dy, sy) = abs_diff(y1, y0);
    let t = mul_digits(&dx, &dy);

    // z1 = x1*y0 + x0*y1 = z2 + z0 - (x1 - x0)*(y1 - y0)
    let zsum = util::add_digits(&z2, &z0);
    let z1 = if sx == sy {
        util::sub_digits(&zsum, &t)
    } else {
        util::add_digits(&zsum, &t)
    };

    // z2*base^2n + z1*base^n + z0
    let mut z2 = z2;
    z2.append_zeroes(2 * n);

    let mut z1 = z1;
    z1.append_zeroes(n);

    util::add_digits(&util::add_digits(&z2, &z1), &z0)
}

// The absolute difference of the magnitudes of two digit slices,
// and true if `m1` is smaller than `m2`.
fn abs_diff(m1: &[Digit], m2: &[Digit]) -> (DigitBuf, bool) {
    if util::cmp_digits(m1, m2) >= 0 {
        (util::sub_digits(m1, m2), false)
    } else {
        (util::sub_digits(m2, m1), true)
    }
}

impl BigDecimal {
    /// Returns the product of `self` and `d2`.
    /// The scale of the result is the sum of the scales of the operands.
    pub fn mul(&self, d2: &Self) -> Self {
        self.mul_scaled(d2, self.scale + d2.scale)
    }

    /// Returns the product of `self` and `d2` with the number of digits after the
    /// decimal point reduced to `scale` without rounding.
    /// The scale of the result never drops below the smallest of the scales of the
    /// operands, and never exceeds the sum of their scales.
    pub fn mul_scaled(&self, d2: &Self, scale: usize) -> Self {
        if self.is_zero() || d2.is_zero() {
            return Self::new();
        }

        let full_scale = self.scale + d2.scale;
        let mut m = mul_digits(&self.m, &d2.m);

        if m.len() < full_scale + 1 {
            m.prepend_zeroes(full_scale + 1 - m.len());
        }

        let scale = scale.max(self.scale.min(d2.scale)).min(full_scale);
        m.trunc_tail(full_scale - scale);

        let s = if self.s == d2.s { Sign::Pos } else { Sign::Neg };

        Self::from_raw_parts(s, m, scale)
    }
}
