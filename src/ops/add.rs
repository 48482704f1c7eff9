//! Addition and subtraction.

use crate::common::buf::DigitBuf;
use crate::common::util;
use crate::num::BigDecimal;

impl BigDecimal {
    /// Returns the sum of `self` and `d2`.
    /// The scale of the result is the largest of the scales of the operands.
    pub fn add(&self, d2: &Self) -> Self {
        if self.s == d2.s {
            let (m, scale) = Self::abs_add(self, d2);
            Self::from_raw_parts(self.s, m, scale)
        } else if self.abs_cmp(d2) >= 0 {
            let (m, scale) = Self::abs_sub(self, d2);
            Self::from_raw_parts(self.s, m, scale)
        } else {
            let (m, scale) = Self::abs_sub(d2, self);
            Self::from_raw_parts(d2.s, m, scale)
        }
    }

    /// Returns the difference of `self` and `d2`.
    /// The scale of the result is the largest of the scales of the operands.
    pub fn sub(&self, d2: &Self) -> Self {
        if self.s != d2.s {
            let (m, scale) = Self::abs_add(self, d2);
            Self::from_raw_parts(self.s, m, scale)
        } else if self.abs_cmp(d2) >= 0 {
            let (m, scale) = Self::abs_sub(self, d2);
            Self::from_raw_parts(self.s, m, scale)
        } else {
            let (m, scale) = Self::abs_sub(d2, self);
            Self::from_raw_parts(d2.s.invert(), m, scale)
        }
    }

    // Aligns the digits of two operands at the decimal point by padding the fraction
    // of the operand with the smaller scale with zeroes.
    fn align(d1: &Self, d2: &Self) -> (DigitBuf, DigitBuf, usize) {
        let scale = d1.scale.max(d2.scale);

        let mut m1 = d1.m.clone();
        m1.append_zeroes(scale - d1.scale);

        let mut m2 = d2.m.clone();
        m2.append_zeroes(scale - d2.scale);

        (m1, m2, scale)
    }

    // |d1| + |d2|, the signs are ignored.
    fn abs_add(d1: &Self, d2: &Self) -> (DigitBuf, usize) {
        let (m1, m2, scale) = Self::align(d1, d2);
        (util::add_digits(&m1, &m2), scale)
    }

    // |d1| - |d2|, the signs are ignored; |d1| must not be smaller than |d2|.
    fn abs_sub(d1: &Self, d2: &Self) -> (DigitBuf, usize) {
        let (mut m1, m2, scale) = Self::align(d1, d2);

        if m1.len() < m2.len() {
            m1.prepend_zeroes(m2.len() - m1.len());
        }

        (util::sub_digits(&m1, &m2), scale)
    }
}
