//! Auxiliary functions operating on digit slices.

use crate::common::buf::DigitBuf;
use crate::defs::Digit;
use crate::defs::Word;
use crate::defs::RADIX;
use itertools::izip;

/// Returns `m` with leading zero digits removed; the result may be empty.
#[inline]
pub fn strip_leading_zeroes(m: &[Digit]) -> &[Digit] {
    let n = m.iter().take_while(|&&d| d == 0).count();
    &m[n..]
}

/// Converts a digit slice to a machine word.
/// The value must fit the word, the caller is responsible for checking the length.
pub fn digits_to_word(m: &[Digit]) -> Word {
    m.iter().fold(0, |acc, &d| acc * RADIX + d as Word)
}

/// Converts a machine word to a digit buffer, most significant digit first.
pub fn word_to_digits(mut w: Word) -> DigitBuf {
    if w == 0 {
        return DigitBuf::from_digits(&[0]);
    }

    let mut n = 0;
    let mut t = w;
    while t > 0 {
        t /= RADIX;
        n += 1;
    }

    let mut m = DigitBuf::new_zeroed(n);
    for v in m.iter_mut().rev() {
        *v = (w % RADIX) as Digit;
        w /= RADIX;
    }

    m
}

/// Compares the magnitudes of two right-aligned digit slices.
/// Returns a positive value if `m1` is greater than `m2`, a negative value if `m1`
/// is smaller than `m2`, 0 otherwise.
pub fn cmp_digits(m1: &[Digit], m2: &[Digit]) -> i32 {
    let m1 = strip_leading_zeroes(m1);
    let m2 = strip_leading_zeroes(m2);

    if m1.len() != m2.len() {
        return if m1.len() > m2.len() { 1 } else { -1 };
    }

    for (a, b) in m1.iter().zip(m2.iter()) {
        if a != b {
            return if a > b { 1 } else { -1 };
        }
    }

    0
}

/// Adds the magnitudes of two right-aligned digit slices.
/// The result is one digit longer than the longest operand to give room to the carry.
pub fn add_digits(m1: &[Digit], m2: &[Digit]) -> DigitBuf {
    let (mut iter1, mut iter2) = if m1.len() > m2.len() {
        (m1.iter().rev(), m2.iter().rev())
    } else {
        (m2.iter().rev(), m1.iter().rev())
    };

    let mut m3 = DigitBuf::new_zeroed(m1.len().max(m2.len()) + 1);
    let mut iter3 = m3.iter_mut().rev();
    let mut c = 0;

    for (b, a, x) in izip!(iter2.by_ref(), iter1.by_ref(), iter3.by_ref()) {
        let v = a + b + c;
        if v >= RADIX as Digit {
            *x = v - RADIX as Digit;
            c = 1;
        } else {
            *x = v;
            c = 0;
        }
    }

    for (a, x) in iter1.zip(iter3.by_ref()) {
        let v = a + c;
        if v >= RADIX as Digit {
            *x = v - RADIX as Digit;
            c = 1;
        } else {
            *x = v;
            c = 0;
        }
    }

    if let Some(x) = iter3.next() {
        *x = c;
    }

    m3
}

/// Subtracts the magnitude of `m2` from the magnitude of `m1`.
/// `m1` must not be smaller than `m2`. The result has the length of `m1`.
pub fn sub_digits(m1: &[Digit], m2: &[Digit]) -> DigitBuf {
    debug_assert!(cmp_digits(m1, m2) >= 0);

    let mut m3 = DigitBuf::from_digits(m1);
    let mut iter3 = m3.iter_mut().rev();
    let mut c = 0;

    for (b, x) in m2.iter().rev().zip(iter3.by_ref()) {
        let v = *x as i32 - *b as i32 - c;
        if v < 0 {
            *x = (v + RADIX as i32) as Digit;
            c = 1;
        } else {
            *x = v as Digit;
            c = 0;
        }
    }

    for x in iter3 {
        if c == 0 {
            break;
        }

        let v = *x as i32 - c;
        if v < 0 {
            *x = (v + RADIX as i32) as Digit;
            c = 1;
        } else {
            *x = v as Digit;
            c = 0;
        }
    }

    debug_assert!(c == 0);

    m3
}

/// Multiplies a digit slice by a single digit.
/// The result is one digit longer than `m` to give room to the carry.
pub fn mul_by_digit(m: &[Digit], d: Digit) -> DigitBuf {
    let mut m3 = DigitBuf::new_zeroed(m.len() + 1);
    let mut iter3 = m3.iter_mut().rev();
    let mut c = 0;

    for (a, x) in m.iter().rev().zip(iter3.by_ref()) {
        let v = a * d + c;
        *x = v % RADIX as Digit;
        c = v / RADIX as Digit;
    }

    if let Some(x) = iter3.next() {
        *x = c;
    }

    m3
}
