//! Buffer for holding the digits of a number.

use crate::defs::Digit;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice::SliceIndex;
use smallvec::SmallVec;

const STATIC_ALLOCATION: usize = 20;

/// Buffer for holding the digits of a number, most significant digit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitBuf {
    inner: SmallVec<[Digit; STATIC_ALLOCATION]>,
}

impl DigitBuf {
    /// New buffer of length `sz` filled with zeroes.
    #[inline]
    pub fn new_zeroed(sz: usize) -> Self {
        let mut inner = SmallVec::new();
        inner.resize(sz, 0);
        DigitBuf { inner }
    }

    /// New buffer holding a copy of `digits`.
    #[inline]
    pub fn from_digits(digits: &[Digit]) -> Self {
        DigitBuf {
            inner: SmallVec::from_slice(digits),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Prepend a single digit before the most significant digit.
    #[inline]
    pub fn prepend(&mut self, d: Digit) {
        self.inner.insert(0, d);
    }

    /// Prepend `n` zero digits before the most significant digit.
    pub fn prepend_zeroes(&mut self, n: usize) {
        if n > 0 {
            let sz = self.len();
            self.inner.resize(sz + n, 0);
            self.inner.rotate_right(n);
        }
    }

    /// Append `n` zero digits after the least significant digit.
    pub fn append_zeroes(&mut self, n: usize) {
        let sz = self.len();
        self.inner.resize(sz + n, 0);
    }

    /// Remove `n` digits from the least significant end.
    pub fn trunc_tail(&mut self, n: usize) {
        let sz = self.len();
        debug_assert!(n <= sz);
        self.inner.truncate(sz - n);
    }

    // Remove leading digits containing zeroes, but keep at least `min_len` digits.
    pub fn trunc_leading_zeroes(&mut self, min_len: usize) {
        let mut n = 0;

        for v in self.inner.iter() {
            if *v == 0 && self.inner.len() - n > min_len {
                n += 1;
            } else {
                break;
            }
        }

        if n > 0 {
            let sz = self.len();
            self.inner.rotate_left(n);
            self.inner.truncate(sz - n);
        }
    }

    /// Return true if all digits are zero.
    pub fn is_all_zeroes(&self) -> bool {
        self.inner.iter().all(|&d| d == 0)
    }
}

impl<I: SliceIndex<[Digit]>> IndexMut<I> for DigitBuf {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl<I: SliceIndex<[Digit]>> Index<I> for DigitBuf {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.inner.index(index)
    }
}

impl Deref for DigitBuf {
    type Target = [Digit];

    #[inline]
    fn deref(&self) -> &[Digit] {
        self.inner.deref()
    }
}

impl DerefMut for DigitBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Digit] {
        self.inner.deref_mut()
    }
}
