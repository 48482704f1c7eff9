//! BigDecimal definition, comparison, and number manipulation operations.

use crate::common::buf::DigitBuf;
use crate::defs::Digit;
use crate::defs::Error;
use crate::defs::Sign;

/// A signed decimal number with an arbitrary number of digits before and after
/// the decimal point.
///
/// The digits are stored most significant first; `scale` is the number of digits
/// after the decimal point. Values are immutable: every operation builds a new number
/// and leaves the operands untouched.
#[derive(Debug, Clone)]
pub struct BigDecimal {
    pub(crate) s: Sign,
    pub(crate) m: DigitBuf,
    pub(crate) scale: usize,
}

impl BigDecimal {
    /// Returns a new number with value of 0.
    pub fn new() -> Self {
        BigDecimal {
            s: Sign::Pos,
            m: DigitBuf::from_digits(&[0]),
            scale: 0,
        }
    }

    // Builds a number from the given parts and brings it to the canonical form:
    // the integer part contains at least one digit and no superfluous leading zeroes,
    // zero is always positive.
    pub(crate) fn from_raw_parts(s: Sign, mut m: DigitBuf, scale: usize) -> Self {
        debug_assert!(m.len() >= scale);

        if m.is_all_zeroes() {
            return Self::new();
        }

        if m.len() == scale {
            m.prepend(0);
        }

        m.trunc_leading_zeroes(scale + 1);

        BigDecimal { s, m, scale }
    }

    /// Returns the sign of `self`.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Returns the number of digits after the decimal point.
    #[inline]
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Returns true if `self` is zero, the sign is not taken into account.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.m.is_all_zeroes()
    }

    /// Returns the digits of `self` most significant first, the scale, and the sign.
    pub fn as_raw_parts(&self) -> (&[Digit], usize, Sign) {
        (&self.m, self.scale, self.s)
    }

    // Number of digits before the decimal point. At least 1 for a canonical value.
    #[inline]
    pub(crate) fn int_len(&self) -> usize {
        self.m.len() - self.scale
    }

    #[inline]
    pub(crate) fn int_digits(&self) -> &[Digit] {
        &self.m[..self.int_len()]
    }

    #[inline]
    pub(crate) fn frac_digits(&self) -> &[Digit] {
        &self.m[self.int_len()..]
    }

    /// Returns `self` with the opposite sign.
    pub fn neg(&self) -> Self {
        let mut ret = self.clone();
        if !ret.is_zero() {
            ret.s = ret.s.invert();
        }
        ret
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        let mut ret = self.clone();
        ret.s = Sign::Pos;
        ret
    }

    /// Returns `self` with the number of digits after the decimal point changed to `scale`.
    /// When the scale grows, the fraction is padded with trailing zeroes.
    /// When the scale shrinks, the superfluous digits are cut off without rounding.
    /// A value of zero keeps the canonical form whatever the requested scale.
    pub fn rescale(&self, scale: usize) -> Self {
        if scale == self.scale {
            return self.clone();
        }

        let mut m = self.m.clone();

        if scale > self.scale {
            m.append_zeroes(scale - self.scale);
        } else {
            m.trunc_tail(self.scale - scale);
        }

        Self::from_raw_parts(self.s, m, scale)
    }

    /// Compares `self` to `d2`.
    /// Returns a positive value if `self` is greater than `d2`, a negative value
    /// if `self` is smaller than `d2`, 0 otherwise.
    /// Values of a different scale but equal magnitude are equal, e.g. "0.1" and "0.10".
    pub fn cmp(&self, d2: &Self) -> i32 {
        Self::cmp_ext(self, d2, false)
    }

    /// Compares the absolute value of `self` to the absolute value of `d2`.
    /// Returns a positive value if `|self|` is greater than `|d2|`, a negative value
    /// if `|self|` is smaller than `|d2|`, 0 otherwise.
    pub fn abs_cmp(&self, d2: &Self) -> i32 {
        Self::cmp_ext(self, d2, true)
    }

    fn cmp_ext(d1: &Self, d2: &Self, ignore_sign: bool) -> i32 {
        // different signs decide immediately
        if !ignore_sign && d1.s != d2.s {
            return d1.s.to_int() as i32;
        }

        let k = if !ignore_sign && d1.s.is_negative() { -1 } else { 1 };

        // longer integer part wins
        let il1 = d1.int_len();
        let il2 = d2.int_len();
        if il1 != il2 {
            return if il1 > il2 { k } else { -k };
        }

        // integer digits left to right
        for (a, b) in d1.int_digits().iter().zip(d2.int_digits().iter()) {
            if a != b {
                return if a > b { k } else { -k };
            }
        }

        // fraction digits over the shorter scale
        let f1 = d1.frac_digits();
        let f2 = d2.frac_digits();
        for (a, b) in f1.iter().zip(f2.iter()) {
            if a != b {
                return if a > b { k } else { -k };
            }
        }

        // the tail of the longer scaled operand decides
        if d1.scale > d2.scale {
            if f1[f2.len()..].iter().any(|&d| d != 0) {
                return k;
            }
        } else if d2.scale > d1.scale && f2[f1.len()..].iter().any(|&d| d != 0) {
            return -k;
        }

        0
    }

    /// Returns a random normalized value with the integer part of up to `max_int_len` digits,
    /// and the scale of up to `max_scale` digits.
    #[cfg(feature = "random")]
    pub fn random_normal(max_int_len: usize, max_scale: usize) -> Self {
        let il = rand::random::<usize>() % max_int_len.max(1) + 1;
        let scale = if max_scale > 0 { rand::random::<usize>() % (max_scale + 1) } else { 0 };

        let mut m = DigitBuf::new_zeroed(il + scale);
        for d in m.iter_mut() {
            *d = rand::random::<u8>() % 10 as Digit;
        }

        let s = if rand::random::<u8>() & 1 == 0 { Sign::Pos } else { Sign::Neg };

        Self::from_raw_parts(s, m, scale)
    }

    fn from_unsigned_internal(v: u128) -> Self {
        if v == 0 {
            return Self::new();
        }

        let mut n = 0;
        let mut t = v;
        while t > 0 {
            t /= 10;
            n += 1;
        }

        let mut m = DigitBuf::new_zeroed(n);
        let mut v = v;
        for d in m.iter_mut().rev() {
            *d = (v % 10) as Digit;
            v /= 10;
        }

        BigDecimal {
            s: Sign::Pos,
            m,
            scale: 0,
        }
    }
}

macro_rules! impl_int_conv {
    ($s:ty, $u:ty, $from_s:ident, $from_u:ident, $to_s:ident, $to_u:ident) => {
        impl BigDecimal {
            /// Constructs BigDecimal from a signed integer value `i`.
            pub fn $from_s(i: $s) -> Self {
                let sign = if i < 0 { Sign::Neg } else { Sign::Pos };
                let mut ret = Self::from_unsigned_internal(i.unsigned_abs() as u128);
                ret.s = if ret.is_zero() { Sign::Pos } else { sign };
                ret
            }

            /// Constructs BigDecimal from an unsigned integer value `u`.
            pub fn $from_u(u: $u) -> Self {
                Self::from_unsigned_internal(u as u128)
            }

            /// Converts `self` to a signed integer value, the fraction is cut off.
            ///
            /// ## Errors
            ///
            ///  - ConversionOverflow: the integer part of `self` does not fit the target type.
            pub fn $to_s(&self) -> Result<$s, Error> {
                let mut acc: $s = 0;
                let neg = self.s.is_negative();

                for &d in self.int_digits() {
                    acc = acc
                        .checked_mul(10)
                        .and_then(|v| {
                            if neg {
                                v.checked_sub(d as $s)
                            } else {
                                v.checked_add(d as $s)
                            }
                        })
                        .ok_or(Error::ConversionOverflow)?;
                }

                Ok(acc)
            }

            /// Converts `self` to an unsigned integer value, the fraction is cut off.
            ///
            /// ## Errors
            ///
            ///  - ConversionOverflow: the integer part of `self` does not fit the target type,
            ///    or `self` is negative.
            pub fn $to_u(&self) -> Result<$u, Error> {
                if self.s.is_negative() {
                    return Err(Error::ConversionOverflow);
                }

                let mut acc: $u = 0;

                for &d in self.int_digits() {
                    acc = acc
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(d as $u))
                        .ok_or(Error::ConversionOverflow)?;
                }

                Ok(acc)
            }
        }
    };
}

impl_int_conv!(i8, u8, from_i8, from_u8, to_i8, to_u8);
impl_int_conv!(i16, u16, from_i16, from_u16, to_i16, to_u16);
impl_int_conv!(i32, u32, from_i32, from_u32, to_i32, to_u32);
impl_int_conv!(i64, u64, from_i64, from_u64, to_i64, to_u64);
impl_int_conv!(i128, u128, from_i128, from_u128, to_i128, to_u128);

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_number() {
        // canonical zero
        let d1 = BigDecimal::new();
        assert!(d1.is_zero());
        assert_eq!(d1.as_raw_parts(), (&[0][..], 0, Sign::Pos));

        // construction from integers
        let d1 = BigDecimal::from_u64(10070);
        assert_eq!(d1.as_raw_parts(), (&[1, 0, 0, 7, 0][..], 0, Sign::Pos));

        let d1 = BigDecimal::from_i32(-321);
        assert_eq!(d1.as_raw_parts(), (&[3, 2, 1][..], 0, Sign::Neg));

        let d1 = BigDecimal::from_i8(0);
        assert!(d1.is_zero());
        assert!(d1.sign().is_positive());

        // normalization drops superfluous integer part zeroes
        let d1 = BigDecimal::from_raw_parts(
            Sign::Neg,
            DigitBuf::from_digits(&[0, 0, 1, 2, 3, 4]),
            2,
        );
        assert_eq!(d1.as_raw_parts(), (&[1, 2, 3, 4][..], 2, Sign::Neg));

        // an empty integer part gets a zero digit
        let d1 = BigDecimal::from_raw_parts(Sign::Pos, DigitBuf::from_digits(&[2, 5]), 2);
        assert_eq!(d1.as_raw_parts(), (&[0, 2, 5][..], 2, Sign::Pos));

        // a zero magnitude collapses to the canonical zero whatever the inputs
        let d1 = BigDecimal::from_raw_parts(Sign::Neg, DigitBuf::from_digits(&[0, 0]), 1);
        assert_eq!(d1.as_raw_parts(), (&[0][..], 0, Sign::Pos));

        // neg and abs
        let d1 = BigDecimal::from_i16(-42);
        assert_eq!(d1.neg().to_i16().unwrap(), 42);
        assert_eq!(d1.abs().to_i16().unwrap(), 42);
        assert!(BigDecimal::new().neg().sign().is_positive());

        // conversion to integers
        let d1 = BigDecimal::parse("-123.99").unwrap();
        assert_eq!(d1.to_i32().unwrap(), -123);
        assert_eq!(d1.to_i8().unwrap(), -123);
        assert_eq!(d1.to_u32().unwrap_err(), Error::ConversionOverflow);

        let d1 = BigDecimal::from_i8(i8::MIN);
        assert_eq!(d1.to_i8().unwrap(), i8::MIN);

        let d1 = BigDecimal::from_u64(10000);
        assert_eq!(d1.to_u8().unwrap_err(), Error::ConversionOverflow);
        assert_eq!(d1.to_u16().unwrap(), 10000);

        let d1 = BigDecimal::from_u16(256);
        assert_eq!(d1.to_u8().unwrap_err(), Error::ConversionOverflow);
        assert_eq!(d1.to_i8().unwrap_err(), Error::ConversionOverflow);

        // rescale up pads with zeroes
        let d1 = BigDecimal::parse("1.5").unwrap().rescale(3);
        assert_eq!(d1.as_raw_parts(), (&[1, 5, 0, 0][..], 3, Sign::Pos));

        // rescale down cuts off without rounding
        let d1 = BigDecimal::parse("-1.999").unwrap().rescale(1);
        assert_eq!(d1.as_raw_parts(), (&[1, 9][..], 1, Sign::Neg));

        let d1 = BigDecimal::parse("0.05").unwrap().rescale(1);
        assert_eq!(d1.as_raw_parts(), (&[0][..], 0, Sign::Pos));
        assert!(d1.is_zero());
    }

    #[test]
    fn test_cmp() {
        let cmp = |s1: &str, s2: &str| BigDecimal::parse(s1).unwrap().cmp(&BigDecimal::parse(s2).unwrap());

        // signs
        assert!(cmp("1", "-1") > 0);
        assert!(cmp("-1", "1") < 0);
        assert!(cmp("-1", "-2") > 0);
        assert!(cmp("-2", "-1") < 0);

        // integer part length
        assert!(cmp("100", "99") > 0);
        assert!(cmp("-100", "-99") < 0);
        assert!(cmp("0.9", "10") < 0);

        // digit by digit
        assert!(cmp("123", "124") < 0);
        assert!(cmp("123.45", "123.44") > 0);

        // scale tails
        assert!(cmp("0.1", "0.10") == 0);
        assert!(cmp("0.1", "0.100001") < 0);
        assert!(cmp("-0.1", "-0.100001") > 0);
        assert!(cmp("5", "5.000") == 0);

        // zero canonicalization
        assert!(cmp("-0", "0") == 0);
        assert!(cmp("0.00", "0") == 0);
        assert!(cmp("0", "0.1") < 0);
        assert!(cmp("0", "-0.1") > 0);

        // magnitude comparison ignores the sign
        let d1 = BigDecimal::parse("-10.5").unwrap();
        let d2 = BigDecimal::parse("10.4").unwrap();
        assert!(d1.abs_cmp(&d2) > 0);
        assert!(d2.abs_cmp(&d1) < 0);
        assert!(d1.abs_cmp(&d1.neg()) == 0);
    }
}
