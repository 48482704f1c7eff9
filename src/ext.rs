//! Standard operator and conversion traits for BigDecimal.

use crate::defs::Error;
use crate::num::BigDecimal;
use core::cmp::Ordering;
use core::cmp::PartialEq;
use core::cmp::PartialOrd;
use core::fmt::Display;
use core::fmt::Formatter;
use core::ops::Add;
use core::ops::AddAssign;
use core::ops::Div;
use core::ops::DivAssign;
use core::ops::Mul;
use core::ops::MulAssign;
use core::ops::Neg;
use core::ops::Rem;
use core::ops::RemAssign;
use core::ops::Sub;
use core::ops::SubAssign;
use core::str::FromStr;

impl Add for BigDecimal {
    type Output = BigDecimal;
    fn add(self, rhs: Self) -> Self::Output {
        BigDecimal::add(&self, &rhs)
    }
}

impl Add for &BigDecimal {
    type Output = BigDecimal;
    fn add(self, rhs: Self) -> Self::Output {
        BigDecimal::add(self, rhs)
    }
}

impl AddAssign for BigDecimal {
    fn add_assign(&mut self, rhs: Self) {
        *self = BigDecimal::add(self, &rhs)
    }
}

impl AddAssign<&BigDecimal> for BigDecimal {
    fn add_assign(&mut self, rhs: &BigDecimal) {
        *self = BigDecimal::add(self, rhs)
    }
}

impl Sub for BigDecimal {
    type Output = BigDecimal;
    fn sub(self, rhs: Self) -> Self::Output {
        BigDecimal::sub(&self, &rhs)
    }
}

impl Sub for &BigDecimal {
    type Output = BigDecimal;
    fn sub(self, rhs: Self) -> Self::Output {
        BigDecimal::sub(self, rhs)
    }
}

impl SubAssign for BigDecimal {
    fn sub_assign(&mut self, rhs: Self) {
        *self = BigDecimal::sub(self, &rhs)
    }
}

impl SubAssign<&BigDecimal> for BigDecimal {
    fn sub_assign(&mut self, rhs: &BigDecimal) {
        *self = BigDecimal::sub(self, rhs)
    }
}

impl Mul for BigDecimal {
    type Output = BigDecimal;
    fn mul(self, rhs: Self) -> Self::Output {
        BigDecimal::mul(&self, &rhs)
    }
}

impl Mul for &BigDecimal {
    type Output = BigDecimal;
    fn mul(self, rhs: Self) -> Self::Output {
        BigDecimal::mul(self, rhs)
    }
}

impl MulAssign for BigDecimal {
    fn mul_assign(&mut self, rhs: Self) {
        *self = BigDecimal::mul(self, &rhs)
    }
}

impl MulAssign<&BigDecimal> for BigDecimal {
    fn mul_assign(&mut self, rhs: &BigDecimal) {
        *self = BigDecimal::mul(self, rhs)
    }
}

// The scale of a quotient or a remainder is the largest of the scales of the operands.
fn div_scale(d1: &BigDecimal, d2: &BigDecimal) -> usize {
    d1.scale().max(d2.scale())
}

impl Div for BigDecimal {
    type Output = BigDecimal;
    fn div(self, rhs: Self) -> Self::Output {
        let scale = div_scale(&self, &rhs);
        BigDecimal::div(&self, &rhs, scale).expect("division by zero")
    }
}

impl Div for &BigDecimal {
    type Output = BigDecimal;
    fn div(self, rhs: Self) -> Self::Output {
        let scale = div_scale(self, rhs);
        BigDecimal::div(self, rhs, scale).expect("division by zero")
    }
}

impl DivAssign for BigDecimal {
    fn div_assign(&mut self, rhs: Self) {
        let scale = div_scale(self, &rhs);
        *self = BigDecimal::div(self, &rhs, scale).expect("division by zero")
    }
}

impl DivAssign<&BigDecimal> for BigDecimal {
    fn div_assign(&mut self, rhs: &BigDecimal) {
        let scale = div_scale(self, rhs);
        *self = BigDecimal::div(self, rhs, scale).expect("division by zero")
    }
}

impl Rem for BigDecimal {
    type Output = BigDecimal;
    fn rem(self, rhs: Self) -> Self::Output {
        let scale = div_scale(&self, &rhs);
        BigDecimal::rem(&self, &rhs, scale).expect("division by zero")
    }
}

impl Rem for &BigDecimal {
    type Output = BigDecimal;
    fn rem(self, rhs: Self) -> Self::Output {
        let scale = div_scale(self, rhs);
        BigDecimal::rem(self, rhs, scale).expect("division by zero")
    }
}

impl RemAssign for BigDecimal {
    fn rem_assign(&mut self, rhs: Self) {
        let scale = div_scale(self, &rhs);
        *self = BigDecimal::rem(self, &rhs, scale).expect("division by zero")
    }
}

impl RemAssign<&BigDecimal> for BigDecimal {
    fn rem_assign(&mut self, rhs: &BigDecimal) {
        let scale = div_scale(self, rhs);
        *self = BigDecimal::rem(self, rhs, scale).expect("division by zero")
    }
}

impl Neg for BigDecimal {
    type Output = BigDecimal;
    fn neg(self) -> Self::Output {
        BigDecimal::neg(&self)
    }
}

impl Neg for &BigDecimal {
    type Output = BigDecimal;
    fn neg(self) -> Self::Output {
        BigDecimal::neg(self)
    }
}

impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        BigDecimal::cmp(self, other) == 0
    }
}

impl Eq for BigDecimal {}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(BigDecimal::cmp(self, other).cmp(&0))
    }
}

impl PartialEq<i64> for BigDecimal {
    fn eq(&self, other: &i64) -> bool {
        if self.frac_digits().iter().any(|&d| d != 0) {
            return false;
        }

        match self.to_i64() {
            Ok(v) => v == *other,
            Err(_) => false,
        }
    }
}

impl PartialEq<BigDecimal> for i64 {
    fn eq(&self, other: &BigDecimal) -> bool {
        other.eq(self)
    }
}

impl PartialEq<i128> for BigDecimal {
    fn eq(&self, other: &i128) -> bool {
        if self.frac_digits().iter().any(|&d| d != 0) {
            return false;
        }

        match self.to_i128() {
            Ok(v) => v == *other,
            Err(_) => false,
        }
    }
}

impl PartialEq<BigDecimal> for i128 {
    fn eq(&self, other: &BigDecimal) -> bool {
        other.eq(self)
    }
}

impl Display for BigDecimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.write_str(f)
    }
}

impl Default for BigDecimal {
    fn default() -> Self {
        BigDecimal::new()
    }
}

impl FromStr for BigDecimal {
    type Err = Error;

    /// Returns the parsed number or an error.
    fn from_str(src: &str) -> Result<BigDecimal, Self::Err> {
        BigDecimal::parse(src)
    }
}

macro_rules! impl_from_int {
    ($t:ty, $from:ident, $to:ident) => {
        impl From<$t> for BigDecimal {
            fn from(v: $t) -> Self {
                BigDecimal::$from(v)
            }
        }

        impl TryFrom<&BigDecimal> for $t {
            type Error = Error;

            /// Returns the integer part of the number, or an error if it does not fit the target type.
            fn try_from(v: &BigDecimal) -> Result<Self, Self::Error> {
                v.$to()
            }
        }
    };
}

impl_from_int!(i8, from_i8, to_i8);
impl_from_int!(i16, from_i16, to_i16);
impl_from_int!(i32, from_i32, to_i32);
impl_from_int!(i64, from_i64, to_i64);
impl_from_int!(i128, from_i128, to_i128);
impl_from_int!(u8, from_u8, to_u8);
impl_from_int!(u16, from_u16, to_u16);
impl_from_int!(u32, from_u32, to_u32);
impl_from_int!(u64, from_u64, to_u64);
impl_from_int!(u128, from_u128, to_u128);
