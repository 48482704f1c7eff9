//! Arithmetic operations on BigDecimal.

mod add;
mod div;
mod mul;
mod pow;
mod sqrt;
