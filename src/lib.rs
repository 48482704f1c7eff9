//! Arbitrary-precision signed decimal arithmetic.
//!
//! A [BigDecimal] holds an array of decimal digits, the number of digits after the
//! decimal point, and the sign. Addition, subtraction, and multiplication are exact;
//! division, square root, and power truncate the result to a caller-chosen scale
//! without rounding. Values are immutable, every operation returns a new value.
//!
//! ## Examples
//!
//! ``` rust
//! use bigdec::BigDecimal;
//!
//! // length of the diagonal of a unit square
//! let d = BigDecimal::from_u8(2).sqrt(10).unwrap();
//! assert_eq!(d.format(), "1.4142135623");
//!
//! // arithmetic on values parsed from strings
//! let price: BigDecimal = "19.99".parse().unwrap();
//! let count = BigDecimal::from_u32(3);
//! assert_eq!((&price * &count).format(), "59.97");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::collapsible_else_if)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod common;
mod defs;
mod ext;
mod for_3rd;
mod num;
mod ops;
mod parser;
mod strop;

pub use crate::defs::Digit;
pub use crate::defs::Error;
pub use crate::defs::Sign;
pub use crate::defs::Word;
pub use crate::defs::RADIX;
pub use crate::defs::WORD_MUL_DIGITS;
pub use crate::num::BigDecimal;
