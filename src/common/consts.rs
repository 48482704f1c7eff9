//! Static constants.

use crate::num::BigDecimal;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref ONE: BigDecimal = BigDecimal::from_u8(1);
    pub static ref HALF: BigDecimal = BigDecimal::parse("0.5").unwrap();
}
