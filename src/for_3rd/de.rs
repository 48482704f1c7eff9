//! Deserialization of BigDecimal.

use crate::num::BigDecimal;
use core::fmt::Formatter;
use serde::de::{Deserialize, Deserializer, Error, Unexpected, Visitor};

struct BigDecimalVisitor;

impl Visitor<'_> for BigDecimalVisitor {
    type Value = BigDecimal;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        formatter.write_str("a string or an integer representing a decimal number")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        BigDecimal::parse(v).map_err(|_| Error::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(BigDecimal::from_u64(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(BigDecimal::from_i64(v))
    }
}

impl<'de> Deserialize<'de> for BigDecimal {
    /// Deserialize BigDecimal from a string or an integer.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigDecimalVisitor)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_de() {
        let d: BigDecimal = serde_json::from_str("\"-123.450\"").unwrap();
        assert_eq!(d.format(), "-123.450");

        let d: BigDecimal = serde_json::from_str("12345").unwrap();
        assert_eq!(d.format(), "12345");

        let d: BigDecimal = serde_json::from_str("-7").unwrap();
        assert_eq!(d.format(), "-7");

        assert!(serde_json::from_str::<BigDecimal>("\"1.2.3\"").is_err());
        assert!(serde_json::from_str::<BigDecimal>("{}").is_err());
    }
}
