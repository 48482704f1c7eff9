//! Serialization of BigDecimal.

use crate::num::BigDecimal;
use serde::ser::{Serialize, Serializer};

impl Serialize for BigDecimal {
    /// Serialize `self` in the canonical string form.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_ser() {
        let d = BigDecimal::parse("-123.450").unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"-123.450\"");

        let d = BigDecimal::new();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"0\"");
    }
}
