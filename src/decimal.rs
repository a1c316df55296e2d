//! Exact decimal parsing and canonical serialization
//!
//! All prices and amounts travel as strings on the wire and are carried as
//! `rust_decimal::Decimal` internally. Nothing on the value path touches
//! binary floating point. Trailing zeros from the input are preserved in the
//! internal representation and stripped only when a value is serialized back
//! out.

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// A price or amount string that could not be parsed as a decimal
#[derive(Debug, Clone, Error)]
#[error("invalid decimal in `{field}`: `{value}`")]
pub struct InvalidDecimal {
    /// Name of the wire field the value came from
    pub field: &'static str,
    /// The raw string as received
    pub value: String,
}

/// Parse a wire decimal string (optional sign, integer part, optional
/// fractional part)
pub fn parse(field: &'static str, raw: &str) -> Result<Decimal, InvalidDecimal> {
    Decimal::from_str(raw).map_err(|_| InvalidDecimal {
        field,
        value: raw.to_string(),
    })
}

/// Canonical output form: minimal representation with no trailing fractional
/// zeros and no trailing `.`
///
/// `"63500.00"` serializes as `"63500"`, `"0.00230"` as `"0.0023"`.
/// Consumers compare these strings byte-for-byte.
pub fn canonical(value: &Decimal) -> String {
    value.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain_and_signed() {
        assert_eq!(parse("amount", "0.00230").unwrap(), dec!(0.0023));
        assert_eq!(parse("amount", "63500.00").unwrap(), dec!(63500));
        assert_eq!(parse("amount", "-2.5").unwrap(), dec!(-2.5));
        assert_eq!(parse("amount", "+4").unwrap(), dec!(4));
        assert_eq!(parse("amount", "007").unwrap(), dec!(7));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse("limit_price", "abc").unwrap_err();
        assert_eq!(err.field, "limit_price");
        assert_eq!(err.value, "abc");
        assert!(parse("limit_price", "").is_err());
        assert!(parse("limit_price", "1.2.3").is_err());
    }

    #[test]
    fn test_canonical_strips_trailing_zeros() {
        assert_eq!(canonical(&parse("x", "0.00230").unwrap()), "0.0023");
        assert_eq!(canonical(&parse("x", "63500.00").unwrap()), "63500");
        assert_eq!(canonical(&parse("x", "4.5000").unwrap()), "4.5");
        assert_eq!(canonical(&parse("x", "0").unwrap()), "0");
    }

    #[test]
    fn test_canonical_survives_arithmetic() {
        let a = parse("x", "6.34500").unwrap();
        let b = parse("x", "2.345").unwrap();
        assert_eq!(canonical(&(a - b)), "4");
    }
}
