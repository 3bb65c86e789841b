//! # Numeric Input
//!
//! Form values that may arrive as JSON numbers or as strings.
//!
//! Dashboard forms post whatever the user typed: `"25"`, `25`, `" 12.5 "`,
//! or an empty string. [`NumericInput`] keeps the raw value and parses it on
//! demand with standard decimal parsing.

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user-supplied numeric value, either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// A JSON number.
    Number(f64),
    /// Free text to be parsed as a decimal.
    Text(String),
}

impl NumericInput {
    /// Parses the input as a decimal.
    ///
    /// Returns `None` for blank, non-numeric or non-finite input.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) if n.is_finite() => Decimal::from_f64(*n),
            Self::Number(_) => None,
            Self::Text(s) => Decimal::from_str(s.trim()).ok(),
        }
    }

    /// Parses the input, naming the field in the error on failure.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotNumeric` if the value does not parse.
    pub fn require_decimal(&self, field: &str) -> DomainResult<Decimal> {
        self.to_decimal()
            .ok_or_else(|| DomainError::not_numeric(field, self.to_string()))
    }
}

impl Default for NumericInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<Decimal> for NumericInput {
    fn from(value: Decimal) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_strings() {
        assert_eq!(
            NumericInput::Number(25.0).to_decimal(),
            Some(Decimal::new(25, 0))
        );
        assert_eq!(
            NumericInput::from(" 12.5 ").to_decimal(),
            Some(Decimal::new(125, 1))
        );
    }

    #[test]
    fn blank_and_garbage_do_not_parse() {
        assert_eq!(NumericInput::default().to_decimal(), None);
        assert_eq!(NumericInput::from("abc").to_decimal(), None);
        assert_eq!(NumericInput::Number(f64::NAN).to_decimal(), None);
    }

    #[test]
    fn deserializes_untagged() {
        let n: NumericInput = serde_json::from_str("10").unwrap();
        let s: NumericInput = serde_json::from_str("\"10\"").unwrap();
        assert_eq!(n.to_decimal(), s.to_decimal());
    }

    #[test]
    fn require_decimal_names_field() {
        let err = NumericInput::from("wide")
            .require_decimal("parcel.width")
            .unwrap_err();
        assert!(err.to_string().contains("parcel.width"));
    }
}
