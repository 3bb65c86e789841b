//! # Domain Errors
//!
//! Error types for business rule violations.
//!
//! These errors are raised while constructing value objects from user input
//! (addresses, parcels, amounts). Computation edge cases such as a zero retail
//! price or a missing delivery-day count are handled by the pure services and
//! never surface here.

use crate::domain::value_objects::arithmetic::ArithmeticError;
use thiserror::Error;

/// Error type for domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required field was missing or blank.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A field that must be numeric could not be parsed.
    #[error("field {field} must be numeric, got {value:?}")]
    NotNumeric {
        /// Field path, e.g. `parcel.length`.
        field: String,
        /// The raw value received.
        value: String,
    },

    /// A money amount was negative.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Parcel dimensions or weight were out of range.
    #[error("invalid parcel: {0}")]
    InvalidParcel(String),

    /// Arithmetic failure while deriving a value.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Creates a not-numeric error.
    #[must_use]
    pub fn not_numeric(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NotNumeric {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an invalid parcel error.
    #[must_use]
    pub fn invalid_parcel(message: impl Into<String>) -> Self {
        Self::InvalidParcel(message.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
