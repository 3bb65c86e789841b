//! # Address
//!
//! Postal address as submitted by the dashboard and returned by the provider.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Default country code when none is supplied.
pub const DEFAULT_COUNTRY: &str = "US";

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

/// A postal address.
///
/// Destination addresses for a quick rate quote only need a ZIP code and
/// country, so most fields are optional. Which fields are required depends
/// on the operation; see the `validate_*` methods.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    /// Provider-assigned id, present on verified addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Recipient or sender name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// First street line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,
    /// Second street line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    /// City.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or province code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// ZIP or postal code.
    #[serde(default)]
    pub zip: String,
    /// ISO country code.
    #[serde(default = "default_country")]
    pub country: String,
    /// Contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Address {
    /// Creates an address with only a ZIP code and country.
    #[must_use]
    pub fn postal(zip: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            zip: zip.into(),
            country: country.into(),
            ..Self::default()
        }
    }

    /// Creates a full street address in the default country.
    #[must_use]
    pub fn street(
        street1: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            street1: Some(street1.into()),
            city: Some(city.into()),
            state: Some(state.into()),
            zip: zip.into(),
            country: default_country(),
            ..Self::default()
        }
    }

    /// Validates an origin address: street, city, state and ZIP are required.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` naming the first missing field,
    /// prefixed with `prefix` (e.g. `from_address`).
    pub fn validate_origin(&self, prefix: &str) -> DomainResult<()> {
        require(self.street1.as_deref(), prefix, "street1")?;
        require(self.city.as_deref(), prefix, "city")?;
        require(self.state.as_deref(), prefix, "state")?;
        require(Some(self.zip.as_str()), prefix, "zip")?;
        require(Some(self.country.as_str()), prefix, "country")
    }

    /// Validates a destination address: ZIP and country are required.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` naming the missing field.
    pub fn validate_destination(&self, prefix: &str) -> DomainResult<()> {
        require(Some(self.zip.as_str()), prefix, "zip")?;
        require(Some(self.country.as_str()), prefix, "country")
    }

    /// Validates an address submitted for verification: street and ZIP are required.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` naming the missing field.
    pub fn validate_for_verification(&self) -> DomainResult<()> {
        require(self.street1.as_deref(), "address", "street1")?;
        require(Some(self.zip.as_str()), "address", "zip")
    }
}

fn require(value: Option<&str>, prefix: &str, field: &str) -> DomainResult<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(DomainError::missing_field(format!("{prefix}.{field}"))),
    }
}
