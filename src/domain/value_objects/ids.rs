//! # Identifiers
//!
//! String-based identifiers issued by the shipping provider.
//!
//! Provider ids are opaque strings (`shp_...`, `rate_...`). Shipments built
//! from the local placeholder rate set carry a `placeholder_` prefix so they
//! can never be mistaken for purchasable provider shipments.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix for locally generated shipment ids.
pub const PLACEHOLDER_PREFIX: &str = "placeholder_";

/// Identifier of a shipment (a rate-quote session).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentId(String);

impl ShipmentId {
    /// Creates a shipment id from a provider-issued value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh id for a placeholder shipment.
    #[must_use]
    pub fn placeholder() -> Self {
        Self(format!("{PLACEHOLDER_PREFIX}{}", Uuid::new_v4().simple()))
    }

    /// Returns true if this id was generated locally for placeholder rates.
    #[inline]
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.0.starts_with(PLACEHOLDER_PREFIX)
    }

    /// Returns true if the id is non-empty and made only of ASCII letters,
    /// digits and underscores, the alphabet provider and placeholder ids use.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_')
    }

    /// Returns the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a single carrier rate quote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateId(String);

impl RateId {
    /// Creates a rate id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
