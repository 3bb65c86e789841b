//! # Address Verification
//!
//! Provider verdict on a submitted address.

use crate::domain::value_objects::Address;
use serde::{Deserialize, Serialize};

/// A single problem the provider found with an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationIssue {
    /// Provider error code, e.g. `E.ADDRESS.NOT_FOUND`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Offending field, if the provider names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Human readable message.
    pub message: String,
}

/// Result of verifying an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressVerification {
    /// True if the provider confirmed the address is deliverable.
    pub verified: bool,
    /// Problems found; empty when verified.
    pub errors: Vec<VerificationIssue>,
    /// Normalized address as returned by the provider.
    pub address: Address,
}

impl AddressVerification {
    /// Creates a successful verification.
    #[must_use]
    pub fn verified(address: Address) -> Self {
        Self {
            verified: true,
            errors: Vec::new(),
            address,
        }
    }

    /// Creates a failed verification.
    #[must_use]
    pub fn rejected(address: Address, errors: Vec<VerificationIssue>) -> Self {
        Self {
            verified: false,
            errors,
            address,
        }
    }
}
