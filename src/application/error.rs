//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)          - Invalid addresses, parcels, amounts
//! ├── Provider(ProviderError)      - Upstream shipping API failures
//! ├── Repository(RepositoryError)  - Shipment cache failures
//! ├── Validation(String)           - Input validation failures
//! ├── NotFound                     - Unknown shipment or rate
//! ├── Unauthorized                 - No authenticated user on the request
//! ├── PlaceholderPurchase          - Purchase attempted on placeholder rates
//! └── Internal(String)
//! ```
//!
//! # Examples
//!
//! ```
//! use parcel_rates::application::error::ApplicationError;
//!
//! let err = ApplicationError::validation("insurance must not be negative");
//! assert!(err.is_validation());
//!
//! let err = ApplicationError::not_found("Shipment", "shp_123");
//! assert!(err.is_not_found());
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::carriers::error::ProviderError;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from input validation or arithmetic.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Upstream shipping provider error.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Shipment cache error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("not found: {resource_type} with id {id}")]
    NotFound {
        /// Type of resource.
        resource_type: String,
        /// Resource identifier.
        id: String,
    },

    /// No authenticated user on the request.
    #[error("unauthorized")]
    Unauthorized,

    /// Placeholder rates cannot be bought.
    #[error("placeholder shipment cannot be purchased: {0}")]
    PlaceholderPurchase(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    /// Creates a placeholder purchase error.
    #[must_use]
    pub fn placeholder_purchase(shipment_id: impl Into<String>) -> Self {
        Self::PlaceholderPurchase(shipment_id.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
            || matches!(self, Self::Repository(e) if e.is_not_found())
    }

    /// Returns true if the request itself was invalid.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Domain(_) | Self::PlaceholderPurchase(_)
        )
    }

    /// Returns true for missing or rejected credentials, local or upstream.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
            || matches!(self, Self::Provider(e) if e.is_authentication())
    }

    /// Stable machine-readable code for API responses.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Domain(_) | Self::Validation(_) => "VALIDATION_ERROR",
            Self::Provider(e) if e.is_authentication() => "PROVIDER_AUTHENTICATION",
            Self::Provider(e) if e.is_client_error() => "PROVIDER_REJECTED",
            Self::Provider(_) => "PROVIDER_ERROR",
            Self::Repository(e) if e.is_not_found() => "NOT_FOUND",
            Self::Repository(_) | Self::Internal(_) => "INTERNAL_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::PlaceholderPurchase(_) => "PLACEHOLDER_SHIPMENT",
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error() {
        let err = ApplicationError::validation("bad input");
        assert!(err.is_validation());
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("bad input"));
    }

    #[test]
    fn domain_error_is_validation() {
        let err: ApplicationError = DomainError::missing_field("to_address.zip").into();
        assert!(err.is_validation());
    }

    #[test]
    fn not_found_error() {
        let err = ApplicationError::not_found("Shipment", "shp_1");
        assert!(err.is_not_found());
        assert_eq!(err.code(), "NOT_FOUND");
        assert!(err.to_string().contains("shp_1"));
    }

    #[test]
    fn repository_not_found_is_not_found() {
        let err: ApplicationError = RepositoryError::not_found("Shipment", "shp_1").into();
        assert!(err.is_not_found());
    }

    #[test]
    fn provider_authentication_is_unauthorized() {
        let err: ApplicationError = ProviderError::authentication("bad key").into();
        assert!(err.is_unauthorized());
        assert_eq!(err.code(), "PROVIDER_AUTHENTICATION");
    }

    #[test]
    fn provider_codes() {
        let rejected: ApplicationError = ProviderError::invalid_request("bad zip").into();
        assert_eq!(rejected.code(), "PROVIDER_REJECTED");
        assert!(!rejected.is_unauthorized());

        let down: ApplicationError = ProviderError::timeout("slow").into();
        assert_eq!(down.code(), "PROVIDER_ERROR");
    }

    #[test]
    fn placeholder_purchase() {
        let err = ApplicationError::placeholder_purchase("placeholder_abc");
        assert!(err.is_validation());
        assert_eq!(err.code(), "PLACEHOLDER_SHIPMENT");
    }

    #[test]
    fn unauthorized() {
        assert!(ApplicationError::unauthorized().is_unauthorized());
        assert_eq!(ApplicationError::Internal("x".into()).code(), "INTERNAL_ERROR");
    }
}
