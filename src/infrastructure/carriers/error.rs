//! # Provider Errors
//!
//! Error types for shipping provider operations.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::infrastructure::carriers::error::ProviderError;
//!
//! let error = ProviderError::timeout("Request timed out after 5000ms");
//! assert!(!error.is_client_error());
//!
//! let error = ProviderError::authentication("Invalid API key");
//! assert!(error.is_client_error());
//! ```

use thiserror::Error;

/// Error type for shipping provider operations.
///
/// Represents failures talking to the upstream shipping API: transport
/// problems, rejected credentials and requests the provider refused.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Request timed out.
    #[error("provider timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds.
        timeout_ms: Option<u64>,
    },

    /// Network or connection error, including upstream 5xx responses.
    #[error("provider connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Missing or rejected API credentials.
    #[error("provider authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("provider rate limit exceeded: {message}")]
    RateLimited {
        /// Error message.
        message: String,
    },

    /// The provider rejected the request parameters.
    #[error("provider invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
        /// Provider error code, e.g. `ADDRESS.VERIFY.FAILURE`.
        error_code: Option<String>,
    },

    /// The referenced shipment or rate does not exist upstream.
    #[error("provider resource not found: {message}")]
    NotFound {
        /// Error message.
        message: String,
    },

    /// Response could not be understood.
    #[error("provider protocol error: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },

    /// Local failure before a request was made.
    #[error("provider internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl ProviderError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a rate limited error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            error_code: None,
        }
    }

    /// Creates an invalid request error with the provider's error code.
    #[must_use]
    pub fn invalid_request_with_code(
        message: impl Into<String>,
        error_code: impl Into<String>,
    ) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            error_code: Some(error_code.into()),
        }
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if the caller's request or credentials were at fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest { .. } | Self::Authentication { .. } | Self::NotFound { .. }
        )
    }

    /// Returns true for credential failures.
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Returns the provider error code, if any.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::InvalidRequest { error_code, .. } => error_code.as_deref(),
            _ => None,
        }
    }

    /// Returns the bare message without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Timeout { message, .. }
            | Self::Connection { message }
            | Self::Authentication { message }
            | Self::RateLimited { message }
            | Self::InvalidRequest { message, .. }
            | Self::NotFound { message }
            | Self::Protocol { message }
            | Self::Internal { message } => message,
        }
    }
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
