//! # Request Context
//!
//! Per-request caller information passed explicitly into use cases.

use crate::application::error::{ApplicationError, ApplicationResult};
use serde::{Deserialize, Serialize};

/// Caller identity for one request.
///
/// The user id is set by the authenticating proxy in front of the service;
/// an anonymous context has none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    user_id: Option<String>,
}

impl RequestContext {
    /// Creates an anonymous context.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Creates a context for an authenticated user. Blank ids are anonymous.
    #[must_use]
    pub fn authenticated(user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let trimmed = user_id.trim();
        Self {
            user_id: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    /// Returns the user id, if any.
    #[inline]
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Returns the user id or fails with `Unauthorized`.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Unauthorized` for an anonymous context.
    pub fn require_user(&self) -> ApplicationResult<&str> {
        self.user_id().ok_or_else(ApplicationError::unauthorized)
    }
}
