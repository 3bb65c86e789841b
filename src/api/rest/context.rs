//! # Request Context Extraction
//!
//! Builds a [`RequestContext`] from the `x-authenticated-user` header set by
//! the authenticating proxy. A missing or unreadable header yields an
//! anonymous context; use cases decide whether that is acceptable.

use crate::application::context::RequestContext;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

/// Header carrying the authenticated user id.
pub const AUTHENTICATED_USER_HEADER: &str = "x-authenticated-user";

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .headers
            .get(AUTHENTICATED_USER_HEADER)
            .and_then(|value| value.to_str().ok());

        Ok(match user {
            Some(user) => RequestContext::authenticated(user),
            None => RequestContext::anonymous(),
        })
    }
}
