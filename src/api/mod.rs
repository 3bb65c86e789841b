//! # API Layer
//!
//! HTTP surface of the service.
//!
//! - [`rest`]: JSON endpoints built on axum

pub mod rest;
