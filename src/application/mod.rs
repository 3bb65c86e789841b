//! # Application Layer
//!
//! Use cases and the services they compose.
//!
//! - [`use_cases`]: quote, re-render, validate address, purchase label
//! - [`services`]: comparison engine, ranking, fallback rates
//! - [`context`]: per-request caller identity
//! - [`error`]: [`ApplicationError`](error::ApplicationError)

pub mod context;
pub mod error;
pub mod services;
pub mod use_cases;

pub use context::RequestContext;
pub use error::{ApplicationError, ApplicationResult};
