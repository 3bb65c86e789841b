//! # Persistence Layer
//!
//! Short-lived storage for quoted shipments.
//!
//! ## Repository Traits (Ports)
//!
//! - [`ShipmentRepository`]: storage for quoted shipments
//!
//! ## Implementations
//!
//! - `in_memory`: bounded in-memory cache

pub mod in_memory;
pub mod traits;

pub use traits::{RepositoryError, RepositoryResult, ShipmentRepository};
