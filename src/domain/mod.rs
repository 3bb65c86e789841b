//! # Domain Layer
//!
//! Rate data, shipment inputs and the pure pricing calculations.
//!
//! Nothing in this layer performs I/O.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
