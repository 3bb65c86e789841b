//! # Infrastructure Layer
//!
//! Adapters to the outside world.
//!
//! - [`carriers`]: upstream shipping API
//! - [`persistence`]: shipment cache

pub mod carriers;
pub mod persistence;
