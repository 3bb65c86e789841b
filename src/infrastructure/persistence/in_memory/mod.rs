//! # In-Memory Repositories
//!
//! - [`InMemoryShipmentRepository`]: bounded shipment cache
//!
//! ## Thread Safety
//!
//! Storage sits behind `Arc<RwLock<..>>` and clones share it.

pub mod shipment_repository;

pub use shipment_repository::{DEFAULT_CAPACITY, InMemoryShipmentRepository};
