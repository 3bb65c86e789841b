//! # Repository Traits
//!
//! Port definitions for shipment storage.
//!
//! Shipments are kept only long enough to re-render a comparison with a
//! different discount and to look up the selected rate at purchase time.
//! There is no durable storage.
//!
//! # Examples
//!
//! ```ignore
//! use parcel_rates::infrastructure::persistence::traits::{RepositoryResult, ShipmentRepository};
//!
//! async fn rate_count(
//!     repo: &dyn ShipmentRepository,
//!     id: &ShipmentId,
//! ) -> RepositoryResult<usize> {
//!     Ok(repo.require(id).await?.rates().len())
//! }
//! ```

use crate::domain::entities::Shipment;
use crate::domain::value_objects::ShipmentId;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage for quoted shipments.
#[async_trait]
pub trait ShipmentRepository: Send + Sync + fmt::Debug {
    /// Stores a shipment, replacing any shipment with the same id.
    async fn save(&self, shipment: &Shipment) -> RepositoryResult<()>;

    /// Gets a shipment by id.
    async fn get(&self, id: &ShipmentId) -> RepositoryResult<Option<Shipment>>;

    /// Gets a shipment that must be cached.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no shipment has this id.
    async fn require(&self, id: &ShipmentId) -> RepositoryResult<Shipment> {
        self.get(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Shipment", id.as_str()))
    }

    /// Number of stored shipments.
    async fn count(&self) -> RepositoryResult<usize>;
}
