//! # In-Memory Shipment Repository
//!
//! Bounded in-memory implementation of [`ShipmentRepository`].
//!
//! Insertion order is tracked so the oldest shipment is evicted once the
//! configured capacity is reached.

use crate::domain::entities::Shipment;
use crate::domain::value_objects::ShipmentId;
use crate::infrastructure::persistence::traits::{RepositoryResult, ShipmentRepository};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Default number of shipments kept.
pub const DEFAULT_CAPACITY: usize = 1024;

#[derive(Debug, Default)]
struct Storage {
    shipments: HashMap<ShipmentId, Shipment>,
    order: VecDeque<ShipmentId>,
}

/// In-memory implementation of [`ShipmentRepository`].
#[derive(Debug, Clone)]
pub struct InMemoryShipmentRepository {
    storage: Arc<RwLock<Storage>>,
    capacity: usize,
}

impl InMemoryShipmentRepository {
    /// Creates an empty repository holding at most `capacity` shipments.
    ///
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Arc::new(RwLock::new(Storage::default())),
            capacity: capacity.max(1),
        }
    }

    /// Creates an empty repository with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Returns the configured capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryShipmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShipmentRepository for InMemoryShipmentRepository {
    async fn save(&self, shipment: &Shipment) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        let id = shipment.id().clone();

        if storage.shipments.insert(id.clone(), shipment.clone()).is_some() {
            storage.order.retain(|existing| existing != &id);
        }
        storage.order.push_back(id);

        while storage.order.len() > self.capacity {
            if let Some(oldest) = storage.order.pop_front() {
                storage.shipments.remove(&oldest);
                tracing::debug!(shipment_id = %oldest, "evicted shipment from cache");
            }
        }
        Ok(())
    }

    async fn get(&self, id: &ShipmentId) -> RepositoryResult<Option<Shipment>> {
        let storage = self.storage.read().await;
        Ok(storage.shipments.get(id).cloned())
    }

    async fn count(&self) -> RepositoryResult<usize> {
        let storage = self.storage.read().await;
        Ok(storage.shipments.len())
    }
}
