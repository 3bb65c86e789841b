//! # Shipping Provider Trait
//!
//! Port definition for the upstream shipping API.
//!
//! A [`ShippingProvider`] quotes rates for a shipment, verifies addresses and
//! buys labels. Implementations perform a single attempt per call; nothing
//! is retried.
//!
//! # Examples
//!
//! ```ignore
//! use parcel_rates::infrastructure::carriers::traits::ShippingProvider;
//!
//! struct MyProvider { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl ShippingProvider for MyProvider {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::{AddressVerification, PurchaseConfirmation, PurchaseRequest, Rate};
use crate::domain::value_objects::{Address, Parcel, ShipmentId};
use crate::infrastructure::carriers::error::ProviderResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What to quote: origin, destination and parcel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    /// Ship-from address.
    pub from_address: Address,
    /// Ship-to address.
    pub to_address: Address,
    /// Parcel dimensions and weight.
    pub parcel: Parcel,
}

impl ShipmentRequest {
    /// Creates a shipment request.
    #[must_use]
    pub fn new(from_address: Address, to_address: Address, parcel: Parcel) -> Self {
        Self {
            from_address,
            to_address,
            parcel,
        }
    }
}

/// A shipment as created by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderShipment {
    /// Provider-issued shipment id.
    pub id: ShipmentId,
    /// Rates in provider order.
    pub rates: Vec<Rate>,
}

/// Upstream shipping API.
#[async_trait]
pub trait ShippingProvider: Send + Sync + fmt::Debug {
    /// Short provider name for logs.
    fn name(&self) -> &str;

    /// Creates a shipment and returns its rates.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` if the provider rejects the request or
    /// cannot be reached.
    async fn create_shipment(&self, request: &ShipmentRequest) -> ProviderResult<ProviderShipment>;

    /// Verifies an address for deliverability.
    ///
    /// An undeliverable address is a successful call with
    /// `verified == false`.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` if the provider cannot be reached or
    /// rejects the credentials.
    async fn verify_address(&self, address: &Address) -> ProviderResult<AddressVerification>;

    /// Buys a label for one of a shipment's rates.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` if the purchase is refused or the provider
    /// cannot be reached.
    async fn buy_shipment(&self, request: &PurchaseRequest) -> ProviderResult<PurchaseConfirmation>;
}
