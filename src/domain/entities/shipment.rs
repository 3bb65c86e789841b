//! # Shipment Entity
//!
//! A rate-quote session: origin, destination, parcel and the resulting rates.

use crate::domain::entities::rate::Rate;
use crate::domain::value_objects::{Address, Parcel, RateId, ShipmentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a shipment's rates came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    /// Quoted by the shipping provider.
    Live,
    /// Substituted from the local placeholder set after a provider failure.
    Placeholder,
}

impl fmt::Display for RateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => write!(f, "live"),
            Self::Placeholder => write!(f, "placeholder"),
        }
    }
}

/// A quoted shipment.
///
/// # Invariants
///
/// - A shipment with [`RateSource::Placeholder`] has a placeholder id and
///   carries the reason the provider could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    id: ShipmentId,
    from_address: Address,
    to_address: Address,
    parcel: Parcel,
    rates: Vec<Rate>,
    source: RateSource,
    fallback_reason: Option<String>,
    created_at: DateTime<Utc>,
}

impl Shipment {
    /// Creates a shipment from live provider rates.
    #[must_use]
    pub fn live(
        id: ShipmentId,
        from_address: Address,
        to_address: Address,
        parcel: Parcel,
        rates: Vec<Rate>,
    ) -> Self {
        Self {
            id,
            from_address,
            to_address,
            parcel,
            rates,
            source: RateSource::Live,
            fallback_reason: None,
            created_at: Utc::now(),
        }
    }

    /// Creates a shipment from placeholder rates.
    #[must_use]
    pub fn placeholder(
        from_address: Address,
        to_address: Address,
        parcel: Parcel,
        rates: Vec<Rate>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: ShipmentId::placeholder(),
            from_address,
            to_address,
            parcel,
            rates,
            source: RateSource::Placeholder,
            fallback_reason: Some(reason.into()),
            created_at: Utc::now(),
        }
    }

    /// Returns the shipment id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ShipmentId {
        &self.id
    }

    /// Returns the origin address.
    #[inline]
    #[must_use]
    pub fn from_address(&self) -> &Address {
        &self.from_address
    }

    /// Returns the destination address.
    #[inline]
    #[must_use]
    pub fn to_address(&self) -> &Address {
        &self.to_address
    }

    /// Returns the parcel.
    #[inline]
    #[must_use]
    pub fn parcel(&self) -> &Parcel {
        &self.parcel
    }

    /// Returns the rates in provider order.
    #[inline]
    #[must_use]
    pub fn rates(&self) -> &[Rate] {
        &self.rates
    }

    /// Returns where the rates came from.
    #[inline]
    #[must_use]
    pub fn source(&self) -> RateSource {
        self.source
    }

    /// Returns why placeholder rates were used, if they were.
    #[inline]
    #[must_use]
    pub fn fallback_reason(&self) -> Option<&str> {
        self.fallback_reason.as_deref()
    }

    /// Returns when the shipment was quoted.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns true if the rates are placeholders.
    #[inline]
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.source == RateSource::Placeholder
    }

    /// Finds a rate by id.
    #[must_use]
    pub fn find_rate(&self, rate_id: &RateId) -> Option<&Rate> {
        self.rates.iter().find(|r| r.id() == rate_id)
    }
}

impl fmt::Display for Shipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shipment({} {} rates={})",
            self.id,
            self.source,
            self.rates.len()
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn parcel() -> Parcel {
        Parcel::new(
            Decimal::new(10, 0),
            Decimal::new(8, 0),
            Decimal::new(4, 0),
            Decimal::new(16, 0),
        )
        .unwrap()
    }

    fn rates() -> Vec<Rate> {
        vec![
            Rate::new("rate_1", "UPS", "Ground", "22.33".parse().unwrap()),
            Rate::new("rate_2", "USPS", "Priority Mail", "44.84".parse().unwrap()),
        ]
    }

    #[test]
    fn live_shipment_has_no_fallback_reason() {
        let shipment = Shipment::live(
            ShipmentId::new("shp_1"),
            Address::street("1 Main St", "Austin", "TX", "78701"),
            Address::postal("10001", "US"),
            parcel(),
            rates(),
        );
        assert_eq!(shipment.source(), RateSource::Live);
        assert!(!shipment.is_placeholder());
        assert!(shipment.fallback_reason().is_none());
    }

    #[test]
    fn placeholder_shipment_is_flagged() {
        let shipment = Shipment::placeholder(
            Address::default(),
            Address::postal("10001", "US"),
            parcel(),
            rates(),
            "provider timeout",
        );
        assert!(shipment.is_placeholder());
        assert!(shipment.id().is_placeholder());
        assert_eq!(shipment.fallback_reason(), Some("provider timeout"));
    }

    #[test]
    fn find_rate_by_id() {
        let shipment = Shipment::live(
            ShipmentId::new("shp_1"),
            Address::default(),
            Address::default(),
            parcel(),
            rates(),
        );
        assert!(shipment.find_rate(&RateId::new("rate_2")).is_some());
        assert!(shipment.find_rate(&RateId::new("rate_3")).is_none());
    }
}
