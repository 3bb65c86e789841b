//! # Rate Entity
//!
//! A carrier's price quote for shipping a parcel.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::domain::entities::rate::Rate;
//!
//! let rate = Rate::new("rate_1", "UPS", "Ground", "22.33".parse().unwrap())
//!     .with_retail_rate("49.52".parse().unwrap())
//!     .with_delivery_days(3);
//!
//! assert_eq!(rate.reference_price().to_string(), "$49.52");
//! ```

use crate::domain::value_objects::{Money, RateId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default currency for quotes.
pub const DEFAULT_CURRENCY: &str = "USD";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// An immutable carrier rate quote.
///
/// Produced by the shipping provider (or the placeholder rate set) and never
/// mutated afterwards; presentation values are derived into
/// `AdjustedRate` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// Provider-issued rate id.
    id: RateId,
    /// Carrier name, e.g. `UPS`.
    carrier: String,
    /// Service name, e.g. `Ground Advantage`.
    service: String,
    /// Base (negotiated) price.
    rate: Money,
    /// Currency of `rate`.
    #[serde(default = "default_currency")]
    currency: String,
    /// Retail reference price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    retail_rate: Option<Money>,
    /// Published list price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    list_rate: Option<Money>,
    /// Business days in transit, if the carrier commits to one.
    #[serde(default)]
    delivery_days: Option<u32>,
}

impl Rate {
    /// Creates a USD rate with no retail price or transit estimate.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        carrier: impl Into<String>,
        service: impl Into<String>,
        rate: Money,
    ) -> Self {
        Self {
            id: RateId::new(id),
            carrier: carrier.into(),
            service: service.into(),
            rate,
            currency: default_currency(),
            retail_rate: None,
            list_rate: None,
            delivery_days: None,
        }
    }

    /// Sets the retail price.
    #[must_use]
    pub fn with_retail_rate(mut self, retail: Money) -> Self {
        self.retail_rate = Some(retail);
        self
    }

    /// Sets the list price.
    #[must_use]
    pub fn with_list_rate(mut self, list: Money) -> Self {
        self.list_rate = Some(list);
        self
    }

    /// Sets the transit estimate in business days.
    #[must_use]
    pub fn with_delivery_days(mut self, days: u32) -> Self {
        self.delivery_days = Some(days);
        self
    }

    /// Sets the currency code.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Returns the rate id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &RateId {
        &self.id
    }

    /// Returns the carrier name.
    #[inline]
    #[must_use]
    pub fn carrier(&self) -> &str {
        &self.carrier
    }

    /// Returns the service name.
    #[inline]
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Returns the base price.
    #[inline]
    #[must_use]
    pub fn rate(&self) -> Money {
        self.rate
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the retail price, if quoted.
    #[inline]
    #[must_use]
    pub fn retail_rate(&self) -> Option<Money> {
        self.retail_rate
    }

    /// Returns the list price, if quoted.
    #[inline]
    #[must_use]
    pub fn list_rate(&self) -> Option<Money> {
        self.list_rate
    }

    /// Returns the transit estimate in business days.
    #[inline]
    #[must_use]
    pub fn delivery_days(&self) -> Option<u32> {
        self.delivery_days
    }

    /// Price that savings are measured against: retail, else base.
    #[must_use]
    pub fn reference_price(&self) -> Money {
        self.retail_rate.unwrap_or(self.rate)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rate({} {} {} {})",
            self.id, self.carrier, self.service, self.rate
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn reference_price_falls_back_to_base() {
        let rate = Rate::new("r", "USPS", "Priority Mail", "44.84".parse().unwrap());
        assert_eq!(rate.reference_price(), rate.rate());

        let rate = rate.with_retail_rate("71.52".parse().unwrap());
        assert_eq!(rate.reference_price().to_string(), "$71.52");
    }

    #[test]
    fn deserializes_provider_shape() {
        let json = r#"{
            "id": "rate_1", "carrier": "UPS", "service": "Ground",
            "rate": "22.33", "retail_rate": "49.52", "delivery_days": null
        }"#;
        let rate: Rate = serde_json::from_str(json).unwrap();
        assert_eq!(rate.currency(), "USD");
        assert_eq!(rate.delivery_days(), None);
        assert!(rate.list_rate().is_none());
    }

    #[test]
    fn display_format() {
        let rate = Rate::new("rate_9", "FedEx", "2nd Day Air", "67.53".parse().unwrap());
        assert_eq!(rate.to_string(), "Rate(rate_9 FedEx 2nd Day Air $67.53)");
    }
}
