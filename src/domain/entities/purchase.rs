//! # Label Purchase
//!
//! Purchase requests and the provider's confirmation.

use crate::domain::entities::rate::Rate;
use crate::domain::value_objects::{Money, RateId, ShipmentId};
use serde::{Deserialize, Serialize};

/// A request to buy a label for one of a shipment's rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    /// Shipment to buy.
    pub shipment_id: ShipmentId,
    /// Selected rate.
    pub rate_id: RateId,
    /// Declared value to insure, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Money>,
}

impl PurchaseRequest {
    /// Creates a purchase request without insurance.
    #[must_use]
    pub fn new(shipment_id: ShipmentId, rate_id: RateId) -> Self {
        Self {
            shipment_id,
            rate_id,
            insurance: None,
        }
    }

    /// Adds insurance. A zero amount means no insurance.
    #[must_use]
    pub fn with_insurance(mut self, amount: Money) -> Self {
        self.insurance = (!amount.is_zero()).then_some(amount);
        self
    }
}

/// Reference to the purchased label artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostageLabel {
    /// Where the label can be downloaded.
    pub label_url: String,
    /// File format, e.g. `PNG` or `PDF`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_file_type: Option<String>,
}

/// Provider confirmation of a label purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseConfirmation {
    /// Purchased shipment.
    pub shipment_id: ShipmentId,
    /// Carrier tracking code.
    pub tracking_code: String,
    /// Label artifact.
    pub postage_label: PostageLabel,
    /// The rate that was bought.
    pub selected_rate: Rate,
    /// Insured amount, if insurance was bought.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Money>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zero_insurance_means_none() {
        let request = PurchaseRequest::new(ShipmentId::new("shp_1"), RateId::new("rate_1"))
            .with_insurance(Money::ZERO);
        assert!(request.insurance.is_none());

        let request = request.with_insurance("100".parse().unwrap());
        assert_eq!(request.insurance.unwrap().to_string(), "$100.00");
    }
}
