//! # Fallback Rates
//!
//! What to show when the provider cannot quote a shipment.
//!
//! The policy is chosen at startup. With [`FallbackPolicy::Placeholder`] a
//! fixed set of ten representative rates stands in for the live quote;
//! callers mark the resulting shipment as placeholder and log the upstream
//! failure. With [`FallbackPolicy::Disabled`] the failure is returned.

use crate::domain::entities::Rate;
use crate::domain::value_objects::Money;
use crate::domain::value_objects::ids::PLACEHOLDER_PREFIX;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Placeholder rate table: carrier, service, rate and retail in cents, transit days.
const PLACEHOLDER_TABLE: [(&str, &str, i64, i64, u32); 10] = [
    ("UPS", "Ground Saver", 2229, 4671, 5),
    ("UPS", "Ground", 2233, 4952, 3),
    ("USPS", "Ground Advantage", 2319, 4045, 4),
    ("UPS", "3 Day Select", 4218, 14366, 3),
    ("USPS", "Priority Mail", 4484, 7152, 2),
    ("FedEx", "2nd Day Air", 6753, 23847, 2),
    ("UPS", "Next Day Air Saver", 10325, 31627, 1),
    ("UPS", "Next Day Air", 11018, 33533, 1),
    ("FedEx", "Next Day Air Early", 14195, 35027, 1),
    ("USPS", "Priority Mail Express", 15725, 16864, 1),
];

/// Returns the placeholder rate set, ids `placeholder_0` to `placeholder_9`.
#[must_use]
pub fn placeholder_rates() -> Vec<Rate> {
    PLACEHOLDER_TABLE
        .iter()
        .enumerate()
        .map(|(i, &(carrier, service, rate, retail, days))| {
            Rate::new(
                format!("{PLACEHOLDER_PREFIX}{i}"),
                carrier,
                service,
                Money::clamped(Decimal::new(rate, 2)),
            )
            .with_retail_rate(Money::clamped(Decimal::new(retail, 2)))
            .with_delivery_days(days)
        })
        .collect()
}

/// Source of substitute rates.
pub trait FallbackRateProvider: Send + Sync + fmt::Debug {
    /// Substitute rates, or `None` if failures should surface.
    fn fallback_rates(&self) -> Option<Vec<Rate>>;

    /// Returns the name of this fallback.
    fn name(&self) -> &'static str;
}

/// Serves [`placeholder_rates`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRates;

impl FallbackRateProvider for PlaceholderRates {
    fn fallback_rates(&self) -> Option<Vec<Rate>> {
        Some(placeholder_rates())
    }

    fn name(&self) -> &'static str {
        "placeholder"
    }
}

/// Never substitutes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFallback;

impl FallbackRateProvider for NoFallback {
    fn fallback_rates(&self) -> Option<Vec<Rate>> {
        None
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

/// Configured fallback behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Substitute placeholder rates.
    #[default]
    Placeholder,
    /// Return the provider error.
    Disabled,
}

impl FallbackPolicy {
    /// Returns the provider implementing this policy.
    #[must_use]
    pub fn provider(self) -> Arc<dyn FallbackRateProvider> {
        match self {
            Self::Placeholder => Arc::new(PlaceholderRates),
            Self::Disabled => Arc::new(NoFallback),
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placeholder => write!(f, "placeholder"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}
