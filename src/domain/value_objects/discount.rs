//! # Discount Configuration
//!
//! User-supplied discount settings for a comparison request.

use crate::domain::value_objects::numeric_input::NumericInput;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a discount value is applied to a base rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Value is a percentage of the base rate.
    #[default]
    Percentage,
    /// Value is a flat amount subtracted from the base rate.
    Fixed,
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage => write!(f, "percentage"),
            Self::Fixed => write!(f, "fixed"),
        }
    }
}

/// Discount settings supplied per comparison session.
///
/// The value is kept as raw input; [`DiscountConfig::effective_value`]
/// decides whether the discount actually applies.
///
/// # Examples
///
/// ```
/// use parcel_rates::domain::value_objects::DiscountConfig;
/// use rust_decimal::Decimal;
///
/// let config = DiscountConfig::percentage("25");
/// assert_eq!(config.effective_value(), Some(Decimal::new(25, 0)));
///
/// assert_eq!(DiscountConfig::percentage("abc").effective_value(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiscountConfig {
    /// Whether the discount is switched on.
    #[serde(default)]
    pub enabled: bool,
    /// Raw discount value as typed by the user.
    #[serde(default)]
    pub value: NumericInput,
    /// Percentage or fixed amount.
    #[serde(default, rename = "type")]
    pub kind: DiscountType,
}

impl DiscountConfig {
    /// A disabled discount.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// An enabled percentage discount.
    #[must_use]
    pub fn percentage(value: impl Into<NumericInput>) -> Self {
        Self {
            enabled: true,
            value: value.into(),
            kind: DiscountType::Percentage,
        }
    }

    /// An enabled fixed-amount discount.
    #[must_use]
    pub fn fixed(value: impl Into<NumericInput>) -> Self {
        Self {
            enabled: true,
            value: value.into(),
            kind: DiscountType::Fixed,
        }
    }

    /// Returns the discount value if the discount applies.
    ///
    /// A discount applies only when it is enabled and its value parses to a
    /// positive number. Anything else behaves like a disabled discount.
    #[must_use]
    pub fn effective_value(&self) -> Option<Decimal> {
        if !self.enabled {
            return None;
        }
        self.value
            .to_decimal()
            .filter(|v| v.is_sign_positive() && !v.is_zero())
    }
}
