//! # Money Value Object
//!
//! Non-negative decimal amount used for carrier prices.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::round_cents;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A non-negative monetary amount.
///
/// Serialized as a decimal string (`"22.29"`), the way shipping providers
/// send prices. Deserialization accepts strings or JSON numbers and rejects
/// negative values.
///
/// # Examples
///
/// ```
/// use parcel_rates::domain::value_objects::Money;
/// use rust_decimal::Decimal;
///
/// let price: Money = "22.29".parse().unwrap();
/// assert_eq!(price.amount(), Decimal::new(2229, 2));
/// assert!(Money::new(Decimal::NEGATIVE_ONE).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a money amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the amount is negative.
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::InvalidAmount(format!(
                "{amount} must not be negative"
            )));
        }
        Ok(Self(amount))
    }

    /// Creates a money amount, clamping negative values to zero.
    #[must_use]
    pub fn clamped(amount: Decimal) -> Self {
        if amount.is_sign_negative() {
            Self::ZERO
        } else {
            Self(amount)
        }
    }

    /// Returns the underlying decimal.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the amount rounded to cents.
    #[inline]
    #[must_use]
    pub fn to_cents(&self) -> Self {
        Self(round_cents(self.0))
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Money {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|_| DomainError::InvalidAmount(format!("{s:?} is not a decimal amount")))?;
        Self::new(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", round_cents(self.0))
    }
}
