//! # Savings Calculator
//!
//! Savings of a discounted price against the retail reference price.

use crate::domain::value_objects::arithmetic::{CheckedArithmetic, round_whole};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Savings against retail.
///
/// Negative values mean the discounted price is above retail; they are
/// reported as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Savings {
    /// Retail minus discounted price.
    pub amount: Decimal,
    /// `amount` as a whole percentage of retail; 0 when retail is not positive.
    pub percent: i64,
}

/// Computes savings of `discounted` against `retail`.
///
/// # Examples
///
/// ```
/// use parcel_rates::domain::services::savings::compute_savings;
/// use rust_decimal::Decimal;
///
/// let savings = compute_savings(Decimal::new(4671, 2), Decimal::new(2229, 2));
/// assert_eq!(savings.amount, Decimal::new(2442, 2));
/// assert_eq!(savings.percent, 52);
/// ```
#[must_use]
pub fn compute_savings(retail: Decimal, discounted: Decimal) -> Savings {
    let amount = retail.safe_sub(discounted).unwrap_or(Decimal::ZERO);
    let percent = if retail <= Decimal::ZERO {
        0
    } else {
        amount
            .safe_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.safe_div(retail))
            .ok()
            .and_then(|ratio| round_whole(ratio).to_i64())
            .unwrap_or(0)
    };
    Savings { amount, percent }
}
