//! # Discount Calculator
//!
//! Applies a user discount to a carrier's base rate.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::domain::services::discount_calculator::apply_discount;
//! use parcel_rates::domain::value_objects::{DiscountConfig, Money};
//! use rust_decimal::Decimal;
//!
//! let base: Money = "100".parse().unwrap();
//! let outcome = apply_discount(base, &DiscountConfig::percentage("25"));
//! assert_eq!(outcome.discounted.amount(), Decimal::new(75, 0));
//!
//! let outcome = apply_discount("20".parse().unwrap(), &DiscountConfig::fixed("30"));
//! assert!(outcome.discounted.is_zero());
//! ```

use crate::domain::value_objects::arithmetic::{ArithmeticResult, CheckedArithmetic};
use crate::domain::value_objects::{DiscountConfig, DiscountType, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Result of applying a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountOutcome {
    /// Price after the discount, never below zero.
    pub discounted: Money,
    /// Amount requested off the base rate before clamping.
    pub applied: Decimal,
}

impl DiscountOutcome {
    fn unchanged(base: Money) -> Self {
        Self {
            discounted: base,
            applied: Decimal::ZERO,
        }
    }
}

/// Applies `config` to `base`.
///
/// Disabled discounts and values that are not positive numbers leave the
/// base rate unchanged. The discounted price is clamped at zero; an amount
/// too large to represent also clamps to zero.
#[must_use]
pub fn apply_discount(base: Money, config: &DiscountConfig) -> DiscountOutcome {
    let Some(value) = config.effective_value() else {
        return DiscountOutcome::unchanged(base);
    };

    let applied = match config.kind {
        DiscountType::Percentage => percentage_of(base.amount(), value),
        DiscountType::Fixed => Ok(value),
    };

    match applied {
        Ok(applied) => {
            let discounted = base
                .amount()
                .safe_sub(applied)
                .map(Money::clamped)
                .unwrap_or(Money::ZERO);
            DiscountOutcome {
                discounted,
                applied,
            }
        }
        Err(_) => DiscountOutcome {
            discounted: Money::ZERO,
            applied: base.amount(),
        },
    }
}

fn percentage_of(base: Decimal, percent: Decimal) -> ArithmeticResult<Decimal> {
    base.safe_mul(percent)?.safe_div(ONE_HUNDRED)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn disabled_discount_keeps_base() {
        let outcome = apply_discount(money("22.29"), &DiscountConfig::disabled());
        assert_eq!(outcome.discounted, money("22.29"));
        assert_eq!(outcome.applied, Decimal::ZERO);
    }

    #[test]
    fn non_numeric_value_behaves_like_disabled() {
        let outcome = apply_discount(money("22.29"), &DiscountConfig::percentage("ten"));
        assert_eq!(outcome.discounted, money("22.29"));
        assert_eq!(outcome.applied, Decimal::ZERO);
    }

    #[test]
    fn percentage_discount() {
        let outcome = apply_discount(money("100"), &DiscountConfig::percentage(25.0));
        assert_eq!(outcome.discounted.amount(), Decimal::new(75, 0));
        assert_eq!(outcome.applied, Decimal::new(25, 0));
    }

    #[test]
    fn percentage_over_hundred_clamps() {
        let outcome = apply_discount(money("40"), &DiscountConfig::percentage("150"));
        assert!(outcome.discounted.is_zero());
        assert_eq!(outcome.applied, Decimal::new(60, 0));
    }

    #[test]
    fn fixed_discount_clamps_at_zero() {
        let outcome = apply_discount(money("20"), &DiscountConfig::fixed("30"));
        assert!(outcome.discounted.is_zero());
        assert_eq!(outcome.applied, Decimal::new(30, 0));
    }

    #[test]
    fn huge_percentage_does_not_panic() {
        let outcome = apply_discount(
            Money::new(Decimal::MAX).unwrap(),
            &DiscountConfig::percentage(Decimal::MAX),
        );
        assert!(outcome.discounted.is_zero());
    }

    proptest! {
        #[test]
        fn disabled_is_identity(cents in 0i64..10_000_000) {
            let base = Money::new(Decimal::new(cents, 2)).unwrap();
            let mut config = DiscountConfig::percentage("50");
            config.enabled = false;
            prop_assert_eq!(apply_discount(base, &config).discounted, base);
        }

        #[test]
        fn percentage_matches_formula(cents in 0i64..10_000_000, pct in 0u32..=100) {
            let base = Decimal::new(cents, 2);
            let pct = Decimal::from(pct);
            let outcome = apply_discount(
                Money::new(base).unwrap(),
                &DiscountConfig::percentage(pct),
            );
            let expected = (base - base * pct / Decimal::ONE_HUNDRED).max(Decimal::ZERO);
            prop_assert_eq!(outcome.discounted.amount(), expected);
        }

        #[test]
        fn fixed_matches_formula(cents in 0i64..10_000_000, off in 0i64..20_000_000) {
            let base = Decimal::new(cents, 2);
            let off = Decimal::new(off, 2);
            let outcome = apply_discount(Money::new(base).unwrap(), &DiscountConfig::fixed(off));
            prop_assert_eq!(outcome.discounted.amount(), (base - off).max(Decimal::ZERO));
        }
    }
}
