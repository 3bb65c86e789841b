//! # Rate Comparison Engine
//!
//! Turns a shipment's rates into a ranked, annotated comparison.
//!
//! For every rate the engine applies the requested discount, measures
//! savings against retail, estimates delivery from the ship date and looks
//! up carrier branding and liability. The computation is pure and
//! synchronous; nothing is cached.
//!
//! Displayed money is rounded to cents. Savings are measured against the
//! unrounded discounted price.

use crate::application::services::ranking_strategy::{RankingStrategyKind, cheapest_position};
use crate::domain::entities::{Rate, RateSource, Shipment};
use crate::domain::services::{
    CarrierBranding, DeliveryEstimate, LiabilityTier, apply_discount, branding_for,
    compute_savings, estimate_delivery, liability_for,
};
use crate::domain::value_objects::{DiscountConfig, Money, RateId, ShipmentId, round_cents};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Inputs that vary per comparison request.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonOptions {
    /// Discount to apply to every rate.
    pub discount: DiscountConfig,
    /// Day the parcel ships; delivery is counted from here.
    pub ship_date: NaiveDate,
    /// Ordering of the returned rates.
    pub strategy: RankingStrategyKind,
}

impl ComparisonOptions {
    /// Creates options with no discount and cheapest-first ordering.
    #[must_use]
    pub fn new(ship_date: NaiveDate) -> Self {
        Self {
            discount: DiscountConfig::disabled(),
            ship_date,
            strategy: RankingStrategyKind::default(),
        }
    }

    /// Sets the discount.
    #[must_use]
    pub fn with_discount(mut self, discount: DiscountConfig) -> Self {
        self.discount = discount;
        self
    }

    /// Sets the ranking strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: RankingStrategyKind) -> Self {
        self.strategy = strategy;
        self
    }
}

/// A rate annotated for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustedRate {
    /// The underlying quote.
    #[serde(flatten)]
    pub rate: Rate,
    /// Position in the comparison (1 = first).
    pub rank: usize,
    /// Price after the discount, in cents.
    pub discounted_rate: Money,
    /// Discount taken off the base price, in cents.
    pub discount_applied: Decimal,
    /// Retail (or base) minus the discounted price, in cents.
    pub savings: Decimal,
    /// Savings as a whole percentage of retail.
    pub savings_percent: i64,
    /// Delivery estimate, absent when the carrier gives no transit time.
    pub estimated_delivery: Option<DeliveryEstimate>,
    /// Lowest base price in the comparison.
    pub cheapest: bool,
    /// Express service.
    pub fast: bool,
    /// Carrier style descriptor.
    pub branding: CarrierBranding,
    /// Carrier liability bucket.
    pub liability: LiabilityTier,
    /// Coverage amount for `liability`.
    pub liability_amount: Money,
}

/// A rendered comparison for one shipment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateComparison {
    /// Shipment the rates belong to.
    pub shipment_id: ShipmentId,
    /// Live or placeholder rates.
    pub source: RateSource,
    /// Why placeholder rates were substituted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
    /// Ship date used for delivery estimates.
    pub ship_date: NaiveDate,
    /// Ordering applied to `rates`.
    pub strategy: RankingStrategyKind,
    /// Discount that was applied.
    pub discount: DiscountConfig,
    /// Id of the cheapest rate, if there are any rates.
    pub cheapest_rate_id: Option<RateId>,
    /// Annotated rates in ranked order.
    pub rates: Vec<AdjustedRate>,
}

impl RateComparison {
    /// Returns the adjusted rate flagged cheapest.
    #[must_use]
    pub fn cheapest(&self) -> Option<&AdjustedRate> {
        self.rates.iter().find(|r| r.cheapest)
    }
}

/// Builds [`RateComparison`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateComparisonEngine;

impl RateComparisonEngine {
    /// Creates a new engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Renders the comparison for `shipment`.
    #[must_use]
    pub fn compare(&self, shipment: &Shipment, options: &ComparisonOptions) -> RateComparison {
        let rates = shipment.rates();
        let cheapest = cheapest_position(rates);
        let cheapest_rate_id = cheapest
            .and_then(|position| rates.get(position))
            .map(|rate| rate.id().clone());

        let adjusted = options
            .strategy
            .strategy()
            .rank(rates)
            .into_iter()
            .map(|ranked| {
                let is_cheapest = cheapest == Some(ranked.position);
                self.adjust(ranked.rate, ranked.rank, is_cheapest, options)
            })
            .collect();

        RateComparison {
            shipment_id: shipment.id().clone(),
            source: shipment.source(),
            fallback_reason: shipment.fallback_reason().map(str::to_string),
            ship_date: options.ship_date,
            strategy: options.strategy,
            discount: options.discount.clone(),
            cheapest_rate_id,
            rates: adjusted,
        }
    }

    /// Annotates a single rate.
    #[must_use]
    pub fn adjust(
        &self,
        rate: Rate,
        rank: usize,
        cheapest: bool,
        options: &ComparisonOptions,
    ) -> AdjustedRate {
        let outcome = apply_discount(rate.rate(), &options.discount);
        let savings = compute_savings(rate.reference_price().amount(), outcome.discounted.amount());
        let estimated_delivery =
            estimate_delivery(options.ship_date, rate.delivery_days(), rate.service());
        let liability = liability_for(rate.carrier(), rate.service());

        AdjustedRate {
            rank,
            discounted_rate: outcome.discounted.to_cents(),
            discount_applied: round_cents(outcome.applied),
            savings: round_cents(savings.amount),
            savings_percent: savings.percent,
            estimated_delivery,
            cheapest,
            fast: is_fast_service(rate.service()),
            branding: branding_for(rate.carrier()),
            liability,
            liability_amount: liability.amount(),
            rate,
        }
    }
}

/// Express services get the fast badge.
fn is_fast_service(service: &str) -> bool {
    service.to_lowercase().contains("express")
}
