//! # Render Comparison Use Case
//!
//! Re-renders a cached shipment's rates with a new discount, ship date or
//! ordering without calling the provider again.

use crate::application::error::ApplicationResult;
use crate::application::services::ranking_strategy::RankingStrategyKind;
use crate::application::services::rate_comparison::{
    ComparisonOptions, RateComparison, RateComparisonEngine,
};
use crate::domain::value_objects::{DiscountConfig, ShipmentId};
use crate::infrastructure::persistence::ShipmentRepository;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Presentation inputs for a re-render.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderComparisonRequest {
    /// Discount to apply.
    #[serde(default)]
    pub discount: DiscountConfig,
    /// Ship date; today when absent.
    #[serde(default)]
    pub ship_date: Option<NaiveDate>,
    /// Ordering; the configured default when absent.
    #[serde(default)]
    pub strategy: Option<RankingStrategyKind>,
}

/// Use case for re-rendering a comparison.
#[derive(Debug)]
pub struct RenderComparisonUseCase {
    repository: Arc<dyn ShipmentRepository>,
    engine: RateComparisonEngine,
    default_strategy: RankingStrategyKind,
}

impl RenderComparisonUseCase {
    /// Creates a new RenderComparisonUseCase.
    #[must_use]
    pub fn new(repository: Arc<dyn ShipmentRepository>) -> Self {
        Self {
            repository,
            engine: RateComparisonEngine::new(),
            default_strategy: RankingStrategyKind::default(),
        }
    }

    /// Sets the ordering used when a request does not name one.
    #[must_use]
    pub fn with_default_strategy(mut self, strategy: RankingStrategyKind) -> Self {
        self.default_strategy = strategy;
        self
    }

    /// Executes the use case.
    ///
    /// # Errors
    ///
    /// Returns a not-found repository error if the shipment is not cached.
    #[tracing::instrument(skip(self, request), fields(shipment_id = %shipment_id))]
    pub async fn execute(
        &self,
        shipment_id: &ShipmentId,
        request: RenderComparisonRequest,
    ) -> ApplicationResult<RateComparison> {
        let shipment = self.repository.require(shipment_id).await?;

        let options = ComparisonOptions {
            discount: request.discount,
            ship_date: request.ship_date.unwrap_or_else(|| Utc::now().date_naive()),
            strategy: request.strategy.unwrap_or(self.default_strategy),
        };
        debug!(strategy = %options.strategy, "re-rendering comparison");
        Ok(self.engine.compare(&shipment, &options))
    }
}
