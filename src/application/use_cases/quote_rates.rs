//! # Quote Rates Use Case
//!
//! Quotes a shipment with the provider and renders the comparison.
//!
//! 1. Validate origin, destination and parcel
//! 2. Create the shipment upstream
//! 3. Substitute fallback rates if the provider fails or returns none
//! 4. Cache the shipment for re-rendering and purchase
//! 5. Render the comparison

use crate::application::error::ApplicationResult;
use crate::application::services::fallback::FallbackRateProvider;
use crate::application::services::ranking_strategy::RankingStrategyKind;
use crate::application::services::rate_comparison::{
    ComparisonOptions, RateComparison, RateComparisonEngine,
};
use crate::domain::entities::Shipment;
use crate::domain::value_objects::{Address, DiscountConfig, Parcel, ParcelInput};
use crate::infrastructure::carriers::traits::{ShipmentRequest, ShippingProvider};
use crate::infrastructure::persistence::ShipmentRepository;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Rate quote request as posted by the dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuoteRatesRequest {
    /// Ship-from address; street, city, state and ZIP required.
    pub from_address: Address,
    /// Ship-to address; ZIP and country required.
    pub to_address: Address,
    /// Parcel form values.
    pub parcel: ParcelInput,
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

impl QuoteRatesRequest {
    /// Validates the request and returns the parsed parcel.
    ///
    /// # Errors
    ///
    /// Returns a domain error naming the first invalid field.
    pub fn validate(&self) -> ApplicationResult<Parcel> {
        self.from_address.validate_origin("from_address")?;
        self.to_address.validate_destination("to_address")?;
        Ok(self.parcel.parse()?)
    }
}

/// Use case for quoting rates.
#[derive(Debug)]
pub struct QuoteRatesUseCase {
    provider: Arc<dyn ShippingProvider>,
    repository: Arc<dyn ShipmentRepository>,
    fallback: Arc<dyn FallbackRateProvider>,
    engine: RateComparisonEngine,
    default_strategy: RankingStrategyKind,
}

impl QuoteRatesUseCase {
    /// Creates a new QuoteRatesUseCase.
    #[must_use]
    pub fn new(
        provider: Arc<dyn ShippingProvider>,
        repository: Arc<dyn ShipmentRepository>,
        fallback: Arc<dyn FallbackRateProvider>,
    ) -> Self {
        Self {
            provider,
            repository,
            fallback,
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
    /// - Validation errors for missing address fields or a bad parcel
    /// - The provider error when it fails and fallback is disabled
    /// - Repository errors
    #[tracing::instrument(skip_all, fields(to_zip = %request.to_address.zip))]
    pub async fn execute(&self, request: QuoteRatesRequest) -> ApplicationResult<RateComparison> {
        let parcel = request.validate()?;
        let shipment_request = ShipmentRequest::new(
            request.from_address.clone(),
            request.to_address.clone(),
            parcel,
        );

        let shipment = self.quote(shipment_request).await?;
        self.repository.save(&shipment).await?;

        let options = ComparisonOptions {
            discount: request.discount,
            ship_date: request.ship_date.unwrap_or_else(|| Utc::now().date_naive()),
            strategy: request.strategy.unwrap_or(self.default_strategy),
        };
        let comparison = self.engine.compare(&shipment, &options);

        info!(
            shipment_id = %comparison.shipment_id,
            source = %comparison.source,
            rates = comparison.rates.len(),
            "rates quoted"
        );
        Ok(comparison)
    }

    async fn quote(&self, request: ShipmentRequest) -> ApplicationResult<Shipment> {
        let outcome = self.provider.create_shipment(&request).await;
        let failure = match &outcome {
            Ok(quoted) if !quoted.rates.is_empty() => None,
            Ok(_) => Some(format!("{} returned no rates", self.provider.name())),
            Err(error) => Some(error.to_string()),
        };
        let substitute = failure.as_ref().and_then(|_| self.fallback.fallback_rates());

        match (outcome, failure, substitute) {
            (_, Some(reason), Some(rates)) => {
                warn!(
                    provider = self.provider.name(),
                    fallback = self.fallback.name(),
                    reason = %reason,
                    "serving fallback rates"
                );
                Ok(Shipment::placeholder(
                    request.from_address,
                    request.to_address,
                    request.parcel,
                    rates,
                    reason,
                ))
            }
            (Ok(quoted), _, _) => Ok(Shipment::live(
                quoted.id,
                request.from_address,
                request.to_address,
                request.parcel,
                quoted.rates,
            )),
            (Err(error), _, _) => {
                warn!(provider = self.provider.name(), error = %error, "rate request failed");
                Err(error.into())
            }
        }
    }
}
