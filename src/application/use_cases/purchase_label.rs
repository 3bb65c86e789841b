//! # Purchase Label Use Case
//!
//! Buys a label for one of a cached shipment's rates.
//!
//! 1. Require an authenticated caller
//! 2. Validate the insurance amount and the shipment id
//! 3. Refuse placeholder shipments
//! 4. Check the rate belongs to the shipment
//! 5. Buy upstream

use crate::application::context::RequestContext;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::{PurchaseConfirmation, PurchaseRequest};
use crate::domain::value_objects::{Money, NumericInput, RateId, ShipmentId};
use crate::infrastructure::carriers::traits::ShippingProvider;
use crate::infrastructure::persistence::ShipmentRepository;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Label purchase request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseLabelRequest {
    /// Rate to buy.
    pub rate_id: RateId,
    /// Declared value to insure; absent or zero means none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<NumericInput>,
}

impl PurchaseLabelRequest {
    /// Parses the insurance amount.
    ///
    /// # Errors
    ///
    /// Returns a validation error for non-numeric or negative amounts.
    pub fn insurance_amount(&self) -> ApplicationResult<Option<Money>> {
        let Some(input) = &self.insurance else {
            return Ok(None);
        };
        let amount = input.require_decimal("insurance")?;
        if amount < Decimal::ZERO {
            return Err(ApplicationError::validation(format!(
                "insurance must not be negative, got {amount}"
            )));
        }
        Ok(Some(Money::new(amount)?).filter(|m| !m.is_zero()))
    }
}

/// Use case for buying labels.
#[derive(Debug)]
pub struct PurchaseLabelUseCase {
    provider: Arc<dyn ShippingProvider>,
    repository: Arc<dyn ShipmentRepository>,
}

impl PurchaseLabelUseCase {
    /// Creates a new PurchaseLabelUseCase.
    #[must_use]
    pub fn new(
        provider: Arc<dyn ShippingProvider>,
        repository: Arc<dyn ShipmentRepository>,
    ) -> Self {
        Self {
            provider,
            repository,
        }
    }

    /// Executes the use case.
    ///
    /// Shipments that are no longer cached are passed through to the
    /// provider, which owns the authoritative record.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` without an authenticated user
    /// - Validation errors for bad insurance or a malformed shipment id
    /// - `PlaceholderPurchase` for placeholder shipments
    /// - `NotFound` if the rate is not part of a cached shipment
    /// - Provider errors
    #[tracing::instrument(
        skip(self, context, request),
        fields(shipment_id = %shipment_id, rate_id = %request.rate_id)
    )]
    pub async fn execute(
        &self,
        context: &RequestContext,
        shipment_id: &ShipmentId,
        request: PurchaseLabelRequest,
    ) -> ApplicationResult<PurchaseConfirmation> {
        let user = context.require_user()?;
        let insurance = request.insurance_amount()?;
        if !shipment_id.is_well_formed() {
            return Err(ApplicationError::validation(format!(
                "shipment id must contain only letters, digits and underscores, got '{shipment_id}'"
            )));
        }

        if shipment_id.is_placeholder() {
            return Err(ApplicationError::placeholder_purchase(shipment_id.as_str()));
        }
        if let Some(shipment) = self.repository.get(shipment_id).await? {
            if shipment.is_placeholder() {
                return Err(ApplicationError::placeholder_purchase(shipment_id.as_str()));
            }
            if shipment.find_rate(&request.rate_id).is_none() {
                return Err(ApplicationError::not_found("Rate", request.rate_id.as_str()));
            }
        }

        let mut purchase = PurchaseRequest::new(shipment_id.clone(), request.rate_id);
        if let Some(amount) = insurance {
            purchase = purchase.with_insurance(amount);
        }

        let confirmation = self.provider.buy_shipment(&purchase).await?;
        info!(
            user = user,
            tracking_code = %confirmation.tracking_code,
            carrier = confirmation.selected_rate.carrier(),
            "label purchased"
        );
        Ok(confirmation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{MockProvider, sample_parcel};
    use crate::domain::entities::{Rate, Shipment};
    use crate::domain::value_objects::Address;
    use crate::infrastructure::carriers::error::ProviderError;
    use crate::infrastructure::persistence::in_memory::InMemoryShipmentRepository;

    fn rates() -> Vec<Rate> {
        vec![Rate::new("rate_1", "USPS", "Priority Mail", "44.84".parse().unwrap())]
    }

    async fn setup(provider: MockProvider) -> (PurchaseLabelUseCase, Arc<MockProvider>) {
        let provider = Arc::new(provider);
        let repository = Arc::new(InMemoryShipmentRepository::new());
        repository
            .save(&Shipment::live(
                ShipmentId::new("shp_live"),
                Address::street("1 Main St", "Springfield", "IL", "62701"),
                Address::postal("10001", "US"),
                sample_parcel(),
                rates(),
            ))
            .await
            .unwrap();
        (PurchaseLabelUseCase::new(provider.clone(), repository), provider)
    }

    fn request(rate: &str, insurance: Option<&str>) -> PurchaseLabelRequest {
        PurchaseLabelRequest {
            rate_id: RateId::new(rate),
            insurance: insurance.map(NumericInput::from),
        }
    }

    fn user() -> RequestContext {
        RequestContext::authenticated("user_1")
    }

    #[tokio::test]
    async fn buys_label_with_insurance() {
        let (use_case, _) = setup(MockProvider::with_rates(rates())).await;

        let confirmation = use_case
            .execute(&user(), &ShipmentId::new("shp_live"), request("rate_1", Some("150")))
            .await
            .unwrap();

        assert_eq!(confirmation.selected_rate.id().as_str(), "rate_1");
        assert_eq!(confirmation.insurance.unwrap().to_string(), "$150.00");
        assert!(!confirmation.tracking_code.is_empty());
    }

    #[tokio::test]
    async fn zero_insurance_means_none() {
        let (use_case, _) = setup(MockProvider::with_rates(rates())).await;
        let confirmation = use_case
            .execute(&user(), &ShipmentId::new("shp_live"), request("rate_1", Some("0")))
            .await
            .unwrap();
        assert!(confirmation.insurance.is_none());
    }

    #[tokio::test]
    async fn requires_user() {
        let (use_case, provider) = setup(MockProvider::with_rates(rates())).await;
        let err = use_case
            .execute(
                &RequestContext::anonymous(),
                &ShipmentId::new("shp_live"),
                request("rate_1", None),
            )
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn rejects_negative_insurance() {
        let (use_case, _) = setup(MockProvider::with_rates(rates())).await;
        let err = use_case
            .execute(&user(), &ShipmentId::new("shp_live"), request("rate_1", Some("-5")))
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn rejects_malformed_shipment_ids() {
        let (use_case, provider) = setup(MockProvider::with_rates(rates())).await;
        for id in ["../addresses/adr_1", "shp_1?x=", "shp_1/buy", ""] {
            let err = use_case
                .execute(&user(), &ShipmentId::new(id), request("rate_1", None))
                .await
                .unwrap_err();
            assert!(err.is_validation(), "{id:?} accepted");
        }
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn refuses_placeholder_shipments() {
        let (use_case, provider) = setup(MockProvider::with_rates(rates())).await;
        let err = use_case
            .execute(&user(), &ShipmentId::placeholder(), request("placeholder_0", None))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::PlaceholderPurchase(_)));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn unknown_rate_on_cached_shipment() {
        let (use_case, _) = setup(MockProvider::with_rates(rates())).await;
        let err = use_case
            .execute(&user(), &ShipmentId::new("shp_live"), request("rate_9", None))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn provider_rejection_surfaces() {
        let (use_case, _) = setup(MockProvider::failing(ProviderError::invalid_request(
            "rate expired",
        )))
        .await;
        let err = use_case
            .execute(&user(), &ShipmentId::new("shp_live"), request("rate_1", None))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "PROVIDER_REJECTED");
    }
}
