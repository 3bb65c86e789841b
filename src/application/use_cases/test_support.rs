//! Scripted provider for use case tests.

use crate::domain::entities::{
    AddressVerification, PostageLabel, PurchaseConfirmation, PurchaseRequest, Rate,
};
use crate::domain::value_objects::{Address, Parcel, ShipmentId};
use crate::infrastructure::carriers::error::{ProviderError, ProviderResult};
use crate::infrastructure::carriers::traits::{ProviderShipment, ShipmentRequest, ShippingProvider};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
pub(crate) struct MockProvider {
    pub shipment: ProviderResult<ProviderShipment>,
    pub verification: ProviderResult<AddressVerification>,
    pub purchase: Option<ProviderError>,
    pub calls: AtomicUsize,
}

impl MockProvider {
    pub fn with_rates(rates: Vec<Rate>) -> Self {
        Self {
            shipment: Ok(ProviderShipment {
                id: ShipmentId::new("shp_live"),
                rates,
            }),
            verification: Ok(AddressVerification::verified(Address::default())),
            purchase: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            shipment: Err(error.clone()),
            verification: Err(error.clone()),
            purchase: Some(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ShippingProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn create_shipment(
        &self,
        _request: &ShipmentRequest,
    ) -> ProviderResult<ProviderShipment> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.shipment.clone()
    }

    async fn verify_address(&self, _address: &Address) -> ProviderResult<AddressVerification> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.verification.clone()
    }

    async fn buy_shipment(
        &self,
        request: &PurchaseRequest,
    ) -> ProviderResult<PurchaseConfirmation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.purchase {
            return Err(error.clone());
        }
        let selected_rate = match &self.shipment {
            Ok(shipment) => shipment
                .rates
                .iter()
                .find(|r| r.id() == &request.rate_id)
                .cloned(),
            Err(_) => None,
        }
        .ok_or_else(|| ProviderError::not_found("rate not found"))?;

        Ok(PurchaseConfirmation {
            shipment_id: request.shipment_id.clone(),
            tracking_code: "9400100000000000000000".to_string(),
            postage_label: PostageLabel {
                label_url: "https://labels.example/label.png".to_string(),
                label_file_type: Some("image/png".to_string()),
            },
            selected_rate,
            insurance: request.insurance,
        })
    }
}

pub(crate) fn sample_parcel() -> Parcel {
    Parcel::new(Decimal::TEN, Decimal::TEN, Decimal::TEN, Decimal::from(32))
        .unwrap()
}
