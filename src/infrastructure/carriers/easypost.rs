//! # EasyPost Provider
//!
//! [`ShippingProvider`] backed by the EasyPost REST API.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | Quote | `POST {base}/shipments` |
//! | Verify | `POST {base}/addresses` with `verify: true` |
//! | Buy | `POST {base}/shipments/{id}/buy` |
//!
//! Requests authenticate with HTTP basic auth, the API key as user name.
//! Prices arrive as decimal strings and are parsed exactly.

use crate::domain::entities::{
    AddressVerification, PostageLabel, PurchaseConfirmation, PurchaseRequest, Rate,
    VerificationIssue,
};
use crate::domain::value_objects::address::DEFAULT_COUNTRY;
use crate::domain::value_objects::{Address, Money, Parcel, ShipmentId};
use crate::infrastructure::carriers::error::{ProviderError, ProviderResult};
use crate::infrastructure::carriers::http_client::HttpClient;
use crate::infrastructure::carriers::traits::{ProviderShipment, ShipmentRequest, ShippingProvider};
use async_trait::async_trait;
use reqwest::Url;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.easypost.com/v2";

/// EasyPost API adapter.
#[derive(Debug, Clone)]
pub struct EasyPostProvider {
    client: HttpClient,
    base_url: String,
}

impl EasyPostProvider {
    /// Creates an adapter for `base_url`.
    ///
    /// Without an API key every call fails with an authentication error
    /// before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout_ms: u64,
    ) -> ProviderResult<Self> {
        let mut client = HttpClient::new(timeout_ms)?;
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            client = client.with_basic_auth(key);
        }
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the API root requests are sent to.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Appends `segments` to the API root, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> ProviderResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ProviderError::internal(format!("invalid base URL {}: {e}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                ProviderError::internal(format!("base URL {} has no path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn ensure_credentials(&self) -> ProviderResult<()> {
        if self.client.has_credentials() {
            Ok(())
        } else {
            Err(ProviderError::authentication("EasyPost API key is not configured"))
        }
    }
}

#[async_trait]
impl ShippingProvider for EasyPostProvider {
    fn name(&self) -> &str {
        "easypost"
    }

    async fn create_shipment(&self, request: &ShipmentRequest) -> ProviderResult<ProviderShipment> {
        self.ensure_credentials()?;
        let body = CreateShipmentBody {
            shipment: WireShipmentRequest {
                from_address: &request.from_address,
                to_address: &request.to_address,
                parcel: WireParcel::from(&request.parcel),
            },
        };

        let url = self.url(&["shipments"])?;
        let response: WireShipment = self.client.post(url.as_str(), &body).await?;
        debug!(shipment_id = %response.id, rates = response.rates.len(), "shipment created");

        let rates = response
            .rates
            .into_iter()
            .map(WireRate::into_rate)
            .collect();
        Ok(ProviderShipment {
            id: ShipmentId::new(response.id),
            rates,
        })
    }

    async fn verify_address(&self, address: &Address) -> ProviderResult<AddressVerification> {
        self.ensure_credentials()?;
        let body = VerifyAddressBody {
            address,
            verify: true,
        };

        let url = self.url(&["addresses"])?;
        let response: WireAddress = self.client.post(url.as_str(), &body).await?;
        let delivery = response
            .verifications
            .as_ref()
            .and_then(|v| v.delivery.clone())
            .unwrap_or_default();
        debug!(verified = delivery.success, errors = delivery.errors.len(), "address verified");

        let normalized = response.into_address();
        Ok(if delivery.success {
            AddressVerification::verified(normalized)
        } else {
            let issues = delivery
                .errors
                .into_iter()
                .map(|e| VerificationIssue {
                    code: e.code,
                    field: e.field,
                    message: e.message,
                })
                .collect();
            AddressVerification::rejected(normalized, issues)
        })
    }

    async fn buy_shipment(
        &self,
        request: &PurchaseRequest,
    ) -> ProviderResult<PurchaseConfirmation> {
        self.ensure_credentials()?;
        let body = BuyBody {
            rate: RateRef {
                id: request.rate_id.as_str(),
            },
            insurance: request.insurance.map(|m| m.to_cents().amount()),
        };
        let url = self.url(&["shipments", request.shipment_id.as_str(), "buy"])?;

        let response: WireBoughtShipment = self.client.post(url.as_str(), &body).await?;
        debug!(shipment_id = %response.id, "label purchased");

        let tracking_code = response
            .tracking_code
            .ok_or_else(|| ProviderError::protocol("purchase response has no tracking code"))?;
        let postage_label = response
            .postage_label
            .ok_or_else(|| ProviderError::protocol("purchase response has no postage label"))?;
        let selected_rate = response
            .selected_rate
            .ok_or_else(|| ProviderError::protocol("purchase response has no selected rate"))?;

        Ok(PurchaseConfirmation {
            shipment_id: ShipmentId::new(response.id),
            tracking_code,
            postage_label: PostageLabel {
                label_url: postage_label.label_url,
                label_file_type: postage_label.label_file_type,
            },
            selected_rate: selected_rate.into_rate(),
            insurance: response.insurance.filter(|m| !m.is_zero()),
        })
    }
}

// Wire types.

#[derive(Debug, Serialize)]
struct CreateShipmentBody<'a> {
    shipment: WireShipmentRequest<'a>,
}

#[derive(Debug, Serialize)]
struct WireShipmentRequest<'a> {
    from_address: &'a Address,
    to_address: &'a Address,
    parcel: WireParcel,
}

/// Parcel as sent upstream: plain JSON numbers, weight in ounces.
#[derive(Debug, Serialize)]
struct WireParcel {
    #[serde(with = "rust_decimal::serde::float")]
    length: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    width: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    height: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    weight: Decimal,
}

impl From<&Parcel> for WireParcel {
    fn from(parcel: &Parcel) -> Self {
        Self {
            length: parcel.length(),
            width: parcel.width(),
            height: parcel.height(),
            weight: parcel.weight(),
        }
    }
}

#[derive(Debug, Serialize)]
struct VerifyAddressBody<'a> {
    address: &'a Address,
    verify: bool,
}

#[derive(Debug, Serialize)]
struct BuyBody<'a> {
    rate: RateRef<'a>,
    #[serde(skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::str_option")]
    insurance: Option<Decimal>,
}

#[derive(Debug, Serialize)]
struct RateRef<'a> {
    id: &'a str,
}

#[derive(Debug, Deserialize)]
struct WireShipment {
    id: String,
    #[serde(default)]
    rates: Vec<WireRate>,
}

#[derive(Debug, Deserialize)]
struct WireRate {
    id: String,
    carrier: String,
    service: String,
    rate: Money,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    retail_rate: Option<Money>,
    #[serde(default)]
    list_rate: Option<Money>,
    #[serde(default)]
    delivery_days: Option<u32>,
    #[serde(default)]
    est_delivery_days: Option<u32>,
}

impl WireRate {
    fn into_rate(self) -> Rate {
        let mut rate = Rate::new(self.id, self.carrier, self.service, self.rate);
        if let Some(currency) = self.currency {
            rate = rate.with_currency(currency);
        }
        if let Some(retail) = self.retail_rate {
            rate = rate.with_retail_rate(retail);
        }
        if let Some(list) = self.list_rate {
            rate = rate.with_list_rate(list);
        }
        if let Some(days) = self.delivery_days.or(self.est_delivery_days) {
            rate = rate.with_delivery_days(days);
        }
        rate
    }
}

#[derive(Debug, Deserialize)]
struct WireAddress {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    street1: Option<String>,
    #[serde(default)]
    street2: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    zip: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    verifications: Option<WireVerifications>,
}

impl WireAddress {
    fn into_address(self) -> Address {
        Address {
            id: self.id,
            name: self.name,
            company: self.company,
            street1: self.street1,
            street2: self.street2,
            city: self.city,
            state: self.state,
            zip: self.zip.unwrap_or_default(),
            country: self.country.unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            phone: self.phone,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireVerifications {
    #[serde(default)]
    delivery: Option<WireVerification>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct WireVerification {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    errors: Vec<WireVerificationError>,
}

#[derive(Debug, Clone, Deserialize)]
struct WireVerificationError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    field: Option<String>,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct WireBoughtShipment {
    id: String,
    #[serde(default)]
    tracking_code: Option<String>,
    #[serde(default)]
    postage_label: Option<WirePostageLabel>,
    #[serde(default)]
    selected_rate: Option<WireRate>,
    #[serde(default)]
    insurance: Option<Money>,
}

#[derive(Debug, Deserialize)]
struct WirePostageLabel {
    label_url: String,
    #[serde(default)]
    label_file_type: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_rate_falls_back_to_est_delivery_days() {
        let wire: WireRate = serde_json::from_value(json!({
            "id": "rate_1",
            "carrier": "USPS",
            "service": "GroundAdvantage",
            "rate": "23.19",
            "retail_rate": "40.45",
            "list_rate": null,
            "delivery_days": null,
            "est_delivery_days": 4
        }))
        .unwrap();

        let rate = wire.into_rate();
        assert_eq!(rate.delivery_days(), Some(4));
        assert_eq!(rate.rate().amount(), "23.19".parse::<Decimal>().unwrap());
        assert!(rate.list_rate().is_none());
        assert_eq!(rate.currency(), "USD");
    }

    #[test]
    fn wire_parcel_serializes_numbers() {
        let parcel = Parcel::new(
            Decimal::TEN,
            "8.5".parse().unwrap(),
            Decimal::from(4),
            Decimal::from(34),
        )
        .unwrap();
        let json = serde_json::to_value(WireParcel::from(&parcel)).unwrap();
        assert_eq!(json["width"], json!(8.5));
        assert_eq!(json["weight"], json!(34.0));
    }

    #[test]
    fn buy_body_omits_missing_insurance() {
        let body = BuyBody {
            rate: RateRef { id: "rate_1" },
            insurance: None,
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"rate": {"id": "rate_1"}}));

        let body = BuyBody {
            rate: RateRef { id: "rate_1" },
            insurance: Some("100.00".parse().unwrap()),
        };
        assert_eq!(serde_json::to_value(&body).unwrap()["insurance"], "100.00");
    }

    #[test]
    fn wire_address_defaults_country() {
        let wire: WireAddress = serde_json::from_value(json!({
            "id": "adr_1",
            "street1": "1 MAIN ST",
            "zip": "62701",
            "country": null
        }))
        .unwrap();
        let address = wire.into_address();
        assert_eq!(address.country, "US");
        assert_eq!(address.id.as_deref(), Some("adr_1"));
    }

    #[tokio::test]
    async fn missing_key_fails_before_request() {
        let provider = EasyPostProvider::new("http://127.0.0.1:9", None, 1000).unwrap();
        let err = provider
            .verify_address(&Address::street("1 Main St", "Springfield", "IL", "62701"))
            .await
            .unwrap_err();
        assert!(err.is_authentication());
    }

    #[test]
    fn trims_trailing_slash() {
        let provider = EasyPostProvider::new("https://api.easypost.com/v2/", None, 1000).unwrap();
        assert_eq!(provider.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn url_segments_are_escaped() {
        let provider = EasyPostProvider::new("https://api.easypost.com/v2/", None, 1000).unwrap();
        assert_eq!(
            provider.url(&["shipments"]).unwrap().as_str(),
            "https://api.easypost.com/v2/shipments"
        );
        assert_eq!(
            provider
                .url(&["shipments", "../addresses/adr_1", "buy"])
                .unwrap()
                .as_str(),
            "https://api.easypost.com/v2/shipments/..%2Faddresses%2Fadr_1/buy"
        );
        assert_eq!(
            provider.url(&["shipments", "shp_1?x=", "buy"]).unwrap().path(),
            "/v2/shipments/shp_1%3Fx=/buy"
        );
    }

    #[test]
    fn unparseable_base_url_is_internal() {
        let provider = EasyPostProvider::new("not a url", None, 1000).unwrap();
        let err = provider.url(&["shipments"]).unwrap_err();
        assert!(matches!(err, ProviderError::Internal { .. }));
    }
}
