//! EasyPost adapter against a mock HTTP server.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use parcel_rates::domain::entities::PurchaseRequest;
use parcel_rates::domain::value_objects::{Address, Money, Parcel, RateId, ShipmentId};
use parcel_rates::infrastructure::carriers::{
    EasyPostProvider, ProviderError, ShipmentRequest, ShippingProvider,
};
use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{basic_auth, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "EZTK_test_key";

fn provider(server: &MockServer) -> EasyPostProvider {
    EasyPostProvider::new(server.uri(), Some(API_KEY.to_string()), 2_000).unwrap()
}

fn shipment_request() -> ShipmentRequest {
    ShipmentRequest::new(
        Address::street("417 Montgomery St", "San Francisco", "CA", "94104"),
        Address::postal("10001", "US"),
        Parcel::new(
            Decimal::from(10),
            Decimal::from(8),
            Decimal::from(4),
            Decimal::from(24),
        )
        .unwrap(),
    )
}

#[tokio::test]
async fn creates_shipment_and_maps_rates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shipments"))
        .and(basic_auth(API_KEY, ""))
        .and(body_partial_json(json!({
            "shipment": {
                "to_address": {"zip": "10001"},
                "parcel": {"weight": 24.0}
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "shp_123",
            "rates": [
                {
                    "id": "rate_a",
                    "carrier": "USPS",
                    "service": "GroundAdvantage",
                    "rate": "8.21",
                    "retail_rate": "12.30",
                    "currency": "USD",
                    "delivery_days": null,
                    "est_delivery_days": 3
                },
                {
                    "id": "rate_b",
                    "carrier": "UPS",
                    "service": "NextDayAir",
                    "rate": "61.40",
                    "delivery_days": 1
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let shipment = provider(&server)
        .create_shipment(&shipment_request())
        .await
        .unwrap();

    assert_eq!(shipment.id.as_str(), "shp_123");
    assert_eq!(shipment.rates.len(), 2);
    assert_eq!(shipment.rates[0].delivery_days(), Some(3));
    assert_eq!(shipment.rates[0].retail_rate().unwrap().to_string(), "$12.30");
    assert_eq!(shipment.rates[1].carrier(), "UPS");
    assert!(shipment.rates[1].retail_rate().is_none());
}

#[tokio::test]
async fn unauthorized_maps_to_authentication() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shipments"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"code": "APIKEY.INACTIVE", "message": "This api key is no longer active."}
        })))
        .mount(&server)
        .await;

    let err = provider(&server)
        .create_shipment(&shipment_request())
        .await
        .unwrap_err();

    assert!(err.is_authentication());
    assert_eq!(err.message(), "This api key is no longer active.");
}

#[tokio::test]
async fn unprocessable_keeps_provider_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shipments"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error": {"code": "SHIPMENT.INVALID_PARAMS", "message": "Invalid parcel dimensions."}
        })))
        .mount(&server)
        .await;

    let err = provider(&server)
        .create_shipment(&shipment_request())
        .await
        .unwrap_err();

    assert!(err.is_client_error());
    assert_eq!(err.error_code(), Some("SHIPMENT.INVALID_PARAMS"));
    assert_eq!(err.message(), "Invalid parcel dimensions.");
}

#[tokio::test]
async fn server_error_is_not_a_client_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shipments"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let err = provider(&server)
        .create_shipment(&shipment_request())
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Connection { .. }));
    assert!(!err.is_client_error());
}

#[tokio::test]
async fn missing_key_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let provider = EasyPostProvider::new(server.uri(), Some("  ".to_string()), 2_000).unwrap();
    let err = provider.create_shipment(&shipment_request()).await.unwrap_err();

    assert!(err.is_authentication());
}

#[tokio::test]
async fn verifies_address() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/addresses"))
        .and(body_partial_json(json!({"verify": true, "address": {"zip": "94104"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "adr_1",
            "street1": "417 MONTGOMERY ST",
            "city": "SAN FRANCISCO",
            "state": "CA",
            "zip": "94104-1129",
            "country": "US",
            "verifications": {"delivery": {"success": true, "errors": []}}
        })))
        .mount(&server)
        .await;

    let verification = provider(&server)
        .verify_address(&Address::street("417 Montgomery St", "San Francisco", "CA", "94104"))
        .await
        .unwrap();

    assert!(verification.verified);
    assert!(verification.errors.is_empty());
    assert_eq!(verification.address.zip, "94104-1129");
    assert_eq!(verification.address.id.as_deref(), Some("adr_1"));
}

#[tokio::test]
async fn undeliverable_address_lists_issues() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/addresses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "adr_2",
            "zip": "00000",
            "verifications": {"delivery": {
                "success": false,
                "errors": [{
                    "code": "E.ADDRESS.NOT_FOUND",
                    "field": "address",
                    "message": "Address not found"
                }]
            }}
        })))
        .mount(&server)
        .await;

    let verification = provider(&server)
        .verify_address(&Address::street("1 Nowhere", "Nowhere", "ZZ", "00000"))
        .await
        .unwrap();

    assert!(!verification.verified);
    assert_eq!(verification.errors[0].message, "Address not found");
    assert_eq!(verification.address.country, "US");
}

#[tokio::test]
async fn buys_label_with_insurance() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shipments/shp_123/buy"))
        .and(body_partial_json(json!({"rate": {"id": "rate_a"}, "insurance": "150.00"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "shp_123",
            "tracking_code": "9400100000000000000000",
            "postage_label": {
                "label_url": "https://labels.example/shp_123.png",
                "label_file_type": "image/png"
            },
            "selected_rate": {
                "id": "rate_a",
                "carrier": "USPS",
                "service": "GroundAdvantage",
                "rate": "8.21"
            },
            "insurance": "150.00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = PurchaseRequest::new(ShipmentId::new("shp_123"), RateId::new("rate_a"))
        .with_insurance(Money::new(Decimal::new(15000, 2)).unwrap());
    let confirmation = provider(&server).buy_shipment(&request).await.unwrap();

    assert_eq!(confirmation.tracking_code, "9400100000000000000000");
    assert_eq!(confirmation.selected_rate.id().as_str(), "rate_a");
    assert_eq!(confirmation.insurance.unwrap().to_string(), "$150.00");
}

#[tokio::test]
async fn purchase_without_tracking_code_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shipments/shp_123/buy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "shp_123"})))
        .mount(&server)
        .await;

    let request = PurchaseRequest::new(ShipmentId::new("shp_123"), RateId::new("rate_a"));
    let err = provider(&server).buy_shipment(&request).await.unwrap_err();

    assert!(matches!(err, ProviderError::Protocol { .. }));
}

#[tokio::test]
async fn shipment_id_is_sent_as_one_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shipments/shp_1%3Fx=/buy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "shp_1",
            "tracking_code": "9400100000000000000001",
            "postage_label": {"label_url": "https://labels.example/shp_1.png"},
            "selected_rate": {
                "id": "rate_a",
                "carrier": "USPS",
                "service": "GroundAdvantage",
                "rate": "8.21"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = PurchaseRequest::new(ShipmentId::new("shp_1?x="), RateId::new("rate_a"));
    let confirmation = provider(&server).buy_shipment(&request).await.unwrap();

    assert_eq!(confirmation.tracking_code, "9400100000000000000001");
}
