//! # REST Handlers
//!
//! Request handlers, shared state and response envelopes.
//!
//! Every response carries a `success` flag. Failures add `error` and a
//! machine-readable `code`:
//!
//! ```json
//! {
//!   "success": false,
//!   "error": "domain error: missing required field: to_address.zip",
//!   "code": "VALIDATION_ERROR"
//! }
//! ```

use crate::application::context::RequestContext;
use crate::application::error::ApplicationError;
use crate::application::services::fallback::FallbackPolicy;
use crate::application::services::ranking_strategy::RankingStrategyKind;
use crate::application::services::rate_comparison::RateComparison;
use crate::application::use_cases::{
    PurchaseLabelRequest, PurchaseLabelUseCase, QuoteRatesRequest, QuoteRatesUseCase,
    RenderComparisonRequest, RenderComparisonUseCase, ValidateAddressUseCase,
};
use crate::domain::entities::{AddressVerification, PurchaseConfirmation};
use crate::domain::services::{CarrierBranding, branding_for};
use crate::domain::value_objects::{Address, ShipmentId};
use crate::infrastructure::carriers::traits::ShippingProvider;
use crate::infrastructure::persistence::ShipmentRepository;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, warn};

/// Shared state for all handlers.
#[derive(Debug)]
pub struct AppState {
    /// Quote use case.
    pub quote_rates: QuoteRatesUseCase,
    /// Re-render use case.
    pub render_comparison: RenderComparisonUseCase,
    /// Address validation use case.
    pub validate_address: ValidateAddressUseCase,
    /// Label purchase use case.
    pub purchase_label: PurchaseLabelUseCase,
    /// Configured fallback, reported by the health check.
    pub fallback: FallbackPolicy,
    /// Upstream provider name, reported by the health check.
    pub provider_name: String,
    /// Shipment cache, sized by the health check.
    pub shipments: Arc<dyn ShipmentRepository>,
}

impl AppState {
    /// Wires the use cases around a provider and shipment cache.
    #[must_use]
    pub fn new(
        provider: Arc<dyn ShippingProvider>,
        repository: Arc<dyn ShipmentRepository>,
        fallback: FallbackPolicy,
        default_strategy: RankingStrategyKind,
    ) -> Self {
        Self {
            quote_rates: QuoteRatesUseCase::new(
                provider.clone(),
                repository.clone(),
                fallback.provider(),
            )
            .with_default_strategy(default_strategy),
            render_comparison: RenderComparisonUseCase::new(repository.clone())
                .with_default_strategy(default_strategy),
            validate_address: ValidateAddressUseCase::new(provider.clone()),
            purchase_label: PurchaseLabelUseCase::new(provider.clone(), repository.clone()),
            fallback,
            provider_name: provider.name().to_string(),
            shipments: repository,
        }
    }
}

/// Success envelope: `{"success": true, ...payload}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Always true.
    pub success: bool,
    /// Endpoint payload, flattened into the envelope.
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wraps a payload.
    #[must_use]
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// Address validation payload.
#[derive(Debug, Serialize)]
pub struct AddressResponse {
    /// Provider verdict.
    pub address: AddressVerification,
}

/// Label purchase payload.
#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    /// Bought shipment.
    pub shipment: PurchaseConfirmation,
}

/// Carrier branding payload.
#[derive(Debug, Serialize)]
pub struct BrandingResponse {
    /// Carrier name as requested.
    pub carrier: String,
    /// Style descriptor.
    pub branding: CarrierBranding,
}

/// Health check payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Upstream provider.
    pub provider: String,
    /// Configured fallback policy.
    pub fallback: FallbackPolicy,
    /// Shipments currently cached for re-rendering and purchase.
    pub cached_shipments: usize,
    /// Server time.
    pub timestamp: String,
}

/// Error response structure.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always false.
    pub success: bool,
    /// Human readable message.
    pub error: String,
    /// Machine-readable code.
    pub code: String,
    #[serde(skip)]
    status: StatusCode,
}

impl ErrorResponse {
    /// Creates an error response.
    #[must_use]
    pub fn new(status: StatusCode, code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            code: code.into(),
            status,
        }
    }

    /// Returns the HTTP status.
    #[inline]
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ApplicationError> for ErrorResponse {
    fn from(err: ApplicationError) -> Self {
        let status = if err.is_unauthorized() {
            StatusCode::UNAUTHORIZED
        } else if err.is_not_found() {
            StatusCode::NOT_FOUND
        } else if matches!(
            err,
            ApplicationError::Internal(_) | ApplicationError::Repository(_)
        ) {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::BAD_REQUEST
        };

        if status.is_server_error() {
            error!(error = %err, "request failed");
        } else {
            warn!(error = %err, code = err.code(), "request rejected");
        }
        Self::new(status, err.code(), err.to_string())
    }
}

impl From<JsonRejection> for ErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", rejection.body_text())
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ErrorResponse>;

/// `POST /api/v1/rates`
pub async fn quote_rates(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QuoteRatesRequest>, JsonRejection>,
) -> ApiResult<RateComparison> {
    let Json(request) = body?;
    let comparison = state.quote_rates.execute(request).await?;
    Ok(ApiResponse::ok(comparison))
}

/// `POST /api/v1/shipments/{id}/comparison`
pub async fn render_comparison(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<RenderComparisonRequest>, JsonRejection>,
) -> ApiResult<RateComparison> {
    let Json(request) = body?;
    let comparison = state
        .render_comparison
        .execute(&ShipmentId::new(id), request)
        .await?;
    Ok(ApiResponse::ok(comparison))
}

/// `POST /api/v1/address/validate`
pub async fn validate_address(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Address>, JsonRejection>,
) -> ApiResult<AddressResponse> {
    let Json(address) = body?;
    let verification = state.validate_address.execute(address).await?;
    Ok(ApiResponse::ok(AddressResponse {
        address: verification,
    }))
}

/// `POST /api/v1/shipments/{id}/buy`
pub async fn purchase_label(
    State(state): State<Arc<AppState>>,
    context: RequestContext,
    Path(id): Path<String>,
    body: Result<Json<PurchaseLabelRequest>, JsonRejection>,
) -> ApiResult<PurchaseResponse> {
    let Json(request) = body?;
    let confirmation = state
        .purchase_label
        .execute(&context, &ShipmentId::new(id), request)
        .await?;
    Ok(ApiResponse::ok(PurchaseResponse {
        shipment: confirmation,
    }))
}

/// `GET /api/v1/carriers/{carrier}/branding`
#[allow(clippy::unused_async)]
pub async fn carrier_branding(Path(carrier): Path<String>) -> Json<ApiResponse<BrandingResponse>> {
    let branding = branding_for(&carrier);
    ApiResponse::ok(BrandingResponse { carrier, branding })
}

/// `GET /api/v1/health`
pub async fn health(State(state): State<Arc<AppState>>) -> ApiResult<HealthResponse> {
    let cached_shipments = state
        .shipments
        .count()
        .await
        .map_err(ApplicationError::from)?;
    Ok(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: state.provider_name.clone(),
        fallback: state.fallback,
        cached_shipments,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
