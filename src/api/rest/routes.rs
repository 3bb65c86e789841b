//! # REST Routes
//!
//! Router construction.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the API router with all endpoints under `/api/v1`.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_v1 = Router::new()
        .route("/rates", post(handlers::quote_rates))
        .route("/shipments/{id}/comparison", post(handlers::render_comparison))
        .route("/shipments/{id}/buy", post(handlers::purchase_label))
        .route("/address/validate", post(handlers::validate_address))
        .route("/carriers/{carrier}/branding", get(handlers::carrier_branding))
        .route("/health", get(handlers::health))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
