//! # REST API
//!
//! JSON endpoints using axum.
//!
//! # Endpoints
//!
//! ## Rates
//! - `POST /api/v1/rates` - Quote rates for a parcel and return the comparison
//! - `POST /api/v1/shipments/{id}/comparison` - Re-render a cached shipment with new options
//!
//! ## Shipping
//! - `POST /api/v1/address/validate` - Check an address for deliverability
//! - `POST /api/v1/shipments/{id}/buy` - Buy a label (requires `x-authenticated-user`)
//!
//! ## Presentation
//! - `GET /api/v1/carriers/{carrier}/branding` - Carrier style descriptor
//!
//! ## Health
//! - `GET /api/v1/health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use parcel_rates::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState::new(provider, repository, fallback, strategy));
//! let app = create_router(state);
//! ```

pub mod context;
pub mod handlers;
pub mod routes;

pub use context::AUTHENTICATED_USER_HEADER;
pub use handlers::{ApiResponse, AppState, ErrorResponse};
pub use routes::create_router;
