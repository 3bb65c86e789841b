//! # Carrier Integrations
//!
//! Adapters for the upstream shipping API.
//!
//! - [`traits`]: the [`ShippingProvider`] port
//! - [`easypost`]: EasyPost REST adapter
//! - [`http_client`]: shared `reqwest` wrapper
//! - [`error`]: [`ProviderError`]

pub mod easypost;
pub mod error;
pub mod http_client;
pub mod traits;

pub use easypost::EasyPostProvider;
pub use error::{ProviderError, ProviderResult};
pub use http_client::HttpClient;
pub use traits::{ProviderShipment, ShipmentRequest, ShippingProvider};
