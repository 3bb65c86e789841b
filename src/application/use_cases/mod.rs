//! # Use Cases
//!
//! One struct per operation exposed by the service.
//!
//! - [`QuoteRatesUseCase`]: quote a shipment and render the comparison
//! - [`RenderComparisonUseCase`]: re-render a cached shipment
//! - [`ValidateAddressUseCase`]: provider address verification
//! - [`PurchaseLabelUseCase`]: buy a label for a rate

pub mod purchase_label;
pub mod quote_rates;
pub mod render_comparison;
pub mod validate_address;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support;

pub use purchase_label::{PurchaseLabelRequest, PurchaseLabelUseCase};
pub use quote_rates::{QuoteRatesRequest, QuoteRatesUseCase};
pub use render_comparison::{RenderComparisonRequest, RenderComparisonUseCase};
pub use validate_address::ValidateAddressUseCase;
