//! # Domain Entities
//!
//! ## Aggregates
//!
//! - [`Shipment`]: a rate-quote session and its rates
//!
//! ## Entities
//!
//! - [`Rate`]: a carrier price quote
//! - [`PurchaseConfirmation`]: a bought label
//! - [`AddressVerification`]: provider verdict on an address

pub mod address_verification;
pub mod purchase;
pub mod rate;
pub mod shipment;

pub use address_verification::{AddressVerification, VerificationIssue};
pub use purchase::{PostageLabel, PurchaseConfirmation, PurchaseRequest};
pub use rate::Rate;
pub use shipment::{RateSource, Shipment};
