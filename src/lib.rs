//! # parcel-rates
//!
//! Parcel shipping rate comparison service.
//!
//! Quotes carrier rates through an upstream provider, applies a configured
//! discount, computes savings against retail and estimated delivery dates,
//! ranks the results and brands each carrier. Addresses can be checked for
//! deliverability and labels bought for a quoted rate. When the provider is
//! unavailable a fixed placeholder rate set can be served instead.
//!
//! # Layers
//!
//! - [`domain`]: value objects, entities and the pure pricing calculations
//! - [`application`]: use cases, ranking strategies, fallback policy
//! - [`infrastructure`]: EasyPost adapter and the shipment cache
//! - [`api`]: axum REST endpoints
//! - [`config`], [`telemetry`]: settings and tracing setup

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
