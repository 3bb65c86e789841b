//! # Domain Services
//!
//! Pure, stateless calculations over rate data.
//!
//! - [`discount_calculator`]: discounted price for a base rate
//! - [`savings`]: savings against retail
//! - [`delivery_estimator`]: business-day delivery date and time window
//! - [`carrier_branding`]: carrier style descriptors and liability tiers

pub mod carrier_branding;
pub mod delivery_estimator;
pub mod discount_calculator;
pub mod savings;

pub use carrier_branding::{
    CarrierBranding, KnownCarrier, LiabilityTier, branding_for, liability_for,
};
pub use delivery_estimator::{DeliveryEstimate, ServiceTier, add_business_days, estimate_delivery};
pub use discount_calculator::{DiscountOutcome, apply_discount};
pub use savings::{Savings, compute_savings};
