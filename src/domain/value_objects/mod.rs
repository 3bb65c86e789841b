//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ShipmentId`], [`RateId`]: provider-issued string identifiers
//!
//! ## Numeric Types
//!
//! - [`Money`]: non-negative decimal price
//! - [`NumericInput`]: number-or-string form value
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations
//!
//! ## Shipment Inputs
//!
//! - [`Address`], [`Parcel`], [`ParcelInput`]
//! - [`DiscountConfig`], [`DiscountType`]

pub mod address;
pub mod arithmetic;
pub mod discount;
pub mod ids;
pub mod money;
pub mod numeric_input;
pub mod parcel;

pub use address::Address;
pub use arithmetic::{
    ArithmeticError, ArithmeticResult, CheckedArithmetic, round_cents, round_whole,
};
pub use discount::{DiscountConfig, DiscountType};
pub use ids::{RateId, ShipmentId};
pub use money::Money;
pub use numeric_input::NumericInput;
pub use parcel::{Parcel, ParcelInput};
