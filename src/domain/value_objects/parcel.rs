//! # Parcel
//!
//! Package dimensions and weight.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::CheckedArithmetic;
use crate::domain::value_objects::numeric_input::NumericInput;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ounces per pound.
const OUNCES_PER_POUND: Decimal = Decimal::from_parts(16, 0, 0, false, 0);

/// A validated parcel: dimensions in inches, weight in ounces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    length: Decimal,
    width: Decimal,
    height: Decimal,
    weight: Decimal,
}

impl Parcel {
    /// Creates a parcel.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidParcel` if any dimension or the weight is
    /// not strictly positive.
    pub fn new(
        length: Decimal,
        width: Decimal,
        height: Decimal,
        weight: Decimal,
    ) -> DomainResult<Self> {
        for (name, value) in [
            ("length", length),
            ("width", width),
            ("height", height),
            ("weight", weight),
        ] {
            if value <= Decimal::ZERO {
                return Err(DomainError::invalid_parcel(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        Ok(Self {
            length,
            width,
            height,
            weight,
        })
    }

    /// Length in inches.
    #[inline]
    #[must_use]
    pub fn length(&self) -> Decimal {
        self.length
    }

    /// Width in inches.
    #[inline]
    #[must_use]
    pub fn width(&self) -> Decimal {
        self.width
    }

    /// Height in inches.
    #[inline]
    #[must_use]
    pub fn height(&self) -> Decimal {
        self.height
    }

    /// Weight in ounces.
    #[inline]
    #[must_use]
    pub fn weight(&self) -> Decimal {
        self.weight
    }
}

/// Parcel fields as posted by the rate form.
///
/// Weight is either given directly in ounces (`weight`) or split into
/// `pounds` and `ounces`, which are summed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParcelInput {
    /// Length in inches.
    #[serde(default)]
    pub length: NumericInput,
    /// Width in inches.
    #[serde(default)]
    pub width: NumericInput,
    /// Height in inches.
    #[serde(default)]
    pub height: NumericInput,
    /// Total weight in ounces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<NumericInput>,
    /// Whole pounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pounds: Option<NumericInput>,
    /// Additional ounces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ounces: Option<NumericInput>,
}

impl ParcelInput {
    /// Parses and validates the form values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotNumeric` for a field that does not parse and
    /// `DomainError::InvalidParcel` for non-positive values.
    pub fn parse(&self) -> DomainResult<Parcel> {
        let length = self.length.require_decimal("parcel.length")?;
        let width = self.width.require_decimal("parcel.width")?;
        let height = self.height.require_decimal("parcel.height")?;
        let weight = self.weight_ounces()?;
        Parcel::new(length, width, height, weight)
    }

    fn weight_ounces(&self) -> DomainResult<Decimal> {
        if let Some(weight) = &self.weight {
            return weight.require_decimal("parcel.weight");
        }
        let pounds = match &self.pounds {
            Some(p) => p.require_decimal("parcel.pounds")?,
            None => Decimal::ZERO,
        };
        let ounces = match &self.ounces {
            Some(o) => o.require_decimal("parcel.ounces")?,
            None => Decimal::ZERO,
        };
        Ok(pounds.safe_mul(OUNCES_PER_POUND)?.safe_add(ounces)?)
    }
}
