//! # Carrier Branding
//!
//! Display descriptors and liability coverage per carrier.
//!
//! Known carriers get a fixed style; anything else gets a generic descriptor
//! labelled with the first three letters of the uppercased carrier name.

use crate::domain::value_objects::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyph used for carriers without their own branding.
pub const GENERIC_GLYPH: &str = "📦";

/// Carriers with dedicated branding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownCarrier {
    /// United Parcel Service.
    Ups,
    /// United States Postal Service.
    Usps,
    /// FedEx.
    FedEx,
    /// OnTrac.
    OnTrac,
}

impl KnownCarrier {
    /// Parses a carrier name, ignoring case.
    #[must_use]
    pub fn parse(carrier: &str) -> Option<Self> {
        match carrier.to_uppercase().as_str() {
            "UPS" => Some(Self::Ups),
            "USPS" => Some(Self::Usps),
            "FEDEX" => Some(Self::FedEx),
            "ONTRAC" => Some(Self::OnTrac),
            _ => None,
        }
    }
}

/// Style descriptor for rendering a carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierBranding {
    /// Icon glyph.
    pub glyph: String,
    /// Short label drawn next to the glyph.
    pub label: String,
    /// Card background color.
    pub background: String,
    /// Accent (badge and icon) color.
    pub accent: String,
    /// Text color.
    pub text_color: String,
    /// One-line description.
    pub tagline: String,
}

impl CarrierBranding {
    fn new(glyph: &str, label: &str, colors: [&str; 3], tagline: &str) -> Self {
        let [background, accent, text_color] = colors;
        Self {
            glyph: glyph.to_string(),
            label: label.to_string(),
            background: background.to_string(),
            accent: accent.to_string(),
            text_color: text_color.to_string(),
            tagline: tagline.to_string(),
        }
    }
}

/// Looks up branding for a carrier name (case-insensitive).
///
/// # Examples
///
/// ```
/// use parcel_rates::domain::services::carrier_branding::branding_for;
///
/// assert_eq!(branding_for("fedex").label, "FedEx");
/// assert_eq!(branding_for("dhl express").label, "DHL");
/// ```
#[must_use]
pub fn branding_for(carrier: &str) -> CarrierBranding {
    match KnownCarrier::parse(carrier) {
        Some(KnownCarrier::Ups) => CarrierBranding::new(
            "🚚",
            "UPS",
            ["#fffbeb", "#92400e", "#78350f"],
            "Day-definite ground and air across the network",
        ),
        Some(KnownCarrier::Usps) => CarrierBranding::new(
            "✉️",
            "USPS",
            ["#eff6ff", "#1d4ed8", "#1e3a8a"],
            "Delivers to every address, including PO boxes",
        ),
        Some(KnownCarrier::FedEx) => CarrierBranding::new(
            "✈️",
            "FedEx",
            ["#faf5ff", "#7e22ce", "#581c87"],
            "Time-definite express and freight",
        ),
        Some(KnownCarrier::OnTrac) => CarrierBranding::new(
            "🛻",
            "OnTrac",
            ["#f0fdf4", "#15803d", "#14532d"],
            "Regional ground with fast transit times",
        ),
        None => {
            let label: String = carrier.to_uppercase().chars().take(3).collect();
            CarrierBranding::new(
                GENERIC_GLYPH,
                &label,
                ["#f9fafb", "#374151", "#111827"],
                "Carrier rate",
            )
        }
    }
}

/// Carrier liability coverage bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiabilityTier {
    /// Base coverage.
    Standard,
    /// Higher coverage for premium services and UPS.
    Enhanced,
}

impl LiabilityTier {
    /// Coverage amount for the tier.
    #[must_use]
    pub fn amount(&self) -> Money {
        let dollars = match self {
            Self::Standard => 50,
            Self::Enhanced => 100,
        };
        Money::clamped(Decimal::from(dollars))
    }
}

impl fmt::Display for LiabilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} carrier liability", self.amount())
    }
}

/// Determines carrier liability coverage for a rate.
#[must_use]
pub fn liability_for(carrier: &str, service: &str) -> LiabilityTier {
    let service = service.to_lowercase();
    let premium_service = service.contains("express")
        || service.contains("priority")
        || service.contains("ground advantage");

    if premium_service || KnownCarrier::parse(carrier) == Some(KnownCarrier::Ups) {
        LiabilityTier::Enhanced
    } else {
        LiabilityTier::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_carriers_case_insensitive() {
        assert_eq!(branding_for("ups").label, "UPS");
        assert_eq!(branding_for("Usps").label, "USPS");
        assert_eq!(branding_for("OnTrac").accent, "#15803d");
    }

    #[test]
    fn unknown_carrier_falls_back() {
        let branding = branding_for("DHL");
        assert_eq!(branding.label, "DHL");
        assert_eq!(branding.glyph, GENERIC_GLYPH);

        assert_eq!(branding_for("canada post").label, "CAN");
        assert_eq!(branding_for("lso").label, "LSO");
        assert_eq!(branding_for("").label, "");
    }

    #[test]
    fn liability_tiers() {
        assert_eq!(liability_for("USPS", "Priority Mail"), LiabilityTier::Enhanced);
        assert_eq!(liability_for("USPS", "Ground Advantage"), LiabilityTier::Enhanced);
        assert_eq!(liability_for("FedEx", "Express Saver"), LiabilityTier::Enhanced);
        assert_eq!(liability_for("ups", "Ground Saver"), LiabilityTier::Enhanced);
        assert_eq!(liability_for("FedEx", "2nd Day Air"), LiabilityTier::Standard);
        assert_eq!(liability_for("USPS", "Media Mail"), LiabilityTier::Standard);
    }

    #[test]
    fn liability_display() {
        assert_eq!(LiabilityTier::Enhanced.to_string(), "$100.00 carrier liability");
        assert_eq!(LiabilityTier::Standard.to_string(), "$50.00 carrier liability");
    }
}
