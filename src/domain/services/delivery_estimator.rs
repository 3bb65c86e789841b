//! # Delivery Date Estimator
//!
//! Estimates the delivery date and time window for a rate.
//!
//! Transit counts are business days: Saturdays and Sundays are skipped and
//! never count toward the total. The time of day comes from the service
//! tier, which is derived from keywords in the carrier's service name.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use parcel_rates::domain::services::delivery_estimator::estimate_delivery;
//!
//! // Friday + 1 business day lands on Monday.
//! let friday = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! let estimate = estimate_delivery(friday, Some(1), "Next Day Air").unwrap();
//! assert_eq!(estimate.label, "Monday, Oct 19 by 10:30 AM");
//! ```

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Business days in a week.
const BUSINESS_DAYS_PER_WEEK: u32 = 5;

/// Delivery time window bucket for a carrier service.
///
/// Classification is a keyword match on the free-text service name, isolated
/// here so it can be swapped for a real service catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceTier {
    /// Express and next-day services.
    Overnight,
    /// Two-day services.
    TwoDay,
    /// Three-day and ground services.
    ThreeDayOrGround,
    /// Everything else.
    Standard,
}

impl ServiceTier {
    /// Classifies a service name. Case-insensitive; first match wins in
    /// the order overnight, two-day, three-day/ground.
    #[must_use]
    pub fn classify(service: &str) -> Self {
        let service = service.to_lowercase();
        let has = |keywords: &[&str]| keywords.iter().any(|k| service.contains(k));

        if has(&["express", "next day"]) {
            Self::Overnight
        } else if has(&["2 day", "2nd day"]) {
            Self::TwoDay
        } else if has(&["3 day", "ground"]) {
            Self::ThreeDayOrGround
        } else {
            Self::Standard
        }
    }

    /// Estimated delivery cutoff time for the tier.
    #[must_use]
    pub fn cutoff(&self) -> NaiveTime {
        let (hour, minute) = match self {
            Self::Overnight => (10, 30),
            Self::TwoDay => (15, 0),
            Self::ThreeDayOrGround => (23, 0),
            Self::Standard => (18, 0),
        };
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overnight => write!(f, "overnight"),
            Self::TwoDay => write!(f, "two_day"),
            Self::ThreeDayOrGround => write!(f, "three_day_or_ground"),
            Self::Standard => write!(f, "standard"),
        }
    }
}

/// An estimated delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryEstimate {
    /// Estimated delivery date.
    pub date: NaiveDate,
    /// Cutoff time, e.g. `10:30 AM`.
    pub cutoff: String,
    /// Service tier the cutoff was taken from.
    pub tier: ServiceTier,
    /// Display line, e.g. `Monday, Oct 19 by 10:30 AM`.
    pub label: String,
}

/// Returns the date `days` business days after `start`.
///
/// Weekend days are skipped entirely. Zero days returns `start` unchanged.
/// Returns `None` if the result is out of the calendar's range.
#[must_use]
pub fn add_business_days(start: NaiveDate, days: u32) -> Option<NaiveDate> {
    if days == 0 {
        return Some(start);
    }

    // From a weekend, the first business day reached is the same as from Friday.
    let mut date = match start.weekday() {
        Weekday::Sat => start.checked_sub_days(Days::new(1))?,
        Weekday::Sun => start.checked_sub_days(Days::new(2))?,
        _ => start,
    };

    let weeks = days / BUSINESS_DAYS_PER_WEEK;
    date = date.checked_add_days(Days::new(u64::from(weeks) * 7))?;

    let mut remaining = days % BUSINESS_DAYS_PER_WEEK;
    while remaining > 0 {
        date = date.succ_opt()?;
        if !is_weekend(date) {
            remaining -= 1;
        }
    }
    Some(date)
}

/// Estimates delivery for a rate shipped on `ship_date`.
///
/// Returns `None` when the carrier gives no transit estimate.
#[must_use]
pub fn estimate_delivery(
    ship_date: NaiveDate,
    business_days: Option<u32>,
    service: &str,
) -> Option<DeliveryEstimate> {
    let date = add_business_days(ship_date, business_days?)?;
    let tier = ServiceTier::classify(service);
    let cutoff = tier.cutoff().format("%-I:%M %p").to_string();
    let label = format!("{} by {}", date.format("%A, %b %-d"), cutoff);

    Some(DeliveryEstimate {
        date,
        cutoff,
        tier,
        label,
    })
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
