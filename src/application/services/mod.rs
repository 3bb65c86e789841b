//! # Application Services
//!
//! Services that orchestrate domain logic.
//!
//! - [`RateComparisonEngine`]: ranked, annotated rate comparisons
//! - [`RankingStrategy`]: strategies for ordering rates
//! - [`FallbackRateProvider`]: substitute rates when the provider fails

pub mod fallback;
pub mod ranking_strategy;
pub mod rate_comparison;

pub use fallback::{
    FallbackPolicy, FallbackRateProvider, NoFallback, PlaceholderRates, placeholder_rates,
};
pub use ranking_strategy::{
    CheapestFirstStrategy, FastestFirstStrategy, RankedRate, RankingStrategy,
    RankingStrategyKind, cheapest_position,
};
pub use rate_comparison::{
    AdjustedRate, ComparisonOptions, RateComparison, RateComparisonEngine,
};
