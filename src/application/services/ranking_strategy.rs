//! # Ranking Strategy
//!
//! Strategies for ordering rates.
//!
//! This module provides the [`RankingStrategy`] trait and implementations
//! for ordering rates by price or by transit time. All strategies sort
//! stably, so rates that compare equal keep their provider order.

use crate::domain::entities::Rate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A rate with its ranking information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedRate {
    /// The rate being ranked.
    pub rate: Rate,
    /// The rank (1 = first).
    pub rank: usize,
    /// Index of the rate in the unranked input.
    pub position: usize,
}

impl RankedRate {
    /// Creates a new ranked rate.
    #[must_use]
    pub fn new(rate: Rate, rank: usize, position: usize) -> Self {
        Self {
            rate,
            rank,
            position,
        }
    }
}

/// Trait for ranking strategies.
pub trait RankingStrategy: Send + Sync + fmt::Debug {
    /// Orders `rates`, best first.
    fn rank(&self, rates: &[Rate]) -> Vec<RankedRate>;

    /// Returns the name of this ranking strategy.
    fn name(&self) -> &'static str;
}

/// Returns the index of the rate with the lowest base price.
///
/// Ties go to the earliest, so exactly one rate is cheapest even when the
/// provider repeats an id.
#[must_use]
pub fn cheapest_position(rates: &[Rate]) -> Option<usize> {
    rates
        .iter()
        .enumerate()
        .reduce(|best, candidate| {
            if candidate.1.rate() < best.1.rate() {
                candidate
            } else {
                best
            }
        })
        .map(|(position, _)| position)
}

fn ranked_by(rates: &[Rate], compare: impl Fn(&Rate, &Rate) -> Ordering) -> Vec<RankedRate> {
    let mut ordered: Vec<(usize, &Rate)> = rates.iter().enumerate().collect();
    ordered.sort_by(|a, b| compare(a.1, b.1));
    ordered
        .into_iter()
        .enumerate()
        .map(|(i, (position, rate))| RankedRate::new(rate.clone(), i + 1, position))
        .collect()
}

/// Cheapest first: ascending base price.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheapestFirstStrategy;

impl CheapestFirstStrategy {
    /// Creates a new cheapest-first strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RankingStrategy for CheapestFirstStrategy {
    fn rank(&self, rates: &[Rate]) -> Vec<RankedRate> {
        ranked_by(rates, |a, b| a.rate().cmp(&b.rate()))
    }

    fn name(&self) -> &'static str {
        "CheapestFirst"
    }
}

/// Fastest first: ascending transit days, unknown transit last, then price.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastestFirstStrategy;

impl FastestFirstStrategy {
    /// Creates a new fastest-first strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RankingStrategy for FastestFirstStrategy {
    fn rank(&self, rates: &[Rate]) -> Vec<RankedRate> {
        ranked_by(rates, |a, b| {
            let days = |r: &Rate| r.delivery_days().unwrap_or(u32::MAX);
            days(a)
                .cmp(&days(b))
                .then_with(|| a.rate().cmp(&b.rate()))
        })
    }

    fn name(&self) -> &'static str {
        "FastestFirst"
    }
}

/// Selectable ranking strategy, as named in configuration and requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingStrategyKind {
    /// [`CheapestFirstStrategy`].
    #[default]
    CheapestFirst,
    /// [`FastestFirstStrategy`].
    FastestFirst,
}

impl RankingStrategyKind {
    /// Returns the strategy implementation.
    #[must_use]
    pub fn strategy(self) -> &'static dyn RankingStrategy {
        match self {
            Self::CheapestFirst => &CheapestFirstStrategy,
            Self::FastestFirst => &FastestFirstStrategy,
        }
    }
}

impl fmt::Display for RankingStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheapestFirst => write!(f, "cheapest_first"),
            Self::FastestFirst => write!(f, "fastest_first"),
        }
    }
}
