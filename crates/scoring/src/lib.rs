//! # Lodestar Scoring
//!
//! The `scoring` crate is the heart of the methodology. It assembles the
//! criteria checkers into three fixed rule sets (bullish-5, bearish-5
//! and the bullish-oriented enhanced-7), tallies the satisfied counts,
//! and runs a priority-ordered decision table that maps the tally to a
//! trend signal and an options recommendation.
//!
//! ## Architectural Principles
//!
//! 1. **One-Shot Classification**: Each scoring pass is a pure function
//!    of current data. There is no memory between calls; "state" is a
//!    decision table over counts, not a transition system.
//! 2. **Bearish Priority**: When a synthetic tape satisfies both signal
//!    thresholds at once, the bearish branch wins. The table is evaluated
//!    strictly in priority order, first match wins.
//! 3. **Always Answer**: Every branch, including no-trade, populates the
//!    full recommendation (strategy, confidence, reasoning, entry, risk).
//!
//! ## Public API
//!
//! The primary entry points are the [`TrendScorer`] struct and the
//! [`decide`] function.

pub mod decision;
pub mod scorer;

// Re-export the core types to provide a clean public API.
pub use decision::{decide, CriteriaTally, OptionsRecommendation, TrendDecision};
pub use scorer::{ScoreInput, TrendScore, TrendScorer};
