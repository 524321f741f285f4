//! # Lodestar Risk
//!
//! The `risk` crate turns a trade direction and a level map into a
//! complete `RiskManagementPlan`: an entry zone, a protective stop with
//! its rationale, three take-profit tiers with option-gain bands, and
//! the fixed trailing-stop schedule.
//!
//! ## Architectural Principles
//!
//! 1. **Structure First**: Stops and targets lean on the nearest
//!    structural levels whenever the chart provides them; percentage
//!    offsets are a fallback, not the default.
//! 2. **Total Calculation**: Thin inputs (no levels, no EMA) degrade to
//!    fallbacks. Building a plan never fails.
//! 3. **Direction Symmetry**: CALL and PUT plans are mirror images
//!    produced by the same code paths.
//!
//! ## Public API
//!
//! The primary entry point is the [`RiskCalculator`] struct.

pub mod calculator;
pub mod types;

// Re-export the core types to provide a clean public API.
pub use calculator::RiskCalculator;
pub use types::{
    EntryZone, RiskManagementPlan, StopLoss, StopTargetSuggestion, TakeProfitTarget,
    TrailingStopRule,
};
