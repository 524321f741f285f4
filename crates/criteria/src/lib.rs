//! # Lodestar Criteria
//!
//! The `criteria` crate turns an indicator snapshot into named, evidenced
//! verdicts. Each checker answers one question about the setup (is the
//! trend stacked, is price pulled back, is an earnings report imminent)
//! and returns a `CriterionResult` carrying the answer plus the numbers
//! behind it.
//!
//! ## Architectural Principles
//!
//! 1. **Total Checkers**: A checker never fails. Missing indicator values
//!    degrade the verdict to unsatisfied with an explanatory evidence
//!    string, so one thin symbol cannot abort a watchlist scan.
//! 2. **Injected Thresholds**: Every cutoff (pullback tolerance, extension
//!    cap, earnings window) arrives through `AnalysisSettings`. The engine
//!    holds no hardcoded policy of its own.
//! 3. **No Aggregation**: This crate scores nothing. Counting satisfied
//!    criteria and mapping counts to signals is the scoring crate's job.
//!
//! ## Public API
//!
//! The primary entry point is the [`CriteriaEngine`] struct.

pub mod engine;

// Re-export the core types to provide a clean public API.
pub use engine::CriteriaEngine;
