//! # Lodestar Indicators
//!
//! This crate provides the technical-indicator layer of the analysis
//! pipeline: pure numeric transforms over ordered daily price series.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate with no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Total Functions:** Every indicator returns `Option` values. Short
//!   series, flat windows and division-by-zero cases degrade to `None`
//!   instead of raising, so a partial history still produces a usable
//!   snapshot.
//! - **Boundary Rounding:** Values are rounded to two decimal places at
//!   the computation boundary. The rule thresholds downstream compare
//!   against the rounded numbers, so the rounding itself is part of the
//!   contract.
//!
//! ## Public API
//!
//! - `IndicatorEngine`: The stateless calculator that builds a snapshot.
//! - `IndicatorSnapshot`: The most-recent value of every indicator.
//! - `math`: The individual indicator functions, usable on bare slices.
//! - `IndicatorError`: The specific error types returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod math;
pub mod snapshot;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{
    ADX_CONFIRMATION_PERIOD, ADX_TREND_PERIOD, ATR_PERIOD, IndicatorEngine, RSI_PERIOD,
    STOCH_D_PERIOD, STOCH_K_PERIOD,
};
pub use error::IndicatorError;
pub use snapshot::IndicatorSnapshot;
