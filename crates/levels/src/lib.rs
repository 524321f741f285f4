//! # Lodestar Levels
//!
//! The `levels` crate maps where a symbol's price has historically
//! stalled. It combines clustered swing pivots from the recent lookback
//! window with the classic floor-trader pivot ladder and the 52-week
//! extremes into a single `SupportResistanceLevels` record, which the
//! risk calculator uses to place stops and targets.
//!
//! ## Architectural Principles
//!
//! 1. **Structure Over Projection**: Historical swing clusters are
//!    preferred; the projected pivot ladder only pads a side that has
//!    too few structural levels.
//! 2. **Sided Output**: Every resistance sits above the current price
//!    and every support below it, ordered nearest first, so consumers
//!    can index the lists without re-checking.
//! 3. **Injected Knobs**: Lookback, swing window, cluster tolerance and
//!    list length all arrive through `LevelsSettings`.
//!
//! ## Public API
//!
//! The primary entry point is the [`LevelEngine`] struct.

pub mod engine;
pub mod error;
pub mod types;

// Re-export the core types to provide a clean public API.
pub use engine::LevelEngine;
pub use error::LevelError;
pub use types::{LevelSource, PivotPoints, PriceLevel, ReferenceLevel, SupportResistanceLevels};
