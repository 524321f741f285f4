//! # Lodestar Analyzer
//!
//! The `analyzer` crate assembles the whole pipeline: indicators over
//! the fetched series, the scored rule sets, the structural level map,
//! and the risk plan for directional signals, all folded into one
//! `AnalysisResult` per symbol.
//!
//! ## Architectural Principles
//!
//! 1. **Strictly Downward Flow**: Series to indicators to criteria to
//!    decision to levels and risk. No stage mutates an earlier stage's
//!    output.
//! 2. **One Record Per Symbol**: Total fetch failure produces the
//!    UNKNOWN sentinel, never an error. A scan over a watchlist always
//!    yields a result for every symbol.
//! 3. **Stateless Pipeline**: The analyzer holds configured engines and
//!    nothing else. Analyzing a symbol twice with the same data yields
//!    identical results.
//!
//! ## Public API
//!
//! The primary entry points are the [`Analyzer`] struct and the
//! [`AnalysisResult`] record.

pub mod pipeline;
pub mod result;

// Re-export the core types to provide a clean public API.
pub use pipeline::Analyzer;
pub use result::AnalysisResult;
