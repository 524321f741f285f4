//! # Lodestar Report
//!
//! This crate turns a finished `AnalysisResult` into human-readable console
//! output. It is the last, purely presentational stage of the pipeline and
//! holds no analysis logic of its own.
//!
//! ## Architectural Principles
//!
//! 1. **Render, Never Recompute**: every number printed here was computed
//!    upstream. This crate formats values; it never derives new ones.
//! 2. **Total Rendering**: a degraded result still renders. Missing metrics
//!    print as `N/A` and only the unknown sentinel collapses to a single
//!    could-not-analyze line.
//! 3. **Stable Wording**: checklist lines and summary cells use fixed
//!    phrasing so downstream consumers (and tests) can rely on it.
//!
//! ## Public API
//!
//! - `render`: the full single-symbol report.
//! - `render_levels`: the standalone support/resistance view.
//! - `scan_summary`: the one-row-per-symbol scan table.
//! - `reason_lines` / `criterion_line`: compact checklist rendering shared
//!   with alerting.

pub mod console;
pub mod reasons;

// Re-export the core functions to provide a clean public API.
pub use console::{render, render_levels, scan_summary};
pub use reasons::{criterion_line, reason_lines};
