//! # Lodestar Tracker
//!
//! This crate decides which finished analyses deserve an alert. It applies
//! the scanner's policy filters (signal direction, confidence floor,
//! criteria floor, extended-price veto) and a per-(symbol, direction)
//! cooldown window backed by a pluggable history store.
//!
//! ## Architectural Principles
//!
//! 1. **Read-Only Consumer**: the tracker consumes `AnalysisResult`
//!    records as-is. It never re-runs indicators or criteria.
//! 2. **Injected Store**: cooldown state lives behind the `CooldownStore`
//!    trait. Callers choose volatile or file-backed history; the analysis
//!    pipeline depends on neither.
//! 3. **Injected Clock**: `evaluate` takes `now` as an argument, so
//!    cooldown arithmetic is deterministic under test.
//!
//! ## Public API
//!
//! - `AlertPolicy`: the filter set plus cooldown evaluation.
//! - `ScanOutcome`: one symbol's verdict from a watchlist pass.
//! - `CooldownStore` / `InMemoryStore` / `JsonFileStore`: alert history.

pub mod error;
pub mod policy;
pub mod store;

// Re-export the core types to provide a clean public API.
pub use error::TrackerError;
pub use policy::{AlertPolicy, ScanOutcome};
pub use store::{AlertRecord, CooldownStore, InMemoryStore, JsonFileStore, cooldown_key};
