//! # Lodestar Market Data
//!
//! The `market-data` crate is the pipeline's injected data source. It
//! defines the `MarketDataProvider` trait the analyzer consumes and two
//! implementations: a file provider reading per-symbol JSON histories
//! from a data directory, and an in-memory provider for tests and
//! embedding callers.
//!
//! ## Architectural Principles
//!
//! 1. **Injected Boundary**: The engine never fetches anything itself.
//!    It is handed a provider, so swapping the data source never touches
//!    analysis code.
//! 2. **No Silent Emptiness**: A symbol with no bars is a signaled
//!    `NoData` failure, never an empty success the pipeline would choke
//!    on later.
//! 3. **Clean Bars In**: Providers deliver bars sorted oldest first with
//!    duplicate dates rejected, so downstream code never re-validates
//!    ordering.
//!
//! ## Public API
//!
//! The primary entry points are the [`MarketDataProvider`] trait and the
//! [`FileProvider`] struct.

pub mod error;
pub mod provider;

// Re-export the core types to provide a clean public API.
pub use error::MarketDataError;
pub use provider::{FileProvider, MarketDataProvider, MemoryProvider};
