pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Confidence, TradeDirection, TrendSignal};
pub use error::CoreError;
pub use structs::{CriterionResult, DailyBar, MarketSnapshot, PriceSeries, TickerMetadata};
