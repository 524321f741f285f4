use std::collections::HashMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use core_types::{DailyBar, MarketSnapshot, PriceSeries, TickerMetadata};
use serde::Deserialize;

use crate::error::MarketDataError;

/// The injected data source the analysis pipeline runs against.
///
/// Implementations return one symbol's full daily history plus whatever
/// metadata they know. "No data" is a signaled failure, never an empty
/// success.
pub trait MarketDataProvider {
    fn fetch(&self, symbol: &str) -> Result<MarketSnapshot, MarketDataError>;
}

/// On-disk layout of one symbol file.
#[derive(Debug, Deserialize)]
struct SymbolFile {
    #[serde(default)]
    company_name: Option<String>,
    #[serde(default)]
    next_earnings_date: Option<NaiveDate>,
    bars: Vec<DailyBar>,
}

/// Reads symbol histories from JSON files under a data directory.
///
/// Each symbol lives in `<data_dir>/<SYMBOL>.json` with a `bars` array
/// of daily OHLCV records (prices as decimal strings) and optional
/// `company_name` and `next_earnings_date` fields. Bars are sorted by
/// date after load; duplicate dates are rejected.
#[derive(Debug, Clone)]
pub struct FileProvider {
    data_dir: PathBuf,
}

impl FileProvider {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

impl MarketDataProvider for FileProvider {
    fn fetch(&self, symbol: &str) -> Result<MarketSnapshot, MarketDataError> {
        let symbol = symbol.trim().to_uppercase();
        let path = self.data_dir.join(format!("{symbol}.json"));
        tracing::debug!(%symbol, path = %path.display(), "Loading symbol file");

        let raw = std::fs::read_to_string(&path)
            .map_err(|source| MarketDataError::Io(symbol.clone(), source))?;
        parse_snapshot(&symbol, &raw)
    }
}

/// Parses one symbol file into a validated snapshot.
fn parse_snapshot(symbol: &str, raw: &str) -> Result<MarketSnapshot, MarketDataError> {
    let file: SymbolFile = serde_json::from_str(raw)
        .map_err(|source| MarketDataError::Malformed(symbol.to_string(), source))?;
    if file.bars.is_empty() {
        return Err(MarketDataError::NoData(symbol.to_string()));
    }

    let mut bars = file.bars;
    bars.sort_by_key(|bar| bar.date);
    for pair in bars.windows(2) {
        if pair[0].date == pair[1].date {
            return Err(MarketDataError::Invalid(
                symbol.to_string(),
                format!("duplicate bar date {}", pair[0].date),
            ));
        }
    }
    tracing::debug!(%symbol, bars = bars.len(), "Loaded price history");

    Ok(MarketSnapshot {
        symbol: symbol.to_string(),
        series: PriceSeries::new(bars),
        metadata: TickerMetadata {
            company_name: file.company_name,
            next_earnings_date: file.next_earnings_date,
        },
    })
}

/// An in-memory provider for tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    snapshots: HashMap<String, MarketSnapshot>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, snapshot: MarketSnapshot) {
        self.snapshots.insert(snapshot.symbol.to_uppercase(), snapshot);
    }
}

impl MarketDataProvider for MemoryProvider {
    fn fetch(&self, symbol: &str) -> Result<MarketSnapshot, MarketDataError> {
        let symbol = symbol.trim().to_uppercase();
        self.snapshots
            .get(&symbol)
            .cloned()
            .ok_or(MarketDataError::NoData(symbol))
    }
}
