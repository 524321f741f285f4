use crate::error::CoreError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A single day of OHLCV market data for one symbol.
///
/// Prices are kept as exact decimals at the data boundary; the engine
/// converts them to `f64` exactly once via the `PriceSeries` accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

/// An ordered series of daily bars, oldest first.
///
/// Gaps from non-trading days are acceptable and never imputed. The
/// series must be non-empty for any computation to proceed; callers
/// check `is_empty` before running the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub bars: Vec<DailyBar>,
}

impl PriceSeries {
    pub fn new(bars: Vec<DailyBar>) -> Self {
        Self { bars }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&DailyBar> {
        self.bars.last()
    }

    /// The `close` column as `f64` values.
    pub fn closes(&self) -> Result<Vec<f64>, CoreError> {
        self.column("close", |bar| bar.close)
    }

    /// The `high` column as `f64` values.
    pub fn highs(&self) -> Result<Vec<f64>, CoreError> {
        self.column("high", |bar| bar.high)
    }

    /// The `low` column as `f64` values.
    pub fn lows(&self) -> Result<Vec<f64>, CoreError> {
        self.column("low", |bar| bar.low)
    }

    /// The `volume` column as `f64` values.
    pub fn volumes(&self) -> Result<Vec<f64>, CoreError> {
        self.column("volume", |bar| bar.volume)
    }

    fn column<F>(&self, name: &str, field: F) -> Result<Vec<f64>, CoreError>
    where
        F: Fn(&DailyBar) -> Decimal,
    {
        self.bars
            .iter()
            .map(|bar| {
                let value = field(bar);
                value.to_f64().ok_or_else(|| {
                    CoreError::NumericConversion(name.to_string(), value.to_string())
                })
            })
            .collect()
    }
}

/// Optional company metadata attached to a fetch result.
///
/// Every field may be absent. A missing earnings date is treated as
/// "no scheduled earnings" by the scoring rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerMetadata {
    pub company_name: Option<String>,
    pub next_earnings_date: Option<NaiveDate>,
}

/// A complete fetch result: one symbol's price history plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub symbol: String,
    pub series: PriceSeries,
    pub metadata: TickerMetadata,
}

/// The outcome of a single checklist criterion.
///
/// `evidence` holds the scalar values the predicate looked at, already
/// formatted for display, so report layers never recompute them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub name: String,
    pub satisfied: bool,
    pub evidence: String,
}

impl CriterionResult {
    pub fn new(name: &str, satisfied: bool, evidence: String) -> Self {
        Self {
            name: name.to_string(),
            satisfied,
            evidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bar(date: &str, close: Decimal) -> DailyBar {
        DailyBar {
            date: date.parse().unwrap(),
            open: close - dec!(1),
            high: close + dec!(2),
            low: close - dec!(2),
            close,
            volume: dec!(1000),
        }
    }

    #[test]
    fn test_columns_convert_to_f64_in_order() {
        let series = PriceSeries::new(vec![
            bar("2026-01-05", dec!(100.25)),
            bar("2026-01-06", dec!(101.50)),
            bar("2026-01-07", dec!(99.75)),
        ]);

        assert_eq!(series.closes().unwrap(), vec![100.25, 101.50, 99.75]);
        assert_eq!(series.highs().unwrap(), vec![102.25, 103.50, 101.75]);
        assert_eq!(series.lows().unwrap(), vec![98.25, 99.50, 97.75]);
        assert_eq!(series.volumes().unwrap(), vec![1000.0, 1000.0, 1000.0]);
    }

    #[test]
    fn test_empty_series_reports_empty() {
        let series = PriceSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert!(series.last().is_none());
        assert_eq!(series.closes().unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_metadata_defaults_to_unknown() {
        let metadata = TickerMetadata::default();
        assert!(metadata.company_name.is_none());
        assert!(metadata.next_earnings_date.is_none());
    }
}
