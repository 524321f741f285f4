use configuration::LevelsSettings;
use core_types::PriceSeries;
use indicators::math::{self, round2};

use crate::error::LevelError;
use crate::types::{LevelSource, PivotPoints, PriceLevel, ReferenceLevel, SupportResistanceLevels};

/// Derives the support and resistance map for a symbol.
///
/// Two families of levels feed the result. Historical swing pivots over
/// the lookback window are clustered into representative prices and
/// carry the structural weight; the classic pivot ladder from the latest
/// bar only pads a side that came up short.
#[derive(Debug, Clone)]
pub struct LevelEngine {
    settings: LevelsSettings,
}

impl LevelEngine {
    pub fn new(settings: LevelsSettings) -> Self {
        Self { settings }
    }

    pub fn derive(&self, series: &PriceSeries) -> Result<SupportResistanceLevels, LevelError> {
        if series.is_empty() {
            return Err(LevelError::NotEnoughData("price series is empty".to_string()));
        }
        let highs = series.highs()?;
        let lows = series.lows()?;
        let closes = series.closes()?;
        let current_price = closes[closes.len() - 1];

        let pivot = classic_pivots(highs[highs.len() - 1], lows[lows.len() - 1], current_price);

        let start = highs.len().saturating_sub(self.settings.lookback_days);
        let (swing_highs, swing_lows) =
            swing_pivots(&highs[start..], &lows[start..], self.settings.swing_window);
        tracing::debug!(
            swing_highs = swing_highs.len(),
            swing_lows = swing_lows.len(),
            lookback = self.settings.lookback_days,
            "Scanned swing pivots"
        );

        let high_clusters = cluster(swing_highs, self.settings.cluster_tolerance_pct);
        let low_clusters = cluster(swing_lows, self.settings.cluster_tolerance_pct);

        let resistance = select_side(
            &high_clusters,
            [pivot.r1, pivot.r2, pivot.r3],
            current_price,
            true,
            self.settings.num_levels,
        );
        let support = select_side(
            &low_clusters,
            [pivot.s1, pivot.s2, pivot.s3],
            current_price,
            false,
            self.settings.num_levels,
        );

        let high_52w = math::week52_high(&highs)
            .ok_or_else(|| LevelError::NotEnoughData("52-week high undefined".to_string()))?;
        let low_52w = math::week52_low(&lows)
            .ok_or_else(|| LevelError::NotEnoughData("52-week low undefined".to_string()))?;

        Ok(SupportResistanceLevels {
            pivot,
            resistance,
            support,
            week52_high: reference(high_52w, current_price),
            week52_low: reference(low_52w, current_price),
        })
    }
}

/// The classic floor-trader ladder from a single bar.
fn classic_pivots(high: f64, low: f64, close: f64) -> PivotPoints {
    let pivot = (high + low + close) / 3.0;
    let range = high - low;
    PivotPoints {
        pivot: round2(pivot),
        r1: round2(2.0 * pivot - low),
        r2: round2(pivot + range),
        r3: round2(2.0 * pivot - low + range),
        s1: round2(2.0 * pivot - high),
        s2: round2(pivot - range),
        s3: round2(2.0 * pivot - high - range),
    }
}

/// Collects swing highs and lows over the window.
///
/// A bar qualifies when its extreme equals the extreme of the full
/// neighborhood, so the ends of the slice (with one-sided neighborhoods)
/// never qualify and ties inside a flat stretch all do.
fn swing_pivots(highs: &[f64], lows: &[f64], window: usize) -> (Vec<f64>, Vec<f64>) {
    let mut swing_highs = Vec::new();
    let mut swing_lows = Vec::new();
    if highs.len() < window * 2 + 1 {
        return (swing_highs, swing_lows);
    }
    for i in window..highs.len() - window {
        let max = highs[i - window..=i + window]
            .iter()
            .copied()
            .fold(f64::MIN, f64::max);
        if highs[i] == max {
            swing_highs.push(highs[i]);
        }
        let min = lows[i - window..=i + window]
            .iter()
            .copied()
            .fold(f64::MAX, f64::min);
        if lows[i] == min {
            swing_lows.push(lows[i]);
        }
    }
    (swing_highs, swing_lows)
}

/// Merges nearby pivots into representative levels.
///
/// Values are sorted, then each joins the running cluster while it sits
/// within the relative tolerance of the cluster's mean. Each finished
/// cluster is reduced to its mean.
fn cluster(mut values: Vec<f64>, tolerance_pct: f64) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    values.sort_by(f64::total_cmp);
    let mean = |cluster: &[f64]| cluster.iter().sum::<f64>() / cluster.len() as f64;

    let mut clusters = Vec::new();
    let mut current = vec![values[0]];
    for value in values.into_iter().skip(1) {
        let center = mean(&current);
        if (value - center) / center <= tolerance_pct / 100.0 {
            current.push(value);
        } else {
            clusters.push(mean(&current));
            current = vec![value];
        }
    }
    clusters.push(mean(&current));
    clusters
}

/// Builds one side's final list: clusters on the correct side of price,
/// padded with the classic ladder only when short, then nearest-first
/// and truncated.
fn select_side(
    clusters: &[f64],
    classic: [f64; 3],
    current_price: f64,
    is_resistance: bool,
    num_levels: usize,
) -> Vec<PriceLevel> {
    let on_side = |value: f64| {
        if is_resistance {
            value > current_price
        } else {
            value < current_price
        }
    };

    let mut candidates: Vec<PriceLevel> = clusters
        .iter()
        .copied()
        .filter(|value| on_side(*value))
        .map(|value| price_level(value, current_price, LevelSource::SwingCluster))
        .collect();
    if candidates.len() < num_levels {
        candidates.extend(
            classic
                .into_iter()
                .filter(|value| on_side(*value))
                .map(|value| price_level(value, current_price, LevelSource::PivotPoint)),
        );
    }

    candidates.sort_by(|a, b| a.distance_pct.total_cmp(&b.distance_pct));
    candidates.dedup_by(|a, b| a.price == b.price);
    candidates.truncate(num_levels);
    candidates
}

fn price_level(value: f64, current_price: f64, source: LevelSource) -> PriceLevel {
    let price = round2(value);
    PriceLevel {
        price,
        distance_pct: round2((price - current_price).abs() / current_price * 100.0),
        source,
    }
}

fn reference(price: f64, current_price: f64) -> ReferenceLevel {
    ReferenceLevel {
        price,
        distance_pct: round2((price - current_price).abs() / current_price * 100.0),
    }
}
