use serde::{Deserialize, Serialize};

/// Where a support or resistance level came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LevelSource {
    /// The mean of a cluster of historical swing pivots.
    SwingCluster,
    /// A classic floor-trader pivot projection from the latest bar.
    PivotPoint,
}

/// A single support or resistance price with its distance from the
/// current price. Which side it sits on is implied by the list holding it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: f64,
    /// Absolute percent distance from the current price, rounded.
    pub distance_pct: f64,
    pub source: LevelSource,
}

/// The classic pivot ladder projected from the latest bar's high, low
/// and close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotPoints {
    pub pivot: f64,
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
}

/// A 52-week extreme used as an auxiliary reference, not a tradeable level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLevel {
    pub price: f64,
    /// Absolute percent distance from the current price, rounded.
    pub distance_pct: f64,
}

/// The complete level map for one symbol: the pivot ladder, the selected
/// resistance and support lists (nearest first, at most `num_levels`
/// each), and the 52-week extremes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportResistanceLevels {
    pub pivot: PivotPoints,
    pub resistance: Vec<PriceLevel>,
    pub support: Vec<PriceLevel>,
    pub week52_high: ReferenceLevel,
    pub week52_low: ReferenceLevel,
}

impl SupportResistanceLevels {
    /// The resistance nearest the current price, if any survived selection.
    pub fn nearest_resistance(&self) -> Option<&PriceLevel> {
        self.resistance.first()
    }

    /// The support nearest the current price, if any survived selection.
    pub fn nearest_support(&self) -> Option<&PriceLevel> {
        self.support.first()
    }
}
