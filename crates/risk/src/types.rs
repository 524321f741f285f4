use core_types::TradeDirection;
use serde::{Deserialize, Serialize};

/// Acceptable entry prices for the trade: the ideal fill and the worst
/// price still worth chasing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntryZone {
    pub ideal: f64,
    pub max_chase: f64,
}

/// The protective stop with the rationale for its placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopLoss {
    pub price: f64,
    /// Absolute percent distance from the entry price, rounded.
    pub distance_pct: f64,
    pub reason: String,
}

/// One take-profit tier. Tier 1 is nearest the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeProfitTarget {
    pub tier: u8,
    pub price: f64,
    pub distance_pct: f64,
    pub action: String,
    /// Qualitative option-premium gain expected at this tier.
    pub expected_option_gain: String,
}

/// A profit-triggered adjustment to the stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailingStopRule {
    pub trigger: String,
    pub action: String,
}

/// The full risk plan for a directional options trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskManagementPlan {
    pub direction: TradeDirection,
    pub entry_zone: EntryZone,
    pub stop_loss: StopLoss,
    pub take_profit_targets: Vec<TakeProfitTarget>,
    pub trailing_stop_rules: Vec<TrailingStopRule>,
    /// Tier-1 reward over stop risk, `None` when the stop sits on the
    /// entry and the ratio is undefined.
    pub risk_reward_ratio: Option<f64>,
}

/// A volatility-scaled stop and target pair, used to sanity-check
/// reward against risk before any structural plan exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopTargetSuggestion {
    pub stop: f64,
    pub target: f64,
}
