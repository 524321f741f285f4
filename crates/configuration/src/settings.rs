use core_types::{Confidence, TradeDirection};
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section and every field carries a default matching the fixed
/// rule set, so a missing or partial `config.toml` still yields a fully
/// working configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisSettings,
    pub levels: LevelsSettings,
    pub risk: RiskSettings,
    pub scanner: ScannerSettings,
    pub data: DataSettings,
}

/// Thresholds for the criteria checkers and the two rule sets.
///
/// These numbers are fixed business logic from the trading methodology;
/// they are configurable for experimentation but the defaults are the
/// canonical values the decision table was designed around.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// How close (in percent of the 21 EMA) price must be to count as a pullback.
    pub pullback_tolerance_pct: f64,
    /// Maximum extension above the 20 EMA before a long entry is vetoed.
    pub max_extension_pct: f64,
    /// Maximum distance below the 52-week high for the proximity criterion.
    pub high52_proximity_pct: f64,
    /// Days ahead in which a scheduled earnings report blocks a trade.
    pub earnings_window_days: i64,
    /// RSI level above which the stock counts as over-extended.
    pub rsi_extended_threshold: f64,
    /// RSI level the enhanced set requires for bullish momentum.
    pub rsi_momentum_min: f64,
    /// Days of volume history the confirmation check averages over.
    pub volume_lookback_days: usize,
    /// Multiple of average volume required to confirm a move.
    pub volume_spike_multiplier: f64,
    /// Consecutive closes above the 21 EMA required for the sustain check.
    pub sustain_min_days: usize,
    /// Bars back for the 200 EMA slope comparison.
    pub slope_lookback_days: usize,
    /// Slow stochastic %K at or below this reads as a bullish pullback.
    pub stoch_oversold_max: f64,
    /// Slow stochastic %K at or above this reads as bearish momentum.
    pub stoch_overbought_min: f64,
    /// Minimum ADX(13) for the five-criteria trend strength requirement.
    pub adx_trend_min: f64,
    /// Minimum ADX(14) for the enhanced confirmation set.
    pub adx_confirmation_min: f64,
    /// Minimum reward-to-risk ratio for the risk/reward check.
    pub min_risk_reward: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            pullback_tolerance_pct: 2.0,
            max_extension_pct: 10.0,
            high52_proximity_pct: 20.0,
            earnings_window_days: 14,
            rsi_extended_threshold: 80.0,
            rsi_momentum_min: 40.0,
            volume_lookback_days: 5,
            volume_spike_multiplier: 1.5,
            sustain_min_days: 5,
            slope_lookback_days: 5,
            stoch_oversold_max: 40.0,
            stoch_overbought_min: 60.0,
            adx_trend_min: 20.0,
            adx_confirmation_min: 20.0,
            min_risk_reward: 2.0,
        }
    }
}

/// Parameters for the support/resistance engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LevelsSettings {
    /// Bars of history the swing-pivot scan covers.
    pub lookback_days: usize,
    /// Bars on each side a swing pivot must dominate.
    pub swing_window: usize,
    /// Relative tolerance (percent) for clustering nearby pivots.
    pub cluster_tolerance_pct: f64,
    /// Number of support and resistance levels to publish.
    pub num_levels: usize,
}

impl Default for LevelsSettings {
    fn default() -> Self {
        Self {
            lookback_days: 60,
            swing_window: 5,
            cluster_tolerance_pct: 2.0,
            num_levels: 3,
        }
    }
}

/// Parameters for the risk-management calculator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RiskSettings {
    /// Maximum chase (percent beyond the ideal entry) for the entry zone.
    pub entry_chase_pct: f64,
    /// Stop distance (percent) when no structural level or EMA protects the trade.
    pub stop_fallback_pct: f64,
    /// Target ladder (percent offsets) when structural levels are missing.
    pub target_fallback_pcts: Vec<f64>,
    /// ATR multiple for the volatility-based stop suggestion.
    pub atr_stop_multiplier: f64,
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            entry_chase_pct: 2.0,
            stop_fallback_pct: 5.0,
            target_fallback_pcts: vec![3.0, 5.0, 8.0],
            atr_stop_multiplier: 2.0,
        }
    }
}

/// Watchlist scanning and alert policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScannerSettings {
    /// Symbols scanned by the `scan` command.
    pub watchlist: Vec<String>,
    /// Weakest confidence that may raise an alert.
    pub min_confidence: Confidence,
    /// Signal directions the scanner alerts on.
    pub signal_types: Vec<TradeDirection>,
    /// Minimum satisfied criteria (in the winning direction) for an alert.
    pub min_criteria_met: u8,
    /// Suppress alerts when price is extended above the 20 EMA.
    pub avoid_extended_prices: bool,
    /// Hours before the same (symbol, signal) pair may alert again.
    pub cooldown_hours: i64,
    /// Where the alert history is persisted between runs.
    pub alert_history_path: PathBuf,
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self {
            watchlist: vec![
                "AAPL".to_string(),
                "MSFT".to_string(),
                "GOOGL".to_string(),
                "AMZN".to_string(),
                "TSLA".to_string(),
                "NVDA".to_string(),
                "META".to_string(),
                "NFLX".to_string(),
                "AMD".to_string(),
                "PYPL".to_string(),
            ],
            min_confidence: Confidence::Moderate,
            signal_types: vec![TradeDirection::Call, TradeDirection::Put],
            min_criteria_met: 4,
            avoid_extended_prices: true,
            cooldown_hours: 4,
            alert_history_path: PathBuf::from("alert_history.json"),
        }
    }
}

/// Where the offline market data lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Directory of per-symbol JSON fixture files.
    pub data_dir: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}
