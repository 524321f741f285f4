use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The direction of an options trade derived from the trend decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeDirection {
    Call,
    Put,
}

impl TradeDirection {
    /// Returns the opposite direction of the trade.
    pub fn opposite(&self) -> Self {
        match self {
            TradeDirection::Call => TradeDirection::Put,
            TradeDirection::Put => TradeDirection::Call,
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDirection::Call => write!(f, "CALL"),
            TradeDirection::Put => write!(f, "PUT"),
        }
    }
}

/// The confidence ladder for a signal, ordered weakest to strongest.
///
/// The derived `Ord` follows declaration order, which lets policy code
/// express thresholds as `confidence >= Confidence::Moderate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    NotApplicable,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Confidence::NotApplicable => "N/A",
            Confidence::Low => "LOW",
            Confidence::Moderate => "MODERATE",
            Confidence::High => "HIGH",
            Confidence::VeryHigh => "VERY HIGH",
        };
        write!(f, "{}", text)
    }
}

impl FromStr for Confidence {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "N/A" | "NA" => Ok(Confidence::NotApplicable),
            "LOW" => Ok(Confidence::Low),
            "MODERATE" => Ok(Confidence::Moderate),
            "HIGH" => Ok(Confidence::High),
            "VERY HIGH" | "VERY_HIGH" => Ok(Confidence::VeryHigh),
            other => Err(CoreError::InvalidInput(
                "confidence".to_string(),
                other.to_string(),
            )),
        }
    }
}

/// The outcome of the trend decision table.
///
/// The first five variants carry a tradeable direction; the remaining
/// ones are watch states or the sentinel for a failed data fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendSignal {
    StrongBullish,
    Bullish,
    BullishTrend,
    StrongBearish,
    BearishTrend,
    BullishStructure,
    BearishStructure,
    NoClearTrend,
    Unknown,
}

impl TrendSignal {
    /// The full human-readable label for this outcome.
    pub fn label(&self) -> &'static str {
        match self {
            TrendSignal::StrongBullish => "STRONG BULLISH - CALL OPTIONS SIGNAL",
            TrendSignal::Bullish => "BULLISH - CALL OPTIONS SIGNAL",
            TrendSignal::BullishTrend => "BULLISH TREND - CALL OPTIONS CONSIDERATION",
            TrendSignal::StrongBearish => "STRONG BEARISH - PUT OPTIONS SIGNAL",
            TrendSignal::BearishTrend => "BEARISH TREND - PUT OPTIONS CONSIDERATION",
            TrendSignal::BullishStructure => "BULLISH STRUCTURE - WAIT FOR ENTRY",
            TrendSignal::BearishStructure => "BEARISH STRUCTURE - MONITOR FOR PUT ENTRY",
            TrendSignal::NoClearTrend => "NO CLEAR TREND - NO OPTIONS TRADE",
            TrendSignal::Unknown => "UNKNOWN - ANALYSIS UNAVAILABLE",
        }
    }

    /// The tradeable direction implied by this outcome, if any.
    pub fn direction(&self) -> Option<TradeDirection> {
        match self {
            TrendSignal::StrongBullish | TrendSignal::Bullish | TrendSignal::BullishTrend => {
                Some(TradeDirection::Call)
            }
            TrendSignal::StrongBearish | TrendSignal::BearishTrend => Some(TradeDirection::Put),
            _ => None,
        }
    }

    /// Whether this outcome is an entry signal rather than a watch state.
    pub fn is_actionable(&self) -> bool {
        self.direction().is_some()
    }
}

impl fmt::Display for TrendSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
