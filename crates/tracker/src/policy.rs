use analyzer::AnalysisResult;
use chrono::{DateTime, Duration, Utc};
use configuration::ScannerSettings;
use core_types::TradeDirection;

use crate::error::TrackerError;
use crate::store::{AlertRecord, CooldownStore, cooldown_key};

/// Label of the extension checker consulted by the extended-price veto.
/// Must match the name the criteria engine stamps on its result.
const EXTENSION_CRITERION: &str = "Price not extended";

/// Filters scan results down to the ones worth alerting on.
///
/// The policy is deliberately dumb: it reads the finished decision and the
/// criterion list, it never re-runs any analysis.
#[derive(Debug, Clone)]
pub struct AlertPolicy {
    settings: ScannerSettings,
}

/// What a watchlist pass concluded for one symbol.
#[derive(Debug)]
pub struct ScanOutcome {
    pub result: AnalysisResult,
    pub meets_policy: bool,
    pub suppressed_by_cooldown: bool,
}

impl ScanOutcome {
    /// Whether an alert was actually raised for this symbol.
    pub fn alerted(&self) -> bool {
        self.meets_policy && !self.suppressed_by_cooldown
    }
}

impl AlertPolicy {
    pub fn new(settings: ScannerSettings) -> Self {
        Self { settings }
    }

    /// Whether `result` clears every policy filter, before cooldown.
    pub fn qualifies(&self, result: &AnalysisResult) -> bool {
        match result.decision.trend.direction() {
            Some(direction) => self.clears_filters(result, direction),
            None => false,
        }
    }

    /// Runs `result` through the filters and the cooldown window, recording
    /// the alert in `store` when one is raised.
    pub fn evaluate<S: CooldownStore>(
        &self,
        result: AnalysisResult,
        store: &mut S,
        now: DateTime<Utc>,
    ) -> Result<ScanOutcome, TrackerError> {
        let Some(direction) = result.decision.trend.direction() else {
            return Ok(ScanOutcome {
                result,
                meets_policy: false,
                suppressed_by_cooldown: false,
            });
        };
        if !self.clears_filters(&result, direction) {
            return Ok(ScanOutcome {
                result,
                meets_policy: false,
                suppressed_by_cooldown: false,
            });
        }

        let key = cooldown_key(&result.symbol, direction);
        if let Some(previous) = store.get(&key) {
            let elapsed = now - previous.sent_at;
            if elapsed < Duration::hours(self.settings.cooldown_hours) {
                tracing::debug!(
                    symbol = %result.symbol,
                    signal = %direction,
                    "alert suppressed by cooldown"
                );
                return Ok(ScanOutcome {
                    result,
                    meets_policy: true,
                    suppressed_by_cooldown: true,
                });
            }
        }

        let record = AlertRecord {
            symbol: result.symbol.clone(),
            signal_type: direction,
            confidence: result.decision.options_recommendation.confidence,
            criteria_met: directional_count(&result, direction),
            price: result.snapshot.as_ref().map(|snapshot| snapshot.current_price),
            sent_at: now,
        };
        store.put(&key, record)?;
        tracing::info!(symbol = %result.symbol, signal = %direction, "alert raised");
        Ok(ScanOutcome {
            result,
            meets_policy: true,
            suppressed_by_cooldown: false,
        })
    }

    fn clears_filters(&self, result: &AnalysisResult, direction: TradeDirection) -> bool {
        if !self.settings.signal_types.contains(&direction) {
            return false;
        }
        if result.decision.options_recommendation.confidence < self.settings.min_confidence {
            return false;
        }
        if directional_count(result, direction) < self.settings.min_criteria_met {
            return false;
        }
        if self.settings.avoid_extended_prices && is_extended(result) {
            return false;
        }
        true
    }
}

fn directional_count(result: &AnalysisResult, direction: TradeDirection) -> u8 {
    match direction {
        TradeDirection::Call => result.decision.bullish_count,
        TradeDirection::Put => result.decision.bearish_count,
    }
}

fn is_extended(result: &AnalysisResult) -> bool {
    result
        .enhanced_criteria
        .iter()
        .any(|criterion| criterion.name == EXTENSION_CRITERION && !criterion.satisfied)
}
