use chrono::NaiveDate;
use core_types::{CriterionResult, TrendSignal};
use indicators::IndicatorSnapshot;
use levels::SupportResistanceLevels;
use risk::RiskManagementPlan;
use scoring::{CriteriaTally, OptionsRecommendation, TrendDecision};
use serde::{Deserialize, Serialize};

/// The complete output of one analysis pass for one symbol.
///
/// Presentation layers consume this record read-only. A failed fetch
/// still produces a result (the UNKNOWN sentinel) so a scan over a
/// watchlist always yields one record per symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub symbol: String,
    pub company_name: Option<String>,
    pub as_of: NaiveDate,
    /// `None` only for the UNKNOWN sentinel.
    pub snapshot: Option<IndicatorSnapshot>,
    pub bullish_stacked: bool,
    pub bearish_stacked: bool,
    pub bullish_criteria: Vec<CriterionResult>,
    pub bearish_criteria: Vec<CriterionResult>,
    pub enhanced_criteria: Vec<CriterionResult>,
    /// Standalone checks outside the scored rule sets: RSI extension,
    /// volume confirmation, sustained trend and reward-to-risk.
    pub extra_criteria: Vec<CriterionResult>,
    pub decision: TrendDecision,
    pub levels: Option<SupportResistanceLevels>,
    /// Present only when the decision carries a trade direction.
    pub risk_plan: Option<RiskManagementPlan>,
}

impl AnalysisResult {
    /// The sentinel for a symbol whose data could not be fetched.
    pub fn unknown(symbol: &str, as_of: NaiveDate) -> Self {
        let recommendation = OptionsRecommendation {
            strategy: "NO TRADE".to_string(),
            confidence: core_types::Confidence::NotApplicable,
            reasoning: "Unable to fetch data".to_string(),
            entry: "No entry".to_string(),
            risk: "No position".to_string(),
        };
        Self {
            symbol: symbol.to_string(),
            company_name: None,
            as_of,
            snapshot: None,
            bullish_stacked: false,
            bearish_stacked: false,
            bullish_criteria: Vec::new(),
            bearish_criteria: Vec::new(),
            enhanced_criteria: Vec::new(),
            extra_criteria: Vec::new(),
            decision: TrendDecision {
                trend: TrendSignal::Unknown,
                bullish_count: 0,
                bearish_count: 0,
                enhanced_count: 0,
                options_recommendation: recommendation,
            },
            levels: None,
            risk_plan: None,
        }
    }

    /// Whether this result is the could-not-analyze sentinel.
    pub fn is_unknown(&self) -> bool {
        self.decision.trend == TrendSignal::Unknown
    }

    /// The tally the decision was made from, reconstructed for callers
    /// that filter on counts.
    pub fn tally(&self) -> CriteriaTally {
        CriteriaTally {
            bullish_count: self.decision.bullish_count,
            bearish_count: self.decision.bearish_count,
            enhanced_count: self.decision.enhanced_count,
            bullish_stacked: self.bullish_stacked,
            bearish_stacked: self.bearish_stacked,
        }
    }
}
