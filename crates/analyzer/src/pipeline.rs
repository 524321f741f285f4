use chrono::NaiveDate;
use configuration::Config;
use core_types::MarketSnapshot;
use criteria::CriteriaEngine;
use indicators::IndicatorEngine;
use levels::LevelEngine;
use market_data::MarketDataProvider;
use risk::RiskCalculator;
use scoring::{ScoreInput, TrendScorer};

use crate::result::AnalysisResult;

/// The full analysis pipeline for one symbol.
///
/// Owns one instance of every engine, all built from the same loaded
/// config. The pipeline is synchronous and holds no mutable state, so a
/// scanning caller can analyze many symbols with one `Analyzer`.
#[derive(Debug, Clone)]
pub struct Analyzer {
    indicators: IndicatorEngine,
    criteria: CriteriaEngine,
    scorer: TrendScorer,
    levels: LevelEngine,
    risk: RiskCalculator,
}

impl Analyzer {
    pub fn new(config: &Config) -> Self {
        let criteria = CriteriaEngine::new(config.analysis.clone());
        Self {
            indicators: IndicatorEngine::new(),
            scorer: TrendScorer::new(criteria.clone()),
            criteria,
            levels: LevelEngine::new(config.levels.clone()),
            risk: RiskCalculator::new(config.risk.clone()),
        }
    }

    /// Fetches one symbol from the provider and analyzes it.
    ///
    /// A failed fetch degrades to the UNKNOWN sentinel so watchlist
    /// scans always produce one result per symbol.
    pub fn analyze_symbol<P: MarketDataProvider>(
        &self,
        provider: &P,
        symbol: &str,
        as_of: NaiveDate,
    ) -> AnalysisResult {
        match provider.fetch(symbol) {
            Ok(market) => self.analyze(&market, as_of),
            Err(error) => {
                tracing::warn!(%symbol, %error, "Fetch failed; returning unknown result");
                AnalysisResult::unknown(symbol, as_of)
            }
        }
    }

    /// Runs the pipeline over an already-fetched snapshot.
    pub fn analyze(&self, market: &MarketSnapshot, as_of: NaiveDate) -> AnalysisResult {
        // 1. Guard: no bars means no analysis.
        if market.series.is_empty() {
            tracing::warn!(symbol = %market.symbol, "Empty price series");
            return AnalysisResult::unknown(&market.symbol, as_of);
        }

        // 2. Indicators.
        let snapshot = match self.indicators.calculate(&market.series) {
            Ok(snapshot) => snapshot,
            Err(error) => {
                tracing::warn!(symbol = %market.symbol, %error, "Indicator computation failed");
                return AnalysisResult::unknown(&market.symbol, as_of);
            }
        };
        let (closes, volumes) = match (market.series.closes(), market.series.volumes()) {
            (Ok(closes), Ok(volumes)) => (closes, volumes),
            (Err(error), _) | (_, Err(error)) => {
                tracing::warn!(symbol = %market.symbol, %error, "Price conversion failed");
                return AnalysisResult::unknown(&market.symbol, as_of);
            }
        };

        // 3. Rule sets and the trend decision.
        let score = self.scorer.score(&ScoreInput {
            snapshot: &snapshot,
            closes: &closes,
            metadata: &market.metadata,
            as_of,
        });

        // 4. Structural levels.
        let levels = match self.levels.derive(&market.series) {
            Ok(levels) => Some(levels),
            Err(error) => {
                tracing::warn!(symbol = %market.symbol, %error, "Level derivation failed");
                None
            }
        };

        // 5. Risk plan, only when the decision carries a direction.
        let risk_plan = score.decision.trend.direction().and_then(|direction| {
            levels.as_ref().map(|map| {
                self.risk.plan(
                    direction,
                    snapshot.current_price,
                    map,
                    snapshot.ema_21,
                    snapshot.ema_34,
                )
            })
        });

        // 6. Standalone checks outside the scored sets. The reward-to-risk
        // check reads the plan's stop and tier-1 target when a plan exists;
        // without one it falls back to the ATR suggestion.
        let (stop, target) = match &risk_plan {
            Some(plan) => (
                Some(plan.stop_loss.price),
                plan.take_profit_targets.first().map(|target| target.price),
            ),
            None => {
                let suggestion =
                    self.risk.atr_stop_target(snapshot.current_price, snapshot.atr_14);
                (
                    suggestion.map(|suggestion| suggestion.stop),
                    suggestion.map(|suggestion| suggestion.target),
                )
            }
        };
        let extra_criteria = vec![
            self.criteria.rsi_extended(&snapshot),
            self.criteria.volume_confirmation(&volumes),
            self.criteria.sustained_above_21_ema(&closes),
            self.criteria
                .reward_to_risk(snapshot.current_price, stop, target),
        ];

        tracing::debug!(
            symbol = %market.symbol,
            trend = %score.decision.trend,
            bullish = score.tally.bullish_count,
            bearish = score.tally.bearish_count,
            "Analysis complete"
        );

        AnalysisResult {
            symbol: market.symbol.clone(),
            company_name: market.metadata.company_name.clone(),
            as_of,
            snapshot: Some(snapshot),
            bullish_stacked: score.tally.bullish_stacked,
            bearish_stacked: score.tally.bearish_stacked,
            bullish_criteria: score.bullish,
            bearish_criteria: score.bearish,
            enhanced_criteria: score.enhanced,
            extra_criteria,
            decision: score.decision,
            levels,
            risk_plan,
        }
    }
}
