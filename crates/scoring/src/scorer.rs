use chrono::NaiveDate;
use core_types::{CriterionResult, TickerMetadata};
use criteria::CriteriaEngine;
use indicators::IndicatorSnapshot;

use crate::decision::{decide, CriteriaTally, TrendDecision};

/// Everything one scoring pass reads. The raw closes are needed only by
/// the 200 EMA slope check; all other criteria run off the snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInput<'a> {
    pub snapshot: &'a IndicatorSnapshot,
    pub closes: &'a [f64],
    pub metadata: &'a TickerMetadata,
    pub as_of: NaiveDate,
}

/// The scored rule sets in their fixed display order, plus the decision
/// the tally mapped to.
#[derive(Debug, Clone)]
pub struct TrendScore {
    pub bullish: Vec<CriterionResult>,
    pub bearish: Vec<CriterionResult>,
    pub enhanced: Vec<CriterionResult>,
    pub tally: CriteriaTally,
    pub decision: TrendDecision,
}

/// Assembles the three rule sets from the criteria checkers and runs
/// the decision table over their satisfied counts.
///
/// The bullish and bearish sets share the ADX and earnings verdicts;
/// both directions demand a trending tape and a clear report calendar.
#[derive(Debug, Clone)]
pub struct TrendScorer {
    criteria: CriteriaEngine,
}

impl TrendScorer {
    pub fn new(criteria: CriteriaEngine) -> Self {
        Self { criteria }
    }

    pub fn score(&self, input: &ScoreInput) -> TrendScore {
        let stacked_bullish = self.criteria.emas_stacked_bullish(input.snapshot);
        let stacked_bearish = self.criteria.emas_stacked_bearish(input.snapshot);
        let adx_trend = self.criteria.adx_trend_strength(input.snapshot);
        let earnings = self.criteria.no_imminent_earnings(input.metadata, input.as_of);

        let bullish_stacked = stacked_bullish.satisfied;
        let bearish_stacked = stacked_bearish.satisfied;

        let bullish = vec![
            stacked_bullish,
            self.criteria.pullback_to_21_ema(input.snapshot),
            self.criteria.stochastic_oversold(input.snapshot),
            adx_trend.clone(),
            earnings.clone(),
        ];
        let bearish = vec![
            stacked_bearish,
            self.criteria.price_below_21_ema(input.snapshot),
            self.criteria.stochastic_overbought(input.snapshot),
            adx_trend,
            earnings,
        ];
        let enhanced = vec![
            self.criteria.price_above_mas(input.snapshot),
            self.criteria.ma_stack_20_40_200(input.snapshot),
            self.criteria.ema_200_rising(input.closes),
            self.criteria.rsi_momentum(input.snapshot),
            self.criteria.adx_confirmation(input.snapshot),
            self.criteria.price_not_extended(input.snapshot),
            self.criteria.near_52_week_high(input.snapshot),
        ];

        let tally = CriteriaTally {
            bullish_count: satisfied_count(&bullish),
            bearish_count: satisfied_count(&bearish),
            enhanced_count: satisfied_count(&enhanced),
            bullish_stacked,
            bearish_stacked,
        };
        let decision = decide(&tally);

        TrendScore {
            bullish,
            bearish,
            enhanced,
            tally,
            decision,
        }
    }
}

fn satisfied_count(results: &[CriterionResult]) -> u8 {
    results.iter().filter(|result| result.satisfied).count() as u8
}
