use core_types::{Confidence, TrendSignal};
use serde::{Deserialize, Serialize};

/// The satisfied-criteria counts and stacking flags the decision table
/// runs on. Counts are capped by the rule-set sizes (5, 5 and 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CriteriaTally {
    pub bullish_count: u8,
    pub bearish_count: u8,
    pub enhanced_count: u8,
    pub bullish_stacked: bool,
    pub bearish_stacked: bool,
}

/// The options guidance attached to every trend decision. All five
/// fields are always populated, including for no-trade outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsRecommendation {
    pub strategy: String,
    pub confidence: Confidence,
    pub reasoning: String,
    pub entry: String,
    pub risk: String,
}

/// The trend classification for one symbol, with the counts that
/// produced it and the derived options guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendDecision {
    pub trend: TrendSignal,
    pub bullish_count: u8,
    pub bearish_count: u8,
    pub enhanced_count: u8,
    pub options_recommendation: OptionsRecommendation,
}

/// Runs the priority-ordered decision table. First match wins; the
/// bearish signal branch outranks the bullish one so a genuinely
/// two-sided tape fails toward the downside.
///
/// This is a pure function of the tally. Scoring the same counts twice
/// always yields the same decision.
pub fn decide(tally: &CriteriaTally) -> TrendDecision {
    let trend = if tally.bearish_count >= 4 {
        if tally.bearish_count == 5 {
            TrendSignal::StrongBearish
        } else {
            TrendSignal::BearishTrend
        }
    } else if tally.bullish_count >= 4 {
        if tally.bullish_count == 5 && tally.enhanced_count >= 5 {
            TrendSignal::StrongBullish
        } else if tally.bullish_count == 5 {
            TrendSignal::Bullish
        } else {
            TrendSignal::BullishTrend
        }
    } else if tally.bullish_stacked && tally.bullish_count >= 3 {
        TrendSignal::BullishStructure
    } else if tally.bearish_stacked && tally.bearish_count >= 3 {
        TrendSignal::BearishStructure
    } else {
        TrendSignal::NoClearTrend
    };
    tracing::debug!(?trend, ?tally, "Classified trend");

    TrendDecision {
        trend,
        bullish_count: tally.bullish_count,
        bearish_count: tally.bearish_count,
        enhanced_count: tally.enhanced_count,
        options_recommendation: recommend(trend, tally),
    }
}

fn recommend(trend: TrendSignal, tally: &CriteriaTally) -> OptionsRecommendation {
    let confidence = confidence_for(trend);
    let (strategy, reasoning, entry, risk) = match trend {
        TrendSignal::StrongBullish => (
            "BUY CALL OPTIONS",
            format!(
                "All 5 bullish criteria met with enhanced confirmation at {}/7",
                tally.enhanced_count
            ),
            "Buy calls on the pullback near the 21 EMA".to_string(),
            "Stop below the nearest support or the 21 EMA, whichever is tighter".to_string(),
        ),
        TrendSignal::Bullish => (
            "BUY CALL OPTIONS",
            format!("All 5 bullish criteria met (enhanced {}/7)", tally.enhanced_count),
            "Buy calls on the pullback near the 21 EMA".to_string(),
            "Stop below the nearest support or the 21 EMA, whichever is tighter".to_string(),
        ),
        TrendSignal::BullishTrend => (
            "BUY CALL OPTIONS",
            format!(
                "{} of 5 bullish criteria met (enhanced {}/7)",
                tally.bullish_count, tally.enhanced_count
            ),
            "Buy calls only after price settles near the 21 EMA".to_string(),
            "Stop below the nearest support or the 21 EMA, whichever is tighter".to_string(),
        ),
        TrendSignal::StrongBearish => (
            "BUY PUT OPTIONS",
            "All 5 bearish criteria met".to_string(),
            "Buy puts on the failed bounce below the 21 EMA".to_string(),
            "Stop above the nearest resistance or the 21 EMA, whichever is tighter".to_string(),
        ),
        TrendSignal::BearishTrend => (
            "BUY PUT OPTIONS",
            format!("{} of 5 bearish criteria met", tally.bearish_count),
            "Buy puts on the failed bounce below the 21 EMA".to_string(),
            "Stop above the nearest resistance or the 21 EMA, whichever is tighter".to_string(),
        ),
        TrendSignal::BullishStructure => (
            "WAIT - CALL OPTIONS SETUP",
            format!(
                "Bullish EMA stack with only {} of 5 entry criteria met",
                tally.bullish_count
            ),
            "Wait for a pullback toward the 21 EMA before entering".to_string(),
            "No position yet".to_string(),
        ),
        TrendSignal::BearishStructure => (
            "MONITOR - PUT OPTIONS SETUP",
            format!(
                "Bearish EMA stack with only {} of 5 entry criteria met",
                tally.bearish_count
            ),
            "No entry yet; watch for a bounce failure below the 21 EMA".to_string(),
            "No position yet".to_string(),
        ),
        TrendSignal::NoClearTrend | TrendSignal::Unknown => (
            "NO TRADE",
            format!(
                "Bullish {}/5 and bearish {}/5; no directional edge",
                tally.bullish_count, tally.bearish_count
            ),
            "No entry".to_string(),
            "No position".to_string(),
        ),
    };

    OptionsRecommendation {
        strategy: strategy.to_string(),
        confidence,
        reasoning,
        entry,
        risk,
    }
}

fn confidence_for(trend: TrendSignal) -> Confidence {
    match trend {
        TrendSignal::StrongBullish => Confidence::VeryHigh,
        TrendSignal::Bullish | TrendSignal::StrongBearish => Confidence::High,
        TrendSignal::BullishTrend | TrendSignal::BearishTrend => Confidence::Moderate,
        TrendSignal::BullishStructure | TrendSignal::BearishStructure => Confidence::Low,
        TrendSignal::NoClearTrend | TrendSignal::Unknown => Confidence::NotApplicable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(bullish: u8, bearish: u8, enhanced: u8) -> CriteriaTally {
        CriteriaTally {
            bullish_count: bullish,
            bearish_count: bearish,
            enhanced_count: enhanced,
            bullish_stacked: false,
            bearish_stacked: false,
        }
    }

    #[test]
    fn bearish_branch_outranks_bullish() {
        // Synthetic two-sided tape: both thresholds met at once.
        let decision = decide(&tally(5, 4, 7));
        assert_eq!(decision.trend, TrendSignal::BearishTrend);
        assert!(decision.options_recommendation.strategy.contains("PUT"));
    }

    #[test]
    fn strong_bullish_needs_enhanced_confirmation() {
        let decision = decide(&tally(5, 0, 5));
        assert_eq!(decision.trend, TrendSignal::StrongBullish);
        assert_eq!(decision.options_recommendation.confidence, Confidence::VeryHigh);

        let decision = decide(&tally(5, 0, 4));
        assert_eq!(decision.trend, TrendSignal::Bullish);
        assert_eq!(decision.options_recommendation.confidence, Confidence::High);
    }

    #[test]
    fn four_of_five_is_a_consideration() {
        let decision = decide(&tally(4, 0, 7));
        assert_eq!(decision.trend, TrendSignal::BullishTrend);
        assert_eq!(decision.options_recommendation.confidence, Confidence::Moderate);
        assert!(decision.options_recommendation.strategy.contains("CALL"));
    }

    #[test]
    fn full_bearish_is_high_confidence() {
        let decision = decide(&tally(0, 5, 0));
        assert_eq!(decision.trend, TrendSignal::StrongBearish);
        assert_eq!(decision.options_recommendation.confidence, Confidence::High);
    }

    #[test]
    fn structure_branches_need_the_stack_and_three() {
        let mut with_stack = tally(3, 0, 2);
        with_stack.bullish_stacked = true;
        let decision = decide(&with_stack);
        assert_eq!(decision.trend, TrendSignal::BullishStructure);
        assert_eq!(decision.options_recommendation.confidence, Confidence::Low);

        // Same counts without the stack fall through to no-trade.
        let decision = decide(&tally(3, 0, 2));
        assert_eq!(decision.trend, TrendSignal::NoClearTrend);

        let mut bearish_stack = tally(0, 3, 0);
        bearish_stack.bearish_stacked = true;
        let decision = decide(&bearish_stack);
        assert_eq!(decision.trend, TrendSignal::BearishStructure);
        assert!(decision.options_recommendation.strategy.contains("PUT"));
    }

    #[test]
    fn no_trade_populates_every_field() {
        let decision = decide(&tally(1, 1, 0));
        assert_eq!(decision.trend, TrendSignal::NoClearTrend);
        let rec = &decision.options_recommendation;
        assert_eq!(rec.strategy, "NO TRADE");
        assert_eq!(rec.confidence, Confidence::NotApplicable);
        assert!(!rec.reasoning.is_empty());
        assert!(!rec.entry.is_empty());
        assert!(!rec.risk.is_empty());
    }

    #[test]
    fn identical_tallies_decide_identically() {
        let input = tally(4, 2, 6);
        assert_eq!(decide(&input), decide(&input));
    }
}
