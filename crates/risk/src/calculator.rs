use configuration::RiskSettings;
use core_types::TradeDirection;
use indicators::math::round2;
use levels::SupportResistanceLevels;

use crate::types::{
    EntryZone, RiskManagementPlan, StopLoss, StopTargetSuggestion, TakeProfitTarget,
    TrailingStopRule,
};

/// Option-premium gain bands for the three profit tiers, nearest first.
const GAIN_BANDS: [&str; 3] = ["50-100%", "100-200%", "200%+"];
const TIER_ACTIONS: [&str; 3] = [
    "Take 33% profit",
    "Take 33% profit",
    "Close remaining position",
];

/// Builds the risk plan for a directional trade.
///
/// Placement always prefers market structure: stops lean on the nearest
/// protective level and targets on the sided level list, with percentage
/// fallbacks only when the chart offers nothing to lean on. The
/// calculator is total; thin inputs degrade to fallbacks, never errors.
#[derive(Debug, Clone)]
pub struct RiskCalculator {
    settings: RiskSettings,
}

impl RiskCalculator {
    pub fn new(settings: RiskSettings) -> Self {
        Self { settings }
    }

    pub fn plan(
        &self,
        direction: TradeDirection,
        current_price: f64,
        levels: &SupportResistanceLevels,
        ema_21: Option<f64>,
        ema_34: Option<f64>,
    ) -> RiskManagementPlan {
        let entry_zone = self.entry_zone(direction, current_price);
        let stop_loss = self.stop_loss(direction, current_price, levels, ema_21);
        let take_profit_targets = self.take_profit_targets(direction, current_price, levels);
        let trailing_stop_rules = trailing_rules(direction, current_price, levels, ema_34);
        let risk_reward_ratio = reward_ratio(
            current_price,
            stop_loss.price,
            take_profit_targets.first().map(|target| target.price),
        );
        tracing::debug!(
            %direction,
            stop = stop_loss.price,
            ratio = ?risk_reward_ratio,
            "Built risk plan"
        );

        RiskManagementPlan {
            direction,
            entry_zone,
            stop_loss,
            take_profit_targets,
            trailing_stop_rules,
            risk_reward_ratio,
        }
    }

    /// A volatility-scaled stop and target for the long side, with the
    /// target placed at twice the stop distance.
    pub fn atr_stop_target(&self, current_price: f64, atr: Option<f64>) -> Option<StopTargetSuggestion> {
        let atr = atr.filter(|value| *value > 0.0)?;
        let risk = self.settings.atr_stop_multiplier * atr;
        Some(StopTargetSuggestion {
            stop: round2(current_price - risk),
            target: round2(current_price + 2.0 * risk),
        })
    }

    fn entry_zone(&self, direction: TradeDirection, current_price: f64) -> EntryZone {
        let chase = self.settings.entry_chase_pct / 100.0;
        let max_chase = match direction {
            TradeDirection::Call => current_price * (1.0 + chase),
            TradeDirection::Put => current_price * (1.0 - chase),
        };
        EntryZone {
            ideal: round2(current_price),
            max_chase: round2(max_chase),
        }
    }

    /// The tighter of the nearest protective structural level and the
    /// 21 EMA, considering only candidates on the protective side.
    fn stop_loss(
        &self,
        direction: TradeDirection,
        current_price: f64,
        levels: &SupportResistanceLevels,
        ema_21: Option<f64>,
    ) -> StopLoss {
        let (structural, structural_reason) = match direction {
            TradeDirection::Call => (
                levels.nearest_support().map(|level| level.price),
                "Nearest structural support",
            ),
            TradeDirection::Put => (
                levels.nearest_resistance().map(|level| level.price),
                "Nearest structural resistance",
            ),
        };
        let protective_ema = ema_21.filter(|ema| match direction {
            TradeDirection::Call => *ema < current_price,
            TradeDirection::Put => *ema > current_price,
        });

        let (price, reason) = match (structural, protective_ema) {
            (Some(level), Some(ema)) => {
                let structural_tighter = match direction {
                    TradeDirection::Call => level >= ema,
                    TradeDirection::Put => level <= ema,
                };
                if structural_tighter {
                    (level, structural_reason.to_string())
                } else {
                    (round2(ema), "21 EMA".to_string())
                }
            }
            (Some(level), None) => (level, structural_reason.to_string()),
            (None, Some(ema)) => (round2(ema), "21 EMA".to_string()),
            (None, None) => {
                let fallback = self.settings.stop_fallback_pct / 100.0;
                let price = match direction {
                    TradeDirection::Call => current_price * (1.0 - fallback),
                    TradeDirection::Put => current_price * (1.0 + fallback),
                };
                (
                    round2(price),
                    format!(
                        "Fixed {:.1}% fallback (no protective level)",
                        self.settings.stop_fallback_pct
                    ),
                )
            }
        };

        StopLoss {
            price,
            distance_pct: round2((current_price - price).abs() / current_price * 100.0),
            reason,
        }
    }

    /// Three tiers from the sided structural levels, or the wholesale
    /// percentage ladder when the chart has fewer than three.
    fn take_profit_targets(
        &self,
        direction: TradeDirection,
        current_price: f64,
        levels: &SupportResistanceLevels,
    ) -> Vec<TakeProfitTarget> {
        let structural: Vec<f64> = match direction {
            TradeDirection::Call => levels.resistance.iter().map(|level| level.price).collect(),
            TradeDirection::Put => levels.support.iter().map(|level| level.price).collect(),
        };
        let tiers = self.settings.target_fallback_pcts.len();
        let prices: Vec<f64> = if structural.len() >= tiers {
            structural.into_iter().take(tiers).collect()
        } else {
            self.settings
                .target_fallback_pcts
                .iter()
                .map(|pct| {
                    let offset = pct / 100.0;
                    let price = match direction {
                        TradeDirection::Call => current_price * (1.0 + offset),
                        TradeDirection::Put => current_price * (1.0 - offset),
                    };
                    round2(price)
                })
                .collect()
        };

        prices
            .into_iter()
            .enumerate()
            .map(|(index, price)| TakeProfitTarget {
                tier: index as u8 + 1,
                price,
                distance_pct: round2((price - current_price).abs() / current_price * 100.0),
                action: TIER_ACTIONS[index.min(TIER_ACTIONS.len() - 1)].to_string(),
                expected_option_gain: GAIN_BANDS[index.min(GAIN_BANDS.len() - 1)].to_string(),
            })
            .collect()
    }
}

/// The three fixed profit-triggered stop adjustments.
fn trailing_rules(
    direction: TradeDirection,
    current_price: f64,
    levels: &SupportResistanceLevels,
    ema_34: Option<f64>,
) -> Vec<TrailingStopRule> {
    // Where the stop moves once half the gain is locked in. A 2% offset
    // stands in when no structural level protects the position.
    let lock_level = match direction {
        TradeDirection::Call => levels
            .nearest_support()
            .map(|level| level.price)
            .unwrap_or_else(|| round2(current_price * 0.98)),
        TradeDirection::Put => levels
            .nearest_resistance()
            .map(|level| level.price)
            .unwrap_or_else(|| round2(current_price * 1.02)),
    };
    let trail_action = match ema_34 {
        Some(ema) => format!("Trail the stop at the 34 EMA (currently {ema:.2})"),
        None => "Trail the stop at the 34 EMA".to_string(),
    };

    vec![
        TrailingStopRule {
            trigger: "+50% option profit".to_string(),
            action: "Move stop to breakeven".to_string(),
        },
        TrailingStopRule {
            trigger: "+100% option profit".to_string(),
            action: format!("Lock in 50% of the gain: move stop to {lock_level:.2}"),
        },
        TrailingStopRule {
            trigger: "+200% option profit".to_string(),
            action: trail_action,
        },
    ]
}

/// Tier-1 reward over stop risk, undefined when the stop distance is zero.
fn reward_ratio(entry: f64, stop: f64, first_target: Option<f64>) -> Option<f64> {
    let target = first_target?;
    let risk = (entry - stop).abs();
    if risk == 0.0 {
        return None;
    }
    Some(round2((target - entry).abs() / risk))
}

#[cfg(test)]
mod tests {
    use super::*;
    use levels::{LevelSource, PivotPoints, PriceLevel, ReferenceLevel};

    fn calculator() -> RiskCalculator {
        RiskCalculator::new(RiskSettings::default())
    }

    fn level(price: f64, current: f64) -> PriceLevel {
        PriceLevel {
            price,
            distance_pct: round2((price - current).abs() / current * 100.0),
            source: LevelSource::SwingCluster,
        }
    }

    /// A full level map around a current price of 100.
    fn structured_levels() -> SupportResistanceLevels {
        SupportResistanceLevels {
            pivot: PivotPoints {
                pivot: 100.0,
                r1: 104.0,
                r2: 107.0,
                r3: 110.0,
                s1: 98.0,
                s2: 95.0,
                s3: 90.0,
            },
            resistance: vec![level(104.0, 100.0), level(107.0, 100.0), level(110.0, 100.0)],
            support: vec![level(98.0, 100.0), level(95.0, 100.0), level(90.0, 100.0)],
            week52_high: ReferenceLevel { price: 115.0, distance_pct: 15.0 },
            week52_low: ReferenceLevel { price: 80.0, distance_pct: 20.0 },
        }
    }

    fn bare_levels() -> SupportResistanceLevels {
        SupportResistanceLevels {
            resistance: Vec::new(),
            support: Vec::new(),
            ..structured_levels()
        }
    }

    #[test]
    fn call_plan_leans_on_structure() {
        let plan = calculator().plan(
            TradeDirection::Call,
            100.0,
            &structured_levels(),
            Some(97.0),
            Some(96.0),
        );

        assert_eq!(plan.entry_zone, EntryZone { ideal: 100.0, max_chase: 102.0 });
        // Support at 98 is tighter than the 21 EMA at 97.
        assert_eq!(plan.stop_loss.price, 98.0);
        assert_eq!(plan.stop_loss.distance_pct, 2.0);
        assert_eq!(plan.stop_loss.reason, "Nearest structural support");

        let targets: Vec<f64> = plan.take_profit_targets.iter().map(|t| t.price).collect();
        assert_eq!(targets, vec![104.0, 107.0, 110.0]);
        assert_eq!(plan.take_profit_targets[0].expected_option_gain, "50-100%");
        assert_eq!(plan.take_profit_targets[2].action, "Close remaining position");

        // Tier 1 reward 4 over risk 2.
        assert_eq!(plan.risk_reward_ratio, Some(2.0));
    }

    #[test]
    fn ema_stop_wins_when_tighter() {
        let plan = calculator().plan(
            TradeDirection::Call,
            100.0,
            &structured_levels(),
            Some(99.0),
            None,
        );
        assert_eq!(plan.stop_loss.price, 99.0);
        assert_eq!(plan.stop_loss.reason, "21 EMA");
    }

    #[test]
    fn ema_above_price_never_stops_a_call() {
        // An EMA on the wrong side of the entry is not protective.
        let plan = calculator().plan(
            TradeDirection::Call,
            100.0,
            &bare_levels(),
            Some(101.0),
            None,
        );
        assert_eq!(plan.stop_loss.price, 95.0);
        assert!(plan.stop_loss.reason.contains("5.0% fallback"));
    }

    #[test]
    fn put_plan_mirrors_the_call_side() {
        let plan = calculator().plan(
            TradeDirection::Put,
            100.0,
            &structured_levels(),
            Some(102.0),
            None,
        );

        assert_eq!(plan.entry_zone.max_chase, 98.0);
        // The 21 EMA at 102 is tighter than the resistance at 104.
        assert_eq!(plan.stop_loss.price, 102.0);
        assert_eq!(plan.stop_loss.reason, "21 EMA");

        let targets: Vec<f64> = plan.take_profit_targets.iter().map(|t| t.price).collect();
        assert_eq!(targets, vec![98.0, 95.0, 90.0]);
        // Reward 2 over risk 2.
        assert_eq!(plan.risk_reward_ratio, Some(1.0));
    }

    #[test]
    fn thin_charts_fall_back_to_percentages() {
        let mut levels = structured_levels();
        levels.resistance.truncate(2);
        let plan = calculator().plan(TradeDirection::Call, 100.0, &levels, None, None);

        // Two structural levels is not enough; the whole ladder switches
        // to percentage offsets.
        let targets: Vec<f64> = plan.take_profit_targets.iter().map(|t| t.price).collect();
        assert_eq!(targets, vec![103.0, 105.0, 108.0]);

        let put_plan = calculator().plan(TradeDirection::Put, 100.0, &bare_levels(), None, None);
        let targets: Vec<f64> = put_plan.take_profit_targets.iter().map(|t| t.price).collect();
        assert_eq!(targets, vec![97.0, 95.0, 92.0]);
    }

    #[test]
    fn trailing_rules_are_fixed_triggers() {
        let plan = calculator().plan(
            TradeDirection::Call,
            100.0,
            &structured_levels(),
            Some(97.0),
            Some(96.5),
        );
        let rules = &plan.trailing_stop_rules;
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].trigger, "+50% option profit");
        assert_eq!(rules[0].action, "Move stop to breakeven");
        assert!(rules[1].action.contains("98.00"));
        assert!(rules[2].action.contains("34 EMA (currently 96.50)"));
    }

    #[test]
    fn lock_level_falls_back_near_entry() {
        let plan = calculator().plan(TradeDirection::Call, 100.0, &bare_levels(), None, None);
        assert!(plan.trailing_stop_rules[1].action.contains("98.00"));

        let put_plan = calculator().plan(TradeDirection::Put, 100.0, &bare_levels(), None, None);
        assert!(put_plan.trailing_stop_rules[1].action.contains("102.00"));
    }

    #[test]
    fn widening_the_stop_degrades_the_ratio() {
        let tight = reward_ratio(100.0, 98.0, Some(110.0)).unwrap();
        let wide = reward_ratio(100.0, 95.0, Some(110.0)).unwrap();
        let wider = reward_ratio(100.0, 90.0, Some(110.0)).unwrap();
        assert!(tight > wide && wide > wider);
    }

    #[test]
    fn zero_risk_has_no_ratio() {
        assert_eq!(reward_ratio(100.0, 100.0, Some(110.0)), None);
        assert_eq!(reward_ratio(100.0, 98.0, None), None);
    }

    #[test]
    fn atr_suggestion_doubles_the_risk_distance() {
        let suggestion = calculator().atr_stop_target(100.0, Some(2.0)).unwrap();
        assert_eq!(suggestion.stop, 96.0);
        assert_eq!(suggestion.target, 108.0);

        assert_eq!(calculator().atr_stop_target(100.0, None), None);
        assert_eq!(calculator().atr_stop_target(100.0, Some(0.0)), None);
    }
}
