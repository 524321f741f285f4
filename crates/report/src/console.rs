use analyzer::AnalysisResult;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use core_types::CriterionResult;

use crate::reasons::criterion_line;

/// Renders one full analysis as a console report.
///
/// Every missing metric renders as `N/A`; only the sentinel collapses
/// the whole report into a could-not-analyze message.
pub fn render(result: &AnalysisResult) -> String {
    if result.is_unknown() {
        return format!("Could not analyze {}: unable to fetch data", result.symbol);
    }

    let mut lines: Vec<String> = Vec::new();
    let title = match &result.company_name {
        Some(name) => format!("{} ({name})", result.symbol),
        None => result.symbol.clone(),
    };
    lines.push(format!("{title} - {}", result.as_of));

    if let Some(snapshot) = &result.snapshot {
        lines.push(format!("Price: {:.2}", snapshot.current_price));
        lines.push(String::new());
        lines.push(indicator_table(snapshot).to_string());
        lines.push(String::new());
    }

    push_criteria(&mut lines, "Bullish checklist", &result.bullish_criteria);
    push_criteria(&mut lines, "Bearish checklist", &result.bearish_criteria);
    push_criteria(&mut lines, "Enhanced confirmation", &result.enhanced_criteria);
    push_criteria(&mut lines, "Additional checks", &result.extra_criteria);

    let recommendation = &result.decision.options_recommendation;
    lines.push(format!("Trend: {}", result.decision.trend.label()));
    lines.push(format!("Confidence: {}", recommendation.confidence));
    lines.push(format!("Strategy: {}", recommendation.strategy));
    lines.push(format!("Reasoning: {}", recommendation.reasoning));
    lines.push(format!("Entry: {}", recommendation.entry));
    lines.push(format!("Risk: {}", recommendation.risk));

    if let Some(levels) = &result.levels {
        lines.push(String::new());
        lines.push("Support / resistance".to_string());
        lines.push(level_table(levels).to_string());
        lines.push(pivot_line(levels));
    }

    if let Some(plan) = &result.risk_plan {
        lines.push(String::new());
        lines.push(format!("Risk plan ({})", plan.direction));
        lines.push(format!(
            "  Entry: ideal {:.2}, chase to {:.2}",
            plan.entry_zone.ideal, plan.entry_zone.max_chase
        ));
        lines.push(format!(
            "  Stop: {:.2} ({:.2}% away, {})",
            plan.stop_loss.price, plan.stop_loss.distance_pct, plan.stop_loss.reason
        ));
        for target in &plan.take_profit_targets {
            lines.push(format!(
                "  Target {}: {:.2} ({:.2}% away) {} -> {}",
                target.tier,
                target.price,
                target.distance_pct,
                target.expected_option_gain,
                target.action
            ));
        }
        for rule in &plan.trailing_stop_rules {
            lines.push(format!("  Trailing {}: {}", rule.trigger, rule.action));
        }
        let ratio = plan
            .risk_reward_ratio
            .map(|ratio| format!("{ratio:.2}"))
            .unwrap_or_else(|| "N/A".to_string());
        lines.push(format!("  Reward/risk: {ratio}"));
    }

    lines.join("\n")
}

/// Renders just the support/resistance picture for one symbol.
pub fn render_levels(symbol: &str, levels: &levels::SupportResistanceLevels) -> String {
    let mut lines = vec![format!("{symbol} support / resistance")];
    lines.push(level_table(levels).to_string());
    lines.push(pivot_line(levels));
    lines.join("\n")
}

/// One summary row per scanned symbol.
pub fn scan_summary(results: &[AnalysisResult]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Symbol",
            "Price",
            "Trend",
            "Confidence",
            "Bullish",
            "Bearish",
            "Enhanced",
        ]);
    for result in results {
        let price = result
            .snapshot
            .as_ref()
            .map(|snapshot| format!("{:.2}", snapshot.current_price))
            .unwrap_or_else(|| "N/A".to_string());
        table.add_row(vec![
            result.symbol.clone(),
            price,
            result.decision.trend.label().to_string(),
            result
                .decision
                .options_recommendation
                .confidence
                .to_string(),
            format!("{}/5", result.decision.bullish_count),
            format!("{}/5", result.decision.bearish_count),
            format!("{}/7", result.decision.enhanced_count),
        ]);
    }
    table
}

fn indicator_table(snapshot: &indicators::IndicatorSnapshot) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Indicator", "Value", "Indicator", "Value"]);
    let rows = [
        ("EMA 8", snapshot.ema_8, "EMA 20", snapshot.ema_20),
        ("EMA 21", snapshot.ema_21, "EMA 40", snapshot.ema_40),
        ("EMA 34", snapshot.ema_34, "EMA 200", snapshot.ema_200),
        ("EMA 55", snapshot.ema_55, "RSI (14)", snapshot.rsi),
        ("EMA 89", snapshot.ema_89, "ATR (14)", snapshot.atr_14),
        ("Stoch %K", snapshot.stoch_k, "Stoch %D", snapshot.stoch_d),
        ("ADX (13)", snapshot.adx_13, "ADX (14)", snapshot.adx_14),
        ("52w high", snapshot.high_52w, "52w low", snapshot.low_52w),
    ];
    for (left, left_value, right, right_value) in rows {
        table.add_row(vec![
            left.to_string(),
            fmt_opt(left_value),
            right.to_string(),
            fmt_opt(right_value),
        ]);
    }
    table
}

fn level_table(levels: &levels::SupportResistanceLevels) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Side", "Price", "Distance", "Source"]);
    for level in &levels.resistance {
        table.add_row(vec![
            "Resistance".to_string(),
            format!("{:.2}", level.price),
            format!("{:.2}%", level.distance_pct),
            source_label(level.source).to_string(),
        ]);
    }
    for level in &levels.support {
        table.add_row(vec![
            "Support".to_string(),
            format!("{:.2}", level.price),
            format!("{:.2}%", level.distance_pct),
            source_label(level.source).to_string(),
        ]);
    }
    table
}

fn pivot_line(levels: &levels::SupportResistanceLevels) -> String {
    format!(
        "Pivot: {:.2} | 52w high: {:.2} ({:.2}% away) | 52w low: {:.2} ({:.2}% away)",
        levels.pivot.pivot,
        levels.week52_high.price,
        levels.week52_high.distance_pct,
        levels.week52_low.price,
        levels.week52_low.distance_pct,
    )
}

fn source_label(source: levels::LevelSource) -> &'static str {
    match source {
        levels::LevelSource::SwingCluster => "swing cluster",
        levels::LevelSource::PivotPoint => "pivot point",
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    value
        .map(|value| format!("{value:.2}"))
        .unwrap_or_else(|| "N/A".to_string())
}

fn push_criteria(lines: &mut Vec<String>, title: &str, criteria: &[CriterionResult]) {
    if criteria.is_empty() {
        return;
    }
    let satisfied = criteria.iter().filter(|criterion| criterion.satisfied).count();
    lines.push(format!("{title} ({satisfied}/{})", criteria.len()));
    for criterion in criteria {
        lines.push(format!("  {}", criterion_line(criterion)));
    }
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyzer::AnalysisResult;
    use chrono::NaiveDate;
    use core_types::CriterionResult;
    use indicators::IndicatorSnapshot;
    use scoring::{CriteriaTally, decide};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn partial_result() -> AnalysisResult {
        let mut snapshot = IndicatorSnapshot::new(102.75);
        snapshot.ema_8 = Some(102.11);
        snapshot.ema_21 = Some(101.4);
        snapshot.rsi = Some(55.2);
        let tally = CriteriaTally {
            bullish_count: 2,
            ..CriteriaTally::default()
        };
        AnalysisResult {
            symbol: "TEST".to_string(),
            company_name: Some("Test Corp".to_string()),
            as_of: day(),
            snapshot: Some(snapshot),
            bullish_stacked: false,
            bearish_stacked: false,
            bullish_criteria: vec![
                CriterionResult::new(
                    "Pullback to 21 EMA",
                    true,
                    "price 102.75 within 2.5% of 21 EMA 101.40".to_string(),
                ),
                CriterionResult::new(
                    "Stochastic %K oversold",
                    false,
                    "stochastic %K unavailable (insufficient history)".to_string(),
                ),
            ],
            bearish_criteria: vec![CriterionResult::new(
                "Price below 21 EMA",
                false,
                "price 102.75 not below 21 EMA 101.40".to_string(),
            )],
            enhanced_criteria: Vec::new(),
            extra_criteria: Vec::new(),
            decision: decide(&tally),
            levels: None,
            risk_plan: None,
        }
    }

    #[test]
    fn renders_checklists_and_missing_metrics() {
        let text = render(&partial_result());
        assert!(text.contains("TEST (Test Corp) - 2026-03-02"));
        assert!(text.contains("Price: 102.75"));
        assert!(text.contains("102.11"));
        assert!(text.contains("N/A"));
        assert!(text.contains("Bullish checklist (1/2)"));
        assert!(text.contains('\u{2713}'));
        assert!(text.contains('\u{2717}'));
        assert!(text.contains("Trend: NO CLEAR TREND - NO OPTIONS TRADE"));
        assert!(text.contains("Strategy: NO TRADE"));
    }

    #[test]
    fn empty_sections_leave_no_headers_behind() {
        let text = render(&partial_result());
        assert!(!text.contains("Enhanced confirmation"));
        assert!(!text.contains("Support / resistance"));
        assert!(!text.contains("Risk plan"));
        assert!(!text.contains("Reward/risk"));
    }

    #[test]
    fn unknown_results_collapse_to_one_line() {
        let text = render(&AnalysisResult::unknown("GHOST", day()));
        assert_eq!(text, "Could not analyze GHOST: unable to fetch data");
    }

    #[test]
    fn scan_summary_has_one_row_per_symbol() {
        let results = vec![partial_result(), AnalysisResult::unknown("GHOST", day())];
        let table = scan_summary(&results).to_string();
        assert!(table.contains("TEST"));
        assert!(table.contains("GHOST"));
        assert!(table.contains("2/5"));
        assert!(table.contains("UNKNOWN"));
    }

    #[test]
    fn level_report_stands_alone() {
        let levels = levels::SupportResistanceLevels {
            pivot: levels::PivotPoints {
                pivot: 100.0,
                r1: 110.0,
                r2: 120.0,
                r3: 130.0,
                s1: 90.0,
                s2: 80.0,
                s3: 70.0,
            },
            resistance: vec![levels::PriceLevel {
                price: 104.0,
                distance_pct: 4.0,
                source: levels::LevelSource::SwingCluster,
            }],
            support: vec![levels::PriceLevel {
                price: 98.0,
                distance_pct: 2.0,
                source: levels::LevelSource::PivotPoint,
            }],
            week52_high: levels::ReferenceLevel {
                price: 115.0,
                distance_pct: 15.0,
            },
            week52_low: levels::ReferenceLevel {
                price: 80.0,
                distance_pct: 20.0,
            },
        };

        let text = render_levels("AAPL", &levels);
        assert!(text.contains("AAPL support / resistance"));
        assert!(text.contains("104.00"));
        assert!(text.contains("swing cluster"));
        assert!(text.contains("pivot point"));
        assert!(text.contains("Pivot: 100.00"));
    }
}
