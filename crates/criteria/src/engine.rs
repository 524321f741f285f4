use chrono::NaiveDate;
use configuration::AnalysisSettings;
use core_types::{CriterionResult, TickerMetadata};
use indicators::math::{ema_series, round2};
use indicators::IndicatorSnapshot;

/// The order of the trend-stack EMAs, fastest first.
const TREND_STACK_PERIODS: [u32; 5] = [8, 21, 34, 55, 89];

/// Evaluates individual setup criteria against an indicator snapshot.
///
/// Every checker is total: missing inputs degrade the criterion to
/// unsatisfied with an explanatory evidence string, never an error.
/// Thresholds come from `AnalysisSettings` so the same engine serves
/// both single-symbol analysis and watchlist scans.
#[derive(Debug, Clone)]
pub struct CriteriaEngine {
    settings: AnalysisSettings,
}

impl CriteriaEngine {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    /// The primary bullish structure test: 8 > 21 > 34 > 55 > 89.
    ///
    /// Compares the rounded snapshot values, so two EMAs that differ only
    /// past the second decimal place count as equal and break the stack.
    pub fn emas_stacked_bullish(&self, snapshot: &IndicatorSnapshot) -> CriterionResult {
        let name = "EMAs stacked bullishly";
        let Some(stack) = snapshot.trend_stack() else {
            return unavailable(name, "one or more trend EMAs");
        };
        let satisfied = stack.windows(2).all(|pair| pair[0] > pair[1]);
        tracing::debug!(satisfied, ?stack, "Evaluated bullish EMA stack");
        CriterionResult::new(name, satisfied, stack_evidence(&stack, satisfied, ">"))
    }

    /// The mirror-image bearish structure test: 8 < 21 < 34 < 55 < 89.
    pub fn emas_stacked_bearish(&self, snapshot: &IndicatorSnapshot) -> CriterionResult {
        let name = "EMAs stacked bearishly";
        let Some(stack) = snapshot.trend_stack() else {
            return unavailable(name, "one or more trend EMAs");
        };
        let satisfied = stack.windows(2).all(|pair| pair[0] < pair[1]);
        tracing::debug!(satisfied, ?stack, "Evaluated bearish EMA stack");
        CriterionResult::new(name, satisfied, stack_evidence(&stack, satisfied, "<"))
    }

    /// Price trading above all three confirmation MAs (20, 40 and 200).
    pub fn price_above_mas(&self, snapshot: &IndicatorSnapshot) -> CriterionResult {
        let name = "Price above 20/40/200 EMAs";
        let (Some(ema_20), Some(ema_40), Some(ema_200)) =
            (snapshot.ema_20, snapshot.ema_40, snapshot.ema_200)
        else {
            return unavailable(name, "one or more confirmation EMAs");
        };
        let price = snapshot.current_price;
        let satisfied = price > ema_20 && price > ema_40 && price > ema_200;
        CriterionResult::new(
            name,
            satisfied,
            format!("price {price:.2} vs 20: {ema_20:.2}, 40: {ema_40:.2}, 200: {ema_200:.2}"),
        )
    }

    /// The confirmation MAs themselves in bullish order: 20 > 40 > 200.
    pub fn ma_stack_20_40_200(&self, snapshot: &IndicatorSnapshot) -> CriterionResult {
        let name = "20/40/200 EMAs stacked";
        let (Some(ema_20), Some(ema_40), Some(ema_200)) =
            (snapshot.ema_20, snapshot.ema_40, snapshot.ema_200)
        else {
            return unavailable(name, "one or more confirmation EMAs");
        };
        let satisfied = ema_20 > ema_40 && ema_40 > ema_200;
        CriterionResult::new(
            name,
            satisfied,
            format!("20: {ema_20:.2}, 40: {ema_40:.2}, 200: {ema_200:.2}"),
        )
    }

    /// Whether the 200 EMA is higher today than `slope_lookback_days` ago.
    ///
    /// The slope is measured on the raw (unrounded) EMA series so a slow
    /// drift still registers; only the reported values are rounded.
    pub fn ema_200_rising(&self, closes: &[f64]) -> CriterionResult {
        let name = "200 EMA rising";
        let lookback = self.settings.slope_lookback_days;
        let Some(series) = ema_series(closes, 200) else {
            return unavailable(name, "the 200 EMA");
        };
        if series.len() <= lookback {
            return unavailable(name, "enough history for the slope window");
        }
        let now = series[series.len() - 1];
        let then = series[series.len() - 1 - lookback];
        CriterionResult::new(
            name,
            now > then,
            format!(
                "now {:.2} vs {lookback} bars ago {:.2}",
                round2(now),
                round2(then)
            ),
        )
    }

    /// Price within `pullback_tolerance_pct` of the 21 EMA, either side.
    pub fn pullback_to_21_ema(&self, snapshot: &IndicatorSnapshot) -> CriterionResult {
        let name = "Pullback to 21 EMA";
        let Some(ema_21) = snapshot.ema_21 else {
            return unavailable(name, "the 21 EMA");
        };
        let price = snapshot.current_price;
        let tolerance = ema_21 * self.settings.pullback_tolerance_pct / 100.0;
        let satisfied = (price - ema_21).abs() <= tolerance;
        CriterionResult::new(
            name,
            satisfied,
            format!(
                "price {price:.2} vs 21 EMA {ema_21:.2} (tolerance {:.1}%)",
                self.settings.pullback_tolerance_pct
            ),
        )
    }

    /// The bearish entry zone: price below the 21 EMA and not merely
    /// hovering inside the pullback band around it.
    pub fn price_below_21_ema(&self, snapshot: &IndicatorSnapshot) -> CriterionResult {
        let name = "Price below 21 EMA";
        let Some(ema_21) = snapshot.ema_21 else {
            return unavailable(name, "the 21 EMA");
        };
        let price = snapshot.current_price;
        let tolerance = ema_21 * self.settings.pullback_tolerance_pct / 100.0;
        let near = (price - ema_21).abs() <= tolerance;
        let satisfied = !near && price < ema_21;
        CriterionResult::new(
            name,
            satisfied,
            format!("price {price:.2} vs 21 EMA {ema_21:.2}"),
        )
    }

    /// Price no more than `max_extension_pct` above the 20 EMA.
    ///
    /// A price below the 20 EMA is by definition not extended, so the
    /// check passes for any extension at or below the cap.
    pub fn price_not_extended(&self, snapshot: &IndicatorSnapshot) -> CriterionResult {
        let name = "Price not extended";
        let Some(ema_20) = snapshot.ema_20 else {
            return unavailable(name, "the 20 EMA");
        };
        let extension = (snapshot.current_price - ema_20) / ema_20 * 100.0;
        let satisfied = extension <= self.settings.max_extension_pct;
        CriterionResult::new(
            name,
            satisfied,
            format!(
                "{:.2}% from 20 EMA (max {:.1}%)",
                round2(extension),
                self.settings.max_extension_pct
            ),
        )
    }

    /// Price within `high52_proximity_pct` of the 52-week high.
    pub fn near_52_week_high(&self, snapshot: &IndicatorSnapshot) -> CriterionResult {
        let name = "Near 52-week high";
        let Some(high_52w) = snapshot.high_52w.filter(|high| *high > 0.0) else {
            return unavailable(name, "the 52-week high");
        };
        let distance = (high_52w - snapshot.current_price) / high_52w * 100.0;
        CriterionResult::new(
            name,
            distance <= self.settings.high52_proximity_pct,
            format!(
                "{:.2}% below 52-week high {high_52w:.2} (max {:.1}%)",
                round2(distance),
                self.settings.high52_proximity_pct
            ),
        )
    }

    /// No earnings report due within `earnings_window_days` of `as_of`.
    ///
    /// A symbol with no earnings date on file passes; the optimistic
    /// reading is deliberate, on the basis that vetoing every symbol with
    /// incomplete metadata would silence the whole watchlist.
    pub fn no_imminent_earnings(
        &self,
        metadata: &TickerMetadata,
        as_of: NaiveDate,
    ) -> CriterionResult {
        let name = "No imminent earnings";
        match metadata.next_earnings_date {
            None => CriterionResult::new(name, true, "no earnings date on file".to_string()),
            Some(date) => {
                let days_until = (date - as_of).num_days();
                let inside = days_until >= 0
                    && days_until <= i64::from(self.settings.earnings_window_days);
                tracing::debug!(%date, days_until, inside, "Evaluated earnings window");
                CriterionResult::new(
                    name,
                    !inside,
                    format!("earnings {date} ({days_until} days away)"),
                )
            }
        }
    }

    /// Stochastic %K at or below the oversold ceiling, the bullish reset.
    pub fn stochastic_oversold(&self, snapshot: &IndicatorSnapshot) -> CriterionResult {
        let name = "Stochastic %K oversold";
        let Some(stoch_k) = snapshot.stoch_k else {
            return unavailable(name, "slow %K");
        };
        CriterionResult::new(
            name,
            stoch_k <= self.settings.stoch_oversold_max,
            format!(
                "%K {stoch_k:.2} (need <= {:.0})",
                self.settings.stoch_oversold_max
            ),
        )
    }

    /// Stochastic %K at or above the overbought floor, the bearish reset.
    pub fn stochastic_overbought(&self, snapshot: &IndicatorSnapshot) -> CriterionResult {
        let name = "Stochastic %K overbought";
        let Some(stoch_k) = snapshot.stoch_k else {
            return unavailable(name, "slow %K");
        };
        CriterionResult::new(
            name,
            stoch_k >= self.settings.stoch_overbought_min,
            format!(
                "%K {stoch_k:.2} (need >= {:.0})",
                self.settings.stoch_overbought_min
            ),
        )
    }

    /// ADX(13) at or above the trending floor.
    pub fn adx_trend_strength(&self, snapshot: &IndicatorSnapshot) -> CriterionResult {
        let name = "ADX trend strength";
        let Some(adx_13) = snapshot.adx_13 else {
            return unavailable(name, "ADX(13)");
        };
        CriterionResult::new(
            name,
            adx_13 >= self.settings.adx_trend_min,
            format!("ADX(13) {adx_13:.2} (need >= {:.0})", self.settings.adx_trend_min),
        )
    }

    /// ADX(14) strictly above the confirmation floor.
    pub fn adx_confirmation(&self, snapshot: &IndicatorSnapshot) -> CriterionResult {
        let name = "ADX confirmation";
        let Some(adx_14) = snapshot.adx_14 else {
            return unavailable(name, "ADX(14)");
        };
        CriterionResult::new(
            name,
            adx_14 > self.settings.adx_confirmation_min,
            format!(
                "ADX(14) {adx_14:.2} (need > {:.0})",
                self.settings.adx_confirmation_min
            ),
        )
    }

    /// RSI strictly above the momentum floor.
    pub fn rsi_momentum(&self, snapshot: &IndicatorSnapshot) -> CriterionResult {
        let name = "RSI momentum";
        let Some(rsi) = snapshot.rsi else {
            return unavailable(name, "RSI");
        };
        CriterionResult::new(
            name,
            rsi > self.settings.rsi_momentum_min,
            format!("RSI {rsi:.2} (need > {:.0})", self.settings.rsi_momentum_min),
        )
    }

    /// RSI beyond the extended threshold. Satisfied here means the
    /// warning fires, not that the setup improved.
    pub fn rsi_extended(&self, snapshot: &IndicatorSnapshot) -> CriterionResult {
        let name = "RSI extended";
        let Some(rsi) = snapshot.rsi else {
            return unavailable(name, "RSI");
        };
        CriterionResult::new(
            name,
            rsi > self.settings.rsi_extended_threshold,
            format!(
                "RSI {rsi:.2} (extended above {:.0})",
                self.settings.rsi_extended_threshold
            ),
        )
    }

    /// Today's volume against the trailing average, excluding today.
    pub fn volume_confirmation(&self, volumes: &[f64]) -> CriterionResult {
        let name = "Volume confirmation";
        let lookback = self.settings.volume_lookback_days;
        if volumes.len() < lookback + 1 {
            return unavailable(name, "enough volume history");
        }
        let current = volumes[volumes.len() - 1];
        let window = &volumes[volumes.len() - 1 - lookback..volumes.len() - 1];
        let average = window.iter().sum::<f64>() / lookback as f64;
        let satisfied = current > average * self.settings.volume_spike_multiplier;
        CriterionResult::new(
            name,
            satisfied,
            format!(
                "today {current:.0} vs {lookback}-day average {average:.0} (need {:.1}x)",
                self.settings.volume_spike_multiplier
            ),
        )
    }

    /// Count of consecutive closes above the raw 21 EMA, walking back
    /// from the latest bar.
    pub fn sustained_above_21_ema(&self, closes: &[f64]) -> CriterionResult {
        let name = "Sustained above 21 EMA";
        let Some(series) = ema_series(closes, 21) else {
            return unavailable(name, "the 21 EMA");
        };
        let streak = closes
            .iter()
            .zip(series.iter())
            .rev()
            .take_while(|(close, ema)| close > ema)
            .count();
        CriterionResult::new(
            name,
            streak >= self.settings.sustain_min_days,
            format!(
                "{streak} consecutive closes above (need >= {})",
                self.settings.sustain_min_days
            ),
        )
    }

    /// Reward distance against risk distance for a proposed trade.
    ///
    /// A zero risk distance makes the ratio undefined, which counts as
    /// unsatisfied rather than a pass on a technicality.
    pub fn reward_to_risk(
        &self,
        entry: f64,
        stop: Option<f64>,
        target: Option<f64>,
    ) -> CriterionResult {
        let name = "Reward-to-risk ratio";
        let (Some(stop), Some(target)) = (stop, target) else {
            return unavailable(name, "a stop and target");
        };
        let risk = (entry - stop).abs();
        if risk == 0.0 {
            return CriterionResult::new(
                name,
                false,
                format!("undefined: stop {stop:.2} equals entry {entry:.2}"),
            );
        }
        let ratio = round2((target - entry).abs() / risk);
        CriterionResult::new(
            name,
            ratio >= self.settings.min_risk_reward,
            format!(
                "{ratio:.2} (entry {entry:.2}, stop {stop:.2}, target {target:.2}, need >= {:.1})",
                self.settings.min_risk_reward
            ),
        )
    }
}

/// Uniform evidence line for the five-EMA stack checks.
fn stack_evidence(stack: &[f64; 5], satisfied: bool, relation: &str) -> String {
    let separator = if satisfied {
        format!(" {relation} ")
    } else {
        ", ".to_string()
    };
    TREND_STACK_PERIODS
        .iter()
        .zip(stack.iter())
        .map(|(period, value)| format!("{period}: {value:.2}"))
        .collect::<Vec<_>>()
        .join(&separator)
}

/// The shared degraded verdict for any checker missing an input.
fn unavailable(name: &str, what: &str) -> CriterionResult {
    CriterionResult::new(name, false, format!("{what} unavailable (insufficient history)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> CriteriaEngine {
        CriteriaEngine::new(AnalysisSettings::default())
    }

    fn bullish_snapshot() -> IndicatorSnapshot {
        let mut snapshot = IndicatorSnapshot::new(102.75);
        snapshot.ema_8 = Some(102.0);
        snapshot.ema_21 = Some(101.0);
        snapshot.ema_34 = Some(99.5);
        snapshot.ema_55 = Some(97.0);
        snapshot.ema_89 = Some(94.0);
        snapshot.ema_20 = Some(101.5);
        snapshot.ema_40 = Some(98.0);
        snapshot.ema_200 = Some(90.0);
        snapshot.rsi = Some(55.0);
        snapshot.stoch_k = Some(35.0);
        snapshot.adx_13 = Some(27.0);
        snapshot.adx_14 = Some(26.0);
        snapshot.high_52w = Some(110.0);
        snapshot
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bullish_stack_requires_strict_order() {
        let mut snapshot = bullish_snapshot();
        let result = engine().emas_stacked_bullish(&snapshot);
        assert!(result.satisfied);
        assert!(result.evidence.contains("8: 102.00 > 21: 101.00"));

        // Equality anywhere in the chain breaks the stack.
        snapshot.ema_21 = snapshot.ema_8;
        assert!(!engine().emas_stacked_bullish(&snapshot).satisfied);
    }

    #[test]
    fn missing_ema_degrades_to_unsatisfied() {
        let mut snapshot = bullish_snapshot();
        snapshot.ema_89 = None;
        let result = engine().emas_stacked_bullish(&snapshot);
        assert!(!result.satisfied);
        assert!(result.evidence.contains("unavailable"));
    }

    #[test]
    fn bearish_stack_is_the_mirror_image() {
        let mut snapshot = bullish_snapshot();
        assert!(!engine().emas_stacked_bearish(&snapshot).satisfied);

        snapshot.ema_8 = Some(94.0);
        snapshot.ema_21 = Some(97.0);
        snapshot.ema_34 = Some(99.5);
        snapshot.ema_55 = Some(101.0);
        snapshot.ema_89 = Some(102.0);
        assert!(engine().emas_stacked_bearish(&snapshot).satisfied);
    }

    #[test]
    fn price_above_mas_needs_all_three() {
        let mut snapshot = bullish_snapshot();
        assert!(engine().price_above_mas(&snapshot).satisfied);

        snapshot.ema_40 = Some(103.0);
        assert!(!engine().price_above_mas(&snapshot).satisfied);

        snapshot.ema_40 = None;
        assert!(!engine().price_above_mas(&snapshot).satisfied);
    }

    #[test]
    fn confirmation_ma_stack_ordering() {
        let mut snapshot = bullish_snapshot();
        assert!(engine().ma_stack_20_40_200(&snapshot).satisfied);

        snapshot.ema_40 = Some(102.0);
        assert!(!engine().ma_stack_20_40_200(&snapshot).satisfied);
    }

    #[test]
    fn ema_200_slope_compares_raw_series() {
        // A steady climb keeps the raw 200 EMA rising even when the
        // rounded values would tie.
        let closes: Vec<f64> = (0..210).map(|i| 100.0 + i as f64 * 0.001).collect();
        let result = engine().ema_200_rising(&closes);
        assert!(result.satisfied);

        let falling: Vec<f64> = (0..210).map(|i| 100.0 - i as f64 * 0.001).collect();
        assert!(!engine().ema_200_rising(&falling).satisfied);

        let short = vec![100.0; 50];
        assert!(!engine().ema_200_rising(&short).satisfied);
    }

    #[test]
    fn pullback_band_is_inclusive() {
        let mut snapshot = bullish_snapshot();
        snapshot.ema_21 = Some(100.0);

        snapshot.current_price = 102.0; // exactly 2% away
        assert!(engine().pullback_to_21_ema(&snapshot).satisfied);

        snapshot.current_price = 102.01;
        assert!(!engine().pullback_to_21_ema(&snapshot).satisfied);

        snapshot.current_price = 98.0; // 2% below also counts
        assert!(engine().pullback_to_21_ema(&snapshot).satisfied);
    }

    #[test]
    fn below_21_ema_excludes_the_pullback_band() {
        let mut snapshot = bullish_snapshot();
        snapshot.ema_21 = Some(100.0);

        snapshot.current_price = 99.0; // below but inside the band
        assert!(!engine().price_below_21_ema(&snapshot).satisfied);

        snapshot.current_price = 97.0;
        assert!(engine().price_below_21_ema(&snapshot).satisfied);
    }

    #[test]
    fn extension_cap_is_inclusive() {
        let mut snapshot = bullish_snapshot();
        snapshot.ema_20 = Some(100.0);

        snapshot.current_price = 110.0; // exactly 10%
        assert!(engine().price_not_extended(&snapshot).satisfied);

        snapshot.current_price = 110.5;
        assert!(!engine().price_not_extended(&snapshot).satisfied);

        snapshot.current_price = 95.0; // below the MA is never extended
        assert!(engine().price_not_extended(&snapshot).satisfied);
    }

    #[test]
    fn proximity_to_52_week_high() {
        let mut snapshot = bullish_snapshot();
        snapshot.high_52w = Some(100.0);

        snapshot.current_price = 80.0; // exactly 20% below
        assert!(engine().near_52_week_high(&snapshot).satisfied);

        snapshot.current_price = 79.0;
        assert!(!engine().near_52_week_high(&snapshot).satisfied);
    }

    #[test]
    fn earnings_window_boundaries() {
        let as_of = date(2026, 8, 3);
        let meta = |day| TickerMetadata {
            company_name: None,
            next_earnings_date: Some(date(2026, 8, day)),
        };

        // Same-day and day-14 earnings both veto.
        assert!(!engine().no_imminent_earnings(&meta(3), as_of).satisfied);
        assert!(!engine().no_imminent_earnings(&meta(17), as_of).satisfied);
        // Day 15 is outside the window; so is a report already past.
        assert!(engine().no_imminent_earnings(&meta(18), as_of).satisfied);
        assert!(engine().no_imminent_earnings(&meta(1), as_of).satisfied);
    }

    #[test]
    fn unknown_earnings_date_passes() {
        let result = engine().no_imminent_earnings(&TickerMetadata::default(), date(2026, 8, 3));
        assert!(result.satisfied);
        assert!(result.evidence.contains("no earnings date"));
    }

    #[test]
    fn oscillator_thresholds_are_inclusive() {
        let mut snapshot = bullish_snapshot();

        snapshot.stoch_k = Some(40.0);
        assert!(engine().stochastic_oversold(&snapshot).satisfied);
        snapshot.stoch_k = Some(40.01);
        assert!(!engine().stochastic_oversold(&snapshot).satisfied);

        snapshot.stoch_k = Some(60.0);
        assert!(engine().stochastic_overbought(&snapshot).satisfied);
        snapshot.stoch_k = Some(59.99);
        assert!(!engine().stochastic_overbought(&snapshot).satisfied);

        snapshot.adx_13 = Some(20.0);
        assert!(engine().adx_trend_strength(&snapshot).satisfied);
        snapshot.adx_13 = Some(19.99);
        assert!(!engine().adx_trend_strength(&snapshot).satisfied);

        // The confirmation floor is strict.
        snapshot.adx_14 = Some(20.0);
        assert!(!engine().adx_confirmation(&snapshot).satisfied);
        snapshot.adx_14 = Some(20.01);
        assert!(engine().adx_confirmation(&snapshot).satisfied);
    }

    #[test]
    fn rsi_momentum_and_extension() {
        let mut snapshot = bullish_snapshot();

        snapshot.rsi = Some(40.0);
        assert!(!engine().rsi_momentum(&snapshot).satisfied);
        snapshot.rsi = Some(40.5);
        assert!(engine().rsi_momentum(&snapshot).satisfied);

        snapshot.rsi = Some(80.0);
        assert!(!engine().rsi_extended(&snapshot).satisfied);
        snapshot.rsi = Some(80.5);
        assert!(engine().rsi_extended(&snapshot).satisfied);
    }

    #[test]
    fn volume_spike_excludes_today_from_the_average() {
        // Five quiet days then a 2x day. The average must not include
        // the spike itself.
        let volumes = vec![1_000_000.0, 1_000_000.0, 1_000_000.0, 1_000_000.0, 1_000_000.0, 2_000_000.0];
        let result = engine().volume_confirmation(&volumes);
        assert!(result.satisfied);
        assert!(result.evidence.contains("average 1000000"));

        // Exactly 1.5x is not a spike; strictly greater is required.
        let flat = vec![1_000_000.0; 5];
        let mut at_threshold = flat.clone();
        at_threshold.push(1_500_000.0);
        assert!(!engine().volume_confirmation(&at_threshold).satisfied);

        assert!(!engine().volume_confirmation(&flat[..3]).satisfied);
    }

    #[test]
    fn sustain_counts_consecutive_closes_only() {
        // 30 rising closes keep price above the 21 EMA throughout.
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        assert!(engine().sustained_above_21_ema(&closes).satisfied);

        // A dip below the EMA four bars ago resets the streak.
        let mut broken = closes.clone();
        let idx = broken.len() - 5;
        broken[idx] = 50.0;
        let result = engine().sustained_above_21_ema(&broken);
        assert!(!result.satisfied);
        assert!(result.evidence.starts_with("4 consecutive"));
    }

    #[test]
    fn reward_to_risk_boundaries() {
        // 2:1 exactly passes.
        let result = engine().reward_to_risk(100.0, Some(95.0), Some(110.0));
        assert!(result.satisfied);
        assert!(result.evidence.starts_with("2.00"));

        assert!(!engine().reward_to_risk(100.0, Some(95.0), Some(109.0)).satisfied);

        // Widening the stop degrades the ratio.
        assert!(!engine().reward_to_risk(100.0, Some(90.0), Some(110.0)).satisfied);

        // Degenerate and missing inputs are unsatisfied, not errors.
        assert!(!engine().reward_to_risk(100.0, Some(100.0), Some(110.0)).satisfied);
        assert!(!engine().reward_to_risk(100.0, None, Some(110.0)).satisfied);
    }

    #[test]
    fn short_direction_ratio_uses_absolute_distances() {
        // A put-side trade: stop above entry, target below.
        let result = engine().reward_to_risk(100.0, Some(105.0), Some(90.0));
        assert!(result.satisfied);
        assert!(result.evidence.starts_with("2.00"));
    }
}
