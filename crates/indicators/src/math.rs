//! Pure indicator math over `f64` slices.
//!
//! Every function here is total: short, empty, or degenerate input
//! produces `None`, never a panic. Values are rounded to two decimal
//! places exactly where documented, because downstream threshold
//! comparisons operate on the rounded numbers.

/// Approximate number of trading days in one year.
pub const TRADING_DAYS_PER_YEAR: usize = 252;

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Exponential moving average, returning only the most recent value.
///
/// Uses the span smoothing factor alpha = 2 / (period + 1), seeded with
/// the first value and no warm-up bias adjustment. The recursion runs
/// over the entire series; the `period` only gates minimum length so
/// that a 10-bar series cannot pretend to carry a 200-day average.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    let series = ema_series(values, period)?;
    series.last().copied().map(round2)
}

/// The full EMA recursion, unrounded, for slope and sustain checks.
pub fn ema_series(values: &[f64], period: usize) -> Option<Vec<f64>> {
    if period == 0 || values.is_empty() || values.len() < period {
        return None;
    }
    let alpha = 2.0 / (period as f64 + 1.0);
    Some(ewm(values, alpha))
}

/// Relative Strength Index using a simple rolling mean of gains and
/// losses over the last `period` deltas.
///
/// This is deliberately not the canonical Wilder-smoothed RSI: the rule
/// thresholds downstream (40 momentum floor, 80 extension ceiling) were
/// tuned against the rolling-mean variant.
pub fn rsi(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period + 1 {
        return None;
    }

    let deltas: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    let window = &deltas[deltas.len() - period..];

    let gain: f64 = window.iter().filter(|d| **d > 0.0).sum::<f64>() / period as f64;
    let loss: f64 = window.iter().filter(|d| **d < 0.0).map(|d| -d).sum::<f64>() / period as f64;

    if loss == 0.0 {
        // A flat window has no relative strength at all; pure gains max
        // the oscillator out.
        return if gain == 0.0 { None } else { Some(100.0) };
    }

    let rs = gain / loss;
    Some(round2(100.0 - (100.0 / (1.0 + rs))))
}

/// Slow stochastic oscillator.
///
/// Fast %K compares the close to the `k_period` high-low range; the slow
/// %K is its `d_period` rolling mean and %D smooths the slow %K once
/// more. Returns `(slow %K, %D)`, each `None` while its smoothing window
/// is not yet full or when a zero range makes the fast %K undefined
/// inside that window.
pub fn stochastic(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    k_period: usize,
    d_period: usize,
) -> (Option<f64>, Option<f64>) {
    let len = closes.len();
    if k_period == 0 || d_period == 0 || len < k_period || highs.len() != len || lows.len() != len
    {
        return (None, None);
    }

    let mut fast = vec![None; len];
    for i in (k_period - 1)..len {
        let window_low = lows[i + 1 - k_period..=i]
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        let window_high = highs[i + 1 - k_period..=i]
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let range = window_high - window_low;
        if range > 0.0 {
            fast[i] = Some(100.0 * (closes[i] - window_low) / range);
        }
    }

    let slow = rolling_mean(&fast, d_period);
    let signal = rolling_mean(&slow, d_period);

    (
        slow.last().copied().flatten().map(round2),
        signal.last().copied().flatten().map(round2),
    )
}

/// Average Directional Index with Wilder's alpha = 1/period smoothing.
///
/// TR, +DM and -DM are smoothed recursively from the first bar; DX is
/// undefined wherever +DI + -DI is zero, and the final ADX recursion
/// seeds at the first defined DX, carrying the prior value across
/// undefined bars. Returns `None` only when DX never becomes defined
/// (a single bar, or no directional movement in the whole window).
pub fn adx(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> Option<f64> {
    let len = closes.len();
    if period == 0 || len == 0 || highs.len() != len || lows.len() != len {
        return None;
    }
    let alpha = 1.0 / period as f64;

    let tr = true_ranges(highs, lows, closes);
    let mut plus_dm = vec![0.0; len];
    let mut minus_dm = vec![0.0; len];
    for i in 1..len {
        let up_move = highs[i] - highs[i - 1];
        let down_move = lows[i - 1] - lows[i];
        if up_move > down_move && up_move > 0.0 {
            plus_dm[i] = up_move;
        }
        if down_move > up_move && down_move > 0.0 {
            minus_dm[i] = down_move;
        }
    }

    let smoothed_tr = ewm(&tr, alpha);
    let smoothed_plus = ewm(&plus_dm, alpha);
    let smoothed_minus = ewm(&minus_dm, alpha);

    let mut adx_state: Option<f64> = None;
    for i in 0..len {
        let dx = if smoothed_tr[i] > 0.0 {
            let plus_di = 100.0 * smoothed_plus[i] / smoothed_tr[i];
            let minus_di = 100.0 * smoothed_minus[i] / smoothed_tr[i];
            let di_sum = plus_di + minus_di;
            if di_sum > 0.0 {
                Some(100.0 * (plus_di - minus_di).abs() / di_sum)
            } else {
                None
            }
        } else {
            None
        };

        adx_state = match (adx_state, dx) {
            (None, Some(value)) => Some(value),
            (Some(state), Some(value)) => Some(alpha * value + (1.0 - alpha) * state),
            (state, None) => state,
        };
    }

    adx_state.map(round2)
}

/// Average True Range: simple rolling mean of the true range over the
/// last `period` bars.
pub fn atr(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> Option<f64> {
    let len = closes.len();
    if period == 0 || len < period || highs.len() != len || lows.len() != len {
        return None;
    }
    let tr = true_ranges(highs, lows, closes);
    let window = &tr[len - period..];
    Some(round2(window.iter().sum::<f64>() / period as f64))
}

/// Highest high over the last ~52 trading weeks.
pub fn week52_high(highs: &[f64]) -> Option<f64> {
    if highs.is_empty() {
        return None;
    }
    let lookback = highs.len().min(TRADING_DAYS_PER_YEAR);
    let window = &highs[highs.len() - lookback..];
    let max = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(round2(max))
}

/// Lowest low over the last ~52 trading weeks.
pub fn week52_low(lows: &[f64]) -> Option<f64> {
    if lows.is_empty() {
        return None;
    }
    let lookback = lows.len().min(TRADING_DAYS_PER_YEAR);
    let window = &lows[lows.len() - lookback..];
    let min = window.iter().copied().fold(f64::INFINITY, f64::min);
    Some(round2(min))
}

/// Recursive exponential smoothing, seeded with the first value.
fn ewm(values: &[f64], alpha: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut state = match values.first() {
        Some(first) => *first,
        None => return out,
    };
    out.push(state);
    for value in &values[1..] {
        state = alpha * value + (1.0 - alpha) * state;
        out.push(state);
    }
    out
}

/// Rolling mean over optional values; a window containing any undefined
/// value is itself undefined.
fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 {
        return out;
    }
    for i in 0..values.len() {
        if i + 1 < window {
            continue;
        }
        let slice = &values[i + 1 - window..=i];
        if let Some(complete) = slice.iter().copied().collect::<Option<Vec<f64>>>() {
            out[i] = Some(complete.iter().sum::<f64>() / window as f64);
        }
    }
    out
}

/// True range per bar; the first bar falls back to its own high-low span
/// since no previous close exists.
fn true_ranges(highs: &[f64], lows: &[f64], closes: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(closes.len());
    for i in 0..closes.len() {
        let high_low = highs[i] - lows[i];
        let range = if i == 0 {
            high_low
        } else {
            let high_close = (highs[i] - closes[i - 1]).abs();
            let low_close = (lows[i] - closes[i - 1]).abs();
            high_low.max(high_close).max(low_close)
        };
        out.push(range);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ema_follows_seeded_recursion() {
        // period 3 gives alpha = 0.5, so the series is easy to verify by
        // hand: 2, 3, 4.5, 6.25.
        let values = vec![2.0, 4.0, 6.0, 8.0];
        let series = ema_series(&values, 3).unwrap();
        assert_eq!(series, vec![2.0, 3.0, 4.5, 6.25]);
        assert_eq!(ema(&values, 3), Some(6.25));
    }

    #[test]
    fn test_ema_recursion_identity_holds_everywhere() {
        let values: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let period = 21;
        let alpha = 2.0 / (period as f64 + 1.0);
        let series = ema_series(&values, period).unwrap();

        assert_eq!(series[0], values[0]);
        for i in 1..values.len() {
            let expected = alpha * values[i] + (1.0 - alpha) * series[i - 1];
            assert!((series[i] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ema_requires_period_bars() {
        let values = vec![1.0, 2.0];
        assert_eq!(ema(&values, 3), None);
        assert_eq!(ema_series(&values, 3), None);
        assert_eq!(ema(&[], 3), None);
    }

    #[test]
    fn test_rsi_rolling_mean_variant() {
        // deltas: +0.34, -0.25, +0.06 over a period of 3.
        // gain = 0.4/3, loss = 0.25/3, rs = 1.6 -> rsi = 61.54.
        let values = vec![44.0, 44.34, 44.09, 44.15];
        assert_eq!(rsi(&values, 3), Some(61.54));
    }

    #[test]
    fn test_rsi_is_100_when_losses_never_happen() {
        let values: Vec<f64> = (0..20).map(|i| 50.0 + i as f64).collect();
        assert_eq!(rsi(&values, 14), Some(100.0));
    }

    #[test]
    fn test_rsi_is_0_when_gains_never_happen() {
        let values: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
        assert_eq!(rsi(&values, 14), Some(0.0));
    }

    #[test]
    fn test_rsi_flat_window_is_undefined() {
        let values = vec![50.0; 20];
        assert_eq!(rsi(&values, 14), None);
    }

    #[test]
    fn test_rsi_stays_in_bounds() {
        let values: Vec<f64> = (0..80)
            .map(|i| 100.0 + (i as f64 * 1.3).sin() * 9.0 + (i as f64 * 0.31).cos() * 4.0)
            .collect();
        for period in [5, 14, 21] {
            let value = rsi(&values, period).unwrap();
            assert!((0.0..=100.0).contains(&value), "rsi {} out of bounds", value);
        }
    }

    #[test]
    fn test_rsi_needs_period_plus_one_values() {
        let values = vec![1.0; 14];
        assert_eq!(rsi(&values, 14), None);
    }

    #[test]
    fn test_stochastic_steady_trend() {
        // Every 3-bar window spans 4 points with the close 3 above the
        // low, so fast, slow and signal all sit at 75.
        let highs = vec![10.0, 11.0, 12.0, 13.0, 14.0];
        let lows = vec![8.0, 9.0, 10.0, 11.0, 12.0];
        let closes = vec![9.0, 10.0, 11.0, 12.0, 13.0];
        assert_eq!(stochastic(&highs, &lows, &closes, 3, 2), (Some(75.0), Some(75.0)));
    }

    #[test]
    fn test_stochastic_windows_fill_in_stages() {
        let highs = vec![10.0, 11.0, 12.0];
        let lows = vec![8.0, 9.0, 10.0];
        let closes = vec![9.0, 10.0, 11.0];
        // Enough bars for fast %K but not for its rolling mean.
        assert_eq!(stochastic(&highs, &lows, &closes, 3, 2), (None, None));
        // Too short for even one fast %K window.
        assert_eq!(stochastic(&highs[..2], &lows[..2], &closes[..2], 3, 2), (None, None));
    }

    #[test]
    fn test_stochastic_zero_range_is_undefined() {
        let highs = vec![10.0; 8];
        let lows = vec![10.0; 8];
        let closes = vec![10.0; 8];
        assert_eq!(stochastic(&highs, &lows, &closes, 3, 2), (None, None));
    }

    #[test]
    fn test_adx_pure_uptrend_pins_at_100() {
        // Only +DM ever fires, so DX is 100 at every defined bar and the
        // smoothed ADX cannot leave it.
        let highs: Vec<f64> = (0..30).map(|i| 102.0 + i as f64).collect();
        let lows: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let closes: Vec<f64> = (0..30).map(|i| 101.0 + i as f64).collect();
        assert_eq!(adx(&highs, &lows, &closes, 13), Some(100.0));
    }

    #[test]
    fn test_adx_undefined_without_movement() {
        let highs = vec![100.0; 40];
        let lows = vec![100.0; 40];
        let closes = vec![100.0; 40];
        assert_eq!(adx(&highs, &lows, &closes, 13), None);

        assert_eq!(adx(&[101.0], &[99.0], &[100.0], 13), None);
        assert_eq!(adx(&[], &[], &[], 13), None);
    }

    #[test]
    fn test_adx_choppy_market_reads_weak() {
        let mut highs = Vec::new();
        let mut lows = Vec::new();
        let mut closes = Vec::new();
        for i in 0..60 {
            let wiggle = if i % 2 == 0 { 1.0 } else { -1.0 };
            highs.push(101.0 + wiggle);
            lows.push(99.0 + wiggle);
            closes.push(100.0 + wiggle);
        }
        let value = adx(&highs, &lows, &closes, 13).unwrap();
        assert!(value < 25.0, "choppy adx should be weak, got {}", value);
    }

    #[test]
    fn test_atr_simple_rolling_mean() {
        let highs = vec![12.0, 13.0];
        let lows = vec![10.0, 11.0];
        let closes = vec![11.0, 12.0];
        assert_eq!(atr(&highs, &lows, &closes, 2), Some(2.0));
        assert_eq!(atr(&highs, &lows, &closes, 3), None);
    }

    #[test]
    fn test_week52_window_caps_at_252_bars() {
        let mut highs = vec![999.0; 48];
        highs.extend((1..=252).map(|i| i as f64));
        assert_eq!(week52_high(&highs), Some(252.0));

        let mut lows = vec![0.01; 48];
        lows.extend((500..752).map(|i| i as f64));
        assert_eq!(week52_low(&lows), Some(500.0));
    }

    #[test]
    fn test_week52_empty_is_undefined() {
        assert_eq!(week52_high(&[]), None);
        assert_eq!(week52_low(&[]), None);
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(61.538461), 61.54);
        assert_eq!(round2(-1.005001), -1.01);
        assert_eq!(round2(2.0), 2.0);
    }
}
