use crate::error::IndicatorError;
use crate::math;
use crate::snapshot::IndicatorSnapshot;
use core_types::PriceSeries;

/// RSI lookback in trading days.
pub const RSI_PERIOD: usize = 14;
/// Fast stochastic lookback.
pub const STOCH_K_PERIOD: usize = 8;
/// Stochastic smoothing window, applied twice (slow %K, then %D).
pub const STOCH_D_PERIOD: usize = 3;
/// ADX period used by the five-criteria rule sets.
pub const ADX_TREND_PERIOD: usize = 13;
/// ADX period used by the enhanced confirmation set.
pub const ADX_CONFIRMATION_PERIOD: usize = 14;
/// ATR lookback for the volatility-based stop suggestion.
pub const ATR_PERIOD: usize = 14;

/// A stateless calculator that derives an `IndicatorSnapshot` from a
/// price series.
#[derive(Debug, Clone, Default)]
pub struct IndicatorEngine {}

impl IndicatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes every indicator the rule sets consume.
    ///
    /// # Arguments
    ///
    /// * `series` - The full daily price history, oldest bar first.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `IndicatorSnapshot` or an `IndicatorError`.
    /// Individual indicators that lack history come back as `None` inside
    /// the snapshot; only an empty series or a broken price column is an
    /// error.
    pub fn calculate(&self, series: &PriceSeries) -> Result<IndicatorSnapshot, IndicatorError> {
        if series.is_empty() {
            return Err(IndicatorError::NotEnoughData(
                "price series is empty".to_string(),
            ));
        }

        let closes = series.closes()?;
        let highs = series.highs()?;
        let lows = series.lows()?;

        let current_price = math::round2(closes[closes.len() - 1]);
        let mut snapshot = IndicatorSnapshot::new(current_price);

        snapshot.ema_8 = math::ema(&closes, 8);
        snapshot.ema_21 = math::ema(&closes, 21);
        snapshot.ema_34 = math::ema(&closes, 34);
        snapshot.ema_55 = math::ema(&closes, 55);
        snapshot.ema_89 = math::ema(&closes, 89);

        snapshot.ema_20 = math::ema(&closes, 20);
        snapshot.ema_40 = math::ema(&closes, 40);
        snapshot.ema_200 = math::ema(&closes, 200);

        snapshot.rsi = math::rsi(&closes, RSI_PERIOD);
        let (stoch_k, stoch_d) =
            math::stochastic(&highs, &lows, &closes, STOCH_K_PERIOD, STOCH_D_PERIOD);
        snapshot.stoch_k = stoch_k;
        snapshot.stoch_d = stoch_d;
        snapshot.adx_13 = math::adx(&highs, &lows, &closes, ADX_TREND_PERIOD);
        snapshot.adx_14 = math::adx(&highs, &lows, &closes, ADX_CONFIRMATION_PERIOD);
        snapshot.atr_14 = math::atr(&highs, &lows, &closes, ATR_PERIOD);

        snapshot.high_52w = math::week52_high(&highs);
        snapshot.low_52w = math::week52_low(&lows);

        tracing::debug!(
            bars = series.len(),
            price = snapshot.current_price,
            "Computed indicator snapshot"
        );

        Ok(snapshot)
    }
}
