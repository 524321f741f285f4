use serde::{Deserialize, Serialize};

/// The most recent value of every indicator the rule sets consume.
///
/// This struct is the final output of the `IndicatorEngine` and the
/// primary input to the criteria checkers. Each field is `None` when the
/// series is too short for its lookback or the computation degenerates;
/// `current_price` is always present because a snapshot is only built
/// from a non-empty series. All values are rounded to two decimal places
/// at the computation boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    // I. Trend-stack EMAs (Fibonacci periods)
    pub ema_8: Option<f64>,
    pub ema_21: Option<f64>,
    pub ema_34: Option<f64>,
    pub ema_55: Option<f64>,
    pub ema_89: Option<f64>,

    // II. Confirmation moving averages
    pub ema_20: Option<f64>,
    pub ema_40: Option<f64>,
    pub ema_200: Option<f64>,

    // III. Oscillators and trend strength
    pub rsi: Option<f64>,
    pub stoch_k: Option<f64>,
    pub stoch_d: Option<f64>,
    pub adx_13: Option<f64>,
    pub adx_14: Option<f64>,
    pub atr_14: Option<f64>,

    // IV. Reference levels
    pub high_52w: Option<f64>,
    pub low_52w: Option<f64>,
    pub current_price: f64,
}

impl IndicatorSnapshot {
    /// Creates a snapshot with every indicator unset.
    pub fn new(current_price: f64) -> Self {
        Self {
            ema_8: None,
            ema_21: None,
            ema_34: None,
            ema_55: None,
            ema_89: None,
            ema_20: None,
            ema_40: None,
            ema_200: None,
            rsi: None,
            stoch_k: None,
            stoch_d: None,
            adx_13: None,
            adx_14: None,
            atr_14: None,
            high_52w: None,
            low_52w: None,
            current_price,
        }
    }

    /// The five trend-stack EMAs in period order, when all are defined.
    pub fn trend_stack(&self) -> Option<[f64; 5]> {
        Some([
            self.ema_8?,
            self.ema_21?,
            self.ema_34?,
            self.ema_55?,
            self.ema_89?,
        ])
    }
}
