//! Per-bar technical indicators over a price series.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use ema::ema;
pub use macd::macd;
pub use rsi::rsi;
pub use sma::sma;

use common::PriceBar;
use serde::{Deserialize, Serialize};

use crate::config::IndicatorParams;

/// One input bar with the indicators computed at it.
/// `None` means the indicator is not yet available at this bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub bar: PriceBar,
    /// Fast EMA of close (EMA20 by default).
    pub ema_fast: f64,
    /// Slow EMA of close (EMA50 by default).
    pub ema_slow: f64,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    /// Trailing mean of volume (20 bars by default).
    pub volume_avg: Option<f64>,
}

/// A price series augmented with indicators, one row per bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorFrame {
    pub rows: Vec<IndicatorRow>,
}

impl IndicatorFrame {
    /// Compute every indicator for `bars` (oldest first). Each row depends
    /// only on its own bar and earlier ones.
    pub fn compute(bars: &[PriceBar], params: &IndicatorParams) -> Self {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();

        let ema_fast = ema(&closes, params.ema_fast);
        let ema_slow = ema(&closes, params.ema_slow);
        let rsi = rsi(&closes, params.rsi_period);
        let (macd_line, macd_signal) =
            macd(&closes, params.macd_fast, params.macd_slow, params.macd_signal);
        let volume_avg = sma(&volumes, params.volume_window);

        let rows = bars
            .iter()
            .enumerate()
            .map(|(i, bar)| IndicatorRow {
                bar: *bar,
                ema_fast: ema_fast[i],
                ema_slow: ema_slow[i],
                rsi: rsi[i],
                macd: macd_line[i],
                macd_signal: macd_signal[i],
                volume_avg: volume_avg[i],
            })
            .collect();

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
