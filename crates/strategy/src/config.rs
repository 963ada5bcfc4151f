use std::path::Path;

use common::{Error, Result};
use serde::{Deserialize, Serialize};

/// Signal engine parameters (TOML).
///
/// Example `config/signals.toml`:
/// ```toml
/// [indicators]
/// ema_fast = 20
/// ema_slow = 50
/// rsi_period = 14
///
/// [gate]
/// buy_rsi_below = 70.0
/// sell_rsi_above = 30.0
///
/// [score]
/// rsi_band_low = 40.0
/// rsi_band_high = 65.0
/// strong_threshold = 80
/// ```
///
/// Missing sections and keys fall back to the defaults above.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SignalConfig {
    pub indicators: IndicatorParams,
    pub gate: GateParams,
    pub score: ScoreParams,
}

/// Window lengths for every indicator in the frame.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IndicatorParams {
    pub ema_fast: usize,
    pub ema_slow: usize,
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub volume_window: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            ema_fast: 20,
            ema_slow: 50,
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            volume_window: 20,
        }
    }
}

/// RSI limits that block a crossover from firing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GateParams {
    /// A buy crossover only fires while RSI is below this (not overbought).
    pub buy_rsi_below: f64,
    /// A sell crossover only fires while RSI is above this (not oversold).
    pub sell_rsi_above: f64,
}

impl Default for GateParams {
    fn default() -> Self {
        Self {
            buy_rsi_below: 70.0,
            sell_rsi_above: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoreParams {
    /// Exclusive RSI band that earns the momentum points.
    pub rsi_band_low: f64,
    pub rsi_band_high: f64,
    /// Events scoring at least this are `Strong`, the rest `Watch`.
    pub strong_threshold: u8,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            rsi_band_low: 40.0,
            rsi_band_high: 65.0,
            strong_threshold: 80,
        }
    }
}

impl SignalConfig {
    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read signal config at '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let cfg: SignalConfig = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let ind = &self.indicators;
        let periods = [
            ("ema_fast", ind.ema_fast),
            ("ema_slow", ind.ema_slow),
            ("rsi_period", ind.rsi_period),
            ("macd_fast", ind.macd_fast),
            ("macd_slow", ind.macd_slow),
            ("macd_signal", ind.macd_signal),
            ("volume_window", ind.volume_window),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, p)| *p == 0) {
            return Err(Error::Config(format!("indicators.{name} must be > 0")));
        }
        if ind.ema_fast >= ind.ema_slow {
            return Err(Error::Config(
                "indicators.ema_fast must be less than indicators.ema_slow".into(),
            ));
        }
        if ind.macd_fast >= ind.macd_slow {
            return Err(Error::Config(
                "indicators.macd_fast must be less than indicators.macd_slow".into(),
            ));
        }
        if ind.rsi_period < 2 {
            return Err(Error::Config("indicators.rsi_period must be >= 2".into()));
        }
        if self.score.rsi_band_low >= self.score.rsi_band_high {
            return Err(Error::Config(
                "score.rsi_band_low must be less than score.rsi_band_high".into(),
            ));
        }
        if self.score.strong_threshold > 100 {
            return Err(Error::Config("score.strong_threshold must be <= 100".into()));
        }
        Ok(())
    }
}
