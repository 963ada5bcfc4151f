use std::fmt;

use common::Error;
use serde::{Deserialize, Serialize};

use crate::config::ScoreParams;
use crate::indicators::IndicatorRow;

/// Points awarded per satisfied confirmation.
pub const POINTS_PER_CONFIRMATION: u8 = 20;

/// Confirmation score, always one of 0, 20, 40, 60, 80, 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Score(u8);

impl Score {
    pub const MAX: Score = Score(100);

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= Score::MAX.0 && value % POINTS_PER_CONFIRMATION == 0 {
            Ok(Score(value))
        } else {
            Err(Error::InvalidScore(value))
        }
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which confirmations held at a signal bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmations {
    /// Fast EMA above slow EMA.
    pub trend: bool,
    /// RSI strictly inside the mid band.
    pub momentum_band: bool,
    /// MACD line above its signal line.
    pub macd: bool,
    /// Volume above its trailing average.
    pub volume: bool,
    /// Close above the previous close.
    pub price: bool,
}

impl Confirmations {
    pub fn evaluate(prev: &IndicatorRow, cur: &IndicatorRow, params: &ScoreParams) -> Self {
        Self {
            trend: cur.ema_fast > cur.ema_slow,
            momentum_band: cur
                .rsi
                .is_some_and(|r| params.rsi_band_low < r && r < params.rsi_band_high),
            macd: matches!((cur.macd, cur.macd_signal), (Some(m), Some(s)) if m > s),
            volume: cur.volume_avg.is_some_and(|avg| cur.bar.volume > avg),
            price: cur.bar.close > prev.bar.close,
        }
    }

    pub fn count(&self) -> u8 {
        [self.trend, self.momentum_band, self.macd, self.volume, self.price]
            .into_iter()
            .filter(|held| *held)
            .count() as u8
    }

    pub fn score(&self) -> Score {
        Score(self.count() * POINTS_PER_CONFIRMATION)
    }
}

/// Signal strength bucket shown next to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Strong,
    Watch,
}

impl Strength {
    pub fn from_score(score: Score, params: &ScoreParams) -> Self {
        if score.value() >= params.strong_threshold {
            Strength::Strong
        } else {
            Strength::Watch
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Strong => write!(f, "strong"),
            Strength::Watch => write!(f, "watch"),
        }
    }
}
