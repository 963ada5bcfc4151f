use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

/// One sampling interval of OHLCV market data.
///
/// A series of bars is ordered by `timestamp` with no duplicates. The OHLC
/// envelope (`low <= open, close <= high`) is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Shares traded during the interval.
    pub volume: f64,
}

impl PriceBar {
    /// True when open and close both sit inside the low/high range.
    pub fn is_consistent(&self) -> bool {
        self.low <= self.open
            && self.low <= self.close
            && self.open <= self.high
            && self.close <= self.high
    }
}

/// Direction of a crossover signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Buy,
    Sell,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Buy => write!(f, "BUY"),
            Direction::Sell => write!(f, "SELL"),
        }
    }
}

/// Candle resolution understood by the market-data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    Minutes(u32),
    Daily,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Minutes(m) => write!(f, "{m}"),
            Resolution::Daily => write!(f, "D"),
        }
    }
}

/// Trend period selectable by the user. Each one maps to a fixed candle
/// resolution and lookback window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[default]
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "Max")]
    Max,
}

impl Timeframe {
    pub const ALL: [Timeframe; 7] = [
        Timeframe::OneDay,
        Timeframe::OneWeek,
        Timeframe::OneMonth,
        Timeframe::ThreeMonths,
        Timeframe::SixMonths,
        Timeframe::OneYear,
        Timeframe::Max,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::OneDay => "1D",
            Timeframe::OneWeek => "1W",
            Timeframe::OneMonth => "1M",
            Timeframe::ThreeMonths => "3M",
            Timeframe::SixMonths => "6M",
            Timeframe::OneYear => "1Y",
            Timeframe::Max => "Max",
        }
    }

    /// `(resolution, lookback)` for this timeframe.
    pub fn settings(&self) -> (Resolution, Duration) {
        match self {
            Timeframe::OneDay => (Resolution::Minutes(5), Duration::days(1)),
            Timeframe::OneWeek => (Resolution::Minutes(15), Duration::days(7)),
            Timeframe::OneMonth => (Resolution::Minutes(30), Duration::days(30)),
            Timeframe::ThreeMonths => (Resolution::Minutes(60), Duration::days(90)),
            Timeframe::SixMonths => (Resolution::Minutes(60), Duration::days(180)),
            Timeframe::OneYear => (Resolution::Daily, Duration::days(365)),
            Timeframe::Max => (Resolution::Daily, Duration::days(2000)),
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.settings().0
    }

    pub fn lookback(&self) -> Duration {
        self.settings().1
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timeframe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Timeframe::ALL
            .into_iter()
            .find(|tf| tf.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidTimeframe(s.to_string()))
    }
}

/// A Stockholm-listed symbol, always carrying the `.ST` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    pub const EXCHANGE_SUFFIX: &'static str = ".ST";

    pub fn parse(input: &str) -> crate::Result<Self> {
        let symbol = input
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_uppercase();
        let base = symbol.strip_suffix(Self::EXCHANGE_SUFFIX).unwrap_or(&symbol);
        if base.is_empty() {
            return Err(Error::InvalidTicker(input.to_string()));
        }
        Ok(Self(format!("{base}{}", Self::EXCHANGE_SUFFIX)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ticker::parse(s)
    }
}

/// Parameters of one analysis run: which symbol, over which timeframe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub ticker: Ticker,
    pub timeframe: Timeframe,
}

impl AnalysisRequest {
    pub fn new(ticker: Ticker, timeframe: Timeframe) -> Self {
        Self { ticker, timeframe }
    }

    /// Earliest timestamp covered by the request when the window ends at `anchor`.
    pub fn window_start(&self, anchor: DateTime<Utc>) -> DateTime<Utc> {
        anchor - self.timeframe.lookback()
    }
}
