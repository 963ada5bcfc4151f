use chrono::{DateTime, Utc};
use common::{Direction, PriceBar};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SignalConfig;
use crate::detector::detect;
use crate::indicators::IndicatorFrame;
use crate::scorer::{Confirmations, Score, Strength};

/// A scored crossover at one bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalEvent {
    /// Position of the bar in the analyzed series.
    pub index: usize,
    pub timestamp: DateTime<Utc>,
    pub direction: Direction,
    pub score: Score,
    pub strength: Strength,
    pub confirmations: Confirmations,
}

/// Everything derived from one price series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub frame: IndicatorFrame,
    pub events: Vec<SignalEvent>,
}

/// Runs indicator calculation, crossover detection and scoring.
///
/// Holds only configuration; every call recomputes from scratch.
#[derive(Debug, Clone, Default)]
pub struct SignalEngine {
    config: SignalConfig,
}

impl SignalEngine {
    pub fn new(config: SignalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Analyze `bars` (oldest first, unique timestamps).
    pub fn analyze(&self, bars: &[PriceBar]) -> Analysis {
        if bars.is_empty() {
            debug!("No bars to analyze");
            return Analysis::default();
        }

        let frame = IndicatorFrame::compute(bars, &self.config.indicators);
        let events: Vec<SignalEvent> = detect(&frame, &self.config.gate)
            .into_iter()
            .map(|crossover| {
                let cur = &frame.rows[crossover.index];
                let prev = &frame.rows[crossover.index - 1];
                let confirmations = Confirmations::evaluate(prev, cur, &self.config.score);
                let score = confirmations.score();
                let event = SignalEvent {
                    index: crossover.index,
                    timestamp: cur.bar.timestamp,
                    direction: crossover.direction,
                    score,
                    strength: Strength::from_score(score, &self.config.score),
                    confirmations,
                };
                debug!(
                    index = event.index,
                    timestamp = %event.timestamp,
                    direction = %event.direction,
                    score = %event.score,
                    strength = %event.strength,
                    "Crossover signal"
                );
                event
            })
            .collect();

        info!(
            bars = bars.len(),
            signals = events.len(),
            buys = events.iter().filter(|e| e.direction == Direction::Buy).count(),
            sells = events.iter().filter(|e| e.direction == Direction::Sell).count(),
            "Analysis complete"
        );

        Analysis { frame, events }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn bars(closes: &[f64]) -> Vec<PriceBar> {
        let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| PriceBar {
                timestamp: start + Duration::hours(i as i64),
                open: c,
                high: c,
                low: c,
                close: c,
                volume: 500.0,
            })
            .collect()
    }

    #[test]
    fn empty_series_gives_empty_analysis() {
        let analysis = SignalEngine::default().analyze(&[]);
        assert!(analysis.frame.is_empty());
        assert!(analysis.events.is_empty());
    }

    #[test]
    fn event_carries_bar_timestamp() {
        // Decline then rally with short EMAs so a buy fires after RSI warms up.
        let mut closes: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
        closes.extend((1..=10).map(|i| 81.0 + i as f64 * 0.6));
        let config = SignalConfig::from_toml("[indicators]\nema_fast = 3\nema_slow = 8\n").unwrap();
        let input = bars(&closes);

        let analysis = SignalEngine::new(config).analyze(&input);
        let buy = analysis
            .events
            .iter()
            .find(|e| e.direction == Direction::Buy)
            .expect("rally should produce a buy");
        assert_eq!(buy.timestamp, input[buy.index].timestamp);
        assert!(buy.confirmations.trend);
        assert!(buy.confirmations.price);
    }
}
