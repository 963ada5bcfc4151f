use common::Direction;
use serde::{Deserialize, Serialize};

use crate::config::GateParams;
use crate::indicators::{IndicatorFrame, IndicatorRow};

/// A bar where the fast EMA crossed the slow EMA and the RSI gate allowed it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crossover {
    pub index: usize,
    pub direction: Direction,
}

/// Scan the frame bar-by-bar against each bar's predecessor.
pub fn detect(frame: &IndicatorFrame, gate: &GateParams) -> Vec<Crossover> {
    frame
        .rows
        .windows(2)
        .enumerate()
        .filter_map(|(i, pair)| {
            classify(&pair[0], &pair[1], gate).map(|direction| Crossover {
                index: i + 1,
                direction,
            })
        })
        .collect()
}

/// Crossover direction at `cur`, if any. Needs RSI at both bars.
pub fn classify(prev: &IndicatorRow, cur: &IndicatorRow, gate: &GateParams) -> Option<Direction> {
    let (Some(_), Some(rsi)) = (prev.rsi, cur.rsi) else {
        return None;
    };

    let crossed_up = prev.ema_fast <= prev.ema_slow && cur.ema_fast > cur.ema_slow;
    let crossed_down = prev.ema_fast >= prev.ema_slow && cur.ema_fast < cur.ema_slow;

    if crossed_up && rsi < gate.buy_rsi_below {
        Some(Direction::Buy)
    } else if crossed_down && rsi > gate.sell_rsi_above {
        Some(Direction::Sell)
    } else {
        None
    }
}
