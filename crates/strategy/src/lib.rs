pub mod config;
pub mod detector;
pub mod indicators;
pub mod pipeline;
pub mod scorer;

pub use config::{GateParams, IndicatorParams, ScoreParams, SignalConfig};
pub use detector::Crossover;
pub use indicators::{IndicatorFrame, IndicatorRow};
pub use pipeline::{Analysis, SignalEngine, SignalEvent};
pub use scorer::{Confirmations, Score, Strength};
