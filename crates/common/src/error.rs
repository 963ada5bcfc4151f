use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid ticker: '{0}'")]
    InvalidTicker(String),

    #[error("Invalid timeframe: '{0}' (expected one of 1D, 1W, 1M, 3M, 6M, 1Y, Max)")]
    InvalidTimeframe(String),

    #[error("Market data error: {0}")]
    Feed(String),

    #[error("Invalid score: {0} (expected a multiple of 20 up to 100)")]
    InvalidScore(u8),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
