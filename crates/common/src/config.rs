use std::path::PathBuf;

use crate::{Error, Result, Ticker, Timeframe};

/// Runtime configuration loaded from environment variables at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Symbol to analyze, normalized with the `.ST` suffix.
    pub ticker: Ticker,
    pub timeframe: Timeframe,

    /// Directory holding candle payloads saved by the fetch collaborator.
    pub data_dir: PathBuf,

    /// Optional TOML file overriding indicator and scoring parameters.
    pub signal_config_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    /// Loads `.env` if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // ignore error if .env not present
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ticker = lookup("TRADEPAL_TICKER").ok_or_else(|| {
            Error::Config(
                "Required environment variable 'TRADEPAL_TICKER' is not set. Check your .env file."
                    .to_string(),
            )
        })?;

        let timeframe = match lookup("TRADEPAL_TIMEFRAME") {
            Some(raw) => raw.parse()?,
            None => Timeframe::default(),
        };

        Ok(Config {
            ticker: Ticker::parse(&ticker)?,
            timeframe,
            data_dir: lookup("TRADEPAL_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),
            signal_config_path: lookup("SIGNAL_CONFIG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}
