use anyhow::Context;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use common::{AnalysisRequest, BarSource, Config, Ticker, Timeframe};
use feed::FileSource;
use strategy::{IndicatorFrame, SignalConfig, SignalEngine, SignalEvent};

/// JSON document handed to the charting front end.
#[derive(Debug, Serialize)]
struct Report {
    ticker: Ticker,
    timeframe: Timeframe,
    resolution: String,
    bars: usize,
    events: Vec<SignalEvent>,
    frame: IndicatorFrame,
}

fn main() -> anyhow::Result<()> {
    // ── Logging ──────────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // ── Config ────────────────────────────────────────────────────────────────
    let cfg = Config::from_env().context("loading configuration")?;
    info!(ticker = %cfg.ticker, timeframe = %cfg.timeframe, "TradePal starting");

    let signal_cfg = match &cfg.signal_config_path {
        Some(path) => SignalConfig::load(path)
            .with_context(|| format!("loading signal config {}", path.display()))?,
        None => SignalConfig::default(),
    };

    // ── Analysis ──────────────────────────────────────────────────────────────
    let request = AnalysisRequest::new(cfg.ticker.clone(), cfg.timeframe);
    let source = FileSource::new(&cfg.data_dir);
    let engine = SignalEngine::new(signal_cfg);

    match run(&source, &engine, &request)? {
        Some(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        None => {
            warn!(
                ticker = %request.ticker,
                timeframe = %request.timeframe,
                "No data found for the selected timeframe"
            );
        }
    }
    Ok(())
}

/// Fetch bars for `request` and analyze them. `None` when the source has no
/// bars, including when nothing was ever saved for the request.
fn run(
    source: &dyn BarSource,
    engine: &SignalEngine,
    request: &AnalysisRequest,
) -> anyhow::Result<Option<Report>> {
    let bars = source
        .fetch(request)
        .with_context(|| format!("fetching bars for {}", request.ticker))?;
    if bars.is_empty() {
        return Ok(None);
    }

    let analysis = engine.analyze(&bars);
    Ok(Some(Report {
        ticker: request.ticker.clone(),
        timeframe: request.timeframe,
        resolution: request.timeframe.resolution().to_string(),
        bars: bars.len(),
        events: analysis.events,
        frame: analysis.frame,
    }))
}
