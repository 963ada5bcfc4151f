use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use common::{AnalysisRequest, BarSource, PriceBar, Result};

use crate::finnhub::CandlePayload;
use crate::validate_series;

/// Reads candle payloads saved on disk as `<dir>/<TICKER>_<TIMEFRAME>.json`.
///
/// The request window is anchored at the newest bar in the file, so a
/// payload keeps producing the same series no matter when it is read.
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, request: &AnalysisRequest) -> PathBuf {
        self.dir
            .join(format!("{}_{}.json", request.ticker, request.timeframe))
    }

    /// `None` when no payload has been saved at `path`.
    fn read_payload(path: &Path) -> Result<Option<CandlePayload>> {
        let body = match std::fs::read_to_string(path) {
            Ok(body) => body,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        CandlePayload::from_json(&body).map(Some)
    }
}

impl BarSource for FileSource {
    fn fetch(&self, request: &AnalysisRequest) -> Result<Vec<PriceBar>> {
        let path = self.path_for(request);
        debug!(path = %path.display(), "Reading candle payload");
        let Some(payload) = Self::read_payload(&path)? else {
            debug!(path = %path.display(), "No candle payload saved");
            return Ok(Vec::new());
        };
        let bars = payload.into_bars()?;
        validate_series(&bars)?;

        let Some(last) = bars.last() else {
            return Ok(bars);
        };
        let start = request.window_start(last.timestamp);
        let total = bars.len();
        let windowed: Vec<PriceBar> = bars
            .into_iter()
            .filter(|b| b.timestamp >= start)
            .collect();

        info!(
            ticker = %request.ticker,
            timeframe = %request.timeframe,
            resolution = %request.timeframe.resolution(),
            bars = windowed.len(),
            dropped = total - windowed.len(),
            "Loaded price history"
        );
        Ok(windowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{Ticker, Timeframe};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tradepal-feed-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn request(timeframe: Timeframe) -> AnalysisRequest {
        AnalysisRequest::new(Ticker::parse("volv-b").unwrap(), timeframe)
    }

    #[test]
    fn path_uses_ticker_and_timeframe_label() {
        let source = FileSource::new("/data");
        let path = source.path_for(&request(Timeframe::ThreeMonths));
        assert_eq!(path, PathBuf::from("/data/VOLV-B.ST_3M.json"));
    }

    #[test]
    fn missing_file_gives_empty_series() {
        let source = FileSource::new(scratch_dir("missing"));
        assert!(source.fetch(&request(Timeframe::OneDay)).unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = scratch_dir("corrupt");
        let req = request(Timeframe::OneDay);
        let source = FileSource::new(&dir);
        std::fs::write(source.path_for(&req), "{ not json").unwrap();
        assert!(matches!(source.fetch(&req), Err(common::Error::Json(_))));
    }

    #[test]
    fn unreadable_path_is_an_error() {
        // A directory where the payload file should be is not "no data".
        let dir = scratch_dir("isdir");
        let req = request(Timeframe::OneDay);
        let source = FileSource::new(&dir);
        std::fs::create_dir_all(source.path_for(&req)).unwrap();
        assert!(matches!(source.fetch(&req), Err(common::Error::Io(_))));
    }

    #[test]
    fn bars_older_than_lookback_are_dropped() {
        let dir = scratch_dir("window");
        // Daily bars over 10 days; 1W keeps the last 8 (anchor minus 7 days inclusive).
        let day = 86_400;
        let t: Vec<i64> = (0..10).map(|i| 1_700_000_000 + i * day).collect();
        let prices: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let payload = CandlePayload {
            s: "ok".into(),
            t,
            o: prices.clone(),
            h: prices.iter().map(|p| p + 1.0).collect(),
            l: prices.iter().map(|p| p - 1.0).collect(),
            c: prices.clone(),
            v: vec![1000.0; 10],
        };
        let req = request(Timeframe::OneWeek);
        let source = FileSource::new(&dir);
        std::fs::write(source.path_for(&req), serde_json::to_string(&payload).unwrap()).unwrap();

        let bars = source.fetch(&req).unwrap();
        assert_eq!(bars.len(), 8);
        assert_eq!(bars[0].close, 102.0);
        assert_eq!(bars.last().unwrap().close, 109.0);
    }

    #[test]
    fn no_data_payload_gives_empty_series() {
        let dir = scratch_dir("nodata");
        let req = request(Timeframe::OneYear);
        let source = FileSource::new(&dir);
        std::fs::write(source.path_for(&req), r#"{"s":"no_data"}"#).unwrap();
        assert!(source.fetch(&req).unwrap().is_empty());
    }
}
