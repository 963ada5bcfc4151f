use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use common::{Error, PriceBar, Result};

/// Candle response from the Finnhub `stock/candle` endpoint, as saved by the
/// fetch collaborator. Arrays are parallel and ordered oldest first.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CandlePayload {
    /// `"ok"` or `"no_data"`.
    pub s: String,
    /// Unix timestamps in seconds.
    #[serde(default)]
    pub t: Vec<i64>,
    #[serde(default)]
    pub o: Vec<f64>,
    #[serde(default)]
    pub h: Vec<f64>,
    #[serde(default)]
    pub l: Vec<f64>,
    #[serde(default)]
    pub c: Vec<f64>,
    #[serde(default)]
    pub v: Vec<f64>,
}

impl CandlePayload {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Convert the parallel arrays into bars.
    pub fn into_bars(self) -> Result<Vec<PriceBar>> {
        match self.s.as_str() {
            "ok" => {}
            "no_data" => return Ok(Vec::new()),
            other => {
                return Err(Error::Feed(format!("unexpected candle status '{other}'")));
            }
        }

        let n = self.t.len();
        let lengths = [self.o.len(), self.h.len(), self.l.len(), self.c.len(), self.v.len()];
        if lengths.iter().any(|&len| len != n) {
            return Err(Error::Feed(format!(
                "candle arrays have mismatched lengths: t={n}, o/h/l/c/v={lengths:?}"
            )));
        }

        (0..n)
            .map(|i| {
                let timestamp = Utc
                    .timestamp_opt(self.t[i], 0)
                    .single()
                    .ok_or_else(|| Error::Feed(format!("invalid timestamp {}", self.t[i])))?;
                Ok(PriceBar {
                    timestamp,
                    open: self.o[i],
                    high: self.h[i],
                    low: self.l[i],
                    close: self.c[i],
                    volume: self.v[i],
                })
            })
            .collect()
    }
}
