pub mod file;
pub mod finnhub;

pub use file::FileSource;
pub use finnhub::CandlePayload;

use tracing::warn;

use common::{Error, PriceBar, Result};

/// Check a series before handing it to the signal pipeline.
///
/// Timestamps must be strictly increasing. Bars outside their own OHLC
/// envelope are kept and only reported.
pub fn validate_series(bars: &[PriceBar]) -> Result<()> {
    if let Some(i) = bars
        .windows(2)
        .position(|w| w[1].timestamp <= w[0].timestamp)
    {
        return Err(Error::Feed(format!(
            "bar timestamps not strictly increasing at index {}: {} then {}",
            i + 1,
            bars[i].timestamp,
            bars[i + 1].timestamp
        )));
    }

    let inconsistent = bars.iter().filter(|b| !b.is_consistent()).count();
    if inconsistent > 0 {
        warn!(
            inconsistent,
            total = bars.len(),
            "Bars outside their high/low range; keeping them"
        );
    }
    Ok(())
}
