use crate::{AnalysisRequest, PriceBar, Result};

/// Abstraction over wherever price history comes from.
///
/// Implementations hand back bars already ordered by timestamp and limited
/// to the request's timeframe. An empty vector means "no data"; the signal
/// pipeline does nothing with it.
pub trait BarSource {
    fn fetch(&self, request: &AnalysisRequest) -> Result<Vec<PriceBar>>;
}
