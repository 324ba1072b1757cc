pub mod json_version;
pub mod snapshot_file;
pub mod snapshot_version;

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use crate::models::OhlcvTimeSeries;

#[async_trait]
pub trait CreateBarSeries: Send + Sync {
    // Either produce the series for `ticker` OR return an anyhow::Error
    async fn create_bar_series(&self, ticker: &str) -> Result<OhlcvTimeSeries>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Tries each provider in order; the first one that produces a series wins.
pub async fn get_bar_series_async(
    implementations: &[Box<dyn CreateBarSeries>],
    ticker: &str,
) -> Result<(OhlcvTimeSeries, &'static str)> {
    for imp in implementations {
        match imp.create_bar_series(ticker).await {
            Ok(series) => return Ok((series, imp.signature())),
            Err(e) => {
                log::info!("{}: {} could not provide bars: {:#}", ticker, imp.signature(), e);
                // Continue to the next implementation
            }
        }
    }
    Err(anyhow!("{}: all bar sources failed", ticker))
}
