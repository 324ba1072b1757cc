use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use async_trait::async_trait;

use crate::data::bars::CreateBarSeries;
use crate::domain::PriceBar;
use crate::models::OhlcvTimeSeries;

pub const JSON_SIGNATURE: &str = "JSON File";

pub fn bars_json_path(data_dir: &Path, ticker: &str) -> PathBuf {
    data_dir.join(format!("{}.json", ticker))
}

/// Reads `<data_dir>/<TICKER>.json`, a JSON array of bars as written by the fetcher.
pub struct JsonVersion {
    pub data_dir: PathBuf,
}

#[async_trait]
impl CreateBarSeries for JsonVersion {
    fn signature(&self) -> &'static str {
        JSON_SIGNATURE
    }

    async fn create_bar_series(&self, ticker: &str) -> Result<OhlcvTimeSeries> {
        let full_path = bars_json_path(&self.data_dir, ticker);
        let raw = tokio::fs::read_to_string(&full_path)
            .await
            .context(format!("Failed to read bars file: {:?}", full_path))?;
        parse_bars_json(ticker, &raw).context(format!("Bad bars file: {:?}", full_path))
    }
}

/// Bars may arrive in any order; they are sorted by timestamp before use.
pub fn parse_bars_json(ticker: &str, raw: &str) -> Result<OhlcvTimeSeries> {
    let mut bars: Vec<PriceBar> = serde_json::from_str(raw)?;
    if bars.is_empty() {
        bail!("{}: bars file holds no bars", ticker);
    }
    bars.sort_by_key(|bar| bar.timestamp_ms);

    let series = OhlcvTimeSeries::from_bars(ticker, &bars);
    series.validate()?;
    Ok(series)
}
