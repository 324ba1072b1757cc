use anyhow::{Result, bail};
use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::PriceBar;

// ============================================================================
// OhlcvTimeSeries: Raw bar data for one ticker, stored column-wise
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OhlcvTimeSeries {
    pub ticker: String,
    pub timestamps_ms: Vec<i64>,

    // Prices
    pub open_prices: Vec<f64>,
    pub high_prices: Vec<f64>,
    pub low_prices: Vec<f64>,
    pub close_prices: Vec<f64>,

    // Volumes
    pub volumes: Vec<f64>,
}

impl OhlcvTimeSeries {
    /// Builds a series from bars already in time order.
    pub fn from_bars(ticker: &str, bars: &[PriceBar]) -> Self {
        let mut series = OhlcvTimeSeries {
            ticker: ticker.to_string(),
            ..Default::default()
        };
        for bar in bars {
            series.timestamps_ms.push(bar.timestamp_ms);
            series.open_prices.push(bar.open);
            series.high_prices.push(bar.high);
            series.low_prices.push(bar.low);
            series.close_prices.push(bar.close);
            series.volumes.push(bar.volume);
        }
        series
    }

    pub fn get_bar(&self, idx: usize) -> PriceBar {
        PriceBar::new(
            self.timestamps_ms[idx],
            self.open_prices[idx],
            self.high_prices[idx],
            self.low_prices[idx],
            self.close_prices[idx],
            self.volumes[idx],
        )
    }

    pub fn bars(&self) -> Vec<PriceBar> {
        (0..self.len()).map(|idx| self.get_bar(idx)).collect()
    }

    pub fn len(&self) -> usize {
        self.close_prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close_prices.is_empty()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.close_prices.last().copied()
    }

    pub fn last_timestamp_ms(&self) -> Option<i64> {
        self.timestamps_ms.last().copied()
    }

    /// Checks the columns line up and timestamps never go backwards.
    pub fn validate(&self) -> Result<()> {
        let n = self.timestamps_ms.len();
        let columns = [
            ("open", self.open_prices.len()),
            ("high", self.high_prices.len()),
            ("low", self.low_prices.len()),
            ("close", self.close_prices.len()),
            ("volume", self.volumes.len()),
        ];
        for (name, len) in columns {
            if len != n {
                bail!(
                    "{}: column '{}' has {} values but there are {} timestamps",
                    self.ticker,
                    name,
                    len,
                    n
                );
            }
        }
        if let Some(idx) = self.timestamps_ms.windows(2).position(|w| w[1] < w[0]) {
            bail!(
                "{}: timestamps out of order at index {}",
                self.ticker,
                idx + 1
            );
        }
        Ok(())
    }

    pub fn get_indices_most_recent(
        &self,
        most_recent_intervals: MostRecentIntervals,
    ) -> (usize, usize) {
        let total_intervals = self.len();
        let start_index = match most_recent_intervals {
            MostRecentIntervals::Count(n) => total_intervals.saturating_sub(n),
            MostRecentIntervals::Duration(duration) => match self.last_timestamp_ms() {
                Some(last_ts) => {
                    let cutoff = last_ts - duration.num_milliseconds();
                    // Timestamps are sorted, so the first bar at/after the cutoff starts the window
                    self.timestamps_ms.partition_point(|&ts| ts < cutoff)
                }
                None => 0,
            },
        };
        (start_index, total_intervals)
    }

    /// Copy of the bars in `[start_idx, end_idx)`.
    pub fn slice(&self, start_idx: usize, end_idx: usize) -> OhlcvTimeSeries {
        let end_idx = end_idx.min(self.len());
        let start_idx = start_idx.min(end_idx);
        OhlcvTimeSeries {
            ticker: self.ticker.clone(),
            timestamps_ms: self.timestamps_ms[start_idx..end_idx].to_vec(),
            open_prices: self.open_prices[start_idx..end_idx].to_vec(),
            high_prices: self.high_prices[start_idx..end_idx].to_vec(),
            low_prices: self.low_prices[start_idx..end_idx].to_vec(),
            close_prices: self.close_prices[start_idx..end_idx].to_vec(),
            volumes: self.volumes[start_idx..end_idx].to_vec(),
        }
    }

    pub fn most_recent(&self, most_recent_intervals: MostRecentIntervals) -> OhlcvTimeSeries {
        let (start, end) = self.get_indices_most_recent(most_recent_intervals);
        self.slice(start, end)
    }
}

// ============================================================================
// Helper types
// ============================================================================

pub enum MostRecentIntervals {
    Count(usize),
    Duration(Duration),
}
