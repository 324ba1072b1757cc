use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Category;

/// Outcome of an actual-vs-forecast comparison
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum Verdict {
    Better,
    Worse,
    Same,
    // Either side missing or unparsable
    #[default]
    Unknown,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Better => write!(f, "Better"),
            Verdict::Worse => write!(f, "Worse"),
            Verdict::Same => write!(f, "Same"),
            // Rendered as an empty cell, never a guess
            Verdict::Unknown => Ok(()),
        }
    }
}

/// Headline row for one tracked indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSummaryRow {
    pub indicator: String,
    pub category: Category,
    pub report_date: NaiveDate,
    pub report_date_label: String,
    pub period_label: Option<String>,
    pub verdict: Verdict,
    pub latest_actual: Option<f64>,
    pub latest_forecast: Option<f64>,
    pub latest_previous: Option<f64>,
    /// Raw forecast token as scraped, unit included
    pub forecast_raw: Option<String>,
    /// Latest actual first; always `history_depth` long, `None` marking an absent slot
    pub history: Vec<Option<f64>>,
}

/// One dated, parsed observation, for per-indicator charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub report_date: NaiveDate,
    pub period_label: Option<String>,
    pub actual: Option<f64>,
    pub forecast: Option<f64>,
    pub previous: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    pub indicator: String,
    pub category: Category,
    /// Newest first
    pub points: Vec<SeriesPoint>,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SkipReason {
    UnknownIndicator,
    UnparsableDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedObservation {
    pub indicator: String,
    pub report_date: String,
    pub reason: SkipReason,
}

/// Result of one summary run. Rows and series follow the indicator table's order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSummary {
    pub rows: Vec<IndicatorSummaryRow>,
    pub series: Vec<IndicatorSeries>,
    pub skipped: Vec<SkippedObservation>,
}

impl IndicatorSummary {
    pub fn row(&self, indicator: &str) -> Option<&IndicatorSummaryRow> {
        self.rows.iter().find(|row| row.indicator == indicator)
    }

    pub fn series_for(&self, indicator: &str) -> Option<&IndicatorSeries> {
        self.series.iter().find(|series| series.indicator == indicator)
    }

    pub fn skipped_count(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|s| s.reason == reason).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_verdict_renders_empty() {
        assert_eq!(Verdict::Unknown.to_string(), "");
        assert_eq!(Verdict::Better.to_string(), "Better");
        assert_eq!(Verdict::default(), Verdict::Unknown);
    }
}
