use serde::{Deserialize, Serialize};

/// One row of an indicator's release history, exactly as scraped.
///
/// Values stay raw tokens ("254K", "3.1%", "-") until the summary builder parses
/// them, so the unit and any placeholder survive for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorObservation {
    pub indicator: String,
    /// Release date label, possibly carrying a period tag: "Mar 08, 2024 (Feb)"
    pub report_date: String,
    #[serde(default)]
    pub period_label: Option<String>,
    #[serde(default)]
    pub actual: Option<String>,
    #[serde(default)]
    pub forecast: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

impl IndicatorObservation {
    pub fn new(
        indicator: &str,
        report_date: &str,
        actual: Option<&str>,
        forecast: Option<&str>,
        previous: Option<&str>,
    ) -> Self {
        Self {
            indicator: indicator.to_string(),
            report_date: report_date.to_string(),
            period_label: None,
            actual: actual.map(str::to_string),
            forecast: forecast.map(str::to_string),
            previous: previous.map(str::to_string),
        }
    }

    pub fn with_period_label(mut self, label: &str) -> Self {
        self.period_label = Some(label.to_string());
        self
    }
}
