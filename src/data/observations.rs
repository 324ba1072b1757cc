use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::domain::IndicatorObservation;

#[async_trait]
pub trait ObservationSource: Send + Sync {
    /// Raw, unordered observations. Validation is left to the summary builder.
    async fn load_observations(&self) -> Result<Vec<IndicatorObservation>>;

    fn signature(&self) -> &'static str;
}

/// A JSON array of observations, e.g. the scraper's dump of calendar rows.
pub struct JsonObservationFile {
    pub path: PathBuf,
}

#[async_trait]
impl ObservationSource for JsonObservationFile {
    fn signature(&self) -> &'static str {
        "JSON Observations"
    }

    async fn load_observations(&self) -> Result<Vec<IndicatorObservation>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .context(format!("Failed to read observations: {:?}", self.path))?;
        let observations: Vec<IndicatorObservation> = serde_json::from_str(&raw)
            .context(format!("Failed to parse observations: {:?}", self.path))?;
        log::info!(
            "Loaded {} observations from {:?}",
            observations.len(),
            self.path
        );
        Ok(observations)
    }
}
