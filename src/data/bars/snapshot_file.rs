use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::OhlcvTimeSeries;

/// Bincode snapshot of one ticker's bars.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SnapshotFile {
    pub version: f64,
    pub timestamp_ms: i64,
    pub series: OhlcvTimeSeries,
}

impl SnapshotFile {
    pub fn new(series: OhlcvTimeSeries, version: f64) -> Self {
        Self {
            version,
            timestamp_ms: Utc::now().timestamp_millis(),
            series,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open snapshot: {:?}", path))?;
        let mut reader = BufReader::new(file);
        let snapshot = bincode::deserialize_from(&mut reader)
            .context(format!("Failed to deserialize snapshot: {:?}", path))?;
        Ok(snapshot)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, self)
            .context(format!("Failed to serialize snapshot to: {}", path.display()))
    }
}
