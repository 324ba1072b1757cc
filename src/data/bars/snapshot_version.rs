use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use async_trait::async_trait;

use crate::config::{DEBUG_FLAGS, PERSISTENCE, snapshot_path};
use crate::data::bars::json_version::JSON_SIGNATURE;
use crate::data::bars::{CreateBarSeries, snapshot_file::SnapshotFile};
use crate::models::OhlcvTimeSeries;
use crate::utils::time_utils::how_many_seconds_ago;

/// Loads the ticker's snapshot and checks version, ticker and age. The loaded
/// snapshot is handed back so callers don't read the file twice.
pub fn check_snapshot_validity(
    data_dir: &Path,
    ticker: &str,
    recency_required_secs: i64,
    version_required: f64,
) -> Result<SnapshotFile> {
    let full_path = snapshot_path(data_dir, ticker);

    if DEBUG_FLAGS.print_serde {
        log::info!("Checking validity of snapshot at {:?}...", full_path);
    }
    let snapshot = SnapshotFile::load_from_path(&full_path)?;

    if snapshot.version != version_required {
        bail!(
            "Snapshot version mismatch: file v{} vs required v{}",
            snapshot.version,
            version_required
        );
    }

    if snapshot.series.ticker != ticker {
        bail!(
            "Snapshot ticker mismatch: file holds {}, expected {}",
            snapshot.series.ticker,
            ticker
        );
    }

    let seconds_ago = how_many_seconds_ago(snapshot.timestamp_ms);
    if seconds_ago > recency_required_secs {
        bail!(
            "Snapshot too old: created {} seconds ago (limit: {} seconds)",
            seconds_ago,
            recency_required_secs
        );
    }

    if DEBUG_FLAGS.print_serde {
        log::info!(
            "Snapshot valid: v{}, {}s old (limit {}s), {} bars",
            snapshot.version,
            seconds_ago,
            recency_required_secs,
            snapshot.series.len()
        );
    }

    Ok(snapshot)
}

/// Writes `series` as a bincode snapshot. Only series freshly read from JSON are
/// written; re-writing a snapshot would just reset its age.
pub fn write_snapshot_locally(
    data_dir: &Path,
    bars_signature: &'static str,
    series: &OhlcvTimeSeries,
) -> Result<()> {
    if bars_signature != JSON_SIGNATURE {
        if DEBUG_FLAGS.print_serde {
            log::info!("Skipping snapshot write (bars came from {})", bars_signature);
        }
        return Ok(());
    }

    let full_path = snapshot_path(data_dir, &series.ticker);

    let start_time = DEBUG_FLAGS.print_serde.then(|| {
        log::info!("Writing snapshot to disk: {:?}...", full_path);
        std::time::Instant::now()
    });

    let snapshot = SnapshotFile::new(series.clone(), PERSISTENCE.snapshot.version);
    snapshot.save_to_path(&full_path)?;

    if let Some(start) = start_time {
        let file_size = std::fs::metadata(&full_path)?.len();
        log::info!(
            "Snapshot written: {:?} ({:.1} KB in {:.3}s)",
            full_path,
            file_size as f64 / 1024.0,
            start.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

/// Async wrapper for write_snapshot_locally
pub async fn write_snapshot_async(
    data_dir: PathBuf,
    bars_signature: &'static str,
    series: OhlcvTimeSeries,
) -> Result<()> {
    tokio::task::spawn_blocking(move || write_snapshot_locally(&data_dir, bars_signature, &series))
        .await
        .context("Snapshot write task panicked")?
}

pub struct SnapshotVersion {
    pub data_dir: PathBuf,
    /// Series already read by `check_snapshot_validity`; skips the disk read
    pub preloaded: Option<OhlcvTimeSeries>,
}

#[async_trait]
impl CreateBarSeries for SnapshotVersion {
    fn signature(&self) -> &'static str {
        "Local Snapshot"
    }

    async fn create_bar_series(&self, ticker: &str) -> Result<OhlcvTimeSeries> {
        if let Some(series) = &self.preloaded
            && series.ticker == ticker
        {
            series.validate()?;
            return Ok(series.clone());
        }

        let full_path = snapshot_path(&self.data_dir, ticker);

        let start_time = DEBUG_FLAGS.print_serde.then(|| {
            log::info!("Reading snapshot from: {:?}...", full_path);
            std::time::Instant::now()
        });

        let snapshot = tokio::task::spawn_blocking(move || SnapshotFile::load_from_path(&full_path))
            .await
            .context("Deserialization task panicked")?
            .context("Failed to load snapshot")?;

        if let Some(start) = start_time {
            log::info!(
                "Snapshot loaded: {} bars in {:.3}s",
                snapshot.series.len(),
                start.elapsed().as_secs_f64()
            );
        }

        snapshot.series.validate()?;
        Ok(snapshot.series)
    }
}
