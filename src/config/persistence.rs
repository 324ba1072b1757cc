//! File persistence and serialization configuration

use std::path::{Path, PathBuf};

pub struct SnapshotConfig {
    /// Directory (relative to the data directory) holding bincode snapshots
    pub directory: &'static str,
    /// Base filename for snapshot files (without ticker or extension)
    pub filename_prefix: &'static str,
    /// Current version of the snapshot serialization format
    pub version: f64,
    /// Snapshots older than this are ignored and the JSON source is read instead
    pub max_age_secs: i64,
}

pub struct PersistenceConfig {
    /// Default directory holding `<TICKER>.json` bar files
    pub bars_directory: &'static str,
    pub snapshot: SnapshotConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    bars_directory: "bar_data",
    snapshot: SnapshotConfig {
        directory: "snapshots",
        filename_prefix: "bars",
        version: 1.0,
        max_age_secs: 60 * 60 * 12,
    },
};

/// Generate ticker-specific snapshot filename
/// Example: "bars_AAPL_v1.bin" or "bars_0700.HK_v1.bin"
pub fn snapshot_filename(ticker: &str) -> String {
    format!(
        "{}_{}_v{}.bin",
        PERSISTENCE.snapshot.filename_prefix,
        ticker.to_uppercase(),
        PERSISTENCE.snapshot.version
    )
}

pub fn snapshot_path(data_dir: &Path, ticker: &str) -> PathBuf {
    data_dir
        .join(PERSISTENCE.snapshot.directory)
        .join(snapshot_filename(ticker))
}
