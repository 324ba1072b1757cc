// Data loading and snapshot caching
pub mod bars;
pub mod loader;
pub mod observations;

// Re-export commonly used types
pub use bars::snapshot_version::write_snapshot_async;
pub use bars::{CreateBarSeries, get_bar_series_async};
pub use loader::{fetch_bar_series, fetch_many};
pub use observations::{JsonObservationFile, ObservationSource};
