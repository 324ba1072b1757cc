// Domain models for level and indicator analysis
// These modules contain pure business logic independent of loading/rendering

pub mod summary;
pub mod timeseries;
pub mod volume_profile;

// Re-export key types for convenience
pub use summary::{
    IndicatorSeries, IndicatorSummary, IndicatorSummaryRow, SeriesPoint, SkipReason,
    SkippedObservation, Verdict,
};
pub use timeseries::{MostRecentIntervals, OhlcvTimeSeries};
pub use volume_profile::VolumeProfile;
