// Level and indicator engines. Pure functions over in-memory data.
pub mod batch;
pub mod indicator_summary;
pub mod levels;
pub mod magnitude;
pub mod volume_profile;

// Re-export commonly used items
pub use batch::analyze_all;
pub use indicator_summary::build_summary;
pub use levels::{EmaLevel, LevelInputs, LevelReport, compute_ema, compute_price_levels};
pub use magnitude::{compare_to_forecast, format_magnitude, parse_magnitude};
pub use volume_profile::compute_volume_profile;
