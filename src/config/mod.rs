//! Configuration module for the level-scope application.

pub mod analysis;
pub mod indicators;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;

// Re-export commonly used items
pub use analysis::ANALYSIS;
pub use indicators::{Category, IndicatorSpec, IndicatorTable};
pub use persistence::{PERSISTENCE, snapshot_filename, snapshot_path};
