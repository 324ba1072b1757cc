// Plain-text rendering of reports for the terminal
pub mod config;
pub mod level_view;
pub mod summary_view;
pub mod utils;

pub use level_view::{render_histogram, render_level_report, render_scan_line};
pub use summary_view::render_summary;
