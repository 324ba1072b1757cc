// Domain types and value objects
pub mod observation;
pub mod price_bar;
pub mod price_level;
pub mod ticker;

// Re-export commonly used types
pub use observation::IndicatorObservation;
pub use price_bar::PriceBar;
pub use price_level::{LevelKind, PriceLevel, PriceLevels};
pub use ticker::format_ticker;
