use thiserror::Error;

/// Hard failures surfaced by the level and volume-profile engines.
///
/// Everything at observation level (bad numbers, bad dates, unknown indicators) is
/// recovered locally by the summary builder and never shows up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl EngineError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
