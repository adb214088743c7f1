use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the widget grid crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced by the configuration and serialization edges of the crate.
///
/// Placement itself never fails; inputs are clamped instead.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid grid configuration: {0}")]
    InvalidGrid(String),
    #[error("widget json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
}
