use thiserror::Error;

/// Rejected construction-time configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("point count {0} is below the minimum of 3")]
    TooFewPoints(usize),
    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidMagnitude { field: &'static str, value: f64 },
    #[error("smoothing factor must lie in (0, 1], got {0}")]
    SmoothingOutOfRange(f64),
}

/// Reasons a widget instance could not attach to the page and stays inert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("no document available")]
    NoDocument,
    #[error("required element `{0}` not found")]
    MissingElement(String),
}
