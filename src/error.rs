//! Error types for the court and its host

use thiserror::Error;

/// Everything that can go wrong outside of normal play
#[derive(Debug, Error)]
pub enum CourtError {
    /// A direction vector with zero length was normalized
    #[error("cannot normalize a zero-length direction vector")]
    ZeroLengthDirection,

    /// Settings failed validation
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings JSON could not be parsed
    #[error("settings parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file could not be read
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),

    /// The host has no drawing surface to render into
    #[error("no drawing surface: {0}")]
    MissingSurface(String),
}
