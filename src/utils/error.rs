//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised when a series or measurement would break a model invariant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeasurementError {
    #[error("series {0} has no user tag")]
    MissingUser(String),

    #[error("measurement for series {0} has no fields")]
    NoFields(String),
}

/// Errors that can occur during batch file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Invalid measurement in batch: {0}")]
    InvalidMeasurement(#[from] MeasurementError),
}
