//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for ShiftPulse
///
/// Computation inside the core never produces these for data-shape reasons;
/// they surface from the boundaries (configuration, file sources, CLI input).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ShiftPulseError {
    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system failure
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed file contents
    #[error("Parse error: {0}")]
    Parse(String),

    /// Bad input value or row
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Missing file or catalog row
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unexpected failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShiftPulseError {
    /// Build an `InvalidInput` error pinned to a 1-based input row.
    pub fn invalid_row(row: usize, message: impl std::fmt::Display) -> Self {
        Self::InvalidInput(format!("row {row}: {message}"))
    }
}

/// Result type alias for ShiftPulse operations
pub type Result<T> = std::result::Result<T, ShiftPulseError>;
