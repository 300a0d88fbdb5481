//! Error types for the debug facility

use std::io;
use thiserror::Error;

/// Result type alias for debug operations
pub type Result<T> = std::result::Result<T, DebugError>;

/// Errors that can occur in the debug facility
#[derive(Error, Debug)]
pub enum DebugError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Matcher compilation error
    #[error("Invalid pattern: {0}")]
    Pattern(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
