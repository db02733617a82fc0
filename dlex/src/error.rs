//! Error handling module for the dlex CLI.
//!
//! The scanner itself never fails; everything here is a driver concern:
//! reading sources, parsing configuration, writing output.

use thiserror::Error;

/// Main error type for the dlex CLI application.
#[derive(Error, Debug)]
pub enum DlexError {
    /// Configuration could not be found, parsed or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A source or configuration file could not be read or written.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// A command-line value was rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DlexError.
pub type Result<T> = std::result::Result<T, DlexError>;
