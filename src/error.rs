//! Error types for the textmetrics library.
//!
//! Scoring itself is total: malformed or absent text is a degenerate but valid
//! input and never produces an error. The [`TextMetricsError`] enum covers the
//! remaining failure modes: configuration loading, command line I/O and buffer
//! allocation at the C boundary.
//!
//! # Examples
//!
//! ```
//! use textmetrics::error::{TextMetricsError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextMetricsError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::collections::TryReserveError;
use std::ffi::NulError;
use std::io;

use thiserror::Error;

/// The main error type for textmetrics operations.
#[derive(Error, Debug)]
pub enum TextMetricsError {
    /// I/O errors (reading input files, stdin, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A buffer handed to the caller could not be allocated
    #[error("Allocation error: {0}")]
    Allocation(String),

    /// Engine configuration is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An argument was rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error that already carries its own context, such as a file path
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TextMetricsError.
pub type Result<T> = std::result::Result<T, TextMetricsError>;

impl TextMetricsError {
    /// Create a new allocation error.
    pub fn allocation<S: Into<String>>(msg: S) -> Self {
        TextMetricsError::Allocation(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        TextMetricsError::InvalidConfig(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TextMetricsError::InvalidArgument(msg.into())
    }
}

impl From<TryReserveError> for TextMetricsError {
    fn from(err: TryReserveError) -> Self {
        TextMetricsError::Allocation(err.to_string())
    }
}

impl From<NulError> for TextMetricsError {
    fn from(err: NulError) -> Self {
        TextMetricsError::InvalidArgument(format!(
            "interior NUL byte at position {}",
            err.nul_position()
        ))
    }
}
