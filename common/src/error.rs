//! Error types for the poolmap pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for pipeline stages.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, grouping or rendering endpoints.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file does not exist.
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The CSV header row lacks a required column.
    #[error("Missing required CSV field '{field}'")]
    MissingField { field: String },

    /// A data row could not be interpreted.
    #[error("Malformed record on line {line}: {reason}")]
    Format { line: u64, reason: String },

    /// An address is not a dotted-quad IPv4 address.
    #[error("Invalid IPv4 address '{address}'")]
    InvalidAddress { address: String },

    /// A port is not a number in `0..=65535`.
    #[error("Invalid port '{port}' for {address}")]
    InvalidPort { address: String, port: String },

    /// CSV structure error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn format(line: u64, reason: impl Into<String>) -> Self {
        Self::Format {
            line,
            reason: reason.into(),
        }
    }
}
