//! Error types for crmdesk.
//!
//! This module defines all error types used throughout the crmdesk crate,
//! separating storage failures, rejected user input and caller mistakes.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

/// The main error type for crmdesk operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// The customer file could not be read or parsed.
    #[error("failed to read customer file {path}: {source}")]
    CsvRead {
        /// Path to the customer file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: csv::Error,
    },

    /// The customer file could not be written.
    #[error("failed to write customer file {path}: {source}")]
    CsvWrite {
        /// Path to the customer file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: csv::Error,
    },

    /// The customer file does not start with the expected header row.
    #[error("unexpected header in customer file {path}: found '{found}'")]
    UnexpectedHeader {
        /// Path to the customer file.
        path: PathBuf,
        /// The header row that was found, comma-joined.
        found: String,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Input Errors ===
    /// User input was rejected; the table was left unchanged.
    #[error("rejected input: {0}")]
    Validation(#[from] ValidationError),

    /// A row position outside the current table was used.
    #[error("row {row} is out of range (table has {len} rows)")]
    RowOutOfRange {
        /// The requested row position.
        row: usize,
        /// Number of rows in the table at the time of the call.
        len: usize,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for crmdesk operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a row out of range error.
    #[must_use]
    pub fn row_out_of_range(row: usize, len: usize) -> Self {
        Self::RowOutOfRange { row, len }
    }

    /// Check if this error is a rejected user input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error is a stale or invalid row position.
    #[must_use]
    pub fn is_row_out_of_range(&self) -> bool {
        matches!(self, Self::RowOutOfRange { .. })
    }

    /// Check if this error came from reading or writing the customer file.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::CsvRead { .. }
                | Self::CsvWrite { .. }
                | Self::UnexpectedHeader { .. }
                | Self::DirectoryCreate { .. }
                | Self::Io(_)
        )
    }
}
