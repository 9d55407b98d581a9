//! Error types for catalog scaffolding operations.
//!
//! Library code returns [`Error`] through the [`Result`] alias; the CLI
//! maps errors onto process exit codes via
//! [`crate::cli::ExitCode::from_error`].

use std::path::PathBuf;

use thiserror::Error;

/// Underlying cause of a data-source failure.
///
/// Catalog loading can fail through either `std::io::Error` or
/// `serde_json::Error`; the [`Error::DataSource`] variant stores whichever
/// occurred.
pub type DataSourceCause = Box<dyn std::error::Error + Send + Sync>;

/// Core error type for all skilltree operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Catalog file missing, unreadable, or malformed
    #[error("Invalid skill catalog {path:?}: {reason}")]
    DataSource {
        /// Catalog file that failed to load
        path: PathBuf,
        /// What went wrong while loading or decoding
        reason: String,
        /// Underlying I/O or JSON error, when one exists
        #[source]
        source: Option<DataSourceCause>,
    },

    /// Directory creation or file write failed
    #[error("File I/O error for {path:?}")]
    Io {
        /// Path that caused the error
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Scaffold configuration rejected by validation
    #[error("Invalid configuration: {message}")]
    Config {
        /// Details about the rejected value
        message: String,
    },

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Returns `true` if the error came from loading or decoding the
    /// catalog file.
    ///
    /// Data-source errors are always fatal: they occur before any output
    /// is produced, so a run that fails here leaves the destination
    /// untouched.
    #[must_use]
    pub const fn is_data_source(&self) -> bool {
        matches!(self, Self::DataSource { .. })
    }

    /// Returns `true` if the error is a filesystem failure.
    ///
    /// I/O errors are per-record: whether they abort the run or are
    /// collected and skipped is decided by the configured failure policy.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if the error was raised by configuration validation.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Returns `true` if the error describes invalid caller input.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result type alias for skilltree operations.
pub type Result<T> = std::result::Result<T, Error>;
