//! CLI-specific types.
//!
//! Strong types for CLI concepts, keeping exit-code semantics out of the
//! binary crate so they can be tested alongside the error taxonomy.
//!
//! # Examples
//!
//! ```
//! use skilltree_core::cli::ExitCode;
//!
//! let code = ExitCode::SUCCESS;
//! assert_eq!(code.as_i32(), 0);
//! assert!(code.is_success());
//! ```

use std::fmt;

use crate::error::Error;

/// CLI exit code with semantic meaning.
///
/// Follows Unix conventions: success is 0, errors are non-zero with
/// specific meanings.
///
/// # Examples
///
/// ```
/// use skilltree_core::cli::ExitCode;
///
/// let code = ExitCode::from_i32(1);
/// assert!(!code.is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Successful execution (exit code 0).
    pub const SUCCESS: Self = Self(0);

    /// General or I/O error (exit code 1).
    pub const ERROR: Self = Self(1);

    /// Invalid arguments or configuration (exit code 2).
    pub const INVALID_INPUT: Self = Self(2);

    /// Catalog data source missing or malformed (exit code 3).
    pub const DATA_SOURCE: Self = Self(3);

    /// Creates an exit code from an integer value.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        Self(code)
    }

    /// Maps a skilltree error onto its exit code.
    ///
    /// # Examples
    ///
    /// ```
    /// use skilltree_core::cli::ExitCode;
    /// use skilltree_core::Error;
    ///
    /// let error = Error::InvalidInput("bad category path".to_string());
    /// assert_eq!(ExitCode::from_error(&error), ExitCode::INVALID_INPUT);
    /// ```
    #[must_use]
    pub const fn from_error(error: &Error) -> Self {
        match error {
            Error::DataSource { .. } => Self::DATA_SOURCE,
            Error::Io { .. } => Self::ERROR,
            Error::Config { .. } | Error::InvalidInput(_) => Self::INVALID_INPUT,
        }
    }

    /// Returns the exit code as an integer.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Checks if the exit code represents success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
