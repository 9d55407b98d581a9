//! Configuration for scaffold runs.
//!
//! Catalog path, destination, category, and the excluded field are explicit
//! [`ScaffoldConfig`] values passed into the pipeline entry points rather
//! than globals. The compiled-in `DEFAULT_*` constants make a zero-flag run
//! scaffold the shipped catalog.
//!
//! # Examples
//!
//! ```
//! use skilltree_core::{FailurePolicy, ScaffoldConfig};
//!
//! // Use default configuration
//! let config = ScaffoldConfig::default();
//! assert_eq!(config.excluded_field, "repository_url");
//! assert_eq!(config.failure_policy, FailurePolicy::Abort);
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::types::CategoryPath;

/// Default catalog file, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "data/skills-detailed-technical-javascript.json";

/// Default destination directory for generated skill folders.
pub const DEFAULT_DESTINATION: &str = "javascript";

/// Default dotted key path selecting the record array in the catalog.
pub const DEFAULT_CATEGORY_PATH: &str = "skills.detailed.technical.javaScript";

/// Default metadata field stripped from every record before output.
pub const DEFAULT_EXCLUDED_FIELD: &str = "repository_url";

/// What to do when a single record fails to scaffold.
///
/// Catalog loading failures are always fatal; this policy only governs
/// per-record directory and file errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing record and return its error.
    Abort,
    /// Log the failure, record it in the run report, and keep going.
    Continue,
}

impl FailurePolicy {
    /// Returns the canonical lowercase name of the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Continue => "continue",
        }
    }
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self::Abort
    }
}

impl FromStr for FailurePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "continue" => Ok(Self::Continue),
            _ => Err(Error::InvalidInput(format!(
                "Unknown failure policy: {s} (expected 'abort' or 'continue')"
            ))),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration for one scaffold run.
///
/// # Examples
///
/// ```
/// use skilltree_core::{CategoryPath, FailurePolicy, ScaffoldConfig};
///
/// let config = ScaffoldConfig::builder()
///     .catalog_path("fixtures/catalog.json")
///     .destination("out")
///     .category(CategoryPath::new("skills.basic").unwrap())
///     .failure_policy(FailurePolicy::Continue)
///     .build();
///
/// assert_eq!(config.destination.to_str(), Some("out"));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// JSON catalog file to read records from.
    ///
    /// Default: `data/skills-detailed-technical-javascript.json`
    pub catalog_path: PathBuf,

    /// Directory that receives one folder per record.
    ///
    /// Created on demand, including intermediate components.
    /// Default: `javascript`
    pub destination: PathBuf,

    /// Dotted key path selecting the record array inside the catalog.
    ///
    /// Default: `skills.detailed.technical.javaScript`
    pub category: CategoryPath,

    /// Metadata field removed from every record before it is written out.
    ///
    /// Default: `repository_url`
    pub excluded_field: String,

    /// Per-record failure handling.
    ///
    /// Default: [`FailurePolicy::Abort`]
    pub failure_policy: FailurePolicy,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            category: CategoryPath::default(),
            excluded_field: DEFAULT_EXCLUDED_FIELD.to_string(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl ScaffoldConfig {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use skilltree_core::ScaffoldConfig;
    ///
    /// let config = ScaffoldConfig::builder()
    ///     .destination("generated")
    ///     .build();
    ///
    /// assert_eq!(config.destination.to_str(), Some("generated"));
    /// ```
    #[must_use]
    pub fn builder() -> ScaffoldConfigBuilder {
        ScaffoldConfigBuilder::new()
    }

    /// Validates the configuration.
    ///
    /// The category path is validated at construction, so this checks the
    /// remaining fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if:
    /// - the catalog path is empty
    /// - the destination is empty
    /// - the excluded field name is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use skilltree_core::ScaffoldConfig;
    ///
    /// assert!(ScaffoldConfig::default().validate().is_ok());
    ///
    /// let invalid = ScaffoldConfig {
    ///     destination: PathBuf::new(),
    ///     ..Default::default()
    /// };
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.catalog_path.as_os_str().is_empty() {
            return Err(Error::Config {
                message: "catalog path must not be empty".to_string(),
            });
        }

        if self.destination.as_os_str().is_empty() {
            return Err(Error::Config {
                message: "destination must not be empty".to_string(),
            });
        }

        if self.excluded_field.is_empty() {
            return Err(Error::Config {
                message: "excluded field name must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for [`ScaffoldConfig`].
///
/// # Examples
///
/// ```
/// use skilltree_core::{CategoryPath, ScaffoldConfig};
///
/// let config = ScaffoldConfig::builder()
///     .catalog_path("data/catalog.json")
///     .category(CategoryPath::new("skills.web").unwrap())
///     .excluded_field("internal_notes")
///     .build();
///
/// assert_eq!(config.excluded_field, "internal_notes");
/// ```
#[derive(Debug)]
pub struct ScaffoldConfigBuilder {
    config: ScaffoldConfig,
}

impl ScaffoldConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ScaffoldConfig::default(),
        }
    }

    /// Sets the catalog file path.
    #[must_use]
    pub fn catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.catalog_path = path.into();
        self
    }

    /// Sets the destination directory.
    #[must_use]
    pub fn destination(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.destination = path.into();
        self
    }

    /// Sets the category path.
    #[must_use]
    pub fn category(mut self, category: CategoryPath) -> Self {
        self.config.category = category;
        self
    }

    /// Sets the excluded metadata field.
    #[must_use]
    pub fn excluded_field(mut self, field: impl Into<String>) -> Self {
        self.config.excluded_field = field.into();
        self
    }

    /// Sets the per-record failure policy.
    #[must_use]
    pub const fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.config.failure_policy = policy;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> ScaffoldConfig {
        self.config
    }
}

impl Default for ScaffoldConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
