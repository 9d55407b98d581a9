//! Core types, configuration, and error handling for the skilltree
//! scaffolder.
//!
//! This crate holds everything the pipeline crates share: the skill record
//! model, folder-name derivation, scaffold configuration, the error
//! taxonomy, and CLI exit codes. It performs no I/O itself.
//!
//! # Examples
//!
//! ```
//! use skilltree_core::{FolderName, SkillRecord};
//!
//! let record = SkillRecord::new(1001, "Variables and Data Types", "Primitives and coercion")
//!     .with_metadata("repository_url", "https://example.com/skills/1001");
//!
//! // Sanitization copies; the original keeps its metadata.
//! let clean = record.sanitized("repository_url");
//! assert!(!clean.has_metadata("repository_url"));
//!
//! let folder = FolderName::derive(&clean);
//! assert_eq!(folder.as_str(), "1001-Variables_and_Data_Types");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cli;
mod config;
mod error;
mod types;

pub use config::{
    DEFAULT_CATALOG_PATH, DEFAULT_CATEGORY_PATH, DEFAULT_DESTINATION, DEFAULT_EXCLUDED_FIELD,
    FailurePolicy, ScaffoldConfig, ScaffoldConfigBuilder,
};
pub use error::{DataSourceCause, Error, Result};
pub use types::{Catalog, CategoryPath, FolderName, SNIPPET_FILE, SkillRecord};
