//! Catalog-driven skill folder scaffolding.
//!
//! This crate turns a JSON skill catalog into a tree of per-skill
//! folders, each holding a snippet file whose header is the sanitized
//! record. The pipeline is a single synchronous pass:
//!
//! ```text
//! catalog.json --load--> Catalog --per record--> sanitize
//!     --> derive folder name --> ensure directory --> write index.js
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use skilltree_core::ScaffoldConfig;
//! use skilltree_generator::generate;
//!
//! // Scaffold with the compiled-in defaults.
//! let report = generate(ScaffoldConfig::default())?;
//! println!("{} snippet files written", report.written_count());
//! # Ok::<(), skilltree_core::Error>(())
//! ```
//!
//! Callers that must not touch the filesystem run the [`Scaffolder`]
//! against a [`MemoryTreeWriter`] instead:
//!
//! ```
//! use skilltree_core::{Catalog, CategoryPath, ScaffoldConfig, SkillRecord};
//! use skilltree_generator::{MemoryTreeWriter, Scaffolder};
//!
//! let scaffolder = Scaffolder::new(ScaffoldConfig::builder().destination("out").build())?;
//! let catalog = Catalog::new(
//!     CategoryPath::new("skills.demo")?,
//!     vec![SkillRecord::new(1005, "Closures", "Functions that capture scope")],
//! );
//!
//! let mut writer = MemoryTreeWriter::new();
//! let report = scaffolder.scaffold_catalog(&catalog, &mut writer)?;
//! assert_eq!(report.written_count(), 1);
//! # Ok::<(), skilltree_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod catalog;
mod scaffold;
mod writer;

pub use catalog::load_catalog;
pub use scaffold::{RecordFailure, RunReport, Scaffolder, generate, render_header};
pub use writer::{FsTreeWriter, MemoryTreeWriter, TreeWriter};
