//! The scaffolding pipeline.
//!
//! One sequential pass over the catalog: sanitize each record, derive its
//! folder name, materialize the directory, and write the snippet header
//! file. Records are independent, so order never affects correctness.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use skilltree_core::{
    Catalog, Error, FailurePolicy, FolderName, Result, SNIPPET_FILE, ScaffoldConfig, SkillRecord,
};

use crate::catalog::load_catalog;
use crate::writer::{FsTreeWriter, TreeWriter};

/// Renders the comment-block header for a record.
///
/// The header is the record pretty-printed as JSON with two-space indent,
/// wrapped in a `/* ... */` block, and is the entire content of the
/// emitted snippet file. Identity fields come first, remaining metadata
/// keys follow in lexicographic order, so the output is deterministic.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the record cannot be serialized.
///
/// # Examples
///
/// ```
/// use skilltree_core::SkillRecord;
/// use skilltree_generator::render_header;
///
/// let record = SkillRecord::new(1005, "Closures", "Functions that capture scope");
/// let header = render_header(&record)?;
/// assert!(header.starts_with("/*\n"));
/// assert!(header.ends_with("\n*/\n"));
/// assert!(header.contains("\"id\": 1005"));
/// # Ok::<(), skilltree_core::Error>(())
/// ```
pub fn render_header(record: &SkillRecord) -> Result<String> {
    let json = serde_json::to_string_pretty(record).map_err(|source| {
        Error::InvalidInput(format!(
            "record {} cannot be serialized: {source}",
            record.id
        ))
    })?;
    Ok(format!("/*\n{json}\n*/\n"))
}

/// One record that failed to scaffold under [`FailurePolicy::Continue`].
#[derive(Debug)]
pub struct RecordFailure {
    /// Identifier of the failing record.
    pub id: u32,
    /// Folder the record would have produced.
    pub folder: FolderName,
    /// What went wrong.
    pub error: Error,
}

/// Summary of one scaffold run.
#[derive(Debug, Default)]
pub struct RunReport {
    written: Vec<PathBuf>,
    failures: Vec<RecordFailure>,
}

impl RunReport {
    /// Paths of the snippet files written, in catalog order.
    #[must_use]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Failures collected under [`FailurePolicy::Continue`].
    ///
    /// Always empty under [`FailurePolicy::Abort`]: the first failure
    /// ends the run with an error instead of a report.
    #[must_use]
    pub fn failures(&self) -> &[RecordFailure] {
        &self.failures
    }

    /// Number of records successfully written.
    #[must_use]
    pub fn written_count(&self) -> usize {
        self.written.len()
    }

    /// Number of records that failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Returns `true` if every record was written.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives the scaffold pipeline for one configuration.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use skilltree_core::{Catalog, CategoryPath, ScaffoldConfig, SkillRecord};
/// use skilltree_generator::{MemoryTreeWriter, Scaffolder};
///
/// let config = ScaffoldConfig::builder().destination("out").build();
/// let scaffolder = Scaffolder::new(config)?;
///
/// let record = SkillRecord::new(1001, "Variables and Data Types", "Primitives")
///     .with_metadata("repository_url", "https://example.com/skills/1001");
/// let catalog = Catalog::new(CategoryPath::new("skills.basic")?, vec![record]);
///
/// let mut writer = MemoryTreeWriter::new();
/// let report = scaffolder.scaffold_catalog(&catalog, &mut writer)?;
///
/// assert_eq!(report.written_count(), 1);
/// let header = writer
///     .file_contents(Path::new("out/1001-Variables_and_Data_Types/index.js"))
///     .unwrap();
/// assert!(!header.contains("repository_url"));
/// # Ok::<(), skilltree_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Scaffolder {
    config: ScaffoldConfig,
}

impl Scaffolder {
    /// Creates a scaffolder, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn new(config: ScaffoldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration.
    #[must_use]
    pub const fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Loads the configured catalog and scaffolds every record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataSource`] if the catalog cannot be loaded (in
    /// which case nothing has been written), or the first record error
    /// under [`FailurePolicy::Abort`].
    pub fn run(&self, writer: &mut dyn TreeWriter) -> Result<RunReport> {
        let catalog = load_catalog(&self.config.catalog_path, &self.config.category)?;
        self.scaffold_catalog(&catalog, writer)
    }

    /// Scaffolds an already-loaded catalog.
    ///
    /// Every record yields exactly one directory and one snippet file.
    /// Re-running over the same catalog and destination overwrites the
    /// previous output byte for byte.
    ///
    /// # Errors
    ///
    /// Under [`FailurePolicy::Abort`], the first record failure is
    /// returned and later records are not attempted. Under
    /// [`FailurePolicy::Continue`], record failures are collected in the
    /// report and the run itself returns `Ok`.
    pub fn scaffold_catalog(
        &self,
        catalog: &Catalog,
        writer: &mut dyn TreeWriter,
    ) -> Result<RunReport> {
        info!(
            "Scaffolding {} records into {}",
            catalog.len(),
            self.config.destination.display()
        );

        let mut report = RunReport::default();
        for record in catalog.records() {
            let folder = FolderName::derive(record);
            match self.scaffold_record(record, &folder, writer) {
                Ok(path) => report.written.push(path),
                Err(error) => match self.config.failure_policy {
                    FailurePolicy::Abort => return Err(error),
                    FailurePolicy::Continue => {
                        warn!("Skipping record {} ({folder}): {error}", record.id);
                        report.failures.push(RecordFailure {
                            id: record.id,
                            folder,
                            error,
                        });
                    }
                },
            }
        }

        info!(
            "Scaffold complete: {} written, {} failed",
            report.written_count(),
            report.failure_count()
        );
        Ok(report)
    }

    /// Sanitizes one record and writes its folder and snippet file.
    fn scaffold_record(
        &self,
        record: &SkillRecord,
        folder: &FolderName,
        writer: &mut dyn TreeWriter,
    ) -> Result<PathBuf> {
        let clean = record.sanitized(&self.config.excluded_field);

        let dir = self.config.destination.join(folder.as_str());
        writer.ensure_dir(&dir)?;

        let header = render_header(&clean)?;
        let file = dir.join(SNIPPET_FILE);
        writer.write_file(&file, &header)?;

        debug!("Scaffolded record {} into {}", record.id, file.display());
        Ok(file)
    }
}

/// Loads, scaffolds, and writes to the real filesystem in one call.
///
/// The entry point used by the CLI: equivalent to building a
/// [`Scaffolder`] and running it with an [`FsTreeWriter`].
///
/// # Errors
///
/// Returns [`Error::Config`] for invalid configuration,
/// [`Error::DataSource`] when the catalog cannot be loaded, or the first
/// record error under [`FailurePolicy::Abort`].
///
/// # Examples
///
/// ```no_run
/// use skilltree_core::ScaffoldConfig;
/// use skilltree_generator::generate;
///
/// let report = generate(ScaffoldConfig::default())?;
/// println!("{} snippet files written", report.written_count());
/// # Ok::<(), skilltree_core::Error>(())
/// ```
pub fn generate(config: ScaffoldConfig) -> Result<RunReport> {
    let scaffolder = Scaffolder::new(config)?;
    let mut writer = FsTreeWriter::new();
    scaffolder.run(&mut writer)
}
