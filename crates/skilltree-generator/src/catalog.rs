//! Catalog loading.
//!
//! Reads the JSON catalog document and selects the record array via a
//! dotted category path. Every failure mode here is a data-source error:
//! loading happens before any output exists, so a run that fails in this
//! module leaves the destination untouched.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use skilltree_core::{Catalog, CategoryPath, Error, Result, SkillRecord};

/// Loads the catalog at `path`, selecting the records at `category`.
///
/// # Errors
///
/// Returns [`Error::DataSource`] if the file cannot be read, is not valid
/// JSON, the category path does not resolve, the resolved value is not an
/// array, or any record lacks one of its identity fields (`id`, `title`,
/// `description`).
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use skilltree_core::CategoryPath;
/// use skilltree_generator::load_catalog;
///
/// let category = CategoryPath::new("skills.detailed.technical.javaScript")?;
/// let catalog = load_catalog(
///     Path::new("data/skills-detailed-technical-javascript.json"),
///     &category,
/// )?;
/// println!("{} records", catalog.len());
/// # Ok::<(), skilltree_core::Error>(())
/// ```
pub fn load_catalog(path: &Path, category: &CategoryPath) -> Result<Catalog> {
    debug!("Loading skill catalog from {}", path.display());

    let raw = fs::read_to_string(path).map_err(|source| Error::DataSource {
        path: path.to_path_buf(),
        reason: "cannot read catalog file".to_string(),
        source: Some(Box::new(source)),
    })?;

    let document: Value = serde_json::from_str(&raw).map_err(|source| Error::DataSource {
        path: path.to_path_buf(),
        reason: "catalog is not valid JSON".to_string(),
        source: Some(Box::new(source)),
    })?;

    let records = select_records(path, &document, category)?;

    info!(
        "Loaded {} skill records from category '{category}' in {}",
        records.len(),
        path.display()
    );

    Ok(Catalog::new(category.clone(), records))
}

/// Walks the category path through the document and deserializes the
/// record array it points at.
fn select_records(
    path: &Path,
    document: &Value,
    category: &CategoryPath,
) -> Result<Vec<SkillRecord>> {
    let mut cursor = document;
    for segment in category.segments() {
        cursor = cursor.get(segment).ok_or_else(|| Error::DataSource {
            path: path.to_path_buf(),
            reason: format!(
                "category path '{category}' does not resolve: key {segment:?} not found"
            ),
            source: None,
        })?;
    }

    let entries = cursor.as_array().ok_or_else(|| Error::DataSource {
        path: path.to_path_buf(),
        reason: format!("category path '{category}' does not lead to an array of records"),
        source: None,
    })?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry.clone()).map_err(|source| Error::DataSource {
                path: path.to_path_buf(),
                reason: format!("record at index {index} is malformed"),
                source: Some(Box::new(source)),
            })
        })
        .collect()
}
