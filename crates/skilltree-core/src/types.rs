//! Types for skill catalogs and derived output paths.
//!
//! A [`SkillRecord`] is one entry of the input catalog. Records are
//! sanitized (copied without a configured metadata field), mapped to a
//! deterministic [`FolderName`], and written out as a snippet file header.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Name of the snippet file written into every generated skill folder.
pub const SNIPPET_FILE: &str = "index.js";

/// One entry of a skill catalog.
///
/// The three identity fields are part of the schema; every other key of
/// the source JSON object is captured in [`metadata`](Self::metadata).
/// That is where fields excluded from generated output (such as
/// `repository_url`) live until [`sanitized`](Self::sanitized) strips
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    /// Numeric identifier, unique within a catalog by convention.
    pub id: u32,
    /// Human-readable name; spaces become underscores in folder names.
    pub title: String,
    /// Free-text description, retained verbatim in the emitted header.
    pub description: String,
    /// All remaining fields of the source object.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl SkillRecord {
    /// Creates a record with empty metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// use skilltree_core::SkillRecord;
    ///
    /// let record = SkillRecord::new(1001, "Closures", "Functions that capture scope");
    /// assert_eq!(record.id, 1001);
    /// assert!(record.metadata.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            metadata: Map::new(),
        }
    }

    /// Adds a metadata field, consuming and returning the record.
    ///
    /// # Examples
    ///
    /// ```
    /// use skilltree_core::SkillRecord;
    ///
    /// let record = SkillRecord::new(1001, "Closures", "...")
    ///     .with_metadata("repository_url", "https://example.com/closures");
    /// assert!(record.has_metadata("repository_url"));
    /// ```
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns `true` if the record carries the given metadata key.
    #[must_use]
    pub fn has_metadata(&self, key: &str) -> bool {
        self.metadata.contains_key(key)
    }

    /// Returns a copy of this record without the named metadata field.
    ///
    /// The receiver is never mutated. Asking for a key that is not
    /// present yields an equivalent copy, and the identity fields (`id`,
    /// `title`, `description`) are always retained regardless of the
    /// name passed in.
    ///
    /// # Examples
    ///
    /// ```
    /// use skilltree_core::SkillRecord;
    ///
    /// let record = SkillRecord::new(1001, "Closures", "...")
    ///     .with_metadata("repository_url", "https://example.com/closures");
    ///
    /// let clean = record.sanitized("repository_url");
    /// assert!(!clean.has_metadata("repository_url"));
    /// // The original record is left intact.
    /// assert!(record.has_metadata("repository_url"));
    /// ```
    #[must_use = "sanitized returns a new record and leaves the receiver unchanged"]
    pub fn sanitized(&self, excluded_field: &str) -> Self {
        let mut clean = self.clone();
        clean.metadata.remove(excluded_field);
        clean
    }
}

/// Deterministic folder name derived from a skill record.
///
/// The derivation is `<id>-<title>` with every ASCII space in the title
/// replaced by an underscore. Nothing else is normalized: case, accents,
/// and punctuation pass through unchanged, so `1503` with title
/// `DRY (Don't Repeat Yourself)` becomes
/// `1503-DRY_(Don't_Repeat_Yourself)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderName(String);

impl FolderName {
    /// Derives the folder name for a record.
    ///
    /// Two records with equal `id` and `title` always derive the same
    /// name; duplicate ids in a catalog therefore collapse onto one
    /// folder, with the later record overwriting the earlier file.
    ///
    /// # Examples
    ///
    /// ```
    /// use skilltree_core::{FolderName, SkillRecord};
    ///
    /// let record = SkillRecord::new(1001, "Variables and Data Types", "...");
    /// let folder = FolderName::derive(&record);
    /// assert_eq!(folder.as_str(), "1001-Variables_and_Data_Types");
    /// ```
    #[must_use]
    pub fn derive(record: &SkillRecord) -> Self {
        Self(format!("{}-{}", record.id, record.title.replace(' ', "_")))
    }

    /// Returns the folder name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the folder name, returning the inner `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FolderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated dotted key path selecting the record array inside a catalog
/// document, e.g. `skills.detailed.technical.javaScript`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPath(Vec<String>);

impl CategoryPath {
    /// Parses a dotted key path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the path is empty or contains
    /// an empty segment (leading, trailing, or doubled dots).
    ///
    /// # Examples
    ///
    /// ```
    /// use skilltree_core::CategoryPath;
    ///
    /// let path = CategoryPath::new("skills.detailed.technical.javaScript").unwrap();
    /// assert_eq!(path.segments().len(), 4);
    /// assert!(CategoryPath::new("skills..javaScript").is_err());
    /// ```
    pub fn new(path: impl AsRef<str>) -> Result<Self> {
        let raw = path.as_ref();
        if raw.is_empty() {
            return Err(Error::InvalidInput(
                "category path must not be empty".to_string(),
            ));
        }
        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(Error::InvalidInput(format!(
                "category path {raw:?} contains an empty segment"
            )));
        }
        Ok(Self(segments))
    }

    /// Returns the path segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl Default for CategoryPath {
    /// The compiled-in default, [`DEFAULT_CATEGORY_PATH`](crate::DEFAULT_CATEGORY_PATH).
    fn default() -> Self {
        Self(
            crate::config::DEFAULT_CATEGORY_PATH
                .split('.')
                .map(str::to_string)
                .collect(),
        )
    }
}

impl FromStr for CategoryPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for CategoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// The ordered collection of skill records selected by one category path.
///
/// Insertion order is preserved but carries no semantics; records are
/// independent of one another.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    category: CategoryPath,
    records: Vec<SkillRecord>,
}

impl Catalog {
    /// Creates a catalog from a category path and its records.
    #[must_use]
    pub const fn new(category: CategoryPath, records: Vec<SkillRecord>) -> Self {
        Self { category, records }
    }

    /// The category path the records were selected from.
    #[must_use]
    pub const fn category(&self) -> &CategoryPath {
        &self.category
    }

    /// The records in catalog order.
    #[must_use]
    pub fn records(&self) -> &[SkillRecord] {
        &self.records
    }

    /// Number of records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> SkillRecord {
        SkillRecord::new(1001, "Variables and Data Types", "Primitive types and coercion")
            .with_metadata("repository_url", "https://example.com/skills/1001")
    }

    #[test]
    fn test_sanitized_removes_excluded_field() {
        let record = sample_record();
        let clean = record.sanitized("repository_url");
        assert!(!clean.has_metadata("repository_url"));
        assert_eq!(clean.id, record.id);
        assert_eq!(clean.title, record.title);
        assert_eq!(clean.description, record.description);
    }

    #[test]
    fn test_sanitized_leaves_original_untouched() {
        let record = sample_record();
        let _ = record.sanitized("repository_url");
        assert!(record.has_metadata("repository_url"));
    }

    #[test]
    fn test_sanitized_with_absent_field_is_identity() {
        let record = sample_record();
        let clean = record.sanitized("no_such_field");
        assert_eq!(clean, record);
    }

    #[test]
    fn test_sanitized_never_strips_identity_fields() {
        let record = sample_record();
        let clean = record.sanitized("title");
        assert_eq!(clean.title, "Variables and Data Types");
        assert!(clean.has_metadata("repository_url"));
    }

    #[test]
    fn test_sanitized_keeps_other_metadata() {
        let record = sample_record().with_metadata("level", 2);
        let clean = record.sanitized("repository_url");
        assert!(clean.has_metadata("level"));
        assert!(!clean.has_metadata("repository_url"));
    }

    #[test]
    fn test_folder_name_replaces_spaces_with_underscores() {
        let record = SkillRecord::new(1001, "Variables and Data Types", "...");
        assert_eq!(
            FolderName::derive(&record).as_str(),
            "1001-Variables_and_Data_Types"
        );
    }

    #[test]
    fn test_folder_name_passes_punctuation_through() {
        let record = SkillRecord::new(1503, "DRY (Don't Repeat Yourself)", "...");
        assert_eq!(
            FolderName::derive(&record).as_str(),
            "1503-DRY_(Don't_Repeat_Yourself)"
        );

        let record = SkillRecord::new(1305, "Array Operations (map, filter, reduce)", "...");
        assert_eq!(
            FolderName::derive(&record).as_str(),
            "1305-Array_Operations_(map,_filter,_reduce)"
        );
    }

    #[test]
    fn test_folder_name_without_spaces_is_unchanged() {
        let record = SkillRecord::new(1403, "Async", "...");
        assert_eq!(FolderName::derive(&record).as_str(), "1403-Async");
    }

    #[test]
    fn test_folder_name_is_deterministic() {
        let record = SkillRecord::new(1101, "Objects and Properties", "...");
        assert_eq!(FolderName::derive(&record), FolderName::derive(&record));
    }

    #[test]
    fn test_folder_name_display_matches_as_str() {
        let folder = FolderName::derive(&SkillRecord::new(1, "A B", "..."));
        assert_eq!(folder.to_string(), folder.as_str());
        assert_eq!(folder.into_string(), "1-A_B");
    }

    #[test]
    fn test_category_path_parses_segments() {
        let path = CategoryPath::new("skills.detailed.technical.javaScript")
            .expect("valid category path");
        assert_eq!(
            path.segments(),
            ["skills", "detailed", "technical", "javaScript"]
        );
        assert_eq!(path.to_string(), "skills.detailed.technical.javaScript");
    }

    #[test]
    fn test_category_path_single_segment() {
        let path = CategoryPath::new("skills").expect("single segment is valid");
        assert_eq!(path.segments(), ["skills"]);
    }

    #[test]
    fn test_category_path_rejects_empty() {
        let error = CategoryPath::new("").expect_err("empty path is invalid");
        assert!(error.is_invalid_input());
    }

    #[test]
    fn test_category_path_rejects_empty_segments() {
        assert!(CategoryPath::new("skills..javaScript").is_err());
        assert!(CategoryPath::new(".skills").is_err());
        assert!(CategoryPath::new("skills.").is_err());
    }

    #[test]
    fn test_category_path_from_str() {
        let path: CategoryPath = "skills.basic".parse().expect("valid path");
        assert_eq!(path.segments(), ["skills", "basic"]);
        assert!("".parse::<CategoryPath>().is_err());
    }

    #[test]
    fn test_category_path_default_matches_constant() {
        let default = CategoryPath::default();
        assert_eq!(default.to_string(), crate::config::DEFAULT_CATEGORY_PATH);
        // The constant must itself parse cleanly.
        let parsed = CategoryPath::new(crate::config::DEFAULT_CATEGORY_PATH)
            .expect("default category path is valid");
        assert_eq!(default, parsed);
    }

    #[test]
    fn test_record_deserializes_extra_fields_into_metadata() {
        let json = r#"{
            "id": 1001,
            "title": "Variables and Data Types",
            "description": "Primitive types and coercion",
            "repository_url": "https://example.com/skills/1001"
        }"#;
        let record: SkillRecord = serde_json::from_str(json).expect("valid record");
        assert_eq!(record.id, 1001);
        assert_eq!(
            record.metadata.get("repository_url"),
            Some(&Value::String("https://example.com/skills/1001".to_string()))
        );
    }

    #[test]
    fn test_record_missing_identity_field_fails() {
        let json = r#"{"id": 1001, "description": "no title"}"#;
        assert!(serde_json::from_str::<SkillRecord>(json).is_err());
    }

    #[test]
    fn test_record_serializes_identity_fields_first() {
        let json = serde_json::to_string(&sample_record()).expect("record serializes");
        let id_pos = json.find("\"id\"").expect("id present");
        let title_pos = json.find("\"title\"").expect("title present");
        let description_pos = json.find("\"description\"").expect("description present");
        let url_pos = json.find("\"repository_url\"").expect("metadata present");
        assert!(id_pos < title_pos);
        assert!(title_pos < description_pos);
        assert!(description_pos < url_pos);
    }

    #[test]
    fn test_catalog_accessors() {
        let category = CategoryPath::new("skills.basic").expect("valid path");
        let catalog = Catalog::new(category.clone(), vec![sample_record()]);
        assert_eq!(catalog.category(), &category);
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.records()[0].id, 1001);
    }

    #[test]
    fn test_empty_catalog() {
        let category = CategoryPath::new("skills").expect("valid path");
        let catalog = Catalog::new(category, Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
