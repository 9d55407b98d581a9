//! Output tree writing.
//!
//! The scaffolder reaches the filesystem only through the [`TreeWriter`]
//! trait, so unit tests and benchmarks can run against an in-memory tree
//! while the CLI uses [`FsTreeWriter`].

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use skilltree_core::{Error, Result};

/// Destination for scaffolded directories and files.
///
/// Both operations are idempotent in the sense the pipeline relies on:
/// an already existing directory is not an error, and writing to an
/// existing file replaces its contents.
pub trait TreeWriter {
    /// Ensures `path` exists as a directory, creating intermediate
    /// components as needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the directory chain cannot be created.
    fn ensure_dir(&mut self, path: &Path) -> Result<()>;

    /// Creates or overwrites the file at `path` with `contents`.
    ///
    /// The parent directory must already exist; the scaffolder always
    /// ensures the folder before writing into it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the write fails.
    fn write_file(&mut self, path: &Path, contents: &str) -> Result<()>;
}

/// [`TreeWriter`] backed by the real filesystem.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use skilltree_generator::{FsTreeWriter, TreeWriter};
///
/// let mut writer = FsTreeWriter::new();
/// writer.ensure_dir(Path::new("out/1001-Closures"))?;
/// writer.write_file(Path::new("out/1001-Closures/index.js"), "/* header */\n")?;
/// # Ok::<(), skilltree_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTreeWriter;

impl FsTreeWriter {
    /// Creates a filesystem writer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TreeWriter for FsTreeWriter {
    fn ensure_dir(&mut self, path: &Path) -> Result<()> {
        debug!("Ensuring directory {}", path.display());
        fs::create_dir_all(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> Result<()> {
        debug!("Writing {} ({} bytes)", path.display(), contents.len());
        fs::write(path, contents).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// [`TreeWriter`] that records the produced tree in memory.
///
/// The injectable capability for exercising the pipeline without
/// touching the filesystem. Only the paths handed to
/// [`ensure_dir`](TreeWriter::ensure_dir) are recorded; intermediate
/// components are implied. Paths come back in sorted order.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use skilltree_generator::{MemoryTreeWriter, TreeWriter};
///
/// let mut writer = MemoryTreeWriter::new();
/// writer.ensure_dir(Path::new("out/1001-Closures"))?;
/// writer.write_file(Path::new("out/1001-Closures/index.js"), "/* header */\n")?;
///
/// assert_eq!(writer.dir_count(), 1);
/// assert_eq!(
///     writer.file_contents(Path::new("out/1001-Closures/index.js")),
///     Some("/* header */\n")
/// );
/// # Ok::<(), skilltree_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryTreeWriter {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl MemoryTreeWriter {
    /// Creates an empty in-memory writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directories ensured so far, in sorted order.
    #[must_use]
    pub fn dirs(&self) -> Vec<&Path> {
        self.dirs.iter().map(PathBuf::as_path).collect()
    }

    /// Paths of files written so far, in sorted order.
    #[must_use]
    pub fn files(&self) -> Vec<&Path> {
        self.files.keys().map(PathBuf::as_path).collect()
    }

    /// Contents of the file at `path`, if one was written.
    #[must_use]
    pub fn file_contents(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Number of distinct directories ensured.
    #[must_use]
    pub fn dir_count(&self) -> usize {
        self.dirs.len()
    }

    /// Number of distinct files written.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

impl TreeWriter for MemoryTreeWriter {
    fn ensure_dir(&mut self, path: &Path) -> Result<()> {
        self.dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_writer_creates_nested_directories() {
        let dir = TempDir::new().expect("create temp dir");
        let target = dir.path().join("a/b/c");

        let mut writer = FsTreeWriter::new();
        writer.ensure_dir(&target).expect("create chain");
        assert!(target.is_dir());
    }

    #[test]
    fn test_fs_writer_ensure_dir_is_idempotent() {
        let dir = TempDir::new().expect("create temp dir");
        let target = dir.path().join("skills/1001-Closures");

        let mut writer = FsTreeWriter::new();
        writer.ensure_dir(&target).expect("first call");
        writer.ensure_dir(&target).expect("second call succeeds too");
        assert!(target.is_dir());
    }

    #[test]
    fn test_fs_writer_ensure_dir_fails_when_path_is_a_file() {
        let dir = TempDir::new().expect("create temp dir");
        let blocker = dir.path().join("occupied");
        fs::write(&blocker, "not a directory").expect("write blocker file");

        let mut writer = FsTreeWriter::new();
        let error = writer.ensure_dir(&blocker).expect_err("file blocks the dir");
        assert!(error.is_io());
        assert!(error.to_string().contains("occupied"));
    }

    #[test]
    fn test_fs_writer_writes_and_overwrites() {
        let dir = TempDir::new().expect("create temp dir");
        let file = dir.path().join("index.js");

        let mut writer = FsTreeWriter::new();
        writer.write_file(&file, "first").expect("first write");
        assert_eq!(fs::read_to_string(&file).expect("read back"), "first");

        writer.write_file(&file, "second").expect("overwrite");
        assert_eq!(fs::read_to_string(&file).expect("read back"), "second");
    }

    #[test]
    fn test_fs_writer_write_fails_without_parent() {
        let dir = TempDir::new().expect("create temp dir");
        let file = dir.path().join("missing-parent/index.js");

        let mut writer = FsTreeWriter::new();
        assert!(writer.write_file(&file, "content").is_err());
    }

    #[test]
    fn test_memory_writer_records_dirs_and_files() {
        let mut writer = MemoryTreeWriter::new();
        writer
            .ensure_dir(Path::new("out/1002-Control_Flow"))
            .expect("ensure dir");
        writer
            .ensure_dir(Path::new("out/1001-Closures"))
            .expect("ensure dir");
        writer
            .write_file(Path::new("out/1001-Closures/index.js"), "header")
            .expect("write file");

        assert_eq!(writer.dir_count(), 2);
        assert_eq!(writer.file_count(), 1);
        // Sorted order, not insertion order.
        assert_eq!(
            writer.dirs(),
            vec![
                Path::new("out/1001-Closures"),
                Path::new("out/1002-Control_Flow")
            ]
        );
        assert_eq!(writer.files(), vec![Path::new("out/1001-Closures/index.js")]);
    }

    #[test]
    fn test_memory_writer_overwrites_contents() {
        let mut writer = MemoryTreeWriter::new();
        let path = Path::new("out/index.js");
        writer.write_file(path, "first").expect("first write");
        writer.write_file(path, "second").expect("second write");

        assert_eq!(writer.file_count(), 1);
        assert_eq!(writer.file_contents(path), Some("second"));
    }

    #[test]
    fn test_memory_writer_repeated_ensure_dir_counts_once() {
        let mut writer = MemoryTreeWriter::new();
        let path = Path::new("out/1001-Closures");
        writer.ensure_dir(path).expect("first call");
        writer.ensure_dir(path).expect("second call");
        assert_eq!(writer.dir_count(), 1);
    }

    #[test]
    fn test_memory_writer_missing_file_is_none() {
        let writer = MemoryTreeWriter::new();
        assert_eq!(writer.file_contents(Path::new("nope")), None);
    }
}
