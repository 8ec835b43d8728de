//! Scan facts collected during a single run.

use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};

use crate::config::IndentMode;
use crate::path_utils::fold_case;

/// A file that was decoded and validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckedFile {
    pub path: PathBuf,
    pub encoding: String,
    pub mode: IndentMode,
}

/// A checked file whose indentation needs attention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileIssue {
    pub path: PathBuf,
    pub encoding: String,
    pub mode: IndentMode,
    pub message: String,
}

/// Which ignore rule excluded an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    FullPath,
    Name,
    Extension,
}

/// Path set with case-insensitive identity that keeps the first spelling seen.
#[derive(Debug, Clone, Default)]
pub struct PathSet {
    entries: IndexMap<String, PathBuf>,
}

impl PathSet {
    pub fn insert(&mut self, path: &Path) -> bool {
        let key = fold_case(&path.to_string_lossy());
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, path.to_path_buf());
        true
    }

    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.entries
            .contains_key(&fold_case(&path.to_string_lossy()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.values().map(PathBuf::as_path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Accumulates everything observed during one scan.
///
/// Created once per run, written only by the traversal, read once by the
/// report writer.
#[derive(Debug, Clone, Default)]
pub struct ScanStatistics {
    scanned_directories: PathSet,
    detected_extensions: IndexSet<String>,
    checked_files: IndexSet<CheckedFile>,
    ignored_by_full_path: PathSet,
    ignored_by_name: PathSet,
    ignored_by_extension: PathSet,
    files_with_issues: Vec<FileIssue>,
    errors: Vec<String>,
}

impl ScanStatistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_scanned_directory(&mut self, dir: &Path) {
        self.scanned_directories.insert(dir);
    }

    /// Record an extension, normalized to lowercase. Empty input is ignored.
    pub fn add_detected_extension(&mut self, ext: &str) {
        if !ext.is_empty() {
            self.detected_extensions.insert(fold_case(ext));
        }
    }

    pub fn add_checked_file(&mut self, path: &Path, encoding: &str, mode: IndentMode) {
        self.checked_files.insert(CheckedFile {
            path: path.to_path_buf(),
            encoding: encoding.to_string(),
            mode,
        });
    }

    pub fn add_ignored(&mut self, reason: IgnoreReason, path: &Path) {
        match reason {
            IgnoreReason::FullPath => self.ignored_by_full_path.insert(path),
            IgnoreReason::Name => self.ignored_by_name.insert(path),
            IgnoreReason::Extension => self.ignored_by_extension.insert(path),
        };
    }

    pub fn add_file_with_issue(&mut self, issue: FileIssue) {
        self.files_with_issues.push(issue);
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    #[must_use]
    pub const fn scanned_directories(&self) -> &PathSet {
        &self.scanned_directories
    }

    #[must_use]
    pub const fn detected_extensions(&self) -> &IndexSet<String> {
        &self.detected_extensions
    }

    #[must_use]
    pub const fn checked_files(&self) -> &IndexSet<CheckedFile> {
        &self.checked_files
    }

    #[must_use]
    pub const fn ignored(&self, reason: IgnoreReason) -> &PathSet {
        match reason {
            IgnoreReason::FullPath => &self.ignored_by_full_path,
            IgnoreReason::Name => &self.ignored_by_name,
            IgnoreReason::Extension => &self.ignored_by_extension,
        }
    }

    #[must_use]
    pub fn files_with_issues(&self) -> &[FileIssue] {
        &self.files_with_issues
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.files_with_issues.is_empty()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
