use std::path::Path;

use crate::config::ScanConfig;
use crate::path_utils::{dotted_extension, file_name_str};
use crate::stats::IgnoreReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

pub trait EntryFilter {
    /// Return the first ignore rule matching `path`, or `None` to keep it.
    fn classify(&self, path: &Path, kind: EntryKind) -> Option<IgnoreReason>;
}

/// Exact-match ignore rules: full path, then bare name, then (files only)
/// extension.
pub struct IgnoreRuleFilter<'a> {
    config: &'a ScanConfig,
}

impl<'a> IgnoreRuleFilter<'a> {
    #[must_use]
    pub const fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }
}

impl EntryFilter for IgnoreRuleFilter<'_> {
    fn classify(&self, path: &Path, kind: EntryKind) -> Option<IgnoreReason> {
        if self.config.ignored_full_paths.contains(&path.to_string_lossy()) {
            return Some(IgnoreReason::FullPath);
        }

        let name = file_name_str(path);
        if self.config.ignored_names.contains(&name) {
            return Some(IgnoreReason::Name);
        }

        if kind == EntryKind::File
            && dotted_extension(&name).is_some_and(|ext| self.config.ignored_extensions.contains(ext))
        {
            return Some(IgnoreReason::Extension);
        }

        None
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
