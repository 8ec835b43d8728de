mod filter;

pub use filter::{EntryFilter, EntryKind, IgnoreRuleFilter};

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::checker::validate;
use crate::config::ScanConfig;
use crate::encoding::{EncodingResolver, TextDecoder};
use crate::output::{MessageSink, StyledMessage};
use crate::path_utils::{cmp_ignore_case, cmp_paths_ignore_case, dotted_extension, file_name_str};
use crate::stats::{FileIssue, ScanStatistics};

/// Directories first, then files; each group by case-insensitive full path.
fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.file_type()
        .is_dir()
        .cmp(&a.file_type().is_dir())
        .then_with(|| cmp_paths_ignore_case(a.path(), b.path()))
}

/// Depth-first, pre-order walk of the configured roots.
///
/// At every directory the whole subtree of each subdirectory is processed
/// before any file of that directory. Ignored directories are pruned.
pub struct DirectoryScanner<'a, F: EntryFilter, D: TextDecoder = EncodingResolver> {
    config: &'a ScanConfig,
    filter: F,
    decoder: D,
    sink: &'a dyn MessageSink,
}

impl<'a> DirectoryScanner<'a, IgnoreRuleFilter<'a>, EncodingResolver> {
    #[must_use]
    pub fn new(config: &'a ScanConfig, sink: &'a dyn MessageSink) -> Self {
        Self::with_parts(config, IgnoreRuleFilter::new(config), EncodingResolver::new(), sink)
    }
}

impl<'a, F: EntryFilter, D: TextDecoder> DirectoryScanner<'a, F, D> {
    #[must_use]
    pub fn with_parts(
        config: &'a ScanConfig,
        filter: F,
        decoder: D,
        sink: &'a dyn MessageSink,
    ) -> Self {
        Self {
            config,
            filter,
            decoder,
            sink,
        }
    }

    /// Scan every root in case-insensitive order.
    ///
    /// Roots that are not existing directories are reported and skipped.
    pub fn scan(&self, roots: &[String], stats: &mut ScanStatistics) {
        let mut sorted: Vec<&String> = roots.iter().collect();
        sorted.sort_by(|a, b| cmp_ignore_case(a, b));

        for root in sorted {
            let root_path = PathBuf::from(root);
            if !root_path.is_dir() {
                warn!(root = %root, "scan root not found");
                self.sink
                    .emit(&StyledMessage::warning(format!("Root directory not found: {root}")));
                continue;
            }
            info!(root = %root, "scanning root");
            self.scan_root(&root_path, stats);
        }
    }

    fn scan_root(&self, root: &Path, stats: &mut ScanStatistics) {
        let mut walker = WalkDir::new(root)
            .follow_links(true)
            .sort_by(compare_entries)
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let location = err
                        .path()
                        .map_or_else(|| root.display().to_string(), |p| p.display().to_string());
                    self.record_error(
                        format!("Failed to read directory entry '{location}': {err}"),
                        stats,
                    );
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                if !self.enter_directory(entry.path(), stats) {
                    walker.skip_current_dir();
                }
            } else if file_type.is_file() {
                self.process_file(entry.path(), stats);
            }
        }
    }

    /// Returns `false` when the directory is ignored and must not be descended.
    fn enter_directory(&self, dir: &Path, stats: &mut ScanStatistics) -> bool {
        if let Some(reason) = self.filter.classify(dir, EntryKind::Directory) {
            debug!(dir = %dir.display(), ?reason, "directory ignored");
            stats.add_ignored(reason, dir);
            return false;
        }

        debug!(dir = %dir.display(), "scanning directory");
        stats.add_scanned_directory(dir);
        true
    }

    fn process_file(&self, path: &Path, stats: &mut ScanStatistics) {
        if let Some(reason) = self.filter.classify(path, EntryKind::File) {
            debug!(file = %path.display(), ?reason, "file ignored");
            stats.add_ignored(reason, path);
            return;
        }

        let name = file_name_str(path);
        let extension = dotted_extension(&name);
        if let Some(ext) = extension {
            stats.add_detected_extension(ext);
        }

        let encoding = EncodingResolver::resolve(path, extension, self.config);
        let lines = match self.decoder.decode_file(path, &encoding) {
            Ok(lines) => lines,
            Err(err) => {
                debug_assert!(err.is_file_scoped(), "fatal error while decoding: {err}");
                self.record_error(err.to_string(), stats);
                return;
            }
        };

        let mode = self.config.indent_mode_for(path, extension);
        debug!(file = %path.display(), %encoding, %mode, lines = lines.len(), "checking file");
        stats.add_checked_file(path, &encoding, mode);

        if let Some(violation) = validate(&lines, mode) {
            let message = violation.to_string();
            self.sink.emit(&StyledMessage::warning(format!(
                "{}: {message}",
                path.display()
            )));
            stats.add_file_with_issue(FileIssue {
                path: path.to_path_buf(),
                encoding,
                mode,
                message,
            });
        }
    }

    fn record_error(&self, message: String, stats: &mut ScanStatistics) {
        debug!(error = %message, "recoverable scan error");
        self.sink.emit(&StyledMessage::error(message.clone()));
        stats.add_error(message);
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
