//! Deterministic text report of a scan.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{IndentGuardError, Result};
use crate::path_utils::{cmp_ignore_case, cmp_paths_ignore_case};
use crate::stats::{IgnoreReason, PathSet, ScanStatistics};

pub const REPORT_FILE_PREFIX: &str = "indentChecker";

const UTF8_BOM: &str = "\u{feff}";

/// Report file name with an embedded UTC timestamp.
#[must_use]
pub fn report_file_name(now: DateTime<Utc>) -> String {
    format!("{REPORT_FILE_PREFIX}-{}.log", now.format("%Y%m%dT%H%M%SZ"))
}

/// The user's desktop, or the current directory when there is none.
#[must_use]
pub fn default_report_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.desktop_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn write_section<I>(out: &mut String, title: &str, lines: I)
where
    I: IntoIterator<Item = String>,
{
    writeln!(out, "[{title}]").ok();
    for line in lines {
        writeln!(out, "{line}").ok();
    }
}

fn sorted_paths(set: &PathSet) -> Vec<String> {
    let mut paths: Vec<&Path> = set.iter().collect();
    paths.sort_by(|a, b| cmp_paths_ignore_case(a, b));
    paths.iter().map(|p| p.display().to_string()).collect()
}

/// Render the report body (without byte-order mark).
///
/// Section order is fixed and every section except Errors is sorted
/// case-insensitively by path or extension. Errors keep recording order and
/// the section is omitted when empty.
#[must_use]
pub fn render(stats: &ScanStatistics) -> String {
    let mut out = String::new();
    writeln!(out, "Scan Report").ok();
    writeln!(out).ok();

    write_section(
        &mut out,
        "Scanned Directories",
        sorted_paths(stats.scanned_directories()),
    );
    writeln!(out).ok();

    let mut extensions: Vec<&String> = stats.detected_extensions().iter().collect();
    extensions.sort_by(|a, b| cmp_ignore_case(a, b));
    write_section(
        &mut out,
        "Detected Extensions",
        extensions.into_iter().cloned(),
    );
    writeln!(out).ok();

    let mut checked: Vec<_> = stats.checked_files().iter().collect();
    checked.sort_by(|a, b| cmp_paths_ignore_case(&a.path, &b.path));
    write_section(
        &mut out,
        "Checked Files",
        checked
            .into_iter()
            .map(|f| format!("{} (encoding: {})", f.path.display(), f.encoding)),
    );
    writeln!(out).ok();

    for (title, reason) in [
        ("Ignored by Full Path", IgnoreReason::FullPath),
        ("Ignored by Name", IgnoreReason::Name),
        ("Ignored by Extension", IgnoreReason::Extension),
    ] {
        write_section(&mut out, title, sorted_paths(stats.ignored(reason)));
        writeln!(out).ok();
    }

    let mut issues: Vec<_> = stats.files_with_issues().iter().collect();
    issues.sort_by(|a, b| cmp_paths_ignore_case(&a.path, &b.path));
    write_section(
        &mut out,
        "Files with Issues",
        issues.into_iter().map(|i| {
            format!(
                "{} (encoding: {}): {}",
                i.path.display(),
                i.encoding,
                i.message
            )
        }),
    );

    if stats.has_errors() {
        writeln!(out).ok();
        write_section(&mut out, "Errors", stats.errors().iter().cloned());
    }

    out
}

/// Writes rendered reports into a directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the report as BOM-prefixed UTF-8 and return its path.
    ///
    /// # Errors
    /// Returns `ReportWrite` if the directory cannot be created or the file
    /// cannot be written.
    pub fn write(&self, stats: &ScanStatistics, now: DateTime<Utc>) -> Result<PathBuf> {
        let path = self.dir.join(report_file_name(now));

        std::fs::create_dir_all(&self.dir).map_err(|source| IndentGuardError::ReportWrite {
            path: path.clone(),
            source,
        })?;

        let content = format!("{UTF8_BOM}{}", render(stats));
        std::fs::write(&path, content).map_err(|source| IndentGuardError::ReportWrite {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), "report written");
        Ok(path)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
