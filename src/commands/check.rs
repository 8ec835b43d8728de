use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::cli::Cli;
use crate::config::{ConfigLoader, FileConfigLoader};
use crate::error::{IndentGuardError, Result};
use crate::output::{MessageSink, ReportWriter, StyledMessage, default_report_dir};
use crate::scanner::DirectoryScanner;
use crate::stats::ScanStatistics;
use crate::{EXIT_ISSUES_FOUND, EXIT_SUCCESS};

/// Resolved settings for one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub config_dir: PathBuf,
    pub report_dir: PathBuf,
    /// Replaces the configured scan roots when non-empty.
    pub roots: Vec<String>,
    pub warn_only: bool,
}

impl CheckOptions {
    /// Build options from the command line, filling in default directories.
    ///
    /// # Errors
    /// Returns an error if no config directory was given and the executable's
    /// location cannot be determined.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_dir = match &cli.config_dir {
            Some(dir) => dir.clone(),
            None => default_config_dir()?,
        };
        let report_dir = cli.report_dir.clone().unwrap_or_else(default_report_dir);

        Ok(Self {
            config_dir,
            report_dir,
            roots: cli.roots.clone(),
            warn_only: cli.warn_only,
        })
    }
}

/// Directory containing the running executable.
///
/// # Errors
/// Returns an error if the executable path cannot be resolved.
pub fn default_config_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        IndentGuardError::Config(format!(
            "cannot determine directory of {}",
            exe.display()
        ))
    })
}

/// Load configuration, scan, write the report and print a summary.
///
/// Returns the process exit code for a completed scan.
///
/// # Errors
/// Returns an error for missing or malformed configuration and for report
/// write failures. File-scoped problems are recorded in the report instead.
pub fn run_check(options: &CheckOptions, sink: &dyn MessageSink) -> Result<i32> {
    let config = FileConfigLoader::new(&options.config_dir).load()?;
    let roots = if options.roots.is_empty() {
        &config.scan_roots
    } else {
        &options.roots
    };

    let mut stats = ScanStatistics::new();
    DirectoryScanner::new(&config, sink).scan(roots, &mut stats);

    let report_path = ReportWriter::new(&options.report_dir).write(&stats, Utc::now())?;
    print_summary(&stats, &report_path, sink);

    Ok(exit_code(&stats, options.warn_only))
}

fn print_summary(stats: &ScanStatistics, report_path: &Path, sink: &dyn MessageSink) {
    sink.emit(&StyledMessage::info(format!(
        "Report written to {}",
        report_path.display()
    )));

    let issues = stats.files_with_issues().len();
    if issues == 0 {
        sink.emit(&StyledMessage::info("No indentation issues found."));
    } else {
        sink.emit(&StyledMessage::warning(format!(
            "{issues} file(s) with indentation issues."
        )));
    }
}

#[must_use]
pub fn exit_code(stats: &ScanStatistics, warn_only: bool) -> i32 {
    if warn_only || (!stats.has_issues() && !stats.has_errors()) {
        EXIT_SUCCESS
    } else {
        EXIT_ISSUES_FOUND
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
