#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the indent-guard binary.
#[macro_export]
macro_rules! indent_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("indent-guard"))
    };
}

/// A temp directory holding a config directory, a scan tree and a report directory.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a fixture with an empty scan tree and no configuration.
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fs::create_dir_all(fixture.tree()).expect("Failed to create tree directory");
        fixture
    }

    /// Creates a fixture whose configuration scans `tree/` with empty ignore lists.
    pub fn with_config() -> Self {
        let fixture = Self::new();
        fixture.write_config("ignoredFullPaths.txt", "");
        fixture.write_config("ignoredNames.txt", "");
        fixture.write_config("ignoredExtensions.txt", "");
        fixture.write_config("scanRoots.txt", &format!("{}\n", fixture.tree().display()));
        fixture.write_config("encodingMap.json", "{}");
        fixture
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_dir(&self) -> PathBuf {
        self.path().join("config")
    }

    pub fn report_dir(&self) -> PathBuf {
        self.path().join("reports")
    }

    pub fn tree(&self) -> PathBuf {
        self.path().join("tree")
    }

    /// Writes (or replaces) a configuration file.
    pub fn write_config(&self, name: &str, content: &str) {
        write_file(&self.config_dir().join(name), content.as_bytes());
    }

    /// Creates a file inside the scan tree.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        self.create_bytes(relative_path, content.as_bytes());
    }

    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) {
        write_file(&self.tree().join(relative_path), content);
    }

    /// Absolute path of an entry inside the scan tree, as a string.
    pub fn tree_path(&self, relative_path: &str) -> String {
        self.tree().join(relative_path).display().to_string()
    }

    /// Paths of all reports written so far.
    pub fn reports(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(self.report_dir()) else {
            return Vec::new();
        };
        let mut reports: Vec<PathBuf> = entries
            .map(|e| e.expect("Failed to read report entry").path())
            .collect();
        reports.sort();
        reports
    }

    /// Content of the only report, with the byte-order mark removed.
    pub fn single_report(&self) -> String {
        let reports = self.reports();
        assert_eq!(reports.len(), 1, "expected exactly one report");
        let bytes = fs::read(&reports[0]).expect("Failed to read report");
        assert!(bytes.starts_with(&[0xef, 0xbb, 0xbf]), "report must start with BOM");
        String::from_utf8(bytes[3..].to_vec()).expect("report must be UTF-8")
    }

    /// Base command with config and report directories pointing into the fixture.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = indent_guard!();
        cmd.arg("--config-dir")
            .arg(self.config_dir())
            .arg("--report-dir")
            .arg(self.report_dir())
            .arg("--color")
            .arg("never")
            .env_remove("RUST_LOG");
        cmd
    }
}

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(path, content).expect("Failed to write file");
}
