use std::path::{Path, PathBuf};

use crate::error::{IndentGuardError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::lines::parse_trimmed_lines;
use super::model::{IgnoreSet, PathKeyedMap, ScanConfig};

pub const IGNORED_FULL_PATHS_FILE: &str = "ignoredFullPaths.txt";
pub const IGNORED_NAMES_FILE: &str = "ignoredNames.txt";
pub const IGNORED_EXTENSIONS_FILE: &str = "ignoredExtensions.txt";
pub const SCAN_ROOTS_FILE: &str = "scanRoots.txt";
pub const ENCODING_MAP_FILE: &str = "encodingMap.json";
pub const INDENT_MODE_MAP_FILE: &str = "indentModeMap.json";

/// Files that must be present before a scan may start.
pub const REQUIRED_FILES: [&str; 5] = [
    IGNORED_FULL_PATHS_FILE,
    IGNORED_NAMES_FILE,
    IGNORED_EXTENSIONS_FILE,
    SCAN_ROOTS_FILE,
    ENCODING_MAP_FILE,
];

/// Trait for loading scan configuration from various sources.
pub trait ConfigLoader {
    /// Load the complete configuration.
    ///
    /// # Errors
    /// Returns `ConfigMissing` listing every absent required file, or an error
    /// if any source cannot be read or parsed.
    fn load(&self) -> Result<ScanConfig>;
}

/// Loads configuration from a directory of list and mapping files.
///
/// Layout:
/// - `ignoredFullPaths.txt`, `ignoredNames.txt`, `ignoredExtensions.txt`,
///   `scanRoots.txt`: one entry per line
/// - `encodingMap.json`: flat `{ "<path or .ext>": "<encoding>" }` object
/// - `indentModeMap.json` (optional): flat `{ "<path or .ext>": "strict" | "flex" }`
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
    config_dir: PathBuf,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(RealFileSystem, config_dir)
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub fn with_fs(fs: F, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            config_dir: config_dir.into(),
        }
    }

    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    fn path_of(&self, name: &str) -> PathBuf {
        self.config_dir.join(name)
    }

    fn missing_files(&self) -> Vec<PathBuf> {
        REQUIRED_FILES
            .iter()
            .map(|name| self.path_of(name))
            .filter(|path| !self.fs.is_file(path))
            .collect()
    }

    fn read(&self, path: &Path) -> Result<String> {
        self.fs.read_to_string(path).map_err(|source| {
            IndentGuardError::Config(format!("cannot read {}: {source}", path.display()))
        })
    }

    fn read_lines(&self, name: &str) -> Result<Vec<String>> {
        let content = self.read(&self.path_of(name))?;
        Ok(parse_trimmed_lines(&content))
    }

    fn read_ignore_set(&self, name: &str) -> Result<IgnoreSet> {
        Ok(self.read_lines(name)?.into_iter().collect())
    }

    fn read_map(&self, name: &str) -> Result<PathKeyedMap> {
        let path = self.path_of(name);
        let content = self.read(&path)?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        serde_json::from_str(content)
            .map_err(|source| IndentGuardError::ConfigParse { path, source })
    }

    fn read_optional_map(&self, name: &str) -> Result<PathKeyedMap> {
        if self.fs.is_file(&self.path_of(name)) {
            self.read_map(name)
        } else {
            tracing::debug!(file = name, "optional mapping absent, using defaults");
            Ok(PathKeyedMap::default())
        }
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<ScanConfig> {
        let missing = self.missing_files();
        if !missing.is_empty() {
            return Err(IndentGuardError::ConfigMissing { paths: missing });
        }

        let config = ScanConfig {
            ignored_full_paths: self.read_ignore_set(IGNORED_FULL_PATHS_FILE)?,
            ignored_names: self.read_ignore_set(IGNORED_NAMES_FILE)?,
            ignored_extensions: self.read_ignore_set(IGNORED_EXTENSIONS_FILE)?,
            scan_roots: self.read_lines(SCAN_ROOTS_FILE)?,
            encoding_map: self.read_map(ENCODING_MAP_FILE)?,
            indent_mode_map: self.read_optional_map(INDENT_MODE_MAP_FILE)?,
        };

        tracing::info!(
            config_dir = %self.config_dir.display(),
            roots = config.scan_roots.len(),
            "configuration loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
