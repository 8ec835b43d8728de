use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::path_utils::fold_case;

pub const DEFAULT_ENCODING: &str = "utf-8";

/// Indentation policy applied to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndentMode {
    /// Indentation must be at least 4 spaces and a multiple of 4.
    #[default]
    Strict,
    /// Indentation must be at least 4 spaces.
    Flex,
}

impl IndentMode {
    /// Parse a configured mode name. Unknown names yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "flex" => Some(Self::Flex),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Flex => "flex",
        }
    }
}

impl std::fmt::Display for IndentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive set of exact-match ignore entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    entries: HashSet<String>,
}

impl IgnoreSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: &str) {
        self.entries.insert(fold_case(entry));
    }

    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        !candidate.is_empty() && self.entries.contains(&fold_case(candidate))
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

impl<S: AsRef<str>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for entry in iter {
            set.insert(entry.as_ref());
        }
        set
    }
}

/// String map keyed by an exact full path or a dotted extension.
///
/// Keys are matched exactly as written in the mapping file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PathKeyedMap {
    entries: HashMap<String, String>,
}

impl PathKeyedMap {
    #[must_use]
    pub const fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Look up by full path first, then by extension.
    #[must_use]
    pub fn lookup(&self, path: &Path, extension: Option<&str>) -> Option<&str> {
        self.entries
            .get(path.to_string_lossy().as_ref())
            .or_else(|| extension.and_then(|ext| self.entries.get(ext)))
            .map(String::as_str)
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

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PathKeyedMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Everything a scan needs to know, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanConfig {
    pub ignored_full_paths: IgnoreSet,
    pub ignored_names: IgnoreSet,
    pub ignored_extensions: IgnoreSet,
    pub scan_roots: Vec<String>,
    pub encoding_map: PathKeyedMap,
    pub indent_mode_map: PathKeyedMap,
}

impl ScanConfig {
    /// Encoding name for a file: full path, then extension, then UTF-8.
    #[must_use]
    pub fn encoding_for(&self, path: &Path, extension: Option<&str>) -> String {
        self.encoding_map
            .lookup(path, extension)
            .unwrap_or(DEFAULT_ENCODING)
            .to_string()
    }

    /// Indent mode for a file: full path, then extension, then strict.
    #[must_use]
    pub fn indent_mode_for(&self, path: &Path, extension: Option<&str>) -> IndentMode {
        let Some(value) = self.indent_mode_map.lookup(path, extension) else {
            return IndentMode::Strict;
        };
        IndentMode::parse(value).unwrap_or_else(|| {
            tracing::warn!(
                path = %path.display(),
                value,
                "unknown indent mode, falling back to strict"
            );
            IndentMode::Strict
        })
    }
}
