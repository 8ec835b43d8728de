mod filesystem;
mod lines;
mod loader;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use lines::parse_trimmed_lines;
pub use loader::{
    ConfigLoader, ENCODING_MAP_FILE, FileConfigLoader, IGNORED_EXTENSIONS_FILE,
    IGNORED_FULL_PATHS_FILE, IGNORED_NAMES_FILE, INDENT_MODE_MAP_FILE, REQUIRED_FILES,
    SCAN_ROOTS_FILE,
};
pub use model::{DEFAULT_ENCODING, IgnoreSet, IndentMode, PathKeyedMap, ScanConfig};

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
