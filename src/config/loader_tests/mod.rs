use std::path::{Path, PathBuf};

use super::*;
use crate::config::IndentMode;

mod mock_fs;

use mock_fs::MockFileSystem;

const DIR: &str = "/opt/indent-guard";

fn at(name: &str) -> PathBuf {
    Path::new(DIR).join(name)
}

fn complete_fs() -> MockFileSystem {
    MockFileSystem::new()
        .with_file(at(IGNORED_FULL_PATHS_FILE), "/src/generated\n")
        .with_file(at(IGNORED_NAMES_FILE), "  .git \n\nTarget\n")
        .with_file(at(IGNORED_EXTENSIONS_FILE), ".PNG\n.lock\n")
        .with_file(at(SCAN_ROOTS_FILE), "/src/b\n\n/src/A\n")
        .with_file(at(ENCODING_MAP_FILE), r#"{".txt": "shift_jis"}"#)
}

#[test]
fn loads_all_sources() {
    let loader = FileConfigLoader::with_fs(complete_fs(), DIR);
    let config = loader.load().unwrap();

    assert!(config.ignored_full_paths.contains("/SRC/generated"));
    assert!(config.ignored_names.contains("target"));
    assert!(config.ignored_names.contains(".git"));
    assert_eq!(config.ignored_names.len(), 2);
    assert!(config.ignored_extensions.contains(".png"));
    assert_eq!(config.scan_roots, vec!["/src/b", "/src/A"]);
    assert_eq!(
        config.encoding_for(Path::new("/src/x.txt"), Some(".txt")),
        "shift_jis"
    );
}

#[test]
fn missing_indent_mode_map_defaults_to_strict() {
    let loader = FileConfigLoader::with_fs(complete_fs(), DIR);
    let config = loader.load().unwrap();

    assert!(config.indent_mode_map.is_empty());
    assert_eq!(
        config.indent_mode_for(Path::new("/src/x.md"), Some(".md")),
        IndentMode::Strict
    );
}

#[test]
fn indent_mode_map_is_loaded_when_present() {
    let fs = complete_fs().with_file(
        at(INDENT_MODE_MAP_FILE),
        r#"{".md": "flex", "/src/a.md": "strict"}"#,
    );
    let config = FileConfigLoader::with_fs(fs, DIR).load().unwrap();

    assert_eq!(
        config.indent_mode_for(Path::new("/src/b.md"), Some(".md")),
        IndentMode::Flex
    );
    assert_eq!(
        config.indent_mode_for(Path::new("/src/a.md"), Some(".md")),
        IndentMode::Strict
    );
}

#[test]
fn every_missing_required_file_is_reported() {
    let fs = MockFileSystem::new().with_file(at(IGNORED_NAMES_FILE), "");
    let err = FileConfigLoader::with_fs(fs, DIR).load().unwrap_err();

    let IndentGuardError::ConfigMissing { paths } = &err else {
        panic!("Expected ConfigMissing, got {err:?}");
    };
    assert_eq!(paths.len(), 4);
    assert!(paths.contains(&at(SCAN_ROOTS_FILE)));
    assert!(paths.contains(&at(ENCODING_MAP_FILE)));
    assert!(!paths.contains(&at(IGNORED_NAMES_FILE)));
}

#[test]
fn malformed_encoding_map_is_a_parse_error() {
    let fs = complete_fs().with_file(at(ENCODING_MAP_FILE), "{ not json");
    let err = FileConfigLoader::with_fs(fs, DIR).load().unwrap_err();

    assert!(matches!(err, IndentGuardError::ConfigParse { .. }));
    assert!(err.to_string().contains(ENCODING_MAP_FILE));
}

#[test]
fn non_string_map_values_are_rejected() {
    let fs = complete_fs().with_file(at(ENCODING_MAP_FILE), r#"{".txt": 5}"#);
    let err = FileConfigLoader::with_fs(fs, DIR).load().unwrap_err();

    assert!(matches!(err, IndentGuardError::ConfigParse { .. }));
}

#[test]
fn encoding_map_with_bom_parses() {
    let fs = complete_fs().with_file(at(ENCODING_MAP_FILE), "\u{feff}{\".c\": \"windows-1252\"}");
    let config = FileConfigLoader::with_fs(fs, DIR).load().unwrap();

    assert_eq!(config.encoding_map.len(), 1);
}

#[test]
fn config_dir_is_exposed() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new(), DIR);
    assert_eq!(loader.config_dir(), Path::new(DIR));
}
