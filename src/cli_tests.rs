use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn defaults() {
    let cli = Cli::try_parse_from(["indent-guard"]).unwrap();
    assert!(cli.config_dir.is_none());
    assert!(cli.report_dir.is_none());
    assert!(cli.roots.is_empty());
    assert!(!cli.warn_only);
    assert_eq!(cli.verbose, 0);
    assert!(matches!(cli.color, ColorChoice::Auto));
}

#[test]
fn parses_all_options() {
    let cli = Cli::try_parse_from([
        "indent-guard",
        "--config-dir",
        "/etc/ig",
        "--report-dir",
        "/tmp/reports",
        "--root",
        "/src/a",
        "--root",
        "/src/b",
        "--warn-only",
        "-vv",
        "--quiet",
        "--color",
        "never",
    ])
    .unwrap();

    assert_eq!(cli.config_dir, Some(PathBuf::from("/etc/ig")));
    assert_eq!(cli.report_dir, Some(PathBuf::from("/tmp/reports")));
    assert_eq!(cli.roots, vec!["/src/a", "/src/b"]);
    assert!(cli.warn_only);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert_eq!(ColorMode::from(cli.color), ColorMode::Never);
}

#[test]
fn rejects_unknown_color() {
    assert!(Cli::try_parse_from(["indent-guard", "--color", "sometimes"]).is_err());
}
