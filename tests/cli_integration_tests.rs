mod common;

use predicates::prelude::*;

use common::TestFixture;

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn missing_config_lists_every_file_and_writes_no_report() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Required file missing:").count(5))
        .stderr(predicate::str::contains("scanRoots.txt"))
        .stderr(predicate::str::contains("encodingMap.json"));

    assert!(fixture.reports().is_empty());
}

#[test]
fn malformed_encoding_map_is_fatal() {
    let fixture = TestFixture::with_config();
    fixture.write_config("encodingMap.json", "{ \".txt\": ");

    fixture
        .command()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error: Failed to parse"));

    assert!(fixture.reports().is_empty());
}

// ============================================================================
// Scanning
// ============================================================================

#[test]
fn clean_tree_reports_no_issues() {
    let fixture = TestFixture::with_config();
    fixture.create_file("src/main.rs", "fn main() {\n    run();\n}\n");

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("No indentation issues found."))
        .stdout(predicate::str::contains("Report written to"));

    let report = fixture.single_report();
    assert!(report.contains(&format!(
        "{} (encoding: utf-8)",
        fixture.tree_path("src/main.rs")
    )));
    assert!(report.contains("[Detected Extensions]\n.rs\n"));
    assert!(!report.contains("[Errors]"));
}

#[test]
fn violations_are_printed_and_reported() {
    let fixture = TestFixture::with_config();
    fixture.create_file("tabs.c", "int main() {\n\treturn 0;\n}\n");
    fixture.create_file("odd.c", "int main() {\n      return 0;\n}\n");
    fixture.create_file("blank.c", "int x;\n    \n");

    fixture
        .command()
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Non-ASCII-space char (U+0009) used for indentation at line 2.",
        ))
        .stdout(predicate::str::contains(
            "Indentation not a multiple of 4 spaces at line 2 (found 6 spaces).",
        ))
        .stdout(predicate::str::contains(
            "Line 2 contains only indentation and no visible characters.",
        ))
        .stdout(predicate::str::contains("3 file(s) with indentation issues."));

    let report = fixture.single_report();
    let issues = report
        .split("[Files with Issues]\n")
        .nth(1)
        .expect("issues section");
    let lines: Vec<&str> = issues.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with(&fixture.tree_path("blank.c")));
    assert!(lines[1].starts_with(&fixture.tree_path("odd.c")));
    assert!(lines[2].starts_with(&fixture.tree_path("tabs.c")));
}

#[test]
fn warn_only_exits_zero_with_issues() {
    let fixture = TestFixture::with_config();
    fixture.create_file("a.txt", "  two\n");

    fixture
        .command()
        .arg("--warn-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("(found 2 spaces)"));
}

#[test]
fn flex_mode_allows_non_multiple_indentation() {
    let fixture = TestFixture::with_config();
    fixture.write_config("indentModeMap.json", r#"{".md": "flex"}"#);
    fixture.create_file("notes.md", "- item\n      continued\n");

    fixture.command().assert().success();
}

#[test]
fn ignored_names_prune_whole_subtrees() {
    let fixture = TestFixture::with_config();
    fixture.write_config("ignoredNames.txt", "Vendor\n");
    fixture.write_config("ignoredExtensions.txt", ".PNG\n");
    fixture.create_file("vendor/lib/bad.c", "\tbad\n");
    fixture.create_file("logo.png", "\tbinary-ish\n");
    fixture.create_file("good.c", "ok\n");

    fixture.command().assert().success();

    let report = fixture.single_report();
    assert!(report.contains(&format!(
        "[Ignored by Name]\n{}\n",
        fixture.tree_path("vendor")
    )));
    assert!(report.contains(&format!(
        "[Ignored by Extension]\n{}\n",
        fixture.tree_path("logo.png")
    )));
    assert!(!report.contains("bad.c"));
}

#[test]
fn ignored_full_path_applies_to_files() {
    let fixture = TestFixture::with_config();
    fixture.write_config(
        "ignoredFullPaths.txt",
        &format!("{}\n", fixture.tree_path("legacy.c")),
    );
    fixture.create_file("legacy.c", "\told\n");

    fixture.command().assert().success();

    let report = fixture.single_report();
    assert!(report.contains(&format!(
        "[Ignored by Full Path]\n{}\n",
        fixture.tree_path("legacy.c")
    )));
}

#[test]
fn file_errors_are_isolated_and_reported() {
    let fixture = TestFixture::with_config();
    fixture.write_config("encodingMap.json", r#"{".dat": "not-an-encoding"}"#);
    fixture.create_file("a.dat", "data\n");
    fixture.create_bytes("b.txt", &[b'o', b'k', 0xff, b'\n']);
    fixture.create_file("c.txt", "    fine\n");

    fixture
        .command()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid encoding 'not-an-encoding'"))
        .stderr(predicate::str::contains("Failed to decode file"));

    let report = fixture.single_report();
    let errors = report.split("[Errors]\n").nth(1).expect("errors section");
    assert_eq!(errors.lines().count(), 2);
    assert!(report.contains(&format!(
        "{} (encoding: utf-8)",
        fixture.tree_path("c.txt")
    )));
    assert!(!report.contains(&format!("{} (encoding:", fixture.tree_path("a.dat"))));
}

#[test]
fn missing_root_is_skipped() {
    let fixture = TestFixture::with_config();
    let missing = fixture.path().join("gone").display().to_string();
    fixture.write_config(
        "scanRoots.txt",
        &format!("{missing}\n{}\n", fixture.tree().display()),
    );

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Root directory not found: {missing}"
        )));

    let report = fixture.single_report();
    assert!(!report.contains("gone"));
}

#[test]
fn root_option_overrides_configured_roots() {
    let fixture = TestFixture::with_config();
    fixture.create_file("bad.c", "\tbad\n");
    let other = fixture.path().join("other");
    std::fs::create_dir_all(&other).unwrap();
    std::fs::write(other.join("fine.c"), "    fine\n").unwrap();

    fixture.command().arg("--root").arg(&other).assert().success();
}

#[test]
fn quiet_suppresses_summary_but_not_violations() {
    let fixture = TestFixture::with_config();
    fixture.create_file("a.txt", "\tx\n");

    fixture
        .command()
        .arg("--quiet")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("U+0009"))
        .stdout(predicate::str::contains("Report written to").not());
}

// ============================================================================
// Report determinism
// ============================================================================

#[test]
fn repeated_runs_produce_identical_reports() {
    let fixture = TestFixture::with_config();
    fixture.create_file("B/one.py", "def f():\n   pass\n");
    fixture.create_file("a/two.py", "def g():\n    pass\n");
    fixture.create_file("Zed.py", "\tx\n");

    fixture.command().assert().code(1);
    let first = fixture.single_report();
    for report in fixture.reports() {
        std::fs::remove_file(report).unwrap();
    }

    fixture.command().assert().code(1);
    let second = fixture.single_report();

    assert_eq!(first, second);
}

#[test]
fn report_file_name_has_utc_timestamp() {
    let fixture = TestFixture::with_config();

    fixture.command().assert().success();

    let reports = fixture.reports();
    assert_eq!(reports.len(), 1);
    let name = reports[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("indentChecker-"));
    assert!(name.ends_with("Z.log"));
    // indentChecker-YYYYMMDDTHHMMSSZ.log
    assert_eq!(name.len(), "indentChecker-".len() + 16 + ".log".len());
    assert_eq!(&name["indentChecker-".len() + 8..="indentChecker-".len() + 8], "T");
}
