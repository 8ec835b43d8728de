use std::cmp::Ordering;
use std::path::Path;

/// Normalize a string for case-insensitive comparison.
#[must_use]
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive ordering with an ordinal tie-break.
///
/// Characters are compared after upper-casing, so `_` and the other
/// punctuation between `Z` and `a` sort after letters. Strings that differ only in case still get a stable, total order so that
/// sorted output never depends on filesystem enumeration order.
#[must_use]
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_uppercase)
        .cmp(b.chars().flat_map(char::to_uppercase));
    folded.then_with(|| a.cmp(b))
}

/// Compare two paths by their full string form, ignoring case.
#[must_use]
pub fn cmp_paths_ignore_case(a: &Path, b: &Path) -> Ordering {
    cmp_ignore_case(&a.to_string_lossy(), &b.to_string_lossy())
}

/// Extension of a file name including the leading dot.
///
/// Dot-files count as pure extension (`.gitignore` -> `.gitignore`); a name
/// ending in a dot or without any dot has no extension.
#[must_use]
pub fn dotted_extension(file_name: &str) -> Option<&str> {
    let pos = file_name.rfind('.')?;
    if pos + 1 == file_name.len() {
        return None;
    }
    Some(&file_name[pos..])
}

/// Bare file name of a path as a string, or empty when there is none.
#[must_use]
pub fn file_name_str(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
