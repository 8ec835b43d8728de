/// Parse a list file: one entry per line, trimmed, blank lines dropped.
#[must_use]
pub fn parse_trimmed_lines(content: &str) -> Vec<String> {
    content
        .strip_prefix('\u{feff}')
        .unwrap_or(content)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
