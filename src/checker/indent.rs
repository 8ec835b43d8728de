use crate::config::IndentMode;

use super::INDENT_WIDTH;
use super::verdict::{LineVerdict, Violation};

/// Classify one line against the indentation policy.
///
/// Checks run in a fixed order: whitespace-only line, foreign indent
/// character, too few spaces, then (strict only) not a multiple of four.
#[must_use]
pub fn classify_line(line: &str, mode: IndentMode) -> LineVerdict {
    let run_len = line.chars().take_while(|c| c.is_whitespace()).count();
    if run_len == 0 {
        return LineVerdict::Ok;
    }

    // run_len > 0, so a line whose run covers it entirely is non-empty
    if line.chars().all(char::is_whitespace) {
        return LineVerdict::BlankWithIndentation;
    }

    if let Some(foreign) = line.chars().take(run_len).find(|&c| c != ' ') {
        return LineVerdict::ForeignIndentChar(foreign);
    }

    if run_len < INDENT_WIDTH {
        return LineVerdict::InsufficientIndent(run_len);
    }

    if mode == IndentMode::Strict && run_len % INDENT_WIDTH != 0 {
        return LineVerdict::NonMultipleIndent(run_len);
    }

    LineVerdict::Ok
}

/// Validate lines in order and return the first violation, if any.
pub fn validate<I, S>(lines: I, mode: IndentMode) -> Option<Violation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| Violation {
            line: idx + 1,
            verdict: classify_line(line.as_ref(), mode),
        })
        .find(|violation| !violation.verdict.is_ok())
}

#[cfg(test)]
#[path = "indent_tests.rs"]
mod tests;
