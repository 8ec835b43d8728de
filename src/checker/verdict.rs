use std::fmt;

/// Outcome of validating a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineVerdict {
    Ok,
    /// The line is non-empty and consists only of whitespace.
    BlankWithIndentation,
    /// The indentation contains a character other than U+0020.
    ForeignIndentChar(char),
    /// Fewer than four leading spaces.
    InsufficientIndent(usize),
    /// Leading spaces not a multiple of four (strict mode only).
    NonMultipleIndent(usize),
}

impl LineVerdict {
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// The first offending line of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// 1-based line number.
    pub line: usize,
    pub verdict: LineVerdict,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line;
        match self.verdict {
            LineVerdict::Ok => write!(f, "Line {line} is correctly indented."),
            LineVerdict::BlankWithIndentation => write!(
                f,
                "Line {line} contains only indentation and no visible characters."
            ),
            LineVerdict::ForeignIndentChar(c) => write!(
                f,
                "Non-ASCII-space char (U+{:04X}) used for indentation at line {line}.",
                u32::from(c)
            ),
            LineVerdict::InsufficientIndent(found) => write!(
                f,
                "Indentation less than 4 spaces at line {line} (found {found} spaces)."
            ),
            LineVerdict::NonMultipleIndent(found) => write!(
                f,
                "Indentation not a multiple of 4 spaces at line {line} (found {found} spaces)."
            ),
        }
    }
}
