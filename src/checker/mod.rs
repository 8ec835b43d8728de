mod indent;
mod verdict;

pub use indent::{classify_line, validate};
pub use verdict::{LineVerdict, Violation};

/// Minimum indentation width, in spaces.
pub const INDENT_WIDTH: usize = 4;
