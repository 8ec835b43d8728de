//! User-facing console messages.
//!
//! A message carries a semantic severity; the sink decides how it looks.

use std::cell::RefCell;
use std::io::{IsTerminal, Write};

use super::{ColorMode, ansi};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledMessage {
    pub severity: Severity,
    pub text: String,
}

impl StyledMessage {
    #[must_use]
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }

    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }
}

/// Destination for user-facing messages.
pub trait MessageSink {
    fn emit(&self, message: &StyledMessage);
}

/// Writes messages to the terminal: info and warnings to stdout, errors to stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    stdout_colors: bool,
    stderr_colors: bool,
    quiet: bool,
}

impl ConsoleSink {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            stdout_colors: Self::should_use_colors(mode, std::io::stdout().is_terminal()),
            stderr_colors: Self::should_use_colors(mode, std::io::stderr().is_terminal()),
            quiet: false,
        }
    }

    /// Suppress `Info` messages.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn should_use_colors(mode: ColorMode, is_terminal: bool) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            // Respect NO_COLOR environment variable (https://no-color.org/)
            ColorMode::Auto => std::env::var_os("NO_COLOR").is_none() && is_terminal,
        }
    }

    #[must_use]
    pub fn paint(message: &StyledMessage, use_colors: bool) -> String {
        let color = match message.severity {
            Severity::Info => None,
            Severity::Warning => Some(ansi::YELLOW),
            Severity::Error => Some(ansi::RED),
        };
        match color {
            Some(color) if use_colors => format!("{color}{}{}", message.text, ansi::RESET),
            _ => message.text.clone(),
        }
    }
}

impl MessageSink for ConsoleSink {
    fn emit(&self, message: &StyledMessage) {
        match message.severity {
            Severity::Info if self.quiet => {}
            Severity::Info | Severity::Warning => {
                let text = Self::paint(message, self.stdout_colors);
                writeln!(std::io::stdout(), "{text}").ok();
            }
            Severity::Error => {
                let text = Self::paint(message, self.stderr_colors);
                writeln!(std::io::stderr(), "{text}").ok();
            }
        }
    }
}

/// Collects messages in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: RefCell<Vec<StyledMessage>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<StyledMessage> {
        self.messages.borrow().clone()
    }

    #[must_use]
    pub fn texts(&self, severity: Severity) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|m| m.severity == severity)
            .map(|m| m.text.clone())
            .collect()
    }
}

impl MessageSink for MemorySink {
    fn emit(&self, message: &StyledMessage) {
        self.messages.borrow_mut().push(message.clone());
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
