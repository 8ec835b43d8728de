use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "indent-guard")]
#[command(author, version, about = "Indentation guard - enforce space-only, four-column indentation")]
#[command(long_about = "Walks the configured scan roots, skips ignored entries, decodes each file \
    with its configured encoding and reports the first indentation problem per file.\n\n\
    Exit codes:\n  \
    0 - No issues found\n  \
    1 - Indentation issues or file errors found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Directory holding ignore lists, scanRoots.txt and the JSON maps
    /// (defaults to the executable's directory)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Directory the report is written to (defaults to the desktop)
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Scan these roots instead of the ones listed in scanRoots.txt
    #[arg(long = "root")]
    pub roots: Vec<String>,

    /// Exit successfully even when issues were found
    #[arg(long)]
    pub warn_only: bool,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
