use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndentGuardError {
    #[error("Required configuration missing: {}", display_paths(.paths))]
    ConfigMissing { paths: Vec<PathBuf> },

    #[error("Failed to parse {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid encoding '{encoding}' for file '{}'", .path.display())]
    InvalidEncoding { path: PathBuf, encoding: String },

    #[error("Failed to read file '{}' with encoding '{encoding}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        encoding: String,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Failed to decode file '{}' with encoding '{encoding}': malformed byte sequence",
        .path.display()
    )]
    Decode { path: PathBuf, encoding: String },

    #[error("Failed to write report: {}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IndentGuardError {
    /// Whether the error is confined to a single scanned file.
    ///
    /// File-scoped errors are recorded and the walk continues; everything else
    /// aborts the run.
    #[must_use]
    pub const fn is_file_scoped(&self) -> bool {
        matches!(
            self,
            Self::InvalidEncoding { .. } | Self::FileRead { .. } | Self::Decode { .. }
        )
    }

    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::ConfigMissing { .. } => "ConfigMissing",
            Self::ConfigParse { .. } => "ConfigParse",
            Self::Config(_) => "Config",
            Self::InvalidEncoding { .. } => "InvalidEncoding",
            Self::FileRead { .. } | Self::Decode { .. } => "FileRead",
            Self::ReportWrite { .. } => "ReportWrite",
            Self::Io(_) => "IO",
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, IndentGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
