//! Encoding resolution and strict decoding of scanned files.

use std::path::Path;

use encoding_rs::Encoding;

use crate::config::ScanConfig;
use crate::error::{IndentGuardError, Result};

/// Resolves encoding names and decodes file contents.
pub trait TextDecoder {
    /// Decode the file at `path` using the configured encoding name.
    ///
    /// # Errors
    /// Returns `InvalidEncoding` for an unknown name, `FileRead` for I/O
    /// failures and `Decode` for malformed byte sequences.
    fn decode_file(&self, path: &Path, encoding_name: &str) -> Result<Vec<String>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EncodingResolver;

impl EncodingResolver {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Encoding name for a file: exact path key, then extension key, then `utf-8`.
    #[must_use]
    pub fn resolve(path: &Path, extension: Option<&str>, config: &ScanConfig) -> String {
        config.encoding_for(path, extension)
    }

    /// Look up an encoding by label.
    ///
    /// # Errors
    /// Returns `InvalidEncoding` when the label is not recognized.
    pub fn encoding_for_label(path: &Path, encoding_name: &str) -> Result<&'static Encoding> {
        Encoding::for_label(encoding_name.trim().as_bytes()).ok_or_else(|| {
            IndentGuardError::InvalidEncoding {
                path: path.to_path_buf(),
                encoding: encoding_name.to_string(),
            }
        })
    }

    /// Strictly decode `bytes`; a leading byte-order mark wins over `encoding`.
    ///
    /// Returns `None` when the input contains a malformed sequence.
    #[must_use]
    pub fn decode_bytes(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
        let (encoding, body) = match Encoding::for_bom(bytes) {
            Some((bom_encoding, bom_len)) => (bom_encoding, &bytes[bom_len..]),
            None => (encoding, bytes),
        };
        encoding
            .decode_without_bom_handling_and_without_replacement(body)
            .map(std::borrow::Cow::into_owned)
    }
}

impl TextDecoder for EncodingResolver {
    fn decode_file(&self, path: &Path, encoding_name: &str) -> Result<Vec<String>> {
        let encoding = Self::encoding_for_label(path, encoding_name)?;

        let bytes = std::fs::read(path).map_err(|source| IndentGuardError::FileRead {
            path: path.to_path_buf(),
            encoding: encoding_name.to_string(),
            source,
        })?;

        let text =
            Self::decode_bytes(&bytes, encoding).ok_or_else(|| IndentGuardError::Decode {
                path: path.to_path_buf(),
                encoding: encoding_name.to_string(),
            })?;

        Ok(split_lines(&text))
    }
}

/// Split text on `\r\n`, `\n` or `\r`, dropping terminators.
///
/// A trailing terminator does not produce an empty final line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while let Some(pos) = rest.find(['\r', '\n']) {
        lines.push(rest[..pos].to_string());
        let terminator_len = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + terminator_len..];
    }

    if !rest.is_empty() {
        lines.push(rest.to_string());
    }
    lines
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
