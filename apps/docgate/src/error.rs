//! Library error type.
//!
//! Only setup steps (configuration, discovery globs, CLI dates) return
//! `Err`. Problems found inside a document are reported as findings.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocgateError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse config file: {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Invalid date `{0}` (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DocgateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_file_read_keeps_source() {
        let err = DocgateError::FileRead {
            path: PathBuf::from("docs/a.md"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        assert_eq!(err.to_string(), "Failed to read file: docs/a.md");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_date_message() {
        let err = DocgateError::InvalidDate("2024-13-01".into());
        assert_eq!(
            err.to_string(),
            "Invalid date `2024-13-01` (expected YYYY-MM-DD)"
        );
    }
}
