use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No config file path: pass one explicitly or bind one with a previous write or load")]
    NoPath,

    #[error("A configuration file already exists at {0}")]
    AlreadyExists(PathBuf),

    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml_edit::TomlError,
    },

    #[error("{path} is not valid UTF-8 text")]
    InvalidEncoding { path: PathBuf },

    #[error("Type mismatch for '{key}': expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Section '{section}' does not declare a field named '{field}'")]
    UnknownField { section: String, field: String },

    #[error("Failed to access {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("No checkpoint to revert to, call .checkpoint() first")]
    NoCheckpoint,
}

impl ConfigError {
    /// True for failures that mean the file content itself is unusable: it
    /// is not text, does not parse, or holds a value of the wrong shape.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            ConfigError::ParseError { .. }
                | ConfigError::InvalidEncoding { .. }
                | ConfigError::TypeMismatch { .. }
        )
    }
}
