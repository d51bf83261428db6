//! Error types for qa-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LoadError.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that abort a content load.
///
/// A missing content directory is not one of them: it is reported through
/// [`crate::Diagnostic::MissingDirectory`] and yields an empty list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to list {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8")]
    Encoding { path: PathBuf },

    #[error("invalid front-matter in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },
}

/// Errors that can occur while splitting front-matter from a document.
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("unsupported front-matter language: {0}")]
    UnsupportedLanguage(String),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
