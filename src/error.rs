// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("corpus root is unreadable: {source} (path: {path})")]
    RootUnreadable {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("malformed metadata block in {path}: {message}")]
    Frontmatter { path: PathBuf, message: String },

    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("inconsistent graph report: {0}")]
    InconsistentReport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

}

pub type Result<T> = std::result::Result<T, VaultError>;

impl VaultError {
    /// Attaches a path to an I/O error.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}
