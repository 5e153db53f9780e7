// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilescopeError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid snapshot JSON in {path}: {source}")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("Invalid config in {path}: {source}")]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("Generic error: {0}")]
    Other(String),
}

impl FilescopeError {
    /// True when the input itself was unreadable as data, as opposed to an
    /// environment failure.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Json { .. } | Self::Config { .. })
    }
}

pub type Result<T> = std::result::Result<T, FilescopeError>;

// Allow `?` on std::io::Error by converting to FilescopeError::Io with unknown path.
impl From<std::io::Error> for FilescopeError {
    fn from(source: std::io::Error) -> Self {
        FilescopeError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
