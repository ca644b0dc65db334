//! Error types for stack-fs

use std::path::PathBuf;

/// Result type for stack-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading context documents
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An explicitly named document does not exist
    #[error("Context document unavailable at {path}")]
    MissingDocument { path: PathBuf },

    /// A document exists but could not be parsed into a mapping
    #[error("Malformed {format} context document at {path}: {message}")]
    MalformedDocument {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported context document format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(
        path: impl Into<PathBuf>,
        format: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            format: format.into(),
            message: message.into(),
        }
    }
}
