//! Error types for stack-core

/// Result type for stack-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving stack context
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A control key holds a value of the wrong shape
    #[error("Context key `{key}` must be {expected}")]
    InvalidContextKey { key: String, expected: String },

    /// The stage name cannot be used to select a stage document
    #[error("Invalid stage {stage:?}: {reason}")]
    InvalidStage { stage: String, reason: String },

    /// The initial context is not a mapping
    #[error("Context seed must be a mapping, found {found}")]
    InvalidSeed { found: String },

    /// Properties could not be converted into the requested type
    #[error("Failed to build {target} from resolved properties: {source}")]
    Properties {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Document loading error from stack-fs
    #[error(transparent)]
    Fs(#[from] stack_fs::Error),
}

impl Error {
    pub(crate) fn invalid_key(key: &str, expected: &str) -> Self {
        Self::InvalidContextKey {
            key: key.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Whether this error is a named document that does not exist.
    pub fn is_missing_document(&self) -> bool {
        matches!(self, Self::Fs(stack_fs::Error::MissingDocument { .. }))
    }

    /// Whether this error is a document that failed to parse as a mapping.
    pub fn is_malformed_document(&self) -> bool {
        matches!(self, Self::Fs(stack_fs::Error::MalformedDocument { .. }))
    }
}
