//! Conventional project-relative locations for context documents.

use std::path::Path;

/// Well-known paths inside a stack project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextPath {
    /// Directory holding one override document per stage (`env`)
    StageDir,
    /// The deployment manifest whose `context` seeds the store (`cdk.json`)
    Manifest,
}

impl ContextPath {
    /// Get the string representation of the path.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StageDir => "env",
            Self::Manifest => "cdk.json",
        }
    }
}

impl AsRef<Path> for ContextPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ContextPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ContextPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
