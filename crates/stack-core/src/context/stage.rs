//! Deployment stages and the stage → document path mapping

use stack_fs::{DocumentFormat, NormalizedPath};

/// Broad classification of a stage name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    Development,
    Test,
    Uat,
    Production,
    /// A stage name outside the well-known set
    Other,
}

impl StageKind {
    /// Classify a stage name (case-insensitive).
    pub fn from_name(stage: &str) -> Self {
        match stage.to_ascii_lowercase().as_str() {
            "dev" | "development" => Self::Development,
            "tst" | "test" => Self::Test,
            "uat" | "staging" => Self::Uat,
            "prd" | "prod" | "production" => Self::Production,
            _ => Self::Other,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Maps a stage name to the project-relative path of its override document.
///
/// Closures of the shape `Fn(&str, &str) -> String` implement this trait, so
/// tests can swap the mapping without a new type.
pub trait StagePathResolver {
    /// Path of the stage document for `stage` under `stage_context_path`.
    fn stage_document(&self, stage_context_path: &str, stage: &str) -> String;
}

impl<F> StagePathResolver for F
where
    F: Fn(&str, &str) -> String,
{
    fn stage_document(&self, stage_context_path: &str, stage: &str) -> String {
        self(stage_context_path, stage)
    }
}

/// `{stage_context_path}/{stage}.{extension}`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionalStagePath {
    format: DocumentFormat,
}

impl ConventionalStagePath {
    pub fn new(format: DocumentFormat) -> Self {
        Self { format }
    }
}

impl StagePathResolver for ConventionalStagePath {
    fn stage_document(&self, stage_context_path: &str, stage: &str) -> String {
        NormalizedPath::new(stage_context_path)
            .join(&format!("{}.{}", stage, self.format.extension()))
            .to_string()
    }
}
