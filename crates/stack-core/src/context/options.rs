//! Resolver settings

use serde::{Deserialize, Serialize};
use stack_fs::{ContextPath, DocumentFormat};

fn default_stage_context_path() -> String {
    ContextPath::StageDir.as_str().to_string()
}

/// Settings for a [`ContextResolver`](super::ContextResolver).
///
/// Deserializes from camelCase keys so it can be read from the same
/// documents that carry the context itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverOptions {
    /// Stage document directory used when `stageContextPath` is not set
    #[serde(default = "default_stage_context_path")]
    pub default_stage_context_path: String,

    /// Grammar (and extension) of stage documents
    #[serde(default)]
    pub document_format: DocumentFormat,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            default_stage_context_path: default_stage_context_path(),
            document_format: DocumentFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_env_directory_and_json() {
        let options = ResolverOptions::default();
        assert_eq!(options.default_stage_context_path, "env");
        assert_eq!(options.document_format, DocumentFormat::Json);
    }

    #[test]
    fn deserializes_partial_camel_case() {
        let options: ResolverOptions =
            serde_json::from_value(serde_json::json!({"documentFormat": "yaml"})).unwrap();
        assert_eq!(options.default_stage_context_path, "env");
        assert_eq!(options.document_format, DocumentFormat::Yaml);
    }
}
