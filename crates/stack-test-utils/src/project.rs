//! [`TestProject`] builder for context resolution scenarios.

use serde_json::Value;
use stack_fs::DocumentLoader;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary project root with helpers for writing context documents.
///
/// # Example
///
/// ```rust,no_run
/// use serde_json::json;
/// use stack_test_utils::TestProject;
///
/// let project = TestProject::new()
///     .with_document("config/shared.json", &json!({"domainName": "example.com"}))
///     .with_document("env/prd.json", &json!({"api": {"timeout": 60}}));
///
/// let loader = project.loader();
/// assert!(loader.exists("env/prd.json"));
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty project root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestProject::new: failed to create temp dir"),
        }
    }

    /// Return the project root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `value` as pretty JSON to `path` (relative to the root),
    /// creating parent directories.
    pub fn write_document(&self, path: &str, value: &Value) {
        let content = serde_json::to_string_pretty(value)
            .expect("TestProject::write_document: value must serialize");
        self.write_raw(path, &content);
    }

    /// Write raw text to `path` (relative to the root).
    pub fn write_raw(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Could not create directory {}: {e}", parent.display())
            });
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", full_path.display()));
    }

    /// Builder form of [`write_document`](Self::write_document).
    pub fn with_document(self, path: &str, value: &Value) -> Self {
        self.write_document(path, value);
        self
    }

    /// Builder form of [`write_raw`](Self::write_raw).
    pub fn with_raw(self, path: &str, content: &str) -> Self {
        self.write_raw(path, content);
        self
    }

    /// A document loader rooted at the canonical project root.
    pub fn loader(&self) -> DocumentLoader {
        DocumentLoader::canonical(self.root())
            .expect("TestProject::loader: project root must exist")
    }
}
