//! Format-agnostic loading of context documents

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, NormalizedPath, Result, io};

/// A parsed context document: the top-level key/value mapping.
pub type Document = Map<String, Value>;

/// Structured document grammars understood by the loader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    /// The canonical extension written after the stage name.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
        }
    }

    fn parse(&self, content: &str) -> std::result::Result<Value, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str::<toml::Value>(content)
                .map_err(|e| e.to_string())
                .and_then(toml_to_value),
        }
    }
}

/// Convert a TOML value into a context value.
///
/// Datetimes become their RFC 3339 text, so they merge as scalars.
fn toml_to_value(value: toml::Value) -> std::result::Result<Value, String> {
    Ok(match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .ok_or_else(|| format!("float {f} has no context value"))?,
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(toml_to_value)
                .collect::<std::result::Result<_, _>>()?,
        ),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| Ok((key, toml_to_value(value)?)))
                .collect::<std::result::Result<_, String>>()?,
        ),
    })
}

/// Loads context documents from paths relative to a project root.
///
/// The loader keeps no cache: every call reads the file again.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    root: NormalizedPath,
}

impl DocumentLoader {
    /// Create a loader rooted at `root`, used as given.
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }

    /// Create a loader rooted at the canonical form of `root`.
    ///
    /// Fails if `root` does not exist.
    pub fn canonical(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let canonical = dunce::canonicalize(root).map_err(|e| Error::io(root, e))?;
        Ok(Self::new(canonical))
    }

    /// The project root documents are resolved against.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Resolve a document path against the project root.
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve(&self, path: &str) -> NormalizedPath {
        let candidate = NormalizedPath::new(path);
        if candidate.is_absolute() {
            candidate
        } else {
            self.root.join(path)
        }
    }

    /// Whether `path` resolves to an existing file.
    pub fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }

    /// Load and parse the document at `path`.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingDocument`] if no file exists at the resolved path
    /// - [`Error::UnsupportedFormat`] for an unknown extension
    /// - [`Error::MalformedDocument`] if the content does not parse, or the
    ///   top level is not a mapping
    pub fn load(&self, path: &str) -> Result<Document> {
        let resolved = self.resolve(path);
        if !resolved.is_file() {
            return Err(Error::MissingDocument {
                path: resolved.to_native(),
            });
        }

        let format = DocumentFormat::from_extension(resolved.extension().unwrap_or(""))?;
        let content = io::read_text(&resolved)?;
        tracing::debug!(path = %resolved, format = format.label(), "Loading context document");

        let value = format
            .parse(&content)
            .map_err(|message| Error::malformed(resolved.to_native(), format.label(), message))?;

        match value {
            Value::Object(map) => Ok(map),
            other => Err(Error::malformed(
                resolved.to_native(),
                format.label(),
                format!("top level must be a mapping, found {}", value_kind(&other)),
            )),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
