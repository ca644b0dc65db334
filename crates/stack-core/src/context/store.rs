//! The context store read by every construct in a stack

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use stack_fs::DocumentLoader;

use crate::{Error, Result};

/// Key used by a deployment manifest to carry its initial context
const MANIFEST_CONTEXT_KEY: &str = "context";

/// Key/value context owned by a single stack.
///
/// The store is seeded once by the caller, mutated in place while context
/// resolution runs, and only read afterwards. Keys are never removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ContextStore {
    values: BTreeMap<String, Value>,
}

impl ContextStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from a mapping value.
    ///
    /// `null` seeds an empty store; any other non-mapping value is rejected.
    pub fn from_value(seed: Value) -> Result<Self> {
        match seed {
            Value::Object(map) => Ok(Self {
                values: map.into_iter().collect(),
            }),
            Value::Null => Ok(Self::new()),
            other => Err(Error::InvalidSeed {
                found: shape_of(&other).to_string(),
            }),
        }
    }

    /// Seed a store from the `context` section of a deployment manifest.
    ///
    /// A manifest without a `context` section yields an empty store.
    pub fn seed_from_manifest(loader: &DocumentLoader, manifest_path: &str) -> Result<Self> {
        let mut manifest = loader.load(manifest_path)?;
        let seed = manifest.remove(MANIFEST_CONTEXT_KEY).unwrap_or(Value::Null);
        tracing::debug!(manifest = manifest_path, "Seeding context from manifest");
        Self::from_value(seed)
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get the value under `key` if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Resolve a dotted path (`api.timeout`) through nested mappings.
    ///
    /// The first segment names a top-level key; each further segment indexes
    /// into a mapping. Returns `None` as soon as a segment is missing or the
    /// current value is not a mapping.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate over keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render the whole store as a single JSON mapping.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.values
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.values.get_mut(key)
    }
}

pub(crate) fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
