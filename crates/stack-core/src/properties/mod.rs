//! Stack property resolution
//!
//! After context resolution, a stack reads a fixed set of keys back out of
//! the store. The result is a read-only [`ResolvedProperties`] snapshot that
//! is handed to every construct in the stack.

mod kind;
mod typed;

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::context::ContextStore;
use crate::{Error, Result};

pub use kind::{COMMON_PROPERTY_KEYS, StackKind};
pub use typed::{AwsStackProps, AzureStackProps, CloudflareStackProps, CommonStackProps};

/// Snapshot of the properties a stack declared, read from its context.
///
/// Declared keys that were absent from the store map to `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedProperties {
    values: BTreeMap<String, Option<Value>>,
}

impl ResolvedProperties {
    /// Value of a declared key, if the store held one.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key).and_then(Option::as_ref)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Whether `key` was declared, present or not.
    pub fn is_declared(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Declared keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Declared keys the store did not hold.
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| key.as_str())
    }

    /// The present properties as one JSON mapping.
    pub fn to_value(&self) -> Value {
        let present: Map<String, Value> = self
            .values
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key.clone(), v.clone())))
            .collect();
        Value::Object(present)
    }

    /// Convert the present properties into a typed properties struct.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.to_value()).map_err(|source| Error::Properties {
            target: std::any::type_name::<T>(),
            source,
        })
    }
}

/// Read `keys` from `store` into a snapshot.
///
/// Pure: the store is not modified and no defaults are substituted.
pub fn resolve_properties<'a, I>(store: &ContextStore, keys: I) -> ResolvedProperties
where
    I: IntoIterator<Item = &'a str>,
{
    let values = keys
        .into_iter()
        .map(|key| (key.to_string(), store.get(key).cloned()))
        .collect();
    ResolvedProperties { values }
}
