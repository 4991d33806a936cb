//! Attributes - named heterogeneous values owned by entities and actions

pub mod keys;
mod value;

pub use value::AttrValue;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Case-sensitive mapping from attribute key to value
///
/// A missing key is `None`, never a default zero. Callers that want a
/// zero substitute ask for it explicitly with [`AttributeStore::int_or_zero`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeStore {
    values: HashMap<String, AttrValue>,
}

impl AttributeStore {
    /// Create an empty store
    pub fn new() -> Self {
        AttributeStore {
            values: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.values.get(key)
    }

    /// Set a value, replacing any previous one
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(AttrValue::as_int)
    }

    /// Numeric value of `key`, with absent or non-numeric values read as 0
    pub fn int_or_zero(&self, key: &str) -> i64 {
        numeric_or_zero(key, self.get(key))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Read an optional value as a number for additive combination
pub(crate) fn numeric_or_zero(key: &str, value: Option<&AttrValue>) -> i64 {
    match value {
        None => 0,
        Some(value) => value.as_int().unwrap_or_else(|| {
            tracing::warn!(key, %value, "ignoring non-numeric attribute");
            0
        }),
    }
}
