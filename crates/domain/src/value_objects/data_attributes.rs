//! `data-*` attributes attached to the editor tag.
//!
//! Values are JSON so callers can pass nested structures; nested objects are
//! deep-merged, everything else is replaced. On the wire a string value is
//! emitted as-is and any other value as its compact JSON text.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::EditorFeatures;

/// Prefix for every editor configuration key in the data attributes.
pub const BOOTSY_NAMESPACE: &str = "bootsy-";

/// Ordered map of data attribute name (without the `data-` prefix) to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataAttributes(Map<String, Value>);

impl DataAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor flags as `<prefix><flag>` entries.
    pub fn namespaced(prefix: &str, features: &EditorFeatures) -> Self {
        features
            .iter()
            .map(|(key, enabled)| (format!("{}{}", prefix, key), Value::Bool(enabled)))
            .collect()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Merge `other` into `self`. Where both sides hold an object the merge
    /// recurses; otherwise `other` wins.
    pub fn deep_merge(&mut self, other: DataAttributes) {
        for (key, incoming) in other.0 {
            match self.0.get_mut(&key) {
                Some(existing) => deep_merge_value(existing, incoming),
                None => {
                    self.0.insert(key, incoming);
                }
            }
        }
    }

    /// `(attribute name, attribute value)` pairs ready for a tag, `null`
    /// entries dropped.
    pub fn html_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| (format!("data-{}", key), render_value(value)))
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for DataAttributes {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

fn deep_merge_value(target: &mut Value, incoming: Value) {
    match (target, incoming) {
        (Value::Object(existing), Value::Object(incoming)) => {
            for (key, value) in incoming {
                match existing.get_mut(&key) {
                    Some(slot) => deep_merge_value(slot, value),
                    None => {
                        existing.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
