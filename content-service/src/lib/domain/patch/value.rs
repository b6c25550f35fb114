use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Number;
use serde_json::Value;

/// A single untyped value from a patch body.
///
/// Arrays and objects collapse into `Structured`: no patchable field accepts
/// them, so their contents are never inspected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum PatchValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Structured,
}

impl PatchValue {
    /// Name of the JSON shape, for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            PatchValue::Null => "null",
            PatchValue::Bool(_) => "boolean",
            PatchValue::Number(_) => "number",
            PatchValue::String(_) => "string",
            PatchValue::Structured => "structured",
        }
    }
}

impl From<Value> for PatchValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => PatchValue::Null,
            Value::Bool(b) => PatchValue::Bool(b),
            Value::Number(n) => PatchValue::Number(n),
            Value::String(s) => PatchValue::String(s),
            Value::Array(_) | Value::Object(_) => PatchValue::Structured,
        }
    }
}

impl From<&str> for PatchValue {
    fn from(value: &str) -> Self {
        PatchValue::String(value.to_string())
    }
}

impl From<i64> for PatchValue {
    fn from(value: i64) -> Self {
        PatchValue::Number(value.into())
    }
}

impl From<i32> for PatchValue {
    fn from(value: i32) -> Self {
        PatchValue::Number(value.into())
    }
}

impl From<bool> for PatchValue {
    fn from(value: bool) -> Self {
        PatchValue::Bool(value)
    }
}

/// Sparse set of requested field changes, keyed by camelCase field name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PatchMap(HashMap<String, PatchValue>);

impl PatchMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<PatchValue>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&PatchValue> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K> FromIterator<(K, PatchValue)> for PatchMap
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, PatchValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
