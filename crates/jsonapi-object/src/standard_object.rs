//! # StandardObject
//!
//! A thin wrapper over a parsed JSON object. Every other type in this crate
//! keeps its raw members in a `StandardObject` so that unknown members survive
//! a round trip back to `serde_json::Value`.

use crate::error::ObjectError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A parsed JSON object with convenience accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StandardObject {
    inner: Map<String, Value>,
}

impl StandardObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a JSON object.
    ///
    /// # Errors
    /// Returns [`ObjectError::InvalidShape`] if `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self, ObjectError> {
        match value {
            Value::Object(inner) => Ok(Self { inner }),
            other => Err(ObjectError::InvalidShape(format!(
                "expected an object, got {}",
                kind_of(&other)
            ))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// Looks up a nested member using a dotted path, e.g. `"meta.foo"`.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.inner.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    pub fn has(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Sets a member, returning the previous value if there was one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.inner.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Reads a member that must itself be an object.
    ///
    /// Absent and `null` members both read as `None`.
    pub fn get_object(&self, key: &str) -> Result<Option<StandardObject>, ObjectError> {
        match self.inner.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) => Ok(Some(Self { inner: map.clone() })),
            Some(other) => Err(ObjectError::InvalidShape(format!(
                "member '{}' must be an object, got {}",
                key,
                kind_of(other)
            ))),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.inner
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.inner)
    }
}

impl From<Map<String, Value>> for StandardObject {
    fn from(inner: Map<String, Value>) -> Self {
        Self { inner }
    }
}

impl From<StandardObject> for Value {
    fn from(object: StandardObject) -> Self {
        object.into_value()
    }
}

/// Short name of a JSON value's kind, used in error messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
