//! The `relationships` member of a resource object.

use crate::error::ObjectError;
use crate::relationship::Relationship;
use crate::standard_object::StandardObject;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Relationship objects keyed by relationship name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relationships {
    inner: BTreeMap<String, Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: Value) -> Result<Self, ObjectError> {
        let object = StandardObject::from_value(value)?;
        let mut inner = BTreeMap::new();
        for (name, relationship) in object.as_map() {
            inner.insert(name.clone(), Relationship::from_value(relationship.clone())?);
        }
        Ok(Self { inner })
    }

    pub fn get(&self, name: &str) -> Option<&Relationship> {
        self.inner.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, relationship: Relationship) -> Option<Relationship> {
        self.inner.insert(name.into(), relationship)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Relationship)> {
        self.inner.iter().map(|(name, r)| (name.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .inner
            .iter()
            .map(|(name, r)| (name.clone(), r.to_value()))
            .collect();
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        let relationships = Relationships::from_value(json!({
            "author": {"data": {"type": "people", "id": "9"}},
            "tags": {"data": []}
        }))
        .unwrap();

        assert_eq!(relationships.len(), 2);
        assert_eq!(relationships.names().collect::<Vec<_>>(), vec!["author", "tags"]);
        assert!(relationships.get("author").unwrap().is_has_one());
        assert!(relationships.get("tags").unwrap().is_has_many());
        assert!(!relationships.has("comments"));
    }

    #[test]
    fn test_invalid_member_fails() {
        assert!(Relationships::from_value(json!({"author": 1})).is_err());
    }
}
