//! # Resource Identifier Collections
//!
//! The ordered list of identifiers held by a to-many relationship.

use crate::error::ObjectError;
use crate::identifier::ResourceIdentifier;
use serde_json::Value;
use std::collections::BTreeMap;

/// An ordered sequence of [`ResourceIdentifier`]s. Empty by default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceIdentifierCollection {
    stack: Vec<ResourceIdentifier>,
}

impl ResourceIdentifierCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from parsed `{type, id}` objects, keeping their order.
    ///
    /// # Errors
    /// Fails on the first element that is not a valid resource identifier.
    pub fn create(values: &[Value]) -> Result<Self, ObjectError> {
        values
            .iter()
            .map(ResourceIdentifier::from_value)
            .collect::<Result<Vec<_>, _>>()
            .map(|stack| Self { stack })
    }

    pub fn push(&mut self, identifier: ResourceIdentifier) {
        self.stack.push(identifier);
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResourceIdentifier> {
        self.stack.iter()
    }

    pub fn first(&self) -> Option<&ResourceIdentifier> {
        self.stack.first()
    }

    pub fn contains(&self, identifier: &ResourceIdentifier) -> bool {
        self.stack
            .iter()
            .any(|i| i.resource_type() == identifier.resource_type() && i.id() == identifier.id())
    }

    /// True when every identifier is one of `types`. An empty collection is trivially only of any types.
    pub fn is_only(&self, types: &[&str]) -> bool {
        self.stack.iter().all(|i| i.is_type_in(types))
    }

    pub fn ids(&self) -> Vec<&str> {
        self.stack.iter().map(ResourceIdentifier::id).collect()
    }

    /// Groups ids by resource type.
    pub fn map_by_type(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut map: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for identifier in &self.stack {
            map.entry(identifier.resource_type())
                .or_default()
                .push(identifier.id());
        }
        map
    }

    pub fn to_value(&self) -> Value {
        Value::Array(self.stack.iter().map(ResourceIdentifier::to_value).collect())
    }
}

impl FromIterator<ResourceIdentifier> for ResourceIdentifierCollection {
    fn from_iter<I: IntoIterator<Item = ResourceIdentifier>>(iter: I) -> Self {
        Self {
            stack: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ResourceIdentifierCollection {
    type Item = ResourceIdentifier;
    type IntoIter = std::vec::IntoIter<ResourceIdentifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.stack.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResourceIdentifierCollection {
    type Item = &'a ResourceIdentifier;
    type IntoIter = std::slice::Iter<'a, ResourceIdentifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.stack.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ResourceIdentifierCollection {
        ResourceIdentifierCollection::create(&[
            json!({"type": "posts", "id": "1"}),
            json!({"type": "comments", "id": "2"}),
            json!({"type": "posts", "id": "3"}),
        ])
        .unwrap()
    }

    #[test]
    fn test_create_keeps_order() {
        let collection = sample();
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.ids(), vec!["1", "2", "3"]);
        assert_eq!(collection.first(), Some(&ResourceIdentifier::new("posts", "1")));
    }

    #[test]
    fn test_create_fails_on_invalid_member() {
        let result = ResourceIdentifierCollection::create(&[json!({"type": "posts", "id": "1"}), json!(null)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_contains_ignores_meta() {
        let collection = ResourceIdentifierCollection::create(&[json!({"type": "posts", "id": "1", "meta": {"a": 1}})]).unwrap();
        assert!(collection.contains(&ResourceIdentifier::new("posts", "1")));
        assert!(!collection.contains(&ResourceIdentifier::new("posts", "2")));
    }

    #[test]
    fn test_is_only() {
        let collection = sample();
        assert!(collection.is_only(&["posts", "comments"]));
        assert!(!collection.is_only(&["posts"]));
        assert!(ResourceIdentifierCollection::new().is_only(&["posts"]));
    }

    #[test]
    fn test_map_by_type() {
        let sample = sample();
        let map = sample.map_by_type();
        assert_eq!(map.get("posts"), Some(&vec!["1", "3"]));
        assert_eq!(map.get("comments"), Some(&vec!["2"]));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_collect_from_identifiers() {
        let collection: ResourceIdentifierCollection =
            vec![ResourceIdentifier::new("tags", "a"), ResourceIdentifier::new("tags", "b")]
                .into_iter()
                .collect();
        assert_eq!(
            collection.to_value(),
            json!([{"type": "tags", "id": "a"}, {"type": "tags", "id": "b"}])
        );
    }
}
