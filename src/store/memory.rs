//! In-memory [`StoreAdapter`] for demos and tests.

use super::{StoreAdapter, StoreError};
use async_trait::async_trait;
use jsonapi_object::ResourceIdentifier;
use serde_json::Value;
use std::collections::HashMap;

/// Holds records of one resource type keyed by id.
#[derive(Debug, Clone)]
pub struct MemoryAdapter {
    resource_type: String,
    records: HashMap<String, Value>,
}

impl MemoryAdapter {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            records: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: impl Into<String>, record: Value) -> Option<Value> {
        self.records.insert(id.into(), record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl StoreAdapter for MemoryAdapter {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }

    async fn exists(&self, identifier: &ResourceIdentifier) -> Result<bool, StoreError> {
        Ok(self.records.contains_key(identifier.id()))
    }

    async fn find(&self, identifier: &ResourceIdentifier) -> Result<Option<Value>, StoreError> {
        Ok(self.records.get(identifier.id()).cloned())
    }
}
