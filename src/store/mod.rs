//! # Store
//!
//! The store answers "does this resource exist?" and "give me its record" for
//! any resource identifier, by routing to the [`StoreAdapter`] registered for
//! the identifier's type. Records are opaque JSON values; mapping them to
//! domain models is the adapter's business.

pub mod memory;

pub use memory::MemoryAdapter;

use async_trait::async_trait;
use jsonapi_object::{ResourceIdentifier, ResourceIdentifierCollection};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// No adapter is registered for the resource type.
    #[error("No store adapter for resource type: {0}")]
    UnsupportedType(String),

    /// The resource does not exist.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The adapter failed.
    #[error("Store adapter error: {0}")]
    Adapter(String),
}

/// Looks up records of a single resource type.
#[async_trait]
pub trait StoreAdapter: Send + Sync {
    /// The resource type this adapter serves.
    fn resource_type(&self) -> &str;

    async fn exists(&self, identifier: &ResourceIdentifier) -> Result<bool, StoreError>;

    async fn find(&self, identifier: &ResourceIdentifier) -> Result<Option<Value>, StoreError>;
}

#[derive(Default)]
pub struct Store {
    adapters: HashMap<String, Arc<dyn StoreAdapter>>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut types: Vec<_> = self.adapters.keys().collect();
        types.sort();
        f.debug_struct("Store").field("adapters", &types).finish()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an adapter, replacing any previous adapter for the same type.
    pub fn register(&mut self, adapter: impl StoreAdapter + 'static) {
        self.register_arc(Arc::new(adapter));
    }

    pub fn register_arc(&mut self, adapter: Arc<dyn StoreAdapter>) {
        let resource_type = adapter.resource_type().to_string();
        debug!(%resource_type, "Registering store adapter");
        self.adapters.insert(resource_type, adapter);
    }

    pub fn is_supported(&self, resource_type: &str) -> bool {
        self.adapters.contains_key(resource_type)
    }

    fn adapter(&self, identifier: &ResourceIdentifier) -> Result<&Arc<dyn StoreAdapter>, StoreError> {
        self.adapters.get(identifier.resource_type()).ok_or_else(|| {
            warn!(%identifier, "No store adapter");
            StoreError::UnsupportedType(identifier.resource_type().to_string())
        })
    }

    pub async fn exists(&self, identifier: &ResourceIdentifier) -> Result<bool, StoreError> {
        let exists = self.adapter(identifier)?.exists(identifier).await?;
        debug!(%identifier, exists, "Exists");
        Ok(exists)
    }

    pub async fn find(&self, identifier: &ResourceIdentifier) -> Result<Option<Value>, StoreError> {
        let record = self.adapter(identifier)?.find(identifier).await?;
        debug!(%identifier, found = record.is_some(), "Find");
        Ok(record)
    }

    /// Like [`find`](Self::find), but a missing record is an error.
    pub async fn find_record(&self, identifier: &ResourceIdentifier) -> Result<Value, StoreError> {
        self.find(identifier)
            .await?
            .ok_or_else(|| StoreError::NotFound(identifier.to_string()))
    }

    /// Finds every identifier in the collection, skipping the ones that do not exist.
    pub async fn find_many(
        &self,
        identifiers: &ResourceIdentifierCollection,
    ) -> Result<Vec<Value>, StoreError> {
        let mut records = Vec::with_capacity(identifiers.len());
        for identifier in identifiers {
            if let Some(record) = self.find(identifier).await? {
                records.push(record);
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockAdapter;
    use serde_json::json;

    fn store() -> Store {
        let mut posts = MemoryAdapter::new("posts");
        posts.insert("1", json!({"title": "Hello"}));
        posts.insert("2", json!({"title": "World"}));

        let mut store = Store::new();
        store.register(posts);
        store
    }

    #[tokio::test]
    async fn test_exists_and_find() {
        let store = store();
        let one = ResourceIdentifier::new("posts", "1");
        let missing = ResourceIdentifier::new("posts", "9");

        assert!(store.exists(&one).await.unwrap());
        assert!(!store.exists(&missing).await.unwrap());
        assert_eq!(store.find(&one).await.unwrap(), Some(json!({"title": "Hello"})));
        assert_eq!(store.find(&missing).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_record() {
        let store = store();
        let err = store
            .find_record(&ResourceIdentifier::new("posts", "9"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound("posts:9".into()));
    }

    #[tokio::test]
    async fn test_unsupported_type() {
        let store = store();
        assert!(!store.is_supported("comments"));
        let err = store
            .exists(&ResourceIdentifier::new("comments", "1"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::UnsupportedType("comments".into()));
    }

    #[tokio::test]
    async fn test_find_many_skips_missing() {
        let store = store();
        let identifiers: ResourceIdentifierCollection = vec![
            ResourceIdentifier::new("posts", "2"),
            ResourceIdentifier::new("posts", "9"),
            ResourceIdentifier::new("posts", "1"),
        ]
        .into_iter()
        .collect();

        let records = store.find_many(&identifiers).await.unwrap();
        assert_eq!(records, vec![json!({"title": "World"}), json!({"title": "Hello"})]);
    }

    #[tokio::test]
    async fn test_adapter_errors_propagate() {
        let mock = MockAdapter::new("people");
        let identifier = ResourceIdentifier::new("people", "1");
        mock.expect_exists(identifier.clone())
            .return_err(StoreError::Adapter("connection refused".into()));
        mock.expect_find(identifier.clone())
            .return_ok(Some(json!({"name": "Alice"})));

        let mut store = Store::new();
        store.register(mock.clone());

        assert_eq!(
            store.exists(&identifier).await.unwrap_err(),
            StoreError::Adapter("connection refused".into())
        );
        assert_eq!(store.find(&identifier).await.unwrap(), Some(json!({"name": "Alice"})));
        mock.verify();
    }
}
