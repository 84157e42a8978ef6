//! # Mocks
//!
//! Stand-ins for the collaborators this crate only sees through traits.
//!
//! - [`MockRequestInterpreter`] - a fixed request, built fluently.
//! - [`MockAdapter`] - a [`StoreAdapter`] that replays queued expectations, so
//!   tests can inject adapter failures that a real backend rarely produces.
//!
//! ```rust
//! use jsonapi_glue::mock::MockAdapter;
//! use jsonapi_glue::store::{Store, StoreError};
//! use jsonapi_object::ResourceIdentifier;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockAdapter::new("posts");
//!     let post = ResourceIdentifier::new("posts", "1");
//!     mock.expect_exists(post.clone()).return_err(StoreError::Adapter("timeout".into()));
//!
//!     let mut store = Store::new();
//!     store.register(mock.clone());
//!
//!     assert!(store.exists(&post).await.is_err());
//!     mock.verify();
//! }
//! ```

use crate::http::{HttpMethod, RequestInterpreter};
use crate::store::{StoreAdapter, StoreError};
use async_trait::async_trait;
use jsonapi_object::ResourceIdentifier;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// REQUEST INTERPRETER
// =============================================================================

/// A request interpreter describing one fixed request.
#[derive(Debug, Clone)]
pub struct MockRequestInterpreter {
    method: HttpMethod,
    resource_id: Option<String>,
    relationship_name: Option<String>,
    relationship_data: bool,
}

impl MockRequestInterpreter {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            resource_id: None,
            relationship_name: None,
            relationship_data: false,
        }
    }

    pub fn with_resource_id(mut self, id: impl Into<String>) -> Self {
        self.resource_id = Some(id.into());
        self
    }

    /// A `/relationships/{name}` route.
    pub fn with_relationship(mut self, name: impl Into<String>) -> Self {
        self.relationship_name = Some(name.into());
        self.relationship_data = true;
        self
    }

    /// A `/{name}` related-resource route.
    pub fn with_related(mut self, name: impl Into<String>) -> Self {
        self.relationship_name = Some(name.into());
        self.relationship_data = false;
        self
    }
}

impl Default for MockRequestInterpreter {
    fn default() -> Self {
        Self::new(HttpMethod::Get)
    }
}

impl RequestInterpreter for MockRequestInterpreter {
    fn method(&self) -> HttpMethod {
        self.method
    }

    fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    fn relationship_name(&self) -> Option<&str> {
        self.relationship_name.as_deref()
    }

    fn is_relationship_data(&self) -> bool {
        self.relationship_data
    }
}

// =============================================================================
// STORE ADAPTER EXPECTATIONS
// =============================================================================

/// An expected call on the mock adapter, with the response to replay.
#[derive(Debug)]
enum Expectation {
    Exists {
        identifier: ResourceIdentifier,
        response: Result<bool, StoreError>,
    },
    Find {
        identifier: ResourceIdentifier,
        response: Result<Option<Value>, StoreError>,
    },
}

type Expectations = Arc<Mutex<VecDeque<Expectation>>>;

/// A store adapter that answers from a queue of expectations.
///
/// Clones share the queue, so a test can keep one handle for `verify()` after
/// registering another with a [`Store`](crate::store::Store).
#[derive(Debug, Clone)]
pub struct MockAdapter {
    resource_type: String,
    expectations: Expectations,
}

impl MockAdapter {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            expectations: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Expects an `exists` call.
    pub fn expect_exists(&self, identifier: ResourceIdentifier) -> ExistsExpectationBuilder {
        ExistsExpectationBuilder {
            identifier,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `find` call.
    pub fn expect_find(&self, identifier: ResourceIdentifier) -> FindExpectationBuilder {
        FindExpectationBuilder {
            identifier,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn next(&self) -> Option<Expectation> {
        self.expectations.lock().unwrap().pop_front()
    }
}

#[async_trait]
impl StoreAdapter for MockAdapter {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }

    async fn exists(&self, identifier: &ResourceIdentifier) -> Result<bool, StoreError> {
        match self.next() {
            Some(Expectation::Exists { identifier: expected, response }) => {
                assert_eq!(&expected, identifier, "exists called with unexpected identifier");
                response
            }
            other => panic!("Unexpected exists({}), expected {:?}", identifier, other),
        }
    }

    async fn find(&self, identifier: &ResourceIdentifier) -> Result<Option<Value>, StoreError> {
        match self.next() {
            Some(Expectation::Find { identifier: expected, response }) => {
                assert_eq!(&expected, identifier, "find called with unexpected identifier");
                response
            }
            other => panic!("Unexpected find({}), expected {:?}", identifier, other),
        }
    }
}

/// Builder for `exists` expectations.
pub struct ExistsExpectationBuilder {
    identifier: ResourceIdentifier,
    expectations: Expectations,
}

impl ExistsExpectationBuilder {
    pub fn return_ok(self, exists: bool) {
        self.push(Ok(exists));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<bool, StoreError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Exists {
            identifier: self.identifier,
            response,
        });
    }
}

/// Builder for `find` expectations.
pub struct FindExpectationBuilder {
    identifier: ResourceIdentifier,
    expectations: Expectations,
}

impl FindExpectationBuilder {
    pub fn return_ok(self, record: Option<Value>) {
        self.push(Ok(record));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<Value>, StoreError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Find {
            identifier: self.identifier,
            response,
        });
    }
}
