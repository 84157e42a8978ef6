//! # Request Interpreter
//!
//! The HTTP framework knows the method and route of the current request; the
//! [`RequestInterpreter`] trait exposes just enough of it to classify the
//! request as one of the JSON:API operations.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
    Head,
    Options,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        };
        f.write_str(name)
    }
}

/// Classifies the current request.
///
/// Implementors provide the four raw accessors; the predicates are derived
/// from them.
///
/// | Route | Method | Predicate |
/// |-------|--------|-----------|
/// | `/posts` | GET | [`is_index`](RequestInterpreter::is_index) |
/// | `/posts` | POST | [`is_create_resource`](RequestInterpreter::is_create_resource) |
/// | `/posts/1` | GET / PATCH / DELETE | `is_read_resource` / `is_update_resource` / `is_delete_resource` |
/// | `/posts/1/author` | GET | [`is_read_related_resource`](RequestInterpreter::is_read_related_resource) |
/// | `/posts/1/relationships/author` | GET | [`is_read_relationship`](RequestInterpreter::is_read_relationship) |
/// | `/posts/1/relationships/tags` | POST / PATCH / DELETE | [`is_modify_relationship`](RequestInterpreter::is_modify_relationship) |
pub trait RequestInterpreter: Send + Sync {
    fn method(&self) -> HttpMethod;

    fn resource_id(&self) -> Option<&str>;

    fn relationship_name(&self) -> Option<&str>;

    /// True for `/relationships/{name}` routes, false for related-resource routes.
    fn is_relationship_data(&self) -> bool;

    fn is_index(&self) -> bool {
        self.method() == HttpMethod::Get && self.resource_id().is_none()
    }

    fn is_create_resource(&self) -> bool {
        self.method() == HttpMethod::Post && self.resource_id().is_none()
    }

    fn is_read_resource(&self) -> bool {
        self.method() == HttpMethod::Get && self.is_resource()
    }

    fn is_update_resource(&self) -> bool {
        self.method() == HttpMethod::Patch && self.is_resource()
    }

    fn is_delete_resource(&self) -> bool {
        self.method() == HttpMethod::Delete && self.is_resource()
    }

    fn is_read_related_resource(&self) -> bool {
        self.method() == HttpMethod::Get
            && self.relationship_name().is_some()
            && !self.is_relationship_data()
    }

    fn is_read_relationship(&self) -> bool {
        self.method() == HttpMethod::Get && self.is_relationship()
    }

    fn is_modify_relationship(&self) -> bool {
        matches!(
            self.method(),
            HttpMethod::Post | HttpMethod::Patch | HttpMethod::Delete
        ) && self.is_relationship()
    }

    /// True when the request must carry a JSON:API document body.
    fn is_expecting_document(&self) -> bool {
        self.is_create_resource() || self.is_update_resource() || self.is_modify_relationship()
    }

    #[doc(hidden)]
    fn is_resource(&self) -> bool {
        self.resource_id().is_some() && self.relationship_name().is_none()
    }

    #[doc(hidden)]
    fn is_relationship(&self) -> bool {
        self.resource_id().is_some()
            && self.relationship_name().is_some()
            && self.is_relationship_data()
    }
}
