//! # Resource Identifiers
//!
//! A resource identifier is the `{type, id}` pair that references a resource,
//! optionally carrying a `meta` object.

use crate::error::ObjectError;
use crate::standard_object::{kind_of, StandardObject};
use serde_json::{Map, Value};
use std::fmt;

pub const TYPE: &str = "type";
pub const ID: &str = "id";
pub const META: &str = "meta";

/// A `{type, id}` pair referencing a resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceIdentifier {
    resource_type: String,
    id: String,
    meta: Option<StandardObject>,
}

impl ResourceIdentifier {
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
            meta: None,
        }
    }

    /// Builds an identifier from a parsed `{type, id}` object.
    ///
    /// Numeric ids are accepted and kept in their decimal string form.
    ///
    /// # Errors
    /// - [`ObjectError::InvalidShape`] if `value` is not an object or a member has the wrong type.
    /// - [`ObjectError::MissingMember`] if `type` or `id` is absent.
    pub fn from_value(value: &Value) -> Result<Self, ObjectError> {
        let object = value.as_object().ok_or_else(|| {
            ObjectError::InvalidShape(format!(
                "resource identifier must be an object, got {}",
                kind_of(value)
            ))
        })?;

        let resource_type = match object.get(TYPE) {
            Some(Value::String(t)) => t.clone(),
            Some(other) => {
                return Err(ObjectError::InvalidShape(format!(
                    "resource identifier type must be a string, got {}",
                    kind_of(other)
                )))
            }
            None => return Err(ObjectError::MissingMember(TYPE)),
        };

        let id = match object.get(ID) {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            Some(other) => {
                return Err(ObjectError::InvalidShape(format!(
                    "resource identifier id must be a string, got {}",
                    kind_of(other)
                )))
            }
            None => return Err(ObjectError::MissingMember(ID)),
        };

        let meta = match object.get(META) {
            None | Some(Value::Null) => None,
            Some(meta) => Some(StandardObject::from_value(meta.clone())?),
        };

        Ok(Self { resource_type, id, meta })
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_type(&self, resource_type: &str) -> bool {
        self.resource_type == resource_type
    }

    pub fn is_type_in(&self, types: &[&str]) -> bool {
        types.iter().any(|t| self.is_type(t))
    }

    pub fn has_meta(&self) -> bool {
        self.meta.is_some()
    }

    /// The identifier's meta, or an empty object when none was given.
    pub fn get_meta(&self) -> StandardObject {
        self.meta.clone().unwrap_or_default()
    }

    pub fn with_meta(mut self, meta: StandardObject) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        object.insert(TYPE.into(), Value::String(self.resource_type.clone()));
        object.insert(ID.into(), Value::String(self.id.clone()));
        if let Some(meta) = &self.meta {
            object.insert(META.into(), meta.clone().into_value());
        }
        Value::Object(object)
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource_type, self.id)
    }
}
