//! # Resource Objects
//!
//! A resource object as found in a document's `data` or `included` members.
//! The `id` is optional because a client creating a resource may omit it.

use crate::error::ObjectError;
use crate::identifier::{ResourceIdentifier, ID, META, TYPE};
use crate::relationship::LINKS;
use crate::relationships::Relationships;
use crate::standard_object::{kind_of, StandardObject};
use serde_json::Value;

pub const ATTRIBUTES: &str = "attributes";
pub const RELATIONSHIPS: &str = "relationships";

#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    resource_type: String,
    id: Option<String>,
    attributes: StandardObject,
    relationships: Relationships,
    meta: Option<StandardObject>,
    links: Option<StandardObject>,
}

impl Resource {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: None,
            attributes: StandardObject::new(),
            relationships: Relationships::new(),
            meta: None,
            links: None,
        }
    }

    pub fn from_value(value: Value) -> Result<Self, ObjectError> {
        let object = StandardObject::from_value(value)?;

        let resource_type = match object.get(TYPE) {
            Some(Value::String(t)) => t.clone(),
            Some(other) => {
                return Err(ObjectError::InvalidShape(format!(
                    "resource type must be a string, got {}",
                    kind_of(other)
                )))
            }
            None => return Err(ObjectError::MissingMember(TYPE)),
        };

        let id = match object.get(ID) {
            None | Some(Value::Null) => None,
            Some(Value::String(id)) => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            Some(other) => {
                return Err(ObjectError::InvalidShape(format!(
                    "resource id must be a string, got {}",
                    kind_of(other)
                )))
            }
        };

        let attributes = object.get_object(ATTRIBUTES)?.unwrap_or_default();
        let relationships = match object.get(RELATIONSHIPS) {
            None | Some(Value::Null) => Relationships::new(),
            Some(value) => Relationships::from_value(value.clone())?,
        };

        Ok(Self {
            resource_type,
            id,
            attributes,
            relationships,
            meta: object.get_object(META)?,
            links: object.get_object(LINKS)?,
        })
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }

    /// The resource's identifier, if it has an id.
    pub fn identifier(&self) -> Option<ResourceIdentifier> {
        self.id
            .as_ref()
            .map(|id| ResourceIdentifier::new(self.resource_type.clone(), id.clone()))
    }

    pub fn attributes(&self) -> &StandardObject {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut StandardObject {
        &mut self.attributes
    }

    pub fn get_attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }

    pub fn relationships_mut(&mut self) -> &mut Relationships {
        &mut self.relationships
    }

    pub fn has_meta(&self) -> bool {
        self.meta.is_some()
    }

    pub fn get_meta(&self) -> StandardObject {
        self.meta.clone().unwrap_or_default()
    }

    pub fn get_links(&self) -> StandardObject {
        self.links.clone().unwrap_or_default()
    }

    pub fn to_value(&self) -> Value {
        let mut object = StandardObject::new();
        object.set(TYPE, self.resource_type.clone());
        if let Some(id) = &self.id {
            object.set(ID, id.clone());
        }
        if !self.attributes.is_empty() {
            object.set(ATTRIBUTES, self.attributes.clone().into_value());
        }
        if !self.relationships.is_empty() {
            object.set(RELATIONSHIPS, self.relationships.to_value());
        }
        if let Some(meta) = &self.meta {
            object.set(META, meta.clone().into_value());
        }
        if let Some(links) = &self.links {
            object.set(LINKS, links.clone().into_value());
        }
        object.into_value()
    }
}
