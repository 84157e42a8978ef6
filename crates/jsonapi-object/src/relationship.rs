//! # Relationship Objects
//!
//! A JSON:API relationship holds resource linkage in its `data` member:
//! `null` or a single identifier for a to-one relationship, an array of
//! identifiers for a to-many relationship.
//!
//! The wrapped value is normalized into [`RelationshipData`] as soon as it is
//! bound, so every accessor below is a cheap read of already-validated state.

use crate::collection::ResourceIdentifierCollection;
use crate::error::ObjectError;
use crate::identifier::ResourceIdentifier;
use crate::standard_object::{kind_of, StandardObject};
use serde_json::Value;

pub const DATA: &str = "data";
pub const META: &str = "meta";
pub const LINKS: &str = "links";

/// Resource linkage of a relationship.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RelationshipData {
    /// An empty to-one relationship (`data` is `null` or absent).
    #[default]
    Empty,
    /// A populated to-one relationship.
    One(ResourceIdentifier),
    /// A to-many relationship, possibly empty.
    Many(ResourceIdentifierCollection),
}

impl RelationshipData {
    /// Normalizes the raw `data` member.
    pub fn from_value(data: Option<&Value>) -> Result<Self, ObjectError> {
        match data {
            None | Some(Value::Null) => Ok(Self::Empty),
            Some(value @ Value::Object(_)) => ResourceIdentifier::from_value(value).map(Self::One),
            Some(Value::Array(values)) => ResourceIdentifierCollection::create(values).map(Self::Many),
            Some(other) => Err(ObjectError::InvalidShape(format!(
                "relationship data must be null, an object or an array, got {}",
                kind_of(other)
            ))),
        }
    }

    pub fn is_has_one(&self) -> bool {
        !self.is_has_many()
    }

    pub fn is_has_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Empty => Value::Null,
            Self::One(identifier) => identifier.to_value(),
            Self::Many(collection) => collection.to_value(),
        }
    }
}

/// A typed view over a relationship object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relationship {
    proxy: StandardObject,
    data: RelationshipData,
    meta: Option<StandardObject>,
    links: Option<StandardObject>,
}

impl Relationship {
    /// An empty to-one relationship with no meta.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: Value) -> Result<Self, ObjectError> {
        let mut relationship = Self::new();
        relationship.set_proxy(value)?;
        Ok(relationship)
    }

    /// Re-binds the wrapped value and recomputes all derived state.
    ///
    /// On error the relationship keeps its previous state.
    pub fn set_proxy(&mut self, value: Value) -> Result<(), ObjectError> {
        let proxy = StandardObject::from_value(value)?;
        let data = RelationshipData::from_value(proxy.get(DATA))?;
        let meta = proxy.get_object(META)?;
        let links = proxy.get_object(LINKS)?;

        self.proxy = proxy;
        self.data = data;
        self.meta = meta;
        self.links = links;
        Ok(())
    }

    pub fn get_data(&self) -> &RelationshipData {
        &self.data
    }

    pub fn is_has_one(&self) -> bool {
        self.data.is_has_one()
    }

    pub fn is_has_many(&self) -> bool {
        self.data.is_has_many()
    }

    pub fn has_identifier(&self) -> bool {
        matches!(self.data, RelationshipData::One(_))
    }

    /// The identifier of a populated to-one relationship.
    ///
    /// # Errors
    /// [`ObjectError::NoIdentifier`] if the relationship is empty or to-many.
    pub fn get_identifier(&self) -> Result<&ResourceIdentifier, ObjectError> {
        match &self.data {
            RelationshipData::One(identifier) => Ok(identifier),
            _ => Err(ObjectError::NoIdentifier),
        }
    }

    /// The identifiers of a to-many relationship.
    ///
    /// # Errors
    /// [`ObjectError::NotHasMany`] if the relationship is to-one.
    pub fn get_identifiers(&self) -> Result<&ResourceIdentifierCollection, ObjectError> {
        match &self.data {
            RelationshipData::Many(collection) => Ok(collection),
            _ => Err(ObjectError::NotHasMany),
        }
    }

    pub fn has_meta(&self) -> bool {
        self.meta.is_some()
    }

    pub fn get_meta(&self) -> StandardObject {
        self.meta.clone().unwrap_or_default()
    }

    pub fn has_links(&self) -> bool {
        self.links.is_some()
    }

    pub fn get_links(&self) -> StandardObject {
        self.links.clone().unwrap_or_default()
    }

    /// The wrapped value as it was bound.
    pub fn to_value(&self) -> Value {
        self.proxy.clone().into_value()
    }
}
