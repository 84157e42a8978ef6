//! # Documents
//!
//! The top-level object of a JSON:API request or response body. The primary
//! `data` member is kept raw and interpreted on demand, because the same
//! document shape carries a resource on resource endpoints and plain resource
//! linkage on relationship endpoints.

use crate::error::ObjectError;
use crate::relationship::{Relationship, DATA, META};
use crate::resource::Resource;
use crate::standard_object::{kind_of, StandardObject};
use serde_json::Value;

pub const INCLUDED: &str = "included";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    proxy: StandardObject,
}

impl Document {
    pub fn from_value(value: Value) -> Result<Self, ObjectError> {
        StandardObject::from_value(value).map(|proxy| Self { proxy })
    }

    pub fn has_data(&self) -> bool {
        self.proxy.has(DATA)
    }

    /// The primary data read as a single resource object.
    pub fn get_resource(&self) -> Result<Resource, ObjectError> {
        match self.proxy.get(DATA) {
            Some(data @ Value::Object(_)) => Resource::from_value(data.clone()),
            Some(other) => Err(ObjectError::InvalidShape(format!(
                "document data must be a resource object, got {}",
                kind_of(other)
            ))),
            None => Err(ObjectError::MissingMember(DATA)),
        }
    }

    /// The whole document read as a relationship, as sent to relationship endpoints.
    pub fn get_relationship(&self) -> Result<Relationship, ObjectError> {
        if !self.has_data() {
            return Err(ObjectError::MissingMember(DATA));
        }
        Relationship::from_value(self.proxy.clone().into_value())
    }

    pub fn get_included(&self) -> Result<Vec<Resource>, ObjectError> {
        match self.proxy.get(INCLUDED) {
            None => Ok(Vec::new()),
            Some(Value::Array(values)) => values.iter().cloned().map(Resource::from_value).collect(),
            Some(other) => Err(ObjectError::InvalidShape(format!(
                "included must be an array, got {}",
                kind_of(other)
            ))),
        }
    }

    pub fn has_meta(&self) -> bool {
        self.proxy.has(META)
    }

    pub fn get_meta(&self) -> Result<StandardObject, ObjectError> {
        self.proxy.get_object(META).map(Option::unwrap_or_default)
    }

    pub fn to_value(&self) -> Value {
        self.proxy.clone().into_value()
    }
}
