//! # JSON:API Object Model
//!
//! Typed views over already-parsed JSON:API structures. Nothing here encodes
//! or decodes JSON; every type is built from a `serde_json::Value` and can be
//! turned back into one.
//!
//! ## Core Types
//!
//! - [`StandardObject`] - a JSON object with convenience accessors
//! - [`ResourceIdentifier`] and [`ResourceIdentifierCollection`] - `{type, id}` linkage
//! - [`Relationship`] - a relationship object that knows whether it is to-one or to-many
//! - [`Resource`], [`Relationships`] and [`Document`] - the surrounding structures
//!
//! ## Relationship Shapes
//!
//! A relationship's `data` member is normalized into [`RelationshipData`] when the
//! value is bound:
//!
//! ```rust
//! use jsonapi_object::{Relationship, RelationshipData};
//! use serde_json::json;
//!
//! let relationship = Relationship::from_value(json!({
//!     "data": {"type": "people", "id": "9"}
//! })).unwrap();
//!
//! assert!(relationship.is_has_one());
//! assert!(matches!(relationship.get_data(), RelationshipData::One(_)));
//! assert_eq!(relationship.get_identifier().unwrap().id(), "9");
//! ```
//!
//! Asking an empty or to-many relationship for its single identifier fails with
//! [`ObjectError::NoIdentifier`].

pub mod collection;
pub mod document;
pub mod error;
pub mod identifier;
pub mod relationship;
pub mod relationships;
pub mod resource;
pub mod standard_object;

pub use collection::ResourceIdentifierCollection;
pub use document::Document;
pub use error::ObjectError;
pub use identifier::ResourceIdentifier;
pub use relationship::{Relationship, RelationshipData};
pub use relationships::Relationships;
pub use resource::Resource;
pub use standard_object::StandardObject;
