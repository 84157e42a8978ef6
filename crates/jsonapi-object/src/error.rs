//! # Object Errors
//!
//! Errors raised while binding parsed JSON to the typed object model, or
//! while asking an object for something its shape does not hold.

/// Errors that can occur within the object model.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ObjectError {
    #[error("Relationship does not contain a resource identifier")]
    NoIdentifier,
    #[error("Relationship is not a has-many relationship")]
    NotHasMany,
    #[error("Missing member: {0}")]
    MissingMember(&'static str),
    #[error("Invalid shape: {0}")]
    InvalidShape(String),
}
