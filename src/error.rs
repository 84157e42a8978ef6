//! # Errors
//!
//! Every failure in this crate is a configuration or programming error: an API
//! namespace nobody registered, a schema set that does not exist, a malformed
//! config file. None of them is meant to be retried.

use thiserror::Error;

/// Errors raised while configuring or resolving APIs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No API has been configured under the requested namespace.
    #[error("JSON API namespace '{0}' is not configured")]
    NamespaceNotFound(String),

    /// The schemas repository has no set with this name.
    #[error("Schemas '{0}' do not exist")]
    SchemasNotFound(String),

    /// Configuration could not be interpreted.
    #[error("Invalid JSON API configuration: {0}")]
    InvalidConfig(String),

    /// A paging parameter was not a non-negative integer.
    #[error("Invalid paging parameter '{key}': {value}")]
    InvalidPaging { key: String, value: String },

    /// A media type or header could not be parsed.
    #[error("Invalid media type: {0}")]
    InvalidMediaType(String),

    #[error("Unable to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}
