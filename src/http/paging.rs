//! # Paging Strategy
//!
//! JSON:API reserves the `page` query parameter but leaves its members to the
//! implementation. The strategy records which keys an API uses for the page
//! number and the page size.

use crate::config::PagingConfig;
use crate::error::ApiError;
use serde_json::Value;

pub const DEFAULT_PAGE: &str = "number";
pub const DEFAULT_PER_PAGE: &str = "size";

/// Names of the `page[...]` keys an API reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingStrategy {
    page: String,
    per_page: String,
}

impl Default for PagingStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PER_PAGE)
    }
}

/// Values read from a request's `page` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageParameters {
    pub number: Option<u64>,
    pub size: Option<u64>,
}

impl PagingStrategy {
    pub fn new(page: impl Into<String>, per_page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            per_page: per_page.into(),
        }
    }

    /// Builds a strategy from config, falling back to the defaults key by key.
    pub fn from_config(config: &PagingConfig) -> Self {
        Self::new(
            config.page.as_deref().unwrap_or(DEFAULT_PAGE),
            config.per_page.as_deref().unwrap_or(DEFAULT_PER_PAGE),
        )
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn per_page(&self) -> &str {
        &self.per_page
    }

    /// Reads the parsed `page` query parameter.
    ///
    /// `null` or a missing object reads as no paging. Values may be numbers or
    /// numeric strings, since query strings arrive as text.
    pub fn read(&self, page: Option<&Value>) -> Result<PageParameters, ApiError> {
        let object = match page {
            None | Some(Value::Null) => return Ok(PageParameters::default()),
            Some(Value::Object(object)) => object,
            Some(other) => {
                return Err(ApiError::InvalidPaging {
                    key: "page".into(),
                    value: other.to_string(),
                })
            }
        };

        Ok(PageParameters {
            number: read_key(&self.page, object.get(&self.page))?,
            size: read_key(&self.per_page, object.get(&self.per_page))?,
        })
    }
}

fn read_key(key: &str, value: Option<&Value>) -> Result<Option<u64>, ApiError> {
    let invalid = |value: &Value| ApiError::InvalidPaging {
        key: key.to_string(),
        value: value.to_string(),
    };
    let Some(value) = value else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_u64().map(Some).ok_or_else(|| invalid(value)),
        Value::String(s) => s.trim().parse().map(Some).map_err(|_| invalid(value)),
        other => Err(invalid(other)),
    }
}
