//! # Configuration
//!
//! Serde models for API configuration. Keys use the kebab-case names of the
//! JSON config file (`url-prefix`, `supported-ext`, `per-page`).
//!
//! ```json
//! {
//!     "schemas": {
//!         "defaults": { "Person": "Api\\People\\Schema" },
//!         "v2": { "Person": "Api\\People\\V2\\Schema" }
//!     },
//!     "codec-matchers": {
//!         "encoders": ["application/vnd.api+json", { "media-type": "text/plain", "pretty": true }],
//!         "decoders": ["application/vnd.api+json"]
//!     },
//!     "apis": {
//!         "v1": { "url-prefix": "/api/v1", "paging": { "page": "page", "per-page": "limit" } }
//!     }
//! }
//! ```

use crate::error::ApiError;
use crate::repositories::codec_matchers::CodecMatchersConfig;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, instrument};

/// Schema class name keyed by domain class name.
pub type SchemaMap = BTreeMap<String, String>;

/// The `paging` member of an API's config. Missing keys use the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PagingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<String>,
}

/// Configuration of a single API namespace.
///
/// Structural keys are modeled; everything else lands in `options` unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemas: Option<SchemaMap>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub paging: PagingConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_ext: Option<String>,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paging(mut self, page: impl Into<String>, per_page: impl Into<String>) -> Self {
        self.paging = PagingConfig {
            page: Some(page.into()),
            per_page: Some(per_page.into()),
        };
        self
    }

    pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.url_prefix = Some(prefix.into());
        self
    }

    pub fn with_supported_ext(mut self, ext: impl Into<String>) -> Self {
        self.supported_ext = Some(ext.into());
        self
    }

    pub fn with_schema(mut self, class: impl Into<String>, schema: impl Into<String>) -> Self {
        self.schemas
            .get_or_insert_with(SchemaMap::new)
            .insert(class.into(), schema.into());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// Everything the binary needs to build an [`ApiFactory`](crate::http::ApiFactory).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppConfig {
    #[serde(default)]
    pub schemas: BTreeMap<String, SchemaMap>,
    #[serde(default)]
    pub codec_matchers: CodecMatchersConfig,
    #[serde(default)]
    pub apis: BTreeMap<String, ApiConfig>,
}

impl AppConfig {
    /// Loads a JSON config file.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, ApiError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        debug!(apis = config.apis.len(), schema_sets = config.schemas.len(), "Configuration loaded");
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(contents)?)
    }
}
