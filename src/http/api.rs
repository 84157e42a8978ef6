//! # API Descriptor
//!
//! An [`Api`] is everything request-handling code needs to serve one API
//! version: its collaborators, the resolved schemas and codecs, paging keys and
//! any extra options from its config. It is built by
//! [`ApiFactory::create_api`](super::ApiFactory::create_api) and never mutated.

use super::media_type::HttpFactory;
use super::paging::PagingStrategy;
use super::request::RequestInterpreter;
use crate::codec::{CodecMatcher, Encoding};
use crate::config::SchemaMap;
use crate::error::ApiError;
use crate::http::MediaType;
use crate::store::Store;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct Api {
    pub(super) namespace: String,
    pub(super) codec_matcher: CodecMatcher,
    pub(super) schemas: SchemaMap,
    pub(super) store: Arc<Store>,
    pub(super) request_interpreter: Arc<dyn RequestInterpreter>,
    pub(super) http_factory: Arc<dyn HttpFactory>,
    pub(super) paging_strategy: PagingStrategy,
    pub(super) url_prefix: Option<String>,
    pub(super) supported_ext: Option<String>,
    pub(super) options: Map<String, Value>,
}

impl Api {
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn codec_matcher(&self) -> &CodecMatcher {
        &self.codec_matcher
    }

    pub fn schemas(&self) -> &SchemaMap {
        &self.schemas
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub fn request_interpreter(&self) -> &Arc<dyn RequestInterpreter> {
        &self.request_interpreter
    }

    pub fn http_factory(&self) -> &Arc<dyn HttpFactory> {
        &self.http_factory
    }

    pub fn paging_strategy(&self) -> &PagingStrategy {
        &self.paging_strategy
    }

    pub fn url_prefix(&self) -> Option<&str> {
        self.url_prefix.as_deref()
    }

    pub fn supported_ext(&self) -> Option<&str> {
        self.supported_ext.as_deref()
    }

    /// Config entries that are not modeled by any other accessor.
    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    pub fn get_option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Picks the encoder for a raw `Accept` header.
    ///
    /// An empty header accepts anything and gets the first configured encoder.
    pub fn encoder_for(&self, accept_header: &str) -> Result<Option<&Encoding>, ApiError> {
        let accepts = self.http_factory.parse_accept_header(accept_header)?;
        if accepts.is_empty() {
            return Ok(self.codec_matcher.encoders().first());
        }
        Ok(self.codec_matcher.match_encoder(&accepts))
    }

    /// Picks the decoder for a raw `Content-Type` header.
    pub fn decoder_for(&self, content_type: &str) -> Result<Option<&MediaType>, ApiError> {
        let content_type = self.http_factory.parse_media_type(content_type)?;
        Ok(self.codec_matcher.match_decoder(&content_type))
    }

    /// Joins `path` onto the url prefix.
    pub fn url(&self, path: &str) -> String {
        let prefix = self.url_prefix().unwrap_or("").trim_end_matches('/');
        format!("{}/{}", prefix, path.trim_start_matches('/'))
    }
}

impl fmt::Debug for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Api")
            .field("namespace", &self.namespace)
            .field("schemas", &self.schemas)
            .field("store", &self.store)
            .field("paging_strategy", &self.paging_strategy)
            .field("url_prefix", &self.url_prefix)
            .field("supported_ext", &self.supported_ext)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
