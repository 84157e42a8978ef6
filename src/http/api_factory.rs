//! # API Factory
//!
//! The registry of API namespaces (`v1`, `v2`, ...) and the factory that turns
//! a namespace's config into an [`Api`].
//!
//! Configure once at startup, then resolve:
//!
//! ```rust
//! use jsonapi_glue::config::ApiConfig;
//! use jsonapi_glue::http::{ApiFactory, DefaultHttpFactory};
//! use jsonapi_glue::mock::MockRequestInterpreter;
//! use jsonapi_glue::repositories::{CodecMatcherRepository, SchemasRepository};
//! use jsonapi_glue::store::Store;
//! use std::collections::BTreeMap;
//! use std::sync::Arc;
//!
//! let mut factory = ApiFactory::new(
//!     CodecMatcherRepository::new(),
//!     SchemasRepository::new(),
//!     Arc::new(Store::new()),
//!     Arc::new(MockRequestInterpreter::default()),
//!     Arc::new(DefaultHttpFactory),
//! );
//! factory.configure(BTreeMap::from([("v1".to_string(), ApiConfig::new())]));
//!
//! let api = factory.create_api("v1").unwrap();
//! assert_eq!(api.namespace(), "v1");
//! assert_eq!(api.paging_strategy().page(), "number");
//! assert!(factory.create_api("v2").is_err());
//! ```

use super::api::Api;
use super::media_type::HttpFactory;
use super::paging::PagingStrategy;
use super::request::RequestInterpreter;
use crate::config::{ApiConfig, SchemaMap};
use crate::error::ApiError;
use crate::repositories::{CodecMatcherRepository, SchemasRepository};
use crate::store::Store;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub struct ApiFactory {
    codec_matchers: CodecMatcherRepository,
    schemas: SchemasRepository,
    store: Arc<Store>,
    request_interpreter: Arc<dyn RequestInterpreter>,
    http_factory: Arc<dyn HttpFactory>,
    config: BTreeMap<String, ApiConfig>,
}

impl ApiFactory {
    pub fn new(
        codec_matchers: CodecMatcherRepository,
        schemas: SchemasRepository,
        store: Arc<Store>,
        request_interpreter: Arc<dyn RequestInterpreter>,
        http_factory: Arc<dyn HttpFactory>,
    ) -> Self {
        Self {
            codec_matchers,
            schemas,
            store,
            request_interpreter,
            http_factory,
            config: BTreeMap::new(),
        }
    }

    /// Registers namespaces. A namespace configured twice keeps the later config.
    pub fn configure(&mut self, config: BTreeMap<String, ApiConfig>) {
        for (namespace, api_config) in config {
            debug!(%namespace, ?api_config, "Configuring API");
            if self.config.insert(namespace.clone(), api_config).is_some() {
                info!(%namespace, "API configuration replaced");
            }
        }
    }

    /// Same as [`configure`](Self::configure), from an untyped JSON object of objects.
    pub fn configure_value(&mut self, config: Value) -> Result<(), ApiError> {
        if !config.is_object() {
            return Err(ApiError::InvalidConfig(format!(
                "expected an object keyed by namespace, got {}",
                config
            )));
        }
        let config: BTreeMap<String, ApiConfig> = serde_json::from_value(config)
            .map_err(|e| ApiError::InvalidConfig(e.to_string()))?;
        self.configure(config);
        Ok(())
    }

    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.config.contains_key(namespace)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.config.keys().map(String::as_str)
    }

    pub fn schemas(&self) -> &SchemasRepository {
        &self.schemas
    }

    pub fn schemas_mut(&mut self) -> &mut SchemasRepository {
        &mut self.schemas
    }

    pub fn codec_matchers(&self) -> &CodecMatcherRepository {
        &self.codec_matchers
    }

    pub fn codec_matchers_mut(&mut self) -> &mut CodecMatcherRepository {
        &mut self.codec_matchers
    }

    /// Builds the descriptor for a configured namespace.
    ///
    /// # Errors
    /// - [`ApiError::NamespaceNotFound`] if `namespace` was never configured.
    /// - [`ApiError::InvalidMediaType`] if the codec configuration does not parse.
    #[instrument(skip(self))]
    pub fn create_api(&self, namespace: &str) -> Result<Api, ApiError> {
        let config = self.config.get(namespace).ok_or_else(|| {
            warn!("Namespace not found");
            ApiError::NamespaceNotFound(namespace.to_string())
        })?;

        let schemas = self.resolve_schemas(namespace, config)?;
        let codec_matcher = self.codec_matchers.get_codec_matcher(
            self.http_factory.as_ref(),
            config.url_prefix.as_deref(),
            &schemas,
        )?;
        let paging_strategy = PagingStrategy::from_config(&config.paging);

        debug!(
            schemas = schemas.len(),
            page = paging_strategy.page(),
            per_page = paging_strategy.per_page(),
            "Api created"
        );

        Ok(Api {
            namespace: namespace.to_string(),
            codec_matcher,
            schemas,
            store: Arc::clone(&self.store),
            request_interpreter: Arc::clone(&self.request_interpreter),
            http_factory: Arc::clone(&self.http_factory),
            paging_strategy,
            url_prefix: config.url_prefix.clone(),
            supported_ext: config.supported_ext.clone(),
            options: config.options.clone(),
        })
    }

    /// Inline `schemas` win; otherwise the repository set named after the
    /// namespace, or the defaults when there is no such set.
    fn resolve_schemas(&self, namespace: &str, config: &ApiConfig) -> Result<SchemaMap, ApiError> {
        match &config.schemas {
            Some(overrides) => Ok(self.schemas.merge_defaults(overrides)),
            None if self.schemas.has_schemas(namespace) => self.schemas.get_schemas(namespace),
            None => Ok(self.schemas.defaults()),
        }
    }
}
