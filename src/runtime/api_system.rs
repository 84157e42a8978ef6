use crate::config::AppConfig;
use crate::error::ApiError;
use crate::http::{Api, ApiFactory, DefaultHttpFactory, HttpFactory, RequestInterpreter};
use crate::repositories::{CodecMatcherRepository, SchemasRepository};
use crate::store::Store;
use std::sync::Arc;
use tracing::{error, info};

/// Startup wiring for every configured API.
///
/// `ApiSystem` is responsible for:
/// - **Repository setup**: loading schema sets and codec configuration
/// - **Dependency wiring**: handing the store, request interpreter and HTTP
///   factory to the [`ApiFactory`]
/// - **Validation**: resolving every namespace once so config errors surface at startup
///
/// # Example
///
/// ```ignore
/// let config = AppConfig::load(Path::new("config/jsonapi.json"))?;
/// let system = ApiSystem::new(config, Arc::new(Store::new()), interpreter);
/// let apis = system.resolve_all()?;
/// ```
pub struct ApiSystem {
    /// The configured factory, ready for `create_api` calls.
    pub factory: ApiFactory,
}

impl ApiSystem {
    /// Wires a factory with the [`DefaultHttpFactory`].
    pub fn new(
        config: AppConfig,
        store: Arc<Store>,
        request_interpreter: Arc<dyn RequestInterpreter>,
    ) -> Self {
        Self::with_http_factory(config, store, request_interpreter, Arc::new(DefaultHttpFactory))
    }

    pub fn with_http_factory(
        config: AppConfig,
        store: Arc<Store>,
        request_interpreter: Arc<dyn RequestInterpreter>,
        http_factory: Arc<dyn HttpFactory>,
    ) -> Self {
        let AppConfig {
            schemas,
            codec_matchers,
            apis,
        } = config;

        let mut schemas_repository = SchemasRepository::new();
        schemas_repository.configure(schemas);

        let mut codec_matcher_repository = CodecMatcherRepository::new();
        codec_matcher_repository.configure(codec_matchers);

        let mut factory = ApiFactory::new(
            codec_matcher_repository,
            schemas_repository,
            store,
            request_interpreter,
            http_factory,
        );
        factory.configure(apis);

        Self { factory }
    }

    /// Resolves every configured namespace, failing on the first broken one.
    pub fn resolve_all(&self) -> Result<Vec<Api>, ApiError> {
        let namespaces: Vec<String> = self.factory.namespaces().map(str::to_string).collect();
        let mut apis = Vec::with_capacity(namespaces.len());
        for namespace in namespaces {
            match self.factory.create_api(&namespace) {
                Ok(api) => {
                    info!(%namespace, url_prefix = api.url_prefix().unwrap_or("/"), "API ready");
                    apis.push(api);
                }
                Err(e) => {
                    error!(%namespace, error = %e, "API configuration invalid");
                    return Err(e);
                }
            }
        }
        Ok(apis)
    }
}
