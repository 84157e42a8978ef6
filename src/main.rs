//! Loads a JSON:API configuration file and resolves every API it declares.
//!
//! ```bash
//! RUST_LOG=info cargo run -- config/jsonapi.json
//! ```

use jsonapi_glue::config::AppConfig;
use jsonapi_glue::http::{HttpMethod, RequestInterpreter};
use jsonapi_glue::mock::MockRequestInterpreter;
use jsonapi_glue::runtime::{setup_tracing, ApiSystem};
use jsonapi_glue::store::{MemoryAdapter, Store};
use jsonapi_object::ResourceIdentifier;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn, Instrument};

const DEFAULT_CONFIG: &str = "config/jsonapi.json";

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    info!(path = %path.display(), "Loading configuration");

    let config = AppConfig::load(&path).map_err(|e| e.to_string())?;

    let mut posts = MemoryAdapter::new("posts");
    posts.insert("1", json!({"title": "Hello World"}));
    let mut store = Store::new();
    store.register(posts);

    let system = ApiSystem::new(
        config,
        Arc::new(store),
        Arc::new(MockRequestInterpreter::new(HttpMethod::Get).with_resource_id("1")),
    );

    let apis = system.resolve_all().map_err(|e| e.to_string())?;

    for api in &apis {
        let span = tracing::info_span!("api", namespace = api.namespace());
        async {
            info!(
                schemas = api.schemas().len(),
                page = api.paging_strategy().page(),
                per_page = api.paging_strategy().per_page(),
                options = api.options().len(),
                "Resolved"
            );

            match api.encoder_for("application/vnd.api+json") {
                Ok(Some(encoding)) => info!(media_type = %encoding.media_type, "Encoder selected"),
                Ok(None) => warn!("No encoder for JSON:API media type"),
                Err(e) => warn!(error = %e, "Accept header rejected"),
            }

            if api.request_interpreter().is_read_resource() {
                let identifier = ResourceIdentifier::new("posts", "1");
                match api.store().find(&identifier).await {
                    Ok(record) => info!(%identifier, found = record.is_some(), "Store lookup"),
                    Err(e) => warn!(%identifier, error = %e, "Store lookup failed"),
                }
            }
        }
        .instrument(span)
        .await;
    }

    info!(apis = apis.len(), "Configuration valid");
    Ok(())
}
