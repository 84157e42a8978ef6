/// Initializes the tracing/logging infrastructure for the binary.
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - Startup summary only
/// - `RUST_LOG=debug` - Every configured namespace, schema set and resolved API
/// - `RUST_LOG=jsonapi_glue::store=debug` - Store lookups only
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
