use jsonapi_glue::config::{ApiConfig, SchemaMap};
use jsonapi_glue::http::{ApiFactory, DefaultHttpFactory, HttpFactory, RequestInterpreter};
use jsonapi_glue::mock::MockRequestInterpreter;
use jsonapi_glue::repositories::{CodecMatcherRepository, SchemasRepository, DEFAULTS};
use jsonapi_glue::store::Store;
use jsonapi_glue::ApiError;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

struct Fixture {
    store: Arc<Store>,
    request_interpreter: Arc<dyn RequestInterpreter>,
    http_factory: Arc<dyn HttpFactory>,
    factory: ApiFactory,
}

fn schemas(entries: &[(&str, &str)]) -> SchemaMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn setup() -> Fixture {
    let store = Arc::new(Store::new());
    let request_interpreter: Arc<dyn RequestInterpreter> =
        Arc::new(MockRequestInterpreter::default());
    let http_factory: Arc<dyn HttpFactory> = Arc::new(DefaultHttpFactory);

    let mut factory = ApiFactory::new(
        CodecMatcherRepository::new(),
        SchemasRepository::new(),
        Arc::clone(&store),
        Arc::clone(&request_interpreter),
        Arc::clone(&http_factory),
    );

    factory.schemas_mut().configure(BTreeMap::from([
        (
            DEFAULTS.to_string(),
            schemas(&[
                ("Person", "Api\\People\\Schema"),
                ("Post", "Api\\Posts\\Schema"),
                ("Comment", "Api\\Comments\\Schema"),
            ]),
        ),
        ("v1".to_string(), SchemaMap::new()),
        ("v2".to_string(), schemas(&[("Person", "Api\\People\\V2\\Schema")])),
    ]));

    Fixture {
        store,
        request_interpreter,
        http_factory,
        factory,
    }
}

#[test]
fn test_api_v1() {
    let mut fx = setup();
    fx.factory
        .configure(BTreeMap::from([("v1".to_string(), ApiConfig::new())]));

    let api = fx.factory.create_api("v1").expect("v1 is configured");
    assert_eq!(api.namespace(), "v1");
    assert!(Arc::ptr_eq(api.store(), &fx.store));
    assert!(Arc::ptr_eq(api.request_interpreter(), &fx.request_interpreter));
    assert!(Arc::ptr_eq(api.http_factory(), &fx.http_factory));
}

#[test]
fn test_default_paging_strategy() {
    let mut fx = setup();
    fx.factory
        .configure(BTreeMap::from([("v1".to_string(), ApiConfig::new())]));

    let api = fx.factory.create_api("v1").unwrap();
    assert_eq!(api.paging_strategy().page(), "number");
    assert_eq!(api.paging_strategy().per_page(), "size");
}

#[test]
fn test_paging_strategy() {
    let mut fx = setup();
    fx.factory.configure(BTreeMap::from([(
        "v1".to_string(),
        ApiConfig::new().with_paging("foo", "bar"),
    )]));

    let api = fx.factory.create_api("v1").unwrap();
    assert_eq!(api.paging_strategy().page(), "foo");
    assert_eq!(api.paging_strategy().per_page(), "bar");
}

#[test]
fn test_other_options() {
    let expected = json!({"paging-meta": {"key": "page"}});
    let mut fx = setup();
    fx.factory
        .configure_value(json!({
            "v1": {
                "url-prefix": "/api/v1",
                "supported-ext": null,
                "paging": {"page": "foo"},
                "paging-meta": {"key": "page"}
            }
        }))
        .unwrap();

    let api = fx.factory.create_api("v1").unwrap();
    assert_eq!(Value::Object(api.options().clone()), expected);
}

#[test]
fn test_invalid_api_namespace() {
    let mut fx = setup();
    fx.factory
        .configure(BTreeMap::from([("v1".to_string(), ApiConfig::new())]));

    let err = fx.factory.create_api("v2").unwrap_err();
    assert!(matches!(err, ApiError::NamespaceNotFound(_)));
    assert!(err.to_string().contains("v2"));
}

#[test]
fn test_v2_schemas_override_defaults() {
    let mut fx = setup();
    fx.factory
        .configure(BTreeMap::from([("v2".to_string(), ApiConfig::new())]));

    let api = fx.factory.create_api("v2").unwrap();
    assert_eq!(api.schemas()["Person"], "Api\\People\\V2\\Schema");
    assert_eq!(api.schemas()["Comment"], "Api\\Comments\\Schema");
}
