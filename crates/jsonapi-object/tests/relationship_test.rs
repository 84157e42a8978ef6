use jsonapi_object::{
    ObjectError, Relationship, RelationshipData, ResourceIdentifier, ResourceIdentifierCollection,
    StandardObject,
};
use serde_json::{json, Value};

fn belongs_to() -> Value {
    json!({"type": "foo", "id": 123})
}

fn has_many() -> Vec<Value> {
    vec![
        json!({"type": "bar", "id": 456}),
        json!({"type": "baz", "id": 789}),
    ]
}

#[test]
fn test_has_one() {
    let relationship = Relationship::from_value(json!({"data": belongs_to()})).unwrap();
    let expected = ResourceIdentifier::from_value(&belongs_to()).unwrap();

    assert_eq!(relationship.get_data(), &RelationshipData::One(expected.clone()));
    assert_eq!(relationship.get_identifier().unwrap(), &expected);
    assert!(relationship.is_has_one());
    assert!(!relationship.is_has_many());
    assert!(relationship.has_identifier());
}

#[test]
fn test_empty_has_one() {
    let relationship = Relationship::from_value(json!({"data": null})).unwrap();

    assert_eq!(relationship.get_data(), &RelationshipData::Empty);
    assert!(relationship.is_has_one());
    assert!(!relationship.is_has_many());
    assert!(!relationship.has_identifier());
    assert_eq!(relationship.get_identifier().unwrap_err(), ObjectError::NoIdentifier);
}

#[test]
fn test_has_many() {
    let relationship = Relationship::from_value(json!({"data": has_many()})).unwrap();
    let expected = ResourceIdentifierCollection::create(&has_many()).unwrap();

    assert_eq!(relationship.get_data(), &RelationshipData::Many(expected));
    assert!(relationship.is_has_many());
    assert!(!relationship.is_has_one());
    assert!(!relationship.has_identifier());
    assert_eq!(relationship.get_identifiers().unwrap().len(), 2);
    assert_eq!(relationship.get_identifier().unwrap_err(), ObjectError::NoIdentifier);
}

#[test]
fn test_empty_has_many() {
    let relationship = Relationship::from_value(json!({"data": []})).unwrap();

    assert_eq!(
        relationship.get_data(),
        &RelationshipData::Many(ResourceIdentifierCollection::new())
    );
    assert!(relationship.is_has_many());
    assert!(!relationship.is_has_one());
}

#[test]
fn test_get_meta() {
    let mut relationship = Relationship::new();

    assert!(!relationship.has_meta());
    assert_eq!(relationship.get_meta(), StandardObject::new());
    assert!(relationship.is_has_one());

    let input = json!({"meta": {"foo": "bar"}});
    relationship.set_proxy(input.clone()).unwrap();

    assert!(relationship.has_meta());
    assert_eq!(
        relationship.get_meta(),
        StandardObject::from_value(input["meta"].clone()).unwrap()
    );
    assert_eq!(relationship.get_meta().get("foo"), Some(&json!("bar")));
}
