use docbatch_model::{
    EntityKind, EntitySchema, FieldRule, FieldType, SchemaValidator, ValidationHook, Violation,
};
use docbatch_types::Document;
use pretty_assertions::assert_eq;
use serde_json::json;

const USER: EntityKind = EntityKind::new("user");
const POST: EntityKind = EntityKind::new("post");

fn doc(value: serde_json::Value) -> Document {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn user_schema() -> EntitySchema {
    EntitySchema::new(
        USER,
        vec![
            FieldRule::text("/name", true),
            FieldRule::number("/age", false),
            FieldRule::reference("/manager", false),
        ],
    )
}

// ── FieldRule constructors ───────────────────────────────────────

#[test]
fn rule_shorthands_set_type_and_required() {
    let f = FieldRule::text("/name", true);
    assert_eq!(f.field_path, "/name");
    assert_eq!(f.field_type, FieldType::Text);
    assert!(f.required);

    assert_eq!(FieldRule::bool("/x", false).field_type, FieldType::Bool);
    assert_eq!(FieldRule::timestamp("/x", false).field_type, FieldType::Timestamp);
    assert_eq!(FieldRule::array("/x", false).field_type, FieldType::Array);
    assert_eq!(FieldRule::map("/x", false).field_type, FieldType::Map);
}

// ── EntitySchema::check ──────────────────────────────────────────

#[test]
fn valid_record_has_no_violations() {
    let record = doc(json!({"name": "Ada", "age": 36, "manager": "users/u0"}));
    assert!(user_schema().check(&record).is_empty());
}

#[test]
fn optional_fields_may_be_absent_or_null() {
    let record = doc(json!({"name": "Ada", "age": null}));
    assert!(user_schema().check(&record).is_empty());
}

#[test]
fn missing_required_field() {
    let record = doc(json!({"age": 36}));
    assert_eq!(
        user_schema().check(&record),
        vec![Violation::new("/name", "is required")]
    );
}

#[test]
fn reports_every_failing_field() {
    let record = doc(json!({"name": 7, "age": "old", "manager": "users"}));
    assert_eq!(
        user_schema().check(&record),
        vec![
            Violation::new("/name", "expected a string"),
            Violation::new("/age", "expected a number"),
            Violation::new("/manager", "expected a document path"),
        ]
    );
}

#[test]
fn nested_pointer_paths() {
    let schema = EntitySchema::new(USER, vec![FieldRule::text("/address/city", true)]);
    assert!(schema.check(&doc(json!({"address": {"city": "London"}}))).is_empty());
    assert_eq!(schema.check(&doc(json!({"address": {}}))).len(), 1);
}

#[test]
fn timestamp_accepts_millis_or_string() {
    let schema = EntitySchema::new(USER, vec![FieldRule::timestamp("/at", true)]);
    assert!(schema.check(&doc(json!({"at": 1_700_000_000_000_i64}))).is_empty());
    assert!(schema.check(&doc(json!({"at": "2024-01-01T00:00:00Z"}))).is_empty());
    assert_eq!(schema.check(&doc(json!({"at": true}))).len(), 1);
    assert_eq!(
        schema.check(&doc(json!({"at": "definitely not a date"}))),
        vec![Violation::new("/at", "expected a timestamp")]
    );
    assert_eq!(schema.check(&doc(json!({"at": "2024-13-01T00:00:00Z"}))).len(), 1);
}

#[test]
fn schema_deserializes_from_json() {
    let schema: EntitySchema = serde_json::from_value(json!({
        "entity_type": "user",
        "fields": [
            {"field_path": "/name", "field_type": "text", "required": true},
            {"field_path": "/tags", "field_type": "array"}
        ]
    }))
    .unwrap();
    assert_eq!(schema.fields.len(), 2);
    assert!(!schema.fields[1].required);
}

// ── SchemaValidator ──────────────────────────────────────────────

#[test]
fn validator_checks_matching_kind_only() {
    let validator = SchemaValidator::new().with_schema(user_schema());
    let bad = doc(json!({}));

    assert_eq!(validator.validate(USER, &bad).len(), 1);
    assert!(validator.validate(POST, &bad).is_empty());
}

#[test]
fn later_schema_replaces_earlier() {
    let validator = SchemaValidator::new()
        .with_schema(user_schema())
        .with_schema(EntitySchema::new(USER, vec![]));
    assert!(validator.validate(USER, &doc(json!({}))).is_empty());
}
