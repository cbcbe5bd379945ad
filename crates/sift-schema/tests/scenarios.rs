//! # End-to-End Parsing Scenarios
//!
//! Exercises the public constructors the way application code uses them:
//! JSON payloads in, `ValidationResult` out, with the wire shape checked
//! where callers depend on it.

use serde_json::json;
use sift_core::{Catalog, Value};
use sift_schema::{
    array, boolean, number, number_with, object, string, string_with, ArraySchema, Bound,
    CapitalizeStyle, Censor, ObjectSchema, Schema, SchemaOptions, Shape, SlugSeparator,
    StringSchema,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn input(json: serde_json::Value) -> Value {
    Value::from(json)
}

#[test]
fn array_of_booleans_reports_the_offending_element() {
    init_tracing();
    let result = array(boolean()).parse(&input(json!([false, true, "hello"])));
    assert!(result.is_failure());
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].received_value, Value::from("hello"));
}

#[test]
fn object_reports_every_invalid_field() {
    init_tracing();
    let schema = object(
        Shape::new()
            .field("name", string().min(3))
            .field("age", number().min(30.0))
            .field("is_verify", boolean()),
    );
    let result = schema.parse(&input(json!({"name": "hi", "age": ""})));

    let errors = result.errors();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0].field, "name");
    assert_eq!(errors[0].message, "String is too short");
    assert_eq!(errors[1].field, "age");
    assert_eq!(errors[1].message, "Value must be a number");
    assert_eq!(errors[2].field, "is_verify");
    assert_eq!(errors[2].message, "Provided value is not a boolean");
}

#[test]
fn string_length_bounds() {
    let result = string().min(3).max(10).parse(&Value::from("hello hello hello"));
    assert_eq!(result.errors()[0].operation, "max");
}

#[test]
fn exclusive_between_rejects_lower_bound() {
    let result = number()
        .between(5.0, 10.0, Bound::Exclusive)
        .parse(&Value::from(5));
    assert!(result.is_failure());
}

#[test]
fn camel_case_capitalization() {
    let result = string()
        .capitalize(CapitalizeStyle::Camel)
        .parse(&Value::from("hello world"));
    assert_eq!(result.into_result().unwrap(), "helloWorld");
}

#[test]
fn nullable_boolean_uses_default() {
    let result = boolean().default(true).nullable().parse(&Value::Null);
    assert!(result.into_result().unwrap());
}

#[test]
fn failure_wire_shape() {
    let result = string().email().parse(&Value::from("ada@"));
    let wire = serde_json::to_value(&result).unwrap();
    assert_eq!(
        wire,
        json!({
            "success": false,
            "errors": [{
                "field": "value",
                "message": "Invalid email",
                "operation": "email",
                "expectedType": "string",
                "receivedValue": "ada@",
                "suggestion": "value must be a valid email address"
            }]
        })
    );
}

#[test]
fn success_wire_shape_for_objects() {
    let schema = object(
        Shape::new()
            .field("slug", string().slugify(SlugSeparator::Hyphen))
            .field("tags", array(string().to_lower_case()))
            .field("count", number().coerce()),
    );
    let result = schema.parse(&input(json!({
        "slug": "Hello Rust World",
        "tags": ["A", "B"],
        "count": "12"
    })));
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "success": true,
            "data": {"slug": "hello-rust-world", "tags": ["a", "b"], "count": 12}
        })
    );
}

#[test]
fn nested_arrays_of_objects() {
    let schema = array(object(
        Shape::new()
            .field("id", number().int().positive())
            .field("email", string().trim().email()),
    ));
    let result = schema.parse(&input(json!([
        {"id": 1, "email": " a@example.com "},
        {"id": -2, "email": "b@example.com"},
        {"id": 3, "email": "broken"}
    ])));

    let errors = result.errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].operation, "positive");
    assert!(errors[0].field.starts_with("Invalid element {"));
    assert!(errors[0].field.contains(r#""id":-2"#));
    assert_eq!(errors[1].operation, "email");
}

#[test]
fn censoring_pipeline() {
    let schema = string()
        .trim()
        .censor(Censor::words(["darn", "heck"]))
        .max(40);
    let result = schema.parse(&Value::from("  oh darn, what the heck  "));
    assert_eq!(result.into_result().unwrap(), "oh ****, what the ****");

    let card = string().censor(Censor::range(0, 12).replacement('#'));
    let result = card.parse(&Value::from("4111111111111111"));
    assert_eq!(result.into_result().unwrap(), "############1111");
}

#[test]
fn constructor_options_set_type_message() {
    let schema = string_with(SchemaOptions::message("a name is needed"));
    assert_eq!(schema.parse(&Value::Null).errors()[0].message, "a name is needed");

    let schema = number_with(SchemaOptions::message("age must be numeric"));
    assert_eq!(schema.parse(&Value::from("x")).errors()[0].message, "age must be numeric");

    let schema = string_with(SchemaOptions::default());
    assert_eq!(schema.parse(&Value::Null).errors()[0].message, "Value must be a string");
}

#[test]
fn catalog_overrides_flow_into_every_schema() {
    let catalog = Catalog::from_yaml_str(
        "string:\n  too_short: zu kurz\nobject:\n  not_an_object: kein Objekt\narray:\n  element_label: Element\n",
    )
    .unwrap();

    let name = StringSchema::with_catalog(&catalog).min(5);
    assert_eq!(name.parse(&Value::from("abc")).errors()[0].message, "zu kurz");

    let schema = ObjectSchema::with_catalog(Shape::new().field("name", name), &catalog);
    assert_eq!(schema.parse(&Value::Null).errors()[0].message, "kein Objekt");

    let list = ArraySchema::with_catalog(number(), &catalog);
    assert_eq!(list.parse(&input(json!([true]))).errors()[0].field, "Element true");
}

#[test]
fn result_converts_for_question_mark() {
    fn load(payload: serde_json::Value) -> Result<f64, sift_core::ValidationErrors> {
        let port = number().int().between(1.0, 65535.0, Bound::Inclusive);
        let value = port.parse(&Value::from(payload)).into_result()?;
        Ok(value)
    }

    assert_eq!(load(json!(8080)).unwrap(), 8080.0);
    let err = load(json!(70000)).unwrap_err();
    assert_eq!(err.len(), 1);
    assert!(err.to_string().contains("between"));
}

#[test]
fn schemas_are_shared_across_threads() {
    let schema = std::sync::Arc::new(object(
        Shape::new()
            .field("name", string().min(2))
            .field("score", number().min(0.0)),
    ));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let schema = std::sync::Arc::clone(&schema);
            std::thread::spawn(move || {
                let payload = input(json!({"name": "player", "score": i}));
                schema.parse(&payload).is_success()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
