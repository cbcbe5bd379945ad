//! # Object Schema — Field-Level Aggregation
//!
//! An [`ObjectSchema`] validates a mapping against a [`Shape`]: a list of
//! keys, each with its own child schema. Every key is parsed, even after
//! an earlier key failed, so one call reports every invalid field. Child
//! errors keep everything but their `field`, which becomes the key.
//!
//! Keys absent from the input are parsed as `undefined`; input members
//! absent from the shape are dropped from the output.

use sift_core::{Catalog, ErrorDetail, Map, ObjectMessages, ValidationResult, Value};

use crate::schema::{DynSchema, Schema};

static UNDEFINED: Value = Value::Undefined;

/// Keys and their child schemas, in declaration order.
#[derive(Default)]
pub struct Shape {
    fields: Vec<(String, Box<dyn DynSchema>)>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key`. Declaring a key twice replaces its schema in place.
    pub fn field(mut self, key: impl Into<String>, schema: impl DynSchema + 'static) -> Self {
        let key = key.into();
        let schema: Box<dyn DynSchema> = Box::new(schema);
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = schema,
            None => self.fields.push((key, schema)),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}

/// Validator for objects with a fixed set of keys.
#[derive(Debug)]
pub struct ObjectSchema {
    shape: Shape,
    messages: ObjectMessages,
}

impl ObjectSchema {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            messages: ObjectMessages::default(),
        }
    }

    pub fn with_catalog(shape: Shape, catalog: &Catalog) -> Self {
        Self {
            shape,
            messages: catalog.object.clone(),
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl Schema for ObjectSchema {
    type Output = Map;

    fn parse(&self, input: &Value) -> ValidationResult<Map> {
        let Some(object) = input.as_object() else {
            tracing::debug!(schema = "object", received = input.type_name(), "not an object");
            return ValidationResult::fail(
                ErrorDetail::new("", self.messages.not_an_object.as_str(), "parse")
                    .with_expected_type("object")
                    .with_received(input.clone())
                    .with_suggestion("Please provide a correct object"),
            );
        };

        let mut data = Map::with_capacity(self.shape.len());
        let mut errors = Vec::new();

        for (key, schema) in &self.shape.fields {
            let value = object.get(key).unwrap_or(&UNDEFINED);
            match schema.parse_value(value) {
                ValidationResult::Success { data: parsed } => {
                    data.insert(key.as_str(), parsed);
                }
                ValidationResult::Failure { errors: failed } => {
                    errors.extend(failed.into_iter().map(|e| e.relabel(key.as_str())));
                }
            }
        }

        if errors.is_empty() {
            ValidationResult::success(data)
        } else {
            tracing::debug!(schema = "object", errors = errors.len(), "object parse failed");
            ValidationResult::failure(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BooleanSchema, NumberSchema, StringSchema};
    use serde_json::json;

    fn user() -> ObjectSchema {
        ObjectSchema::new(
            Shape::new()
                .field("name", StringSchema::new().min(3))
                .field("age", NumberSchema::new().min(30.0))
                .field("is_verify", BooleanSchema::new()),
        )
    }

    #[test]
    fn valid_object_is_rebuilt_in_shape_order() {
        let input = Value::from(json!({"is_verify": true, "age": 31, "name": "alice", "extra": 1}));
        let data = user().parse(&input).into_result().unwrap();
        assert_eq!(data.keys().collect::<Vec<_>>(), vec!["name", "age", "is_verify"]);
        assert_eq!(data.get("age"), Some(&Value::Number(31.0)));
        assert!(!data.contains_key("extra"));
    }

    #[test]
    fn errors_aggregate_across_fields() {
        let input = Value::from(json!({"name": "hi", "age": ""}));
        let result = user().parse(&input);
        let fields: Vec<_> = result.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "age", "is_verify"]);
        assert_eq!(result.errors()[0].operation, "min");
        assert_eq!(result.errors()[1].operation, "parse");
        assert_eq!(result.errors()[2].received_value, Value::Undefined);
    }

    #[test]
    fn non_objects_fail_once() {
        for input in [json!(null), json!([1]), json!("x"), json!(3)] {
            let result = user().parse(&Value::from(input.clone()));
            assert_eq!(result.errors().len(), 1, "input {input}");
            let error = &result.errors()[0];
            assert_eq!(error.field, "");
            assert_eq!(error.expected_type, "object");
            assert_eq!(error.message, "Value must be a valid object");
        }
        assert!(user().parse(&Value::Undefined).is_failure());
    }

    #[test]
    fn nested_errors_take_the_outer_key() {
        let schema = ObjectSchema::new(Shape::new().field(
            "profile",
            ObjectSchema::new(Shape::new().field("email", StringSchema::new().email())),
        ));
        let input = Value::from(json!({"profile": {"email": "nope"}}));
        let result = schema.parse(&input);
        assert_eq!(result.errors()[0].field, "profile");
        assert_eq!(result.errors()[0].operation, "email");
    }

    #[test]
    fn redeclared_key_replaces_schema() {
        let shape = Shape::new()
            .field("a", StringSchema::new())
            .field("b", StringSchema::new())
            .field("a", NumberSchema::new());
        assert_eq!(shape.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        let schema = ObjectSchema::new(shape);
        assert!(schema.parse(&Value::from(json!({"a": 1, "b": "x"}))).is_success());
    }

    #[test]
    fn catalog_message_for_shape_error() {
        let mut catalog = Catalog::default();
        catalog.object.not_an_object = "object expected".into();
        let schema = ObjectSchema::with_catalog(Shape::new(), &catalog);
        assert_eq!(schema.parse(&Value::Null).errors()[0].message, "object expected");
    }

    #[test]
    fn empty_shape_accepts_any_object() {
        let schema = ObjectSchema::new(Shape::new());
        let data = schema.parse(&Value::from(json!({"x": 1}))).into_result().unwrap();
        assert!(data.is_empty());
    }
}
