//! Array schema.
//!
//! Every element is parsed, even after a failure. A failing element's
//! errors are relabeled with the element itself rather than its index:
//! `"<element_label> <element as JSON>"`.

use sift_core::{ArrayMessages, Catalog, ErrorDetail, ValidationResult, Value};

use crate::schema::Schema;

/// Validator for arrays whose elements all match one item schema.
#[derive(Debug, Clone)]
pub struct ArraySchema<S> {
    item: S,
    messages: ArrayMessages,
}

impl<S: Schema> ArraySchema<S> {
    pub fn new(item: S) -> Self {
        Self {
            item,
            messages: ArrayMessages::default(),
        }
    }

    pub fn with_catalog(item: S, catalog: &Catalog) -> Self {
        Self {
            item,
            messages: catalog.array.clone(),
        }
    }

    pub fn item(&self) -> &S {
        &self.item
    }

    fn element_field(&self, element: &Value) -> String {
        let text = element
            .to_json_text()
            .unwrap_or_else(|| "undefined".to_string());
        format!("{} {}", self.messages.element_label, text)
    }
}

impl<S: Schema> Schema for ArraySchema<S> {
    type Output = Vec<S::Output>;

    fn parse(&self, input: &Value) -> ValidationResult<Vec<S::Output>> {
        let Some(elements) = input.as_array() else {
            tracing::debug!(schema = "array", received = input.type_name(), "not an array");
            return ValidationResult::fail(
                ErrorDetail::new("array", self.messages.not_an_array.as_str(), "parse")
                    .with_expected_type("array")
                    .with_received(input.clone())
                    .with_suggestion("Provided value is not an array"),
            );
        };

        let mut data = Vec::with_capacity(elements.len());
        let mut errors = Vec::new();

        for element in elements {
            match self.item.parse(element) {
                ValidationResult::Success { data: parsed } => data.push(parsed),
                ValidationResult::Failure { errors: failed } => {
                    let field = self.element_field(element);
                    errors.extend(failed.into_iter().map(|e| e.relabel(field.as_str())));
                }
            }
        }

        if errors.is_empty() {
            ValidationResult::success(data)
        } else {
            tracing::debug!(schema = "array", errors = errors.len(), "array parse failed");
            ValidationResult::failure(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BooleanSchema, NumberSchema, StringSchema};
    use serde_json::json;

    #[test]
    fn parses_every_element() {
        let schema = ArraySchema::new(StringSchema::new().trim());
        let data = schema.parse(&Value::from(json!([" a ", "b"]))).into_result().unwrap();
        assert_eq!(data, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn failing_element_is_labeled_by_value() {
        let schema = ArraySchema::new(BooleanSchema::new());
        let result = schema.parse(&Value::from(json!([false, true, "hello"])));
        assert_eq!(result.errors().len(), 1);
        let error = &result.errors()[0];
        assert_eq!(error.received_value, Value::from("hello"));
        assert_eq!(error.field, r#"Invalid element "hello""#);
        assert_eq!(error.operation, "parse");
    }

    #[test]
    fn errors_aggregate_across_elements() {
        let schema = ArraySchema::new(NumberSchema::new().positive());
        let result = schema.parse(&Value::from(json!([1, -1, 2, "x", 0])));
        let operations: Vec<_> = result.errors().iter().map(|e| e.operation.as_str()).collect();
        assert_eq!(operations, vec!["positive", "parse", "positive"]);
    }

    #[test]
    fn undefined_element_label() {
        let schema = ArraySchema::new(StringSchema::new());
        let input = Value::Array(vec![Value::Undefined]);
        assert_eq!(schema.parse(&input).errors()[0].field, "Invalid element undefined");
    }

    #[test]
    fn non_array_fails_once() {
        let schema = ArraySchema::new(StringSchema::new());
        let result = schema.parse(&Value::from(json!({"0": "a"})));
        let error = &result.errors()[0];
        assert_eq!(error.field, "array");
        assert_eq!(error.expected_type, "array");
        assert_eq!(error.message, "Please provide an array");
        assert_eq!(error.suggestion, "Provided value is not an array");
    }

    #[test]
    fn empty_array_succeeds() {
        let schema = ArraySchema::new(NumberSchema::new());
        assert_eq!(schema.parse(&Value::Array(Vec::new())), ValidationResult::success(vec![]));
    }

    #[test]
    fn catalog_label() {
        let mut catalog = Catalog::default();
        catalog.array.element_label = "Bad item".into();
        let schema = ArraySchema::with_catalog(NumberSchema::new(), &catalog);
        let result = schema.parse(&Value::from(json!([[1, 2]])));
        assert_eq!(result.errors()[0].field, "Bad item [1,2]");
    }
}
