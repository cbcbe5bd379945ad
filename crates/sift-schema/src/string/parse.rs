//! String coercion and narrowing policy.

use std::borrow::Cow;

use sift_core::{display_number, ErrorDetail, ValidationResult, Value};

use super::transform::StringTransform;
use super::StringSchema;
use crate::schema::Schema;

const FIELD: &str = "value";
const EXPECTED: &str = "string";
const SUGGESTION: &str = "value must be a string";

/// String form of an arbitrary input. Total.
pub(crate) fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => display_number(*n),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Undefined => String::new(),
        other => other.to_json_text().unwrap_or_default(),
    }
}

impl Schema for StringSchema {
    type Output = String;

    fn parse(&self, input: &Value) -> ValidationResult<String> {
        let value = if self.coerce {
            tracing::trace!(from = input.type_name(), "coercing to string");
            Cow::Owned(Value::String(coerce_to_string(input)))
        } else {
            Cow::Borrowed(input)
        };

        let result = match value.as_str() {
            Some(s) => StringTransform::new(s.to_string()).transform(&self.checks),
            None => self.resolve_non_string(&value),
        };

        if result.is_failure() {
            tracing::debug!(
                schema = "string",
                errors = result.errors().len(),
                "string parse failed"
            );
        }
        result
    }
}

impl StringSchema {
    fn resolve_non_string(&self, value: &Value) -> ValidationResult<String> {
        if let Some(message) = &self.required {
            return ValidationResult::fail(
                ErrorDetail::new(FIELD, message.as_str(), "required")
                    .with_expected_type(EXPECTED)
                    .with_received(value.clone())
                    .with_suggestion(SUGGESTION),
            );
        }
        if self.optional {
            return ValidationResult::success(String::new());
        }
        if self.nullable && value.is_null() {
            return ValidationResult::success(self.default.clone().unwrap_or_default());
        }
        if let Some(default) = &self.default {
            return ValidationResult::success(default.clone());
        }
        ValidationResult::fail(
            ErrorDetail::new(FIELD, self.type_message.as_str(), "type")
                .with_expected_type(EXPECTED)
                .with_received(value.clone())
                .with_suggestion(SUGGESTION),
        )
    }
}
