//! Number coercion and narrowing policy.

use std::borrow::Cow;

use sift_core::{parse_number, ErrorDetail, ValidationResult, Value};

use super::transform::NumberTransform;
use super::NumberSchema;
use crate::schema::Schema;

impl NumberSchema {
    /// Numeric form of an arbitrary input. Total: every input maps to a
    /// non-NaN number.
    pub(crate) fn coerce_to_number(&self, value: &Value) -> f64 {
        let fallback = self.default.unwrap_or(0.0);
        match value {
            Value::Number(n) if n.is_nan() => fallback,
            Value::Number(n) => *n,
            Value::String(s) => {
                let parsed = parse_number(s);
                if parsed.is_nan() {
                    0.0
                } else {
                    parsed
                }
            }
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Null => 0.0,
            Value::Array(items) => items.len() as f64,
            Value::Object(_) | Value::Undefined => fallback,
        }
    }
}

impl Schema for NumberSchema {
    type Output = f64;

    fn parse(&self, input: &Value) -> ValidationResult<f64> {
        let value = if self.coerce {
            tracing::trace!(from = input.type_name(), "coercing to number");
            Cow::Owned(Value::Number(self.coerce_to_number(input)))
        } else {
            Cow::Borrowed(input)
        };

        if (self.nullable && value.is_null()) || (self.optional && value.is_undefined()) {
            return ValidationResult::success(self.default.unwrap_or(0.0));
        }

        let result = match value.as_f64() {
            Some(n) if !n.is_nan() => NumberTransform::new(n).transform(&self.checks),
            _ => match self.default {
                Some(default) => ValidationResult::success(default),
                None => ValidationResult::fail(
                    ErrorDetail::new("number", self.type_message.as_str(), "parse")
                        .with_expected_type("number")
                        .with_received(value.into_owned())
                        .with_suggestion("Ensure the value is a number"),
                ),
            },
        };

        if result.is_failure() {
            tracing::debug!(
                schema = "number",
                errors = result.errors().len(),
                "number parse failed"
            );
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::Bound;
    use serde_json::json;

    fn parse(schema: &NumberSchema, input: serde_json::Value) -> ValidationResult<f64> {
        schema.parse(&Value::from(input))
    }

    #[test]
    fn numbers_pass() {
        assert_eq!(parse(&NumberSchema::new(), json!(42)), ValidationResult::success(42.0));
        assert!(NumberSchema::new().parse(&Value::Number(f64::INFINITY)).is_success());
    }

    #[test]
    fn non_numbers_fail_with_parse_operation() {
        let result = parse(&NumberSchema::new(), json!("42"));
        let error = &result.errors()[0];
        assert_eq!(error.field, "number");
        assert_eq!(error.operation, "parse");
        assert_eq!(error.expected_type, "number");
        assert_eq!(error.message, "Value must be a number");
        assert_eq!(error.received_value, Value::from("42"));
        assert_eq!(error.suggestion, "Ensure the value is a number");
    }

    #[test]
    fn nan_is_not_a_number() {
        let result = NumberSchema::new().parse(&Value::Number(f64::NAN));
        let received = &result.errors()[0].received_value;
        assert!(matches!(received, Value::Number(n) if n.is_nan()));
    }

    #[test]
    fn zero_default_is_honoured() {
        let schema = NumberSchema::new().default(0.0);
        assert_eq!(parse(&schema, json!("x")), ValidationResult::success(0.0));
    }

    #[test]
    fn default_skips_checks() {
        let schema = NumberSchema::new().default(3.0).min(10.0);
        assert_eq!(parse(&schema, json!(null)), ValidationResult::success(3.0));
        assert!(parse(&schema, json!(4)).is_failure());
    }

    #[test]
    fn coercion_rules() {
        let schema = NumberSchema::new();
        let coerce = |v: serde_json::Value| schema.coerce_to_number(&Value::from(v));
        assert_eq!(coerce(json!(" 12.5 ")), 12.5);
        assert_eq!(coerce(json!("")), 0.0);
        assert_eq!(coerce(json!("0x1f")), 31.0);
        assert_eq!(coerce(json!("abc")), 0.0);
        assert_eq!(coerce(json!(true)), 1.0);
        assert_eq!(coerce(json!(false)), 0.0);
        assert_eq!(coerce(json!(null)), 0.0);
        assert_eq!(coerce(json!([1, 2, 3])), 3.0);
        assert_eq!(coerce(json!({"a": 1})), 0.0);
        assert_eq!(schema.coerce_to_number(&Value::Undefined), 0.0);

        let with_default = NumberSchema::new().default(7.0);
        assert_eq!(with_default.coerce_to_number(&Value::from(json!({}))), 7.0);
        assert_eq!(with_default.coerce_to_number(&Value::Number(f64::NAN)), 7.0);
        assert_eq!(with_default.coerce_to_number(&Value::from(json!([]))), 0.0);
    }

    #[test]
    fn coerced_value_runs_checks() {
        let schema = NumberSchema::new().coerce().min(18.0);
        assert_eq!(parse(&schema, json!("21")), ValidationResult::success(21.0));
        let result = parse(&schema, json!("17"));
        assert_eq!(result.errors()[0].operation, "min");
        assert_eq!(result.errors()[0].received_value, Value::Number(17.0));
    }

    #[test]
    fn coerced_null_is_zero_even_when_nullable() {
        let schema = NumberSchema::new().coerce().nullable().default(5.0);
        assert_eq!(parse(&schema, json!(null)), ValidationResult::success(0.0));
    }

    #[test]
    fn nullable_and_optional_shortcuts() {
        let schema = NumberSchema::new().nullable().optional().positive();
        assert_eq!(parse(&schema, json!(null)), ValidationResult::success(0.0));
        assert_eq!(schema.parse(&Value::Undefined), ValidationResult::success(0.0));

        let schema = NumberSchema::new().nullable().default(2.0);
        assert_eq!(parse(&schema, json!(null)), ValidationResult::success(2.0));
    }

    #[test]
    fn between_exclusive_rejects_boundary() {
        let schema = NumberSchema::new().between(5.0, 10.0, Bound::Exclusive);
        let result = parse(&schema, json!(5));
        assert_eq!(result.errors()[0].operation, "between");
        assert_eq!(
            result.errors()[0].suggestion,
            "value must be between (exclusive) 5 and 10"
        );
        assert!(parse(&schema, json!(6)).is_success());
    }

    #[test]
    fn custom_messages() {
        let schema = NumberSchema::new()
            .type_message("numbers only")
            .max(3.0)
            .message("at most three");
        assert_eq!(parse(&schema, json!("x")).errors()[0].message, "numbers only");
        assert_eq!(parse(&schema, json!(4)).errors()[0].message, "at most three");
    }
}
