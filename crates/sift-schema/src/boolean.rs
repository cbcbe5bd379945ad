//! Boolean schema.
//!
//! Null and undefined shortcuts return before any check runs, so a
//! `nullable().is_true()` schema accepts `null` as the default (or `false`).

use std::borrow::Cow;

use sift_core::{BooleanMessages, Catalog, ErrorDetail, ValidationResult, Value};

use crate::schema::Schema;

const FIELD: &str = "boolean";

/// Validating boolean predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanRule {
    IsTrue,
    IsFalse,
    Equal(bool),
}

impl BooleanRule {
    pub fn kind(&self) -> &'static str {
        match self {
            BooleanRule::IsTrue => "isTrue",
            BooleanRule::IsFalse => "isFalse",
            BooleanRule::Equal(_) => "equal",
        }
    }

    fn expected(&self) -> bool {
        match *self {
            BooleanRule::IsTrue => true,
            BooleanRule::IsFalse => false,
            BooleanRule::Equal(expected) => expected,
        }
    }

    fn suggestion(&self) -> &'static str {
        match self {
            BooleanRule::IsTrue => r#"Your provided value is not "true""#,
            BooleanRule::IsFalse => r#"Your provided value is not "false""#,
            BooleanRule::Equal(_) => "Provide a same value",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanCheck {
    pub rule: BooleanRule,
    pub message: String,
}

/// Validator for boolean values.
#[derive(Debug, Clone)]
pub struct BooleanSchema {
    checks: Vec<BooleanCheck>,
    default: Option<bool>,
    coerce: bool,
    nullable: bool,
    optional: bool,
    messages: BooleanMessages,
}

impl Default for BooleanSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl BooleanSchema {
    pub fn new() -> Self {
        Self::with_messages(BooleanMessages::default())
    }

    pub fn with_catalog(catalog: &Catalog) -> Self {
        Self::with_messages(catalog.boolean.clone())
    }

    fn with_messages(messages: BooleanMessages) -> Self {
        Self {
            checks: Vec::new(),
            default: None,
            coerce: false,
            nullable: false,
            optional: false,
            messages,
        }
    }

    pub fn checks(&self) -> &[BooleanCheck] {
        &self.checks
    }

    /// Message of the not-a-boolean error.
    pub fn type_message(mut self, message: impl Into<String>) -> Self {
        self.messages.not_a_boolean = message.into();
        self
    }

    /// Override the message of the most recently added check.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        if let Some(check) = self.checks.last_mut() {
            check.message = message.into();
        }
        self
    }

    fn rule(mut self, rule: BooleanRule, message: String) -> Self {
        self.checks.push(BooleanCheck { rule, message });
        self
    }

    pub fn is_true(self) -> Self {
        let message = self.messages.is_true_error.clone();
        self.rule(BooleanRule::IsTrue, message)
    }

    pub fn is_false(self) -> Self {
        let message = self.messages.is_false_error.clone();
        self.rule(BooleanRule::IsFalse, message)
    }

    pub fn equal(self, expected: bool) -> Self {
        let message = self.messages.equal_error.clone();
        self.rule(BooleanRule::Equal(expected), message)
    }

    pub fn default(mut self, value: bool) -> Self {
        self.default = Some(value);
        self
    }

    /// Map `"true"`/`"false"` (any case) and `1`/`0` to booleans; anything
    /// else becomes the default or `false`.
    pub fn coerce(mut self) -> Self {
        self.coerce = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn fallback(&self) -> bool {
        self.default.unwrap_or(false)
    }

    fn coerce_to_bool(&self, value: &Value) -> bool {
        match value {
            Value::Bool(b) => *b,
            Value::String(s) if s.eq_ignore_ascii_case("true") => true,
            Value::String(s) if s.eq_ignore_ascii_case("false") => false,
            Value::Number(n) if *n == 1.0 => true,
            Value::Number(n) if *n == 0.0 => false,
            _ => self.fallback(),
        }
    }

    fn run_checks(&self, value: bool) -> ValidationResult<bool> {
        match self.checks.iter().find(|c| c.rule.expected() != value) {
            Some(check) => ValidationResult::fail(
                ErrorDetail::new(FIELD, check.message.as_str(), check.rule.kind())
                    .with_expected_type(check.rule.expected().to_string())
                    .with_received(value)
                    .with_suggestion(check.rule.suggestion()),
            ),
            None => ValidationResult::success(value),
        }
    }
}

impl Schema for BooleanSchema {
    type Output = bool;

    fn parse(&self, input: &Value) -> ValidationResult<bool> {
        let value = if self.coerce {
            tracing::trace!(from = input.type_name(), "coercing to boolean");
            Cow::Owned(Value::Bool(self.coerce_to_bool(input)))
        } else {
            Cow::Borrowed(input)
        };

        if (self.nullable && value.is_null()) || (self.optional && value.is_undefined()) {
            return ValidationResult::success(self.fallback());
        }

        let result = match (value.as_bool(), self.default) {
            (Some(b), _) => self.run_checks(b),
            (None, Some(default)) => ValidationResult::success(default),
            (None, None) => ValidationResult::fail(
                ErrorDetail::new(FIELD, self.messages.not_a_boolean.as_str(), "parse")
                    .with_expected_type("boolean")
                    .with_received(value.into_owned())
                    .with_suggestion(
                        "Use coercion or transformation to convert the value to boolean",
                    ),
            ),
        };

        if result.is_failure() {
            tracing::debug!(
                schema = "boolean",
                errors = result.errors().len(),
                "boolean parse failed"
            );
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(schema: &BooleanSchema, input: serde_json::Value) -> ValidationResult<bool> {
        schema.parse(&Value::from(input))
    }

    #[test]
    fn booleans_pass() {
        assert_eq!(parse(&BooleanSchema::new(), json!(true)), ValidationResult::success(true));
        assert_eq!(parse(&BooleanSchema::new(), json!(false)), ValidationResult::success(false));
    }

    #[test]
    fn non_boolean_error_shape() {
        let result = parse(&BooleanSchema::new(), json!("yes"));
        let error = &result.errors()[0];
        assert_eq!(error.field, "boolean");
        assert_eq!(error.operation, "parse");
        assert_eq!(error.expected_type, "boolean");
        assert_eq!(error.message, "Provided value is not a boolean");
        assert_eq!(error.received_value, Value::from("yes"));
    }

    #[test]
    fn nullable_default_bypasses_checks() {
        let schema = BooleanSchema::new().default(true).nullable();
        assert_eq!(parse(&schema, json!(null)), ValidationResult::success(true));

        let schema = BooleanSchema::new().optional().is_true();
        assert_eq!(schema.parse(&Value::Undefined), ValidationResult::success(false));
    }

    #[test]
    fn default_replaces_wrong_type() {
        let schema = BooleanSchema::new().default(false);
        assert_eq!(parse(&schema, json!("nope")), ValidationResult::success(false));
    }

    #[test]
    fn coercion_rules() {
        let schema = BooleanSchema::new().coerce();
        assert_eq!(parse(&schema, json!("TRUE")), ValidationResult::success(true));
        assert_eq!(parse(&schema, json!("False")), ValidationResult::success(false));
        assert_eq!(parse(&schema, json!(1)), ValidationResult::success(true));
        assert_eq!(parse(&schema, json!(0)), ValidationResult::success(false));
        assert_eq!(parse(&schema, json!(2)), ValidationResult::success(false));
        assert_eq!(parse(&schema, json!("yes")), ValidationResult::success(false));

        let schema = BooleanSchema::new().coerce().default(true);
        assert_eq!(parse(&schema, json!({"x": 1})), ValidationResult::success(true));
    }

    #[test]
    fn is_true_and_is_false() {
        let schema = BooleanSchema::new().is_true();
        let result = parse(&schema, json!(false));
        let error = &result.errors()[0];
        assert_eq!(error.operation, "isTrue");
        assert_eq!(error.expected_type, "true");
        assert_eq!(error.suggestion, r#"Your provided value is not "true""#);

        let schema = BooleanSchema::new().is_false();
        assert!(parse(&schema, json!(false)).is_success());
        assert_eq!(parse(&schema, json!(true)).errors()[0].expected_type, "false");
    }

    #[test]
    fn equal_reports_expected_value() {
        let schema = BooleanSchema::new().equal(true).message("must accept");
        let result = parse(&schema, json!(false));
        let error = &result.errors()[0];
        assert_eq!(error.operation, "equal");
        assert_eq!(error.expected_type, "true");
        assert_eq!(error.message, "must accept");
        assert_eq!(error.received_value, Value::Bool(false));
    }

    #[test]
    fn first_failing_check_wins() {
        let schema = BooleanSchema::new().is_false().is_true();
        let result = parse(&schema, json!(true));
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].operation, "isFalse");
    }
}
