//! Number transform engine: runs checks in order, stopping at the first
//! failure.

use sift_core::{ErrorDetail, ValidationResult};

use super::check::NumberCheck;

pub(crate) struct NumberTransform {
    value: f64,
}

impl NumberTransform {
    pub(crate) fn new(value: f64) -> Self {
        Self { value }
    }

    pub(crate) fn transform(self, checks: &[NumberCheck]) -> ValidationResult<f64> {
        let failed = checks.iter().find(|check| !check.rule.accepts(self.value));
        match failed {
            Some(check) => {
                tracing::debug!(operation = check.rule.kind(), "number check failed");
                ValidationResult::fail(
                    ErrorDetail::new("value", check.message.as_str(), check.rule.kind())
                        .with_expected_type("number")
                        .with_received(self.value)
                        .with_suggestion(check.rule.suggestion()),
                )
            }
            None => ValidationResult::success(self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::NumberRule;

    fn check(rule: NumberRule) -> NumberCheck {
        NumberCheck {
            rule,
            message: format!("{} failed", rule.kind()),
        }
    }

    #[test]
    fn stops_at_first_failure() {
        let checks = [
            check(NumberRule::Min(0.0)),
            check(NumberRule::Int),
            check(NumberRule::Max(1.0)),
        ];
        let result = NumberTransform::new(2.5).transform(&checks);
        assert_eq!(result.errors().len(), 1);
        let error = &result.errors()[0];
        assert_eq!(error.operation, "int");
        assert_eq!(error.message, "int failed");
        assert_eq!(error.field, "value");
        assert_eq!(error.expected_type, "number");
    }

    #[test]
    fn success_returns_value_unchanged() {
        let checks = [check(NumberRule::Positive), check(NumberRule::LessEqual(3.0))];
        let result = NumberTransform::new(3.0).transform(&checks);
        assert_eq!(result, ValidationResult::success(3.0));
    }
}
