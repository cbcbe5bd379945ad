//! # Number Schema
//!
//! Narrows an input to an `f64` and runs numeric checks in insertion
//! order, stopping at the first failure. `NaN` never passes narrowing;
//! infinities do, and are rejected only by `finite()`, `int()` or
//! `safe()`.
//!
//! ## Coercion
//!
//! With `coerce()`, numeric strings parse to their value and every other
//! string becomes `0`; booleans become `0`/`1`; `null` becomes `0`;
//! arrays become their length; objects, `undefined` and `NaN` become the
//! default or `0`. Coercion therefore never fails.

mod check;
mod parse;
mod transform;

use sift_core::{Catalog, NumberMessages};

pub use check::{Bound, NumberCheck, NumberRule};

/// Validator for numeric values.
#[derive(Debug, Clone)]
pub struct NumberSchema {
    checks: Vec<NumberCheck>,
    default: Option<f64>,
    coerce: bool,
    nullable: bool,
    optional: bool,
    type_message: String,
    messages: NumberMessages,
}

impl Default for NumberSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberSchema {
    pub fn new() -> Self {
        Self::with_messages(NumberMessages::default())
    }

    pub fn with_catalog(catalog: &Catalog) -> Self {
        Self::with_messages(catalog.number.clone())
    }

    fn with_messages(messages: NumberMessages) -> Self {
        Self {
            checks: Vec::new(),
            default: None,
            coerce: false,
            nullable: false,
            optional: false,
            type_message: messages.not_a_number.clone(),
            messages,
        }
    }

    pub fn checks(&self) -> &[NumberCheck] {
        &self.checks
    }

    /// Message of the not-a-number error.
    pub fn type_message(mut self, message: impl Into<String>) -> Self {
        self.type_message = message.into();
        self
    }

    /// Override the message of the most recently added check.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        if let Some(check) = self.checks.last_mut() {
            check.message = message.into();
        }
        self
    }

    fn rule(mut self, rule: NumberRule, pick: fn(&NumberMessages) -> &String) -> Self {
        let message = pick(&self.messages).clone();
        self.checks.push(NumberCheck { rule, message });
        self
    }

    /// `value >= min`.
    pub fn min(self, min: f64) -> Self {
        self.rule(NumberRule::Min(min), |m| &m.invalid_min)
    }

    /// `value <= max`.
    pub fn max(self, max: f64) -> Self {
        self.rule(NumberRule::Max(max), |m| &m.invalid_max)
    }

    pub fn int(self) -> Self {
        self.rule(NumberRule::Int, |m| &m.invalid_integer)
    }

    /// The value must have a fractional part.
    pub fn float(self) -> Self {
        self.rule(NumberRule::Float, |m| &m.invalid_float)
    }

    pub fn finite(self) -> Self {
        self.rule(NumberRule::Finite, |m| &m.invalid_finite)
    }

    pub fn positive(self) -> Self {
        self.rule(NumberRule::Positive, |m| &m.invalid_positive)
    }

    pub fn negative(self) -> Self {
        self.rule(NumberRule::Negative, |m| &m.invalid_negative)
    }

    pub fn non_negative(self) -> Self {
        self.rule(NumberRule::NonNegative, |m| &m.invalid_non_negative)
    }

    pub fn non_positive(self) -> Self {
        self.rule(NumberRule::NonPositive, |m| &m.invalid_non_positive)
    }

    pub fn equal(self, expected: f64) -> Self {
        self.rule(NumberRule::Equal(expected), |m| &m.invalid_equal)
    }

    pub fn non_equal(self, rejected: f64) -> Self {
        self.rule(NumberRule::NonEqual(rejected), |m| &m.invalid_not_equal)
    }

    /// `value > bound`.
    pub fn gt(self, bound: f64) -> Self {
        self.rule(NumberRule::Greater(bound), |m| &m.invalid_greater)
    }

    /// `value >= bound`.
    pub fn gte(self, bound: f64) -> Self {
        self.rule(NumberRule::GreaterEqual(bound), |m| &m.invalid_greater_equal)
    }

    /// `value < bound`.
    pub fn lt(self, bound: f64) -> Self {
        self.rule(NumberRule::Less(bound), |m| &m.invalid_less)
    }

    /// `value <= bound`.
    pub fn lte(self, bound: f64) -> Self {
        self.rule(NumberRule::LessEqual(bound), |m| &m.invalid_less_equal)
    }

    /// Exact divisibility: `value % divisor == 0`.
    pub fn multiple_of(self, divisor: f64) -> Self {
        self.rule(NumberRule::MultipleOf(divisor), |m| &m.invalid_multiple_of)
    }

    /// Integer no larger in magnitude than 2^53 − 1.
    pub fn safe(self) -> Self {
        self.rule(NumberRule::Safe, |m| &m.invalid_safe)
    }

    pub fn between(self, min: f64, max: f64, bound: Bound) -> Self {
        self.rule(NumberRule::Between { min, max, bound }, |m| {
            &m.invalid_between
        })
    }

    /// Divisibility by `step`, tolerant to floating-point rounding.
    pub fn step(self, step: f64) -> Self {
        self.rule(NumberRule::Step(step), |m| &m.invalid_step)
    }

    /// Value used when the input is not a number. Any value counts,
    /// including `0`.
    pub fn default(mut self, value: f64) -> Self {
        self.default = Some(value);
        self
    }

    pub fn coerce(mut self) -> Self {
        self.coerce = true;
        self
    }

    /// Accept `null` as the default, or `0` without one.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Accept `undefined` as the default, or `0` without one.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}
