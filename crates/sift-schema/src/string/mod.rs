//! # String Schema — Ordered String Pipelines
//!
//! A [`StringSchema`] narrows an input to a string and then runs its
//! checks in the order they were configured. Validating checks stop the
//! pipeline at the first failure; mutating checks (`trim`, case changes,
//! `capitalize`, `slugify`, `censor`) rewrite the value every later check
//! sees.
//!
//! ```
//! use sift_core::Value;
//! use sift_schema::{string, Schema};
//!
//! let schema = string().trim().min(3).to_lower_case();
//! let result = schema.parse(&Value::from("  HELLO "));
//! assert_eq!(result.data().map(String::as_str), Some("hello"));
//! ```
//!
//! ## Non-string inputs
//!
//! After optional coercion, a non-string input is resolved in this order:
//! `required()` fails with a `required` error; `optional()` succeeds with
//! `""`; `nullable()` turns `null` into the default (or `""`); a configured
//! default is returned; otherwise the parse fails with a `type` error.

mod check;
mod parse;
mod transform;

use regex::Regex;
use sift_core::{Catalog, SchemaError, StringMessages};

pub use check::{
    Capitalize, CapitalizeStyle, Censor, CensorMode, CensorTarget, SlugSeparator, StringCheck,
    StringMutation, StringRule,
};

/// Which configured message `.message()` rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageSlot {
    Check(usize),
    Required,
}

/// Validator and transformer for string values.
#[derive(Debug, Clone)]
pub struct StringSchema {
    checks: Vec<StringCheck>,
    default: Option<String>,
    coerce: bool,
    nullable: bool,
    optional: bool,
    required: Option<String>,
    type_message: String,
    messages: StringMessages,
    last_message: Option<MessageSlot>,
}

impl Default for StringSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl StringSchema {
    /// A schema using the built-in messages.
    pub fn new() -> Self {
        Self::with_messages(StringMessages::default())
    }

    /// A schema whose built-in messages come from `catalog`.
    pub fn with_catalog(catalog: &Catalog) -> Self {
        Self::with_messages(catalog.string.clone())
    }

    fn with_messages(messages: StringMessages) -> Self {
        Self {
            checks: Vec::new(),
            default: None,
            coerce: false,
            nullable: false,
            optional: false,
            required: None,
            type_message: messages.not_a_string.clone(),
            messages,
            last_message: None,
        }
    }

    /// Configured checks, in execution order.
    pub fn checks(&self) -> &[StringCheck] {
        &self.checks
    }

    /// Message of the type-mismatch error.
    pub fn type_message(mut self, message: impl Into<String>) -> Self {
        self.type_message = message.into();
        self
    }

    /// Override the message of the most recently added validating check
    /// (or of `required()`). Without such a check this is a no-op.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        match self.last_message {
            Some(MessageSlot::Check(index)) => {
                if let Some(StringCheck::Rule { message: slot, .. }) = self.checks.get_mut(index) {
                    *slot = message.into();
                }
            }
            Some(MessageSlot::Required) => self.required = Some(message.into()),
            None => {}
        }
        self
    }

    fn rule(mut self, rule: StringRule, message: String) -> Self {
        self.last_message = Some(MessageSlot::Check(self.checks.len()));
        self.checks.push(StringCheck::Rule { rule, message });
        self
    }

    fn mutation(mut self, mutation: StringMutation) -> Self {
        self.checks.push(StringCheck::Mutation(mutation));
        self
    }

    /// At least `length` characters.
    pub fn min(self, length: usize) -> Self {
        let message = self.messages.too_short.clone();
        self.rule(StringRule::Min(length), message)
    }

    /// At most `length` characters.
    pub fn max(self, length: usize) -> Self {
        let message = self.messages.too_long.clone();
        self.rule(StringRule::Max(length), message)
    }

    /// Exactly `length` characters.
    pub fn length(self, length: usize) -> Self {
        let message = self.messages.invalid_length.clone();
        self.rule(StringRule::Length(length), message)
    }

    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        let message = self.messages.start_error.clone();
        self.rule(StringRule::StartsWith(prefix.into()), message)
    }

    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        let message = self.messages.end_error.clone();
        self.rule(StringRule::EndsWith(suffix.into()), message)
    }

    pub fn includes(self, needle: impl Into<String>) -> Self {
        let message = self.messages.includes_error.clone();
        self.rule(StringRule::Includes(needle.into()), message)
    }

    /// The value must contain a match of `pattern`.
    pub fn regex(self, pattern: Regex) -> Self {
        let message = self.messages.regex_error.clone();
        self.rule(StringRule::Regex(pattern), message)
    }

    /// Like [`regex`](Self::regex), compiling `pattern` first.
    pub fn pattern(self, pattern: &str) -> Result<Self, SchemaError> {
        let compiled = compile(pattern)?;
        Ok(self.regex(compiled))
    }

    pub fn email(self) -> Self {
        let message = self.messages.invalid_email.clone();
        self.rule(StringRule::Email, message)
    }

    /// The value must parse as an absolute URL.
    pub fn url(self) -> Self {
        let message = self.messages.invalid_url.clone();
        self.rule(StringRule::Url, message)
    }

    pub fn alpha_only(self) -> Self {
        let message = self.messages.alpha_only.clone();
        self.rule(StringRule::AlphaOnly, message)
    }

    pub fn alpha_numeric(self) -> Self {
        let message = self.messages.alpha_numeric.clone();
        self.rule(StringRule::AlphaNumeric, message)
    }

    /// Every character must belong to the regex character class `class`,
    /// written without brackets (e.g. `a-z0-9_`).
    pub fn allow_chars(self, class: &str) -> Result<Self, SchemaError> {
        let pattern = compile(&format!("^[{class}]+$"))?;
        let message = self.messages.allow_char.clone();
        Ok(self.rule(
            StringRule::AllowChars {
                class: class.to_string(),
                pattern,
            },
            message,
        ))
    }

    /// No character of `chars` may occur.
    pub fn block_chars(self, chars: impl Into<String>) -> Self {
        let message = self.messages.block_char.clone();
        self.rule(StringRule::BlockChars(chars.into()), message)
    }

    pub fn trim(self) -> Self {
        self.mutation(StringMutation::Trim)
    }

    pub fn to_lower_case(self) -> Self {
        self.mutation(StringMutation::ToLowerCase)
    }

    pub fn to_upper_case(self) -> Self {
        self.mutation(StringMutation::ToUpperCase)
    }

    pub fn capitalize(self, options: impl Into<Capitalize>) -> Self {
        self.mutation(StringMutation::Capitalize(options.into()))
    }

    pub fn slugify(self, separator: SlugSeparator) -> Self {
        self.mutation(StringMutation::Slugify(separator))
    }

    pub fn censor(self, options: Censor) -> Self {
        self.mutation(StringMutation::Censor(options.resolve()))
    }

    /// Reject every non-string input, ignoring `optional` and the default.
    pub fn required(mut self) -> Self {
        self.required = Some(self.messages.required_error.clone());
        self.last_message = Some(MessageSlot::Required);
        self
    }

    /// Accept any non-string input as `""`.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Accept `null` as the default, or `""` without one.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Convert non-string inputs to their string form before narrowing.
    pub fn coerce(mut self) -> Self {
        self.coerce = true;
        self
    }
}

fn compile(pattern: &str) -> Result<Regex, SchemaError> {
    Regex::new(pattern).map_err(|e| SchemaError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}
