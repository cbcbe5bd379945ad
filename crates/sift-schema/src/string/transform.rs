//! String transform engine.
//!
//! Runs the check list against a working copy of an already-narrowed
//! string. Mutations rewrite the working value for every later check; the
//! first failing rule ends the run with a single error detail.

use std::sync::OnceLock;

use regex::Regex;
use sift_core::{ErrorDetail, ValidationResult};

use super::check::{
    Capitalize, CapitalizeStyle, CensorMode, SlugSeparator, StringCheck, StringMutation,
    StringRule,
};

const FIELD: &str = "value";
const EXPECTED: &str = "string";

/// Email shape over ASCII letters in either case. The leading-dot and
/// double-dot exclusions are checked separately in [`is_email`].
const EMAIL_PATTERN: &str =
    r"^([A-Za-z0-9_'+\-.]+)[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";

fn email_pattern() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(regex) => Some(regex),
            Err(err) => {
                tracing::warn!(error = %err, "email pattern failed to compile");
                None
            }
        })
        .as_ref()
}

pub(crate) fn is_email(value: &str) -> bool {
    !value.starts_with('.')
        && !value.contains("..")
        && email_pattern().is_some_and(|pattern| pattern.is_match(value))
}

pub(crate) fn is_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

/// Executes string checks over a working value.
pub(crate) struct StringTransform {
    value: String,
}

impl StringTransform {
    pub(crate) fn new(value: String) -> Self {
        Self { value }
    }

    pub(crate) fn transform(mut self, checks: &[StringCheck]) -> ValidationResult<String> {
        for check in checks {
            match check {
                StringCheck::Mutation(mutation) => {
                    tracing::trace!(operation = mutation.kind(), "applying string mutation");
                    self.mutate(mutation);
                }
                StringCheck::Rule { rule, message } => {
                    if let Some(suggestion) = self.violation(rule) {
                        tracing::debug!(operation = rule.kind(), "string check failed");
                        return ValidationResult::fail(
                            ErrorDetail::new(FIELD, message.as_str(), rule.kind())
                                .with_expected_type(EXPECTED)
                                .with_received(self.value)
                                .with_suggestion(suggestion),
                        );
                    }
                }
            }
        }
        ValidationResult::success(self.value)
    }

    /// Returns the suggestion for a failing rule, `None` when it holds.
    fn violation(&self, rule: &StringRule) -> Option<String> {
        let value = self.value.as_str();
        let length = value.chars().count();
        match rule {
            StringRule::Min(min) => (length < *min)
                .then(|| format!("value must be at least {min} characters long")),
            StringRule::Max(max) => (length > *max)
                .then(|| format!("value must be at most {max} characters long")),
            StringRule::Length(exact) => (length != *exact)
                .then(|| format!("value must be exactly {exact} characters long")),
            StringRule::StartsWith(prefix) => (!value.starts_with(prefix.as_str()))
                .then(|| format!("value must startsWith \"{prefix}\"")),
            StringRule::EndsWith(suffix) => (!value.ends_with(suffix.as_str()))
                .then(|| format!("value must endsWith \"{suffix}\"")),
            StringRule::Includes(needle) => (!value.contains(needle.as_str()))
                .then(|| format!("value must includes \"{needle}\"")),
            StringRule::Regex(pattern) => (!pattern.is_match(value))
                .then(|| format!("value must match the regex /{}/", pattern.as_str())),
            StringRule::Email => {
                (!is_email(value)).then(|| "value must be a valid email address".to_string())
            }
            StringRule::Url => (!is_url(value)).then(|| "value must be a valid URL".to_string()),
            StringRule::AlphaOnly => {
                let ok = !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic());
                (!ok).then(|| "value must contain only alphabetic characters".to_string())
            }
            StringRule::AlphaNumeric => {
                let ok = !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric());
                (!ok).then(|| "value must contain only alphanumeric characters".to_string())
            }
            StringRule::AllowChars { pattern, .. } => (!pattern.is_match(value))
                .then(|| "value must contain only allowed characters".to_string()),
            StringRule::BlockChars(blocked) => value
                .chars()
                .any(|c| blocked.contains(c))
                .then(|| "value must not contain blocked characters".to_string()),
        }
    }

    fn mutate(&mut self, mutation: &StringMutation) {
        self.value = match mutation {
            StringMutation::Trim => self.value.trim().to_string(),
            StringMutation::ToLowerCase => self.value.to_lowercase(),
            StringMutation::ToUpperCase => self.value.to_uppercase(),
            StringMutation::Capitalize(options) => capitalize(&self.value, options),
            StringMutation::Slugify(separator) => slugify(&self.value, *separator),
            StringMutation::Censor(mode) => censor(&self.value, mode),
        };
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split on `separator`; an empty separator splits into characters.
fn split_words<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect();
    }
    text.split(separator).collect()
}

pub(crate) fn capitalize(value: &str, options: &Capitalize) -> String {
    let separator = options.separator.as_str();
    match options.style {
        CapitalizeStyle::Sentence => capitalize_first(value),
        CapitalizeStyle::Title => split_words(value, separator)
            .into_iter()
            .map(capitalize_first)
            .collect::<Vec<_>>()
            .join(separator),
        CapitalizeStyle::Uppercase => value.to_uppercase(),
        CapitalizeStyle::Lowercase => value.to_lowercase(),
        CapitalizeStyle::Pascal => split_words(value, separator)
            .into_iter()
            .map(capitalize_first)
            .collect(),
        CapitalizeStyle::Camel => {
            let words = split_words(value, separator);
            let mut words = words.into_iter();
            let mut out = words.next().map(str::to_lowercase).unwrap_or_default();
            for word in words {
                out.push_str(&capitalize_first(word));
            }
            out
        }
    }
}

pub(crate) fn slugify(value: &str, separator: SlugSeparator) -> String {
    let lowered = value.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for c in lowered.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push_str(separator.as_str());
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            slug.push(c);
        }
    }
    slug.retain(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    slug
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn mask(replacement: char, count: usize) -> String {
    std::iter::repeat(replacement).take(count).collect()
}

pub(crate) fn censor(value: &str, mode: &CensorMode) -> String {
    match mode {
        CensorMode::All { replacement } => mask(*replacement, value.chars().count()),
        CensorMode::Range {
            start,
            end,
            replacement,
        } => {
            let length = value.chars().count();
            let end = (*end).min(length);
            if *start >= end {
                return value.to_string();
            }
            value
                .chars()
                .enumerate()
                .map(|(i, c)| if (*start..end).contains(&i) { *replacement } else { c })
                .collect()
        }
        CensorMode::Words { words, replacement } => {
            let mut out = String::with_capacity(value.len());
            let mut word = String::new();
            let flush = |word: &mut String, out: &mut String| {
                if words.contains(word.as_str()) {
                    out.push_str(&mask(*replacement, word.chars().count()));
                } else {
                    out.push_str(word);
                }
                word.clear();
            };
            for c in value.chars() {
                if is_word_char(c) {
                    word.push(c);
                } else {
                    flush(&mut word, &mut out);
                    out.push(c);
                }
            }
            flush(&mut word, &mut out);
            out
        }
        CensorMode::Word {
            pattern,
            replacement,
        } => pattern
            .replace_all(value, |caps: &regex::Captures<'_>| {
                mask(*replacement, caps[0].chars().count())
            })
            .into_owned(),
        CensorMode::Disabled => value.to_string(),
    }
}
