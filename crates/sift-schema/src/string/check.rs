//! String check registry entries.
//!
//! A [`StringCheck`] is either a validating [`StringRule`] carrying the
//! message it reports, or a [`StringMutation`] that rewrites the working
//! value and never fails. Checks run in insertion order.

use std::collections::HashSet;

use regex::Regex;

/// One configured step of a string pipeline.
#[derive(Debug, Clone)]
pub enum StringCheck {
    /// Predicate over the working value; fails with `message`.
    Rule { rule: StringRule, message: String },
    /// Deterministic rewrite of the working value.
    Mutation(StringMutation),
}

impl StringCheck {
    /// The operation name reported in error details.
    pub fn kind(&self) -> &'static str {
        match self {
            StringCheck::Rule { rule, .. } => rule.kind(),
            StringCheck::Mutation(mutation) => mutation.kind(),
        }
    }

    /// The configured message, for validating checks.
    pub fn message(&self) -> Option<&str> {
        match self {
            StringCheck::Rule { message, .. } => Some(message.as_str()),
            StringCheck::Mutation(_) => None,
        }
    }
}

/// Validating string predicates.
#[derive(Debug, Clone)]
pub enum StringRule {
    /// At least N characters.
    Min(usize),
    /// At most N characters.
    Max(usize),
    /// Exactly N characters.
    Length(usize),
    StartsWith(String),
    EndsWith(String),
    Includes(String),
    /// Pattern found anywhere in the value (unanchored unless the pattern
    /// anchors itself).
    Regex(Regex),
    Email,
    Url,
    /// ASCII letters only, at least one.
    AlphaOnly,
    /// ASCII letters and digits only, at least one.
    AlphaNumeric,
    /// Every character belongs to the configured character class.
    AllowChars { class: String, pattern: Regex },
    /// No character of the set occurs.
    BlockChars(String),
}

impl StringRule {
    pub fn kind(&self) -> &'static str {
        match self {
            StringRule::Min(_) => "min",
            StringRule::Max(_) => "max",
            StringRule::Length(_) => "length",
            StringRule::StartsWith(_) => "startsWith",
            StringRule::EndsWith(_) => "endsWith",
            StringRule::Includes(_) => "includes",
            StringRule::Regex(_) => "regex",
            StringRule::Email => "email",
            StringRule::Url => "url",
            StringRule::AlphaOnly => "alphaOnly",
            StringRule::AlphaNumeric => "alphaNumeric",
            StringRule::AllowChars { .. } => "allowChar",
            StringRule::BlockChars(_) => "blockChar",
        }
    }
}

/// Rewriting string steps.
#[derive(Debug, Clone)]
pub enum StringMutation {
    Trim,
    ToLowerCase,
    ToUpperCase,
    Capitalize(Capitalize),
    Slugify(SlugSeparator),
    Censor(CensorMode),
}

impl StringMutation {
    pub fn kind(&self) -> &'static str {
        match self {
            StringMutation::Trim => "trim",
            StringMutation::ToLowerCase => "toLowerCase",
            StringMutation::ToUpperCase => "toUpperCase",
            StringMutation::Capitalize(_) => "capitalize",
            StringMutation::Slugify(_) => "slugify",
            StringMutation::Censor(_) => "censor",
        }
    }
}

/// Capitalization style for [`StringSchema::capitalize`].
///
/// [`StringSchema::capitalize`]: crate::StringSchema::capitalize
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapitalizeStyle {
    /// First character upper-cased, the rest untouched.
    #[default]
    Sentence,
    /// Every word's first character upper-cased, separators kept.
    Title,
    Uppercase,
    Lowercase,
    /// Every word capitalized, joined without separator.
    Pascal,
    /// First word lower-cased, later words capitalized, joined without separator.
    Camel,
}

/// Capitalization options: a style and the word separator (default a space).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capitalize {
    pub style: CapitalizeStyle,
    pub separator: String,
}

impl Default for Capitalize {
    fn default() -> Self {
        Self {
            style: CapitalizeStyle::Sentence,
            separator: " ".to_string(),
        }
    }
}

impl Capitalize {
    pub fn style(style: CapitalizeStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl From<CapitalizeStyle> for Capitalize {
    fn from(style: CapitalizeStyle) -> Self {
        Capitalize::style(style)
    }
}

/// Separator substituted for whitespace runs by `slugify`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlugSeparator {
    #[default]
    Hyphen,
    Underscore,
}

impl SlugSeparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlugSeparator::Hyphen => "-",
            SlugSeparator::Underscore => "_",
        }
    }
}

/// Words a [`Censor`] targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CensorTarget {
    /// One word, matched whole-word and case-insensitively.
    Word(String),
    /// A set of words, matched whole-word and case-sensitively.
    Words(Vec<String>),
}

/// Censoring options.
///
/// Several modes may be configured at once; the first applicable one wins,
/// in this order: whole string, offset range, word set, single word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Censor {
    target: Option<CensorTarget>,
    replacement: char,
    start_offset: Option<usize>,
    end_offset: Option<usize>,
    censor_all: bool,
}

impl Default for Censor {
    fn default() -> Self {
        Self {
            target: None,
            replacement: '*',
            start_offset: None,
            end_offset: None,
            censor_all: false,
        }
    }
}

impl Censor {
    /// Replace every character.
    pub fn all() -> Self {
        Self::default().censor_all()
    }

    /// Replace the characters in `start..end` (clamped to the value).
    pub fn range(start: usize, end: usize) -> Self {
        Self::default().offsets(start, end)
    }

    /// Replace whole-word, case-insensitive occurrences of `word`.
    pub fn word(word: impl Into<String>) -> Self {
        Self {
            target: Some(CensorTarget::Word(word.into())),
            ..Self::default()
        }
    }

    /// Replace whole words that appear (case-sensitively) in `words`.
    pub fn words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            target: Some(CensorTarget::Words(words.into_iter().map(Into::into).collect())),
            ..Self::default()
        }
    }

    pub fn censor_all(mut self) -> Self {
        self.censor_all = true;
        self
    }

    pub fn offsets(mut self, start: usize, end: usize) -> Self {
        self.start_offset = Some(start);
        self.end_offset = Some(end);
        self
    }

    /// Replacement character (default `*`).
    pub fn replacement(mut self, replacement: char) -> Self {
        self.replacement = replacement;
        self
    }

    /// Resolve the configured options into the single mode that applies.
    pub(crate) fn resolve(self) -> CensorMode {
        let replacement = self.replacement;
        if self.censor_all {
            return CensorMode::All { replacement };
        }
        if let (Some(start), Some(end)) = (self.start_offset, self.end_offset) {
            return CensorMode::Range {
                start,
                end,
                replacement,
            };
        }
        match self.target {
            Some(CensorTarget::Words(words)) if !words.is_empty() => CensorMode::Words {
                words: words.into_iter().collect(),
                replacement,
            },
            Some(CensorTarget::Word(word)) if !word.trim().is_empty() => {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(&word));
                match Regex::new(&pattern) {
                    Ok(pattern) => CensorMode::Word {
                        pattern,
                        replacement,
                    },
                    Err(e) => {
                        tracing::warn!(word = %word, error = %e, "censor word did not compile; censoring disabled");
                        CensorMode::Disabled
                    }
                }
            }
            _ => CensorMode::Disabled,
        }
    }
}

/// The censoring mode selected from [`Censor`] options.
#[derive(Debug, Clone)]
pub enum CensorMode {
    All {
        replacement: char,
    },
    Range {
        start: usize,
        end: usize,
        replacement: char,
    },
    Words {
        words: HashSet<String>,
        replacement: char,
    },
    Word {
        pattern: Regex,
        replacement: char,
    },
    /// Nothing to censor.
    Disabled,
}
