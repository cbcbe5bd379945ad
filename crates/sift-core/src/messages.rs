//! # Message Catalog — Configurable Error Messages
//!
//! Every built-in error message a schema can emit lives in a [`Catalog`].
//! Schemas copy the messages they need at construction time, so there is
//! no process-wide mutable state and two schemas built from different
//! catalogs never interfere.
//!
//! ## Loading
//!
//! `Catalog::default()` holds the built-in English strings. Catalogs can
//! be loaded from JSON or YAML; every field is optional, so a file only
//! needs to list the messages it overrides:
//!
//! ```yaml
//! string:
//!   too_short: "Too short!"
//! number:
//!   not_a_number: "Expected a number"
//! ```
//!
//! [`Catalog::from_env`] reads the file named by `SIFT_MESSAGES`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Environment variable naming a catalog file for [`Catalog::from_env`].
pub const CATALOG_ENV_VAR: &str = "SIFT_MESSAGES";

/// Messages for every schema type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Catalog {
    pub string: StringMessages,
    pub number: NumberMessages,
    pub boolean: BooleanMessages,
    pub object: ObjectMessages,
    pub array: ArrayMessages,
}

impl Catalog {
    /// Parse a catalog from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a catalog from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a catalog file, choosing the format from its extension
    /// (`.json`, `.yaml` or `.yml`).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("yaml" | "yml") => Self::from_yaml_str(&content),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Load the catalog named by `SIFT_MESSAGES`, or the defaults when the
    /// variable is unset.
    pub fn from_env() -> Result<Self, CatalogError> {
        match std::env::var_os(CATALOG_ENV_VAR) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Messages emitted by string schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StringMessages {
    pub not_a_string: String,
    pub too_short: String,
    pub too_long: String,
    pub invalid_length: String,
    pub start_error: String,
    pub end_error: String,
    pub includes_error: String,
    pub regex_error: String,
    pub invalid_email: String,
    pub invalid_url: String,
    pub required_error: String,
    pub alpha_only: String,
    pub alpha_numeric: String,
    pub allow_char: String,
    pub block_char: String,
}

impl Default for StringMessages {
    fn default() -> Self {
        Self {
            not_a_string: "Value must be a string".into(),
            too_short: "String is too short".into(),
            too_long: "String is too long".into(),
            invalid_length: "String is not equal".into(),
            start_error: "String must start with specified value".into(),
            end_error: "String must end with specified value".into(),
            includes_error: "String must include specified value".into(),
            regex_error: "String does not match regex".into(),
            invalid_email: "Invalid email".into(),
            invalid_url: "Invalid URL".into(),
            required_error: "String is required".into(),
            alpha_only: "String must contain only letters".into(),
            alpha_numeric: "String must contain only letters and numbers".into(),
            allow_char: "String must contain only letters, numbers, and specified characters"
                .into(),
            block_char:
                "String must contain only letters, numbers, and not contain specified characters"
                    .into(),
        }
    }
}

/// Messages emitted by number schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumberMessages {
    pub not_a_number: String,
    pub invalid_integer: String,
    pub invalid_float: String,
    pub invalid_finite: String,
    pub invalid_positive: String,
    pub invalid_negative: String,
    pub invalid_non_negative: String,
    pub invalid_non_positive: String,
    pub invalid_min: String,
    pub invalid_max: String,
    pub invalid_equal: String,
    pub invalid_not_equal: String,
    pub invalid_multiple_of: String,
    pub invalid_greater: String,
    pub invalid_greater_equal: String,
    pub invalid_less: String,
    pub invalid_less_equal: String,
    pub invalid_safe: String,
    pub invalid_between: String,
    pub invalid_step: String,
}

impl Default for NumberMessages {
    fn default() -> Self {
        Self {
            not_a_number: "Value must be a number".into(),
            invalid_integer: "Value must be an integer".into(),
            invalid_float: "Value must be a float".into(),
            invalid_finite: "Value must be a finite number".into(),
            invalid_positive: "Value must be a positive number".into(),
            invalid_negative: "Value must be a negative number".into(),
            invalid_non_negative: "Value must be a non-negative number".into(),
            invalid_non_positive: "Value must be a non-positive number".into(),
            invalid_min: "Number is less than minimum value".into(),
            invalid_max: "Number is greater than maximum value".into(),
            invalid_equal: "Number is not equal to the expected value".into(),
            invalid_not_equal: "Number is equal to the not expected value".into(),
            invalid_multiple_of: "Number is not a multiple of the expected value".into(),
            invalid_greater: "Number is not greater than the expected value".into(),
            invalid_greater_equal: "Number is not greater than or equal to the expected value"
                .into(),
            invalid_less: "Number is not less than the expected value".into(),
            invalid_less_equal: "Number is not less than or equal to the expected value".into(),
            invalid_safe: "Number is not a safe integer".into(),
            invalid_between: "Number is not between the expected values".into(),
            invalid_step: "Number should be a multiple of the expected step".into(),
        }
    }
}

/// Messages emitted by boolean schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BooleanMessages {
    pub not_a_boolean: String,
    pub is_true_error: String,
    pub is_false_error: String,
    pub equal_error: String,
}

impl Default for BooleanMessages {
    fn default() -> Self {
        Self {
            not_a_boolean: "Provided value is not a boolean".into(),
            is_true_error: "Ensure the value is strictly `true`".into(),
            is_false_error: "Ensure the value is strictly `false`".into(),
            equal_error: "Provided value is not equal to the main value".into(),
        }
    }
}

/// Messages emitted by object schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObjectMessages {
    pub not_an_object: String,
}

impl Default for ObjectMessages {
    fn default() -> Self {
        Self {
            not_an_object: "Value must be a valid object".into(),
        }
    }
}

/// Messages emitted by array schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArrayMessages {
    pub not_an_array: String,
    /// Prefix of the field label given to a failing element; the element's
    /// JSON text follows it.
    pub element_label: String,
}

impl Default for ArrayMessages {
    fn default() -> Self {
        Self {
            not_an_array: "Please provide an array".into(),
            element_label: "Invalid element".into(),
        }
    }
}
