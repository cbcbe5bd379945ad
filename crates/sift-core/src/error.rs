//! # Error Types — Structured Validation Failures
//!
//! Defines the error types used throughout sift. Configuration errors are
//! `thiserror` enums.
//!
//! ## Design
//!
//! - A validation failure is data, not an exception: [`ErrorDetail`]
//!   records the field, the failing operation, the expected type, the
//!   offending value (verbatim) and a remediation suggestion.
//! - [`ValidationErrors`] wraps a non-empty list of details so callers that
//!   prefer `Result` can propagate a failed parse with `?`.
//! - Configuration-time problems ([`SchemaError`], [`CatalogError`]) are
//!   ordinary `Result` errors and never surface from `parse`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::Value;

/// One validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    /// Field label. Primitive schemas use a fixed label; composite schemas
    /// overwrite it with the object key or element description.
    pub field: String,
    /// Human-readable message, taken verbatim from the check or catalog.
    pub message: String,
    /// The operation that failed: a check kind, `parse`, `type` or `required`.
    pub operation: String,
    /// Expected type or condition.
    pub expected_type: String,
    /// The offending value exactly as the failing step saw it.
    pub received_value: Value,
    /// Remediation hint.
    pub suggestion: String,
}

impl ErrorDetail {
    /// Create a detail with the three mandatory attributes; fill in the rest
    /// with the `with_*` methods.
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        operation: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            operation: operation.into(),
            expected_type: String::new(),
            received_value: Value::Undefined,
            suggestion: String::new(),
        }
    }

    pub fn with_expected_type(mut self, expected_type: impl Into<String>) -> Self {
        self.expected_type = expected_type.into();
        self
    }

    pub fn with_received(mut self, received: impl Into<Value>) -> Self {
        self.received_value = received.into();
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = suggestion.into();
        self
    }

    /// Replace the field label, keeping everything else.
    pub fn relabel(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "(root): {} ({})", self.message, self.operation)
        } else {
            write!(f, "{}: {} ({})", self.field, self.message, self.operation)
        }
    }
}

/// Non-empty ordered collection of [`ErrorDetail`]s from one failed parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors {
    details: Vec<ErrorDetail>,
}

impl ValidationErrors {
    /// Wrap a list of details. The list is expected to be non-empty.
    pub fn new(details: Vec<ErrorDetail>) -> Self {
        debug_assert!(!details.is_empty(), "a failure carries at least one detail");
        Self { details }
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    pub fn details(&self) -> &[ErrorDetail] {
        &self.details
    }

    /// Field labels in error order.
    pub fn fields(&self) -> Vec<&str> {
        self.details.iter().map(|d| d.field.as_str()).collect()
    }

    pub fn into_inner(self) -> Vec<ErrorDetail> {
        self.details
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed with {} error(s):", self.details.len())?;
        for detail in &self.details {
            write!(f, "\n  {detail}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Error raised while configuring a schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A pattern supplied to a check could not be compiled.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },
}

/// Error raised while loading a message catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("cannot read catalog '{path}': {source}")]
    Io {
        /// Path of the catalog file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON for the catalog structure.
    #[error("invalid JSON catalog: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The catalog is not valid YAML for the catalog structure.
    #[error("invalid YAML catalog: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// The file extension is neither `.json`, `.yaml` nor `.yml`.
    #[error("unsupported catalog format for '{path}': expected .json, .yaml or .yml")]
    UnsupportedFormat {
        /// Path of the catalog file.
        path: String,
    },
}
