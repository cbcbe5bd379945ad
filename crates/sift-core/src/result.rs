//! # Validation Result — The Caller Contract
//!
//! [`ValidationResult`] is what every `parse` returns: either the typed,
//! normalized data or a non-empty ordered list of [`ErrorDetail`]s, never
//! both. It serializes to the wire shape application code branches on:
//!
//! ```json
//! { "success": true,  "data": ... }
//! { "success": false, "errors": [ ... ] }
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{ErrorDetail, ValidationErrors};

/// Outcome of one `parse` call.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<T> {
    /// The input satisfied the schema.
    Success {
        /// Normalized data.
        data: T,
    },
    /// The input violated the schema.
    Failure {
        /// At least one detail, in emission order.
        errors: Vec<ErrorDetail>,
    },
}

impl<T> ValidationResult<T> {
    pub fn success(data: T) -> Self {
        Self::Success { data }
    }

    /// Build a failure. `errors` must not be empty.
    pub fn failure(errors: Vec<ErrorDetail>) -> Self {
        debug_assert!(!errors.is_empty(), "a failure carries at least one detail");
        Self::Failure { errors }
    }

    /// Build a failure from a single detail.
    pub fn fail(detail: ErrorDetail) -> Self {
        Self::Failure {
            errors: vec![detail],
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Error details; empty on success.
    pub fn errors(&self) -> &[ErrorDetail] {
        match self {
            Self::Success { .. } => &[],
            Self::Failure { errors } => errors,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValidationResult<U> {
        match self {
            Self::Success { data } => ValidationResult::Success { data: f(data) },
            Self::Failure { errors } => ValidationResult::Failure { errors },
        }
    }

    /// Rewrite every error detail, leaving success untouched.
    pub fn map_errors(self, f: impl FnMut(ErrorDetail) -> ErrorDetail) -> Self {
        match self {
            Self::Success { data } => Self::Success { data },
            Self::Failure { errors } => Self::Failure {
                errors: errors.into_iter().map(f).collect(),
            },
        }
    }

    pub fn into_result(self) -> Result<T, ValidationErrors> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Failure { errors } => Err(ValidationErrors::new(errors)),
        }
    }
}

impl<T> From<ValidationResult<T>> for Result<T, ValidationErrors> {
    fn from(result: ValidationResult<T>) -> Self {
        result.into_result()
    }
}

impl<T: Serialize> Serialize for ValidationResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Self::Success { data } => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("data", data)?;
            }
            Self::Failure { errors } => {
                map.serialize_entry("success", &false)?;
                map.serialize_entry("errors", errors)?;
            }
        }
        map.end()
    }
}
