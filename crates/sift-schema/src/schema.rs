//! The [`Schema`] capability and its object-safe form.
//!
//! Every schema is a compiled validator: `parse` borrows the schema and
//! the input, keeps all working state local, and returns a
//! [`ValidationResult`]. Composite schemas store their children as
//! `Box<dyn DynSchema>`, which erases the output type to [`Value`].

use sift_core::{ValidationResult, Value};

/// A reusable validator and transformer for one data shape.
pub trait Schema {
    /// Normalized data produced on success.
    type Output;

    /// Validate `input`. Never panics and never returns both data and errors.
    fn parse(&self, input: &Value) -> ValidationResult<Self::Output>;
}

/// Object-safe schema whose output is an untyped [`Value`].
///
/// Implemented for every [`Schema`] whose output converts into a `Value`,
/// so any primitive or composite schema can sit inside a shape.
pub trait DynSchema: Send + Sync {
    fn parse_value(&self, input: &Value) -> ValidationResult<Value>;
}

impl<S> DynSchema for S
where
    S: Schema + Send + Sync,
    S::Output: Into<Value>,
{
    fn parse_value(&self, input: &Value) -> ValidationResult<Value> {
        self.parse(input).map(Into::into)
    }
}

impl Schema for Box<dyn DynSchema> {
    type Output = Value;

    fn parse(&self, input: &Value) -> ValidationResult<Value> {
        (**self).parse_value(input)
    }
}
