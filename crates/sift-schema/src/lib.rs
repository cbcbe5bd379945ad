//! # sift-schema — Runtime Validation Pipelines
//!
//! Builds validators for untyped [`Value`]s. A schema is configured once
//! through chained builder calls and then reused for any number of
//! `parse` calls; each call returns a [`ValidationResult`].
//!
//! ```
//! use serde_json::json;
//! use sift_core::Value;
//! use sift_schema::{boolean, number, object, string, Schema, Shape};
//!
//! let user = object(
//!     Shape::new()
//!         .field("name", string().trim().min(3))
//!         .field("age", number().int().min(18.0))
//!         .field("admin", boolean().default(false)),
//! );
//!
//! let result = user.parse(&Value::from(json!({"name": "  Ada ", "age": 36})));
//! assert!(result.is_success());
//! ```
//!
//! ## Primitive Schemas
//!
//! [`StringSchema`], [`NumberSchema`] and [`BooleanSchema`] share one policy:
//!
//! 1. **Coercion** (with `coerce()`): convert the raw input to the target
//!    type. Never fails; unconvertible inputs degrade to a zero value.
//! 2. **Shortcuts**: `null` with `nullable()` and `undefined` with
//!    `optional()` succeed with the default, skipping all checks.
//! 3. **Narrowing**: a value of the wrong type yields the default or a
//!    type error.
//! 4. **Checks**: run in insertion order; the first failure ends the parse.
//!
//! ## Composite Schemas
//!
//! [`ObjectSchema`] and [`ArraySchema`] parse every child and aggregate all
//! child errors, rewriting each error's `field` to the object key or a
//! description of the array element.
//!
//! ## Crate Policy
//!
//! - Depends only on `sift-core` internally.
//! - `parse` is read-only over the schema; schemas are `Send + Sync`.
//! - Invalid configuration (a pattern that does not compile) is reported
//!   when the schema is built, never during `parse`.

pub mod array;
pub mod boolean;
pub mod number;
pub mod object;
pub mod schema;
pub mod string;

pub use array::ArraySchema;
pub use boolean::{BooleanCheck, BooleanRule, BooleanSchema};
pub use number::{Bound, NumberCheck, NumberRule, NumberSchema};
pub use object::{ObjectSchema, Shape};
pub use schema::{DynSchema, Schema};
pub use string::{
    Capitalize, CapitalizeStyle, Censor, SlugSeparator, StringCheck, StringMutation, StringRule,
    StringSchema,
};

pub use sift_core::{ErrorDetail, ValidationResult, Value};

/// Options accepted by the primitive constructors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaOptions {
    /// Replaces the built-in type-mismatch message.
    pub message: Option<String>,
}

impl SchemaOptions {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

pub fn string() -> StringSchema {
    StringSchema::new()
}

/// A string schema whose type error uses `options.message`.
pub fn string_with(options: SchemaOptions) -> StringSchema {
    match options.message {
        Some(message) => StringSchema::new().type_message(message),
        None => StringSchema::new(),
    }
}

pub fn number() -> NumberSchema {
    NumberSchema::new()
}

/// A number schema whose type error uses `options.message`.
pub fn number_with(options: SchemaOptions) -> NumberSchema {
    match options.message {
        Some(message) => NumberSchema::new().type_message(message),
        None => NumberSchema::new(),
    }
}

pub fn boolean() -> BooleanSchema {
    BooleanSchema::new()
}

pub fn object(shape: Shape) -> ObjectSchema {
    ObjectSchema::new(shape)
}

pub fn array<S: Schema>(item: S) -> ArraySchema<S> {
    ArraySchema::new(item)
}
