//! # sift-core — Foundational Types for sift
//!
//! This crate defines the types every sift schema speaks. It depends on
//! nothing internal; `sift-schema` builds the validation pipelines on top.
//!
//! ## Contents
//!
//! 1. **[`Value`]** — the untyped input. Distinguishes an absent member
//!    (`Undefined`) from `Null` and keeps non-finite numbers, so the
//!    offending value in an error is exactly what the caller passed.
//!
//! 2. **[`ErrorDetail`] / [`ValidationResult`]** — the caller contract.
//!    A result is either data or a non-empty ordered list of details;
//!    it serializes to `{success, data}` / `{success, errors}`.
//!
//! 3. **[`Catalog`]** — built-in error messages as configuration,
//!    loadable from JSON or YAML and injected at schema construction.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod messages;
pub mod result;
pub mod value;

pub use error::{CatalogError, ErrorDetail, SchemaError, ValidationErrors};
pub use messages::{
    ArrayMessages, BooleanMessages, Catalog, NumberMessages, ObjectMessages, StringMessages,
    CATALOG_ENV_VAR,
};
pub use result::ValidationResult;
pub use value::{display_number, parse_number, Map, Value, MAX_SAFE_INTEGER};
