//! # formguard
//!
//! A declarative validation engine for nested, form-like records.
//!
//! Records are [`serde_json::Value`] trees. A schema maps dotted field
//! paths to one or more validators; running it produces an [`ErrorMap`]
//! mirroring the record's shape, with absent entries where a field is
//! valid — the shape form-state managers expect back from a `validate`
//! hook.
//!
//! ## Quick Start
//!
//! ```rust
//! use formguard::prelude::*;
//! use serde_json::json;
//!
//! let validator = Rules::new()
//!     .rule("email", required())
//!     .rule("email", email())
//!     .rule("password", min_length(8))
//!     .record_rule("password", fields_match("password", "confirm"))
//!     .build();
//!
//! let errors = validator.validate(&json!({
//!     "email": "alice@example.com",
//!     "password": "hunter22",
//!     "confirm": "hunter2",
//! }));
//!
//! // The mismatch is reported under both paths the check names.
//! assert!(errors.message_at("password").is_some());
//! assert!(errors.message_at("confirm").is_some());
//! assert_eq!(errors.message_at("email"), None);
//! ```
//!
//! ## Architecture
//!
//! - [`foundation`] — the [`ValidateField`](foundation::ValidateField) and
//!   [`ValidateRecord`](foundation::ValidateRecord) traits, the
//!   [`FieldResult`](foundation::FieldResult) sum type, and the nested
//!   [`ErrorMap`](foundation::ErrorMap) output structure.
//! - [`combinators`] — composition strategies: [`join`](combinators::join)
//!   (evaluate all, surface the first failure) and
//!   [`compose`](combinators::compose) (stop at the first failure), plus
//!   wrappers like [`with_empty`](combinators::with_empty).
//! - [`validators`] — ready-made leaf predicates (`required`,
//!   `min_length`, numeric comparisons, `email`, ...).
//! - [`schema`] — the [`Rules`](schema::Rules) table and the
//!   [`Validator`](schema::Validator) engine built from it.
//!
//! Validation never fails as an operation: an error map is the *result*,
//! not a failure. The only fallible surface is schema construction
//! (e.g. a bad regex), reported via [`SchemaError`](error::SchemaError).

// Boxed trait objects in the rules table make deeply nested combinator
// types (WithMessage<WithEmpty<...>>) common at call sites.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod error;
pub mod foundation;
pub mod path;
pub mod prelude;
pub mod schema;
pub mod validators;

pub use error::SchemaError;
pub use foundation::{ErrorMap, ErrorNode, FieldResult, PathErrors};
pub use schema::{Rules, Validator, create_validator};
