//! Ready-made field and record validators.
//!
//! Each validator is a config struct built by a factory function and
//! carries a documented default message; a custom message goes through
//! [`with_message`](crate::foundation::FieldValidateExt::with_message)
//! (or the validator's own builder where it computes its default from
//! configuration, as [`FieldsMatch`] does).
//!
//! # Categories
//!
//! - **Presence**: [`required`]
//! - **Length**: [`min_length`], [`max_length`] — strings and arrays
//! - **Numeric**: [`greater`], [`greater_or_equal`], [`less`],
//!   [`less_or_equal`], [`ge_field`], [`le_field`], [`positive_number`]
//! - **Pattern**: [`pattern`], [`email`], [`filled`]
//! - **Boolean**: [`is_true`]
//! - **Cross-field**: [`fields_match`] (a record validator)
//!
//! # Examples
//!
//! ```rust
//! use formguard::prelude::*;
//! use serde_json::json;
//!
//! let validator = Rules::new()
//!     .rule("age", required())
//!     .rule("age", greater_or_equal(18))
//!     .build();
//!
//! let errors = validator.validate(&json!({"age": "17"}));
//! assert!(errors.message_at("age").is_some());
//! ```

pub mod boolean;
pub mod length;
pub mod matching;
pub mod nullable;
pub mod numeric;
pub mod pattern;

pub use boolean::{IsTrue, is_true};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use matching::{FieldsMatch, fields_match};
pub use nullable::{Required, required};
pub use numeric::{
    Cmp, CompareToField, CompareToLimit, ge_field, greater, greater_or_equal, le_field, less,
    less_or_equal, positive_number,
};
pub use pattern::{Filled, Pattern, email, filled, pattern};
