//! Prelude module for convenient imports.
//!
//! A single `use formguard::prelude::*;` brings in the traits, the
//! engine, and every built-in validator and combinator.
//!
//! # Examples
//!
//! ```rust
//! use formguard::prelude::*;
//! use serde_json::json;
//!
//! let validator = Rules::new()
//!     .rule("email", required())
//!     .rule("email", email())
//!     .build();
//!
//! let errors = validator.validate(&json!({"email": "nope"}));
//! assert_eq!(errors.message_at("email"), Some("Invalid e-mail"));
//! ```

// ============================================================================
// FOUNDATION: traits, results, output types
// ============================================================================

pub use crate::foundation::{
    BoxedFieldValidator, BoxedRecordValidator, ErrorMap, ErrorNode, FieldResult, FieldValidateExt,
    PathErrors, RecordValidateExt, ValidateField, ValidateRecord, is_empty,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{
    Compose, ComposeRecords, Join, RecordRule, WithEmpty, WithMessage, compose, compose_records,
    join, record_rule, with_empty, with_message,
};

// ============================================================================
// VALIDATORS
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::error::SchemaError;
pub use crate::schema::{Rules, Validator, create_validator};
