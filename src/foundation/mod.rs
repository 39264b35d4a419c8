//! Core types and traits of the validation engine.
//!
//! - [`ValidateField`] / [`ValidateRecord`] — the two validator contracts.
//! - [`FieldResult`] — the outcome of one field validator, as an explicit
//!   sum type.
//! - [`PathErrors`] — a flat `path -> message` map, the return shape of
//!   record-level validators.
//! - [`ErrorMap`] — the nested output structure mirroring the record's
//!   shape.
//! - [`is_empty`] — the narrow emptiness predicate the skip-if-empty
//!   wrapper delegates to.

pub mod empty;
pub mod error_map;
pub mod result;
pub mod traits;

pub use empty::is_empty;
pub use error_map::{ErrorMap, ErrorNode};
pub use result::{FieldResult, PathErrors};
pub use traits::{
    BoxedFieldValidator, BoxedRecordValidator, FieldValidateExt, RecordValidateExt, ValidateField,
    ValidateRecord,
};
