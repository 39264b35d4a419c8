//! Validator contracts.
//!
//! Two traits cover the whole engine:
//!
//! - [`ValidateField`] checks one field's value, with the whole record
//!   available for cross-field lookups.
//! - [`ValidateRecord`] checks the whole record at once and reports on
//!   any number of paths.
//!
//! Both are implemented by the built-in validator structs and, via
//! blanket impls, by plain closures of the matching shape. Validators
//! must be pure: the engine may call them any number of times and
//! assumes idempotence.

use serde_json::Value;
use std::borrow::Cow;

use crate::combinators::{RecordRule, WithEmpty, WithMessage};
use crate::foundation::result::{FieldResult, PathErrors};

// ============================================================================
// CORE TRAITS
// ============================================================================

/// A validator for a single field.
///
/// `value` is the field's value as read from the record, or `None` when
/// the path is absent — rules still run for absent paths, so
/// implementations must handle `None` (typically by delegating presence
/// to [`required`](crate::validators::required) and skipping via
/// [`skip_empty`](FieldValidateExt::skip_empty)).
///
/// # Examples
///
/// ```rust
/// use formguard::foundation::{FieldResult, ValidateField};
/// use serde_json::{Value, json};
///
/// // Closures of the right shape are validators.
/// let no_spaces = |value: Option<&Value>, _record: &Value| match value {
///     Some(Value::String(s)) if s.contains(' ') => FieldResult::message("No spaces allowed"),
///     _ => FieldResult::Valid,
/// };
///
/// let record = json!({});
/// assert!(no_spaces.check(Some(&json!("ok")), &record).is_valid());
/// assert!(!no_spaces.check(Some(&json!("not ok")), &record).is_valid());
/// ```
pub trait ValidateField {
    /// Checks the value at one path.
    fn check(&self, value: Option<&Value>, record: &Value) -> FieldResult;
}

/// A validator over the whole record, for cross-field constraints.
///
/// Returns `None` when the record passes; otherwise a flat map of
/// absolute paths to messages.
pub trait ValidateRecord {
    /// Checks the whole record.
    fn check(&self, record: &Value) -> Option<PathErrors>;
}

impl<F> ValidateField for F
where
    F: Fn(Option<&Value>, &Value) -> FieldResult,
{
    fn check(&self, value: Option<&Value>, record: &Value) -> FieldResult {
        self(value, record)
    }
}

impl<F> ValidateRecord for F
where
    F: Fn(&Value) -> Option<PathErrors>,
{
    fn check(&self, record: &Value) -> Option<PathErrors> {
        self(record)
    }
}

// ============================================================================
// BOXED ALIASES
// ============================================================================

/// A boxed field validator, as stored in a rules table.
pub type BoxedFieldValidator = Box<dyn ValidateField + Send + Sync>;

/// A boxed record validator.
pub type BoxedRecordValidator = Box<dyn ValidateRecord + Send + Sync>;

// ============================================================================
// EXTENSION TRAITS
// ============================================================================

/// Fluent combinator methods, implemented for every field validator.
///
/// # Examples
///
/// ```rust
/// use formguard::foundation::FieldValidateExt;
/// use formguard::validators::min_length;
///
/// let password = min_length(8)
///     .skip_empty()
///     .with_message("Password must be at least 8 characters");
/// ```
pub trait FieldValidateExt: ValidateField + Sized {
    /// Skips this validator when the value is empty
    /// (see [`is_empty`](crate::foundation::is_empty)).
    fn skip_empty(self) -> WithEmpty<Self> {
        WithEmpty::new(self)
    }

    /// Replaces the message this validator fails with.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Boxes the validator for storage in a rules table.
    fn boxed(self) -> BoxedFieldValidator
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<V: ValidateField> FieldValidateExt for V {}

/// Fluent adapters for record validators.
pub trait RecordValidateExt: ValidateRecord + Sized {
    /// Adapts this record validator into a field validator that ignores
    /// the field value, so it can be registered under a key in a rules
    /// table.
    fn into_field_rule(self) -> RecordRule<Self> {
        RecordRule::new(self)
    }

    /// Boxes the validator.
    fn boxed(self) -> BoxedRecordValidator
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<V: ValidateRecord> RecordValidateExt for V {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn closure_as_field_validator() {
        let always_fails =
            |_: Option<&Value>, _: &Value| FieldResult::message("no");
        assert_eq!(
            always_fails.check(None, &json!({})),
            FieldResult::message("no")
        );
    }

    #[test]
    fn closure_as_record_validator() {
        let check = |record: &Value| {
            record
                .get("flag")
                .is_none()
                .then(|| PathErrors::new().with("flag", "missing"))
        };
        assert!(check.check(&json!({"flag": true})).is_none());
        assert!(check.check(&json!({})).is_some());
    }

    #[test]
    fn boxed_validator_dispatches() {
        let boxed: BoxedFieldValidator =
            (|_: Option<&Value>, _: &Value| FieldResult::Valid).boxed();
        assert!(boxed.check(None, &json!({})).is_valid());
    }
}
