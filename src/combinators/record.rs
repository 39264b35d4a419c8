//! RECORD-RULE adapter - embed a record validator in a rules table.
//!
//! Cross-field checks are naturally record validators, but a rules table
//! is keyed by field path. This adapter turns a
//! [`ValidateRecord`](crate::foundation::ValidateRecord) into a field
//! validator that ignores the value at its key and reports through
//! [`FieldResult::PathErrors`] — the output lands at the paths the check
//! names, never implicitly under the key it was registered at.

use serde_json::Value;

use crate::foundation::{FieldResult, ValidateField, ValidateRecord};

/// Adapts a record validator into a field validator.
///
/// # Examples
///
/// ```rust
/// use formguard::combinators::record_rule;
/// use formguard::foundation::ValidateField;
/// use formguard::validators::fields_match;
/// use serde_json::json;
///
/// let rule = record_rule(fields_match("password", "confirm"));
/// let record = json!({"password": "a", "confirm": "b"});
///
/// // The field value is irrelevant; the record drives the check.
/// let result = rule.check(None, &record);
/// assert!(!result.is_valid());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RecordRule<V> {
    inner: V,
}

impl<V> RecordRule<V> {
    /// Wraps a record validator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: ValidateRecord> ValidateField for RecordRule<V> {
    fn check(&self, _value: Option<&Value>, record: &Value) -> FieldResult {
        FieldResult::from(self.inner.check(record))
    }
}

/// Adapts a record validator into a field validator for a rules table.
pub fn record_rule<V: ValidateRecord>(inner: V) -> RecordRule<V> {
    RecordRule::new(inner)
}
