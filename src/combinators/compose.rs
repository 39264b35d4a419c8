//! COMPOSE combinators - short-circuiting field composition and record
//! validator merging.
//!
//! [`Compose`] is the short-circuit counterpart of
//! [`Join`](crate::combinators::Join): rules after the first failure are
//! not invoked at all. Prefer it when later rules are expensive; prefer
//! `Join` when call sites rely on every rule being evaluated.

use serde_json::Value;

use crate::foundation::{
    BoxedFieldValidator, BoxedRecordValidator, FieldResult, PathErrors, ValidateField,
    ValidateRecord,
};

// ============================================================================
// COMPOSE (FIELD)
// ============================================================================

/// Combines field validators, stopping at the first failure.
///
/// # Examples
///
/// ```rust
/// use formguard::combinators::compose;
/// use formguard::foundation::{FieldResult, FieldValidateExt, ValidateField};
/// use formguard::validators::{min_length, required};
/// use serde_json::json;
///
/// let rule = compose(vec![required().boxed(), min_length(3).boxed()]);
/// assert_eq!(rule.check(None, &json!({})), FieldResult::message("Required"));
/// assert!(rule.check(Some(&json!("abc")), &json!({})).is_valid());
/// ```
#[derive(Default)]
pub struct Compose {
    rules: Vec<BoxedFieldValidator>,
}

impl Compose {
    /// Creates a short-circuiting composition over an ordered rule list.
    #[must_use]
    pub fn new(rules: Vec<BoxedFieldValidator>) -> Self {
        Self { rules }
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` when no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl ValidateField for Compose {
    fn check(&self, value: Option<&Value>, record: &Value) -> FieldResult {
        for rule in &self.rules {
            let result = rule.check(value, record);
            if !result.is_valid() {
                return result;
            }
        }
        FieldResult::Valid
    }
}

/// Creates a [`Compose`] combinator from an ordered rule list.
#[must_use]
pub fn compose(rules: Vec<BoxedFieldValidator>) -> Compose {
    Compose::new(rules)
}

// ============================================================================
// COMPOSE (RECORD)
// ============================================================================

/// Runs every record validator unconditionally and merges their results.
///
/// Results merge in validator order; on a shared path the later
/// validator's message wins. Paths are full dotted paths, so a collision
/// can only be an identical leaf — sibling entries are never dropped.
pub struct ComposeRecords {
    validators: Vec<BoxedRecordValidator>,
}

impl ComposeRecords {
    /// Creates a composition over an ordered validator list.
    #[must_use]
    pub fn new(validators: Vec<BoxedRecordValidator>) -> Self {
        Self { validators }
    }
}

impl ValidateRecord for ComposeRecords {
    fn check(&self, record: &Value) -> Option<PathErrors> {
        let mut merged = PathErrors::new();
        for validator in &self.validators {
            if let Some(errors) = validator.check(record) {
                merged.merge(errors);
            }
        }
        if merged.is_empty() { None } else { Some(merged) }
    }
}

/// Creates a [`ComposeRecords`] combinator from an ordered validator list.
#[must_use]
pub fn compose_records(validators: Vec<BoxedRecordValidator>) -> ComposeRecords {
    ComposeRecords::new(validators)
}

// ============================================================================
// TESTS
// ============================================================================
