//! JOIN combinator - evaluate all rules, surface the first failure.
//!
//! Every rule is invoked against `(value, record)`; the first non-valid
//! result in rule order wins. Rule order is therefore the tie-break when
//! several rules fail at once, and later rules are still executed — call
//! sites may rely on all validators being evaluated.

use serde_json::Value;

use crate::foundation::{BoxedFieldValidator, FieldResult, ValidateField};

/// Combines an ordered list of field validators, evaluating all of them
/// and returning the first failing result.
///
/// # Examples
///
/// ```rust
/// use formguard::combinators::join;
/// use formguard::foundation::{FieldResult, FieldValidateExt, ValidateField};
/// use formguard::validators::{min_length, required};
/// use serde_json::json;
///
/// let rule = join(vec![required().boxed(), min_length(3).boxed()]);
///
/// // Both fail; the first rule's message wins.
/// let result = rule.check(None, &json!({}));
/// assert_eq!(result, FieldResult::message("Required"));
/// ```
#[derive(Default)]
pub struct Join {
    rules: Vec<BoxedFieldValidator>,
}

impl Join {
    /// Creates a join over an ordered rule list.
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

impl ValidateField for Join {
    fn check(&self, value: Option<&Value>, record: &Value) -> FieldResult {
        check_all(&self.rules, value, record)
    }
}

/// Runs every rule, then returns the first non-valid result in order.
///
/// Shared with the engine, which joins each path's rule list without
/// moving it out of the table.
pub(crate) fn check_all(
    rules: &[BoxedFieldValidator],
    value: Option<&Value>,
    record: &Value,
) -> FieldResult {
    let results: Vec<FieldResult> = rules.iter().map(|rule| rule.check(value, record)).collect();
    results
        .into_iter()
        .find(|result| !result.is_valid())
        .unwrap_or(FieldResult::Valid)
}

/// Creates a [`Join`] combinator from an ordered rule list.
#[must_use]
pub fn join(rules: Vec<BoxedFieldValidator>) -> Join {
    Join::new(rules)
}
