//! The rules table and the validator built from it.
//!
//! A [`Rules`] table maps dotted field paths to ordered rule lists; the
//! [`Validator`] built from it is the whole engine: per path, read the
//! value, run the joined rule list, and write the outcome into the
//! output [`ErrorMap`]. Tables are built once at schema-definition time
//! and reused across validation runs; each run is a pure function of its
//! record.

use indexmap::IndexMap;
use serde_json::Value;
use smallvec::SmallVec;

use crate::combinators::record_rule;
use crate::foundation::{BoxedFieldValidator, ErrorMap, FieldResult, ValidateField, ValidateRecord};
use crate::path;

// Most fields carry one or two rules; keep those inline.
type RuleList = SmallVec<[BoxedFieldValidator; 2]>;

// ============================================================================
// RULES TABLE
// ============================================================================

/// An ordered table of validation rules, keyed by dotted field path.
///
/// Paths validate in insertion order; rules registered under the same
/// path keep their declaration order and combine join-style (every rule
/// runs, the first failure wins).
///
/// # Examples
///
/// ```rust
/// use formguard::prelude::*;
///
/// let rules = Rules::new()
///     .rule("name", required())
///     .rule("name", min_length(2))
///     .rule("terms", is_true());
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Default)]
pub struct Rules {
    entries: IndexMap<String, RuleList>,
}

impl Rules {
    /// Creates an empty rules table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule for a path, appended after any already there.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(
        mut self,
        field_path: impl Into<String>,
        validator: impl ValidateField + Send + Sync + 'static,
    ) -> Self {
        self.entries
            .entry(field_path.into())
            .or_default()
            .push(Box::new(validator));
        self
    }

    /// Registers an ordered batch of rules for a path.
    #[must_use = "builder methods must be chained or built"]
    pub fn rules(
        mut self,
        field_path: impl Into<String>,
        validators: Vec<BoxedFieldValidator>,
    ) -> Self {
        self.entries
            .entry(field_path.into())
            .or_default()
            .extend(validators);
        self
    }

    /// Registers a record-level check under a path.
    ///
    /// The key only determines when the check runs; its errors land at
    /// the paths the check itself names, and the key's own entry in the
    /// output stays untouched.
    #[must_use = "builder methods must be chained or built"]
    pub fn record_rule(
        self,
        field_path: impl Into<String>,
        validator: impl ValidateRecord + Send + Sync + 'static,
    ) -> Self {
        self.rule(field_path, record_rule(validator))
    }

    /// Builds the validator.
    #[must_use]
    pub fn build(self) -> Validator {
        Validator { rules: self }
    }

    /// Number of paths with registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates registered paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// The validation engine built from a [`Rules`] table.
///
/// `validate` is pure and synchronous; a `Validator` is `Send + Sync`
/// and one instance can serve concurrent callers.
///
/// # Examples
///
/// ```rust
/// use formguard::prelude::*;
/// use serde_json::json;
///
/// let validator = Rules::new()
///     .rule("name", required())
///     .rule("address.city", required())
///     .build();
///
/// let errors = validator.validate(&json!({"name": "Alice"}));
/// assert_eq!(errors.message_at("name"), None);
/// assert_eq!(errors.message_at("address.city"), Some("Required"));
/// ```
pub struct Validator {
    rules: Rules,
}

impl Validator {
    /// Runs every rule against the record and assembles the error map.
    ///
    /// For each path in table order: the value is read via
    /// [`path::get`], the path's rules run join-style, and the outcome
    /// is written back — a message at the path itself, or, for a
    /// path-errors outcome, each entry at its own absolute path. Paths
    /// absent from the record still run their rules with no value.
    #[must_use]
    pub fn validate(&self, record: &Value) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for (field_path, rules) in &self.rules.entries {
            if rules.is_empty() {
                tracing::debug!(path = %field_path, "path registered without rules, skipping");
                continue;
            }
            let value = path::get(record, field_path);
            match crate::combinators::join::check_all(rules, value, record) {
                FieldResult::Valid => {}
                FieldResult::Message(message) => errors.insert(field_path, message),
                FieldResult::PathErrors(spread) => {
                    for (error_path, message) in spread {
                        errors.insert(&error_path, message);
                    }
                }
            }
        }
        errors
    }

    /// Borrows the underlying rules table.
    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}

/// Builds a [`Validator`] from a rules table.
///
/// Equivalent to [`Rules::build`]; provided as the conventional
/// free-function entry point.
#[must_use]
pub fn create_validator(rules: Rules) -> Validator {
    rules.build()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{FieldValidateExt, PathErrors};
    use crate::validators::{min_length, required};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn valid_record_yields_empty_map() {
        let validator = Rules::new().rule("name", required()).build();
        assert!(validator.validate(&json!({"name": "Alice"})).is_empty());
    }

    #[test]
    fn first_failing_rule_wins_per_path() {
        let validator = Rules::new()
            .rule("name", required())
            .rule("name", min_length(3))
            .build();
        let errors = validator.validate(&json!({}));
        assert_eq!(errors.message_at("name"), Some("Required"));
    }

    #[test]
    fn batch_registration_matches_repeated_rule_calls() {
        let batched = Rules::new()
            .rules("name", vec![required().boxed(), min_length(3).boxed()])
            .build();
        let errors = batched.validate(&json!({"name": "ab"}));
        assert_eq!(errors.message_at("name"), Some("Too short"));
    }

    #[test]
    fn absent_paths_still_run() {
        let validator = Rules::new().rule("missing.deeply", required()).build();
        let errors = validator.validate(&json!({}));
        assert_eq!(errors.message_at("missing.deeply"), Some("Required"));
    }

    #[test]
    fn path_errors_spread_at_absolute_paths() {
        let cross_check = |_: &Value| {
            Some(
                PathErrors::new()
                    .with("other", "mismatch")
                    .with("nested.field", "also wrong"),
            )
        };
        let validator = Rules::new().record_rule("anchor", cross_check).build();
        let errors = validator.validate(&json!({}));

        // The anchor key itself is untouched.
        assert_eq!(errors.get("anchor"), None);
        assert_eq!(errors.message_at("other"), Some("mismatch"));
        assert_eq!(errors.message_at("nested.field"), Some("also wrong"));
    }

    #[test]
    fn output_preserves_rule_insertion_order() {
        let validator = Rules::new()
            .rule("b", required())
            .rule("a", required())
            .build();
        let errors = validator.validate(&json!({}));
        let keys: Vec<_> = errors.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn empty_rules_table_validates_everything() {
        let validator = Rules::new().build();
        assert!(validator.validate(&json!({"anything": "goes"})).is_empty());
    }
}
