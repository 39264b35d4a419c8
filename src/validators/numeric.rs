//! Numeric comparison validators.
//!
//! Form values arrive as JSON numbers or as strings typed into inputs,
//! so comparisons coerce: numbers pass through, strings are trimmed and
//! parsed as `f64`, everything else is unparseable and fails the
//! comparison. All factories wrap their validator in
//! [`WithEmpty`](crate::combinators::WithEmpty) — an empty field is
//! `required`'s concern, not a comparison failure.

use serde_json::Value;
use std::borrow::Cow;

use crate::combinators::{WithEmpty, with_empty};
use crate::foundation::{FieldResult, ValidateField, is_empty};
use crate::path;

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

// ============================================================================
// COMPARISON OPERATOR
// ============================================================================

/// The comparison a numeric validator applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmp {
    /// `value > target`
    Greater,
    /// `value >= target`
    GreaterOrEqual,
    /// `value < target`
    Less,
    /// `value <= target`
    LessOrEqual,
}

impl Cmp {
    fn holds(self, value: f64, target: f64) -> bool {
        match self {
            Cmp::Greater => value > target,
            Cmp::GreaterOrEqual => value >= target,
            Cmp::Less => value < target,
            Cmp::LessOrEqual => value <= target,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Cmp::Greater => "greater than",
            Cmp::GreaterOrEqual => "greater than or equal to",
            Cmp::Less => "less than",
            Cmp::LessOrEqual => "less than or equal to",
        }
    }
}

// ============================================================================
// COMPARE TO LITERAL
// ============================================================================

/// Compares the field's value against a literal limit.
///
/// Unparseable values fail the comparison.
#[derive(Debug, Clone)]
pub struct CompareToLimit {
    /// The comparison to apply.
    pub op: Cmp,
    /// The literal to compare against.
    pub limit: f64,
    /// Message reported when the comparison does not hold.
    pub message: Cow<'static, str>,
}

impl ValidateField for CompareToLimit {
    fn check(&self, value: Option<&Value>, _record: &Value) -> FieldResult {
        match value.and_then(as_number) {
            Some(n) if self.op.holds(n, self.limit) => FieldResult::Valid,
            _ => FieldResult::Message(self.message.clone()),
        }
    }
}

fn against_limit(op: Cmp, limit: f64) -> WithEmpty<CompareToLimit> {
    with_empty(CompareToLimit {
        op,
        limit,
        message: Cow::Owned(format!("Must be {} {limit}", op.describe())),
    })
}

/// `value > limit`. Default message: `"Must be greater than {limit}"`.
///
/// # Examples
///
/// ```rust
/// use formguard::foundation::ValidateField;
/// use formguard::validators::greater;
/// use serde_json::json;
///
/// let rule = greater(0);
/// let record = json!({});
///
/// assert!(rule.check(Some(&json!(1)), &record).is_valid());
/// assert!(rule.check(Some(&json!("2.5")), &record).is_valid()); // string coercion
/// assert!(!rule.check(Some(&json!(0)), &record).is_valid());
/// assert!(rule.check(None, &record).is_valid()); // empty is skipped
/// ```
#[must_use]
pub fn greater(limit: impl Into<f64>) -> WithEmpty<CompareToLimit> {
    against_limit(Cmp::Greater, limit.into())
}

/// `value >= limit`. Default message: `"Must be greater than or equal to {limit}"`.
#[must_use]
pub fn greater_or_equal(limit: impl Into<f64>) -> WithEmpty<CompareToLimit> {
    against_limit(Cmp::GreaterOrEqual, limit.into())
}

/// `value < limit`. Default message: `"Must be less than {limit}"`.
#[must_use]
pub fn less(limit: impl Into<f64>) -> WithEmpty<CompareToLimit> {
    against_limit(Cmp::Less, limit.into())
}

/// `value <= limit`. Default message: `"Must be less than or equal to {limit}"`.
#[must_use]
pub fn less_or_equal(limit: impl Into<f64>) -> WithEmpty<CompareToLimit> {
    against_limit(Cmp::LessOrEqual, limit.into())
}

/// Parseable and non-negative. Default message: `"Must be a positive number"`.
#[must_use]
pub fn positive_number() -> WithEmpty<CompareToLimit> {
    with_empty(CompareToLimit {
        op: Cmp::GreaterOrEqual,
        limit: 0.0,
        message: Cow::Borrowed("Must be a positive number"),
    })
}

// ============================================================================
// COMPARE TO ANOTHER FIELD
// ============================================================================

/// Compares the field's value against the value at another path.
///
/// Skips when the other field is empty — a bound like "end date after
/// start date" only binds once both ends are filled in.
#[derive(Debug, Clone)]
pub struct CompareToField {
    /// The comparison to apply.
    pub op: Cmp,
    /// Dotted path of the field to compare against.
    pub other: String,
    /// Message reported when the comparison does not hold.
    pub message: Cow<'static, str>,
}

impl ValidateField for CompareToField {
    fn check(&self, value: Option<&Value>, record: &Value) -> FieldResult {
        let other = path::get(record, &self.other);
        if is_empty(other) {
            return FieldResult::Valid;
        }
        match (value.and_then(as_number), other.and_then(as_number)) {
            (Some(a), Some(b)) if self.op.holds(a, b) => FieldResult::Valid,
            _ => FieldResult::Message(self.message.clone()),
        }
    }
}

/// `value >= record[other]`, skipping when either side is empty.
///
/// Default message: `"Must be greater than or equal to {other}"`.
#[must_use]
pub fn ge_field(other: impl Into<String>) -> WithEmpty<CompareToField> {
    let other = other.into();
    with_empty(CompareToField {
        op: Cmp::GreaterOrEqual,
        message: Cow::Owned(format!("Must be greater than or equal to {other}")),
        other,
    })
}

/// `value <= record[other]`, skipping when either side is empty.
///
/// Default message: `"Must be less than or equal to {other}"`.
#[must_use]
pub fn le_field(other: impl Into<String>) -> WithEmpty<CompareToField> {
    let other = other.into();
    with_empty(CompareToField {
        op: Cmp::LessOrEqual,
        message: Cow::Owned(format!("Must be less than or equal to {other}")),
        other,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(5), true)]
    #[case(json!(3), false)]
    #[case(json!(3.5), true)]
    #[case(json!("4"), true)]
    #[case(json!(" 4 "), true)]
    #[case(json!("two"), false)]
    #[case(json!(true), false)] // not coerced
    #[case(json!([]), false)] // non-empty but unparseable
    fn greater_than_three(#[case] value: Value, #[case] valid: bool) {
        let rule = greater(3);
        assert_eq!(rule.check(Some(&value), &json!({})).is_valid(), valid);
    }

    #[test]
    fn boundary_semantics() {
        let record = json!({});
        assert!(!greater(3).check(Some(&json!(3)), &record).is_valid());
        assert!(greater_or_equal(3).check(Some(&json!(3)), &record).is_valid());
        assert!(!less(3).check(Some(&json!(3)), &record).is_valid());
        assert!(less_or_equal(3).check(Some(&json!(3)), &record).is_valid());
    }

    #[test]
    fn empty_value_is_skipped() {
        let record = json!({});
        assert!(greater(3).check(None, &record).is_valid());
        assert!(less(3).check(Some(&json!("")), &record).is_valid());
    }

    #[test]
    fn positive_number_accepts_zero() {
        let record = json!({});
        assert!(positive_number().check(Some(&json!(0)), &record).is_valid());
        assert!(!positive_number().check(Some(&json!(-1)), &record).is_valid());
        assert!(!positive_number().check(Some(&json!("abc")), &record).is_valid());
    }

    #[test]
    fn default_message_names_the_limit() {
        let rule = greater(3);
        assert_eq!(
            rule.check(Some(&json!(1)), &json!({})),
            FieldResult::message("Must be greater than 3")
        );
    }

    #[test]
    fn ge_field_compares_against_record() {
        let rule = ge_field("min");
        assert!(rule.check(Some(&json!(10)), &json!({"min": 5})).is_valid());
        assert!(!rule.check(Some(&json!(3)), &json!({"min": 5})).is_valid());
    }

    #[test]
    fn ge_field_skips_when_other_is_empty() {
        let rule = ge_field("min");
        assert!(rule.check(Some(&json!(3)), &json!({})).is_valid());
        assert!(rule.check(Some(&json!(3)), &json!({"min": ""})).is_valid());
    }

    #[test]
    fn le_field_with_string_coercion() {
        let rule = le_field("budget.max");
        let record = json!({"budget": {"max": "100"}});
        assert!(rule.check(Some(&json!("99")), &record).is_valid());
        assert!(!rule.check(Some(&json!("101")), &record).is_valid());
    }

    #[test]
    fn unparseable_value_fails_against_present_other() {
        let rule = ge_field("min");
        assert!(!rule.check(Some(&json!("abc")), &json!({"min": 5})).is_valid());
    }
}
