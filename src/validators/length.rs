//! Length validators for strings and arrays.
//!
//! Strings are measured in Unicode scalar values, arrays in elements.
//! Any other type passes: type mismatches are not this validator's
//! concern, so a length bound on a numeric field stays quiet rather than
//! double-reporting next to a type-level rule.

use serde_json::Value;
use std::borrow::Cow;

use crate::foundation::{FieldResult, ValidateField};

fn measured_len(value: Option<&Value>) -> Option<usize> {
    match value? {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Fails when a string or array is shorter than `min`.
///
/// Default message: `"Too short"`.
///
/// # Examples
///
/// ```rust
/// use formguard::foundation::ValidateField;
/// use formguard::validators::min_length;
/// use serde_json::json;
///
/// let rule = min_length(3);
/// let record = json!({});
///
/// assert!(!rule.check(Some(&json!("ab")), &record).is_valid());
/// assert!(rule.check(Some(&json!("abc")), &record).is_valid());
/// assert!(!rule.check(Some(&json!([1])), &record).is_valid());
/// assert!(rule.check(Some(&json!(42)), &record).is_valid()); // not measurable
/// ```
#[derive(Debug, Clone)]
pub struct MinLength {
    /// Minimum length, inclusive.
    pub min: usize,
    /// Message reported when the value is too short.
    pub message: Cow<'static, str>,
}

impl ValidateField for MinLength {
    fn check(&self, value: Option<&Value>, _record: &Value) -> FieldResult {
        match measured_len(value) {
            Some(len) if len < self.min => FieldResult::Message(self.message.clone()),
            _ => FieldResult::Valid,
        }
    }
}

/// Creates a [`MinLength`] validator with the default message.
#[must_use]
pub fn min_length(min: usize) -> MinLength {
    MinLength {
        min,
        message: Cow::Borrowed("Too short"),
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Fails when a string or array is longer than `max`.
///
/// Default message: `"Too long"`.
#[derive(Debug, Clone)]
pub struct MaxLength {
    /// Maximum length, inclusive.
    pub max: usize,
    /// Message reported when the value is too long.
    pub message: Cow<'static, str>,
}

impl ValidateField for MaxLength {
    fn check(&self, value: Option<&Value>, _record: &Value) -> FieldResult {
        match measured_len(value) {
            Some(len) if len > self.max => FieldResult::Message(self.message.clone()),
            _ => FieldResult::Valid,
        }
    }
}

/// Creates a [`MaxLength`] validator with the default message.
#[must_use]
pub fn max_length(max: usize) -> MaxLength {
    MaxLength {
        max,
        message: Cow::Borrowed("Too long"),
    }
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
    #[case(json!("ab"), false)]
    #[case(json!("abc"), true)]
    #[case(json!([1, 2]), false)]
    #[case(json!([1, 2, 3]), true)]
    #[case(json!(5), true)] // numbers have no length
    #[case(json!({"a": 1}), true)] // objects have no length
    fn min_length_cases(#[case] value: Value, #[case] valid: bool) {
        let rule = min_length(3);
        assert_eq!(rule.check(Some(&value), &json!({})).is_valid(), valid);
    }

    #[rstest]
    #[case(json!("abcd"), false)]
    #[case(json!("abc"), true)]
    #[case(json!([1, 2, 3, 4]), false)]
    #[case(json!(true), true)]
    fn max_length_cases(#[case] value: Value, #[case] valid: bool) {
        let rule = max_length(3);
        assert_eq!(rule.check(Some(&value), &json!({})).is_valid(), valid);
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        let rule = max_length(3);
        assert!(rule.check(Some(&json!("äöü")), &json!({})).is_valid());
    }

    #[test]
    fn absent_value_passes() {
        assert!(min_length(3).check(None, &json!({})).is_valid());
        assert!(max_length(3).check(None, &json!({})).is_valid());
    }
}
