//! WITH-EMPTY combinator - skip validation for empty values.
//!
//! Absence is not most validators' concern: a length bound on a field
//! nobody filled in should stay quiet and leave presence to a separate
//! `required` rule. Wrapping a validator here lets its predicate assume a
//! non-empty value.

use serde_json::Value;

use crate::foundation::{FieldResult, ValidateField, is_empty};

/// Skips the inner validator when the value is empty.
///
/// # Examples
///
/// ```rust
/// use formguard::foundation::{FieldValidateExt, ValidateField};
/// use formguard::validators::min_length;
/// use serde_json::json;
///
/// let rule = min_length(3).skip_empty();
/// let record = json!({});
///
/// // Empty values pass untouched; presence is `required`'s concern.
/// assert!(rule.check(None, &record).is_valid());
/// assert!(rule.check(Some(&json!("")), &record).is_valid());
///
/// // Non-empty values are delegated to the inner validator.
/// assert!(!rule.check(Some(&json!("ab")), &record).is_valid());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WithEmpty<V> {
    inner: V,
}

impl<V> WithEmpty<V> {
    /// Wraps a validator.
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

impl<V: ValidateField> ValidateField for WithEmpty<V> {
    fn check(&self, value: Option<&Value>, record: &Value) -> FieldResult {
        if is_empty(value) {
            FieldResult::Valid
        } else {
            self.inner.check(value, record)
        }
    }
}

/// Wraps a validator to be skipped when the field's value is empty.
pub fn with_empty<V: ValidateField>(inner: V) -> WithEmpty<V> {
    WithEmpty::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn always_fails(_: Option<&Value>, _: &Value) -> FieldResult {
        FieldResult::message("fail")
    }

    #[rstest]
    #[case(None)]
    #[case(Some(json!(null)))]
    #[case(Some(json!("")))]
    #[case(Some(json!("   ")))]
    fn empty_values_skip_the_inner_validator(#[case] value: Option<Value>) {
        let rule = with_empty(always_fails);
        assert!(rule.check(value.as_ref(), &json!({})).is_valid());
    }

    #[rstest]
    #[case(json!(0))]
    #[case(json!(false))]
    #[case(json!([]))]
    #[case(json!("x"))]
    fn non_empty_values_delegate(#[case] value: Value) {
        let rule = with_empty(always_fails);
        assert_eq!(
            rule.check(Some(&value), &json!({})),
            FieldResult::message("fail")
        );
    }

    #[test]
    fn inner_result_passes_through_verbatim() {
        let rule = with_empty(|_: Option<&Value>, _: &Value| FieldResult::message("inner"));
        assert_eq!(
            rule.check(Some(&json!("x")), &json!({})),
            FieldResult::message("inner")
        );
    }
}
