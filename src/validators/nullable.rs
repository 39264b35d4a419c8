//! Presence validator.

use serde_json::Value;
use std::borrow::Cow;

use crate::foundation::{FieldResult, ValidateField, is_empty};

/// Fails when the field's value is empty — absent, `null`, or blank text.
///
/// Default message: `"Required"`.
///
/// # Examples
///
/// ```rust
/// use formguard::foundation::ValidateField;
/// use formguard::validators::required;
/// use serde_json::json;
///
/// let rule = required();
/// let record = json!({});
///
/// assert!(!rule.check(None, &record).is_valid());
/// assert!(!rule.check(Some(&json!("  ")), &record).is_valid());
/// assert!(rule.check(Some(&json!(0)), &record).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct Required {
    /// Message reported when the value is empty.
    pub message: Cow<'static, str>,
}

impl Default for Required {
    fn default() -> Self {
        Self {
            message: Cow::Borrowed("Required"),
        }
    }
}

impl ValidateField for Required {
    fn check(&self, value: Option<&Value>, _record: &Value) -> FieldResult {
        if is_empty(value) {
            FieldResult::Message(self.message.clone())
        } else {
            FieldResult::Valid
        }
    }
}

/// Creates a [`Required`] validator with the default message.
#[must_use]
pub fn required() -> Required {
    Required::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::FieldValidateExt;
    use serde_json::json;

    #[test]
    fn empty_values_fail() {
        let rule = required();
        let record = json!({});
        assert_eq!(rule.check(None, &record), FieldResult::message("Required"));
        assert_eq!(
            rule.check(Some(&json!(null)), &record),
            FieldResult::message("Required")
        );
    }

    #[test]
    fn present_values_pass() {
        let rule = required();
        let record = json!({});
        assert!(rule.check(Some(&json!("x")), &record).is_valid());
        assert!(rule.check(Some(&json!(false)), &record).is_valid());
        assert!(rule.check(Some(&json!([])), &record).is_valid());
    }

    #[test]
    fn custom_message() {
        let rule = required().with_message("Fill me in");
        assert_eq!(
            rule.check(None, &json!({})),
            FieldResult::message("Fill me in")
        );
    }
}
