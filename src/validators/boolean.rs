//! Boolean validators.

use serde_json::Value;
use std::borrow::Cow;

use crate::foundation::{FieldResult, ValidateField};

/// Fails unless the value is JSON `true`.
///
/// Anything else — `false`, absent, a truthy-looking string — fails:
/// this is the terms-of-service checkbox, and only an actual tick counts.
///
/// Default message: `"Must be accepted"`.
///
/// # Examples
///
/// ```rust
/// use formguard::foundation::ValidateField;
/// use formguard::validators::is_true;
/// use serde_json::json;
///
/// let rule = is_true();
/// let record = json!({});
///
/// assert!(rule.check(Some(&json!(true)), &record).is_valid());
/// assert!(!rule.check(Some(&json!(false)), &record).is_valid());
/// assert!(!rule.check(Some(&json!("true")), &record).is_valid());
/// assert!(!rule.check(None, &record).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct IsTrue {
    /// Message reported when the value is not `true`.
    pub message: Cow<'static, str>,
}

impl Default for IsTrue {
    fn default() -> Self {
        Self {
            message: Cow::Borrowed("Must be accepted"),
        }
    }
}

impl ValidateField for IsTrue {
    fn check(&self, value: Option<&Value>, _record: &Value) -> FieldResult {
        match value {
            Some(Value::Bool(true)) => FieldResult::Valid,
            _ => FieldResult::Message(self.message.clone()),
        }
    }
}

/// Creates an [`IsTrue`] validator with the default message.
#[must_use]
pub fn is_true() -> IsTrue {
    IsTrue::default()
}
