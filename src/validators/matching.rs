//! Cross-field equality.

use serde_json::Value;
use std::borrow::Cow;

use crate::foundation::{PathErrors, ValidateRecord, is_empty};
use crate::path;

/// Record validator that requires two fields to hold equal values.
///
/// Skips while either field is empty — mismatches only make sense once
/// both sides are filled in. On failure the same message is reported
/// under both paths.
///
/// Default message: `"Fields {first} and {second} must match"`.
///
/// # Examples
///
/// ```rust
/// use formguard::foundation::ValidateRecord;
/// use formguard::validators::fields_match;
/// use serde_json::json;
///
/// let rule = fields_match("password", "confirm");
///
/// assert!(rule.check(&json!({"password": "a", "confirm": "a"})).is_none());
/// assert!(rule.check(&json!({"password": "a"})).is_none()); // one side empty
///
/// let errors = rule.check(&json!({"password": "a", "confirm": "b"})).unwrap();
/// assert_eq!(errors.get("password"), errors.get("confirm"));
/// ```
#[derive(Debug, Clone)]
pub struct FieldsMatch {
    /// Dotted path of the first field.
    pub first: String,
    /// Dotted path of the second field.
    pub second: String,
    message: Option<Cow<'static, str>>,
}

impl FieldsMatch {
    /// Creates the check for two dotted paths.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            message: None,
        }
    }

    /// Replaces the default message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn message(&self) -> String {
        match &self.message {
            Some(msg) => msg.clone().into_owned(),
            None => format!("Fields {} and {} must match", self.first, self.second),
        }
    }
}

impl ValidateRecord for FieldsMatch {
    fn check(&self, record: &Value) -> Option<PathErrors> {
        let first = path::get(record, &self.first);
        let second = path::get(record, &self.second);
        if is_empty(first) || is_empty(second) {
            return None;
        }
        if first == second {
            return None;
        }
        let message = self.message();
        Some(
            PathErrors::new()
                .with(self.first.clone(), message.clone())
                .with(self.second.clone(), message),
        )
    }
}

/// Creates a [`FieldsMatch`] record validator.
#[must_use]
pub fn fields_match(first: impl Into<String>, second: impl Into<String>) -> FieldsMatch {
    FieldsMatch::new(first, second)
}
