//! MESSAGE combinator - custom error messages.
//!
//! Every built-in validator carries a documented default message; this
//! wrapper swaps it for a caller-supplied one. Only single-field
//! [`Message`](FieldResult::Message) results are replaced — a
//! [`PathErrors`](FieldResult::PathErrors) result already names its own
//! paths and messages and passes through untouched.

use serde_json::Value;
use std::borrow::Cow;

use crate::foundation::{FieldResult, ValidateField};

/// Replaces the message a failing inner validator reports.
///
/// # Examples
///
/// ```rust
/// use formguard::foundation::{FieldResult, FieldValidateExt, ValidateField};
/// use formguard::validators::required;
/// use serde_json::json;
///
/// let rule = required().with_message("Please fill this in");
/// assert_eq!(
///     rule.check(None, &json!({})),
///     FieldResult::message("Please fill this in"),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    /// Wraps a validator with a replacement message.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns the replacement message.
    pub fn message(&self) -> &str {
        &self.message
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

impl<V: ValidateField> ValidateField for WithMessage<V> {
    fn check(&self, value: Option<&Value>, record: &Value) -> FieldResult {
        match self.inner.check(value, record) {
            FieldResult::Message(_) => FieldResult::Message(self.message.clone()),
            other => other,
        }
    }
}

/// Wraps a validator with a replacement failure message.
pub fn with_message<V: ValidateField>(
    inner: V,
    message: impl Into<Cow<'static, str>>,
) -> WithMessage<V> {
    WithMessage::new(inner, message)
}
