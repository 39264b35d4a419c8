//! Pattern validators.
//!
//! Regex-backed checks over string values. Unlike the length validators,
//! these fail on non-string values: a pattern rule on a field that holds
//! a number is a real validation failure, not a type nobody measured.

use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::combinators::{WithEmpty, with_empty};
use crate::error::SchemaError;
use crate::foundation::{FieldResult, ValidateField};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .unwrap()
});

// ============================================================================
// PATTERN
// ============================================================================

/// Fails when the value is not a string matching the pattern.
///
/// Default message: `"Invalid format"`.
///
/// # Examples
///
/// ```rust
/// use formguard::foundation::ValidateField;
/// use formguard::validators::pattern;
/// use serde_json::json;
///
/// let rule = pattern(r"^\d{5}$")?;
/// let record = json!({});
///
/// assert!(rule.check(Some(&json!("12345")), &record).is_valid());
/// assert!(!rule.check(Some(&json!("1234")), &record).is_valid());
/// assert!(!rule.check(Some(&json!(12345)), &record).is_valid()); // not a string
/// # Ok::<(), formguard::SchemaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    /// The compiled pattern the value must match.
    pub regex: Regex,
    /// Message reported when the value does not match.
    pub message: Cow<'static, str>,
}

impl ValidateField for Pattern {
    fn check(&self, value: Option<&Value>, _record: &Value) -> FieldResult {
        match value {
            Some(Value::String(s)) if self.regex.is_match(s) => FieldResult::Valid,
            _ => FieldResult::Message(self.message.clone()),
        }
    }
}

/// Creates a [`Pattern`] validator from a regex source.
///
/// Fails with [`SchemaError::InvalidPattern`] when the regex does not
/// compile — at schema-definition time, not during validation.
pub fn pattern(source: &str) -> Result<Pattern, SchemaError> {
    let regex = Regex::new(source).map_err(|err| SchemaError::InvalidPattern {
        pattern: source.to_string(),
        source: err,
    })?;
    Ok(Pattern {
        regex,
        message: Cow::Borrowed("Invalid format"),
    })
}

/// E-mail format check. Default message: `"Invalid e-mail"`.
///
/// # Examples
///
/// ```rust
/// use formguard::foundation::ValidateField;
/// use formguard::validators::email;
/// use serde_json::json;
///
/// let rule = email();
/// let record = json!({});
///
/// assert!(rule.check(Some(&json!("alice@example.com")), &record).is_valid());
/// assert!(!rule.check(Some(&json!("not-an-email")), &record).is_valid());
/// ```
#[must_use]
pub fn email() -> Pattern {
    Pattern {
        regex: EMAIL_REGEX.clone(),
        message: Cow::Borrowed("Invalid e-mail"),
    }
}

// ============================================================================
// FILLED
// ============================================================================

/// Completeness check for masked inputs.
///
/// Masked inputs (phone numbers, dates) render unfilled positions with a
/// placeholder; the value is complete once no placeholder remains. Empty
/// values are skipped, and non-string values fail.
///
/// Default placeholder: `"_"`. Default message: `"Incomplete"`.
#[derive(Debug, Clone)]
pub struct Filled {
    /// Substring marking an unfilled position.
    pub placeholder: Cow<'static, str>,
    /// Message reported while the placeholder remains.
    pub message: Cow<'static, str>,
}

impl ValidateField for Filled {
    fn check(&self, value: Option<&Value>, _record: &Value) -> FieldResult {
        match value {
            Some(Value::String(s)) if !s.contains(self.placeholder.as_ref()) => FieldResult::Valid,
            _ => FieldResult::Message(self.message.clone()),
        }
    }
}

/// Creates a [`Filled`] validator (placeholder `"_"`), skipping empty values.
///
/// # Examples
///
/// ```rust
/// use formguard::foundation::ValidateField;
/// use formguard::validators::filled;
/// use serde_json::json;
///
/// let rule = filled();
/// let record = json!({});
///
/// assert!(rule.check(Some(&json!("+1 555 0100")), &record).is_valid());
/// assert!(!rule.check(Some(&json!("+1 555 01__")), &record).is_valid());
/// assert!(rule.check(None, &record).is_valid()); // empty is skipped
/// ```
#[must_use]
pub fn filled() -> WithEmpty<Filled> {
    with_empty(Filled {
        placeholder: Cow::Borrowed("_"),
        message: Cow::Borrowed("Incomplete"),
    })
}

// ============================================================================
// TESTS
// ============================================================================
