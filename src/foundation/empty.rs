//! Emptiness predicate.
//!
//! Deliberately narrow: only "missing" and "blank text" count as empty.
//! Numbers (including 0), booleans, and collections (even empty ones) are
//! never empty — an absent checkbox and an unchecked checkbox are
//! different states, and an empty list is a present answer.

use serde_json::Value;

/// Returns `true` when the value is absent, JSON `null`, or a string
/// whose trimmed form has zero length.
///
/// # Examples
///
/// ```rust
/// use formguard::foundation::is_empty;
/// use serde_json::json;
///
/// assert!(is_empty(None));
/// assert!(is_empty(Some(&json!(null))));
/// assert!(is_empty(Some(&json!("   "))));
///
/// assert!(!is_empty(Some(&json!(0))));
/// assert!(!is_empty(Some(&json!(false))));
/// assert!(!is_empty(Some(&json!([]))));
/// assert!(!is_empty(Some(&json!({}))));
/// ```
#[must_use]
pub fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}
