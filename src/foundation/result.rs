//! Field validation outcomes.
//!
//! The outcome of a field validator is an explicit sum type rather than a
//! string-or-map runtime inspection: a validator either passes, yields one
//! message for the path under evaluation, or yields messages for
//! arbitrary absolute paths (the cross-field case).

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Serialize;

// ============================================================================
// FIELD RESULT
// ============================================================================

/// The outcome of running one field validator.
///
/// # Examples
///
/// ```rust
/// use formguard::foundation::FieldResult;
///
/// let ok = FieldResult::Valid;
/// assert!(ok.is_valid());
///
/// let failed = FieldResult::message("Required");
/// assert!(!failed.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldResult {
    /// The value is valid, or the validator elected to skip.
    Valid,
    /// A single message for the field under evaluation.
    Message(Cow<'static, str>),
    /// Messages for arbitrary absolute paths, spread into the output at
    /// those paths — NOT nested under the rule's own key.
    PathErrors(PathErrors),
}

impl FieldResult {
    /// Builds a `Message` result.
    pub fn message(msg: impl Into<Cow<'static, str>>) -> Self {
        FieldResult::Message(msg.into())
    }

    /// Returns `true` for [`FieldResult::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldResult::Valid)
    }
}

impl From<Option<PathErrors>> for FieldResult {
    /// An empty or absent path-error map means the check passed.
    fn from(errors: Option<PathErrors>) -> Self {
        match errors {
            Some(errors) if !errors.is_empty() => FieldResult::PathErrors(errors),
            _ => FieldResult::Valid,
        }
    }
}

// ============================================================================
// PATH ERRORS
// ============================================================================

/// An ordered, flat map from absolute dotted path to error message.
///
/// This is the return shape of record-level validators. Keys are full
/// paths into the record (`"password.confirm"`), not single segments, so
/// two maps can only collide on an identical path — merging is
/// last-writer-wins at the message level and cannot drop sibling entries.
///
/// # Examples
///
/// ```rust
/// use formguard::foundation::PathErrors;
///
/// let errors = PathErrors::new()
///     .with("password", "Fields must match")
///     .with("confirm", "Fields must match");
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.get("confirm"), Some("Fields must match"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathErrors(IndexMap<String, String>);

impl PathErrors {
    /// Creates an empty path-error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a message at a path, replacing any previous message there.
    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.insert(path.into(), message.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, path: impl Into<String>, message: impl Into<String>) -> Self {
        self.insert(path, message);
        self
    }

    /// Returns the message at a path, if any.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    /// Absorbs another map; on a shared path the incoming message wins.
    pub fn merge(&mut self, other: PathErrors) {
        for (path, message) in other.0 {
            if self.0.contains_key(&path) {
                tracing::debug!(%path, "path error overwritten during merge");
            }
            self.0.insert(path, message);
        }
    }

    /// Number of path entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no path carries a message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(path, message)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, m)| (p.as_str(), m.as_str()))
    }
}

impl IntoIterator for PathErrors {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<P: Into<String>, M: Into<String>> FromIterator<(P, M)> for PathErrors {
    fn from_iter<I: IntoIterator<Item = (P, M)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(p, m)| (p.into(), m.into()))
                .collect(),
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
