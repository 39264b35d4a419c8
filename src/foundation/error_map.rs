//! The nested error structure produced by validation.
//!
//! An [`ErrorMap`] mirrors the shape of the record it was produced from:
//! nested maps with error-message leaves, and absent keys where a field
//! is valid. It serializes to the plain JSON object shape form libraries
//! consume (`{"address": {"city": "Required"}}`).
//!
//! Writes go through dotted paths. The tree holds only maps, so numeric
//! segments become map keys here; sequence indexing applies only when
//! reading records (see [`crate::path`]).

use indexmap::IndexMap;
use serde::Serialize;

// ============================================================================
// ERROR NODE
// ============================================================================

/// One node of the error tree: a leaf message or a nested map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorNode {
    /// A leaf error message.
    Message(String),
    /// Errors for a nested sub-record.
    Nested(ErrorMap),
}

impl ErrorNode {
    /// Returns the leaf message, or `None` for a nested node.
    #[must_use]
    pub fn as_message(&self) -> Option<&str> {
        match self {
            ErrorNode::Message(msg) => Some(msg),
            ErrorNode::Nested(_) => None,
        }
    }
}

// ============================================================================
// ERROR MAP
// ============================================================================

/// A nested error map keyed by record field, in insertion order.
///
/// # Examples
///
/// ```rust
/// use formguard::foundation::ErrorMap;
///
/// let mut errors = ErrorMap::new();
/// errors.insert("address.city", "Required");
///
/// assert_eq!(errors.message_at("address.city"), Some("Required"));
/// assert_eq!(errors.message_at("address.zip"), None);
/// assert_eq!(
///     serde_json::to_value(&errors).unwrap(),
///     serde_json::json!({"address": {"city": "Required"}}),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    entries: IndexMap<String, ErrorNode>,
}

impl ErrorMap {
    /// Creates an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a message at a dotted path, creating intermediate nested
    /// maps as needed.
    ///
    /// Last writer wins: inserting below an existing leaf replaces the
    /// leaf with a nested map, and inserting a message where a subtree
    /// exists replaces the subtree. Both overwrites are logged at debug
    /// level.
    pub fn insert(&mut self, path: &str, message: impl Into<String>) {
        self.insert_node(path, message.into());
    }

    fn insert_node(&mut self, path: &str, message: String) {
        match path.split_once('.') {
            None => {
                let previous = self
                    .entries
                    .insert(path.to_string(), ErrorNode::Message(message));
                if matches!(previous, Some(ErrorNode::Nested(_))) {
                    tracing::debug!(segment = path, "error subtree replaced by leaf message");
                }
            }
            Some((head, rest)) => {
                let node = self
                    .entries
                    .entry(head.to_string())
                    .or_insert_with(|| ErrorNode::Nested(ErrorMap::new()));
                if matches!(node, ErrorNode::Message(_)) {
                    tracing::debug!(segment = head, "leaf message replaced by error subtree");
                    *node = ErrorNode::Nested(ErrorMap::new());
                }
                if let ErrorNode::Nested(map) = node {
                    map.insert_node(rest, message);
                }
            }
        }
    }

    /// Returns the node at a dotted path, if any.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&ErrorNode> {
        match path.split_once('.') {
            None => self.entries.get(path),
            Some((head, rest)) => match self.entries.get(head)? {
                ErrorNode::Nested(map) => map.get(rest),
                ErrorNode::Message(_) => None,
            },
        }
    }

    /// Returns the leaf message at a dotted path, if any.
    #[must_use]
    pub fn message_at(&self, path: &str) -> Option<&str> {
        self.get(path)?.as_message()
    }

    /// Deep-merges another error map into this one.
    ///
    /// Nested maps merge recursively by key; only at the leaf level does
    /// the incoming message win.
    pub fn merge(&mut self, other: ErrorMap) {
        for (key, incoming) in other.entries {
            match (self.entries.get_mut(&key), incoming) {
                (Some(ErrorNode::Nested(existing)), ErrorNode::Nested(incoming)) => {
                    existing.merge(incoming);
                }
                (Some(slot), incoming) => {
                    tracing::debug!(segment = %key, "error entry overwritten during merge");
                    *slot = incoming;
                }
                (None, incoming) => {
                    self.entries.insert(key, incoming);
                }
            }
        }
    }

    /// Returns `true` when no field carries an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total number of leaf messages in the tree.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.entries
            .values()
            .map(|node| match node {
                ErrorNode::Message(_) => 1,
                ErrorNode::Nested(map) => map.message_count(),
            })
            .sum()
    }

    /// Iterates top-level `(key, node)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorNode)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), n))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn insert_and_read_back_nested_path() {
        let mut errors = ErrorMap::new();
        errors.insert("a.b.c", "err");
        assert_eq!(errors.message_at("a.b.c"), Some("err"));
    }

    #[test]
    fn absent_paths_read_as_none() {
        let mut errors = ErrorMap::new();
        errors.insert("a.b", "err");
        assert_eq!(errors.message_at("a"), None);
        assert_eq!(errors.message_at("a.b.c"), None);
        assert_eq!(errors.message_at("x"), None);
    }

    #[test]
    fn sibling_paths_share_intermediate_maps() {
        let mut errors = ErrorMap::new();
        errors.insert("address.city", "Required");
        errors.insert("address.zip", "Required");

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({"address": {"city": "Required", "zip": "Required"}}),
        );
    }

    #[test]
    fn leaf_replaced_by_subtree() {
        let mut errors = ErrorMap::new();
        errors.insert("a", "whole-field error");
        errors.insert("a.b", "sub-field error");
        assert_eq!(errors.message_at("a"), None);
        assert_eq!(errors.message_at("a.b"), Some("sub-field error"));
    }

    #[test]
    fn subtree_replaced_by_leaf() {
        let mut errors = ErrorMap::new();
        errors.insert("a.b", "sub-field error");
        errors.insert("a", "whole-field error");
        assert_eq!(errors.message_at("a"), Some("whole-field error"));
        assert_eq!(errors.message_at("a.b"), None);
    }

    #[test]
    fn numeric_segments_become_map_keys() {
        let mut errors = ErrorMap::new();
        errors.insert("items.0.name", "Required");
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({"items": {"0": {"name": "Required"}}}),
        );
    }

    #[test]
    fn deep_merge_preserves_siblings() {
        let mut first = ErrorMap::new();
        first.insert("user.name", "Too short");

        let mut second = ErrorMap::new();
        second.insert("user.email", "Invalid e-mail");

        first.merge(second);
        assert_eq!(first.message_at("user.name"), Some("Too short"));
        assert_eq!(first.message_at("user.email"), Some("Invalid e-mail"));
    }

    #[test]
    fn deep_merge_leaf_collision_last_writer_wins() {
        let mut first = ErrorMap::new();
        first.insert("user.name", "first");

        let mut second = ErrorMap::new();
        second.insert("user.name", "second");

        first.merge(second);
        assert_eq!(first.message_at("user.name"), Some("second"));
    }

    #[test]
    fn message_count_walks_the_tree() {
        let mut errors = ErrorMap::new();
        errors.insert("a", "x");
        errors.insert("b.c", "y");
        errors.insert("b.d", "z");
        assert_eq!(errors.message_count(), 3);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn empty_map_serializes_to_empty_object() {
        assert_eq!(serde_json::to_value(ErrorMap::new()).unwrap(), json!({}));
    }
}
