//! Dotted-path access into nested records.
//!
//! Paths are dot-separated strings like `"address.city"` or
//! `"items.0.name"`. A numeric segment indexes into the value at that
//! level when it is an array, and is an ordinary object key otherwise.
//! Lookup never panics: any structurally absent segment yields `None`.
//!
//! Writing goes the other way — the engine only ever writes into its own
//! [`ErrorMap`](crate::foundation::ErrorMap), which carries the dotted-path
//! insert; caller records are never mutated.

use serde_json::Value;

/// Reads the value at a dotted path, or `None` if any intermediate
/// segment is missing.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
///
/// let record = json!({"address": {"city": "Riga"}, "tags": ["a", "b"]});
/// assert_eq!(formguard::path::get(&record, "address.city"), Some(&json!("Riga")));
/// assert_eq!(formguard::path::get(&record, "tags.1"), Some(&json!("b")));
/// assert_eq!(formguard::path::get(&record, "address.zip"), None);
/// assert_eq!(formguard::path::get(&record, "tags.7"), None);
/// ```
#[must_use]
pub fn get<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = record;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            // Descending into a scalar: the path is structurally absent.
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn top_level_key() {
        let record = json!({"name": "Alice"});
        assert_eq!(get(&record, "name"), Some(&json!("Alice")));
    }

    #[test]
    fn nested_key() {
        let record = json!({"a": {"b": {"c": 42}}});
        assert_eq!(get(&record, "a.b.c"), Some(&json!(42)));
    }

    #[test]
    fn missing_intermediate_segment() {
        let record = json!({"a": {"b": 1}});
        assert_eq!(get(&record, "a.x.c"), None);
    }

    #[test]
    fn descending_into_scalar() {
        let record = json!({"a": "scalar"});
        assert_eq!(get(&record, "a.b"), None);
    }

    #[test]
    fn numeric_segment_indexes_array() {
        let record = json!({"items": [{"name": "first"}, {"name": "second"}]});
        assert_eq!(get(&record, "items.1.name"), Some(&json!("second")));
    }

    #[test]
    fn numeric_segment_as_object_key() {
        let record = json!({"lines": {"0": "zeroth"}});
        assert_eq!(get(&record, "lines.0"), Some(&json!("zeroth")));
    }

    #[test]
    fn array_index_out_of_range() {
        let record = json!({"items": [1, 2]});
        assert_eq!(get(&record, "items.5"), None);
    }

    #[test]
    fn non_numeric_segment_on_array() {
        let record = json!({"items": [1, 2]});
        assert_eq!(get(&record, "items.first"), None);
    }

    #[test]
    fn null_is_still_a_value() {
        let record = json!({"a": null});
        assert_eq!(get(&record, "a"), Some(&Value::Null));
    }
}
