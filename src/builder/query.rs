//! Query-string accumulation.
//!
//! The builder keeps two separate structures: pre-formatted fragments that
//! are emitted verbatim, and a keyed map whose keys and values are
//! percent-encoded at serialization time.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Input accepted by [`RequestBuilder::query`](crate::RequestBuilder::query).
///
/// Strings become verbatim fragments; key/value collections are merged into
/// the keyed map.
///
/// # Example
///
/// ```rust
/// use postgrest_builder::QueryInput;
///
/// assert_eq!(
///     QueryInput::from("order=id.asc.nullslast"),
///     QueryInput::Fragment("order=id.asc.nullslast".to_string())
/// );
/// assert_eq!(
///     QueryInput::from([("limit", 10)]),
///     QueryInput::Map(vec![("limit".to_string(), "10".to_string())])
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryInput {
    /// A pre-formatted `key=value` segment, never re-encoded.
    Fragment(String),
    /// Structured entries, shallow-merged into the keyed map.
    Map(Vec<(String, String)>),
}

impl From<&str> for QueryInput {
    fn from(fragment: &str) -> Self {
        Self::Fragment(fragment.to_string())
    }
}

impl From<String> for QueryInput {
    fn from(fragment: String) -> Self {
        Self::Fragment(fragment)
    }
}

impl<K: Into<String>, V: ToString> From<Vec<(K, V)>> for QueryInput {
    fn from(entries: Vec<(K, V)>) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.to_string()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for QueryInput {
    fn from(entries: [(K, V); N]) -> Self {
        Self::from(Vec::from(entries))
    }
}

impl<K: Into<String>, V: ToString> From<BTreeMap<K, V>> for QueryInput {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Self::from(entries.into_iter().collect::<Vec<_>>())
    }
}

impl<K: Into<String>, V: ToString, S: BuildHasher> From<HashMap<K, V, S>> for QueryInput {
    fn from(entries: HashMap<K, V, S>) -> Self {
        Self::from(entries.into_iter().collect::<Vec<_>>())
    }
}

/// An insertion-ordered map of query parameters.
///
/// Inserting an existing key replaces its value in place, keeping the
/// position of the first insertion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryMap {
    entries: Vec<(String, String)>,
}

impl QueryMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or overwrites `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Form-encodes the map as `key=value&key2=value2`.
    ///
    /// Keys and values are percent-encoded; only RFC 3986 unreserved
    /// characters (`A-Z a-z 0-9 - _ . ~`) pass through.
    #[must_use]
    pub fn encode(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl Extend<(String, String)> for QueryMap {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_inputs_become_fragments() {
        assert_eq!(
            QueryInput::from(String::from("a=eq.1")),
            QueryInput::Fragment("a=eq.1".to_string())
        );
    }

    #[test]
    fn test_map_inputs_stringify_values() {
        let mut map = HashMap::new();
        map.insert("limit", 5);

        assert_eq!(
            QueryInput::from(map),
            QueryInput::Map(vec![("limit".to_string(), "5".to_string())])
        );
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut map = QueryMap::new();
        map.insert("select", "a");
        map.insert("limit", "1");
        map.insert("select", "b");

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("select"), Some("b"));
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![("select", "b"), ("limit", "1")]
        );
    }

    #[test]
    fn test_encode_percent_encodes_keys_and_values() {
        let mut map = QueryMap::new();
        map.insert("select", "a,b");
        map.insert("name", "eq.John Doe&co");

        assert_eq!(map.encode(), "select=a%2Cb&name=eq.John%20Doe%26co");
    }

    #[test]
    fn test_empty_map_encodes_to_empty_string() {
        let map = QueryMap::default();
        assert!(map.is_empty());
        assert_eq!(map.encode(), "");
    }
}
