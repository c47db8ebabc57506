//! Ordered attribute storage
//!
//! Attributes keep the order in which their keys were first seen. Inserting a
//! key that already exists does not replace the value: the new value is
//! appended after a single space, which is how repeated `.class` shorthand
//! accumulates into one `class` attribute.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Insertion-ordered attribute map with space-joining merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, merging with any existing value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, current)) => merge_values(current, &value),
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Merge rule for a repeated key: `old` becomes `old + " " + new`.
pub fn merge_values(current: &mut String, addition: &str) {
    current.push(' ');
    current.push_str(addition);
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_insertion_order() {
        let mut attrs = AttributeMap::new();
        attrs.insert("id", "main");
        attrs.insert("class", "a");
        attrs.insert("href", "/");
        attrs.insert("class", "b");

        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["id", "class", "href"]);
    }

    #[test]
    fn test_repeated_key_merges_with_space() {
        let mut attrs = AttributeMap::new();
        attrs.insert("class", "a");
        attrs.insert("class", "b");
        attrs.insert("class", "c");

        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("class"), Some("a b c"));
    }

    #[test]
    fn test_merge_values() {
        let mut value = String::from("a");
        merge_values(&mut value, "b");
        assert_eq!(value, "a b");
    }

    #[test]
    fn test_lookup_missing_key() {
        let attrs = AttributeMap::new();
        assert!(attrs.is_empty());
        assert_eq!(attrs.get("id"), None);
        assert!(!attrs.contains_key("id"));
    }
}
