use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A translation table mapping namespace and key to a template string.
///
/// Deserializes from a JSON object of objects:
///
/// ```
/// use lingo::Translations;
///
/// let table: Translations = serde_json::from_str(r#"{
///     "general": { "hello": "Hello", "name": "My name is {{name}}" }
/// }"#).unwrap();
///
/// assert_eq!(table.get("general", "hello"), Some("Hello"));
/// assert_eq!(table.get("general", "missing"), None);
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    namespaces: BTreeMap<String, BTreeMap<String, String>>,
}

impl Translations {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the template for a namespace and key.
    pub fn get(&self, namespace: &str, key: &str) -> Option<&str> {
        self.namespaces
            .get(namespace)
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
    }

    /// Insert a template, returning the previous one for the same slot.
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Option<String> {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .insert(key.into(), template.into())
    }

    /// Returns true if a template exists for the namespace and key.
    pub fn contains(&self, namespace: &str, key: &str) -> bool {
        self.get(namespace, key).is_some()
    }

    /// Namespace names in sorted order.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Key names of one namespace in sorted order.
    pub fn keys(&self, namespace: &str) -> impl Iterator<Item = &str> {
        self.namespaces
            .get(namespace)
            .into_iter()
            .flat_map(|keys| keys.keys().map(String::as_str))
    }

    /// Every `(namespace, key, template)` triple in sorted order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.namespaces.iter().flat_map(|(namespace, keys)| {
            keys.iter()
                .map(move |(key, template)| (namespace.as_str(), key.as_str(), template.as_str()))
        })
    }

    /// Total number of templates across all namespaces.
    pub fn len(&self) -> usize {
        self.namespaces.values().map(BTreeMap::len).sum()
    }

    /// Returns true if the table holds no templates.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
