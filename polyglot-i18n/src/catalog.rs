//! Translation catalogs
//!
//! A catalog is a tree of string leaves under nested maps. Lookups take a
//! dotted key path (`nav.home`) or a slice of segments.

use crate::{I18nError, LocaleCode, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A node in a catalog tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CatalogValue {
    /// Translated string
    Text(String),
    /// Nested group of keys
    Map(BTreeMap<String, CatalogValue>),
}

impl CatalogValue {
    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogValue::Text(_) => "string",
            CatalogValue::Map(_) => "object",
        }
    }

    /// Get the text of a leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CatalogValue::Text(s) => Some(s),
            CatalogValue::Map(_) => None,
        }
    }

    /// Get the children of a group.
    pub fn as_map(&self) -> Option<&BTreeMap<String, CatalogValue>> {
        match self {
            CatalogValue::Map(map) => Some(map),
            CatalogValue::Text(_) => None,
        }
    }

    /// Convert to a JSON value.
    pub fn to_json(&self) -> Value {
        match self {
            CatalogValue::Text(s) => Value::String(s.clone()),
            CatalogValue::Map(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }

    fn from_json(value: Value, locale: &LocaleCode, path: &mut Vec<String>) -> Result<Self> {
        match value {
            Value::String(s) => Ok(CatalogValue::Text(s)),
            Value::Object(obj) => {
                let mut map = BTreeMap::new();
                for (key, child) in obj {
                    path.push(key.clone());
                    let child = Self::from_json(child, locale, path)?;
                    path.pop();
                    map.insert(key, child);
                }
                Ok(CatalogValue::Map(map))
            }
            other => Err(I18nError::InvalidValue {
                locale: locale.to_string(),
                key_path: path.join("."),
                found: json_kind(&other),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// All translations for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    locale: LocaleCode,
    entries: BTreeMap<String, CatalogValue>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new(locale: LocaleCode) -> Self {
        Self {
            locale,
            entries: BTreeMap::new(),
        }
    }

    /// Parse a catalog from JSON text. The root must be an object and every
    /// leaf must be a string.
    pub fn from_json_str(locale: LocaleCode, json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(locale, value)
    }

    /// Build a catalog from an already-parsed JSON value.
    pub fn from_json(locale: LocaleCode, value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(I18nError::NotAnObject(locale.to_string()));
        }

        match CatalogValue::from_json(value, &locale, &mut Vec::new())? {
            CatalogValue::Map(entries) => Ok(Self { locale, entries }),
            CatalogValue::Text(_) => Err(I18nError::NotAnObject(locale.to_string())),
        }
    }

    /// The locale this catalog belongs to.
    pub fn locale(&self) -> &LocaleCode {
        &self.locale
    }

    /// Top-level entries.
    pub fn entries(&self) -> &BTreeMap<String, CatalogValue> {
        &self.entries
    }

    /// Mutable top-level entries.
    pub fn entries_mut(&mut self) -> &mut BTreeMap<String, CatalogValue> {
        &mut self.entries
    }

    /// Look up a node by segments.
    pub fn get_path(&self, segments: &[&str]) -> Option<&CatalogValue> {
        let (first, rest) = segments.split_first()?;
        let mut node = self.entries.get(*first)?;
        for segment in rest {
            node = node.as_map()?.get(*segment)?;
        }
        Some(node)
    }

    /// Look up a node by dotted key path.
    pub fn get(&self, key: &str) -> Option<&CatalogValue> {
        let segments: Vec<&str> = key.split('.').collect();
        self.get_path(&segments)
    }

    /// Look up a string leaf by dotted key path.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(CatalogValue::as_text)
    }

    /// Check if a key path resolves to any node.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set a node at a path of segments, creating intermediate groups.
    ///
    /// An intermediate string leaf in the way is replaced by a group.
    pub fn set_path(&mut self, segments: &[&str], value: CatalogValue) {
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut map = &mut self.entries;
        for segment in parents {
            let node = map
                .entry((*segment).to_string())
                .or_insert_with(|| CatalogValue::Map(BTreeMap::new()));
            if !matches!(node, CatalogValue::Map(_)) {
                *node = CatalogValue::Map(BTreeMap::new());
            }
            let CatalogValue::Map(inner) = node else {
                unreachable!("node was just made a map");
            };
            map = inner;
        }
        map.insert((*last).to_string(), value);
    }

    /// Every dotted path that ends in a string leaf, in sorted order.
    pub fn leaf_paths(&self) -> Vec<String> {
        fn walk(map: &BTreeMap<String, CatalogValue>, prefix: &str, out: &mut Vec<String>) {
            for (key, value) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                match value {
                    CatalogValue::Text(_) => out.push(path),
                    CatalogValue::Map(inner) => walk(inner, &path, out),
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.entries, "", &mut out);
        out
    }

    /// Convert the whole catalog to a JSON object.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn en() -> LocaleCode {
        LocaleCode::parse("en").unwrap()
    }

    #[test]
    fn test_from_json_nested() {
        let catalog = Catalog::from_json(
            en(),
            json!({"greeting": "Hello", "nav": {"home": "Home", "about": "About"}}),
        )
        .unwrap();

        assert_eq!(catalog.get_text("greeting"), Some("Hello"));
        assert_eq!(catalog.get_text("nav.home"), Some("Home"));
        assert!(catalog.get("nav").unwrap().as_map().is_some());
        assert_eq!(catalog.get_text("nav"), None);
        assert_eq!(catalog.get_text("nav.missing"), None);
        assert_eq!(catalog.get_text("greeting.deeper"), None);
    }

    #[test]
    fn test_from_json_rejects_numbers() {
        let err = Catalog::from_json(en(), json!({"a": {"b": 3}})).unwrap_err();
        match err {
            I18nError::InvalidValue { key_path, found, .. } => {
                assert_eq!(key_path, "a.b");
                assert_eq!(found, "number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_json_rejects_non_object_root() {
        assert!(matches!(
            Catalog::from_json_str(en(), r#"["x"]"#),
            Err(I18nError::NotAnObject(_))
        ));
    }

    #[test]
    fn test_set_path_creates_groups() {
        let mut catalog = Catalog::new(en());
        catalog.set_path(&["data", "locales", "en"], CatalogValue::Text("x".into()));
        assert_eq!(catalog.get_text("data.locales.en"), Some("x"));

        catalog.set_path(&["greeting"], CatalogValue::Text("Hi".into()));
        catalog.set_path(&["greeting", "formal"], CatalogValue::Text("Hello".into()));
        assert_eq!(catalog.get_text("greeting.formal"), Some("Hello"));
    }

    #[test]
    fn test_leaf_paths_sorted() {
        let catalog = Catalog::from_json(
            en(),
            json!({"b": "2", "a": {"y": "1", "x": "0"}}),
        )
        .unwrap();
        assert_eq!(catalog.leaf_paths(), vec!["a.x", "a.y", "b"]);
    }

    #[test]
    fn test_to_json_round_trips_structure() {
        let source = json!({"greeting": "Hello", "nav": {"home": "Home"}});
        let catalog = Catalog::from_json(en(), source.clone()).unwrap();
        assert_eq!(catalog.to_json(), source);
    }
}
