//! In-memory document lookup backend

use crate::error::LookupError;
use crate::lookup::{DocumentLookup, ResourceQuery};
use serde_json::Value;
use std::collections::HashMap;

/// In-memory lookup backend
///
/// Documents are grouped by collection name (compared case-insensitively).
/// A document matches when every filter the query sets is present on it
/// with the same value, ignoring case. Fixtures and tests only.
#[derive(Debug, Clone, Default)]
pub struct MemoryLookup {
    collections: HashMap<String, Vec<Value>>,
}

impl MemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `{ "<collection>": [document, ...], ... }`
    ///
    /// # Examples
    ///
    /// ```
    /// use paperpath_router::MemoryLookup;
    ///
    /// let lookup = MemoryLookup::from_json_str(r#"{ "mdcat": [{ "title": "Key" }] }"#).unwrap();
    /// assert_eq!(lookup.len(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, LookupError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(value: Value) -> Result<Self, LookupError> {
        let Value::Object(collections) = value else {
            return Err(LookupError::Malformed(
                "expected an object of collections".to_string(),
            ));
        };

        let mut lookup = Self::new();
        for (collection, documents) in collections {
            let Value::Array(documents) = documents else {
                return Err(LookupError::Malformed(format!(
                    "collection '{}' is not an array",
                    collection
                )));
            };
            for document in documents {
                lookup.insert(&collection, document);
            }
        }
        Ok(lookup)
    }

    /// Adds a document to a collection
    pub fn insert(&mut self, collection: &str, document: Value) {
        self.collections
            .entry(collection.to_lowercase())
            .or_default()
            .push(document);
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_document(mut self, collection: &str, document: Value) -> Self {
        self.insert(collection, document);
        self
    }

    /// Total number of documents
    pub fn len(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn field_matches(document: &Value, field: &str, expected: &str) -> bool {
    match document.get(field) {
        Some(Value::String(actual)) => actual.eq_ignore_ascii_case(expected),
        Some(Value::Number(actual)) => actual.to_string() == expected,
        _ => false,
    }
}

impl DocumentLookup for MemoryLookup {
    fn find(&self, query: &ResourceQuery) -> Result<Vec<Value>, LookupError> {
        let Some(documents) = self.collections.get(&query.collection.to_lowercase()) else {
            return Ok(Vec::new());
        };

        Ok(documents
            .iter()
            .filter(|document| {
                query
                    .filters()
                    .all(|(field, expected)| field_matches(document, field, expected))
            })
            .cloned()
            .collect())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Category;
    use serde_json::json;

    fn query(collection: &str, subject: Option<&str>, year: Option<&str>) -> ResourceQuery {
        ResourceQuery {
            collection: collection.to_string(),
            category: Category::School,
            subject: subject.map(str::to_string),
            chapter: None,
            year: year.map(str::to_string),
        }
    }

    fn lookup() -> MemoryLookup {
        MemoryLookup::new()
            .with_document("punjab9thnotes", json!({ "subject": "Physics", "year": 2023, "title": "P1" }))
            .with_document("punjab9thnotes", json!({ "subject": "chemistry", "year": "2022", "title": "C1" }))
            .with_document("punjab9thnotes", json!({ "title": "Index" }))
    }

    #[test]
    fn test_memory_lookup_unfiltered() {
        let docs = lookup().find(&query("punjab9thnotes", None, None)).unwrap();
        assert_eq!(docs.len(), 3);
    }

    #[test]
    fn test_memory_lookup_filters_case_insensitive() {
        let docs = lookup().find(&query("Punjab9thNotes", Some("physics"), None)).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["title"], "P1");
    }

    #[test]
    fn test_memory_lookup_numeric_year() {
        let docs = lookup().find(&query("punjab9thnotes", None, Some("2023"))).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["title"], "P1");
    }

    #[test]
    fn test_memory_lookup_unknown_collection() {
        let docs = lookup().find(&query("sindh10th", None, None)).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_memory_lookup_from_json() {
        let lookup = MemoryLookup::from_json_str(r#"{ "css": [{ "year": "2020" }, { "year": "2021" }] }"#).unwrap();
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.name(), "memory");
    }

    #[test]
    fn test_memory_lookup_rejects_malformed() {
        assert!(matches!(
            MemoryLookup::from_json_str("[1, 2]"),
            Err(LookupError::Malformed(_))
        ));
        assert!(matches!(
            MemoryLookup::from_json_str(r#"{ "css": 3 }"#),
            Err(LookupError::Malformed(_))
        ));
        assert!(matches!(
            MemoryLookup::from_json_str("{"),
            Err(LookupError::Json(_))
        ));
    }
}
