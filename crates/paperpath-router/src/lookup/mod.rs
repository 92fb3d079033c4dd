//! Document lookup seam
//!
//! The classifier never talks to a database. Callers hand it a
//! [`DocumentLookup`] backend and it turns the descriptor into a
//! [`ResourceQuery`] for that backend.

use crate::descriptor::ResourceDescriptor;
use crate::error::LookupError;
use crate::taxonomy::Category;
use serde::{Deserialize, Serialize};

pub mod memory;

pub use memory::MemoryLookup;

/// Backend-agnostic query derived from a descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceQuery {
    /// Storage key, see [`ResourceDescriptor::collection_name`]
    pub collection: String,
    pub category: Category,
    pub subject: Option<String>,
    pub chapter: Option<String>,
    pub year: Option<String>,
}

impl ResourceQuery {
    /// # Examples
    ///
    /// ```
    /// use paperpath_router::{ResourceClassifier, ResourceQuery};
    ///
    /// let descriptor = ResourceClassifier::default()
    ///     .classify(&["sindh", "12th", "past-papers", "chemistry", "2022"])
    ///     .unwrap();
    /// let query = ResourceQuery::from_descriptor(&descriptor);
    ///
    /// assert_eq!(query.collection, "sindh12thpast-papers");
    /// assert_eq!(query.subject.as_deref(), Some("chemistry"));
    /// assert_eq!(query.year.as_deref(), Some("2022"));
    /// ```
    pub fn from_descriptor(descriptor: &ResourceDescriptor) -> Self {
        Self {
            collection: descriptor.collection_name.clone(),
            category: descriptor.category,
            subject: descriptor.subject.clone(),
            chapter: descriptor.chapter.clone(),
            year: descriptor.year.clone(),
        }
    }

    /// Field filters that are set, as (document field, value) pairs
    pub fn filters(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("subject", self.subject.as_deref()),
            ("chapter", self.chapter.as_deref()),
            ("year", self.year.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
    }
}

/// Trait for document lookup backends
pub trait DocumentLookup: Send + Sync {
    /// Documents matching `query`; an unknown collection yields no documents
    fn find(&self, query: &ResourceQuery) -> Result<Vec<serde_json::Value>, LookupError>;

    /// Backend name, for logs
    fn name(&self) -> &'static str;
}
