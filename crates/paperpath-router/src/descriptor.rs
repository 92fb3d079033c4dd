//! Structured result of classifying a segment sequence

use crate::taxonomy::Category;
use serde::{Deserialize, Serialize};

/// What a catch-all URL points at
///
/// Every optional field holds the raw segment text it was taken from, never
/// the normalized comparison key. `year` is the only exception: it holds the
/// four digits extracted from its segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub province: Option<String>,
    pub class_level: Option<String>,
    pub content_type: Option<String>,
    /// Always set; `General` when nothing more specific matched
    pub category: Category,
    pub subject: Option<String>,
    pub chapter: Option<String>,
    pub year: Option<String>,
    /// Unclaimed segments, in input order
    pub additional_info: Vec<String>,
    /// province + classLevel + contentType, raw and unseparated
    pub collection_name: String,
    /// The input, unmodified
    pub segments: Vec<String>,
    /// `/` followed by the segments joined with `/`
    pub url_path: String,
}

impl ResourceDescriptor {
    /// Storage key built from whichever of province, class level and
    /// content type are set
    ///
    /// # Examples
    ///
    /// ```
    /// use paperpath_router::ResourceDescriptor;
    ///
    /// let key = ResourceDescriptor::collection_key(Some("punjab"), Some("9th"), None);
    /// assert_eq!(key, "punjab9th");
    /// ```
    pub fn collection_key(
        province: Option<&str>,
        class_level: Option<&str>,
        content_type: Option<&str>,
    ) -> String {
        [province, class_level, content_type]
            .into_iter()
            .flatten()
            .collect()
    }

    /// `/` + segments joined by `/`
    pub fn url_path_for<S: AsRef<str>>(segments: &[S]) -> String {
        let joined = segments
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join("/");
        format!("/{}", joined)
    }

    /// The last input segment, if any
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}
