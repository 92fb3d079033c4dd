/// Resource classification of catch-all URL segments
///
/// A single left-to-right, greedy scan without backtracking:
/// province → class → content type → tail patterns → category fallback.
/// Each probe looks at the cursor position only and either claims the
/// segment (advancing the cursor) or leaves it for the next probe.

pub mod pattern;

use crate::descriptor::ResourceDescriptor;
use crate::error::{ClassifyError, ResolveError};
use crate::lookup::{DocumentLookup, ResourceQuery};
use crate::normalize::normalize;
use crate::path::split_segments;
use crate::taxonomy::{Category, Taxonomy};
use pattern::{PatternTable, TailField};
use serde::Serialize;
use tracing::{debug, trace};

/// Classifier over an immutable taxonomy and tail pattern table
///
/// Holds no mutable state; share it freely between threads.
///
/// # Examples
///
/// ```
/// use paperpath_router::{Category, ResourceClassifier};
///
/// let classifier = ResourceClassifier::default();
/// let descriptor = classifier.classify(&["punjab", "9th", "notes"]).unwrap();
///
/// assert_eq!(descriptor.province.as_deref(), Some("punjab"));
/// assert_eq!(descriptor.class_level.as_deref(), Some("9th"));
/// assert_eq!(descriptor.content_type.as_deref(), Some("notes"));
/// assert_eq!(descriptor.category, Category::School);
/// assert_eq!(descriptor.collection_name, "punjab9thnotes");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResourceClassifier {
    taxonomy: Taxonomy,
    patterns: PatternTable,
}

/// Descriptor plus the documents a lookup backend returned for it
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub descriptor: ResourceDescriptor,
    pub query: ResourceQuery,
    pub documents: Vec<serde_json::Value>,
}

impl ResourceClassifier {
    /// Classifier over `taxonomy` with the built-in tail patterns
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self {
            taxonomy,
            patterns: PatternTable::builtin(),
        }
    }

    /// Replaces the tail pattern table
    pub fn with_patterns(mut self, patterns: PatternTable) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    /// Classifies an ordered sequence of URL-decoded segments
    ///
    /// Returns [`ClassifyError::EmptyInput`] for an empty sequence. Any other
    /// input yields a descriptor; segments nothing claims end up in
    /// `additional_info`.
    pub fn classify<S: AsRef<str>>(&self, segments: &[S]) -> Result<ResourceDescriptor, ClassifyError> {
        if segments.is_empty() {
            return Err(ClassifyError::EmptyInput);
        }

        let segments: Vec<String> = segments.iter().map(|s| s.as_ref().to_string()).collect();
        let mut cursor = 0;

        let mut province: Option<String> = None;
        let mut class_level: Option<String> = None;
        let mut content_type: Option<String> = None;
        let mut category: Option<Category> = None;

        // Province: first position only
        if self.taxonomy.is_province(&normalize(&segments[0])) {
            debug!("province matched: {}", segments[0]);
            province = Some(segments[0].clone());
            cursor += 1;
        }

        // Class level, which also decides the category
        let class_probe = segments.get(cursor).map(|segment| (segment, normalize(segment)));
        match class_probe {
            Some((segment, key)) => {
                if let Some(owner) = self.taxonomy.category_for_class(&key) {
                    debug!("class matched: {} ({})", segment, owner);
                    class_level = Some(segment.clone());
                    category = Some(owner);
                    cursor += 1;
                } else if province.is_some() {
                    category = Some(Category::General);
                } else if self.taxonomy.is_content_type(Some(Category::General), &key) {
                    debug!("general content type matched: {}", segment);
                    content_type = Some(segment.clone());
                    category = Some(Category::General);
                    cursor += 1;
                }
            }
            None if province.is_some() => category = Some(Category::General),
            None => {}
        }

        // Content type, scoped to the category when one is known
        if content_type.is_none() {
            if let Some(segment) = segments.get(cursor) {
                if self.taxonomy.is_content_type(category, &normalize(segment)) {
                    debug!("content type matched: {}", segment);
                    content_type = Some(segment.clone());
                    cursor += 1;
                }
            }
        }

        // Tail patterns
        let mut subject: Option<String> = None;
        let mut chapter: Option<String> = None;
        let mut year: Option<String> = None;
        let mut additional_info = Vec::new();

        for segment in &segments[cursor..] {
            let hit = self.patterns.match_segment(segment, |field| match field {
                TailField::Subject => subject.is_some(),
                TailField::Chapter => chapter.is_some(),
                TailField::Year => year.is_some(),
            });

            match hit {
                Some((field, value)) => {
                    trace!("tail segment {} -> {}", segment, field);
                    match field {
                        TailField::Subject => subject = Some(value),
                        TailField::Chapter => chapter = Some(value),
                        TailField::Year => year = Some(value),
                    }
                }
                None => {
                    trace!("tail segment {} -> additional info", segment);
                    additional_info.push(segment.clone());
                }
            }
        }

        let category = category
            .or_else(|| {
                class_level
                    .as_deref()
                    .and_then(|class| self.taxonomy.category_for_class(&normalize(class)))
            })
            .unwrap_or(Category::General);

        if let (Some(province), Some(class)) = (&province, &class_level) {
            if !self.taxonomy.province_applies(category, class, province) {
                debug!("province {} is not offered for {} ({})", province, class, category);
            }
        }

        let collection_name = ResourceDescriptor::collection_key(
            province.as_deref(),
            class_level.as_deref(),
            content_type.as_deref(),
        );
        let url_path = ResourceDescriptor::url_path_for(&segments);

        Ok(ResourceDescriptor {
            province,
            class_level,
            content_type,
            category,
            subject,
            chapter,
            year,
            additional_info,
            collection_name,
            segments,
            url_path,
        })
    }

    /// Splits a raw request path into segments and classifies them
    ///
    /// # Examples
    ///
    /// ```
    /// use paperpath_router::{Category, ResourceClassifier};
    ///
    /// let classifier = ResourceClassifier::default();
    /// let descriptor = classifier.classify_path("/o-level/past-papers/").unwrap();
    ///
    /// assert_eq!(descriptor.category, Category::Cambridge);
    /// assert_eq!(descriptor.url_path, "/o-level/past-papers");
    /// assert!(classifier.classify_path("/").is_err());
    /// ```
    pub fn classify_path(&self, path: &str) -> Result<ResourceDescriptor, ClassifyError> {
        self.classify(&split_segments(path))
    }

    /// Classifies `segments` and fetches matching documents from `lookup`
    pub fn resolve<S: AsRef<str>>(
        &self,
        segments: &[S],
        lookup: &dyn DocumentLookup,
    ) -> Result<Resolution, ResolveError> {
        let descriptor = self.classify(segments)?;
        let query = ResourceQuery::from_descriptor(&descriptor);
        let documents = lookup.find(&query)?;

        debug!(
            "{} returned {} document(s) for {}",
            lookup.name(),
            documents.len(),
            descriptor.url_path
        );

        Ok(Resolution {
            descriptor,
            query,
            documents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::CategoryTable;

    fn classify(segments: &[&str]) -> ResourceDescriptor {
        ResourceClassifier::default().classify(segments).unwrap()
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let result = ResourceClassifier::default().classify::<&str>(&[]);
        assert_eq!(result, Err(ClassifyError::EmptyInput));
        assert_eq!(ClassifyError::EmptyInput.to_string(), "No segments provided");
    }

    #[test]
    fn test_province_alone_defaults_to_general() {
        let d = classify(&["Sindh"]);
        assert_eq!(d.province.as_deref(), Some("Sindh"));
        assert_eq!(d.category, Category::General);
        assert_eq!(d.collection_name, "Sindh");
        assert!(d.additional_info.is_empty());
    }

    #[test]
    fn test_province_then_general_content_type() {
        let d = classify(&["punjab", "scholarships"]);
        assert_eq!(d.category, Category::General);
        assert_eq!(d.class_level, None);
        assert_eq!(d.content_type.as_deref(), Some("scholarships"));
        assert_eq!(d.collection_name, "punjabscholarships");
    }

    #[test]
    fn test_general_content_type_first() {
        let d = classify(&["Date-Sheets", "2024"]);
        assert_eq!(d.content_type.as_deref(), Some("Date-Sheets"));
        assert_eq!(d.category, Category::General);
        assert_eq!(d.year.as_deref(), Some("2024"));
    }

    #[test]
    fn test_union_content_type_without_category() {
        // Not a General content type, but known to Cambridge
        let d = classify(&["mark-schemes", "chapter-2"]);
        assert_eq!(d.content_type.as_deref(), Some("mark-schemes"));
        assert_eq!(d.category, Category::General);
        assert_eq!(d.chapter.as_deref(), Some("chapter-2"));
    }

    #[test]
    fn test_content_type_scoped_to_category() {
        // mark-schemes belongs to Cambridge, not School
        let d = classify(&["9th", "mark-schemes"]);
        assert_eq!(d.category, Category::School);
        assert_eq!(d.content_type, None);
        assert_eq!(d.additional_info, vec!["mark-schemes"]);
    }

    #[test]
    fn test_stored_values_are_raw() {
        let d = classify(&["PUNJAB", "Class-10", "Past-Papers"]);
        assert_eq!(d.province.as_deref(), Some("PUNJAB"));
        assert_eq!(d.class_level.as_deref(), Some("Class-10"));
        assert_eq!(d.content_type.as_deref(), Some("Past-Papers"));
        assert_eq!(d.collection_name, "PUNJABClass-10Past-Papers");
    }

    #[test]
    fn test_province_later_in_sequence_is_not_a_province() {
        let d = classify(&["9th", "punjab"]);
        assert_eq!(d.province, None);
        assert_eq!(d.additional_info, vec!["punjab"]);
    }

    #[test]
    fn test_second_subject_falls_through() {
        let d = classify(&["10th", "physics", "chemistry"]);
        assert_eq!(d.subject.as_deref(), Some("physics"));
        assert_eq!(d.additional_info, vec!["chemistry"]);
    }

    #[test]
    fn test_second_year_falls_through() {
        let d = classify(&["css", "2020", "2021"]);
        assert_eq!(d.year.as_deref(), Some("2020"));
        assert_eq!(d.additional_info, vec!["2021"]);
    }

    #[test]
    fn test_custom_taxonomy_is_independent() {
        let taxonomy = Taxonomy::new([(
            Category::University,
            CategoryTable::new()
                .with_classes(["bscs"])
                .with_content_types(["lab-manuals"]),
        )]);
        let classifier = ResourceClassifier::new(taxonomy);

        let d = classifier.classify(&["bscs", "lab-manuals", "punjab"]).unwrap();
        assert_eq!(d.class_level.as_deref(), Some("bscs"));
        assert_eq!(d.category, Category::University);
        assert_eq!(d.content_type.as_deref(), Some("lab-manuals"));
        assert_eq!(d.additional_info, vec!["punjab"]);

        // No provinces configured here
        let d = classifier.classify(&["punjab"]).unwrap();
        assert_eq!(d.province, None);
        assert_eq!(d.category, Category::General);
        assert_eq!(d.additional_info, vec!["punjab"]);

        // The built-in classifier is unaffected
        assert_eq!(classify(&["punjab"]).province.as_deref(), Some("punjab"));
    }

    #[test]
    fn test_empty_pattern_table() {
        let classifier = ResourceClassifier::default().with_patterns(PatternTable::empty());
        let d = classifier.classify(&["mdcat", "physics", "2023"]).unwrap();
        assert_eq!(d.subject, None);
        assert_eq!(d.year, None);
        assert_eq!(d.additional_info, vec!["physics", "2023"]);
    }
}
