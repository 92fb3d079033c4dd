//! Display strings for descriptors
//!
//! Page rendering builds titles, descriptions and breadcrumbs from these, so
//! the exact output is part of the public contract.

use crate::descriptor::ResourceDescriptor;
use crate::normalize::split_camel;
use crate::path::{normalize_path, PathHierarchy};
use crate::taxonomy::Category;
use serde::Serialize;
use std::collections::HashSet;

/// Acronyms printed in capitals by default
pub const DEFAULT_ACRONYMS: [&str; 3] = ["mdcat", "ecat", "css"];

/// One breadcrumb: display label and link target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    pub href: String,
}

/// Title-cases segments and composes descriptor display text
///
/// # Examples
///
/// ```
/// use paperpath_router::Formatter;
///
/// let formatter = Formatter::default();
/// assert_eq!(formatter.format_segment("past-papers"), "Past Papers");
/// assert_eq!(formatter.format_segment("oLevel"), "O Level");
/// assert_eq!(formatter.format_segment("mdcat"), "MDCAT");
/// assert_eq!(formatter.format_segment("css-past-papers"), "CSS Past Papers");
/// ```
#[derive(Debug, Clone)]
pub struct Formatter {
    acronyms: HashSet<String>,
}

impl Formatter {
    pub fn new<I, S>(acronyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            acronyms: acronyms
                .into_iter()
                .map(|a| a.as_ref().to_lowercase())
                .collect(),
        }
    }

    fn format_word(&self, word: &str) -> String {
        if self.acronyms.contains(&word.to_lowercase()) {
            return word.to_uppercase();
        }

        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }

    /// Title-cases a raw segment for display
    ///
    /// Words are split on hyphens, underscores, spaces and camelCase
    /// boundaries; known acronyms are printed in capitals.
    pub fn format_segment(&self, segment: &str) -> String {
        if self.acronyms.contains(&segment.to_lowercase()) {
            return segment.to_uppercase();
        }

        segment
            .split(['-', '_', ' '])
            .flat_map(split_camel)
            .filter(|word| !word.is_empty())
            .map(|word| self.format_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn format_optional(&self, value: Option<&str>) -> Option<String> {
        value.map(|v| self.format_segment(v))
    }

    /// Page title, e.g. `9th Physics Notes 2023 - Punjab`
    ///
    /// Falls back to the last segment when nothing was classified.
    pub fn title(&self, descriptor: &ResourceDescriptor) -> String {
        let parts: Vec<String> = [
            descriptor.class_level.as_deref(),
            descriptor.subject.as_deref(),
            descriptor.content_type.as_deref(),
            descriptor.year.as_deref(),
        ]
        .into_iter()
        .filter_map(|part| self.format_optional(part))
        .collect();

        let title = parts.join(" ");
        let title = match self.format_optional(descriptor.province.as_deref()) {
            Some(province) if title.is_empty() => province,
            Some(province) => format!("{} - {}", title, province),
            None => title,
        };

        if title.is_empty() {
            descriptor
                .last_segment()
                .map(|segment| self.format_segment(segment))
                .unwrap_or_default()
        } else {
            title
        }
    }

    /// One-sentence page description
    ///
    /// # Examples
    ///
    /// ```
    /// use paperpath_router::{Formatter, ResourceClassifier};
    ///
    /// let descriptor = ResourceClassifier::default()
    ///     .classify(&["punjab", "9th", "notes"])
    ///     .unwrap();
    /// assert_eq!(
    ///     Formatter::default().description(&descriptor),
    ///     "9th Notes for School students in Punjab."
    /// );
    /// ```
    pub fn description(&self, descriptor: &ResourceDescriptor) -> String {
        let what: Vec<String> = [
            descriptor.class_level.as_deref(),
            descriptor.subject.as_deref(),
            descriptor.content_type.as_deref(),
        ]
        .into_iter()
        .filter_map(|part| self.format_optional(part))
        .collect();

        let mut sentence = if what.is_empty() {
            "Study resources".to_string()
        } else {
            what.join(" ")
        };

        if let Some(chapter) = self.format_optional(descriptor.chapter.as_deref()) {
            sentence.push_str(&format!(", {}", chapter));
        }
        if let Some(year) = descriptor.year.as_deref() {
            sentence.push_str(&format!(" ({})", year));
        }
        if descriptor.category != Category::General {
            sentence.push_str(&format!(" for {} students", descriptor.category.label()));
        }
        if let Some(province) = self.format_optional(descriptor.province.as_deref()) {
            sentence.push_str(&format!(" in {}", province));
        }

        sentence.push('.');
        sentence
    }

    /// Breadcrumbs from `Home` down to the full path
    ///
    /// # Examples
    ///
    /// ```
    /// use paperpath_router::{Formatter, ResourceClassifier};
    ///
    /// let descriptor = ResourceClassifier::default().classify(&["mdcat", "past-papers"]).unwrap();
    /// let crumbs = Formatter::default().breadcrumbs(&descriptor);
    ///
    /// let labels: Vec<&str> = crumbs.iter().map(|c| c.label.as_str()).collect();
    /// assert_eq!(labels, vec!["Home", "MDCAT", "Past Papers"]);
    /// assert_eq!(crumbs[2].href, "/mdcat/past-papers");
    /// ```
    pub fn breadcrumbs(&self, descriptor: &ResourceDescriptor) -> Vec<Breadcrumb> {
        let path = normalize_path(&descriptor.url_path);
        let mut crumbs: Vec<Breadcrumb> = PathHierarchy::new(&path)
            .map(|href| {
                let label = if href == "/" {
                    "Home".to_string()
                } else {
                    let last = href.rsplit('/').next().unwrap_or(href);
                    self.format_segment(last)
                };
                Breadcrumb {
                    label,
                    href: href.to_string(),
                }
            })
            .collect();
        crumbs.reverse();
        crumbs
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_ACRONYMS)
    }
}

/// [`Formatter::format_segment`] with the default acronyms
pub fn format_segment(segment: &str) -> String {
    Formatter::default().format_segment(segment)
}
