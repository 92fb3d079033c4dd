/// Declarative patterns for the tail of a segment sequence
///
/// Once the taxonomy probes are done, every remaining segment is offered to a
/// [`PatternTable`] in order. The first pattern whose field is still free and
/// whose regex matches claims the segment.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Subjects recognized by the built-in table
pub const DEFAULT_SUBJECTS: [&str; 7] = [
    "physics",
    "chemistry",
    "biology",
    "mathematics",
    "english",
    "urdu",
    "islamiat",
];

// Subject prefix, optionally followed by a hyphen: `physics`, `Physics-notes`
static SUBJECT_REGEX: Lazy<Regex> = Lazy::new(|| subject_regex(&DEFAULT_SUBJECTS).unwrap());

// `chapter-5`, `Chapter-12`
static CHAPTER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^chapter-\d+$").unwrap());

// Bare `2023`, leading `2023-annual` or `2023annual`, trailing `annual-2021`
static YEAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})$|^(20\d{2})[-_ ]?|[-_ ](\d{4})$").unwrap());

fn subject_regex<S: AsRef<str>>(subjects: &[S]) -> Result<Regex, regex::Error> {
    let alternatives = subjects
        .iter()
        .map(|s| regex::escape(s.as_ref()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)^(?:{})-?", alternatives))
}

/// Descriptor field a tail pattern fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TailField {
    Subject,
    Chapter,
    Year,
}

impl fmt::Display for TailField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TailField::Subject => write!(f, "subject"),
            TailField::Chapter => write!(f, "chapter"),
            TailField::Year => write!(f, "year"),
        }
    }
}

/// One row of the pattern table: regex → field
///
/// The stored value is the first participating capture group, or the whole
/// raw segment when the regex has no groups.
///
/// # Examples
///
/// ```
/// use paperpath_router::classify::pattern::{SegmentPattern, TailField};
/// use regex::Regex;
///
/// let term = SegmentPattern::new(TailField::Year, Regex::new(r"^term-(\d{4})$").unwrap());
/// assert_eq!(term.extract("term-2021"), Some("2021".to_string()));
/// assert_eq!(term.extract("term-one"), None);
/// ```
#[derive(Debug, Clone)]
pub struct SegmentPattern {
    field: TailField,
    regex: Regex,
}

impl SegmentPattern {
    pub fn new(field: TailField, regex: Regex) -> Self {
        Self { field, regex }
    }

    pub fn field(&self) -> TailField {
        self.field
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Value this pattern would store for `segment`, if it matches
    pub fn extract(&self, segment: &str) -> Option<String> {
        let captures = self.regex.captures(segment)?;
        let value = captures
            .iter()
            .skip(1)
            .flatten()
            .next()
            .map(|group| group.as_str())
            .unwrap_or(segment);
        Some(value.to_string())
    }
}

/// Ordered tail patterns
///
/// Built-in order is subject → chapter → year.
#[derive(Debug, Clone)]
pub struct PatternTable {
    patterns: Vec<SegmentPattern>,
}

impl PatternTable {
    /// Table with no patterns; every tail segment becomes additional info
    pub fn empty() -> Self {
        Self { patterns: Vec::new() }
    }

    /// Subject, chapter and year patterns
    pub fn builtin() -> Self {
        Self {
            patterns: vec![
                SegmentPattern::new(TailField::Subject, SUBJECT_REGEX.clone()),
                SegmentPattern::new(TailField::Chapter, CHAPTER_REGEX.clone()),
                SegmentPattern::new(TailField::Year, YEAR_REGEX.clone()),
            ],
        }
    }

    /// Built-in table with the subject list replaced
    ///
    /// An empty list removes subject detection.
    ///
    /// # Examples
    ///
    /// ```
    /// use paperpath_router::classify::pattern::{PatternTable, TailField};
    ///
    /// let table = PatternTable::with_subjects(&["computer", "statistics"]).unwrap();
    /// let hit = table.match_segment("Computer-Science", |_| false);
    /// assert_eq!(hit, Some((TailField::Subject, "Computer-Science".to_string())));
    /// assert_eq!(table.match_segment("physics", |_| false), None);
    /// ```
    pub fn with_subjects<S: AsRef<str>>(subjects: &[S]) -> Result<Self, regex::Error> {
        let mut patterns = Vec::with_capacity(3);
        if !subjects.is_empty() {
            patterns.push(SegmentPattern::new(TailField::Subject, subject_regex(subjects)?));
        }
        patterns.push(SegmentPattern::new(TailField::Chapter, CHAPTER_REGEX.clone()));
        patterns.push(SegmentPattern::new(TailField::Year, YEAR_REGEX.clone()));
        Ok(Self { patterns })
    }

    /// Appends a pattern after the existing ones
    pub fn with_pattern(mut self, pattern: SegmentPattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    pub fn patterns(&self) -> &[SegmentPattern] {
        &self.patterns
    }

    /// First pattern that matches `segment` and whose field is not occupied
    ///
    /// `occupied` reports fields that are already set on the descriptor.
    pub fn match_segment<F>(&self, segment: &str, occupied: F) -> Option<(TailField, String)>
    where
        F: Fn(TailField) -> bool,
    {
        self.patterns
            .iter()
            .filter(|pattern| !occupied(pattern.field))
            .find_map(|pattern| pattern.extract(segment).map(|value| (pattern.field, value)))
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn free(_: TailField) -> bool {
        false
    }

    #[rstest]
    #[case("physics")]
    #[case("Physics")]
    #[case("physics-notes")]
    #[case("CHEMISTRY-chapter-1")]
    #[case("islamiat-mcqs")]
    #[case("mathematics")]
    fn test_subject_pattern(#[case] segment: &str) {
        assert_eq!(
            PatternTable::builtin().match_segment(segment, free),
            Some((TailField::Subject, segment.to_string()))
        );
    }

    #[rstest]
    #[case("chapter-5")]
    #[case("Chapter-12")]
    #[case("CHAPTER-1")]
    fn test_chapter_pattern(#[case] segment: &str) {
        assert_eq!(
            PatternTable::builtin().match_segment(segment, free),
            Some((TailField::Chapter, segment.to_string()))
        );
    }

    #[rstest]
    #[case("2023", "2023")]
    #[case("1998", "1998")]
    #[case("2023-annual", "2023")]
    #[case("2019_supply", "2019")]
    #[case("annual-2021", "2021")]
    #[case("2023annual", "2023")]
    #[case("20235", "2023")]
    fn test_year_pattern(#[case] segment: &str, #[case] year: &str) {
        assert_eq!(
            PatternTable::builtin().match_segment(segment, free),
            Some((TailField::Year, year.to_string()))
        );
    }

    #[rstest]
    #[case("chapter-")]
    #[case("chapter-five")]
    #[case("19980")]
    #[case("id-12345")]
    #[case("guide")]
    #[case("")]
    fn test_no_pattern(#[case] segment: &str) {
        assert_eq!(PatternTable::builtin().match_segment(segment, free), None);
    }

    #[test]
    fn test_order_subject_before_year() {
        // A subject segment carrying a year is claimed as the subject
        assert_eq!(
            PatternTable::builtin().match_segment("physics-2023", free),
            Some((TailField::Subject, "physics-2023".to_string()))
        );
    }

    #[test]
    fn test_occupied_field_is_skipped() {
        let table = PatternTable::builtin();
        let subject_taken = |field: TailField| field == TailField::Subject;

        assert_eq!(table.match_segment("chemistry", subject_taken), None);
        assert_eq!(
            table.match_segment("physics-2023", subject_taken),
            Some((TailField::Year, "2023".to_string()))
        );
    }

    #[test]
    fn test_empty_subject_list_disables_subjects() {
        let table = PatternTable::with_subjects::<&str>(&[]).unwrap();
        assert_eq!(table.patterns().len(), 2);
        assert_eq!(table.match_segment("physics", free), None);
    }

    #[test]
    fn test_subjects_are_escaped() {
        let table = PatternTable::with_subjects(&["c++"]).unwrap();
        assert!(table.match_segment("c++-notes", free).is_some());
        assert!(table.match_segment("cc-notes", free).is_none());
    }

    #[test]
    fn test_custom_pattern_appended() {
        let table = PatternTable::empty().with_pattern(SegmentPattern::new(
            TailField::Chapter,
            Regex::new(r"(?i)^unit-\d+$").unwrap(),
        ));
        assert_eq!(
            table.match_segment("Unit-3", free),
            Some((TailField::Chapter, "Unit-3".to_string()))
        );
    }
}
