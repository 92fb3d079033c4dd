//! Category taxonomy used as the matching reference
//!
//! A [`Taxonomy`] is built once and never mutated. Every configured term is
//! stored as written and indexed by its [`normalize`]d key, so lookups take
//! normalized keys only.

use crate::normalize::normalize;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Category
// ============================================================================

/// Top-level grouping that decides which class and content-type lists apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(alias = "school")]
    School,
    #[serde(alias = "college")]
    College,
    #[serde(alias = "cambridge")]
    Cambridge,
    #[serde(alias = "entry_test")]
    EntryTest,
    #[serde(alias = "university")]
    University,
    #[serde(alias = "competition_exam")]
    CompetitionExam,
    #[serde(alias = "general")]
    General,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 7] = [
        Category::School,
        Category::College,
        Category::Cambridge,
        Category::EntryTest,
        Category::University,
        Category::CompetitionExam,
        Category::General,
    ];

    /// Order in which class lists are probed; the first list containing a
    /// class wins it.
    pub const CLASS_PRIORITY: [Category; 6] = [
        Category::School,
        Category::College,
        Category::Cambridge,
        Category::CompetitionExam,
        Category::EntryTest,
        Category::University,
    ];

    /// Identifier used in descriptors and configuration keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::School => "School",
            Category::College => "College",
            Category::Cambridge => "Cambridge",
            Category::EntryTest => "EntryTest",
            Category::University => "University",
            Category::CompetitionExam => "CompetitionExam",
            Category::General => "General",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Category::EntryTest => "Entry Test",
            Category::CompetitionExam => "Competition Exam",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts `EntryTest`, `entry_test`, `entry-test` and any casing of those
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(&s.replace('_', "-"));
        Category::ALL
            .into_iter()
            .find(|category| normalize(category.as_str()) == key)
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

// ============================================================================
// Term sets
// ============================================================================

/// Set of taxonomy terms, kept as written and indexed by normalized key
#[derive(Debug, Clone, Default)]
pub struct TermSet {
    terms: Vec<String>,
    keys: HashSet<String>,
}

impl TermSet {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        set.extend(terms);
        set
    }

    fn extend<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for term in terms {
            let term = term.into();
            if self.keys.insert(normalize(&term)) {
                self.terms.push(term);
            }
        }
    }

    /// Membership test by normalized key
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Terms as configured, in insertion order, without normalized duplicates
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

impl PartialEq for TermSet {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

// ============================================================================
// Category table
// ============================================================================

/// Provinces, classes and content types of one category
///
/// # Examples
///
/// ```
/// use paperpath_router::CategoryTable;
///
/// let table = CategoryTable::new()
///     .with_classes(["mdcat", "ecat"])
///     .with_content_types(["past-papers"])
///     .with_provinces_for("mdcat", ["punjab", "sindh"]);
///
/// assert!(table.classes().contains("mdcat"));
/// assert!(table.content_types().contains("pastPapers"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTable {
    provinces: TermSet,
    classes: TermSet,
    content_types: TermSet,
    /// Normalized class key → (class as written, applicable provinces)
    provinces_for: BTreeMap<String, (String, TermSet)>,
}

impl CategoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provinces<I, S>(mut self, provinces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.provinces.extend(provinces);
        self
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes);
        self
    }

    pub fn with_content_types<I, S>(mut self, content_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content_types.extend(content_types);
        self
    }

    /// Restricts a class to province-specific variants
    pub fn with_provinces_for<I, S>(mut self, class: impl Into<String>, provinces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let class = class.into();
        self.provinces_for
            .insert(normalize(&class), (class, TermSet::new(provinces)));
        self
    }

    pub fn provinces(&self) -> &TermSet {
        &self.provinces
    }

    pub fn classes(&self) -> &TermSet {
        &self.classes
    }

    pub fn content_types(&self) -> &TermSet {
        &self.content_types
    }

    /// Class-specific province lists, keyed by the class as written
    pub fn provinces_for(&self) -> impl Iterator<Item = (&str, &TermSet)> {
        self.provinces_for
            .values()
            .map(|(class, provinces)| (class.as_str(), provinces))
    }

    fn provinces_for_key(&self, class_key: &str) -> Option<&TermSet> {
        self.provinces_for.get(class_key).map(|(_, provinces)| provinces)
    }
}

// ============================================================================
// Taxonomy
// ============================================================================

/// The full category hierarchy plus the lookup indexes the classifier needs
///
/// # Examples
///
/// ```
/// use paperpath_router::{Category, Taxonomy};
///
/// let taxonomy = Taxonomy::default();
/// assert_eq!(taxonomy.category_for_class("9th"), Some(Category::School));
/// assert_eq!(taxonomy.category_for_class("oLevel"), Some(Category::Cambridge));
/// assert!(taxonomy.is_province("punjab"));
/// ```
#[derive(Debug, Clone)]
pub struct Taxonomy {
    tables: BTreeMap<Category, CategoryTable>,
    /// The single classLevel → category lookup, filled in `CLASS_PRIORITY` order
    class_index: HashMap<String, Category>,
    provinces: TermSet,
    all_content_types: TermSet,
    empty: CategoryTable,
}

impl Taxonomy {
    /// Builds a taxonomy from per-category tables
    ///
    /// Categories that are not given get an empty table.
    pub fn new<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = (Category, CategoryTable)>,
    {
        let tables: BTreeMap<Category, CategoryTable> = tables.into_iter().collect();

        let mut class_index = HashMap::new();
        for category in Category::CLASS_PRIORITY {
            if let Some(table) = tables.get(&category) {
                for class in table.classes.terms() {
                    class_index.entry(normalize(class)).or_insert(category);
                }
            }
        }

        let mut provinces = TermSet::default();
        let mut all_content_types = TermSet::default();
        for table in tables.values() {
            provinces.extend(table.provinces.terms().iter().cloned());
            all_content_types.extend(table.content_types.terms().iter().cloned());
        }

        Self {
            tables,
            class_index,
            provinces,
            all_content_types,
            empty: CategoryTable::default(),
        }
    }

    /// Built-in taxonomy of Pakistani study resources
    pub fn builtin() -> Self {
        let provinces = [
            "punjab",
            "sindh",
            "kpk",
            "balochistan",
            "federal",
            "azad-kashmir",
            "gilgit-baltistan",
        ];
        let board_content = [
            "notes",
            "past-papers",
            "textbooks",
            "guess-papers",
            "pairing-schemes",
            "date-sheets",
            "results",
            "syllabus",
            "mcqs",
            "model-papers",
        ];
        let exam_content = [
            "notes",
            "past-papers",
            "mcqs",
            "syllabus",
            "books",
            "mock-tests",
            "results",
        ];

        Self::new([
            (
                Category::School,
                CategoryTable::new()
                    .with_provinces(provinces)
                    .with_classes(["9th", "10th", "class-9", "class-10", "matric"])
                    .with_content_types(board_content),
            ),
            (
                Category::College,
                CategoryTable::new()
                    .with_provinces(provinces)
                    .with_classes(["11th", "12th", "1st-year", "2nd-year", "fsc", "ics", "icom", "fa"])
                    .with_content_types(board_content),
            ),
            (
                Category::Cambridge,
                CategoryTable::new()
                    .with_classes(["o-level", "a-level", "olevel", "alevel", "igcse"])
                    .with_content_types([
                        "notes",
                        "past-papers",
                        "topical-past-papers",
                        "mark-schemes",
                        "examiner-reports",
                        "syllabus",
                        "textbooks",
                    ]),
            ),
            (
                Category::CompetitionExam,
                CategoryTable::new()
                    .with_classes(["css", "pms", "ppsc", "fpsc", "spsc", "kppsc", "bpsc"])
                    .with_content_types(exam_content)
                    .with_provinces_for("pms", ["punjab", "sindh", "kpk", "balochistan"]),
            ),
            (
                Category::EntryTest,
                CategoryTable::new()
                    .with_classes(["mdcat", "ecat", "nts", "net", "nat", "gat"])
                    .with_content_types(exam_content)
                    .with_provinces_for("mdcat", ["punjab", "sindh", "kpk", "balochistan", "federal"])
                    .with_provinces_for("ecat", ["punjab"]),
            ),
            (
                Category::University,
                CategoryTable::new()
                    .with_classes(["bs", "adp", "ms", "mphil", "phd", "bsc", "msc", "ba", "ma"])
                    .with_content_types(["notes", "past-papers", "books", "outlines", "assignments"]),
            ),
            (
                Category::General,
                CategoryTable::new().with_content_types([
                    "notes",
                    "past-papers",
                    "textbooks",
                    "books",
                    "syllabus",
                    "mcqs",
                    "results",
                    "date-sheets",
                    "scholarships",
                    "admissions",
                ]),
            ),
        ])
    }

    /// Table for a category (empty when the category is not configured)
    pub fn table(&self, category: Category) -> &CategoryTable {
        self.tables.get(&category).unwrap_or(&self.empty)
    }

    /// Configured categories with their tables
    pub fn tables(&self) -> impl Iterator<Item = (Category, &CategoryTable)> {
        self.tables.iter().map(|(category, table)| (*category, table))
    }

    /// Whether a normalized key names a province of any category
    pub fn is_province(&self, key: &str) -> bool {
        self.provinces.contains(key)
    }

    /// Category owning a normalized class key, first in `CLASS_PRIORITY` order
    pub fn category_for_class(&self, key: &str) -> Option<Category> {
        self.class_index.get(key).copied()
    }

    /// Whether a normalized key is a content type of `category`, or of any
    /// category when `None`
    pub fn is_content_type(&self, category: Option<Category>, key: &str) -> bool {
        match category {
            Some(category) => self.table(category).content_types.contains(key),
            None => self.all_content_types.contains(key),
        }
    }

    /// Provinces in which a class is offered
    ///
    /// Uses the class's `provinces_for` entry when present, else the
    /// category's own province list (which may be empty).
    pub fn provinces_for(&self, category: Category, class_level: &str) -> &TermSet {
        let table = self.table(category);
        table
            .provinces_for_key(&normalize(class_level))
            .unwrap_or(&table.provinces)
    }

    /// Whether `province` is offered for `class_level` of `category`
    ///
    /// A class with no province restriction accepts every province.
    pub fn province_applies(&self, category: Category, class_level: &str, province: &str) -> bool {
        let provinces = self.provinces_for(category, class_level);
        provinces.is_empty() || provinces.contains(&normalize(province))
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PartialEq for Taxonomy {
    fn eq(&self, other: &Self) -> bool {
        self.tables == other.tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("9th", Category::School)]
    #[case("class10", Category::School)]
    #[case("1stYear", Category::College)]
    #[case("oLevel", Category::Cambridge)]
    #[case("olevel", Category::Cambridge)]
    #[case("css", Category::CompetitionExam)]
    #[case("mdcat", Category::EntryTest)]
    #[case("phd", Category::University)]
    fn test_builtin_class_index(#[case] key: &str, #[case] expected: Category) {
        assert_eq!(Taxonomy::builtin().category_for_class(key), Some(expected));
    }

    #[test]
    fn test_class_priority_wins_ties() {
        let taxonomy = Taxonomy::new([
            (Category::University, CategoryTable::new().with_classes(["bs"])),
            (Category::College, CategoryTable::new().with_classes(["bs"])),
        ]);
        assert_eq!(taxonomy.category_for_class("bs"), Some(Category::College));
    }

    #[test]
    fn test_content_types_scoped_and_union() {
        let taxonomy = Taxonomy::builtin();
        assert!(taxonomy.is_content_type(Some(Category::Cambridge), "markSchemes"));
        assert!(!taxonomy.is_content_type(Some(Category::School), "markSchemes"));
        assert!(taxonomy.is_content_type(None, "markSchemes"));
        assert!(!taxonomy.is_content_type(None, "physicsNotes"));
    }

    #[test]
    fn test_provinces_for_class() {
        let taxonomy = Taxonomy::builtin();
        assert!(taxonomy.province_applies(Category::EntryTest, "MDCAT", "Sindh"));
        assert!(!taxonomy.province_applies(Category::EntryTest, "ecat", "sindh"));
        // CSS is a federal exam with no province variants
        assert!(taxonomy.provinces_for(Category::CompetitionExam, "css").is_empty());
        assert!(taxonomy.province_applies(Category::CompetitionExam, "css", "punjab"));
        assert!(taxonomy.province_applies(Category::School, "9th", "azad-kashmir"));
    }

    #[test]
    fn test_term_set_dedupes_by_key() {
        let set = TermSet::new(["past-papers", "pastPapers", "PAST-PAPERS"]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.terms(), &["past-papers".to_string()]);
    }

    #[rstest]
    #[case("EntryTest", Category::EntryTest)]
    #[case("entry_test", Category::EntryTest)]
    #[case("entry-test", Category::EntryTest)]
    #[case("school", Category::School)]
    #[case("COMPETITION_EXAM", Category::CompetitionExam)]
    fn test_category_from_str(#[case] raw: &str, #[case] expected: Category) {
        assert_eq!(raw.parse::<Category>(), Ok(expected));
    }

    #[test]
    fn test_category_from_str_unknown() {
        assert!("kindergarten".parse::<Category>().is_err());
    }
}
