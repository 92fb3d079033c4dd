// File: src/config.rs
// Purpose: Configuration parsing from paperpath.toml

use crate::classify::pattern::PatternTable;
use crate::classify::ResourceClassifier;
use crate::format::{Formatter, DEFAULT_ACRONYMS};
use crate::taxonomy::{Category, CategoryTable, Taxonomy};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "paperpath.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Replaces the built-in taxonomy when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<TaxonomyConfig>,

    #[serde(default)]
    pub patterns: PatternConfig,

    #[serde(default)]
    pub formatter: FormatterConfig,
}

/// Category tables keyed by category name (`School`, `entry_test`, ...)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct TaxonomyConfig {
    pub categories: BTreeMap<String, CategoryConfig>,
}

/// One category's lists
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CategoryConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provinces: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    #[serde(default)]
    pub content_types: Vec<String>,

    /// Class name → provinces that offer it
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub provinces_for: BTreeMap<String, Vec<String>>,
}

/// Tail pattern configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PatternConfig {
    /// Replaces the built-in subject list when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatterConfig {
    #[serde(default = "default_acronyms")]
    pub acronyms: Vec<String>,
}

fn default_acronyms() -> Vec<String> {
    DEFAULT_ACRONYMS.iter().map(|a| a.to_string()).collect()
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            acronyms: default_acronyms(),
        }
    }
}

impl TaxonomyConfig {
    /// Builds the taxonomy, rejecting unknown category names
    pub fn to_taxonomy(&self) -> Result<Taxonomy> {
        let mut tables = Vec::with_capacity(self.categories.len());

        for (name, config) in &self.categories {
            let category: Category = name
                .parse()
                .map_err(|e: String| anyhow!(e))
                .with_context(|| format!("Invalid [taxonomy.{}] section", name))?;

            let table = config.provinces_for.iter().fold(
                CategoryTable::new()
                    .with_provinces(&config.provinces)
                    .with_classes(&config.classes)
                    .with_content_types(&config.content_types),
                |table, (class, provinces)| table.with_provinces_for(class, provinces),
            );
            tables.push((category, table));
        }

        Ok(Taxonomy::new(tables))
    }

    /// Configuration equivalent of an existing taxonomy
    pub fn from_taxonomy(taxonomy: &Taxonomy) -> Self {
        let categories = taxonomy
            .tables()
            .map(|(category, table)| {
                let config = CategoryConfig {
                    provinces: table.provinces().terms().to_vec(),
                    classes: table.classes().terms().to_vec(),
                    content_types: table.content_types().terms().to_vec(),
                    provinces_for: table
                        .provinces_for()
                        .map(|(class, provinces)| (class.to_string(), provinces.terms().to_vec()))
                        .collect(),
                };
                (category.as_str().to_string(), config)
            })
            .collect();

        Self { categories }
    }
}

impl PatternConfig {
    pub fn to_pattern_table(&self) -> Result<PatternTable> {
        match &self.subjects {
            Some(subjects) => PatternTable::with_subjects(subjects.as_slice()).context("Invalid [patterns] subjects"),
            None => Ok(PatternTable::builtin()),
        }
    }
}

impl FormatterConfig {
    pub fn to_formatter(&self) -> Formatter {
        Formatter::new(&self.acronyms)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./paperpath.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Effective taxonomy: configured, or built-in
    pub fn taxonomy(&self) -> Result<Taxonomy> {
        match &self.taxonomy {
            Some(taxonomy) => taxonomy.to_taxonomy(),
            None => Ok(Taxonomy::builtin()),
        }
    }

    /// Classifier built from this configuration
    pub fn classifier(&self) -> Result<ResourceClassifier> {
        Ok(ResourceClassifier::new(self.taxonomy()?).with_patterns(self.patterns.to_pattern_table()?))
    }

    pub fn formatter(&self) -> Formatter {
        self.formatter.to_formatter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.taxonomy.is_none());
        assert!(config.patterns.subjects.is_none());
        assert_eq!(config.formatter.acronyms, vec!["mdcat", "ecat", "css"]);
        assert_eq!(config.taxonomy().unwrap(), Taxonomy::builtin());
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert!(config.taxonomy.is_none());
        assert_eq!(config.formatter.acronyms.len(), 3);
    }

    #[test]
    fn test_custom_taxonomy() {
        let toml = r#"
            [taxonomy.school]
            provinces = ["punjab"]
            classes = ["8th"]
            content_types = ["notes"]

            [taxonomy.entry_test]
            classes = ["mdcat"]
            content_types = ["past-papers"]

            [taxonomy.entry_test.provinces_for]
            mdcat = ["punjab"]
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        let taxonomy = config.taxonomy().unwrap();

        assert_eq!(taxonomy.category_for_class("8th"), Some(Category::School));
        assert_eq!(taxonomy.category_for_class("9th"), None);
        assert!(taxonomy.is_content_type(Some(Category::EntryTest), "pastPapers"));
        assert!(!taxonomy.province_applies(Category::EntryTest, "mdcat", "sindh"));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let config: Config = toml::from_str("[taxonomy.kindergarten]\ncontent_types = []").unwrap();
        let err = config.taxonomy().unwrap_err();
        assert!(format!("{:#}", err).contains("kindergarten"));
    }

    #[test]
    fn test_custom_subjects_and_acronyms() {
        let toml = r#"
            [patterns]
            subjects = ["computer"]

            [formatter]
            acronyms = ["fsc"]
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        let classifier = config.classifier().unwrap();

        let d = classifier.classify(&["11th", "computer-science", "physics"]).unwrap();
        assert_eq!(d.subject.as_deref(), Some("computer-science"));
        assert_eq!(d.additional_info, vec!["physics"]);
        assert_eq!(config.formatter().format_segment("fsc"), "FSC");
    }

    #[test]
    fn test_builtin_taxonomy_dump_reloads() {
        let dumped = TaxonomyConfig::from_taxonomy(&Taxonomy::builtin());
        let config = Config {
            taxonomy: Some(dumped),
            ..Config::default()
        };

        let text = toml::to_string(&config).unwrap();
        let reloaded: Config = toml::from_str(&text).unwrap();
        assert_eq!(reloaded.taxonomy().unwrap(), Taxonomy::builtin());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("paperpath.toml")).unwrap();
        assert!(config.taxonomy.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[formatter]\nacronyms = [\"nts\"]").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.formatter.acronyms, vec!["nts"]);
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[formatter\nacronyms = 1").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
