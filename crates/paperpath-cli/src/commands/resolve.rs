use anyhow::{Context, Result};
use colored::Colorize;
use paperpath_router::{Config, MemoryLookup};
use std::fs;
use std::path::Path;

use super::classify::print_descriptor;
use super::segments_from_args;

pub fn execute(config: &Config, input: &[String], documents: &Path) -> Result<()> {
    let content = fs::read_to_string(documents)
        .with_context(|| format!("Failed to read documents file: {:?}", documents))?;
    let lookup = MemoryLookup::from_json_str(&content)
        .with_context(|| format!("Failed to load documents file: {:?}", documents))?;

    let classifier = config.classifier()?;
    let resolution = classifier.resolve(&segments_from_args(input), &lookup)?;

    print_descriptor(&resolution.descriptor);
    println!();

    if resolution.documents.is_empty() {
        println!("{}", "No matching documents".yellow());
    } else {
        println!(
            "{}",
            format!("{} matching document(s)", resolution.documents.len()).green().bold()
        );
        println!("{}", serde_json::to_string_pretty(&resolution.documents)?);
    }

    Ok(())
}
