use anyhow::Result;
use colored::Colorize;
use paperpath_router::{Config, ResourceDescriptor};

use super::segments_from_args;

pub fn execute(config: &Config, input: &[String], json: bool) -> Result<()> {
    let classifier = config.classifier()?;
    let descriptor = classifier.classify(&segments_from_args(input))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
    } else {
        print_descriptor(&descriptor);
    }

    Ok(())
}

fn print_field(name: &str, value: Option<&str>) {
    match value {
        Some(value) => println!("  {:<16}{}", name, value.cyan()),
        None => println!("  {:<16}{}", name, "-".dimmed()),
    }
}

pub fn print_descriptor(descriptor: &ResourceDescriptor) {
    println!("{}", descriptor.url_path.green().bold());
    println!();
    println!("  {:<16}{}", "category", descriptor.category.to_string().cyan().bold());
    print_field("province", descriptor.province.as_deref());
    print_field("class level", descriptor.class_level.as_deref());
    print_field("content type", descriptor.content_type.as_deref());
    print_field("subject", descriptor.subject.as_deref());
    print_field("chapter", descriptor.chapter.as_deref());
    print_field("year", descriptor.year.as_deref());

    let collection = (!descriptor.collection_name.is_empty()).then_some(descriptor.collection_name.as_str());
    print_field("collection", collection);

    if !descriptor.additional_info.is_empty() {
        println!("  {:<16}{}", "additional", descriptor.additional_info.join(", ").yellow());
    }
}
