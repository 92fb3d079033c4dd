use anyhow::Result;
use colored::Colorize;
use paperpath_router::Config;

use super::segments_from_args;

pub fn execute(config: &Config, input: &[String]) -> Result<()> {
    let classifier = config.classifier()?;
    let formatter = config.formatter();
    let descriptor = classifier.classify(&segments_from_args(input))?;

    println!("{}", formatter.title(&descriptor).green().bold());
    println!("{}", formatter.description(&descriptor));
    println!();

    let crumbs = formatter
        .breadcrumbs(&descriptor)
        .into_iter()
        .map(|crumb| format!("{} {}", crumb.label, format!("({})", crumb.href).dimmed()))
        .collect::<Vec<_>>();
    println!("{}", crumbs.join(" › "));

    Ok(())
}
