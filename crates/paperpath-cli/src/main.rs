mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use paperpath_router::config::{Config, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "paperpath")]
#[command(version, about = "Paperpath CLI - classify study-resource URLs", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log each classification step to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a path (`/punjab/9th/notes`) or a list of segments
    Classify {
        /// One path, or several segments
        #[arg(required = true)]
        input: Vec<String>,

        /// Print the descriptor as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the title, description and breadcrumbs for a path
    Title {
        #[arg(required = true)]
        input: Vec<String>,
    },

    /// Classify a path and look up matching documents
    Resolve {
        #[arg(required = true)]
        input: Vec<String>,

        /// JSON file of `{ "<collection>": [documents] }`
        #[arg(short, long)]
        documents: PathBuf,
    },

    /// Print the effective taxonomy as TOML
    Taxonomy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Classify { input, json } => {
            commands::classify::execute(&config, &input, json)?;
        }
        Commands::Title { input } => {
            commands::title::execute(&config, &input)?;
        }
        Commands::Resolve { input, documents } => {
            commands::resolve::execute(&config, &input, &documents)?;
        }
        Commands::Taxonomy => {
            commands::taxonomy::execute(&config)?;
        }
    }

    Ok(())
}
