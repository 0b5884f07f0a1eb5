//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scriptorium - Build and process a research text corpus.
#[derive(Debug, Parser)]
#[command(name = "scriptorium")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (defaults to ./scriptorium.toml when present)
    #[arg(short, long, global = true, env = "SCRIPTORIUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Corpus directory, overrides `assets_path` from the configuration
    #[arg(short, long, global = true, env = "SCRIPTORIUM_ASSETS")]
    pub assets: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Harvest articles from the seed pages into a fresh corpus directory
    Harvest(HarvestArgs),

    /// Run the text processing stage over the corpus
    Process(StageArgs),

    /// Run the POS frequency stage over the corpus
    PosFrequency(StageArgs),

    /// Check the corpus directory without processing it
    Validate,
}

/// Arguments for the harvest command.
#[derive(Debug, Parser)]
pub struct HarvestArgs {
    /// Crawler configuration (JSON with seed_urls and total_articles_to_find_and_parse)
    #[arg(long, default_value = "crawler_config.json")]
    pub crawler_config: PathBuf,
}

/// Arguments for the pipeline stage commands.
#[derive(Debug, Parser)]
pub struct StageArgs {
    /// Maximum number of articles processed at the same time
    #[arg(short = 'j', long)]
    pub concurrency: Option<usize>,
}
