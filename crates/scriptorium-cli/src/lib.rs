//! Scriptorium CLI library.
//!
//! Wires configuration, analyzers and the article store into the harvest,
//! text processing and POS frequency stages, and formats their progress.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

/// Run one parsed command line.
///
/// The async stages get a runtime of their own; everything else stays
/// synchronous so blocking HTTP clients never live inside it.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(assets) = cli.assets {
        config.assets_path = assets;
    }

    let formatter = Formatter::new(!cli.no_color);

    match cli.command {
        Command::Harvest(args) => commands::execute_harvest(args, &config, &formatter),
        Command::Validate => commands::execute_validate(&config, &formatter),
        Command::Process(args) => {
            let runtime = build_runtime()?;
            commands::execute_process(args, &config, &formatter, &runtime)
        }
        Command::PosFrequency(args) => {
            let runtime = build_runtime()?;
            commands::execute_pos_frequency(args, &config, &formatter, &runtime)
        }
    }
}

fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Runtime(e.to_string()))
}
