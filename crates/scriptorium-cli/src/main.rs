//! Scriptorium CLI - build and process a research text corpus.

use clap::Parser;
use scriptorium_cli::{logging, Cli, Formatter};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let formatter = Formatter::new(!cli.no_color);

    if let Err(e) = scriptorium_cli::run(cli) {
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}
