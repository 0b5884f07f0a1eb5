//! Validate command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use scriptorium_store::ArticleStore;
use scriptorium_validator::validate_dataset;

/// Execute the validate command.
pub fn execute_validate(config: &Config, formatter: &Formatter) -> Result<()> {
    validate_dataset(&config.assets_path)?;
    let store = ArticleStore::scan(&config.assets_path)?;

    println!(
        "{}",
        formatter.success(&format!(
            "Dataset at {} is valid: {} articles",
            config.assets_path.display(),
            store.len()
        ))
    );
    Ok(())
}
