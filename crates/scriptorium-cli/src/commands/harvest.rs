//! Harvest command implementation.

use crate::cli::HarvestArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::{completion_line, ConsoleProgress, Formatter};
use scriptorium_domain::PipelineStage;
use scriptorium_harvester::{prepare_environment, validate_config, Harvester, ServiceSource};
use scriptorium_store::ArticleStore;
use tracing::info;

/// Execute the harvest command.
///
/// The crawler configuration is checked before the corpus directory is
/// touched.
pub fn execute_harvest(args: HarvestArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let crawler_config = validate_config(&args.crawler_config, &config.harvest.url_pattern)?;

    prepare_environment(&config.assets_path)?;
    let mut store = ArticleStore::create(&config.assets_path)?;

    let service_url = config.harvest.service_url.as_str();
    let harvester = Harvester::new(
        ServiceSource::new(service_url)?,
        ServiceSource::new(service_url)?,
        config.harvest.clone(),
    );

    let progress = ConsoleProgress::new(*formatter);
    let metrics = harvester.harvest(&crawler_config, &mut store, &progress)?;
    info!("{}", metrics.summary());

    println!("{}", formatter.success(completion_line(PipelineStage::Harvested)));
    Ok(())
}
