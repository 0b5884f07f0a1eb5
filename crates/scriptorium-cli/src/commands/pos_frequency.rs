//! POS frequency command implementation.

use crate::cli::StageArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::{completion_line, ConsoleProgress, Formatter};
use scriptorium_domain::PipelineStage;
use scriptorium_pipeline::{PosFrequencyPipeline, SvgBarChart};
use scriptorium_store::ArticleStore;
use scriptorium_validator::validate_dataset;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::info;

/// Execute the POS frequency stage.
pub fn execute_pos_frequency(
    args: StageArgs,
    config: &Config,
    formatter: &Formatter,
    runtime: &Runtime,
) -> Result<()> {
    validate_dataset(&config.assets_path)?;
    let store = Arc::new(ArticleStore::scan(&config.assets_path)?);

    let mut pipeline_config = config.pipeline.clone();
    if let Some(concurrency) = args.concurrency {
        pipeline_config.max_concurrency = concurrency;
    }

    let pipeline = PosFrequencyPipeline::new(store, SvgBarChart::default(), pipeline_config);
    let progress = ConsoleProgress::new(*formatter);
    let report = runtime.block_on(pipeline.run(&progress))?;
    info!(
        "Counted {} articles in {}ms",
        report.processed(),
        report.processing_time_ms
    );

    println!("{}", formatter.success(completion_line(PipelineStage::PosCounted)));
    Ok(())
}
