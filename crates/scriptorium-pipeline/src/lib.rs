//! Scriptorium Pipeline
//!
//! The two processing stages that enrich a validated corpus.
//!
//! # Overview
//!
//! Stage 1 (`TextProcessingPipeline`) normalizes and tokenizes each article's
//! raw text, analyzes every word with two morphological analyzers and writes
//! the `cleaned`, `single_tagged` and `multiple_tagged` artifacts.
//!
//! Stage 2 (`PosFrequencyPipeline`) counts part-of-speech tags in the
//! `multiple_tagged` artifact, records them in the article metadata and
//! renders them through a `Visualizer`.
//!
//! # Architecture
//!
//! ```text
//! DatasetValidator → ArticleStore → TextProcessingPipeline → PosFrequencyPipeline
//! ```
//!
//! Within a stage, articles run as tasks on a `JoinSet`, bounded by
//! `PipelineConfig::max_concurrency`. The first failure ends the run.
//!
//! # Example Usage
//!
//! ```no_run
//! use scriptorium_domain::traits::SilentProgress;
//! use scriptorium_morph::MockAnalyzer;
//! use scriptorium_pipeline::{
//!     PipelineConfig, PosFrequencyPipeline, SvgBarChart, TextProcessingPipeline,
//! };
//! use scriptorium_store::ArticleStore;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(ArticleStore::scan("tmp/articles")?);
//! let config = PipelineConfig::default();
//!
//! let stage1 = TextProcessingPipeline::new(
//!     Arc::clone(&store),
//!     MockAnalyzer::echo("S"),
//!     MockAnalyzer::echo("NOUN"),
//!     config.clone(),
//! );
//! stage1.run(&SilentProgress).await?;
//!
//! let stage2 = PosFrequencyPipeline::new(store, SvgBarChart::default(), config);
//! let report = stage2.run(&SilentProgress).await?;
//! println!("Counted {} articles", report.processed());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod chart;
mod config;
mod error;
mod executor;
mod pos;
mod report;
mod text;
mod text_processing;

#[cfg(test)]
mod tests;

pub use chart::SvgBarChart;
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pos::{count_pos_frequencies, extract_pos_tags, PosFrequencyPipeline};
pub use report::StageReport;
pub use text::{normalize_text, tokenize, Tokens};
pub use text_processing::{analyze_text, project_tokens, TextProcessingPipeline};
