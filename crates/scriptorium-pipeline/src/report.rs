//! Summary of a completed pipeline run

use scriptorium_domain::{ArticleId, PipelineStage};

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    /// Stage every processed article has now reached
    pub stage: PipelineStage,

    /// Processed articles in ascending id order
    pub articles: Vec<ArticleId>,

    /// Wall-clock duration of the run
    pub processing_time_ms: u64,
}

impl StageReport {
    /// Number of processed articles
    pub fn processed(&self) -> usize {
        self.articles.len()
    }
}
