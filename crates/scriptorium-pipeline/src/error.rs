//! Error types for the pipelines

use scriptorium_domain::{ArticleId, PipelineStage};
use scriptorium_store::StoreError;
use thiserror::Error;

/// Errors that terminate a pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Article store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Morphological analyzer failure
    #[error("Analyzer '{analyzer}' failed on '{word}': {message}")]
    Analyzer {
        /// Analyzer name
        analyzer: String,
        /// Word being analyzed
        word: String,
        /// Underlying error
        message: String,
    },

    /// Visualizer failure
    #[error("Visualization of article {id} failed: {message}")]
    Visualizer {
        /// Article id
        id: ArticleId,
        /// Underlying error
        message: String,
    },

    /// A required upstream artifact is empty
    #[error("Article {0} has an empty multiple_tagged artifact")]
    EmptyArtifact(ArticleId),

    /// An article has not completed the stage this run depends on
    #[error("Article {id} has not reached stage {required} (found {actual})")]
    StageNotReached {
        /// Article id
        id: ArticleId,
        /// Stage the run requires
        required: PipelineStage,
        /// Stage the article is at
        actual: PipelineStage,
    },

    /// Worker task failed to complete
    #[error("Task error: {0}")]
    Join(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
