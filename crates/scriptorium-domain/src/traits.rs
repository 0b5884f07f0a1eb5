//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the corpus core and its
//! collaborators. Implementations live in other crates.

use crate::{Analysis, ArticleId, ArticleMeta, PipelineStage, PosFrequencies};
use std::path::Path;

/// Trait for morphological analysis of a single word
///
/// Implemented by the infrastructure layer (scriptorium-morph). The text
/// processing stage composes two implementations: a primary one providing
/// lemma and tags, and a secondary one providing an independent tag set.
pub trait MorphologicalAnalyzer {
    /// Error type for analyzer operations
    type Error;

    /// Analyze one word; `Ok(None)` means no analysis is available
    fn analyze(&self, word: &str) -> Result<Option<Analysis>, Self::Error>;

    /// Human-readable backend name for logs
    fn name(&self) -> &str {
        "analyzer"
    }
}

/// Trait for rendering tag frequencies
///
/// Implemented by the application layer (scriptorium-pipeline)
pub trait Visualizer {
    /// Error type for rendering
    type Error;

    /// Render `frequencies` to the file at `path`
    fn visualize(&self, frequencies: &PosFrequencies, path: &Path) -> Result<(), Self::Error>;
}

/// A completed unit of work on one article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleProgress {
    /// Stage the article just reached
    pub stage: PipelineStage,

    /// Article id
    pub article_id: ArticleId,

    /// Source URL, when known
    pub url: Option<String>,
}

/// Trait for observing per-article progress
///
/// Called once per completed article. Implementations must be cheap; they are
/// invoked from the coordinating task.
pub trait ProgressObserver {
    /// An article finished a stage
    fn article_completed(&self, progress: &ArticleProgress);
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressObserver for SilentProgress {
    fn article_completed(&self, _progress: &ArticleProgress) {}
}

/// A document fetched by the harvesting collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    /// Address the text was downloaded from
    pub url: String,

    /// Full extracted text
    pub text: String,

    /// Harvested metadata
    pub meta: ArticleMeta,
}

/// Trait for discovering article links from a seed page
///
/// Implemented by the harvesting layer (scriptorium-harvester)
pub trait LinkSource {
    /// Error type for link discovery
    type Error;

    /// List article URLs found on `seed_url`, in page order
    fn find_links(&self, seed_url: &str) -> Result<Vec<String>, Self::Error>;
}

/// Trait for fetching one article with its metadata
///
/// Implemented by the harvesting layer (scriptorium-harvester)
pub trait ArticleSource {
    /// Error type for fetching
    type Error;

    /// Download and extract the article at `url`
    fn fetch_article(&self, url: &str) -> Result<SourceDocument, Self::Error>;
}
