//! Stage 2: part-of-speech frequencies

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::executor::for_each_article;
use crate::report::StageReport;
use regex::Regex;
use scriptorium_domain::traits::{ProgressObserver, Visualizer};
use scriptorium_domain::{Article, ArtifactKind, PipelineStage, PosFrequencies};
use scriptorium_store::ArticleStore;
use std::fmt::Display;
use std::sync::{Arc, LazyLock};
use tracing::{debug, info};

/// Part of speech: the uppercase run opening a secondary tag set
static POS_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([A-Z]+)").expect("valid regex"));

/// Part-of-speech tags found in a `multiple_tagged` text, in text order
///
/// # Examples
///
/// ```
/// use scriptorium_pipeline::extract_pos_tags;
///
/// let tags: Vec<&str> = extract_pos_tags("кот<NOUN,anim>(S) бежит<VERB>(V)").collect();
/// assert_eq!(tags, vec!["NOUN", "VERB"]);
/// ```
pub fn extract_pos_tags(text: &str) -> impl Iterator<Item = &str> {
    POS_TAG
        .captures_iter(text)
        .filter_map(|captures| captures.get(1).map(|m| m.as_str()))
}

/// Count how often each part-of-speech tag occurs
pub fn count_pos_frequencies(text: &str) -> PosFrequencies {
    let mut frequencies = PosFrequencies::new();
    for tag in extract_pos_tags(text) {
        *frequencies.entry(tag.to_string()).or_insert(0) += 1;
    }
    frequencies
}

/// Records tag frequencies in each article's metadata and renders them
pub struct PosFrequencyPipeline<V>
where
    V: Visualizer,
{
    store: Arc<ArticleStore>,
    visualizer: Arc<V>,
    config: PipelineConfig,
}

impl<V> PosFrequencyPipeline<V>
where
    V: Visualizer + Send + Sync + 'static,
    V::Error: Display,
{
    /// Create a new pipeline over `store`
    pub fn new(store: Arc<ArticleStore>, visualizer: V, config: PipelineConfig) -> Self {
        Self {
            store,
            visualizer: Arc::new(visualizer),
            config,
        }
    }

    /// Check that every article completed stage 1 with a non-empty result
    ///
    /// Nothing is written when this fails.
    pub fn preflight(&self) -> Result<Vec<Article>, PipelineError> {
        let articles = self.store.sorted_articles();
        for article in &articles {
            let actual = self.store.stage_of(article)?;
            if !actual.has_reached(PipelineStage::TextProcessed) {
                return Err(PipelineError::StageNotReached {
                    id: article.id,
                    required: PipelineStage::TextProcessed,
                    actual,
                });
            }
            let text = self
                .store
                .read_artifact(article, ArtifactKind::MultipleTagged)?;
            if text.is_empty() {
                return Err(PipelineError::EmptyArtifact(article.id));
            }
        }
        Ok(articles)
    }

    /// Count, record and render frequencies for every article
    pub async fn run<O>(&self, observer: &O) -> Result<StageReport, PipelineError>
    where
        O: ProgressObserver + ?Sized,
    {
        let articles = self.preflight()?;
        info!("All {} articles passed stage-1 preflight", articles.len());

        let store = Arc::clone(&self.store);
        let visualizer = Arc::clone(&self.visualizer);
        let extension = self.config.image_extension.clone();

        for_each_article(
            articles,
            &self.config,
            PipelineStage::PosCounted,
            observer,
            move |article| count_article(&store, visualizer.as_ref(), &extension, article),
        )
        .await
    }
}

fn count_article<V>(
    store: &ArticleStore,
    visualizer: &V,
    extension: &str,
    article: &Article,
) -> Result<(), PipelineError>
where
    V: Visualizer,
    V::Error: Display,
{
    let text = store.read_artifact(article, ArtifactKind::MultipleTagged)?;
    if text.is_empty() {
        return Err(PipelineError::EmptyArtifact(article.id));
    }

    let frequencies = count_pos_frequencies(&text);
    debug!(
        "Article {}: {} distinct tags",
        article.id,
        frequencies.len()
    );
    store.update_pos_frequencies(article, &frequencies)?;

    let image_path = store.image_path(article, extension);
    visualizer
        .visualize(&frequencies, &image_path)
        .map_err(|e| PipelineError::Visualizer {
            id: article.id,
            message: e.to_string(),
        })
}
