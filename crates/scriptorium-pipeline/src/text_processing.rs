//! Stage 1: raw text to tagged artifacts

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::executor::for_each_article;
use crate::report::StageReport;
use crate::text::{normalize_text, tokenize};
use scriptorium_domain::traits::{MorphologicalAnalyzer, ProgressObserver};
use scriptorium_domain::{Article, ArtifactSet, MorphologicalToken, PipelineStage};
use scriptorium_store::ArticleStore;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, info};

/// Turns every article's raw text into the three stage-1 artifacts
///
/// Each word is analyzed by a primary analyzer (lemma + tags) and a
/// secondary one (tags). Words either analyzer cannot describe are dropped.
pub struct TextProcessingPipeline<P, S>
where
    P: MorphologicalAnalyzer,
    S: MorphologicalAnalyzer,
{
    store: Arc<ArticleStore>,
    primary: Arc<P>,
    secondary: Arc<S>,
    config: PipelineConfig,
}

impl<P, S> TextProcessingPipeline<P, S>
where
    P: MorphologicalAnalyzer + Send + Sync + 'static,
    S: MorphologicalAnalyzer + Send + Sync + 'static,
    P::Error: Display,
    S::Error: Display,
{
    /// Create a new pipeline over `store`
    pub fn new(store: Arc<ArticleStore>, primary: P, secondary: S, config: PipelineConfig) -> Self {
        Self {
            store,
            primary: Arc::new(primary),
            secondary: Arc::new(secondary),
            config,
        }
    }

    /// Process every registered article once
    ///
    /// Articles are independent and may finish in any order. The first
    /// analyzer or store failure ends the run.
    pub async fn run<O>(&self, observer: &O) -> Result<StageReport, PipelineError>
    where
        O: ProgressObserver + ?Sized,
    {
        let articles = self.store.sorted_articles();
        info!(
            "Text processing with analyzers '{}' and '{}'",
            self.primary.name(),
            self.secondary.name()
        );

        let store = Arc::clone(&self.store);
        let primary = Arc::clone(&self.primary);
        let secondary = Arc::clone(&self.secondary);

        for_each_article(
            articles,
            &self.config,
            PipelineStage::TextProcessed,
            observer,
            move |article| process_article(&store, article, primary.as_ref(), secondary.as_ref()),
        )
        .await
    }
}

fn process_article<P, S>(
    store: &ArticleStore,
    article: &Article,
    primary: &P,
    secondary: &S,
) -> Result<(), PipelineError>
where
    P: MorphologicalAnalyzer,
    S: MorphologicalAnalyzer,
    P::Error: Display,
    S::Error: Display,
{
    let raw_text = store.raw_text(article)?;
    let tokens = analyze_text(&raw_text, primary, secondary)?;
    debug!("Article {}: {} tokens retained", article.id, tokens.len());

    store.save_artifacts(article, &project_tokens(&tokens))?;
    Ok(())
}

/// Normalize, tokenize and analyze a raw text
///
/// Returns the retained tokens in text order.
pub fn analyze_text<P, S>(
    raw_text: &str,
    primary: &P,
    secondary: &S,
) -> Result<Vec<MorphologicalToken>, PipelineError>
where
    P: MorphologicalAnalyzer,
    S: MorphologicalAnalyzer,
    P::Error: Display,
    S::Error: Display,
{
    let text = normalize_text(raw_text);
    let mut tokens = Vec::new();

    for word in tokenize(&text) {
        let primary_analysis = analyze_with(primary, word)?;
        let secondary_analysis = analyze_with(secondary, word)?;
        if let Some(token) =
            MorphologicalToken::from_analyses(word, primary_analysis, secondary_analysis)
        {
            tokens.push(token);
        }
    }

    Ok(tokens)
}

fn analyze_with<A>(
    analyzer: &A,
    word: &str,
) -> Result<Option<scriptorium_domain::Analysis>, PipelineError>
where
    A: MorphologicalAnalyzer,
    A::Error: Display,
{
    analyzer.analyze(word).map_err(|e| PipelineError::Analyzer {
        analyzer: analyzer.name().to_string(),
        word: word.to_string(),
        message: e.to_string(),
    })
}

/// Space-join the three projections of `tokens`
pub fn project_tokens(tokens: &[MorphologicalToken]) -> ArtifactSet {
    let join = |projection: fn(&MorphologicalToken) -> String| {
        tokens.iter().map(projection).collect::<Vec<_>>().join(" ")
    };

    ArtifactSet {
        cleaned: join(MorphologicalToken::cleaned),
        single_tagged: join(MorphologicalToken::single_tagged),
        multiple_tagged: join(MorphologicalToken::multiple_tagged),
    }
}
