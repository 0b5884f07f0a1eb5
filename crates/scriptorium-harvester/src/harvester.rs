//! Harvest orchestration: links → documents → stored raw articles

use crate::config::{CrawlerConfig, HarvestSettings};
use crate::crawler::Crawler;
use crate::error::HarvestError;
use crate::metrics::HarvestMetrics;
use scriptorium_domain::traits::{ArticleProgress, ArticleSource, LinkSource, ProgressObserver};
use scriptorium_domain::{Article, ArticleId, PipelineStage};
use scriptorium_store::ArticleStore;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Headings that open the reference section of an article, checked in order
pub const REFERENCE_HEADINGS: [&str; 2] = ["ЛИТЕРАТУРА", "ИСТОЧНИКИ"];

/// Remove the assets directory if it exists and recreate it empty
///
/// Run before a harvest so ids start again from 1.
pub fn prepare_environment(path: impl AsRef<Path>) -> Result<(), HarvestError> {
    let path = path.as_ref();
    if path.exists() {
        debug!("Removing {}", path.display());
        fs::remove_dir_all(path).map_err(HarvestError::Environment)?;
    }
    fs::create_dir_all(path).map_err(HarvestError::Environment)?;
    info!("Prepared empty assets directory {}", path.display());
    Ok(())
}

/// Cut `text` before its reference section
///
/// The text is cut at the first `ЛИТЕРАТУРА`, and what remains at the first
/// `ИСТОЧНИКИ`.
///
/// # Examples
///
/// ```
/// use scriptorium_harvester::trim_references;
///
/// assert_eq!(trim_references("Текст. ЛИТЕРАТУРА 1. Книга"), "Текст. ");
/// assert_eq!(trim_references("Без списка"), "Без списка");
/// ```
pub fn trim_references(text: &str) -> &str {
    REFERENCE_HEADINGS
        .iter()
        .fold(text, |text, heading| match text.find(heading) {
            Some(position) => &text[..position],
            None => text,
        })
}

/// Downloads articles and stores them with sequential ids
pub struct Harvester<L, A>
where
    L: LinkSource,
    A: ArticleSource,
{
    links: L,
    articles: A,
    settings: HarvestSettings,
}

impl<L, A> Harvester<L, A>
where
    L: LinkSource,
    A: ArticleSource,
    L::Error: Display,
    A::Error: Display,
{
    /// Create a new harvester
    pub fn new(links: L, articles: A, settings: HarvestSettings) -> Self {
        Self {
            links,
            articles,
            settings,
        }
    }

    /// Collect links, fetch every article and save it into `store`
    ///
    /// Ids are assigned from 1 in link order. One progress notification is
    /// sent per saved article. The first failure stops the harvest; articles
    /// saved before it stay on disk.
    pub fn harvest<O>(
        &self,
        config: &CrawlerConfig,
        store: &mut ArticleStore,
        observer: &O,
    ) -> Result<HarvestMetrics, HarvestError>
    where
        O: ProgressObserver + ?Sized,
    {
        self.settings.validate().map_err(HarvestError::Settings)?;
        let started = Instant::now();
        let mut metrics = HarvestMetrics::new();

        let links = Crawler::new(&self.links, &config.seed_urls, config.total_articles)
            .with_delay(self.settings.request_delay())
            .find_articles()?;
        metrics.links_found = links.len();

        let mut id = ArticleId::first();
        for url in links {
            thread::sleep(self.settings.request_delay());

            let document = self
                .articles
                .fetch_article(&url)
                .map_err(|e| HarvestError::Fetch {
                    url: url.clone(),
                    message: e.to_string(),
                })?;

            let text = trim_references(&document.text);
            let trimmed = text.len() < document.text.len();
            if text.trim().is_empty() {
                warn!("Article {} from {} has no text", id, url);
            }

            let article = Article::with_url(id, document.url.clone());
            store.save_raw(&article, text, &document.meta)?;
            metrics.record_saved(id, trimmed, text.trim().is_empty());

            observer.article_completed(&ArticleProgress {
                stage: PipelineStage::Harvested,
                article_id: id,
                url: Some(url),
            });
            id = id.next();
        }

        metrics.total_runtime_ms = started.elapsed().as_millis() as u64;
        info!(
            "Harvest complete: {} of {} links saved",
            metrics.total_saved(),
            metrics.links_found
        );
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_trim_references_order() {
        assert_eq!(
            trim_references("Основной текст ИСТОЧНИКИ а ЛИТЕРАТУРА б"),
            "Основной текст "
        );
        assert_eq!(trim_references("Текст ЛИТЕРАТУРА x ИСТОЧНИКИ y"), "Текст ");
        assert_eq!(trim_references("ЛИТЕРАТУРА"), "");
    }

    #[test]
    fn test_prepare_environment_recreates_directory() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir_all(assets.join("nested")).unwrap();
        fs::write(assets.join("1_raw.txt"), "old").unwrap();

        prepare_environment(&assets).unwrap();

        assert!(assets.is_dir());
        assert_eq!(fs::read_dir(&assets).unwrap().count(), 0);
    }

    #[test]
    fn test_prepare_environment_creates_missing_parents() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("a").join("b");
        prepare_environment(&assets).unwrap();
        assert!(assets.is_dir());
    }
}
