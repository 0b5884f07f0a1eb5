//! Bounded per-article task execution shared by both stages

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::report::StageReport;
use scriptorium_domain::traits::{ArticleProgress, ProgressObserver};
use scriptorium_domain::{Article, PipelineStage};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Run `job` once for every article, at most `max_concurrency` at a time
///
/// `job` is synchronous (file I/O and capability calls) and runs on the
/// blocking thread pool. The observer is notified from this task as each
/// article completes. The first failure closes the permit pool, so no
/// waiting article starts afterwards, and is returned; jobs already running
/// finish in the background and their writes are kept.
pub(crate) async fn for_each_article<F, O>(
    articles: Vec<Article>,
    config: &PipelineConfig,
    stage: PipelineStage,
    observer: &O,
    job: F,
) -> Result<StageReport, PipelineError>
where
    F: Fn(&Article) -> Result<(), PipelineError> + Send + Sync + 'static,
    O: ProgressObserver + ?Sized,
{
    config.validate().map_err(PipelineError::Config)?;

    let started = Instant::now();
    let total = articles.len();
    let job = Arc::new(job);
    let permits = Arc::new(Semaphore::new(config.max_concurrency));
    let mut tasks = JoinSet::new();

    info!(
        "Running stage '{}' over {} articles (max concurrency {})",
        stage, total, config.max_concurrency
    );

    for article in articles {
        let job = Arc::clone(&job);
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            // A closed semaphore means another article failed; never start.
            let Ok(permit) = Arc::clone(&permits).acquire_owned().await else {
                return Ok(None);
            };
            let result = tokio::task::spawn_blocking(move || (*job)(&article).map(|()| article))
                .await
                .map_err(|e| PipelineError::Join(e.to_string()))
                .and_then(|result| result);
            if result.is_err() {
                // Close before the permit is released so no waiter slips in.
                permits.close();
            }
            drop(permit);
            result.map(Some)
        });
    }

    let mut completed = Vec::with_capacity(total);
    while let Some(joined) = tasks.join_next().await {
        let outcome = joined
            .map_err(|e| PipelineError::Join(e.to_string()))
            .and_then(|result| result);

        match outcome {
            Ok(None) => {}
            Ok(Some(article)) => {
                debug!("Article {} reached stage '{}'", article.id, stage);
                observer.article_completed(&ArticleProgress {
                    stage,
                    article_id: article.id,
                    url: article.url.clone(),
                });
                completed.push(article.id);
            }
            Err(e) => {
                warn!(
                    "Stage '{}' failed after {} of {} articles: {}",
                    stage,
                    completed.len(),
                    total,
                    e
                );
                tasks.abort_all();
                return Err(e);
            }
        }
    }

    completed.sort();
    let processing_time_ms = started.elapsed().as_millis() as u64;
    info!(
        "Stage '{}' complete: {} articles in {} ms",
        stage,
        completed.len(),
        processing_time_ms
    );

    Ok(StageReport {
        stage,
        articles: completed,
        processing_time_ms,
    })
}
