//! End-to-end tests for both pipeline stages

#[cfg(test)]
mod tests {
    use crate::{
        PipelineConfig, PipelineError, PosFrequencyPipeline, SvgBarChart, TextProcessingPipeline,
    };
    use chrono::NaiveDate;
    use scriptorium_domain::traits::{ArticleProgress, ProgressObserver, SilentProgress, Visualizer};
    use scriptorium_domain::{
        Analysis, Article, ArticleId, ArticleMeta, ArtifactKind, PipelineStage, PosFrequencies,
    };
    use scriptorium_morph::MockAnalyzer;
    use scriptorium_store::ArticleStore;
    use std::fs;
    use std::path::Path;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<ArticleProgress>>,
    }

    impl ProgressObserver for RecordingProgress {
        fn article_completed(&self, progress: &ArticleProgress) {
            self.events.lock().unwrap().push(progress.clone());
        }
    }

    impl RecordingProgress {
        fn ids(&self) -> Vec<u32> {
            let mut ids: Vec<u32> = self
                .events
                .lock()
                .unwrap()
                .iter()
                .map(|e| e.article_id.value())
                .collect();
            ids.sort();
            ids
        }
    }

    struct FailingChart;

    impl Visualizer for FailingChart {
        type Error = String;

        fn visualize(&self, _: &PosFrequencies, _: &Path) -> Result<(), Self::Error> {
            Err("renderer unavailable".to_string())
        }
    }

    fn id(value: u32) -> ArticleId {
        ArticleId::new(value).unwrap()
    }

    fn write_corpus(dir: &TempDir, texts: &[&str]) -> Arc<ArticleStore> {
        let date = NaiveDate::from_ymd_opt(2021, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let mut store = ArticleStore::create(dir.path()).unwrap();
        for (index, text) in texts.iter().enumerate() {
            let article = Article::new(id(index as u32 + 1));
            let meta = ArticleMeta::new("Автор", "Статья", vec!["тема".to_string()], date);
            store.save_raw(&article, text, &meta).unwrap();
        }
        Arc::new(ArticleStore::scan(dir.path()).unwrap())
    }

    fn echo_stage1(store: &Arc<ArticleStore>, config: PipelineConfig) -> TextProcessingPipeline<MockAnalyzer, MockAnalyzer> {
        TextProcessingPipeline::new(
            Arc::clone(store),
            MockAnalyzer::echo("S"),
            MockAnalyzer::echo("NOUN"),
            config,
        )
    }

    #[tokio::test]
    async fn test_text_processing_writes_all_artifacts() {
        let dir = TempDir::new().unwrap();
        let store = write_corpus(&dir, &["Первая статья", "Вторая", "Третья статья тут"]);
        let progress = RecordingProgress::default();

        let report = echo_stage1(&store, PipelineConfig::default())
            .run(&progress)
            .await
            .unwrap();

        assert_eq!(report.stage, PipelineStage::TextProcessed);
        assert_eq!(report.articles, vec![id(1), id(2), id(3)]);
        assert_eq!(progress.ids(), vec![1, 2, 3]);

        let first = store.get(id(1)).unwrap();
        assert_eq!(
            store.read_artifact(first, ArtifactKind::Cleaned).unwrap(),
            "первая статья"
        );
        assert_eq!(
            store.read_artifact(first, ArtifactKind::SingleTagged).unwrap(),
            "первая(NOUN) статья(NOUN)"
        );
        assert_eq!(
            store.read_artifact(first, ArtifactKind::MultipleTagged).unwrap(),
            "первая<NOUN>(S) статья<NOUN>(S)"
        );
        for article in store.sorted_articles() {
            assert_eq!(store.stage_of(&article).unwrap(), PipelineStage::TextProcessed);
        }
    }

    #[tokio::test]
    async fn test_text_processing_in_parallel() {
        let dir = TempDir::new().unwrap();
        let texts: Vec<String> = (1..=12).map(|n| format!("текст номер {}", n)).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let store = write_corpus(&dir, &refs);
        let progress = RecordingProgress::default();

        let config = PipelineConfig {
            max_concurrency: 4,
            ..PipelineConfig::default()
        };
        let report = echo_stage1(&store, config).run(&progress).await.unwrap();

        assert_eq!(report.processed(), 12);
        assert_eq!(progress.ids(), (1..=12).collect::<Vec<u32>>());
        let last = store.get(id(12)).unwrap();
        assert_eq!(
            store.read_artifact(last, ArtifactKind::Cleaned).unwrap(),
            "текст номер 12"
        );
    }

    #[tokio::test]
    async fn test_hyphenated_word_and_dropped_token() {
        let dir = TempDir::new().unwrap();
        let store = write_corpus(&dir, &["co-\noperation works"]);

        let mut primary = MockAnalyzer::new();
        primary.add_analysis("cooperation", Analysis::new("cooperation", "S"));
        let pipeline = TextProcessingPipeline::new(
            Arc::clone(&store),
            primary,
            MockAnalyzer::echo("NOUN"),
            PipelineConfig::default(),
        );
        pipeline.run(&SilentProgress).await.unwrap();

        let article = store.get(id(1)).unwrap();
        assert_eq!(
            store.read_artifact(article, ArtifactKind::Cleaned).unwrap(),
            "cooperation"
        );
        assert_eq!(
            store.read_artifact(article, ArtifactKind::MultipleTagged).unwrap(),
            "cooperation<NOUN>(S)"
        );
    }

    #[tokio::test]
    async fn test_analyzer_failure_aborts_run() {
        let dir = TempDir::new().unwrap();
        let store = write_corpus(&dir, &["хорошо", "плохо"]);

        let mut primary = MockAnalyzer::echo("ADV");
        primary.add_error("плохо");
        let pipeline = TextProcessingPipeline::new(
            Arc::clone(&store),
            primary,
            MockAnalyzer::echo("ADVB"),
            PipelineConfig::default(),
        );

        let result = pipeline.run(&SilentProgress).await;
        assert!(matches!(result, Err(PipelineError::Analyzer { .. })));
        let failed = store.get(id(2)).unwrap();
        assert!(!store.has_artifact(failed, ArtifactKind::MultipleTagged));
    }

    #[tokio::test]
    async fn test_failure_stops_queued_articles() {
        let dir = TempDir::new().unwrap();
        let store = write_corpus(&dir, &["плохо", "раз", "два", "три"]);

        let mut primary = MockAnalyzer::echo("ADV");
        primary.add_error("плохо");
        let pipeline = TextProcessingPipeline::new(
            Arc::clone(&store),
            primary,
            MockAnalyzer::echo("ADVB"),
            PipelineConfig::default(),
        );
        let progress = RecordingProgress::default();

        let result = pipeline.run(&progress).await;
        assert!(matches!(result, Err(PipelineError::Analyzer { .. })));
        assert!(progress.ids().is_empty());
        for value in 1..=4 {
            let article = store.get(id(value)).unwrap();
            assert!(
                !store.has_artifact(article, ArtifactKind::MultipleTagged),
                "article {} was processed after the failure",
                value
            );
        }
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = write_corpus(&dir, &["текст"]);
        let config = PipelineConfig {
            max_concurrency: 0,
            ..PipelineConfig::default()
        };

        let result = echo_stage1(&store, config).run(&SilentProgress).await;
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }

    #[tokio::test]
    async fn test_pos_frequency_requires_stage_one() {
        let dir = TempDir::new().unwrap();
        let store = write_corpus(&dir, &["текст"]);
        let meta_before = fs::read_to_string(dir.path().join("1_meta.json")).unwrap();

        let pipeline =
            PosFrequencyPipeline::new(Arc::clone(&store), SvgBarChart::default(), PipelineConfig::default());
        let result = pipeline.run(&SilentProgress).await;

        assert!(matches!(
            result,
            Err(PipelineError::StageNotReached {
                required: PipelineStage::TextProcessed,
                actual: PipelineStage::Scanned,
                ..
            })
        ));
        let meta_after = fs::read_to_string(dir.path().join("1_meta.json")).unwrap();
        assert_eq!(meta_before, meta_after);
    }

    #[tokio::test]
    async fn test_pos_frequency_rejects_empty_artifact() {
        let dir = TempDir::new().unwrap();
        // Second article has no analyzable words, so its artifacts are empty.
        let store = write_corpus(&dir, &["слово", "..."]);
        echo_stage1(&store, PipelineConfig::default())
            .run(&SilentProgress)
            .await
            .unwrap();

        let pipeline =
            PosFrequencyPipeline::new(Arc::clone(&store), SvgBarChart::default(), PipelineConfig::default());
        let result = pipeline.run(&SilentProgress).await;

        assert!(matches!(result, Err(PipelineError::EmptyArtifact(article)) if article == id(2)));
        assert!(!dir.path().join("1_image.svg").exists());
    }

    #[tokio::test]
    async fn test_pos_frequency_records_and_renders() {
        let dir = TempDir::new().unwrap();
        let store = write_corpus(&dir, &["кот", "пёс"]);
        let first = store.get(id(1)).unwrap().clone();
        store
            .save_artifacts(
                &first,
                &scriptorium_domain::ArtifactSet {
                    cleaned: "a b c".to_string(),
                    single_tagged: "a(NOUN) b(ADJ) c(NOUN)".to_string(),
                    multiple_tagged: "a<NOUN>(S) b<ADJ>(A) c<NOUN>(S)".to_string(),
                },
            )
            .unwrap();
        let second = store.get(id(2)).unwrap().clone();
        store
            .save_artifacts(
                &second,
                &scriptorium_domain::ArtifactSet {
                    cleaned: "d".to_string(),
                    single_tagged: "d(VERB)".to_string(),
                    multiple_tagged: "d<VERB>(V)".to_string(),
                },
            )
            .unwrap();

        let progress = RecordingProgress::default();
        let pipeline =
            PosFrequencyPipeline::new(Arc::clone(&store), SvgBarChart::default(), PipelineConfig::default());
        let report = pipeline.run(&progress).await.unwrap();

        assert_eq!(report.stage, PipelineStage::PosCounted);
        assert_eq!(progress.ids(), vec![1, 2]);

        let meta = store.load_meta(&first).unwrap();
        let frequencies = meta.pos_frequencies.unwrap();
        assert_eq!(frequencies.len(), 2);
        assert_eq!(frequencies["NOUN"], 2);
        assert_eq!(frequencies["ADJ"], 1);
        assert_eq!(meta.title, "Статья");
        assert!(dir.path().join("1_image.svg").is_file());
        assert!(dir.path().join("2_image.svg").is_file());
        assert_eq!(store.stage_of(&second).unwrap(), PipelineStage::PosCounted);

        // Re-running on identical artifacts leaves the metadata unchanged.
        let meta_first_run = fs::read_to_string(dir.path().join("1_meta.json")).unwrap();
        pipeline.run(&SilentProgress).await.unwrap();
        let meta_second_run = fs::read_to_string(dir.path().join("1_meta.json")).unwrap();
        assert_eq!(meta_first_run, meta_second_run);
    }

    #[tokio::test]
    async fn test_pos_frequency_image_extension() {
        let dir = TempDir::new().unwrap();
        let store = write_corpus(&dir, &["слово"]);
        echo_stage1(&store, PipelineConfig::default())
            .run(&SilentProgress)
            .await
            .unwrap();

        let config = PipelineConfig {
            image_extension: ".png".to_string(),
            ..PipelineConfig::default()
        };
        PosFrequencyPipeline::new(Arc::clone(&store), SvgBarChart::default(), config)
            .run(&SilentProgress)
            .await
            .unwrap();

        assert!(dir.path().join("1_image.png").is_file());
    }

    #[tokio::test]
    async fn test_visualizer_failure_aborts_run() {
        let dir = TempDir::new().unwrap();
        let store = write_corpus(&dir, &["слово"]);
        echo_stage1(&store, PipelineConfig::default())
            .run(&SilentProgress)
            .await
            .unwrap();

        let pipeline =
            PosFrequencyPipeline::new(Arc::clone(&store), FailingChart, PipelineConfig::default());
        let result = pipeline.run(&SilentProgress).await;

        assert!(matches!(result, Err(PipelineError::Visualizer { .. })));
    }
}
