//! Directory-backed article store

use crate::error::StoreError;
use crate::json::to_meta_json;
use scriptorium_domain::meta::POS_FREQUENCIES_KEY;
use scriptorium_domain::naming;
use scriptorium_domain::{
    Article, ArticleId, ArticleMeta, ArtifactKind, ArtifactSet, PipelineStage, PosFrequencies,
};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Article store over one corpus directory
///
/// Maps article ids to [`Article`] handles. Raw text, artifacts and metadata
/// stay on disk and are read on demand, so a store is cheap to build and can
/// be shared between tasks behind an `Arc`.
///
/// # Thread Safety
///
/// All read and write methods take `&self`. Metadata updates are serialized
/// per article; artifact writes replace whole files atomically.
#[derive(Debug)]
pub struct ArticleStore {
    root: PathBuf,
    articles: HashMap<ArticleId, Article>,
    meta_locks: HashMap<ArticleId, Mutex<()>>,
}

impl ArticleStore {
    /// Create an empty store, creating the directory if needed
    ///
    /// Used by the harvester, which registers articles as it saves them.
    pub fn create(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            articles: HashMap::new(),
            meta_locks: HashMap::new(),
        })
    }

    /// Register one article per raw text file found in `root`
    ///
    /// Articles registered by a scan have no URL. Two raw files with the same
    /// id collapse into one article (the last one scanned wins).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use scriptorium_store::ArticleStore;
    ///
    /// let store = ArticleStore::scan("tmp/articles").unwrap();
    /// println!("{} articles", store.len());
    /// ```
    pub fn scan(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(StoreError::NotADirectory(root));
        }

        let mut store = Self {
            root,
            articles: HashMap::new(),
            meta_locks: HashMap::new(),
        };

        for entry in fs::read_dir(&store.root)? {
            let name = entry?.file_name().to_string_lossy().into_owned();
            if !naming::is_raw_file(&name) {
                continue;
            }
            let id = naming::leading_article_id(&name)
                .ok_or_else(|| StoreError::InvalidFileName(name.clone()))?;
            store.register(Article::new(id));
        }

        info!(
            "Scanned {} articles in {}",
            store.articles.len(),
            store.root.display()
        );
        Ok(store)
    }

    /// Corpus directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All registered articles keyed by id
    pub fn get_articles(&self) -> &HashMap<ArticleId, Article> {
        &self.articles
    }

    /// Registered articles in ascending id order
    pub fn sorted_articles(&self) -> Vec<Article> {
        let mut articles: Vec<Article> = self.articles.values().cloned().collect();
        articles.sort_by_key(|article| article.id);
        articles
    }

    /// Look up an article by id
    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(&id)
    }

    /// Number of registered articles
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether no article is registered
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Full path of a file inside the corpus directory
    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// Path the stage-2 visualization of `article` is written to
    pub fn image_path(&self, article: &Article, extension: &str) -> PathBuf {
        self.path_of(&article.image_file_name(extension))
    }

    /// Persist raw text and metadata of a freshly harvested article and
    /// register it
    pub fn save_raw(
        &mut self,
        article: &Article,
        text: &str,
        meta: &ArticleMeta,
    ) -> Result<(), StoreError> {
        let meta_json = to_meta_json(meta)?;
        self.write_atomic(article.id, &article.raw_file_name(), text.as_bytes())?;
        self.write_atomic(article.id, &article.meta_file_name(), &meta_json)?;
        self.register(article.clone());
        debug!("Saved raw text and metadata of article {}", article.id);
        Ok(())
    }

    /// Load the raw text of an article
    pub fn raw_text(&self, article: &Article) -> Result<String, StoreError> {
        Ok(fs::read_to_string(self.path_of(&article.raw_file_name()))?)
    }

    /// Whether an artifact file exists
    pub fn has_artifact(&self, article: &Article, kind: ArtifactKind) -> bool {
        self.path_of(&article.artifact_file_name(kind)).is_file()
    }

    /// Load an artifact
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingArtifact`] if the artifact was never written.
    pub fn read_artifact(&self, article: &Article, kind: ArtifactKind) -> Result<String, StoreError> {
        match fs::read_to_string(self.path_of(&article.artifact_file_name(kind))) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::MissingArtifact {
                id: article.id,
                kind,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist the three stage-1 artifacts of an article
    ///
    /// Every artifact is first written to a temporary file in the corpus
    /// directory; the files are then renamed into place with
    /// `multiple_tagged` last. A reader that sees `multiple_tagged` therefore
    /// sees the complete set.
    pub fn save_artifacts(&self, article: &Article, artifacts: &ArtifactSet) -> Result<(), StoreError> {
        let mut staged = Vec::with_capacity(ArtifactKind::ALL.len());
        for kind in ArtifactKind::ALL {
            let file = self.stage_file(article.id, artifacts.get(kind).as_bytes())?;
            staged.push((kind, file));
        }

        for (kind, file) in staged {
            let target = self.path_of(&article.artifact_file_name(kind));
            file.persist(&target).map_err(|e| e.error)?;
        }

        debug!("Saved stage-1 artifacts of article {}", article.id);
        Ok(())
    }

    /// Load the typed metadata record of an article
    pub fn load_meta(&self, article: &Article) -> Result<ArticleMeta, StoreError> {
        let content = fs::read_to_string(self.path_of(&article.meta_file_name()))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Add or replace `pos_frequencies` in the metadata of an article
    ///
    /// The record is read as an ordered JSON object, so every other field is
    /// written back unchanged and in its original position. Updates of one
    /// article's metadata never interleave.
    pub fn update_pos_frequencies(
        &self,
        article: &Article,
        frequencies: &PosFrequencies,
    ) -> Result<(), StoreError> {
        let lock = self
            .meta_locks
            .get(&article.id)
            .ok_or(StoreError::UnknownArticle(article.id))?;
        let _guard = lock
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;

        let mut record = self.read_meta_object(article)?;
        record.insert(
            POS_FREQUENCIES_KEY.to_string(),
            serde_json::to_value(frequencies)?,
        );

        let encoded = to_meta_json(&record)?;
        self.write_atomic(article.id, &article.meta_file_name(), &encoded)?;
        debug!("Updated POS frequencies of article {}", article.id);
        Ok(())
    }

    /// Stage an article has reached, judged from its files
    pub fn stage_of(&self, article: &Article) -> Result<PipelineStage, StoreError> {
        if !self.has_artifact(article, ArtifactKind::MultipleTagged) {
            return Ok(PipelineStage::Scanned);
        }
        let record = self.read_meta_object(article)?;
        if record.contains_key(POS_FREQUENCIES_KEY) {
            Ok(PipelineStage::PosCounted)
        } else {
            Ok(PipelineStage::TextProcessed)
        }
    }

    fn register(&mut self, article: Article) {
        self.meta_locks.entry(article.id).or_insert_with(|| Mutex::new(()));
        self.articles.insert(article.id, article);
    }

    fn read_meta_object(&self, article: &Article) -> Result<Map<String, Value>, StoreError> {
        let content = fs::read_to_string(self.path_of(&article.meta_file_name()))?;
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::InvalidMetadata(article.id)),
        }
    }

    /// Temporary file named `<id>_<random>.tmp`, so a leftover from an
    /// interrupted write still carries its article's id
    fn stage_file(&self, id: ArticleId, contents: &[u8]) -> Result<NamedTempFile, StoreError> {
        let mut file = tempfile::Builder::new()
            .prefix(&format!("{}_", id))
            .suffix(".tmp")
            .tempfile_in(&self.root)?;
        file.write_all(contents)?;
        file.flush()?;
        Ok(file)
    }

    fn write_atomic(&self, id: ArticleId, file_name: &str, contents: &[u8]) -> Result<(), StoreError> {
        let file = self.stage_file(id, contents)?;
        file.persist(self.path_of(file_name)).map_err(|e| e.error)?;
        Ok(())
    }
}
