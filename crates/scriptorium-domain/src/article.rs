//! Article module - the unit of the corpus

use crate::naming;
use std::fmt;
use std::str::FromStr;

/// Identifier of an article inside one corpus directory
///
/// Ids are positive and dense: a valid corpus of N articles uses exactly the
/// ids `1..=N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArticleId(u32);

impl ArticleId {
    /// Create an id, rejecting zero
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptorium_domain::ArticleId;
    ///
    /// assert!(ArticleId::new(1).is_some());
    /// assert!(ArticleId::new(0).is_none());
    /// ```
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Get the raw numeric value
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The id that follows this one in a dense numbering
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// The first id of every corpus
    pub fn first() -> Self {
        Self(1)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ArticleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .parse()
            .map_err(|e| format!("Invalid article id '{}': {}", s, e))?;
        Self::new(value).ok_or_else(|| "Article id must be positive".to_string())
    }
}

/// Kinds of stage-1 artifacts derived from an article's raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Lower-cased surface forms of the retained tokens
    Cleaned,

    /// Lemmas annotated with the secondary tag set
    SingleTagged,

    /// Lemmas annotated with both tag sets
    MultipleTagged,
}

impl ArtifactKind {
    /// All artifact kinds, in the order they are persisted
    ///
    /// `MultipleTagged` comes last: its presence marks a completed stage 1.
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Cleaned,
        ArtifactKind::SingleTagged,
        ArtifactKind::MultipleTagged,
    ];

    /// Get the artifact name as used in file names
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Cleaned => "cleaned",
            ArtifactKind::SingleTagged => "single_tagged",
            ArtifactKind::MultipleTagged => "multiple_tagged",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three stage-1 artifacts of one article, ready to persist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    /// Space-joined cleaned words
    pub cleaned: String,

    /// Space-joined single-tagged lemmas
    pub single_tagged: String,

    /// Space-joined multiple-tagged lemmas
    pub multiple_tagged: String,
}

impl ArtifactSet {
    /// Content of one artifact
    pub fn get(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Cleaned => &self.cleaned,
            ArtifactKind::SingleTagged => &self.single_tagged,
            ArtifactKind::MultipleTagged => &self.multiple_tagged,
        }
    }
}

/// A corpus item
///
/// The handle carries identity only; raw text, artifacts and metadata live on
/// disk and are loaded on demand by the store layer. `url` is known only for
/// articles produced by harvesting; articles registered by a directory scan
/// have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Dense positive identifier
    pub id: ArticleId,

    /// Source address, when known
    pub url: Option<String>,
}

impl Article {
    /// Create an article handle without a URL
    pub fn new(id: ArticleId) -> Self {
        Self { id, url: None }
    }

    /// Create an article handle with a known source URL
    pub fn with_url(id: ArticleId, url: impl Into<String>) -> Self {
        Self {
            id,
            url: Some(url.into()),
        }
    }

    /// File name of the raw text
    pub fn raw_file_name(&self) -> String {
        naming::raw_file_name(self.id)
    }

    /// File name of the metadata record
    pub fn meta_file_name(&self) -> String {
        naming::meta_file_name(self.id)
    }

    /// File name of a stage-1 artifact
    pub fn artifact_file_name(&self, kind: ArtifactKind) -> String {
        naming::artifact_file_name(self.id, kind)
    }

    /// File name of the stage-2 visualization
    pub fn image_file_name(&self, extension: &str) -> String {
        naming::image_file_name(self.id, extension)
    }

    /// URL for display purposes (`None` when unknown)
    pub fn display_url(&self) -> &str {
        self.url.as_deref().unwrap_or("None")
    }
}
