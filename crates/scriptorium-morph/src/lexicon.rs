//! In-memory lexicon analyzer
//!
//! Reads a tab-separated file with one entry per line:
//!
//! ```text
//! word<TAB>lemma<TAB>tags
//! ```
//!
//! Empty lines and lines starting with `#` are skipped. Lookups are
//! case-insensitive. An empty lemma column means the lexicon only knows the
//! word's tags.

use crate::MorphError;
use scriptorium_domain::traits::MorphologicalAnalyzer;
use scriptorium_domain::Analysis;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Analyzer backed by a word table loaded from disk
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    name: String,
    entries: HashMap<String, Analysis>,
}

impl LexiconAnalyzer {
    /// Load a lexicon file
    pub fn load(path: impl AsRef<Path>, name: impl Into<String>) -> Result<Self, MorphError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let analyzer = Self::parse(&content, name)?;
        info!(
            "Loaded {} lexicon entries from {}",
            analyzer.len(),
            path.display()
        );
        Ok(analyzer)
    }

    /// Build a lexicon from file contents
    ///
    /// Later entries for the same word replace earlier ones.
    pub fn parse(content: &str, name: impl Into<String>) -> Result<Self, MorphError> {
        let mut entries = HashMap::new();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let columns: Vec<&str> = line.split('\t').collect();
            if columns.len() != 3 {
                return Err(MorphError::InvalidLexicon {
                    line: index + 1,
                    reason: format!("expected 3 tab-separated columns, found {}", columns.len()),
                });
            }

            let word = columns[0].trim();
            if word.is_empty() {
                return Err(MorphError::InvalidLexicon {
                    line: index + 1,
                    reason: "empty word".to_string(),
                });
            }

            entries.insert(
                word.to_lowercase(),
                Analysis {
                    lemma: non_empty(columns[1]),
                    tags: non_empty(columns[2]),
                },
            );
        }

        Ok(Self {
            name: name.into(),
            entries,
        })
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn non_empty(column: &str) -> Option<String> {
    let column = column.trim();
    (!column.is_empty()).then(|| column.to_string())
}

impl MorphologicalAnalyzer for LexiconAnalyzer {
    type Error = MorphError;

    fn analyze(&self, word: &str) -> Result<Option<Analysis>, Self::Error> {
        Ok(self.entries.get(&word.to_lowercase()).cloned())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
