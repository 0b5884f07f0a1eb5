//! Scriptorium Morphological Analyzer Layer
//!
//! Pluggable implementations of the `MorphologicalAnalyzer` trait from
//! `scriptorium-domain`.
//!
//! # Architecture
//!
//! The text processing stage queries two analyzers per word: a primary one
//! (lemma + tags) and a secondary one (an independent tag set). Both are
//! instances of the same trait; any backend below can fill either role.
//!
//! # Backends
//!
//! - `MockAnalyzer`: Deterministic table-driven analyzer for testing
//! - `LexiconAnalyzer`: Tab-separated lexicon file loaded into memory
//! - `HttpAnalyzer`: Remote analysis service over HTTP/JSON
//! - `AnalyzerBackend`: Configuration-selected choice of the above
//!
//! # Examples
//!
//! ```
//! use scriptorium_morph::MockAnalyzer;
//! use scriptorium_domain::traits::MorphologicalAnalyzer;
//! use scriptorium_domain::Analysis;
//!
//! let mut analyzer = MockAnalyzer::new();
//! analyzer.add_analysis("cats", Analysis::new("cat", "NOUN,plur"));
//! assert_eq!(analyzer.analyze("cats").unwrap(), Some(Analysis::new("cat", "NOUN,plur")));
//! assert_eq!(analyzer.analyze("dogs").unwrap(), None);
//! ```

#![warn(missing_docs)]

pub mod http;
pub mod lexicon;

use scriptorium_domain::traits::MorphologicalAnalyzer;
use scriptorium_domain::Analysis;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use http::HttpAnalyzer;
pub use lexicon::LexiconAnalyzer;

/// Errors that can occur during morphological analysis
#[derive(Error, Debug)]
pub enum MorphError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the analysis service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Lexicon file could not be read
    #[error("Lexicon I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Lexicon line is malformed
    #[error("Lexicon line {line}: {reason}")]
    InvalidLexicon {
        /// 1-based line number
        line: usize,
        /// What is wrong with it
        reason: String,
    },

    /// Generic error
    #[error("Analyzer error: {0}")]
    Other(String),
}

/// How a [`MockAnalyzer`] answers words missing from its table
#[derive(Debug, Clone)]
enum Fallback {
    /// No analysis
    Nothing,
    /// Lemma = lower-cased word, fixed tags
    Echo(String),
}

/// Mock analyzer for deterministic testing
///
/// Answers from a word table without any external calls. Words can be
/// configured to fail, and calls are counted.
///
/// # Examples
///
/// ```
/// use scriptorium_morph::MockAnalyzer;
/// use scriptorium_domain::traits::MorphologicalAnalyzer;
///
/// // Every word is its own lemma, tagged "X"
/// let analyzer = MockAnalyzer::echo("X");
/// let analysis = analyzer.analyze("Word").unwrap().unwrap();
/// assert_eq!(analysis.lemma.as_deref(), Some("word"));
/// assert_eq!(analysis.tags.as_deref(), Some("X"));
/// ```
#[derive(Debug, Clone)]
pub struct MockAnalyzer {
    fallback: Fallback,
    table: Arc<Mutex<HashMap<String, Analysis>>>,
    failures: Arc<Mutex<HashSet<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockAnalyzer {
    /// Create a mock that knows no words
    pub fn new() -> Self {
        Self::with_fallback(Fallback::Nothing)
    }

    /// Create a mock that analyzes every unknown word as its lower-cased self
    /// with the given tags
    pub fn echo(tags: impl Into<String>) -> Self {
        Self::with_fallback(Fallback::Echo(tags.into()))
    }

    fn with_fallback(fallback: Fallback) -> Self {
        Self {
            fallback,
            table: Arc::new(Mutex::new(HashMap::new())),
            failures: Arc::new(Mutex::new(HashSet::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific analysis for a given word
    pub fn add_analysis(&mut self, word: impl Into<String>, analysis: Analysis) {
        self.table.lock().unwrap().insert(word.into(), analysis);
    }

    /// Configure to return an error for a specific word
    pub fn add_error(&mut self, word: impl Into<String>) {
        self.failures.lock().unwrap().insert(word.into());
    }

    /// Get the number of times analyze was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl MorphologicalAnalyzer for MockAnalyzer {
    type Error = MorphError;

    fn analyze(&self, word: &str) -> Result<Option<Analysis>, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if self.failures.lock().unwrap().contains(word) {
            return Err(MorphError::Other(format!("Mock error for '{}'", word)));
        }

        if let Some(analysis) = self.table.lock().unwrap().get(word) {
            return Ok(Some(analysis.clone()));
        }

        Ok(match &self.fallback {
            Fallback::Nothing => None,
            Fallback::Echo(tags) => Some(Analysis::new(word.to_lowercase(), tags.clone())),
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Analyzer chosen at runtime from configuration
#[derive(Debug)]
pub enum AnalyzerBackend {
    /// In-memory lexicon
    Lexicon(LexiconAnalyzer),
    /// Remote service
    Http(HttpAnalyzer),
    /// Test double
    Mock(MockAnalyzer),
}

impl MorphologicalAnalyzer for AnalyzerBackend {
    type Error = MorphError;

    fn analyze(&self, word: &str) -> Result<Option<Analysis>, Self::Error> {
        match self {
            AnalyzerBackend::Lexicon(analyzer) => analyzer.analyze(word),
            AnalyzerBackend::Http(analyzer) => analyzer.analyze(word),
            AnalyzerBackend::Mock(analyzer) => analyzer.analyze(word),
        }
    }

    fn name(&self) -> &str {
        match self {
            AnalyzerBackend::Lexicon(analyzer) => analyzer.name(),
            AnalyzerBackend::Http(analyzer) => analyzer.name(),
            AnalyzerBackend::Mock(analyzer) => analyzer.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_analyzer_unknown_word() {
        let analyzer = MockAnalyzer::new();
        assert_eq!(analyzer.analyze("anything").unwrap(), None);
    }

    #[test]
    fn test_mock_analyzer_specific_analyses() {
        let mut analyzer = MockAnalyzer::echo("X");
        analyzer.add_analysis("шла", Analysis::new("идти", "V,несов"));

        assert_eq!(
            analyzer.analyze("шла").unwrap(),
            Some(Analysis::new("идти", "V,несов"))
        );
        assert_eq!(
            analyzer.analyze("Дом").unwrap(),
            Some(Analysis::new("дом", "X"))
        );
    }

    #[test]
    fn test_mock_analyzer_call_count() {
        let analyzer = MockAnalyzer::new();
        assert_eq!(analyzer.call_count(), 0);

        analyzer.analyze("a").unwrap();
        analyzer.analyze("b").unwrap();
        assert_eq!(analyzer.call_count(), 2);

        analyzer.reset_call_count();
        assert_eq!(analyzer.call_count(), 0);
    }

    #[test]
    fn test_mock_analyzer_error() {
        let mut analyzer = MockAnalyzer::echo("X");
        analyzer.add_error("broken");

        let result = analyzer.analyze("broken");
        assert!(matches!(result, Err(MorphError::Other(_))));
    }

    #[test]
    fn test_mock_analyzer_clone_shares_state() {
        let analyzer1 = MockAnalyzer::new();
        let analyzer2 = analyzer1.clone();

        analyzer1.analyze("a").unwrap();

        assert_eq!(analyzer1.call_count(), 1);
        assert_eq!(analyzer2.call_count(), 1);
    }

    #[test]
    fn test_backend_dispatch() {
        let backend = AnalyzerBackend::Mock(MockAnalyzer::echo("T"));
        assert_eq!(backend.name(), "mock");
        assert_eq!(
            backend.analyze("Слово").unwrap(),
            Some(Analysis::new("слово", "T"))
        );
    }
}
