//! Metrics collected during a harvest

use scriptorium_domain::ArticleId;

/// What a harvest did
///
/// Tracks discovered links, saved articles and text clean-up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestMetrics {
    /// Links collected from the seed pages
    pub links_found: usize,

    /// Articles saved, in id order
    pub saved: Vec<ArticleId>,

    /// Articles whose text was cut at a reference section
    pub trimmed: usize,

    /// Articles saved with an empty text
    pub empty: usize,

    /// Total runtime in milliseconds
    pub total_runtime_ms: u64,
}

impl HarvestMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a saved article
    pub fn record_saved(&mut self, id: ArticleId, trimmed: bool, empty: bool) {
        self.saved.push(id);
        if trimmed {
            self.trimmed += 1;
        }
        if empty {
            self.empty += 1;
        }
    }

    /// Number of saved articles
    pub fn total_saved(&self) -> usize {
        self.saved.len()
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Harvest Metrics Summary".to_string(),
            "=======================".to_string(),
            format!("Links found: {}", self.links_found),
            format!("Articles saved: {}", self.total_saved()),
            format!("Reference sections removed: {}", self.trimmed),
        ];
        if self.empty > 0 {
            lines.push(format!("Empty texts (will fail validation): {}", self.empty));
        }
        lines.push(format!("Runtime: {} ms", self.total_runtime_ms));
        lines.join("\n")
    }
}
