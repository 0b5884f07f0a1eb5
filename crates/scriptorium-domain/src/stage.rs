//! Stage module - lifecycle of a corpus and its articles

use std::fmt;

/// Stage in the corpus lifecycle
///
/// Articles progress through stages in order:
/// - Harvested: raw text and metadata written by the harvester
/// - Validated: the corpus directory passed structural validation
/// - Scanned: the article is registered in an article store
/// - TextProcessed: the three stage-1 artifacts exist
/// - PosCounted: metadata carries part-of-speech frequencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PipelineStage {
    /// Raw text and metadata on disk
    Harvested,

    /// Directory passed validation
    Validated,

    /// Registered in the store
    Scanned,

    /// Stage-1 artifacts written
    TextProcessed,

    /// Stage-2 frequencies recorded
    PosCounted,
}

impl PipelineStage {
    /// Get the stage name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Harvested => "harvested",
            PipelineStage::Validated => "validated",
            PipelineStage::Scanned => "scanned",
            PipelineStage::TextProcessed => "text_processed",
            PipelineStage::PosCounted => "pos_counted",
        }
    }

    /// Whether this stage is at least `required`
    pub fn has_reached(&self, required: PipelineStage) -> bool {
        *self >= required
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
