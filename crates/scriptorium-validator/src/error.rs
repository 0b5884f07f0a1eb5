//! Error types for dataset validation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that reject a corpus directory
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Path does not exist
    #[error("Dataset not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("Dataset path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Directory has no entries
    #[error("Dataset directory is empty: {}", .0.display())]
    EmptyDataset(PathBuf),

    /// Directory content violates a structural invariant
    #[error("Inconsistent dataset: {0}")]
    Inconsistent(Inconsistency),

    /// Listing or inspecting the directory failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural invariant that a dataset violates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Inconsistency {
    /// An entry name does not start with an id
    #[error("'{0}' does not start with an article id")]
    MissingLeadingId(String),

    /// The smallest id is not 1
    #[error("numbering starts at {0} instead of 1")]
    NumberingStart(u32),

    /// The ids skip at least one value
    #[error("numbering jumps from {previous} to {next}")]
    NumberingGap {
        /// Last id before the gap
        previous: u32,
        /// First id after the gap
        next: u32,
    },

    /// Raw text and metadata files do not pair up
    #[error("{raw} raw text files but {meta} metadata files")]
    FileCountMismatch {
        /// Number of raw text files
        raw: usize,
        /// Number of metadata files
        meta: usize,
    },

    /// A raw text file has no content
    #[error("raw text file '{0}' is empty")]
    EmptyRawFile(String),
}

impl From<Inconsistency> for DatasetError {
    fn from(reason: Inconsistency) -> Self {
        DatasetError::Inconsistent(reason)
    }
}
