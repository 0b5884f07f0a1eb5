//! Error types for the article store

use scriptorium_domain::{ArticleId, ArtifactKind};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata could not be encoded or decoded
    #[error("Metadata JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Store root is missing or not a directory
    #[error("Not a corpus directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A raw text file name carries no article id
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    /// Article is not registered in this store
    #[error("Unknown article: {0}")]
    UnknownArticle(ArticleId),

    /// Requested artifact has not been written yet
    #[error("Article {id} has no {kind} artifact")]
    MissingArtifact {
        /// Article id
        id: ArticleId,
        /// Missing artifact
        kind: ArtifactKind,
    },

    /// Metadata file is not a JSON object
    #[error("Metadata of article {0} is not a JSON object")]
    InvalidMetadata(ArticleId),

    /// A metadata lock was poisoned by a panicking writer
    #[error("Metadata lock error: {0}")]
    Lock(String),
}
