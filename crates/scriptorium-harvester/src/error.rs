//! Error types for harvesting

use scriptorium_store::StoreError;
use thiserror::Error;

/// Errors in the crawler configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read
    #[error("Cannot read crawler config: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid JSON
    #[error("Crawler config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// `seed_urls` is missing, not a list, empty, or has a foreign entry
    #[error("Incorrect seed URLs: {0}")]
    IncorrectUrl(String),

    /// `total_articles_to_find_and_parse` is missing, not an integer, or not positive
    #[error("Incorrect number of articles: {0}")]
    IncorrectNumberOfArticles(String),

    /// `total_articles_to_find_and_parse` exceeds the ceiling
    #[error("Number of articles out of range: {requested} (max: {max})")]
    NumberOfArticlesOutOfRange {
        /// Requested count
        requested: u64,
        /// Ceiling
        max: u64,
    },
}

/// Errors talking to the extraction service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Network or HTTP-level failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// Service answered with something unexpected
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Errors that stop a harvest
#[derive(Error, Debug)]
pub enum HarvestError {
    /// Article store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Assets directory could not be prepared
    #[error("Cannot prepare assets directory: {0}")]
    Environment(std::io::Error),

    /// Link discovery failed for a seed page
    #[error("Cannot collect links from {seed_url}: {message}")]
    Links {
        /// Seed page
        seed_url: String,
        /// Underlying error
        message: String,
    },

    /// An article could not be fetched
    #[error("Cannot fetch article {url}: {message}")]
    Fetch {
        /// Article URL
        url: String,
        /// Underlying error
        message: String,
    },

    /// Harvest settings are invalid
    #[error("Invalid harvest settings: {0}")]
    Settings(String),
}
