//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Async runtime could not be started
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Dataset validation error
    #[error("Dataset validation failed: {0}")]
    Dataset(#[from] scriptorium_validator::DatasetError),

    /// Article store error
    #[error("Store error: {0}")]
    Store(#[from] scriptorium_store::StoreError),

    /// Analyzer setup error
    #[error("Analyzer error: {0}")]
    Analyzer(#[from] scriptorium_morph::MorphError),

    /// Pipeline error
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] scriptorium_pipeline::PipelineError),

    /// Crawler configuration error
    #[error("Crawler config error: {0}")]
    CrawlerConfig(#[from] scriptorium_harvester::ConfigError),

    /// Harvest error
    #[error("Harvest error: {0}")]
    Harvest(#[from] scriptorium_harvester::HarvestError),

    /// Extraction service error
    #[error("Service error: {0}")]
    Service(#[from] scriptorium_harvester::ServiceError),
}
