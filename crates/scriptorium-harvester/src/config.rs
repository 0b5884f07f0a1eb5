//! Crawler configuration and harvest settings
//!
//! The crawler config is a small JSON record written by hand:
//!
//! ```json
//! {
//!     "seed_urls": ["https://journal.example.org/issue/1"],
//!     "total_articles_to_find_and_parse": 10
//! }
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Largest number of articles a single harvest may request
pub const MAX_ARTICLES: u64 = 300;

const SEED_URLS_KEY: &str = "seed_urls";
const TOTAL_ARTICLES_KEY: &str = "total_articles_to_find_and_parse";

/// A validated crawler configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlerConfig {
    /// Pages the crawler collects article links from, in order
    pub seed_urls: Vec<String>,

    /// How many articles to harvest (1..=300)
    pub total_articles: usize,
}

/// Read and validate the crawler config at `path`
///
/// Every seed URL must contain `url_pattern`.
///
/// # Errors
///
/// - [`ConfigError::IncorrectUrl`] if `seed_urls` is missing, not a list of
///   strings, empty, or has an entry without `url_pattern`
/// - [`ConfigError::IncorrectNumberOfArticles`] if the count is missing, not
///   an integer, or not positive
/// - [`ConfigError::NumberOfArticlesOutOfRange`] if the count exceeds
///   [`MAX_ARTICLES`]
pub fn validate_config(path: impl AsRef<Path>, url_pattern: &str) -> Result<CrawlerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, url_pattern)
}

/// Validate a crawler config given as JSON text
pub fn parse_config(json: &str, url_pattern: &str) -> Result<CrawlerConfig, ConfigError> {
    let record: Value = serde_json::from_str(json)?;

    let seed_urls = record
        .get(SEED_URLS_KEY)
        .ok_or_else(|| ConfigError::IncorrectUrl(format!("'{}' is missing", SEED_URLS_KEY)))?;
    let total = record.get(TOTAL_ARTICLES_KEY).ok_or_else(|| {
        ConfigError::IncorrectNumberOfArticles(format!("'{}' is missing", TOTAL_ARTICLES_KEY))
    })?;

    let seed_urls = validate_seed_urls(seed_urls, url_pattern)?;
    let total_articles = validate_total(total)?;

    Ok(CrawlerConfig {
        seed_urls,
        total_articles,
    })
}

fn validate_seed_urls(value: &Value, url_pattern: &str) -> Result<Vec<String>, ConfigError> {
    let entries = value
        .as_array()
        .ok_or_else(|| ConfigError::IncorrectUrl("seed URLs must be a list".to_string()))?;
    if entries.is_empty() {
        return Err(ConfigError::IncorrectUrl("seed URL list is empty".to_string()));
    }

    entries
        .iter()
        .map(|entry| match entry.as_str() {
            Some(url) if url.contains(url_pattern) => Ok(url.to_string()),
            Some(url) => Err(ConfigError::IncorrectUrl(format!(
                "'{}' does not match '{}'",
                url, url_pattern
            ))),
            None => Err(ConfigError::IncorrectUrl(format!(
                "seed URL {} is not a string",
                entry
            ))),
        })
        .collect()
}

fn validate_total(value: &Value) -> Result<usize, ConfigError> {
    let total = match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => n,
        other => {
            return Err(ConfigError::IncorrectNumberOfArticles(format!(
                "{} is not an integer",
                other
            )))
        }
    };

    let requested = match total.as_u64() {
        Some(requested) if requested > 0 => requested,
        _ => {
            return Err(ConfigError::IncorrectNumberOfArticles(format!(
                "{} is not positive",
                total
            )))
        }
    };

    if requested > MAX_ARTICLES {
        return Err(ConfigError::NumberOfArticlesOutOfRange {
            requested,
            max: MAX_ARTICLES,
        });
    }

    Ok(requested as usize)
}

/// How the harvester talks to the outside world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestSettings {
    /// Substring every seed URL must contain
    pub url_pattern: String,

    /// Base URL of the extraction service
    pub service_url: String,

    /// Pause before every request to the source site (milliseconds)
    pub request_delay_ms: u64,
}

impl Default for HarvestSettings {
    fn default() -> Self {
        Self {
            url_pattern: "https://".to_string(),
            service_url: "http://localhost:8091".to_string(),
            request_delay_ms: 500,
        }
    }
}

impl HarvestSettings {
    /// Politeness delay as a Duration
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if self.url_pattern.is_empty() {
            return Err("url_pattern must not be empty".to_string());
        }
        if self.service_url.is_empty() {
            return Err("service_url must not be empty".to_string());
        }
        Ok(())
    }
}
