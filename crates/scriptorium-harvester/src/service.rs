//! Extraction service client
//!
//! Page fetching, HTML parsing and PDF text extraction happen in an external
//! service. This module only speaks its JSON protocol:
//!
//! - `GET {service}/links?url=<seed>` → `{"links": ["...", ...]}`
//! - `GET {service}/article?url=<link>` → `{"url", "text", "author", "title",
//!   "topics", "date"}`
//!
//! `date` is either `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`.

use crate::error::ServiceError;
use chrono::{NaiveDate, NaiveDateTime};
use scriptorium_domain::meta::date_format;
use scriptorium_domain::traits::{ArticleSource, LinkSource, SourceDocument};
use scriptorium_domain::ArticleMeta;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Default timeout for service requests (60 seconds, PDF extraction is slow)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Author recorded when the page names none
pub const UNKNOWN_AUTHOR: &str = "NOT FOUND";

/// Link and article source backed by the extraction service
pub struct ServiceSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl std::fmt::Debug for ServiceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceSource")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Deserialize)]
struct LinksResponse {
    links: Vec<String>,
}

#[derive(Deserialize)]
struct ArticleResponse {
    url: String,
    text: String,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    topics: Vec<String>,
    date: String,
}

impl ServiceSource {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self, ServiceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ServiceError::Communication(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Service base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_json<T>(&self, endpoint: &str, url: &str) -> Result<T, ServiceError>
    where
        T: serde::de::DeserializeOwned,
    {
        let request_url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} for {}", request_url, url);

        let response = self
            .client
            .get(&request_url)
            .query(&[("url", url)])
            .send()
            .map_err(|e| ServiceError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ServiceError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json()
            .map_err(|e| ServiceError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

impl LinkSource for ServiceSource {
    type Error = ServiceError;

    fn find_links(&self, seed_url: &str) -> Result<Vec<String>, Self::Error> {
        let response: LinksResponse = self.get_json("links", seed_url)?;
        Ok(response.links)
    }
}

impl ArticleSource for ServiceSource {
    type Error = ServiceError;

    fn fetch_article(&self, url: &str) -> Result<SourceDocument, Self::Error> {
        let response: ArticleResponse = self.get_json("article", url)?;
        into_document(response)
    }
}

fn into_document(response: ArticleResponse) -> Result<SourceDocument, ServiceError> {
    let date = parse_date(&response.date)?;
    let author = response
        .author
        .filter(|author| !author.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

    Ok(SourceDocument {
        url: response.url,
        text: response.text,
        meta: ArticleMeta::new(author, response.title, response.topics, date),
    })
}

fn parse_date(value: &str) -> Result<NaiveDateTime, ServiceError> {
    if let Ok(date) = NaiveDateTime::parse_from_str(value, date_format::FORMAT) {
        return Ok(date);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ServiceError::InvalidResponse(format!("Unrecognized date '{}'", value)))
}
