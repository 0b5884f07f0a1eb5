//! HTTP Analyzer Implementation
//!
//! Delegates analysis to a remote morphological service speaking JSON.
//!
//! # Protocol
//!
//! `POST {endpoint}/analyze` with body `{"word": "..."}`. The service answers
//! `{"lemma": "...", "tags": "..."}`, or `null` when it knows nothing about
//! the word. Either field of a present analysis may be null or absent.
//!
//! # Features
//!
//! - Blocking HTTP communication (callers run it on a blocking thread)
//! - Opt-in retries with exponential backoff; by default a failed request
//!   is reported at once, so a pipeline run stops on the first failure
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use scriptorium_morph::HttpAnalyzer;
//! use scriptorium_domain::traits::MorphologicalAnalyzer;
//!
//! let analyzer = HttpAnalyzer::new("http://localhost:8090", "mystem").unwrap();
//! let analysis = analyzer.analyze("стол").unwrap();
//! ```

use crate::MorphError;
use scriptorium_domain::traits::MorphologicalAnalyzer;
use scriptorium_domain::Analysis;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Default timeout for analysis requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of attempts per word (no retry)
pub const DEFAULT_MAX_RETRIES: u32 = 1;

/// Remote morphological analyzer
pub struct HttpAnalyzer {
    endpoint: String,
    name: String,
    client: reqwest::blocking::Client,
    max_retries: u32,
    backoff: Duration,
}

impl std::fmt::Debug for HttpAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAnalyzer")
            .field("endpoint", &self.endpoint)
            .field("name", &self.name)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    word: &'a str,
}

#[derive(Deserialize)]
struct WireAnalysis {
    #[serde(default)]
    lemma: Option<String>,
    #[serde(default)]
    tags: Option<String>,
}

impl HttpAnalyzer {
    /// Create a new analyzer for the service at `endpoint`
    ///
    /// `name` identifies the analyzer in logs and errors.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::Communication`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, name: impl Into<String>) -> Result<Self, MorphError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| MorphError::Communication(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            name: name.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff: Duration::from_secs(1),
        })
    }

    /// Set the maximum number of attempts per word (at least one)
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Set the delay before the first retry; it doubles on every further one
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Service endpoint without trailing slash
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Delay after the `attempt`-th failure: 1x, 2x, 4x, ... the backoff,
    /// saturating instead of overflowing
    fn retry_delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.backoff.saturating_mul(factor)
    }

    fn request(&self, url: &str, word: &str) -> Result<Option<Analysis>, MorphError> {
        let response = self
            .client
            .post(url)
            .json(&AnalyzeRequest { word })
            .send()
            .map_err(|e| MorphError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MorphError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: Option<WireAnalysis> = response
            .json()
            .map_err(|e| MorphError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(body.map(|wire| Analysis {
            lemma: wire.lemma,
            tags: wire.tags,
        }))
    }
}

impl MorphologicalAnalyzer for HttpAnalyzer {
    type Error = MorphError;

    fn analyze(&self, word: &str) -> Result<Option<Analysis>, Self::Error> {
        let url = format!("{}/analyze", self.endpoint);

        let mut attempts = 0;
        loop {
            match self.request(&url, word) {
                Ok(analysis) => return Ok(analysis),
                // A malformed body will not improve on retry.
                Err(e @ MorphError::InvalidResponse(_)) => return Err(e),
                Err(e) => {
                    attempts += 1;
                    if attempts >= self.max_retries {
                        return Err(e);
                    }
                    warn!(
                        "{} analyzer attempt {} failed: {}; retrying",
                        self.name, attempts, e
                    );
                    std::thread::sleep(self.retry_delay(attempts));
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_analyzer_creation() {
        let analyzer = HttpAnalyzer::new("http://localhost:8090/", "pymorphy").unwrap();
        assert_eq!(analyzer.endpoint(), "http://localhost:8090");
        assert_eq!(analyzer.name(), "pymorphy");
        assert_eq!(analyzer.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(DEFAULT_MAX_RETRIES, 1);
    }

    #[test]
    fn test_retry_delay_doubles_and_saturates() {
        let analyzer = HttpAnalyzer::new("http://localhost:8090", "mystem")
            .unwrap()
            .with_max_retries(64)
            .with_backoff(Duration::from_millis(10));
        assert_eq!(analyzer.retry_delay(1), Duration::from_millis(10));
        assert_eq!(analyzer.retry_delay(3), Duration::from_millis(40));
        assert!(analyzer.retry_delay(40) >= analyzer.retry_delay(33));
        assert_eq!(analyzer.retry_delay(63), analyzer.retry_delay(64));
    }

    #[test]
    fn test_with_max_retries_is_at_least_one() {
        let analyzer = HttpAnalyzer::new("http://localhost:8090", "mystem")
            .unwrap()
            .with_max_retries(0);
        assert_eq!(analyzer.max_retries, 1);
    }

    #[test]
    fn test_response_decoding() {
        let known: Option<WireAnalysis> =
            serde_json::from_str(r#"{"lemma": "стол", "tags": "S,муж"}"#).unwrap();
        let wire = known.unwrap();
        assert_eq!(wire.lemma.as_deref(), Some("стол"));
        assert_eq!(wire.tags.as_deref(), Some("S,муж"));

        let unknown: Option<WireAnalysis> = serde_json::from_str("null").unwrap();
        assert!(unknown.is_none());

        let tags_only: Option<WireAnalysis> =
            serde_json::from_str(r#"{"tags": "PNCT"}"#).unwrap();
        assert_eq!(tags_only.unwrap().lemma, None);
    }

    #[test]
    fn test_unreachable_service_fails() {
        // Port 9 (discard) is not expected to run an HTTP service.
        let analyzer = HttpAnalyzer::new("http://127.0.0.1:9", "mystem")
            .unwrap()
            .with_max_retries(1);
        let result = analyzer.analyze("стол");
        assert!(matches!(result, Err(MorphError::Communication(_))));
    }
}
