//! Scriptorium Harvester
//!
//! Builds a fresh corpus directory from a web source.
//!
//! # Overview
//!
//! The harvester is responsible for:
//! - **Config validation**: Checking the crawler's seed URLs and article count
//! - **Environment preparation**: Emptying the assets directory
//! - **Link discovery**: Collecting article links from the seed pages
//! - **Article download**: Fetching text and metadata, cutting the reference
//!   section, and saving each article under a sequential id
//!
//! Fetching and extraction are delegated to `LinkSource` / `ArticleSource`
//! implementations; `ServiceSource` is the one backed by an HTTP service.
//!
//! # Usage
//!
//! ```no_run
//! use scriptorium_domain::traits::SilentProgress;
//! use scriptorium_harvester::{
//!     prepare_environment, validate_config, HarvestSettings, Harvester, ServiceSource,
//! };
//! use scriptorium_store::ArticleStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = HarvestSettings::default();
//! let config = validate_config("crawler_config.json", &settings.url_pattern)?;
//! prepare_environment("tmp/articles")?;
//!
//! let mut store = ArticleStore::create("tmp/articles")?;
//! let links = ServiceSource::new(&settings.service_url)?;
//! let articles = ServiceSource::new(&settings.service_url)?;
//! let harvester = Harvester::new(links, articles, settings);
//!
//! let metrics = harvester.harvest(&config, &mut store, &SilentProgress)?;
//! println!("{}", metrics.summary());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod crawler;
mod error;
mod harvester;
mod metrics;
mod service;

pub use config::{parse_config, validate_config, CrawlerConfig, HarvestSettings, MAX_ARTICLES};
pub use crawler::Crawler;
pub use error::{ConfigError, HarvestError, ServiceError};
pub use harvester::{prepare_environment, trim_references, Harvester, REFERENCE_HEADINGS};
pub use metrics::HarvestMetrics;
pub use service::ServiceSource;
