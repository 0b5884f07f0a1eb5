//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use scriptorium_harvester::HarvestSettings;
use scriptorium_morph::http::DEFAULT_MAX_RETRIES;
use scriptorium_morph::{AnalyzerBackend, HttpAnalyzer, LexiconAnalyzer};
use scriptorium_pipeline::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "scriptorium.toml";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Corpus directory
    #[serde(default = "default_assets_path")]
    pub assets_path: PathBuf,

    /// Pipeline stage settings
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Morphological analyzers
    #[serde(default)]
    pub analyzers: AnalyzersConfig,

    /// Harvest settings
    #[serde(default)]
    pub harvest: HarvestSettings,
}

/// The two analyzers of the text processing stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzersConfig {
    /// Lemma and primary tag set
    pub primary: AnalyzerConfig,

    /// Secondary tag set
    pub secondary: AnalyzerConfig,
}

/// Where an analyzer gets its answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum AnalyzerConfig {
    /// Tab-separated lexicon file
    Lexicon {
        /// Lexicon path
        path: PathBuf,
    },

    /// Remote analysis service
    Http {
        /// Service endpoint
        endpoint: String,

        /// Attempts per word; 1 means a failed request stops the run
        #[serde(default = "default_max_retries")]
        max_retries: u32,
    },
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `scriptorium.toml` in the
    /// working directory is used when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    /// Read and validate a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all sections.
    pub fn validate(&self) -> Result<()> {
        self.pipeline.validate().map_err(CliError::Config)?;
        self.harvest.validate().map_err(CliError::Config)?;
        Ok(())
    }
}

impl AnalyzerConfig {
    /// Build the configured analyzer; `name` labels it in logs and errors.
    pub fn build(&self, name: &str) -> Result<AnalyzerBackend> {
        let backend = match self {
            AnalyzerConfig::Lexicon { path } => {
                AnalyzerBackend::Lexicon(LexiconAnalyzer::load(path, name)?)
            }
            AnalyzerConfig::Http {
                endpoint,
                max_retries,
            } => AnalyzerBackend::Http(
                HttpAnalyzer::new(endpoint.as_str(), name)?.with_max_retries(*max_retries),
            ),
        };
        Ok(backend)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_path: default_assets_path(),
            pipeline: PipelineConfig::default(),
            analyzers: AnalyzersConfig::default(),
            harvest: HarvestSettings::default(),
        }
    }
}

impl Default for AnalyzersConfig {
    fn default() -> Self {
        Self {
            primary: AnalyzerConfig::Http {
                endpoint: "http://localhost:8090".to_string(),
                max_retries: default_max_retries(),
            },
            secondary: AnalyzerConfig::Http {
                endpoint: "http://localhost:8092".to_string(),
                max_retries: default_max_retries(),
            },
        }
    }
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_assets_path() -> PathBuf {
    PathBuf::from("tmp").join("articles")
}
