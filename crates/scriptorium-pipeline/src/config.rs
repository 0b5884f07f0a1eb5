//! Configuration for the processing pipelines

use serde::{Deserialize, Serialize};

/// Configuration shared by both pipeline stages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Maximum number of articles processed at the same time
    pub max_concurrency: usize,

    /// File extension of the stage-2 visualization (without dot)
    pub image_extension: String,
}

impl PipelineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_concurrency == 0 {
            return Err("max_concurrency must be greater than 0".to_string());
        }
        let extension = self.image_extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err("image_extension must not be empty".to_string());
        }
        if !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(format!(
                "image_extension must be alphanumeric, got '{}'",
                self.image_extension
            ));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    /// One article at a time, SVG charts
    fn default() -> Self {
        Self {
            max_concurrency: 1,
            image_extension: "svg".to_string(),
        }
    }
}
