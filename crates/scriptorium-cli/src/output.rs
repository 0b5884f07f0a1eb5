//! Output formatting for the CLI.
//!
//! Progress lines go to stdout; diagnostics go through `tracing` to stderr.

use colored::*;
use scriptorium_domain::traits::{ArticleProgress, ProgressObserver};
use scriptorium_domain::PipelineStage;

/// Output formatter.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(message, "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(message, "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(message, "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            _ => text.to_string(),
        }
    }
}

/// One line per completed article.
pub fn progress_line(progress: &ArticleProgress) -> String {
    let id = progress.article_id;
    let url = progress.url.as_deref().unwrap_or("None");
    match progress.stage {
        PipelineStage::Harvested => format!("Article #{} is parsed. URL: {}", id, url),
        PipelineStage::TextProcessed => {
            format!("The pipeline for article #{} is completed. URL: {}", id, url)
        }
        PipelineStage::PosCounted => {
            format!("The POS frequency of article #{} is counted. URL: {}", id, url)
        }
        stage => format!("Article #{} reached stage {}. URL: {}", id, stage, url),
    }
}

/// Final line of a successful command.
pub fn completion_line(stage: PipelineStage) -> &'static str {
    match stage {
        PipelineStage::Harvested => "Scrapping is completed",
        PipelineStage::TextProcessed => "Pipeline is completed",
        PipelineStage::PosCounted => "The POS frequency pipeline is completed",
        PipelineStage::Validated | PipelineStage::Scanned => "Dataset is valid",
    }
}

/// Progress observer printing to stdout.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleProgress {
    formatter: Formatter,
}

impl ConsoleProgress {
    /// Create a console observer.
    pub fn new(formatter: Formatter) -> Self {
        Self { formatter }
    }
}

impl ProgressObserver for ConsoleProgress {
    fn article_completed(&self, progress: &ArticleProgress) {
        println!("{}", self.formatter.info(&progress_line(progress)));
    }
}
