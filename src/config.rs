//! Configuration for a strip reading session.
//!
//! Holds the user's choices (analyte, photo source, language) and how the
//! reading is presented. Configuration can be loaded from JSON files or
//! constructed programmatically:
//!
//! ```no_run
//! use strip_colorscan::AnalyzerConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalyzerConfig::from_json_file(Path::new("strip.json"))?;
//!
//! // Or use defaults
//! let config = AnalyzerConfig::default();
//! # Ok::<(), strip_colorscan::AnalysisError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::gauge;
use crate::error::{AnalysisError, Result};
use crate::image_loader::SourceKind;
use crate::locale::Locale;
use crate::reference::Analyte;

/// Complete session configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Analyte to grade the strip for
    #[serde(default)]
    pub analyte: Analyte,

    /// Where the photo comes from
    #[serde(default)]
    pub source: SourceKind,

    /// Language of labels and advice
    #[serde(default)]
    pub locale: Locale,

    /// Presentation settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// How a reading is presented
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print JSON instead of the text report
    #[serde(default)]
    pub json: bool,

    /// Save the risk gauge as PNG at this path
    #[serde(default)]
    pub gauge_path: Option<PathBuf>,

    /// Save the photo stacked above the gauge as PNG at this path
    #[serde(default)]
    pub report_path: Option<PathBuf>,

    /// Width of the rendered gauge in pixels
    #[serde(default = "default_gauge_width")]
    pub gauge_width: u32,
}

fn default_gauge_width() -> u32 {
    gauge::DEFAULT_WIDTH
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            gauge_path: None,
            report_path: None,
            gauge_width: default_gauge_width(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            AnalysisError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            AnalysisError::config(format!("Failed to write {}", path.display()), e)
        })
    }

    /// Check values serde cannot check
    pub fn validate(&self) -> Result<()> {
        let width = self.output.gauge_width;
        if !(gauge::MIN_WIDTH..=gauge::MAX_WIDTH).contains(&width) {
            return Err(AnalysisError::invalid_parameter(
                "output.gauge_width",
                width.to_string(),
            ));
        }
        Ok(())
    }
}
