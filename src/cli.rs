//! Command-line arguments of the `strip-colorscan` binary

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::image_loader::SourceKind;
use crate::locale::Locale;
use crate::reference::Analyte;

#[derive(Debug, Parser)]
#[command(
    name = "strip-colorscan",
    version,
    about = "Read glucose / protein urine test strips from photos (screening aid, not a diagnosis)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify one strip photo
    Analyze(AnalyzeArgs),
    /// Write the default configuration as JSON
    GenerateConfig(GenerateConfigArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[arg(long, help = "JSON configuration file; flags below override it")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "glucose or protein")]
    pub analyte: Option<Analyte>,

    #[arg(long, help = "upload: read --image; camera: read one encoded frame from stdin (or --image)")]
    pub source: Option<SourceKind>,

    #[arg(long, help = "Strip photo (.jpg, .jpeg or .png)")]
    pub image: Option<PathBuf>,

    #[arg(long, help = "Language of labels and advice: th or en")]
    pub locale: Option<Locale>,

    #[arg(long, help = "Save the risk gauge as PNG")]
    pub gauge: Option<PathBuf>,

    #[arg(long, help = "Save the photo with the gauge below it as PNG")]
    pub report: Option<PathBuf>,

    #[arg(long, help = "Gauge width in pixels")]
    pub gauge_width: Option<u32>,

    #[arg(long, default_value_t = false, help = "Print the reading as JSON")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output path of the JSON file
    pub output: PathBuf,
}

impl AnalyzeArgs {
    /// Configuration file (or defaults) with command-line overrides applied
    pub fn resolve_config(&self) -> Result<AnalyzerConfig> {
        let mut config = match &self.config {
            Some(path) => AnalyzerConfig::from_json_file(path)?,
            None => AnalyzerConfig::default(),
        };

        if let Some(analyte) = self.analyte {
            config.analyte = analyte;
        }
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        if let Some(path) = &self.gauge {
            config.output.gauge_path = Some(path.clone());
        }
        if let Some(path) = &self.report {
            config.output.report_path = Some(path.clone());
        }
        if let Some(width) = self.gauge_width {
            config.output.gauge_width = width;
        }
        if self.json {
            config.output.json = true;
        }

        config.validate()?;
        Ok(config)
    }
}
