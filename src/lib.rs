//! # Strip Colorscan
//!
//! A Rust crate for reading urine test strips (glucose and protein pads)
//! from digital photographs.
//!
//! A reading is produced by:
//! - Loading the photo from an uploaded file or a camera frame
//! - Averaging the photo to one RGB color
//! - Matching it to the nearest of four fixed reference colors
//! - Attaching the level's fixed risk score and advice
//!
//! Readings are a rough colorimetric screening aid, not a diagnosis.
//!
//! ## Example
//!
//! ```rust,no_run
//! use strip_colorscan::{analyze_strip, Analyte, Locale, UploadedFile};
//!
//! let result = analyze_strip(&UploadedFile::new("strip.jpg"), Analyte::Protein, Locale::En)?;
//! println!("{}: {} ({}%)", result.analyte, result.level, result.risk_percent);
//! # Ok::<(), strip_colorscan::AnalysisError>(())
//! ```

pub mod analyzer;
pub mod cli;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;
pub mod locale;
pub mod presenter;
pub mod reference;
pub mod risk;

pub use analyzer::{ClassificationResult, StripAnalyzer};
pub use config::{AnalyzerConfig, OutputConfig};
pub use error::{AnalysisError, Result};
pub use image_loader::{CameraFrame, ImageSource, SampleImage, SourceKind, UploadedFile};
pub use locale::Locale;
pub use presenter::Gauge;
pub use reference::{Analyte, Level};

/// Read a strip photo from `source` for `analyte`
///
/// This is the main entry point: it acquires the photo, classifies it and
/// returns the level with its risk score and advice in `locale`.
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - The photo cannot be read or decoded
/// - The file type is not jpg, jpeg or png
/// - The decoded image has no pixels
pub fn analyze_strip(
    source: &dyn ImageSource,
    analyte: Analyte,
    locale: Locale,
) -> Result<ClassificationResult> {
    StripAnalyzer::with_locale(analyte, locale).analyze(source)
}
