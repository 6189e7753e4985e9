//! Strip classification pipeline
//!
//! Photo → mean color → nearest reference level → risk score and advice.

use image::RgbImage;
use log::info;
use serde::{Deserialize, Serialize};

use crate::color::{average_color, ColorConverter, MeanColor, ReferenceMatcher};
use crate::image_loader::{ImageSource, SampleImage};
use crate::locale::Locale;
use crate::reference::{Analyte, Level};
use crate::risk::RiskAssessment;
use crate::Result;

/// Reading of one strip pad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Analyte the pad was graded for
    pub analyte: Analyte,
    /// Matched semi-quantitative level
    pub level: Level,
    /// Fixed risk score of the level (0-100)
    pub risk_percent: u8,
    /// Fixed advice text of the level
    pub advice: String,
    /// Language of `advice` and of the rendered report
    pub locale: Locale,
    /// Mean color of the photo
    pub mean_color: MeanColor,
    /// Mean color rounded to 8 bits, as hex
    pub mean_hex: String,
    /// Reference color of the matched level, as hex
    pub reference_hex: String,
    /// Euclidean RGB distance between mean and reference color
    pub distance: f64,
    /// CIE76 difference between mean and reference color, for information
    pub delta_e: f32,
}

/// Classifies strip photos for one analyte
#[derive(Debug, Clone)]
pub struct StripAnalyzer {
    analyte: Analyte,
    locale: Locale,
    converter: ColorConverter,
}

impl StripAnalyzer {
    /// Create an analyzer with Thai advice text
    pub fn new(analyte: Analyte) -> Self {
        Self::with_locale(analyte, Locale::default())
    }

    pub fn with_locale(analyte: Analyte, locale: Locale) -> Self {
        Self {
            analyte,
            locale,
            converter: ColorConverter::new(),
        }
    }

    pub fn analyte(&self) -> Analyte {
        self.analyte
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Acquire a photo from `source` and classify it
    pub fn analyze(&self, source: &dyn ImageSource) -> Result<ClassificationResult> {
        info!("Analyzing {} for {}", source.describe(), self.analyte);
        let sample = source.acquire()?;
        self.classify(&sample)
    }

    /// Classify a decoded photo
    pub fn classify(&self, sample: &SampleImage) -> Result<ClassificationResult> {
        self.classify_raster(sample.raster())
    }

    /// Classify a bare RGB raster
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidImage` if the raster has no pixels.
    pub fn classify_raster(&self, raster: &RgbImage) -> Result<ClassificationResult> {
        let mean = average_color(raster)?;
        Ok(self.classify_color(mean))
    }

    /// Classify an already averaged color
    pub fn classify_color(&self, mean: MeanColor) -> ClassificationResult {
        let matcher = ReferenceMatcher::new(self.analyte.reference_table());
        let matched = matcher.match_color(mean);
        let reference = matcher.reference_color(&matched);
        let assessment = RiskAssessment::for_level(matched.level, self.locale);

        let delta_e = self
            .converter
            .delta_e(self.converter.mean_to_lab(mean), self.converter.rgb_to_lab(reference));

        info!(
            "{} reading: {} (risk {}%, distance {:.2})",
            self.analyte, matched.level, assessment.risk_percent, matched.distance
        );

        ClassificationResult {
            analyte: self.analyte,
            level: matched.level,
            risk_percent: assessment.risk_percent,
            advice: assessment.advice,
            locale: self.locale,
            mean_color: mean,
            mean_hex: self.converter.rgb_to_hex(mean.to_rgb8()),
            reference_hex: self.converter.rgb_to_hex(reference),
            distance: matched.distance,
            delta_e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::advice;
    use image::Rgb;

    #[test]
    fn test_protein_plus2_reading() {
        let raster = RgbImage::from_pixel(8, 8, Rgb([255, 210, 100]));
        let result = StripAnalyzer::new(Analyte::Protein)
            .classify_raster(&raster)
            .unwrap();

        assert_eq!(result.level, Level::Plus2);
        assert_eq!(result.risk_percent, 65);
        assert_eq!(result.advice, advice(Level::Plus2, Locale::Th));
        assert_eq!(result.distance, 0.0);
        assert!(result.delta_e < 0.01);
        assert_eq!(result.mean_hex, "#FFD264");
        assert_eq!(result.reference_hex, "#FFD264");
    }

    #[test]
    fn test_glucose_negative_reading() {
        let raster = RgbImage::from_pixel(5, 3, Rgb([180, 220, 255]));
        let result = StripAnalyzer::new(Analyte::Glucose)
            .classify_raster(&raster)
            .unwrap();

        assert_eq!(result.level, Level::Negative);
        assert_eq!(result.risk_percent, 10);
        assert_eq!(result.advice, advice(Level::Negative, Locale::Th));
    }

    #[test]
    fn test_analyte_changes_reading() {
        // The palest glucose tone is the nearest one to protein +++
        let mean = MeanColor::new(255.0, 190.0, 50.0);
        let protein = StripAnalyzer::new(Analyte::Protein).classify_color(mean);
        let glucose = StripAnalyzer::new(Analyte::Glucose).classify_color(mean);

        assert_eq!(protein.level, Level::Plus3);
        assert_eq!(glucose.level, Level::Negative);
        assert_eq!(protein.analyte, Analyte::Protein);
        assert_eq!(glucose.analyte, Analyte::Glucose);
    }

    #[test]
    fn test_english_advice() {
        let analyzer = StripAnalyzer::with_locale(Analyte::Glucose, Locale::En);
        let result = analyzer.classify_color(MeanColor::new(30.0, 130.0, 220.0));
        assert_eq!(result.level, Level::Plus3);
        assert_eq!(result.advice, advice(Level::Plus3, Locale::En));
        assert_eq!(result.locale, Locale::En);
    }

    #[test]
    fn test_empty_raster_is_invalid() {
        let raster = RgbImage::new(0, 0);
        assert!(matches!(
            StripAnalyzer::new(Analyte::Glucose).classify_raster(&raster),
            Err(crate::AnalysisError::InvalidImage { .. })
        ));
    }

    #[test]
    fn test_result_json_roundtrip() {
        let result = StripAnalyzer::new(Analyte::Protein).classify_color(MeanColor::new(255.0, 230.0, 150.0));
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"level\":\"+\""));
        assert!(json.contains("\"analyte\":\"protein\""));

        let deserialized: ClassificationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, result);
    }
}
