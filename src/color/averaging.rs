//! Mean color of a strip photo
//!
//! Every pixel contributes equally; channels are averaged independently.
//! Sums are accumulated in integers so a uniform raster of color C
//! averages to exactly C.

use image::{Rgb, RgbImage};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{AnalysisError, Result};

/// Mean RGB value in the 0-255 range, unrounded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl MeanColor {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Nearest 8-bit color
    pub fn to_rgb8(&self) -> Rgb<u8> {
        let quantize = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        Rgb([quantize(self.red), quantize(self.green), quantize(self.blue)])
    }

    /// Euclidean distance to an 8-bit color in RGB space
    pub fn distance_to(&self, color: Rgb<u8>) -> f64 {
        let Rgb([r, g, b]) = color;
        let dr = self.red - f64::from(r);
        let dg = self.green - f64::from(g);
        let db = self.blue - f64::from(b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl From<Rgb<u8>> for MeanColor {
    fn from(color: Rgb<u8>) -> Self {
        let Rgb([r, g, b]) = color;
        Self::new(f64::from(r), f64::from(g), f64::from(b))
    }
}

/// Compute the mean color of an RGB raster
///
/// # Errors
///
/// Returns `AnalysisError::InvalidImage` if the raster has no pixels.
pub fn average_color(image: &RgbImage) -> Result<MeanColor> {
    let (width, height) = image.dimensions();
    let pixel_count = u64::from(width) * u64::from(height);

    if pixel_count == 0 {
        return Err(AnalysisError::invalid_image(format!(
            "image has no pixels ({}x{})",
            width, height
        )));
    }

    let mut sums = [0u64; 3];
    for Rgb([r, g, b]) in image.pixels() {
        sums[0] += u64::from(*r);
        sums[1] += u64::from(*g);
        sums[2] += u64::from(*b);
    }

    let n = pixel_count as f64;
    let mean = MeanColor::new(sums[0] as f64 / n, sums[1] as f64 / n, sums[2] as f64 / n);

    debug!(
        "Averaged {} pixels: R={:.2} G={:.2} B={:.2}",
        pixel_count, mean.red, mean.green, mean.blue
    );

    Ok(mean)
}
