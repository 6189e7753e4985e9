//! Color space conversion utilities
//!
//! Provides the conversions used when reporting a reading:
//! - 8-bit and mean RGB to CIE Lab (D65)
//! - CIE76 color difference between two Lab colors
//! - Hex color representation

use image::Rgb;
use palette::{FromColor, Lab, Srgb};

use super::averaging::MeanColor;

/// Converter between strip colors, Lab and hex strings
#[derive(Debug, Default, Clone, Copy)]
pub struct ColorConverter;

impl ColorConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert a mean RGB value (0-255 per channel) to Lab
    pub fn mean_to_lab(&self, color: MeanColor) -> Lab {
        let srgb = Srgb::new(
            (color.red / 255.0) as f32,
            (color.green / 255.0) as f32,
            (color.blue / 255.0) as f32,
        );
        Lab::from_color(srgb)
    }

    /// Convert an 8-bit RGB color to Lab
    pub fn rgb_to_lab(&self, color: Rgb<u8>) -> Lab {
        self.mean_to_lab(MeanColor::from(color))
    }

    /// Compute Delta E (color difference) between two Lab colors
    ///
    /// Uses simple Euclidean distance (ΔE76). Reported alongside the RGB
    /// match for information; classification never depends on it.
    pub fn delta_e(&self, lab1: Lab, lab2: Lab) -> f32 {
        let dl = lab1.l - lab2.l;
        let da = lab1.a - lab2.a;
        let db = lab1.b - lab2.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Convert an 8-bit RGB color to a hex string (e.g., "#4DA3FF")
    pub fn rgb_to_hex(&self, color: Rgb<u8>) -> String {
        let Rgb([r, g, b]) = color;
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}
