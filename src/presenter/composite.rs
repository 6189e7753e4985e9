//! Photo and gauge stacked into one image
//!
//! The strip photo is scaled to fit a square as wide as the gauge, centered
//! on a white strip, and the rendered gauge is placed directly below it.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use log::debug;
use std::path::Path;

use super::gauge::Gauge;
use crate::constants::gauge;
use crate::error::{AnalysisError, Result};
use crate::image_loader::SampleImage;

/// Render the photo above the gauge, both `width` pixels wide
///
/// # Errors
///
/// Returns `AnalysisError::InvalidParameter` if `width` is outside the
/// supported gauge range.
pub fn render_report(sample: &SampleImage, dial: &Gauge, width: u32) -> Result<RgbImage> {
    let gauge_image = dial.render(width)?;

    let (photo_width, photo_height) = sample.dimensions();
    let scale = (width as f32 / photo_width as f32).min(width as f32 / photo_height as f32);
    let scaled_width = ((photo_width as f32 * scale).round() as u32).clamp(1, width);
    let scaled_height = ((photo_height as f32 * scale).round() as u32).clamp(1, width);
    let photo = imageops::resize(sample.raster(), scaled_width, scaled_height, FilterType::Triangle);

    let mut canvas = RgbImage::from_pixel(
        width,
        scaled_height + gauge_image.height(),
        Rgb(gauge::BACKGROUND_RGB),
    );
    let photo_x = i64::from((width - scaled_width) / 2);
    imageops::overlay(&mut canvas, &photo, photo_x, 0);
    imageops::overlay(&mut canvas, &gauge_image, 0, i64::from(scaled_height));

    debug!(
        "Composed report {}x{} (photo {}x{} scaled to {}x{})",
        canvas.width(),
        canvas.height(),
        photo_width,
        photo_height,
        scaled_width,
        scaled_height
    );
    Ok(canvas)
}

/// Render the report and save it as PNG
pub fn save_report(sample: &SampleImage, dial: &Gauge, width: u32, path: &Path) -> Result<()> {
    let canvas = render_report(sample, dial, width)?;
    canvas
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| AnalysisError::render(format!("Failed to save report to {}", path.display()), e))
}
