//! Radial risk gauge
//!
//! A half-circle dial over a 0-100 axis. The outer ring is split into the
//! low / moderate / high bands; an inner arc in the analyte's color sweeps
//! from 0 on the left to the reported risk value, and the value itself is
//! printed as "NN%" in seven-segment digits inside the dial.

use image::{Rgb, RgbImage};
use log::debug;
use std::f32::consts::PI;
use std::path::Path;

use crate::analyzer::ClassificationResult;
use crate::constants::gauge;
use crate::error::{AnalysisError, Result};

/// Band ring between these fractions of the outer radius
const BAND_INNER_RATIO: f32 = 0.55;
/// Value bar between these fractions of the outer radius
const BAR_INNER_RATIO: f32 = 0.65;
const BAR_OUTER_RATIO: f32 = 0.90;
/// Tick marks start slightly inside the band ring
const TICK_INNER_RATIO: f32 = 0.50;
/// Readout glyph height and baseline offset above the dial center
const READOUT_HEIGHT_RATIO: f32 = 0.25;
const READOUT_BASELINE_RATIO: f32 = 0.08;

/// Seven-segment masks for 0-9; bits 0-5 run a, b, c, d, e, f clockwise
/// from the top, bit 6 is the middle bar
const DIGIT_SEGMENTS: [u8; 10] = [
    0b011_1111,
    0b000_0110,
    0b101_1011,
    0b100_1111,
    0b110_0110,
    0b110_1101,
    0b111_1101,
    0b000_0111,
    0b111_1111,
    0b110_1111,
];

/// Colored range of the gauge axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeBand {
    pub start: f32,
    pub end: f32,
    pub color: Rgb<u8>,
}

/// Risk gauge for one reading
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    value: f32,
    bar_color: Rgb<u8>,
    bands: [GaugeBand; 3],
}

impl Gauge {
    /// Create a gauge; `value` is clamped to the 0-100 axis
    pub fn new(value: f32, bar_color: Rgb<u8>) -> Self {
        Self {
            value: value.clamp(gauge::AXIS_MIN, gauge::AXIS_MAX),
            bar_color,
            bands: [
                GaugeBand {
                    start: gauge::AXIS_MIN,
                    end: gauge::LOW_BAND_END,
                    color: Rgb(gauge::LOW_BAND_RGB),
                },
                GaugeBand {
                    start: gauge::LOW_BAND_END,
                    end: gauge::MODERATE_BAND_END,
                    color: Rgb(gauge::MODERATE_BAND_RGB),
                },
                GaugeBand {
                    start: gauge::MODERATE_BAND_END,
                    end: gauge::AXIS_MAX,
                    color: Rgb(gauge::HIGH_BAND_RGB),
                },
            ],
        }
    }

    /// Gauge showing a reading's risk in its analyte's color
    pub fn for_result(result: &ClassificationResult) -> Self {
        Self::new(f32::from(result.risk_percent), result.analyte.gauge_color())
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn bar_color(&self) -> Rgb<u8> {
        self.bar_color
    }

    pub fn bands(&self) -> &[GaugeBand; 3] {
        &self.bands
    }

    /// Band containing `value`; bands are half-open except the last,
    /// which includes the axis maximum
    pub fn band_at(&self, value: f32) -> &GaugeBand {
        self.bands
            .iter()
            .find(|band| value < band.end)
            .unwrap_or(&self.bands[2])
    }

    /// Rasterize the gauge
    ///
    /// The image is `width` pixels wide and a little over half as tall.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidParameter` if `width` is outside the
    /// supported range.
    pub fn render(&self, width: u32) -> Result<RgbImage> {
        if !(gauge::MIN_WIDTH..=gauge::MAX_WIDTH).contains(&width) {
            return Err(AnalysisError::invalid_parameter(
                "gauge width",
                format!("{} (allowed {}-{})", width, gauge::MIN_WIDTH, gauge::MAX_WIDTH),
            ));
        }

        let geometry = Geometry::new(width);
        let mut canvas = RgbImage::from_pixel(width, geometry.height, Rgb(gauge::BACKGROUND_RGB));
        let tick_values: Vec<f32> = std::iter::once(gauge::AXIS_MIN)
            .chain(self.bands.iter().map(|b| b.end))
            .collect();

        for (x, y, pixel) in canvas.enumerate_pixels_mut() {
            let dx = x as f32 + 0.5 - geometry.cx;
            let dy = geometry.cy - (y as f32 + 0.5);
            if dy < 0.0 {
                continue;
            }

            let ratio = (dx * dx + dy * dy).sqrt() / geometry.radius;
            if !(TICK_INNER_RATIO..=1.0).contains(&ratio) {
                continue;
            }

            let value = axis_value(dx, dy);

            if ratio >= BAND_INNER_RATIO {
                *pixel = self.band_at(value).color;
            }

            if (BAR_INNER_RATIO..=BAR_OUTER_RATIO).contains(&ratio)
                && self.value > gauge::AXIS_MIN
                && value <= self.value
            {
                *pixel = self.bar_color;
            }

            let on_tick = tick_values
                .iter()
                .any(|&tick| distance_to_ray(dx, dy, tick) <= geometry.tick_half_width);
            if on_tick {
                *pixel = Rgb(gauge::TICK_RGB);
            }
        }

        draw_readout(&mut canvas, &geometry, self.value);

        debug!(
            "Rendered {}x{} gauge at {:.0}%",
            width, geometry.height, self.value
        );

        Ok(canvas)
    }

    /// Render and save the gauge as PNG
    pub fn save_png(&self, width: u32, path: &Path) -> Result<()> {
        let canvas = self.render(width)?;
        canvas
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| AnalysisError::render(format!("Failed to save gauge to {}", path.display()), e))
    }
}

struct Geometry {
    height: u32,
    cx: f32,
    cy: f32,
    radius: f32,
    tick_half_width: f32,
}

impl Geometry {
    fn new(width: u32) -> Self {
        let w = width as f32;
        let margin = (w * 0.05).round();
        Self {
            height: width / 2 + 2 * margin as u32,
            cx: w / 2.0,
            cy: w / 2.0 + margin,
            radius: w * 0.45,
            tick_half_width: (w / 400.0).max(0.75),
        }
    }

    #[cfg(test)]
    fn pixel_at(&self, value: f32, ratio: f32) -> (u32, u32) {
        let angle = PI * (1.0 - value / gauge::AXIS_MAX);
        let r = self.radius * ratio;
        let x = self.cx + r * angle.cos();
        let y = self.cy - r * angle.sin();
        (x.floor() as u32, y.floor() as u32)
    }
}

/// One character cell of the readout
struct Glyph {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    stroke: i64,
}

impl Glyph {
    fn draw_digit(&self, canvas: &mut RgbImage, digit: usize, color: Rgb<u8>) {
        let Glyph { x, y, width: w, height: h, stroke: t } = *self;
        let half = h / 2;
        let segments = [
            (x, y, w, t),
            (x + w - t, y, t, half),
            (x + w - t, y + half, t, h - half),
            (x, y + h - t, w, t),
            (x, y + half, t, h - half),
            (x, y, t, half),
            (x, y + half - t / 2, w, t),
        ];

        let mask = DIGIT_SEGMENTS[digit % 10];
        for (bit, &(sx, sy, sw, sh)) in segments.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                fill_rect(canvas, sx, sy, sw, sh, color);
            }
        }
    }

    fn draw_percent(&self, canvas: &mut RgbImage, color: Rgb<u8>) {
        let Glyph { x, y, width: w, height: h, stroke: t } = *self;
        let dot = (w / 3).max(t);
        fill_rect(canvas, x, y, dot, dot, color);
        fill_rect(canvas, x + w - dot, y + h - dot, dot, dot, color);

        // Diagonal from the top-right to the bottom-left corner: h*X + w*Y = w*h
        let (wf, hf) = (w as f32, h as f32);
        let norm = (wf * wf + hf * hf).sqrt();
        for py in 0..h {
            for px in 0..w {
                let (cx, cy) = (px as f32 + 0.5, py as f32 + 0.5);
                if (hf * cx + wf * cy - wf * hf).abs() / norm <= t as f32 / 2.0 {
                    fill_rect(canvas, x + px, y + py, 1, 1, color);
                }
            }
        }
    }
}

/// Print `value` as "NN%" centered in the hole of the dial
fn draw_readout(canvas: &mut RgbImage, geometry: &Geometry, value: f32) {
    let text = format!("{:.0}%", value);
    let height = (geometry.radius * READOUT_HEIGHT_RATIO).round().max(5.0) as i64;
    let width = height * 11 / 20;
    let gap = (height / 5).max(1);
    let stroke = (height / 8).max(1);

    let count = text.chars().count() as i64;
    let total = count * width + (count - 1) * gap;
    let mut x = geometry.cx.round() as i64 - total / 2;
    let y = (geometry.cy - geometry.radius * READOUT_BASELINE_RATIO).round() as i64 - height;
    let color = Rgb(gauge::READOUT_RGB);

    for ch in text.chars() {
        let glyph = Glyph { x, y, width, height, stroke };
        match ch.to_digit(10) {
            Some(digit) => glyph.draw_digit(canvas, digit as usize, color),
            None => glyph.draw_percent(canvas, color),
        }
        x += width + gap;
    }
}

/// Fill a rectangle, clipped to the canvas
fn fill_rect(canvas: &mut RgbImage, x: i64, y: i64, w: i64, h: i64, color: Rgb<u8>) {
    let x_end = (x + w).min(i64::from(canvas.width()));
    let y_end = (y + h).min(i64::from(canvas.height()));
    for py in y.max(0)..y_end {
        for px in x.max(0)..x_end {
            canvas.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// Axis value at an offset from the dial center (upper half plane)
fn axis_value(dx: f32, dy: f32) -> f32 {
    let angle = dy.atan2(dx);
    (1.0 - angle / PI) * gauge::AXIS_MAX
}

/// Distance from a point to the ray pointing at `value`; points behind
/// the center count as infinitely far
fn distance_to_ray(dx: f32, dy: f32, value: f32) -> f32 {
    let angle = PI * (1.0 - value / gauge::AXIS_MAX);
    let (sin, cos) = angle.sin_cos();
    if dx * cos + dy * sin < 0.0 {
        return f32::INFINITY;
    }
    (dx * sin - dy * cos).abs()
}
