//! Image acquisition for strip photos
//!
//! Photos reach the analyzer from one of two places:
//! - an uploaded file (`.jpg`, `.jpeg` or `.png`)
//! - a camera frame handed over as encoded JPEG/PNG bytes
//!
//! Both implement [`ImageSource`] and produce a [`SampleImage`], an 8-bit
//! RGB raster. Any decoded color type (grayscale, RGBA, 16-bit) is converted
//! to 8-bit RGB and alpha is dropped, so the classifier never branches on
//! where or how the photo was captured.

use image::{DynamicImage, RgbImage};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::SUPPORTED_EXTENSIONS;
use crate::error::{AnalysisError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
            return None;
        }
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }

    /// Detect format from the leading bytes of an encoded image
    ///
    /// # Errors
    ///
    /// Returns `ImageLoadError` if the bytes match no known format and
    /// `UnsupportedFormat` if they are a known format other than JPEG/PNG.
    pub fn sniff(bytes: &[u8]) -> Result<ImageFormat> {
        let guessed = image::guess_format(bytes)
            .map_err(|e| AnalysisError::image_load("Unrecognized image data", e))?;

        match guessed {
            image::ImageFormat::Jpeg => Ok(ImageFormat::Jpeg),
            image::ImageFormat::Png => Ok(ImageFormat::Png),
            other => Err(AnalysisError::UnsupportedFormat {
                format: format!("{:?}", other).to_lowercase(),
            }),
        }
    }

    fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
        }
    }
}

/// Decoded 8-bit RGB raster of a strip photo
#[derive(Debug, Clone, PartialEq)]
pub struct SampleImage {
    raster: RgbImage,
}

impl SampleImage {
    /// Wrap an RGB raster
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidImage` if the raster has no pixels.
    pub fn new(raster: RgbImage) -> Result<Self> {
        let (width, height) = raster.dimensions();
        if width == 0 || height == 0 {
            return Err(AnalysisError::invalid_image(format!(
                "image has no pixels ({}x{})",
                width, height
            )));
        }
        Ok(Self { raster })
    }

    /// Build a sample from an interleaved raw buffer
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidImage` if `channels` is not 3, if the
    /// buffer length does not equal `width * height * channels`, or if the
    /// raster is empty.
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        if channels != 3 {
            return Err(AnalysisError::invalid_image(format!(
                "expected 3 color channels (RGB), got {}",
                channels
            )));
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .ok_or_else(|| {
                AnalysisError::invalid_image(format!("{}x{} RGB raster is too large", width, height))
            })?;
        if data.len() != expected {
            return Err(AnalysisError::invalid_image(format!(
                "buffer holds {} bytes, {}x{} RGB needs {}",
                data.len(),
                width,
                height,
                expected
            )));
        }

        let raster = RgbImage::from_raw(width, height, data).ok_or_else(|| {
            AnalysisError::invalid_image("buffer does not fit image dimensions")
        })?;
        Self::new(raster)
    }

    /// Convert any decoded image to 8-bit RGB
    pub fn from_dynamic(decoded: DynamicImage) -> Result<Self> {
        let color = decoded.color();
        if color != image::ColorType::Rgb8 {
            debug!("Converting {:?} image to 8-bit RGB", color);
        }
        Self::new(decoded.to_rgb8())
    }

    /// Decode JPEG or PNG bytes
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(AnalysisError::invalid_image("no image data"));
        }

        let format = ImageFormat::sniff(bytes)?;
        let decoded = image::load_from_memory_with_format(bytes, format.to_image_format())
            .map_err(|e| AnalysisError::image_load(format!("Failed to decode {:?} data", format), e))?;

        Self::from_dynamic(decoded)
    }

    pub fn raster(&self) -> &RgbImage {
        &self.raster
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.raster.dimensions()
    }
}

/// Anything that can hand over a strip photo
pub trait ImageSource {
    /// Short description for logs and error messages
    fn describe(&self) -> String;

    /// Produce the decoded photo
    fn acquire(&self) -> Result<SampleImage>;
}

/// Photo uploaded as a file
#[derive(Debug, Clone)]
pub struct UploadedFile {
    path: PathBuf,
}

impl UploadedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSource for UploadedFile {
    fn describe(&self) -> String {
        format!("upload {}", self.path.display())
    }

    fn acquire(&self) -> Result<SampleImage> {
        if ImageFormat::from_extension(&self.path).is_none() {
            let format = self
                .path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("none")
                .to_lowercase();
            return Err(AnalysisError::UnsupportedFormat { format });
        }

        let bytes = std::fs::read(&self.path).map_err(|e| {
            AnalysisError::image_load(format!("Failed to read image file: {}", self.path.display()), e)
        })?;

        let sample = SampleImage::decode(&bytes)?;
        let (width, height) = sample.dimensions();
        info!("Loaded {} ({}x{})", self.path.display(), width, height);
        Ok(sample)
    }
}

/// Frame captured by a camera, still encoded as JPEG or PNG
#[derive(Debug, Clone)]
pub struct CameraFrame {
    bytes: Vec<u8>,
}

impl CameraFrame {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Read one encoded frame, e.g. piped from a capture tool on stdin
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| AnalysisError::image_load("Failed to read camera frame", e))?;
        Ok(Self { bytes })
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl ImageSource for CameraFrame {
    fn describe(&self) -> String {
        format!("camera frame ({} bytes)", self.bytes.len())
    }

    fn acquire(&self) -> Result<SampleImage> {
        let sample = SampleImage::decode(&self.bytes)?;
        let (width, height) = sample.dimensions();
        info!("Captured camera frame ({}x{})", width, height);
        Ok(sample)
    }
}

/// Where the user takes the photo from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Upload,
    Camera,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Upload => f.write_str("upload"),
            SourceKind::Camera => f.write_str("camera"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = AnalysisError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upload" | "file" => Ok(SourceKind::Upload),
            "camera" | "cam" => Ok(SourceKind::Camera),
            _ => Err(AnalysisError::invalid_parameter("source", s)),
        }
    }
}
