//! Integration tests for the complete strip reading pipeline
//!
//! These tests validate the end-to-end workflow including:
//! - Photo acquisition from uploaded files and camera frames
//! - Color averaging and reference matching
//! - Risk and advice lookup
//! - Gauge rendering
//! - Error handling for edge cases
//!
//! Test photos are synthesized with the `image` crate into temporary files.

use image::{DynamicImage, Rgb, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use strip_colorscan::presenter::{render_report, render_text};
use strip_colorscan::risk::advice;
use strip_colorscan::{
    analyze_strip, AnalysisError, Analyte, CameraFrame, Gauge, ImageSource, Level, Locale, SampleImage,
    StripAnalyzer, UploadedFile,
};

fn write_uniform(dir: &Path, name: &str, color: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(32, 16, Rgb(color))
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

fn encode_png(image: RgbImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

// ============================================================================
// Reference readings
// ============================================================================

#[test]
fn test_protein_plus2_from_uploaded_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_uniform(dir.path(), "protein.png", [255, 210, 100]);

    let result = analyze_strip(&UploadedFile::new(&path), Analyte::Protein, Locale::Th).unwrap();

    assert_eq!(result.level, Level::Plus2);
    assert_eq!(result.risk_percent, 65);
    assert_eq!(result.advice, advice(Level::Plus2, Locale::Th));
}

#[test]
fn test_glucose_negative_from_uploaded_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_uniform(dir.path(), "glucose.PNG", [180, 220, 255]);

    let result = analyze_strip(&UploadedFile::new(&path), Analyte::Glucose, Locale::Th).unwrap();

    assert_eq!(result.level, Level::Negative);
    assert_eq!(result.risk_percent, 10);
    assert_eq!(result.advice, advice(Level::Negative, Locale::Th));
}

#[test]
fn test_every_reference_tone_reads_back_its_level() {
    for analyte in Analyte::ALL {
        let analyzer = StripAnalyzer::new(analyte);
        for entry in analyte.reference_table().iter() {
            let sample = SampleImage::new(RgbImage::from_pixel(6, 6, entry.color)).unwrap();
            let result = analyzer.classify(&sample).unwrap();
            assert_eq!(result.level, entry.level, "{} {}", analyte, entry.level);
            assert_eq!(result.distance, 0.0);
        }
    }
}

#[test]
fn test_mixed_pixels_average_before_matching() {
    // Half +, half +++ averages to (80, 165, 237.5), nearest to glucose ++
    let mut raster = RgbImage::new(2, 2);
    for (x, _, pixel) in raster.enumerate_pixels_mut() {
        *pixel = if x == 0 { Rgb([130, 200, 255]) } else { Rgb([30, 130, 220]) };
    }

    let result = StripAnalyzer::new(Analyte::Glucose).classify_raster(&raster).unwrap();
    assert_eq!(result.level, Level::Plus2);
    assert_eq!(result.mean_color.red, 80.0);
    assert_eq!(result.mean_color.green, 165.0);
    assert_eq!(result.mean_color.blue, 237.5);
}

#[test]
fn test_jpeg_upload_reads_close_to_reference() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strip.jpg");
    RgbImage::from_pixel(64, 64, Rgb([255, 190, 50])).save(&path).unwrap();

    let result = analyze_strip(&UploadedFile::new(&path), Analyte::Protein, Locale::En).unwrap();

    // Lossy encoding shifts the mean slightly but not across levels
    assert_eq!(result.level, Level::Plus3);
    assert_eq!(result.risk_percent, 90);
    assert!(result.distance < 10.0);
}

// ============================================================================
// Analyte switching
// ============================================================================

#[test]
fn test_switching_analyte_changes_level_and_gauge_color() {
    let raster = RgbImage::from_pixel(4, 4, Rgb([255, 230, 150]));
    let sample = SampleImage::new(raster).unwrap();

    let protein = StripAnalyzer::new(Analyte::Protein).classify(&sample).unwrap();
    let glucose = StripAnalyzer::new(Analyte::Glucose).classify(&sample).unwrap();

    assert_eq!(protein.level, Level::Plus1);
    assert_eq!(glucose.level, Level::Negative);

    assert_eq!(Gauge::for_result(&glucose).bar_color(), Rgb([0x4d, 0xa3, 0xff]));
    assert_eq!(Gauge::for_result(&protein).bar_color(), Rgb([0xf4, 0xc4, 0x30]));
    assert_eq!(Gauge::for_result(&protein).value(), 35.0);
}

// ============================================================================
// Camera frames
// ============================================================================

#[test]
fn test_camera_frame_reading() {
    let bytes = encode_png(RgbImage::from_pixel(10, 10, Rgb([80, 170, 240])));
    let frame = CameraFrame::from_bytes(bytes);

    let result = analyze_strip(&frame, Analyte::Glucose, Locale::En).unwrap();
    assert_eq!(result.level, Level::Plus2);
    assert!(render_text(&result).contains("Estimated risk: 65%"));
}

#[test]
fn test_upload_and_camera_agree() {
    let dir = tempfile::tempdir().unwrap();
    let raster = RgbImage::from_pixel(8, 8, Rgb([130, 200, 255]));
    let path = dir.path().join("strip.png");
    raster.save(&path).unwrap();

    let from_file = analyze_strip(&UploadedFile::new(&path), Analyte::Glucose, Locale::Th).unwrap();
    let from_camera =
        analyze_strip(&CameraFrame::from_bytes(encode_png(raster)), Analyte::Glucose, Locale::Th).unwrap();

    assert_eq!(from_file, from_camera);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_upload_file_not_found() {
    let result = analyze_strip(&UploadedFile::new("nonexistent_file.jpg"), Analyte::Glucose, Locale::Th);

    match result {
        Err(AnalysisError::ImageLoadError { .. }) => {}
        other => panic!("Expected ImageLoadError, got: {:?}", other),
    }
}

#[test]
fn test_upload_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strip.gif");
    std::fs::write(&path, b"GIF89a").unwrap();

    match analyze_strip(&UploadedFile::new(&path), Analyte::Protein, Locale::Th) {
        Err(AnalysisError::UnsupportedFormat { format }) => assert_eq!(format, "gif"),
        other => panic!("Expected UnsupportedFormat, got: {:?}", other),
    }
}

#[test]
fn test_corrupt_upload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strip.png");
    std::fs::write(&path, b"\x89PNG\r\n\x1a\ntruncated").unwrap();

    let err = analyze_strip(&UploadedFile::new(&path), Analyte::Glucose, Locale::Th).unwrap_err();
    assert!(matches!(err, AnalysisError::ImageLoadError { .. }));
    assert!(err.is_recoverable());
}

#[test]
fn test_non_rgb_raw_raster_is_invalid() {
    let err = SampleImage::from_raw(4, 4, 1, vec![0u8; 16]).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidImage { .. }));
}

#[test]
fn test_empty_camera_frame_is_invalid() {
    let err = analyze_strip(&CameraFrame::from_bytes(Vec::new()), Analyte::Glucose, Locale::Th).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidImage { .. }));
}

// ============================================================================
// Gauge output
// ============================================================================

#[test]
fn test_gauge_png_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gauge.png");

    let result = StripAnalyzer::new(Analyte::Protein)
        .classify_raster(&RgbImage::from_pixel(3, 3, Rgb([255, 190, 50])))
        .unwrap();
    Gauge::for_result(&result).save_png(300, &path).unwrap();

    let written = image::open(&path).unwrap().to_rgb8();
    assert_eq!(written.width(), 300);
    assert!(written.pixels().any(|p| *p == Rgb([0xf4, 0xc4, 0x30])));
}

#[test]
fn test_report_shows_acquired_photo_above_gauge() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_uniform(dir.path(), "strip.png", [30, 130, 220]);
    let upload = UploadedFile::new(&path);

    let sample = upload.acquire().unwrap();
    let result = StripAnalyzer::with_locale(Analyte::Glucose, Locale::En)
        .classify(&sample)
        .unwrap();
    assert_eq!(result.level, Level::Plus3);

    let dial = Gauge::for_result(&result);
    let report = render_report(&sample, &dial, 320).unwrap();
    let gauge_image = dial.render(320).unwrap();

    // 32x16 photo scales to 320x160
    assert_eq!(report.height(), 160 + gauge_image.height());
    assert_eq!(report.get_pixel(0, 160), gauge_image.get_pixel(0, 0));
    let top = report.get_pixel(160, 80);
    assert!(top.0[0].abs_diff(30) <= 1 && top.0[1].abs_diff(130) <= 1 && top.0[2] >= 219);
}
