//! Reference values for strip reading
//!
//! This module contains compile-time constants for the reference colors,
//! risk scores and gauge palette. Values are ordered by severity:
//! Negative, +, ++, +++.

/// Glucose pad reference colors (blue tones)
pub mod glucose {
    pub const NEGATIVE_RGB: [u8; 3] = [180, 220, 255];
    pub const PLUS_1_RGB: [u8; 3] = [130, 200, 255];
    pub const PLUS_2_RGB: [u8; 3] = [80, 170, 240];
    pub const PLUS_3_RGB: [u8; 3] = [30, 130, 220];

    /// Gauge bar color used when reporting a glucose reading
    pub const GAUGE_BAR_RGB: [u8; 3] = [0x4d, 0xa3, 0xff];
}

/// Protein pad reference colors (yellow tones)
pub mod protein {
    pub const NEGATIVE_RGB: [u8; 3] = [255, 245, 200];
    pub const PLUS_1_RGB: [u8; 3] = [255, 230, 150];
    pub const PLUS_2_RGB: [u8; 3] = [255, 210, 100];
    pub const PLUS_3_RGB: [u8; 3] = [255, 190, 50];

    /// Gauge bar color used when reporting a protein reading
    pub const GAUGE_BAR_RGB: [u8; 3] = [0xf4, 0xc4, 0x30];
}

/// Risk percentages per level (not clinically validated)
pub mod risk {
    pub const NEGATIVE_PERCENT: u8 = 10;
    pub const PLUS_1_PERCENT: u8 = 35;
    pub const PLUS_2_PERCENT: u8 = 65;
    pub const PLUS_3_PERCENT: u8 = 90;
}

/// Gauge scale and band palette
pub mod gauge {
    /// Lower and upper end of the gauge axis
    pub const AXIS_MIN: f32 = 0.0;
    pub const AXIS_MAX: f32 = 100.0;

    /// Band boundaries: [0,30) low, [30,60) moderate, [60,100] high
    pub const LOW_BAND_END: f32 = 30.0;
    pub const MODERATE_BAND_END: f32 = 60.0;

    pub const LOW_BAND_RGB: [u8; 3] = [0xd4, 0xf4, 0xdd];
    pub const MODERATE_BAND_RGB: [u8; 3] = [0xff, 0xf3, 0xcd];
    pub const HIGH_BAND_RGB: [u8; 3] = [0xf8, 0xd7, 0xda];

    /// Background, tick and bar-track colors of the rendered gauge
    pub const BACKGROUND_RGB: [u8; 3] = [255, 255, 255];
    pub const TICK_RGB: [u8; 3] = [0x44, 0x44, 0x44];
    /// Color of the "NN%" readout inside the dial
    pub const READOUT_RGB: [u8; 3] = [0x22, 0x22, 0x22];

    /// Default rendered width in pixels
    pub const DEFAULT_WIDTH: u32 = 400;
    pub const MIN_WIDTH: u32 = 64;
    pub const MAX_WIDTH: u32 = 4096;
}

/// Accepted upload extensions
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_monotonic() {
        assert!(risk::NEGATIVE_PERCENT <= risk::PLUS_1_PERCENT);
        assert!(risk::PLUS_1_PERCENT <= risk::PLUS_2_PERCENT);
        assert!(risk::PLUS_2_PERCENT <= risk::PLUS_3_PERCENT);
        assert!(risk::PLUS_3_PERCENT <= 100);
    }

    #[test]
    fn test_gauge_bands_ordered() {
        assert!(gauge::AXIS_MIN < gauge::LOW_BAND_END);
        assert!(gauge::LOW_BAND_END < gauge::MODERATE_BAND_END);
        assert!(gauge::MODERATE_BAND_END < gauge::AXIS_MAX);
        assert!(gauge::MIN_WIDTH <= gauge::DEFAULT_WIDTH);
        assert!(gauge::DEFAULT_WIDTH <= gauge::MAX_WIDTH);
    }

    #[test]
    fn test_reference_tones_darken_with_severity() {
        // Glucose pads lose red as they darken, protein pads lose blue
        assert!(glucose::NEGATIVE_RGB[0] > glucose::PLUS_1_RGB[0]);
        assert!(glucose::PLUS_1_RGB[0] > glucose::PLUS_2_RGB[0]);
        assert!(glucose::PLUS_2_RGB[0] > glucose::PLUS_3_RGB[0]);
        assert!(protein::NEGATIVE_RGB[2] > protein::PLUS_1_RGB[2]);
        assert!(protein::PLUS_1_RGB[2] > protein::PLUS_2_RGB[2]);
        assert!(protein::PLUS_2_RGB[2] > protein::PLUS_3_RGB[2]);
    }
}
