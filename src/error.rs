//! Error types for the strip_colorscan library

use thiserror::Error;

/// Result type alias for strip_colorscan operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for strip acquisition, classification and presentation
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Raster is empty, not 3-channel, or its buffer does not match its dimensions
    #[error("Invalid image: {reason}")]
    InvalidImage { reason: String },

    /// Image file or frame could not be read or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File extension or sniffed format is not one of jpg, jpeg, png
    #[error("Unsupported image format: {format} (expected jpg, jpeg or png)")]
    UnsupportedFormat { format: String },

    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Gauge rendering or saving failed
    #[error("Render error: {message}")]
    RenderError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AnalysisError {
    /// Create an invalid image error
    pub fn invalid_image(reason: impl Into<String>) -> Self {
        Self::InvalidImage {
            reason: reason.into(),
        }
    }

    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a render error with context
    pub fn render<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::RenderError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
        }
    }

    /// Check if this error can be fixed by supplying a different photo
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidImage { .. }
                | AnalysisError::ImageLoadError { .. }
                | AnalysisError::UnsupportedFormat { .. }
        )
    }

    /// Get user-friendly error description for display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::InvalidImage { .. } => {
                "The image could not be analyzed. Please take a clear color photo of the strip pad.".to_string()
            }
            AnalysisError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file and try again.".to_string()
            }
            AnalysisError::UnsupportedFormat { format } => {
                format!("Files of type '{}' are not accepted. Please use a JPG or PNG photo.", format)
            }
            AnalysisError::ConfigError { .. } => {
                "The configuration file could not be used. Please check its contents.".to_string()
            }
            AnalysisError::InvalidParameter { parameter, .. } => {
                format!("Please select a valid value for '{}'.", parameter)
            }
            AnalysisError::RenderError { .. } => {
                "The result was computed but the gauge could not be saved.".to_string()
            }
        }
    }
}
