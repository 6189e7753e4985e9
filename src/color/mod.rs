//! Color measurement and reference matching
//!
//! This module reduces a strip photo to one mean color, matches it
//! against a reference table, and converts colors for reporting.

pub mod averaging;
pub mod conversion;
pub mod matching;

pub use averaging::{average_color, MeanColor};
pub use conversion::ColorConverter;
pub use matching::{MatchResult, ReferenceMatcher};
