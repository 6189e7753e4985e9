//! Semi-quantitative result levels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semi-quantitative grade read from a strip pad
///
/// Ordering follows severity, so `Level::Negative < Level::Plus3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "Negative")]
    Negative,
    #[serde(rename = "+")]
    Plus1,
    #[serde(rename = "++")]
    Plus2,
    #[serde(rename = "+++")]
    Plus3,
}

impl Level {
    /// All levels in severity order
    pub const ALL: [Level; 4] = [Level::Negative, Level::Plus1, Level::Plus2, Level::Plus3];

    /// Symbol printed on strip charts ("Negative", "+", "++", "+++")
    pub fn symbol(&self) -> &'static str {
        match self {
            Level::Negative => "Negative",
            Level::Plus1 => "+",
            Level::Plus2 => "++",
            Level::Plus3 => "+++",
        }
    }

    /// Zero-based severity index, also the position in a reference table
    pub fn index(&self) -> usize {
        match self {
            Level::Negative => 0,
            Level::Plus1 => 1,
            Level::Plus2 => 2,
            Level::Plus3 => 3,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
