//! Fixed reference color tables

use image::Rgb;

use super::level::Level;
use crate::constants::{glucose, protein};

/// One reference color for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub level: Level,
    pub color: Rgb<u8>,
}

/// Four reference colors, one per level, in severity order
///
/// Tables can only be built from a full set of four colors, so every table
/// carries exactly the canonical levels and iteration order is
/// Negative, +, ++, +++.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceTable {
    entries: [ReferenceEntry; 4],
}

impl ReferenceTable {
    /// Build a table from colors listed in severity order
    pub const fn from_colors(colors: [[u8; 3]; 4]) -> Self {
        Self {
            entries: [
                ReferenceEntry {
                    level: Level::Negative,
                    color: Rgb(colors[0]),
                },
                ReferenceEntry {
                    level: Level::Plus1,
                    color: Rgb(colors[1]),
                },
                ReferenceEntry {
                    level: Level::Plus2,
                    color: Rgb(colors[2]),
                },
                ReferenceEntry {
                    level: Level::Plus3,
                    color: Rgb(colors[3]),
                },
            ],
        }
    }

    pub fn entries(&self) -> &[ReferenceEntry; 4] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReferenceEntry> {
        self.entries.iter()
    }

    /// Reference color for a level
    pub fn color_of(&self, level: Level) -> Rgb<u8> {
        self.entries[level.index()].color
    }
}

pub static GLUCOSE_REFERENCE: ReferenceTable = ReferenceTable::from_colors([
    glucose::NEGATIVE_RGB,
    glucose::PLUS_1_RGB,
    glucose::PLUS_2_RGB,
    glucose::PLUS_3_RGB,
]);

pub static PROTEIN_REFERENCE: ReferenceTable = ReferenceTable::from_colors([
    protein::NEGATIVE_RGB,
    protein::PLUS_1_RGB,
    protein::PLUS_2_RGB,
    protein::PLUS_3_RGB,
]);
