//! Nearest-reference classification
//!
//! A fixed nearest-centroid classifier over the four colors of a
//! [`ReferenceTable`], using Euclidean distance in RGB space.

use image::Rgb;
use log::debug;
use serde::{Deserialize, Serialize};

use super::averaging::MeanColor;
use crate::reference::{Level, ReferenceTable};

/// Outcome of matching one color against a table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Level of the closest reference color
    pub level: Level,
    /// Euclidean RGB distance to that reference color
    pub distance: f64,
}

/// Matches measured colors against one reference table
pub struct ReferenceMatcher<'a> {
    table: &'a ReferenceTable,
}

impl<'a> ReferenceMatcher<'a> {
    pub fn new(table: &'a ReferenceTable) -> Self {
        Self { table }
    }

    /// Find the level whose reference color is closest to `color`
    ///
    /// Entries are scanned in severity order and only a strictly smaller
    /// distance replaces the current best, so when two references are
    /// equally close the less severe level wins.
    pub fn match_color(&self, color: MeanColor) -> MatchResult {
        let entries = self.table.entries();
        let mut best = MatchResult {
            level: entries[0].level,
            distance: color.distance_to(entries[0].color),
        };

        for entry in &entries[1..] {
            let distance = color.distance_to(entry.color);
            if distance < best.distance {
                best = MatchResult {
                    level: entry.level,
                    distance,
                };
            }
        }

        debug!(
            "Matched ({:.1}, {:.1}, {:.1}) to {} at distance {:.2}",
            color.red, color.green, color.blue, best.level, best.distance
        );

        best
    }

    /// Reference color of the matched level
    pub fn reference_color(&self, result: &MatchResult) -> Rgb<u8> {
        self.table.color_of(result.level)
    }
}
