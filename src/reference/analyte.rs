//! Analytes supported by the two-pad strip

use image::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::table::{ReferenceTable, GLUCOSE_REFERENCE, PROTEIN_REFERENCE};
use crate::constants;
use crate::error::AnalysisError;

/// Substance measured by a strip pad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Analyte {
    #[default]
    Glucose,
    Protein,
}

impl Analyte {
    pub const ALL: [Analyte; 2] = [Analyte::Glucose, Analyte::Protein];

    /// Reference table used to grade this analyte
    pub fn reference_table(&self) -> &'static ReferenceTable {
        match self {
            Analyte::Glucose => &GLUCOSE_REFERENCE,
            Analyte::Protein => &PROTEIN_REFERENCE,
        }
    }

    /// Gauge bar color: blue for glucose, yellow for protein
    pub fn gauge_color(&self) -> Rgb<u8> {
        match self {
            Analyte::Glucose => Rgb(constants::glucose::GAUGE_BAR_RGB),
            Analyte::Protein => Rgb(constants::protein::GAUGE_BAR_RGB),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Analyte::Glucose => "Glucose",
            Analyte::Protein => "Protein",
        }
    }
}

impl fmt::Display for Analyte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Analyte {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "glucose" | "glu" => Ok(Analyte::Glucose),
            "protein" | "pro" => Ok(Analyte::Protein),
            _ => Err(AnalysisError::invalid_parameter("analyte", s)),
        }
    }
}
