//! Output language selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;

/// Language of advice text and report labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Thai (default)
    #[default]
    Th,
    /// English
    En,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Th => "th",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "th" | "thai" => Ok(Locale::Th),
            "en" | "english" => Ok(Locale::En),
            _ => Err(AnalysisError::invalid_parameter("locale", s)),
        }
    }
}
