//! Risk score and advice lookup
//!
//! Pure mappings from a [`Level`] to a fixed risk percentage and a fixed
//! advice text. Scores are screening aids only, not clinical values.

pub mod advice;

pub use advice::advice;

use serde::{Deserialize, Serialize};

use crate::constants::risk;
use crate::locale::Locale;
use crate::reference::Level;

/// Fixed risk percentage for a level
pub fn risk_percentage(level: Level) -> u8 {
    match level {
        Level::Negative => risk::NEGATIVE_PERCENT,
        Level::Plus1 => risk::PLUS_1_PERCENT,
        Level::Plus2 => risk::PLUS_2_PERCENT,
        Level::Plus3 => risk::PLUS_3_PERCENT,
    }
}

/// Risk score and advice attached to a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: Level,
    pub risk_percent: u8,
    pub advice: String,
}

impl RiskAssessment {
    pub fn for_level(level: Level, locale: Locale) -> Self {
        Self {
            level,
            risk_percent: risk_percentage(level),
            advice: advice(level, locale).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_values() {
        assert_eq!(risk_percentage(Level::Negative), 10);
        assert_eq!(risk_percentage(Level::Plus1), 35);
        assert_eq!(risk_percentage(Level::Plus2), 65);
        assert_eq!(risk_percentage(Level::Plus3), 90);
    }

    #[test]
    fn test_risk_non_decreasing_with_severity() {
        let scores: Vec<u8> = Level::ALL.iter().map(|l| risk_percentage(*l)).collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_assessment_for_level() {
        let assessment = RiskAssessment::for_level(Level::Plus2, Locale::Th);
        assert_eq!(assessment.risk_percent, 65);
        assert_eq!(assessment.advice, advice(Level::Plus2, Locale::Th));
    }
}
