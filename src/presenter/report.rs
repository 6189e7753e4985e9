//! Text and JSON reports

use crate::analyzer::ClassificationResult;
use crate::error::{AnalysisError, Result};
use crate::locale::Locale;

/// Fixed user-facing strings for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub disclaimer: &'static str,
    pub analyte: &'static str,
    pub result: &'static str,
    pub risk: &'static str,
    pub mean_color: &'static str,
    pub no_image: &'static str,
}

const LABELS_TH: Labels = Labels {
    title: "🧪 ระบบวิเคราะห์แถบตรวจปัสสาวะ",
    subtitle: "Glucose / Protein (Cybow 2GP)",
    disclaimer: "⚠️ โปรแกรมนี้เป็นเพียงการตรวจสอบเบื้องต้น ไม่ใช่การวินิจฉัยโรค หากมีความผิดปกติควรพบแพทย์",
    analyte: "ชนิดการตรวจ",
    result: "ผลตรวจ",
    risk: "ความเสี่ยงโดยประมาณ",
    mean_color: "สีเฉลี่ย",
    no_image: "ยังไม่มีภาพแถบตรวจ",
};

const LABELS_EN: Labels = Labels {
    title: "🧪 Urine Strip Analyzer",
    subtitle: "Glucose / Protein (Cybow 2GP)",
    disclaimer: "⚠️ This program is a preliminary screening aid only and NOT a medical diagnosis. See a doctor if anything looks abnormal.",
    analyte: "Test",
    result: "Result",
    risk: "Estimated risk",
    mean_color: "Mean color",
    no_image: "No strip image supplied",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::Th => &LABELS_TH,
            Locale::En => &LABELS_EN,
        }
    }
}

/// Human-readable report of a reading, labelled in the reading's locale
pub fn render_text(result: &ClassificationResult) -> String {
    let labels = Labels::for_locale(result.locale);
    let lines = [
        labels.title.to_string(),
        labels.subtitle.to_string(),
        String::new(),
        labels.disclaimer.to_string(),
        String::new(),
        format!("{}: {}", labels.analyte, result.analyte),
        format!("{}: {}", labels.result, result.level),
        format!("{}: {}%", labels.risk, result.risk_percent),
        format!(
            "{}: {} (ΔE {:.1} / {})",
            labels.mean_color, result.mean_hex, result.delta_e, result.reference_hex
        ),
        String::new(),
        result.advice.clone(),
        String::new(),
    ];
    lines.join("\n")
}

/// Pretty JSON document of a reading
pub fn render_json(result: &ClassificationResult) -> Result<String> {
    serde_json::to_string_pretty(result).map_err(|e| AnalysisError::render("Failed to serialize result", e))
}
