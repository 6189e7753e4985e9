//! Advice text per level

use crate::locale::Locale;
use crate::reference::Level;

const ADVICE_TH: [&str; 4] = [
    "✅ ดื่มน้ำให้เพียงพอ ออกกำลังกายสม่ำเสมอ และตรวจสุขภาพประจำปี",
    "⚠️ ลดหวาน ลดเค็ม ดื่มน้ำเพิ่ม และพักผ่อนให้เพียงพอ",
    "⚠️⚠️ ควรควบคุมอาหาร ตรวจซ้ำ และปรึกษาบุคลากรทางการแพทย์",
    "🚨 ควรพบแพทย์เพื่อการตรวจยืนยันโดยเร็ว",
];

const ADVICE_EN: [&str; 4] = [
    "✅ Drink enough water, exercise regularly and get an annual health check-up.",
    "⚠️ Cut down on sugar and salt, drink more water and get enough rest.",
    "⚠️⚠️ Control your diet, repeat the test and consult a healthcare professional.",
    "🚨 See a doctor for a confirmatory test as soon as possible.",
];

/// Fixed advice text for a level
pub fn advice(level: Level, locale: Locale) -> &'static str {
    let table = match locale {
        Locale::Th => &ADVICE_TH,
        Locale::En => &ADVICE_EN,
    };
    table[level.index()]
}
