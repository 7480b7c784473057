//! Fixed bilingual UI strings.
//!
//! Every user-visible string lives here; handlers never build HTML beyond
//! picking one of these entries. The fragments are rendered verbatim,
//! inline styles included.

use serde::Deserialize;

use crate::model::classifier::Diagnosis;

/// The two values the language dropdown can take.
pub const ARABIC_SELECTOR: &str = "العربية 🇪🇬";
pub const ENGLISH_SELECTOR: &str = "English 🇬🇧";

/// Active UI language. The form starts in Arabic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Language {
    #[default]
    Arabic,
    English,
}

impl From<String> for Language {
    // The dropdown only ever submits one of the two selector strings;
    // anything that is not the Arabic value reads as English.
    fn from(value: String) -> Self {
        if value == ARABIC_SELECTOR {
            Language::Arabic
        } else {
            Language::English
        }
    }
}

impl Language {
    pub fn selector(self) -> &'static str {
        match self {
            Language::Arabic => ARABIC_SELECTOR,
            Language::English => ENGLISH_SELECTOR,
        }
    }
}

/// Title and subtitle banner for the page header.
pub fn banner(lang: Language) -> (&'static str, &'static str) {
    match lang {
        Language::Arabic => (
            "<div style='text-align:center; font-size: 28px; font-weight: bold; margin-bottom: 10px;'>🔬 كاشف الالتهاب الرئوي من صور الأشعة</div>",
            "<div style='text-align:center; font-size: 20px; font-weight:bold; color: #333; margin-bottom: 30px;'>استخدم النظام لتحليل أشعة الصدر واكتشاف الالتهاب خلال ثوانٍ</div>",
        ),
        Language::English => (
            "<div style='text-align:center; font-size: 28px; font-weight: bold; margin-bottom: 10px;'>🔬 Pneumonia Detection from X-Ray Images</div>",
            "<div style='text-align:center; font-size: 20px; font-weight:bold; color: #333; margin-bottom: 30px;'>Use this tool to analyze chest X-Rays and detect pneumonia in seconds.</div>",
        ),
    }
}

/// (analyze, reset) labels for the two action buttons.
pub fn button_labels(lang: Language) -> (&'static str, &'static str) {
    match lang {
        Language::Arabic => ("🔎 تحليل الصورة", "🔁 إعادة تعيين"),
        Language::English => ("🔎 Analyze Image", "🔁 Reset"),
    }
}

/// Shown when the analyze button is pressed with no upload.
pub fn upload_warning(lang: Language) -> &'static str {
    match lang {
        Language::Arabic => "<div style='color:orange;'>⚠ من فضلك ارفع صورة أولاً!</div>",
        Language::English => "<div style='color:orange;'>⚠ Please upload an image first!</div>",
    }
}

/// The styled result message for a classification outcome.
pub fn verdict(lang: Language, diagnosis: Diagnosis) -> &'static str {
    match (lang, diagnosis) {
        (Language::Arabic, Diagnosis::Pneumonia) => {
            "<div style='color:red; font-size:20px;'>🚨 تم الكشف: يوجد التهاب رئوي</div>"
        }
        (Language::Arabic, Diagnosis::Normal) => {
            "<div style='color:green; font-size:20px;'>✅ لا يوجد التهاب رئوي</div>"
        }
        (Language::English, Diagnosis::Pneumonia) => {
            "<div style='color:red; font-size:20px;'>🚨 Detected: Pneumonia</div>"
        }
        (Language::English, Diagnosis::Normal) => {
            "<div style='color:green; font-size:20px;'>✅ Clear: No Pneumonia</div>"
        }
    }
}
