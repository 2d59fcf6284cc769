//! Translation and language models.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_lang: String,
}

impl TranslateRequest {
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_lang: target_lang.into(),
        }
    }
}

/// The backend reports translation problems in-band (`success` false plus an
/// `error` string) rather than with an HTTP error status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub target_language: String,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    #[serde(rename = "nativeName")]
    pub native_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesResponse {
    #[serde(default)]
    pub languages: Vec<Language>,
}

/// The ten languages the platform ships with, for offline pickers; the live
/// list comes from [`crate::api::TranslateApi::languages`].
pub static SUPPORTED_LANGUAGES: Lazy<Vec<Language>> = Lazy::new(|| {
    [
        ("en", "English", "English"),
        ("hi", "Hindi", "हिन्दी"),
        ("bn", "Bengali", "বাংলা"),
        ("te", "Telugu", "తెలుగు"),
        ("ta", "Tamil", "தமிழ்"),
        ("mr", "Marathi", "मराठी"),
        ("gu", "Gujarati", "ગુજરાતી"),
        ("kn", "Kannada", "ಕನ್ನಡ"),
        ("ml", "Malayalam", "മലയാളം"),
        ("or", "Odia", "ଓଡ଼ିଆ"),
    ]
    .into_iter()
    .map(|(code, name, native_name)| Language {
        code: code.to_string(),
        name: name.to_string(),
        native_name: native_name.to_string(),
    })
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_uses_the_wire_casing() {
        let lang: Language = serde_json::from_str(
            r#"{"code": "hi", "name": "Hindi", "nativeName": "हिन्दी"}"#,
        )
        .unwrap();
        assert_eq!(lang.native_name, "हिन्दी");
        let json = serde_json::to_value(&lang).unwrap();
        assert!(json.get("nativeName").is_some());
        assert!(json.get("native_name").is_none());
    }

    #[test]
    fn ten_supported_languages() {
        assert_eq!(SUPPORTED_LANGUAGES.len(), 10);
        assert_eq!(SUPPORTED_LANGUAGES[0].code, "en");
    }

    #[test]
    fn failed_translation_is_in_band() {
        let result: TranslationResult = serde_json::from_str(
            r#"{"original_text": "x", "translated_text": "x", "target_language": "xx", "success": false, "error": "Unsupported language"}"#,
        )
        .unwrap();
        assert!(!result.success);
        assert!(result.error.is_some());
    }
}
