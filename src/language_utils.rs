//! Language registry
//!
//! A fixed table of the language codes the front-end offers, with the
//! names shown next to them. Unknown codes are displayed as-is.

/// Sentinel source code asking the provider to detect the language
pub const AUTO_DETECT: &str = "auto";

/// Known languages in display order
const LANGUAGES: &[(&str, &str)] = &[
    (AUTO_DETECT, "Detect"),
    ("en", "English"),
    ("hi", "Hindi"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("ja", "Japanese"),
    ("ru", "Russian"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
];

/// Get the display name for a language code, or the code itself when unknown
pub fn display_name(code: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

/// Check whether the registry has an entry for the code
pub fn is_known(code: &str) -> bool {
    LANGUAGES.iter().any(|(known, _)| *known == code)
}

/// All known `(code, name)` pairs in display order
pub fn languages() -> &'static [(&'static str, &'static str)] {
    LANGUAGES
}

/// Whether the code asks for source language detection
pub fn is_auto_detect(code: &str) -> bool {
    code == AUTO_DETECT
}

/// Locale tag handed to a speech recognizer for a source language.
///
/// Detection has no locale, so it falls back to `en-US`.
pub fn speech_locale(code: &str) -> String {
    if is_auto_detect(code) {
        "en-US".to_string()
    } else {
        format!("{}-{}", code, code.to_uppercase())
    }
}
