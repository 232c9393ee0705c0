use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::language_utils;

/// Number of characters shown for each side of a history listing
pub const SUMMARY_LENGTH: usize = 30;

/// One completed translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    /// Text that was translated
    pub source_text: String,

    /// Text the provider returned
    pub translated_text: String,

    /// Source language code or `auto`
    pub source_lang: String,

    /// Target language code
    pub target_lang: String,

    /// When the record was created
    pub timestamp: DateTime<Utc>,
}

impl TranslationRecord {
    /// Create a record stamped with the current time
    pub fn new(
        source_text: impl Into<String>,
        translated_text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            source_text: source_text.into(),
            translated_text: translated_text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            timestamp: Utc::now(),
        }
    }

    /// Whether both records share the `(source text, source, target)` triple
    pub fn same_key(&self, other: &TranslationRecord) -> bool {
        self.source_text == other.source_text
            && self.source_lang == other.source_lang
            && self.target_lang == other.target_lang
    }

    /// Short form of the source text for listings
    pub fn source_summary(&self) -> String {
        truncate_text(&self.source_text, SUMMARY_LENGTH)
    }

    /// Short form of the translated text for listings
    pub fn translated_summary(&self) -> String {
        truncate_text(&self.translated_text, SUMMARY_LENGTH)
    }

    /// `English → Hindi` style label for the language pair
    pub fn language_pair_label(&self) -> String {
        format!(
            "{} → {}",
            language_utils::display_name(&self.source_lang),
            language_utils::display_name(&self.target_lang)
        )
    }
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_length).collect();
        format!("{}...", head)
    }
}
