/*!
 * Alternative phrasings for a translation.
 *
 * A small built-in table keyed by language pair (`en-hi`) and the
 * lowercased source text. Lookups that miss answer with the primary
 * translation alone, so the result is never empty.
 */

use once_cell::sync::Lazy;
use std::collections::HashMap;

type PhraseTable = HashMap<&'static str, HashMap<&'static str, Vec<&'static str>>>;

static ALTERNATIVES: Lazy<PhraseTable> = Lazy::new(|| {
    let mut table: PhraseTable = HashMap::new();

    table.insert("en-hi", HashMap::from([
        ("hello", vec!["नमस्ते", "हैलो", "प्रणाम"]),
        ("kind", vec!["दयालु", "मेहरबान", "कृपालु"]),
        ("thank you", vec!["धन्यवाद", "शुक्रिया", "आभार"]),
    ]));

    table.insert("hi-en", HashMap::from([
        ("नमस्ते", vec!["Hello", "Hi", "Greetings"]),
        ("धन्यवाद", vec!["Thank you", "Thanks", "Much obliged"]),
    ]));

    table
});

/// Looks up alternative phrasings in the built-in table
#[derive(Debug, Clone, Copy, Default)]
pub struct AlternativesResolver;

impl AlternativesResolver {
    /// Create a resolver over the built-in table
    pub fn new() -> Self {
        Self
    }

    /// Alternatives for a translation, in table order.
    ///
    /// Only case is folded for the lookup; surrounding whitespace is kept,
    /// so `" hello"` does not match `hello`.
    pub fn resolve(
        &self,
        source_text: &str,
        translated_text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Vec<String> {
        let pair = format!("{}-{}", source_language, target_language);
        let phrase = source_text.to_lowercase();

        ALTERNATIVES
            .get(pair.as_str())
            .and_then(|phrases| phrases.get(phrase.as_str()))
            .map(|alternatives| alternatives.iter().map(|alt| alt.to_string()).collect())
            .unwrap_or_else(|| vec![translated_text.to_string()])
    }
}
