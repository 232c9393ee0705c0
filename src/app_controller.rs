use log::{debug, error, info, warn};
use std::sync::Arc;

use crate::app_config::Config;
use crate::collaborators::{Clipboard, SpeechInput, SpeechOutput};
use crate::database::{KeyValueSlot, SqliteSlots};
use crate::errors::{AppError, TranslationError};
use crate::history::{HistoryStore, TranslationRecord};
use crate::language_utils;
use crate::translation::{AlternativesResolver, TranslationOutcome, TranslationService};

// @module: Application controller for interactive translation

/// Maximum number of characters accepted for one translation
pub const MAX_INPUT_CHARS: usize = 5000;

/// Text shown in place of a translation when every provider failed
pub const TRANSLATION_FAILED_MESSAGE: &str = "Translation error. Please try again.";

/// What the user currently sees
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    /// Selected source language code
    pub source_lang: String,

    /// Selected target language code
    pub target_lang: String,

    /// Text in the input area
    pub source_text: String,

    /// Text in the output area
    pub target_text: String,

    /// Alternatives on offer; `None` when the panel is hidden
    pub alternatives: Option<Vec<String>>,
}

/// Main application controller
///
/// Owns the translation service, the history and the session state, and
/// decides what flows from one to the other.
pub struct Controller {
    // @field: Primary/fallback translation service
    service: TranslationService,

    // @field: Alternative phrasing lookup
    resolver: AlternativesResolver,

    // @field: Persisted translation history
    history: HistoryStore,

    // @field: Displayed state
    session: SessionState,
}

impl Controller {
    /// Create a controller from its parts
    pub fn new(
        service: TranslationService,
        history: HistoryStore,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            service,
            resolver: AlternativesResolver::new(),
            history,
            session: SessionState {
                source_lang: source_lang.into(),
                target_lang: target_lang.into(),
                ..SessionState::default()
            },
        }
    }

    // @method: Create a controller with the given configuration
    //
    // A history database that cannot be opened is reported as `AppError::Storage`.
    pub fn with_config(config: &Config) -> Result<Self, AppError> {
        let slots = match &config.history.database_path {
            Some(path) => SqliteSlots::open(path),
            None => SqliteSlots::open_default(),
        }
        .map_err(|e| AppError::Storage(format!("{:#}", e)))?;
        let slot: Arc<dyn KeyValueSlot> = Arc::new(slots);

        Ok(Self::new(
            TranslationService::from_config(&config.providers),
            HistoryStore::load(slot),
            config.source_language.clone(),
            config.target_language.clone(),
        ))
    }

    /// Current session state
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Translation history, newest first
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Select the language pair
    pub fn set_languages(&mut self, source_lang: impl Into<String>, target_lang: impl Into<String>) {
        self.session.source_lang = source_lang.into();
        self.session.target_lang = target_lang.into();
    }

    /// Replace the input text
    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.session.source_text = text.into();
    }

    /// Input length as shown under the text area, e.g. `12/5000`
    pub fn char_count(&self) -> String {
        format!("{}/{}", self.session.source_text.chars().count(), MAX_INPUT_CHARS)
    }

    /// Translate `text` with the selected language pair
    pub async fn translate_text(&mut self, text: impl Into<String>) -> Result<TranslationOutcome, TranslationError> {
        self.set_source_text(text);
        self.translate().await
    }

    /// Translate the current input with the selected language pair.
    ///
    /// Blank input is rejected before any request is made. On success the
    /// translation is displayed and recorded in the history; alternatives
    /// are offered only when the primary provider answered. When every
    /// provider fails the failure message is displayed and nothing is
    /// recorded.
    pub async fn translate(&mut self) -> Result<TranslationOutcome, TranslationError> {
        let text = self.session.source_text.trim().to_string();

        if text.is_empty() {
            return Err(TranslationError::EmptyInput);
        }

        let length = text.chars().count();
        if length > MAX_INPUT_CHARS {
            return Err(TranslationError::InputTooLong { length, max: MAX_INPUT_CHARS });
        }

        let source_lang = self.session.source_lang.clone();
        let target_lang = self.session.target_lang.clone();

        let outcome = match self.service.translate(&text, &source_lang, &target_lang).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.session.target_text = TRANSLATION_FAILED_MESSAGE.to_string();
                self.session.alternatives = None;
                return Err(e);
            }
        };

        self.session.target_text = outcome.translated_text.clone();
        self.session.alternatives = if outcome.used_fallback {
            None
        } else {
            Some(self.resolver.resolve(&text, &outcome.translated_text, &source_lang, &target_lang))
        };

        let record = TranslationRecord::new(text, outcome.translated_text.clone(), source_lang, target_lang);
        match self.history.add(record) {
            Ok(true) => debug!("Recorded translation, history holds {} entries", self.history.len()),
            Ok(false) => {}
            Err(e) => error!("Failed to save translation history: {}", e),
        }

        Ok(outcome)
    }

    /// Swap the language pair; the texts follow when a translation is shown
    pub fn swap_languages(&mut self) {
        std::mem::swap(&mut self.session.source_lang, &mut self.session.target_lang);

        if !self.session.target_text.trim().is_empty() {
            std::mem::swap(&mut self.session.source_text, &mut self.session.target_text);
        }
    }

    /// Clear both texts and hide the alternatives
    pub fn clear(&mut self) {
        self.session.source_text.clear();
        self.session.target_text.clear();
        self.session.alternatives = None;
    }

    /// Display the alternative at `index` in place of the translation.
    ///
    /// The history keeps the original translation.
    pub fn select_alternative(&mut self, index: usize) -> Option<&str> {
        let alternative = self.session.alternatives.as_ref()?.get(index)?.clone();
        self.session.target_text = alternative;
        Some(&self.session.target_text)
    }

    /// Bring back the history entry at `index` (newest first)
    pub fn restore_from_history(&mut self, index: usize) -> Option<&SessionState> {
        let record = self.history.get(index)?.clone();

        self.session = SessionState {
            source_lang: record.source_lang,
            target_lang: record.target_lang,
            source_text: record.source_text,
            target_text: record.translated_text,
            alternatives: None,
        };

        Some(&self.session)
    }

    /// Copy the displayed translation. Returns whether anything was copied.
    pub fn copy_translation(&self, clipboard: &dyn Clipboard) -> bool {
        if self.session.target_text.trim().is_empty() {
            return false;
        }

        match clipboard.copy(&self.session.target_text) {
            Ok(()) => true,
            Err(e) => {
                warn!("Could not copy text: {}", e);
                false
            }
        }
    }

    /// Read the displayed translation aloud in the target language
    pub fn speak_translation(&self, speech: &dyn SpeechOutput) -> bool {
        if self.session.target_text.trim().is_empty() {
            return false;
        }

        speech.speak(&self.session.target_text, &self.session.target_lang);
        true
    }

    /// Fill the input from one recognized utterance.
    ///
    /// Without a recognizer this fails with `AppError::SpeechUnsupported`.
    /// A recognition error leaves the input unchanged and returns `Ok(false)`.
    pub async fn listen(&mut self, recognizer: Option<&dyn SpeechInput>) -> Result<bool, AppError> {
        let recognizer = recognizer.ok_or(AppError::SpeechUnsupported)?;
        let locale = language_utils::speech_locale(&self.session.source_lang);

        info!("Listening ({})...", locale);
        match recognizer.recognize(&locale).await {
            Ok(transcript) => {
                self.session.source_text = transcript;
                Ok(true)
            }
            Err(e) => {
                error!("Speech recognition error: {}", e);
                Ok(false)
            }
        }
    }
}
