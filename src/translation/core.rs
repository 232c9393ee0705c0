/*!
 * Core translation functionality.
 *
 * `TranslationService` asks the primary provider first and, on any failure
 * of that call, asks the fallback provider once. Whichever answers is
 * normalized into a `TranslationOutcome`.
 */

use log::{debug, error, warn};
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::ProvidersConfig;
use crate::errors::TranslationError;
use crate::providers::libretranslate::LibreTranslate;
use crate::providers::mymemory::MyMemory;
use crate::providers::{Provider, TranslationRequest};

/// Successful result of a translation, whichever provider produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutcome {
    /// The translated text
    pub translated_text: String,

    /// Whether the fallback provider produced it
    pub used_fallback: bool,
}

/// Translation service with a primary and a fallback provider
#[derive(Debug, Clone)]
pub struct TranslationService {
    /// Provider asked first
    primary: Arc<dyn Provider>,

    /// Provider asked when the primary fails
    fallback: Arc<dyn Provider>,
}

impl TranslationService {
    /// Create a service from explicit providers
    pub fn new(primary: Arc<dyn Provider>, fallback: Arc<dyn Provider>) -> Self {
        Self { primary, fallback }
    }

    /// Create the LibreTranslate → MyMemory service described by the config
    pub fn from_config(config: &ProvidersConfig) -> Self {
        let timeout = config.timeout_secs.map(Duration::from_secs);

        Self::new(
            Arc::new(LibreTranslate::new(config.primary.endpoint.clone(), timeout)),
            Arc::new(MyMemory::new(config.fallback.endpoint.clone(), timeout)),
        )
    }

    /// Translate `text` from `source_language` to `target_language`.
    ///
    /// The caller guarantees `text` is not blank. Provider failures never
    /// escape individually: the result is either an outcome or
    /// `TranslationError::AllProvidersFailed`.
    pub async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<TranslationOutcome, TranslationError> {
        let request = TranslationRequest::new(text, source_language, target_language);

        let primary_error = match self.primary.translate(&request).await {
            Ok(translated_text) => {
                debug!("Translated with {} ({} -> {})", self.primary.name(), source_language, target_language);
                return Ok(TranslationOutcome {
                    translated_text,
                    used_fallback: false,
                });
            }
            Err(e) => e,
        };

        warn!("{} failed, falling back to {}: {}", self.primary.name(), self.fallback.name(), primary_error);

        match self.fallback.translate(&request).await {
            Ok(translated_text) => Ok(TranslationOutcome {
                translated_text,
                used_fallback: true,
            }),
            Err(fallback_error) => {
                error!("Fallback translation error: {}", fallback_error);
                Err(TranslationError::AllProvidersFailed {
                    primary: primary_error,
                    fallback: fallback_error,
                })
            }
        }
    }
}
