/*!
 * Provider implementations for the remote translation services.
 *
 * This module contains client implementations for the two services the
 * front-end talks to:
 * - LibreTranslate: primary provider, JSON `POST`
 * - MyMemory: fallback provider, query-string `GET`
 * - Mock: scripted provider for tests
 *
 * Each client owns the parsing of its own wire shape and hands back plain
 * translated text, so callers never inspect provider-specific fields.
 */

use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use std::time::Duration;

use crate::errors::ProviderError;

/// A single text to translate between two languages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// The text to translate
    pub text: String,
    /// Source language code, or `auto` for detection
    pub source_language: String,
    /// Target language code
    pub target_language: String,
}

impl TranslationRequest {
    /// Create a new translation request
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

/// Common trait for all translation providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing them to be used interchangeably as primary or fallback.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Short identifier used in log lines
    fn name(&self) -> &str;

    /// Translate a request using this provider
    ///
    /// # Arguments
    /// * `request` - The text and language pair to translate
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError>;
}

/// Build the HTTP client shared by the provider implementations.
///
/// Without a timeout the client waits as long as the transport does.
pub(crate) fn build_client(timeout: Option<Duration>) -> Client {
    let builder = Client::builder();
    let builder = match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };
    builder.build().unwrap_or_default()
}

pub mod libretranslate;
pub mod mymemory;
pub mod mock;
