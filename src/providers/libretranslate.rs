use std::time::Duration;
use serde::{Serialize, Deserialize};
use serde_json::Value;
use async_trait::async_trait;
use reqwest::Client;
use log::{debug, error};

use crate::errors::ProviderError;
use crate::language_utils;
use super::{Provider, TranslationRequest, build_client};

/// Default public LibreTranslate endpoint
pub const DEFAULT_ENDPOINT: &str = "https://libretranslate.de/translate";

/// LibreTranslate client, used as the primary provider
#[derive(Debug)]
pub struct LibreTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Full URL of the translate endpoint
    endpoint: String,
}

/// LibreTranslate request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibreTranslateRequest {
    /// Text to translate
    pub q: String,

    /// Source language; empty asks the service to detect it
    pub source: String,

    /// Target language
    pub target: String,

    /// Input format, always plain text
    pub format: String,
}

/// LibreTranslate response body
///
/// The service answers either with `translatedText` or with `error`.
#[derive(Debug, Deserialize)]
pub struct LibreTranslateResponse {
    /// The translated text
    #[serde(rename = "translatedText", default)]
    pub translated_text: Option<String>,

    /// Business-level error, reported even on HTTP 200
    #[serde(default)]
    pub error: Option<Value>,
}

impl LibreTranslateRequest {
    /// Build the wire body for a translation request
    pub fn from_request(request: &TranslationRequest) -> Self {
        let source = if language_utils::is_auto_detect(&request.source_language) {
            String::new()
        } else {
            request.source_language.clone()
        };

        Self {
            q: request.text.clone(),
            source,
            target: request.target_language.clone(),
            format: "text".to_string(),
        }
    }
}

impl LibreTranslateResponse {
    /// Message carried by the `error` field, if it holds anything
    pub fn error_message(&self) -> Option<String> {
        match &self.error {
            None | Some(Value::Null) | Some(Value::Bool(false)) => None,
            Some(Value::String(message)) if message.is_empty() => None,
            Some(Value::String(message)) => Some(message.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

impl LibreTranslate {
    /// Create a new LibreTranslate client
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            client: build_client(timeout),
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Turn a raw HTTP answer into translated text
    pub fn parse_response(status_code: u16, body: &str) -> Result<String, ProviderError> {
        let parsed = serde_json::from_str::<LibreTranslateResponse>(body);

        if !(200..300).contains(&status_code) {
            let message = parsed
                .ok()
                .and_then(|response| response.error_message())
                .unwrap_or_else(|| body.to_string());
            return Err(ProviderError::ApiError { status_code, message });
        }

        let response = parsed
            .map_err(|e| ProviderError::ParseError(format!("LibreTranslate response: {}", e)))?;

        if let Some(message) = response.error_message() {
            return Err(ProviderError::ApiError { status_code, message });
        }

        response.translated_text
            .ok_or_else(|| ProviderError::ParseError("LibreTranslate response has no translatedText".to_string()))
    }
}

#[async_trait]
impl Provider for LibreTranslate {
    fn name(&self) -> &str {
        "libretranslate"
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        let body = LibreTranslateRequest::from_request(request);
        debug!("LibreTranslate request {} -> {}", request.source_language, request.target_language);

        let response = self.client.post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        Self::parse_response(status.as_u16(), &text).inspect_err(|e| {
            error!("LibreTranslate API error ({}): {}", status, e);
        })
    }
}
