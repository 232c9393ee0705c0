use std::time::Duration;
use serde::Deserialize;
use async_trait::async_trait;
use reqwest::Client;
use log::{debug, error};

use crate::errors::ProviderError;
use super::{Provider, TranslationRequest, build_client};

/// Default public MyMemory endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

/// MyMemory client, used as the fallback provider
#[derive(Debug)]
pub struct MyMemory {
    /// HTTP client for API requests
    client: Client,
    /// Full URL of the lookup endpoint
    endpoint: String,
}

/// MyMemory response body
#[derive(Debug, Deserialize)]
pub struct MyMemoryResponse {
    /// Translation payload
    #[serde(rename = "responseData")]
    pub response_data: MyMemoryResponseData,
}

/// Payload nested under `responseData`
#[derive(Debug, Deserialize)]
pub struct MyMemoryResponseData {
    /// The translated text
    #[serde(rename = "translatedText", default)]
    pub translated_text: Option<String>,
}

impl MyMemory {
    /// Create a new MyMemory client
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            client: build_client(timeout),
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint this client queries
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Query parameters for a request. The source code is sent as-is,
    /// `auto` included.
    pub fn query_params(request: &TranslationRequest) -> [(&'static str, String); 2] {
        [
            ("q", request.text.clone()),
            ("langpair", format!("{}|{}", request.source_language, request.target_language)),
        ]
    }

    /// Turn a raw HTTP answer into translated text
    pub fn parse_response(status_code: u16, body: &str) -> Result<String, ProviderError> {
        if !(200..300).contains(&status_code) {
            return Err(ProviderError::ApiError { status_code, message: body.to_string() });
        }

        let response = serde_json::from_str::<MyMemoryResponse>(body)
            .map_err(|e| ProviderError::ParseError(format!("MyMemory response: {}", e)))?;

        match response.response_data.translated_text {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(ProviderError::EmptyTranslation),
        }
    }
}

#[async_trait]
impl Provider for MyMemory {
    fn name(&self) -> &str {
        "mymemory"
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        debug!("MyMemory request {} -> {}", request.source_language, request.target_language);

        let response = self.client.get(&self.endpoint)
            .query(&Self::query_params(request))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        Self::parse_response(status.as_u16(), &text).inspect_err(|e| {
            error!("MyMemory API error ({}): {}", status, e);
        })
    }
}
