/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::working()` - Always succeeds with a tagged translation
 * - `MockProvider::returning(text)` - Always succeeds with a fixed text
 * - `MockProvider::failing()` - Always fails with a transport-style error
 * - `MockProvider::api_error(msg)` - Fails the way a business `error` field does
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::{Provider, TranslationRequest};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Succeeds with `[target] text`
    Working,
    /// Succeeds with the given text regardless of input
    Fixed(String),
    /// Fails as if the connection dropped
    Failing,
    /// Fails with an API error carrying the message
    ApiError(String),
    /// Fails every Nth request, succeeds otherwise; 0 never fails
    Intermittent { fail_every: usize },
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Provider name reported in logs
    name: String,
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter, shared between clones
    request_count: Arc<AtomicUsize>,
    /// Most recent request, shared between clones
    last_request: Arc<Mutex<Option<TranslationRequest>>>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            name: "mock".to_string(),
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock provider that always answers with `text`
    pub fn returning(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fixed(text.into()))
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock provider that reports a business-level error
    pub fn api_error(message: impl Into<String>) -> Self {
        Self::new(MockBehavior::ApiError(message.into()))
    }

    /// Create an intermittently failing mock provider
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Set the name reported by `Provider::name`
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// The last request received, if any
    pub fn last_request(&self) -> Option<TranslationRequest> {
        self.last_request.lock().clone()
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            behavior: self.behavior.clone(),
            request_count: Arc::clone(&self.request_count),
            last_request: Arc::clone(&self.last_request),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock() = Some(request.clone());

        match &self.behavior {
            MockBehavior::Working => Ok(format!("[{}] {}", request.target_language, request.text)),

            MockBehavior::Fixed(text) => Ok(text.clone()),

            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Simulated connection failure".to_string(),
            )),

            MockBehavior::ApiError(message) => Err(ProviderError::ApiError {
                status_code: 200,
                message: message.clone(),
            }),

            MockBehavior::Intermittent { fail_every } => {
                if *fail_every > 0 && count % fail_every == fail_every - 1 {
                    Err(ProviderError::ApiError {
                        message: format!("Simulated intermittent failure (request #{})", count + 1),
                        status_code: 503,
                    })
                } else {
                    Ok(format!("[{}] {}", request.target_language, request.text))
                }
            }
        }
    }
}
