/*!
 * Error types for the babelbox application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to a translation provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself, either as a non-2xx status
    /// or as an `error` field in an otherwise successful body
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The provider answered but carried no translated text
    #[error("Provider returned no translation")]
    EmptyTranslation,
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            Self::ConnectionError(error.to_string())
        } else if error.is_decode() {
            Self::ParseError(error.to_string())
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}

/// Errors that can occur during a translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Nothing to translate once whitespace is stripped
    #[error("Please enter text to translate")]
    EmptyInput,

    /// Input exceeds the accepted character count
    #[error("Input is {length} characters long, the limit is {max}")]
    InputTooLong {
        /// Character count of the rejected input
        length: usize,
        /// Maximum accepted character count
        max: usize,
    },

    /// Both the primary and the fallback provider failed
    #[error("Translation failed (primary: {primary}; fallback: {fallback})")]
    AllProvidersFailed {
        /// Why the primary provider failed
        primary: ProviderError,
        /// Why the fallback provider failed
        fallback: ProviderError,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error reading or writing the history slot
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Speech recognition was requested but no recognizer is available
    #[error("Speech recognition is not supported in this environment")]
    SpeechUnsupported,

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
