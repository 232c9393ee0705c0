/*!
 * Tests for error types and conversions
 */

use babelbox::errors::{AppError, ProviderError, TranslationError};

#[test]
fn test_providerError_apiError_shouldDisplayStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 400,
        message: "'target' is invalid".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("400"));
    assert!(display.contains("'target' is invalid"));
}

#[test]
fn test_providerError_parseError_shouldDisplayCorrectly() {
    let error = ProviderError::ParseError("expected value".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Failed to parse API response"));
    assert!(display.contains("expected value"));
}

#[test]
fn test_translationError_emptyInput_shouldAskForText() {
    assert_eq!(TranslationError::EmptyInput.to_string(), "Please enter text to translate");
}

#[test]
fn test_translationError_allProvidersFailed_shouldMentionBothCauses() {
    let error = TranslationError::AllProvidersFailed {
        primary: ProviderError::ConnectionError("refused".to_string()),
        fallback: ProviderError::EmptyTranslation,
    };
    let display = error.to_string();
    assert!(display.contains("refused"));
    assert!(display.contains("no translation"));
}

#[test]
fn test_appError_fromTranslationError_shouldWrapCorrectly() {
    let app_error: AppError = TranslationError::EmptyInput.into();
    assert!(matches!(app_error, AppError::Translation(TranslationError::EmptyInput)));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "conf.json");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(_)));
}

#[test]
fn test_appError_speechUnsupported_shouldDisplayNotice() {
    assert!(AppError::SpeechUnsupported.to_string().contains("not supported"));
}
