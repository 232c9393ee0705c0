/*!
 * Tests for the wire formats of the translation providers
 */

use babelbox::errors::ProviderError;
use babelbox::providers::libretranslate::{LibreTranslate, LibreTranslateRequest};
use babelbox::providers::mymemory::MyMemory;
use babelbox::providers::{Provider, TranslationRequest};

#[test]
fn test_libreRequest_withAutoSource_shouldSendEmptySource() {
    let request = TranslationRequest::new("hello", "auto", "hi");
    let body = serde_json::to_value(LibreTranslateRequest::from_request(&request)).unwrap();

    assert_eq!(body, serde_json::json!({
        "q": "hello",
        "source": "",
        "target": "hi",
        "format": "text"
    }));
}

#[test]
fn test_libreRequest_withExplicitSource_shouldKeepSource() {
    let request = TranslationRequest::new("hello", "en", "hi");
    let body = LibreTranslateRequest::from_request(&request);

    assert_eq!(body.source, "en");
    assert_eq!(body.format, "text");
}

#[test]
fn test_libreParse_withTranslatedText_shouldReturnIt() {
    let text = LibreTranslate::parse_response(200, r#"{"translatedText":"नमस्ते"}"#).unwrap();
    assert_eq!(text, "नमस्ते");
}

#[test]
fn test_libreParse_withEmptyTranslatedText_shouldReturnEmpty() {
    let text = LibreTranslate::parse_response(200, r#"{"translatedText":""}"#).unwrap();
    assert_eq!(text, "");
}

#[test]
fn test_libreParse_withErrorFieldOn200_shouldFail() {
    let result = LibreTranslate::parse_response(200, r#"{"error":"Visit the portal to get an API key"}"#);

    match result {
        Err(ProviderError::ApiError { status_code, message }) => {
            assert_eq!(status_code, 200);
            assert!(message.contains("API key"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[test]
fn test_libreParse_withErrorAndTranslation_shouldPreferError() {
    let result = LibreTranslate::parse_response(200, r#"{"translatedText":"x","error":"bad"}"#);
    assert!(matches!(result, Err(ProviderError::ApiError { .. })));
}

#[test]
fn test_libreParse_withNullError_shouldIgnoreIt() {
    let text = LibreTranslate::parse_response(200, r#"{"translatedText":"Hola","error":null}"#).unwrap();
    assert_eq!(text, "Hola");
}

#[test]
fn test_libreParse_withNon2xx_shouldReportStatus() {
    let result = LibreTranslate::parse_response(503, "<html>Service Unavailable</html>");

    match result {
        Err(ProviderError::ApiError { status_code, message }) => {
            assert_eq!(status_code, 503);
            assert!(message.contains("Service Unavailable"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[test]
fn test_libreParse_withNon2xxJsonError_shouldUseErrorMessage() {
    let result = LibreTranslate::parse_response(429, r#"{"error":"Slowdown"}"#);
    assert!(matches!(result, Err(ProviderError::ApiError { status_code: 429, ref message }) if message == "Slowdown"));
}

#[test]
fn test_libreParse_withInvalidJson_shouldBeParseError() {
    let result = LibreTranslate::parse_response(200, "not json");
    assert!(matches!(result, Err(ProviderError::ParseError(_))));
}

#[test]
fn test_libreParse_withoutTranslatedText_shouldBeParseError() {
    let result = LibreTranslate::parse_response(200, "{}");
    assert!(matches!(result, Err(ProviderError::ParseError(_))));
}

#[test]
fn test_myMemoryQuery_shouldJoinLanguagePairWithPipe() {
    let request = TranslationRequest::new("thank you", "en", "hi");
    let params = MyMemory::query_params(&request);

    assert_eq!(params[0], ("q", "thank you".to_string()));
    assert_eq!(params[1], ("langpair", "en|hi".to_string()));
}

#[test]
fn test_myMemoryQuery_withAutoSource_shouldKeepAutoLiterally() {
    let request = TranslationRequest::new("hola", "auto", "en");
    let params = MyMemory::query_params(&request);

    assert_eq!(params[1].1, "auto|en");
}

#[test]
fn test_myMemoryParse_withTranslatedText_shouldReturnIt() {
    let body = r#"{"responseData":{"translatedText":"Hi","match":0.85},"responseStatus":200}"#;
    assert_eq!(MyMemory::parse_response(200, body).unwrap(), "Hi");
}

#[test]
fn test_myMemoryParse_withEmptyTranslatedText_shouldFail() {
    let body = r#"{"responseData":{"translatedText":""}}"#;
    assert!(matches!(MyMemory::parse_response(200, body), Err(ProviderError::EmptyTranslation)));
}

#[test]
fn test_myMemoryParse_withNullTranslatedText_shouldFail() {
    let body = r#"{"responseData":{"translatedText":null}}"#;
    assert!(matches!(MyMemory::parse_response(200, body), Err(ProviderError::EmptyTranslation)));
}

#[test]
fn test_myMemoryParse_withoutResponseData_shouldBeParseError() {
    let result = MyMemory::parse_response(200, r#"{"responseStatus":403}"#);
    assert!(matches!(result, Err(ProviderError::ParseError(_))));
}

#[test]
fn test_myMemoryParse_withNon2xx_shouldBeApiError() {
    let result = MyMemory::parse_response(500, "oops");
    assert!(matches!(result, Err(ProviderError::ApiError { status_code: 500, .. })));
}

#[test]
fn test_providers_shouldReportNamesAndEndpoints() {
    let libre = LibreTranslate::new("http://localhost:5000/translate", None);
    let memory = MyMemory::new("http://localhost:5001/get", None);

    assert_eq!(libre.name(), "libretranslate");
    assert_eq!(libre.endpoint(), "http://localhost:5000/translate");
    assert_eq!(memory.name(), "mymemory");
    assert_eq!(memory.endpoint(), "http://localhost:5001/get");
}

#[tokio::test]
async fn test_libreTranslate_withUnreachableEndpoint_shouldFail() {
    // Port 9 (discard) on localhost is closed in test environments
    let libre = LibreTranslate::new("http://127.0.0.1:9/translate", Some(std::time::Duration::from_secs(2)));
    let result = libre.translate(&TranslationRequest::new("hello", "en", "hi")).await;
    assert!(result.is_err());
}
