/*!
 * Tests for application configuration functionality
 */

use babelbox::app_config::{Config, LogLevel};
use babelbox::errors::AppError;
use babelbox::providers::{libretranslate, mymemory};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.source_language, "auto");
    assert_eq!(config.target_language, "hi");
    assert_eq!(config.providers.primary.endpoint, libretranslate::DEFAULT_ENDPOINT);
    assert_eq!(config.providers.fallback.endpoint, mymemory::DEFAULT_ENDPOINT);
    assert_eq!(config.providers.timeout_secs, None);
    assert!(config.history.database_path.is_none());
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.target_language = "".to_string();
    assert!(config.validate().is_err());

    config.target_language = "auto".to_string();
    assert!(config.validate().is_err());
    config.target_language = "hi".to_string();

    config.source_language = "  ".to_string();
    assert!(config.validate().is_err());
    config.source_language = "en".to_string();

    config.providers.primary.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());
    config.providers.primary.endpoint = libretranslate::DEFAULT_ENDPOINT.to_string();

    config.providers.timeout_secs = Some(0);
    assert!(config.validate().is_err());
    config.providers.timeout_secs = Some(10);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_withBadEndpoint_shouldReportConfigError() {
    let mut config = Config::default();
    config.providers.fallback.endpoint = "mymemory".to_string();

    match config.validate() {
        Err(AppError::Config(message)) => assert!(message.contains("fallback")),
        other => panic!("expected a configuration error, got {:?}", other),
    }
}

#[test]
fn test_validate_withAutoTarget_shouldReportConfigError() {
    let mut config = Config::default();
    config.target_language = "auto".to_string();
    assert!(matches!(config.validate(), Err(AppError::Config(_))));
}

#[test]
fn test_validate_withUnknownLanguageCode_shouldStillPass() {
    let mut config = Config::default();
    config.target_language = "pt".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() {
    let dir = common::create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");

    let config = Config::load_or_create(&path).unwrap();

    assert!(path.exists());
    assert_eq!(config.target_language, "hi");
    let reloaded = Config::load_or_create(&path).unwrap();
    assert_eq!(reloaded.providers.primary, config.providers.primary);
}

#[test]
fn test_loadOrCreate_withPartialFile_shouldFillDefaults() {
    let dir = common::create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");
    std::fs::write(&path, r#"{ "target_language": "ja", "log_level": "debug" }"#).unwrap();

    let config = Config::load_or_create(&path).unwrap();

    assert_eq!(config.source_language, "auto");
    assert_eq!(config.target_language, "ja");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.providers.fallback.endpoint, mymemory::DEFAULT_ENDPOINT);
}

#[test]
fn test_loadOrCreate_withInvalidJson_shouldFail() {
    let dir = common::create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Config::load_or_create(&path).is_err());
}

#[test]
fn test_logLevel_toLevelFilter_shouldMapEachLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
