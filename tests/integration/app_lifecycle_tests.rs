/*!
 * Integration tests for application lifecycle
 */

use anyhow::Result;
use tokio_test;

use babelbox::app_config::{Config, EndpointConfig};
use babelbox::app_controller::{Controller, TRANSLATION_FAILED_MESSAGE};
use babelbox::errors::{AppError, TranslationError};
use crate::common;

/// Config pointing the history at `temp_dir` and both services at a closed port
fn offline_config(temp_dir: &tempfile::TempDir) -> Config {
    let mut config = Config::default();
    config.history.database_path = Some(temp_dir.path().join("babelbox.db"));
    config.providers.primary = EndpointConfig { endpoint: "http://127.0.0.1:9/translate".to_string() };
    config.providers.fallback = EndpointConfig { endpoint: "http://127.0.0.1:9/get".to_string() };
    config.providers.timeout_secs = Some(2);
    config
}

#[test]
fn test_controller_withConfig_shouldUseConfiguredLanguages() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let mut config = offline_config(&temp_dir);
    config.source_language = "es".to_string();
    config.target_language = "de".to_string();

    let controller = Controller::with_config(&config)?;

    assert_eq!(controller.session().source_lang, "es");
    assert_eq!(controller.session().target_lang, "de");
    assert!(controller.history().is_empty());
    assert!(temp_dir.path().join("babelbox.db").exists());
    Ok(())
}

#[test]
fn test_controller_withDefaultConfig_shouldStartFromAutoToHindi() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(&offline_config(&temp_dir))?;

    assert_eq!(controller.session().source_lang, "auto");
    assert_eq!(controller.session().target_lang, "hi");
    assert_eq!(controller.char_count(), "0/5000");
    Ok(())
}

#[test]
fn test_translate_withUnreachableServices_shouldShowFailureMessage() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let mut controller = Controller::with_config(&offline_config(&temp_dir))?;

    let result = tokio_test::block_on(controller.translate_text("hello"));

    assert!(matches!(result, Err(TranslationError::AllProvidersFailed { .. })));
    assert_eq!(controller.session().target_text, TRANSLATION_FAILED_MESSAGE);
    assert!(controller.history().is_empty());
    Ok(())
}

#[test]
fn test_configFile_roundTrip_shouldDriveController() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("conf.json");

    let mut config = offline_config(&temp_dir);
    config.target_language = "ja".to_string();
    config.save(&config_path)?;

    let loaded = Config::load_or_create(&config_path)?;
    let controller = Controller::with_config(&loaded)?;

    assert_eq!(controller.session().target_lang, "ja");
    Ok(())
}

#[test]
fn test_controller_withUnopenableDatabase_shouldReportStorageError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory")?;

    let mut config = offline_config(&temp_dir);
    config.history.database_path = Some(blocker.join("babelbox.db"));

    let result = Controller::with_config(&config);

    assert!(matches!(result, Err(AppError::Storage(_))));
    Ok(())
}
