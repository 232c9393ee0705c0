/*!
 * # babelbox - a small translation front-end
 *
 * A Rust library for translating short texts through public translation
 * services while keeping a local history of what was translated.
 *
 * ## Features
 *
 * - Translate text through LibreTranslate, falling back to MyMemory when
 *   the first service fails for any reason
 * - Offer alternative phrasings for common phrases
 * - Keep the last 50 distinct translations in a local SQLite database
 * - Restore a previous translation from the history
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `app_controller`: Session state and the translate/history flow
 * - `translation`: Primary/fallback orchestration and alternatives
 * - `providers`: Client implementations for the translation services:
 *   - `providers::libretranslate`: LibreTranslate API client
 *   - `providers::mymemory`: MyMemory API client
 * - `history`: Bounded, deduplicated translation history
 * - `database`: SQLite key-value slots backing the history
 * - `language_utils`: Language code registry
 * - `collaborators`: Speech and clipboard interfaces
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod collaborators;
pub mod database;
pub mod errors;
pub mod history;
pub mod language_utils;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, SessionState};
pub use history::{HistoryStore, TranslationRecord};
pub use translation::{AlternativesResolver, TranslationOutcome, TranslationService};
pub use language_utils::display_name;
pub use errors::{AppError, ProviderError, TranslationError};
