/*!
 * Translation orchestration.
 *
 * - `core`: primary/fallback provider orchestration and `TranslationOutcome`
 * - `alternatives`: built-in table of alternative phrasings
 */

// Re-export main types for easier usage
pub use self::alternatives::AlternativesResolver;
pub use self::core::{TranslationOutcome, TranslationService};

// Submodules
pub mod alternatives;
pub mod core;
