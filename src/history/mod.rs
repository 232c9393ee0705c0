/*!
 * Local history of completed translations.
 *
 * - `record`: the `TranslationRecord` type and listing helpers
 * - `store`: the bounded, deduplicated `HistoryStore`
 */

pub mod record;
pub mod store;

pub use record::TranslationRecord;
pub use store::{HistoryStore, HISTORY_LIMIT, HISTORY_SLOT};
