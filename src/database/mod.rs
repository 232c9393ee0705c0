/*!
 * Database module for persistent storage of the translation history.
 *
 * This module provides SQLite-based persistence through named key-value
 * slots, plus an in-memory stand-in with the same interface.
 */

pub mod schema;
pub mod slot;

// Re-export main types
pub use slot::{KeyValueSlot, MemorySlots, SqliteSlots};
