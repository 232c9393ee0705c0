/*!
 * Bounded, deduplicated translation history.
 *
 * Records are kept newest first. A record whose `(source text, source,
 * target)` triple is already present is dropped, and the list never grows
 * past `HISTORY_LIMIT`. Every accepted record rewrites the whole list to
 * the backing slot before `add` returns.
 */

use anyhow::{Context, Result};
use log::{debug, warn};
use std::sync::Arc;

use crate::database::KeyValueSlot;
use super::record::TranslationRecord;

/// Name of the slot holding the serialized history
pub const HISTORY_SLOT: &str = "translationHistory";

/// Maximum number of records kept
pub const HISTORY_LIMIT: usize = 50;

/// Translation history backed by a key-value slot
#[derive(Debug)]
pub struct HistoryStore {
    /// Records, newest first
    records: Vec<TranslationRecord>,

    /// Where the list is persisted
    slot: Arc<dyn KeyValueSlot>,
}

impl HistoryStore {
    /// Load the history from its slot.
    ///
    /// A missing slot gives an empty history. So does content that cannot
    /// be read or parsed; the problem is logged and the next accepted
    /// record overwrites it. Stored lists are held to the same rules as
    /// `add`: repeated keys keep their first (newest) entry, and at most
    /// `HISTORY_LIMIT` records survive.
    pub fn load(slot: Arc<dyn KeyValueSlot>) -> Self {
        let records = match slot.read(HISTORY_SLOT) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<TranslationRecord>>(&raw) {
                Ok(records) => Self::sanitize(records),
                Err(e) => {
                    warn!("Ignoring unreadable translation history: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read translation history, starting empty: {}", e);
                Vec::new()
            }
        };

        debug!("Loaded {} history records", records.len());
        Self { records, slot }
    }

    /// Add a record unless its key is already present.
    ///
    /// Returns `Ok(true)` when the record was inserted and persisted,
    /// `Ok(false)` when an entry with the same key exists. When the slot
    /// write fails the history is left as it was.
    pub fn add(&mut self, record: TranslationRecord) -> Result<bool> {
        if self.contains(&record) {
            debug!("History already holds '{}' ({} -> {})",
                   record.source_summary(), record.source_lang, record.target_lang);
            return Ok(false);
        }

        let mut updated = Vec::with_capacity(HISTORY_LIMIT);
        updated.push(record);
        updated.extend(self.records.iter().take(HISTORY_LIMIT - 1).cloned());

        Self::persist(self.slot.as_ref(), &updated)?;
        self.records = updated;

        Ok(true)
    }

    /// Whether a record with the same key is stored
    pub fn contains(&self, record: &TranslationRecord) -> bool {
        self.records.iter().any(|existing| existing.same_key(record))
    }

    /// All records, newest first
    pub fn list(&self) -> &[TranslationRecord] {
        &self.records
    }

    /// Record at `index` in newest-first order
    pub fn get(&self, index: usize) -> Option<&TranslationRecord> {
        self.records.get(index)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(slot: &dyn KeyValueSlot, records: &[TranslationRecord]) -> Result<()> {
        let serialized = serde_json::to_string(records)
            .context("Failed to serialize translation history")?;
        slot.write(HISTORY_SLOT, &serialized)
    }

    fn sanitize(records: Vec<TranslationRecord>) -> Vec<TranslationRecord> {
        let stored = records.len();
        let mut kept: Vec<TranslationRecord> = Vec::with_capacity(stored.min(HISTORY_LIMIT));

        for record in records {
            if !kept.iter().any(|existing| existing.same_key(&record)) {
                kept.push(record);
            }
        }

        if kept.len() < stored {
            warn!("Stored history repeats {} entries, keeping the newest of each", stored - kept.len());
        }

        if kept.len() > HISTORY_LIMIT {
            warn!("Stored history has {} records, keeping the newest {}", kept.len(), HISTORY_LIMIT);
            kept.truncate(HISTORY_LIMIT);
        }

        kept
    }
}
