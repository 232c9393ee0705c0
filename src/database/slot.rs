/*!
 * Named key-value slots.
 *
 * A slot holds one opaque string value under a key. `SqliteSlots` keeps
 * them in the `kv_slots` table of a SQLite file; `MemorySlots` keeps them
 * in a map and is meant for tests and throwaway sessions. Both share their
 * storage between clones.
 */

use anyhow::{Context, Result};
use log::{debug, info};
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::schema;

/// Directory under the user data dir holding the database
const DATA_DIRNAME: &str = "babelbox";

/// Database file name
const DATABASE_FILENAME: &str = "babelbox.db";

/// Durable storage for named string values
pub trait KeyValueSlot: Send + Sync + Debug {
    /// Read the value stored under `key`, if any
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// SQLite-backed slots
#[derive(Clone)]
pub struct SqliteSlots {
    conn: Arc<Mutex<Connection>>,
}

impl Debug for SqliteSlots {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteSlots").finish_non_exhaustive()
    }
}

impl SqliteSlots {
    /// Open the slot database at `path`, creating the file and its
    /// directory when missing
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create history directory {:?}", dir))?;
        }

        info!("Opening history database at {:?}", path);
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open history database {:?}", path))?;

        Self::with_connection(conn)
    }

    /// Open the slot database at `default_path()`
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// Slots in a private in-memory database
    pub fn in_memory() -> Result<Self> {
        debug!("Opening in-memory history database");
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        Self::with_connection(conn)
    }

    /// `{data_local_dir}/babelbox/babelbox.db`
    pub fn default_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .map(|dir| dir.join(DATA_DIRNAME).join(DATABASE_FILENAME))
            .context("Could not determine a data directory for the history database")
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        schema::initialize_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

impl KeyValueSlot for SqliteSlots {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .lock()
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read slot '{}'", key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .lock()
            .execute(
                "INSERT INTO kv_slots (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value],
            )
            .with_context(|| format!("Failed to write slot '{}'", key))?;

        debug!("Wrote {} bytes to slot '{}'", value.len(), key);
        Ok(())
    }
}

/// In-memory slots
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlots {
    /// Create an empty set of slots
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueSlot for MemorySlots {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
