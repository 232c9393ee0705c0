/*!
 * Layout of the slot database.
 *
 * The database only holds named key-value slots; the translation history
 * lives in one of them as a serialized list. A single-row `schema_version`
 * table records which layout wrote the file.
 */

use anyhow::{bail, Context, Result};
use log::{debug, info};
use rusqlite::{Connection, OptionalExtension};

/// Layout written by this build
pub const SCHEMA_VERSION: i32 = 1;

const CREATE_TABLES: &str = r#"
    CREATE TABLE IF NOT EXISTS schema_version (
        id INTEGER PRIMARY KEY CHECK (id = 1),
        version INTEGER NOT NULL,
        updated_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS kv_slots (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
"#;

/// Create the tables in an empty database, or check an existing one.
///
/// A database stamped with any other layout version is rejected.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    match schema_version(conn)? {
        0 => {
            info!("Creating history database layout v{}", SCHEMA_VERSION);
            conn.execute_batch("PRAGMA journal_mode=WAL;")?;
            conn.execute_batch(CREATE_TABLES)
                .context("Failed to create history tables")?;
            conn.execute(
                "INSERT OR REPLACE INTO schema_version (id, version, updated_at) VALUES (1, ?1, datetime('now'))",
                [SCHEMA_VERSION],
            )?;
        }
        SCHEMA_VERSION => debug!("History database layout is v{}", SCHEMA_VERSION),
        other => bail!(
            "History database has layout v{}, this build only reads v{}",
            other,
            SCHEMA_VERSION
        ),
    }

    Ok(())
}

/// Layout version stamped in the database; 0 when it has none yet
pub fn schema_version(conn: &Connection) -> Result<i32> {
    let stamped: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_version')",
            [],
            |row| row.get(0),
        )
        .context("Failed to look for the schema_version table")?;

    if !stamped {
        return Ok(0);
    }

    let version = conn
        .query_row("SELECT version FROM schema_version WHERE id = 1", [], |row| row.get(0))
        .optional()
        .context("Failed to read the schema version")?;

    Ok(version.unwrap_or(0))
}
