//! Inventory schema installer.
//!
//! # Invariants
//! - `SCHEMA_VERSION` is mirrored to `PRAGMA user_version` once installed.
//! - Installing over a legacy database (table present, version 0) keeps
//!   every existing row.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

/// Schema version written by this binary.
pub const SCHEMA_VERSION: u32 = 1;

const LIBRARY_TABLE_SQL: &str = include_str!("0001_init.sql");

/// Returns the schema version this binary writes.
pub fn latest_version() -> u32 {
    SCHEMA_VERSION
}

/// Creates the `Library` table when absent and stamps the schema version.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    match schema_version(conn)? {
        SCHEMA_VERSION => Ok(()),
        found if found > SCHEMA_VERSION => Err(DbError::UnsupportedSchemaVersion {
            db_version: found,
            latest_supported: SCHEMA_VERSION,
        }),
        _ => {
            let tx = conn.transaction()?;
            tx.execute_batch(LIBRARY_TABLE_SQL)?;
            tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
            tx.commit()?;
            Ok(())
        }
    }
}

/// Reads `PRAGMA user_version` from `conn`.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))?)
}
