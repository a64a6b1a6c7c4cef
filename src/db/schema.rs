//! Task table creation and destructive reinitialization.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::db::db::Db;
//! use taskboard::db::schema::{ensure_schema, reset_schema, DEFAULT_SCHEMA};
//! use std::path::Path;
//!
//! // Every startup: create the table if it is missing.
//! let db = Db::open(Path::new("instance/tasks.db"))?;
//! ensure_schema(&db)?;
//!
//! // Fresh environments only: wipe the file and rebuild it.
//! reset_schema(Path::new("instance/test.db"), DEFAULT_SCHEMA)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::db::Db;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Schema definition shipped with the application (`schema.sql`).
pub const DEFAULT_SCHEMA: &str = include_str!("../../schema.sql");

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT DEFAULT '',
    completed BOOLEAN NOT NULL DEFAULT 0,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Creates the task table when it does not exist yet. Safe on every startup.
pub fn ensure_schema(db: &Db) -> Result<()> {
    db.conn.execute(SCHEMA_TASKS, [])?;
    msg_debug!(Message::SchemaEnsured(db.path().display().to_string()));

    Ok(())
}

/// Deletes the store file at `path` and rebuilds it from `schema`.
///
/// Destroys every stored task. Never called implicitly.
pub fn reset_schema(path: &Path, schema: &str) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => msg_debug!(Message::StoreFileRemoved(path.display().to_string())),
        Err(error) if error.kind() == ErrorKind::NotFound => {}
        Err(error) => return Err(error).with_context(|| format!("removing {}", path.display())),
    }

    let db = Db::open(path)?;
    db.conn
        .execute_batch(schema)
        .with_context(|| format!("applying schema to {}", path.display()))?;
    db.close();

    Ok(())
}
