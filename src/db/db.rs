use crate::libs::messages::Message;
use crate::msg_error;
use rusqlite::{Connection, OptionalExtension, Params, Result, Row};
use std::fs;
use std::path::{Path, PathBuf};

/// A single SQLite connection plus the parametrized helpers every
/// repository goes through.
///
/// Each write runs in SQLite's autocommit mode, so it is durable as soon as
/// [`Db::execute`] returns; there are no multi-statement transactions.
#[derive(Debug)]
pub struct Db {
    pub conn: Connection,
    path: PathBuf,
}

impl Db {
    /// Opens (creating if needed) the database file at `path`.
    pub fn open(path: &Path) -> anyhow::Result<Db> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;

        Ok(Db {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs a read that yields at most one row.
    pub fn query_one<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Option<T>>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> Result<T>,
    {
        self.conn.query_row(sql, params, map).optional()
    }

    /// Runs a read and collects every row in the order SQLite returns them.
    pub fn query_all<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, map)?;

        let mut items = Vec::new();
        for item in rows {
            items.push(item?);
        }
        Ok(items)
    }

    /// Runs a write and returns the last inserted row id.
    ///
    /// The returned id is only meaningful for `INSERT` statements.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<i64> {
        self.conn.execute(sql, params)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Closes the connection, logging a failed close instead of returning it.
    pub fn close(self) {
        if let Err((_conn, error)) = self.conn.close() {
            msg_error!(Message::ConnectionCloseFailed(error.to_string()));
        }
    }
}
