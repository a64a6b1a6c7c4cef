//! Request extractors: the per-request storage context and the task id path
//! parameter.

use super::error::ApiError;
use super::AppState;
use crate::db::db::Db;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use std::cell::OnceCell;
use std::convert::Infallible;
use std::path::PathBuf;

/// Storage handle scoped to one request.
///
/// The connection is opened on the first [`connect`](RequestDb::connect) and
/// every later call in the same request gets the same handle. When the
/// request finishes the value is dropped and an opened connection is closed
/// exactly once, whether the handler succeeded, returned an error or
/// panicked. A request that never calls `connect` never opens the store.
#[derive(Debug)]
pub struct RequestDb {
    path: PathBuf,
    db: OnceCell<Db>,
}

impl RequestDb {
    pub fn new(path: PathBuf) -> Self {
        Self { path, db: OnceCell::new() }
    }

    pub fn connect(&self) -> Result<&Db, ApiError> {
        if let Some(db) = self.db.get() {
            return Ok(db);
        }
        let db = Db::open(&self.path).map_err(|error| match error.downcast::<rusqlite::Error>() {
            Ok(error) => ApiError::Storage(error),
            Err(error) => ApiError::Unexpected(error),
        })?;

        Ok(self.db.get_or_init(|| db))
    }

    /// Whether a connection has been opened for this request.
    pub fn is_connected(&self) -> bool {
        self.db.get().is_some()
    }
}

impl Drop for RequestDb {
    fn drop(&mut self) {
        if let Some(db) = self.db.take() {
            db.close();
        }
    }
}

impl FromRequestParts<AppState> for RequestDb {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(Self::new(state.config.database.clone()))
    }
}

/// The `{id}` path segment. Anything that is not an integer cannot name a
/// task, so it is answered like an unknown id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskId(pub i64);

impl<S> FromRequestParts<S> for TaskId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;
        Ok(TaskId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_is_lazy_and_memoized() {
        let dir = tempfile::tempdir().unwrap();
        let request_db = RequestDb::new(dir.path().join("tasks.db"));
        assert!(!request_db.is_connected());

        let first = request_db.connect().unwrap() as *const Db;
        let second = request_db.connect().unwrap() as *const Db;

        assert!(request_db.is_connected());
        assert_eq!(first, second);
    }

    #[test]
    fn untouched_context_opens_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.db");

        drop(RequestDb::new(path.clone()));

        assert!(!path.exists());
    }

    #[test]
    fn failed_request_releases_its_connection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.db");

        let request_db = RequestDb::new(path.clone());
        let failed = request_db
            .connect()
            .unwrap()
            .execute("INSERT INTO tasks (name) VALUES ('orphan')", []);
        assert!(failed.is_err());
        drop(request_db);

        let db = Db::open(&path).unwrap();
        db.conn
            .execute_batch("CREATE TABLE tasks (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
            .unwrap();
        assert_eq!(db.execute("INSERT INTO tasks (name) VALUES ('kept')", []).unwrap(), 1);
    }
}
