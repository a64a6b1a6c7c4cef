//! Persistence layer built on SQLite.
//!
//! - [`db`]: the connection wrapper and its parametrized read/write helpers
//! - [`schema`]: idempotent table creation and the destructive reset
//! - [`tasks`]: every statement touching the `tasks` table
//!
//! ```rust,no_run
//! use taskboard::db::{db::Db, schema::ensure_schema, tasks::Tasks};
//! use std::path::Path;
//!
//! let db = Db::open(Path::new("instance/tasks.db"))?;
//! ensure_schema(&db)?;
//! let all = Tasks::new(&db).list()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection handling and query helpers.
pub mod db;

/// Task table creation and reinitialization.
pub mod schema;

/// Task CRUD statements.
pub mod tasks;
