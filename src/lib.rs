//! # Taskboard
//!
//! A minimal task tracker served over HTTP: a JSON CRUD API for tasks backed
//! by a local SQLite file, an HTML form fallback for creating tasks, and a
//! static front-end.
//!
//! ## Features
//!
//! - **Task API**: list, get, create, update (partial), delete and complete
//! - **Validation**: one set of name rules shared by every mutation path
//! - **Per-request storage**: a lazily opened connection closed when the request ends
//! - **Profiles**: development, testing and production configuration
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
