//! Core library modules for taskboard.
//!
//! - **config**: profile selection and the immutable [`config::Config`]
//! - **logging**: tracing subscriber installation
//! - **messages**: every user-facing and log text, plus the `msg_*!` macros
//! - **task**: the task model and input validation

pub mod config;
pub mod logging;
pub mod messages;
pub mod task;
