//! Centralized user-facing and log text.
//!
//! Every response message and log line produced by taskboard is a variant of
//! [`Message`]; the wording lives in one `Display` impl so handlers, commands
//! and tests never duplicate string literals.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
