//! Macros for application messaging and logging.
//!
//! The macros take a [`Message`](super::Message) (or anything `Display`) and
//! route it to one of two sinks:
//!
//! - **tracing**: once a global subscriber is installed (the `serve` command
//!   always installs one) or when `TASKBOARD_DEBUG` / `RUST_LOG` is set;
//! - **console**: `println!` / `eprintln!` otherwise, which is what the short
//!   lived `init-db` command uses before logging is configured.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Macro Call    │    │  Subscriber or  │    │ tracing::info!  │
//! │   msg_info!()   │───▶│  debug env set? │───▶│ OR println!     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use taskboard::{msg_info, msg_success, msg_error};
//! use taskboard::libs::messages::Message;
//!
//! msg_success!(Message::TaskCreated);
//! msg_info!(Message::ProfileSelected("development".to_string()));
//! msg_error!(Message::TaskNotFound);
//! ```

use std::sync::OnceLock;

/// Cached result of the debug environment lookup.
static DEBUG_ENV: OnceLock<bool> = OnceLock::new();

/// Returns `true` when messages should be sent to tracing instead of the console.
///
/// The environment part (`TASKBOARD_DEBUG` or `RUST_LOG`) is read once and
/// cached. The subscriber check is not cached because logging is installed
/// after the first messages may already have been printed.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    let env_debug = *DEBUG_ENV.get_or_init(|| std::env::var("TASKBOARD_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok());
    env_debug || tracing::dispatcher::has_been_set()
}

/// Prints a success message with ✅ prefix.
///
/// ```rust,ignore
/// msg_success!(Message::SchemaReset("instance/tasks.db".to_string()));
/// // Output: "✅ Database initialized from schema: instance/tasks.db"
/// ```
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix.
///
/// In console mode the message goes to stderr so it never mixes with
/// regular output.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Debug-only message with 🔍 prefix; suppressed entirely in console mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
///
/// ```rust,ignore
/// use anyhow::Result;
/// use taskboard::{msg_error_anyhow, libs::messages::Message};
///
/// fn load() -> Result<()> {
///     Err(msg_error_anyhow!(Message::InvalidRequestData))
/// }
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Early return with an error created from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
