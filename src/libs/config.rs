//! Configuration profiles for the taskboard server.
//!
//! Configuration is resolved once at process start from environment
//! variables (optionally seeded from a `.env` file) into an immutable
//! [`Config`] that is handed to whoever needs it. There is no global config
//! object and no runtime reconfiguration.
//!
//! ## Profiles
//!
//! `APP_ENV` selects one of the named profiles:
//!
//! | Profile       | Database                                   | Log level             | Debug |
//! |---------------|--------------------------------------------|-----------------------|-------|
//! | `development` | `DATABASE_URI` or `instance/tasks.db`      | `DEBUG`               | yes   |
//! | `testing`     | `instance/test.db`                         | `LOG_LEVEL` or `INFO` | no    |
//! | `production`  | `DATABASE_URI` or `instance/production.db` | `LOG_LEVEL` or `INFO` | no    |
//!
//! `default`, an unset variable and any unrecognized name resolve to
//! `development`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::libs::config::Config;
//!
//! let config = Config::from_env();
//! println!("serving tasks from {}", config.database.display());
//! ```

use crate::libs::messages::Message;
use crate::msg_warning;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Directory (relative to the working directory) holding the store files.
pub const INSTANCE_DIR: &str = "instance";

pub const ENV_PROFILE: &str = "APP_ENV";
pub const ENV_DATABASE: &str = "DATABASE_URI";
pub const ENV_SECRET_KEY: &str = "SECRET_KEY";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_STATIC_DIR: &str = "STATIC_DIR";

pub const DEFAULT_SECRET_KEY: &str = "dev-key-please-change-in-production";
pub const PRODUCTION_SECRET_KEY: &str = "production-key-please-set-in-environment";
pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// A named bundle of environment-specific settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    #[default]
    Development,
    Testing,
    Production,
}

impl Profile {
    /// Resolves a profile name; `default` and unknown names map to development.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "development" | "default" => Profile::Development,
            "testing" => Profile::Testing,
            "production" => Profile::Production,
            _ => Profile::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Profile::Development => "development",
            Profile::Testing => "testing",
            Profile::Production => "production",
        }
    }

    fn is_known(name: &str) -> bool {
        matches!(name.trim().to_lowercase().as_str(), "development" | "default" | "testing" | "production")
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fully resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub profile: Profile,
    /// SQLite database file.
    pub database: PathBuf,
    pub secret_key: String,
    /// Upper-case level name (`DEBUG`, `INFO`, ...).
    pub log_level: String,
    pub debug: bool,
    pub testing: bool,
    pub host: String,
    pub port: u16,
    /// Directory holding `index.html` and the static assets.
    pub static_dir: PathBuf,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let requested = get(ENV_PROFILE).unwrap_or_else(|| "default".to_string());
        if !Profile::is_known(&requested) {
            msg_warning!(Message::UnknownProfile(requested.clone()));
        }
        let profile = Profile::from_name(&requested);

        let instance_db = |file: &str| PathBuf::from(INSTANCE_DIR).join(file);
        let database = match profile {
            Profile::Development => get(ENV_DATABASE).map(PathBuf::from).unwrap_or_else(|| instance_db("tasks.db")),
            Profile::Testing => instance_db("test.db"),
            Profile::Production => get(ENV_DATABASE).map(PathBuf::from).unwrap_or_else(|| instance_db("production.db")),
        };

        let secret_key = match profile {
            Profile::Production => get(ENV_SECRET_KEY).unwrap_or_else(|| PRODUCTION_SECRET_KEY.to_string()),
            _ => get(ENV_SECRET_KEY).unwrap_or_else(|| DEFAULT_SECRET_KEY.to_string()),
        };

        let log_level = match profile {
            Profile::Development => "DEBUG".to_string(),
            _ => get(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()).to_uppercase(),
        };

        let port = match get(ENV_PORT) {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                msg_warning!(Message::InvalidPort(raw.clone()));
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Config {
            profile,
            database,
            secret_key,
            log_level,
            debug: profile == Profile::Development,
            testing: profile == Profile::Testing,
            host: get(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: get(ENV_STATIC_DIR).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        }
    }

    /// Whether production is running without a real secret key.
    pub fn uses_placeholder_secret(&self) -> bool {
        self.profile == Profile::Production && self.secret_key == PRODUCTION_SECRET_KEY
    }

    /// The `EnvFilter` directive used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> String {
        let level = match self.log_level.as_str() {
            "CRITICAL" | "FATAL" => "error".to_string(),
            "WARNING" => "warn".to_string(),
            other => other.to_lowercase(),
        };
        format!("taskboard={level},tower_http={level}")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_names() {
        assert_eq!(Profile::from_name("production"), Profile::Production);
        assert_eq!(Profile::from_name(" Testing "), Profile::Testing);
        assert_eq!(Profile::from_name("default"), Profile::Development);
        assert_eq!(Profile::from_name("staging"), Profile::Development);
    }

    #[test]
    fn log_filter_maps_level_aliases() {
        let mut config = Config::default();
        config.log_level = "WARNING".to_string();
        assert_eq!(config.log_filter(), "taskboard=warn,tower_http=warn");
        config.log_level = "DEBUG".to_string();
        assert_eq!(config.log_filter(), "taskboard=debug,tower_http=debug");
    }
}
