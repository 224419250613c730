//! Runtime options for the `streamkit` binary.
//!
//! Options are read from `STREAMKIT_*` environment variables. The binary
//! loads an optional `.env` file first (via `dotenvy`), and command-line flags
//! override what the environment says.
//!
//! | Variable            | Default | Meaning                              |
//! |---------------------|---------|--------------------------------------|
//! | `STREAMKIT_PRETTY`  | `true`  | Pretty-print JSON output             |
//! | `STREAMKIT_LOG`     | `warn`  | Log level when `RUST_LOG` is unset   |

use log::LevelFilter;
use serde::Serialize;

use crate::error::{ConfigError, ConfigResult};

pub const ENV_PRETTY: &str = "STREAMKIT_PRETTY";
pub const ENV_LOG: &str = "STREAMKIT_LOG";

/// Options for a CLI run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Pretty-print JSON output
    pub pretty: bool,

    /// Log level filter (`off`, `error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pretty: true,
            log_level: "warn".to_string(),
        }
    }
}

impl Options {
    /// Read options from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read options through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(value) = lookup(ENV_PRETTY) {
            options.pretty = parse_bool(ENV_PRETTY, &value)?;
        }

        if let Some(value) = lookup(ENV_LOG) {
            let level = value.trim().to_ascii_lowercase();
            if level.parse::<LevelFilter>().is_err() {
                return Err(invalid(ENV_LOG, &value));
            }
            options.log_level = level;
        }

        Ok(options)
    }

    /// Parsed log level filter.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Warn)
    }
}

fn parse_bool(key: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
