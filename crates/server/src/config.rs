// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon configuration
//!
//! Loaded once at startup and read-only afterwards. A bad config is the one
//! fatal error class: the daemon refuses to start rather than serve a
//! degraded snapshot with a partial command list.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vitals_core::Command;

const DEFAULT_PORT: u16 = 31731;
const DEFAULT_COOLDOWN_MS: u64 = 500;

/// Errors loading or validating the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Covers TOML syntax errors and empty command token arrays, which the
    /// `Command` type rejects during deserialization.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("config has no commands")]
    NoCommands,
}

/// Daemon configuration: listen port, coalescing window, command list.
///
/// ```toml
/// port = 31731
/// cooldown_ms = 500
/// commands = [
///     ["uname", "-a"],
///     ["uptime"],
///     ["ps", "axuf"],
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Coalescing window in milliseconds.
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    /// Diagnostic commands, in display order.
    pub commands: Vec<Command>,
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        if config.commands.is_empty() {
            return Err(ConfigError::NoCommands);
        }
        Ok(config)
    }

    /// The coalescing window as a duration.
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_cooldown_ms() -> u64 {
    DEFAULT_COOLDOWN_MS
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
