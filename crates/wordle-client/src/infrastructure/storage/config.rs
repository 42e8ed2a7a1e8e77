//! TOML configuration file for the client.
//!
//! # File layout
//!
//! ```toml
//! [server]
//! url = "ws://127.0.0.1:8000/ws"
//!
//! [display]
//! reveal_stagger_ms = 250
//! color = true
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every section and every field is optional.  Missing entries fall back to
//! the values in [`ClientConfig::default`] through `#[serde(default)]`, so an
//! empty file is a valid configuration.
//!
//! Unlike a settings store there is no implicit location: the file is only
//! read when a path is given, and a missing file is an error.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::config::{
    ClientConfig, DEFAULT_LOG_LEVEL, DEFAULT_REVEAL_STAGGER, DEFAULT_SERVER_URL,
};

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level layout of the configuration file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileConfig {
    pub server: ServerSection,
    pub display: DisplaySection,
    pub logging: LoggingSection,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerSection {
    /// Websocket URL of the arbiter.
    #[serde(default = "default_url")]
    pub url: String,
}

/// `[display]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DisplaySection {
    /// Milliseconds between two consecutive cell reveals.
    #[serde(default = "default_reveal_stagger_ms")]
    pub reveal_stagger_ms: u64,
    /// Whether ANSI colours may be used.
    #[serde(default = "default_true")]
    pub color: bool,
}

/// `[logging]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingSection {
    /// `tracing` filter directive, e.g. `"debug"` or `"wordle_client=trace"`.
    #[serde(default = "default_level")]
    pub level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}
fn default_reveal_stagger_ms() -> u64 {
    DEFAULT_REVEAL_STAGGER.as_millis() as u64
}
fn default_true() -> bool {
    true
}
fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            reveal_stagger_ms: default_reveal_stagger_ms(),
            color: default_true(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl From<FileConfig> for ClientConfig {
    fn from(file: FileConfig) -> Self {
        Self {
            server_url: file.server.url,
            reveal_stagger: Duration::from_millis(file.display.reveal_stagger_ms),
            log_level: file.logging.level,
            color: file.display.color,
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Parses configuration from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed or a field has
/// the wrong type.
pub fn parse_config(content: &str) -> Result<FileConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Loads the configuration file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read (including when it
/// does not exist) and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = parse_config(&content)?;
    debug!(path = %path.display(), "configuration file loaded");
    Ok(cfg)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
