//! Storage infrastructure: the optional TOML configuration file.
//!
//! The `config` sub-module reads the file named by `--config` and turns it
//! into a [`crate::domain::ClientConfig`].  Command-line overrides are
//! applied on top of the result in `main.rs`.

pub mod config;

pub use config::{load_config, parse_config, ConfigError, FileConfig};
