//! Domain layer for wordle-client.
//!
//! Pure types with no dependencies on I/O, networking, or async runtimes.
//!
//! - [`config`] – the runtime settings the client is started with.
//! - [`commands`] – the structured update commands the game sends to
//!   whatever renders it.

pub mod commands;
pub mod config;

pub use commands::PresenterCommand;
pub use config::ClientConfig;
