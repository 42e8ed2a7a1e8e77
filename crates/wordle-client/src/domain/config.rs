//! Client configuration types.
//!
//! [`ClientConfig`] is the single source of truth for all runtime settings.
//! It is built once at startup by `main.rs` from defaults, an optional TOML
//! file, and command-line / environment overrides, in that order.
//!
//! Keeping configuration as a plain struct (no global state, no environment
//! reads inside the domain) makes the client easy to drive from tests.

use std::time::Duration;

/// Default arbiter endpoint: the reference server's `/ws` route.
pub const DEFAULT_SERVER_URL: &str = "ws://127.0.0.1:8000/ws";

/// Default gap between two consecutive cell reveals.
pub const DEFAULT_REVEAL_STAGGER: Duration = Duration::from_millis(250);

/// Default `tracing` filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// All runtime configuration for the client.
///
/// # Example
///
/// ```rust
/// use wordle_client::domain::ClientConfig;
///
/// let cfg = ClientConfig::default();
/// assert_eq!(cfg.server_url, "ws://127.0.0.1:8000/ws");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Websocket URL of the arbiter (`ws://` or `wss://`).
    pub server_url: String,

    /// Cell `i` of a verdict is revealed `i * reveal_stagger` after receipt.
    pub reveal_stagger: Duration,

    /// `tracing` filter directive used when `RUST_LOG` is absent.
    pub log_level: String,

    /// Whether the terminal renderer may use ANSI colours.
    pub color: bool,
}

impl Default for ClientConfig {
    /// | Field          | Default                    |
    /// |----------------|----------------------------|
    /// | server_url     | `ws://127.0.0.1:8000/ws`   |
    /// | reveal_stagger | 250 ms                     |
    /// | log_level      | `info`                     |
    /// | color          | `true`                     |
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            reveal_stagger: DEFAULT_REVEAL_STAGGER,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            color: true,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_url_points_at_local_ws_route() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.server_url, "ws://127.0.0.1:8000/ws");
    }

    #[test]
    fn test_default_reveal_stagger_is_250ms() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.reveal_stagger, Duration::from_millis(250));
    }

    #[test]
    fn test_default_log_level_is_info() {
        assert_eq!(ClientConfig::default().log_level, "info");
    }
}
