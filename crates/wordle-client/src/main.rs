//! Wordle terminal client: entry point.
//!
//! Connects to a Wordle arbiter over a websocket, draws the board on stdout,
//! reads guesses from stdin, and plays one game.
//!
//! # Usage
//!
//! ```text
//! wordle-client [OPTIONS]
//!
//! Options:
//!   --config <PATH>              TOML configuration file
//!   --server-url <URL>           Arbiter websocket URL [default: ws://127.0.0.1:8000/ws]
//!   --reveal-stagger-ms <MS>     Delay between cell reveals [default: 250]
//!   --log-level <FILTER>         Log filter when RUST_LOG is unset [default: info]
//!   --no-color                   Plain text output
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                   | Flag                  |
//! |----------------------------|-----------------------|
//! | `WORDLE_CONFIG`            | `--config`            |
//! | `WORDLE_SERVER_URL`        | `--server-url`        |
//! | `WORDLE_REVEAL_STAGGER_MS` | `--reveal-stagger-ms` |
//! | `WORDLE_LOG_LEVEL`         | `--log-level`         |
//!
//! Precedence: command line / environment, then the config file, then the
//! built-in defaults.
//!
//! # Task layout
//!
//! ```text
//! main()
//!  └─ ArbiterConnection::open()   -- websocket reader + writer tasks
//!  └─ run_renderer()              -- draws PresenterCommands on stdout
//!  └─ spawn_stdin_reader()        -- OS thread, lines -> GameEvent::Key
//!  └─ Ctrl+C handler              -- GameEvent::Quit
//!  └─ run_event_loop()            -- GuessStateMachine, one event at a time
//! ```
//!
//! Logs go to stderr so they never interleave with the board.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use tokio::sync::mpsc;
use tracing::{info, info_span, Instrument};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use wordle_client::application::{GameEvent, GuessStateMachine};
use wordle_client::domain::ClientConfig;
use wordle_client::infrastructure::{
    keyboard::spawn_stdin_reader,
    network::ArbiterConnection,
    session::run_event_loop,
    storage::load_config,
    terminal::{run_renderer, TerminalPresenter},
};

/// Capacity of the game event channel.
const EVENT_CHANNEL_CAPACITY: usize = 128;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Terminal client for the Wordle guessing game.
#[derive(Debug, Parser)]
#[command(
    name = "wordle-client",
    about = "Play Wordle in the terminal against a websocket arbiter",
    version
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, env = "WORDLE_CONFIG")]
    config: Option<PathBuf>,

    /// Websocket URL of the arbiter (`ws://` or `wss://`).
    #[arg(long, env = "WORDLE_SERVER_URL")]
    server_url: Option<String>,

    /// Milliseconds between two consecutive cell reveals.
    #[arg(long, env = "WORDLE_REVEAL_STAGGER_MS")]
    reveal_stagger_ms: Option<u64>,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[arg(long, env = "WORDLE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Disable ANSI colours.
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    /// Builds the runtime configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or the server URL
    /// is not a websocket URL.
    fn into_client_config(self) -> anyhow::Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("failed to load config file {}", path.display()))?
                .into(),
            None => ClientConfig::default(),
        };

        if let Some(url) = self.server_url {
            config.server_url = url;
        }
        if let Some(ms) = self.reveal_stagger_ms {
            config.reveal_stagger = Duration::from_millis(ms);
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if self.no_color {
            config.color = false;
        }

        if !(config.server_url.starts_with("ws://") || config.server_url.starts_with("wss://")) {
            bail!(
                "server URL must start with ws:// or wss://, got '{}'",
                config.server_url
            );
        }
        Ok(config)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_client_config()?;

    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // `RUST_LOG` wins over the configured level.  Output goes to stderr so
    // `wordle-client 2>client.log` keeps the board readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let span = info_span!("game", session = %Uuid::new_v4());
    play(config).instrument(span).await?;

    info!("wordle client stopped");
    Ok(())
}

/// Plays one game against the configured arbiter.
async fn play(config: ClientConfig) -> anyhow::Result<()> {
    info!(url = %config.server_url, "wordle client starting");

    let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

    let connection = ArbiterConnection::open(&config.server_url, event_tx.clone())
        .await
        .context("could not reach the Wordle server")?;

    // ── Presenter + renderer ──────────────────────────────────────────────────
    let (presenter, commands) = TerminalPresenter::new();
    let renderer = tokio::spawn(run_renderer(commands, config.color, std::io::stdout()));

    let machine = GuessStateMachine::new(
        connection.transport(),
        Arc::new(presenter),
        config.reveal_stagger,
    );

    // ── Input sources ─────────────────────────────────────────────────────────
    spawn_stdin_reader(event_tx.clone()).context("failed to start keyboard reader")?;

    let quit_tx = event_tx.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("received Ctrl+C");
                let _ = quit_tx.send(GameEvent::Quit).await;
            }
            Err(e) => tracing::error!("failed to listen for Ctrl+C signal: {e}"),
        }
    });
    drop(event_tx);

    // ── Main event loop ───────────────────────────────────────────────────────
    let machine = run_event_loop(machine, event_rx).await;

    connection.close();
    // Dropping the machine drops the last presenter handle, which lets the
    // renderer drain its queue and exit.
    drop(machine);
    renderer.await.context("renderer task failed")?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
