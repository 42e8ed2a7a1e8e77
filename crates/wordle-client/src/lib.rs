//! wordle-client library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does wordle-client do? (for beginners)
//!
//! The client is the player's side of the game.  It never knows the hidden
//! word; a remote *arbiter* does.  The client:
//!
//! 1. Connects to the arbiter over a websocket and draws an empty six-row
//!    board.
//! 2. Collects key presses into the active row (letters, `Backspace`/`Del`).
//! 3. On `Enter`, sends the five-letter guess as plain text.
//! 4. Receives the verdict (`"result:c*-n-"`), reveals each cell, colours the
//!    keyboard, and either moves to the next row or ends the game.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! stdin keys ─┐                        ┌─▶ TerminalPresenter ─▶ renderer task ─▶ stdout
//!             ├─▶ GameEvent channel ─▶ GuessStateMachine
//! websocket ──┘                        └─▶ WsTransport ─▶ writer task ─▶ websocket
//! ```
//!
//! - `domain` – configuration and presenter command types (no I/O).
//! - `application` – the guess state machine and the `Presenter` /
//!   `Transport` seams it drives.
//! - `infrastructure` – websocket, terminal, stdin, and config-file adapters.

/// Domain layer: configuration and presenter commands.
pub mod domain;

/// Application layer: the game use case.
pub mod application;

/// Infrastructure layer: network, terminal, keyboard, and storage adapters.
pub mod infrastructure;
