//! Infrastructure layer for the client application.
//!
//! Contains the adapters that touch the outside world: the websocket to the
//! arbiter, the terminal, stdin, and the configuration file.
//!
//! **Dependency rule**: this layer may depend on `application`, `domain` and
//! `wordle_core`, but MUST NOT be imported by the `application` or domain
//! layers.
//!
//! # Sub-modules
//!
//! - **`network`** – websocket client.  Implements `Transport` for outbound
//!   guesses and forwards inbound frames as `GameEvent`s.
//!
//! - **`terminal`** – `Presenter` implementation that draws the board and
//!   on-screen keyboard, pacing reveal animations.
//!
//! - **`keyboard`** – turns stdin lines into key presses.
//!
//! - **`storage`** – TOML configuration file loading.
//!
//! - **`session`** – the async event loop that feeds events to the state
//!   machine one at a time.
//!
//! - **`mock`** – recording `Presenter` and `Transport` doubles for tests and
//!   for driving the game without a network.

pub mod keyboard;
pub mod mock;
pub mod network;
pub mod session;
pub mod storage;
pub mod terminal;
