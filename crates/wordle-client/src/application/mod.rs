//! Application layer use cases for the client.
//!
//! - **`play_game`** – The guess state machine.  It turns key presses into
//!   board edits and guess submissions, turns arbiter replies into revealed
//!   cells and keyboard colours, and decides when the game is won or lost.
//!   It talks to the outside world only through the [`Presenter`] and
//!   [`Transport`] traits, which are injected at construction time.

pub mod play_game;

pub use play_game::{
    GameError, GameEvent, GameSession, GuessStateMachine, Outcome, Phase, Presenter, Transport,
    TransportError,
};
