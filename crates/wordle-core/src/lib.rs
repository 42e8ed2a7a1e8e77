//! # wordle-core
//!
//! Shared library for the Wordle client engine containing the game's domain
//! model and the text protocol spoken with the remote arbiter.
//!
//! This crate has zero dependencies on sockets, terminals, or async runtimes.
//! Everything here can be exercised from a plain `#[test]`.
//!
//! # Architecture overview (for beginners)
//!
//! The player types a five-letter guess, the guess is sent to a remote
//! *arbiter* that knows the hidden word, and the arbiter answers with a short
//! *verdict* describing how each letter scored.  After six misses the game is
//! lost; a verdict where every letter is in the right place wins it.
//!
//! This crate (`wordle-core`) is the shared foundation.  It defines:
//!
//! - **`domain`** – The data the game is made of: letters, keys, the six-row
//!   [`Board`], the [`InputBuffer`] that fills the active row, and the
//!   [`KeyState`] that remembers the best score seen for every keyboard key.
//!
//! - **`protocol`** – How text travels over the wire.  Arbiter replies look
//!   like `"result:c*-n-"` and are parsed into a typed [`ServerMessage`];
//!   the verdict payload is decoded into a [`Verdict`].

pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `wordle_core::Board` instead of `wordle_core::domain::board::Board`.
pub use domain::board::{Board, BoardError, GuessRow, NUMBER_OF_GUESSES, WORD_LENGTH};
pub use domain::classification::Classification;
pub use domain::input_buffer::InputBuffer;
pub use domain::key::Key;
pub use domain::keyboard::{KeyState, KEYBOARD_ROWS};
pub use domain::letter::{Letter, LetterError};
pub use protocol::feedback::Verdict;
pub use protocol::messages::{ProtocolError, ServerMessage};
