//! Presenter commands: the game's only way of changing what the player sees.
//!
//! The state machine never draws anything itself.  It emits these commands,
//! in order, and the presenter turns them into pixels, terminal text, or test
//! assertions.  Animations (the pulse on a typed letter, the flip on a
//! revealed cell) are the presenter's business; the commands only say *what*
//! changed.

use std::time::Duration;

use wordle_core::{Classification, Letter};

/// One structured update for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCommand {
    /// A letter was typed into `row`/`col`.  Presenters pulse the cell.
    FillCell { row: usize, col: usize, letter: Letter },

    /// The letter at `row`/`col` was deleted.
    ClearCell { row: usize, col: usize },

    /// Reveal the arbiter's classification for `row`/`col` after `delay`.
    ///
    /// The delay is cosmetic pacing (cells flip one after another).  Game
    /// state has already moved on when this command is emitted.
    RevealCell {
        row: usize,
        col: usize,
        classification: Classification,
        delay: Duration,
    },

    /// Recolour an on-screen keyboard key.  Only ever sent for upgrades.
    UpdateKey {
        letter: Letter,
        classification: Classification,
    },

    /// Show an error toast.
    ShowError(String),

    /// Show a success toast.
    ShowSuccess(String),
}
