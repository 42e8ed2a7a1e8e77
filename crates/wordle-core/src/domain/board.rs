//! The guess grid: six rows of five letter slots.
//!
//! The [`Board`] is the single source of truth for what the player has typed
//! and what the arbiter has revealed.  Rendering is a projection of it; the
//! renderer never feeds anything back into the board.
//!
//! # Row lifecycle
//!
//! ```text
//! empty ──insert/delete (InputBuffer)──▶ filled ──classify (once)──▶ revealed
//! ```
//!
//! Letter slots are only written through [`crate::InputBuffer`], and only
//! while the row has not been classified.  After [`GuessRow::classify`] the row
//! is frozen.

use thiserror::Error;

use crate::domain::classification::Classification;
use crate::domain::letter::Letter;

/// Number of letters in every guess and in the hidden word.
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets per game.
pub const NUMBER_OF_GUESSES: usize = 6;

/// Errors raised by board mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The row index is past the last row.
    #[error("row {0} is out of range (board has {NUMBER_OF_GUESSES} rows)")]
    RowOutOfRange(usize),

    /// The row already carries the arbiter's verdict.
    #[error("row {0} has already been revealed")]
    AlreadyRevealed(usize),
}

/// One guess: five letter slots plus, once submitted, five classifications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessRow {
    letters: [Option<Letter>; WORD_LENGTH],
    classifications: Option<[Classification; WORD_LENGTH]>,
}

impl GuessRow {
    /// Letter at `col`, if that slot is filled.
    pub fn letter(&self, col: usize) -> Option<Letter> {
        self.letters.get(col).copied().flatten()
    }

    /// Revealed classification at `col`, if the row has been revealed.
    pub fn classification(&self, col: usize) -> Option<Classification> {
        self.classifications.and_then(|c| c.get(col).copied())
    }

    /// All five classifications, once revealed.
    pub fn classifications(&self) -> Option<[Classification; WORD_LENGTH]> {
        self.classifications
    }

    /// `true` once the arbiter's verdict has been recorded.
    pub fn is_revealed(&self) -> bool {
        self.classifications.is_some()
    }

    /// Number of filled slots.
    pub fn filled(&self) -> usize {
        self.letters.iter().filter(|l| l.is_some()).count()
    }

    /// Concatenation of the filled slots in order.
    pub fn text(&self) -> String {
        self.letters.iter().flatten().map(|l| l.as_char()).collect()
    }

    /// Writes or clears a slot.  Returns `false` if the row is frozen or
    /// `col` is out of range.
    pub(crate) fn set_letter(&mut self, col: usize, letter: Option<Letter>) -> bool {
        if self.is_revealed() {
            return false;
        }
        match self.letters.get_mut(col) {
            Some(slot) => {
                *slot = letter;
                true
            }
            None => false,
        }
    }
}

/// The full grid of [`NUMBER_OF_GUESSES`] rows, indexed by turn number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: [GuessRow; NUMBER_OF_GUESSES],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Row `index`, or `None` past the last row.
    pub fn row(&self, index: usize) -> Option<&GuessRow> {
        self.rows.get(index)
    }

    /// Mutable access to row `index`.
    pub fn row_mut(&mut self, index: usize) -> Option<&mut GuessRow> {
        self.rows.get_mut(index)
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &GuessRow> {
        self.rows.iter()
    }

    /// Records the arbiter's verdict for row `index`, freezing the row.
    ///
    /// # Errors
    ///
    /// - [`BoardError::RowOutOfRange`] if `index >= NUMBER_OF_GUESSES`.
    /// - [`BoardError::AlreadyRevealed`] if the row was already classified.
    pub fn classify(
        &mut self,
        index: usize,
        classifications: [Classification; WORD_LENGTH],
    ) -> Result<(), BoardError> {
        let row = self
            .rows
            .get_mut(index)
            .ok_or(BoardError::RowOutOfRange(index))?;
        if row.is_revealed() {
            return Err(BoardError::AlreadyRevealed(index));
        }
        row.classifications = Some(classifications);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
