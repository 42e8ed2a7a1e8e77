//! Typing cursor for the active guess row.
//!
//! The buffer owns nothing but the cursor; the letters themselves are stored
//! in the [`GuessRow`] it is pointed at, so the board stays the single source
//! of truth.  The game state machine decides *whether* a key may be applied
//! (terminal game, pending guess); the buffer only enforces the row bounds.

use crate::domain::board::{GuessRow, WORD_LENGTH};
use crate::domain::letter::Letter;

/// Cursor over the five slots of the row being typed.
///
/// `cursor` is the index of the next empty slot, `0..=WORD_LENGTH`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputBuffer {
    cursor: usize,
}

impl InputBuffer {
    /// Creates a buffer positioned at the first slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next empty slot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// `true` when all five slots are filled.
    pub fn is_full(&self) -> bool {
        self.cursor >= WORD_LENGTH
    }

    /// Writes `letter` at the cursor and advances.
    ///
    /// Returns the column that was filled, or `None` (no-op) when the row is
    /// already full or frozen.
    pub fn insert(&mut self, row: &mut GuessRow, letter: Letter) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let col = self.cursor;
        if !row.set_letter(col, Some(letter)) {
            return None;
        }
        self.cursor += 1;
        Some(col)
    }

    /// Steps the cursor back and clears that slot.
    ///
    /// Returns the column that was cleared, or `None` (no-op) when the row is
    /// empty or frozen.
    pub fn delete(&mut self, row: &mut GuessRow) -> Option<usize> {
        if self.cursor == 0 {
            return None;
        }
        let col = self.cursor - 1;
        if !row.set_letter(col, None) {
            return None;
        }
        self.cursor = col;
        Some(col)
    }

    /// The letters typed so far, in order.
    pub fn current_guess_text(&self, row: &GuessRow) -> String {
        row.text()
    }

    /// Moves the cursor back to the first slot for the next row.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::Board;
    use crate::domain::classification::Classification;

    fn l(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn test_insert_fills_slots_left_to_right() {
        // Arrange
        let mut row = GuessRow::default();
        let mut buffer = InputBuffer::new();

        // Act
        let first = buffer.insert(&mut row, l('c'));
        let second = buffer.insert(&mut row, l('R'));

        // Assert
        assert_eq!(first, Some(0));
        assert_eq!(second, Some(1));
        assert_eq!(buffer.cursor(), 2);
        assert_eq!(buffer.current_guess_text(&row), "cr");
    }

    #[test]
    fn test_insert_after_five_is_noop() {
        let mut row = GuessRow::default();
        let mut buffer = InputBuffer::new();
        for c in "crane".chars() {
            buffer.insert(&mut row, l(c));
        }

        assert_eq!(buffer.insert(&mut row, l('s')), None);
        assert!(buffer.is_full());
        assert_eq!(row.text(), "crane");
        assert_eq!(row.filled(), WORD_LENGTH);
    }

    #[test]
    fn test_delete_on_empty_row_is_noop() {
        let mut row = GuessRow::default();
        let mut buffer = InputBuffer::new();

        assert_eq!(buffer.delete(&mut row), None);
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_delete_clears_last_letter() {
        let mut row = GuessRow::default();
        let mut buffer = InputBuffer::new();
        buffer.insert(&mut row, l('a'));
        buffer.insert(&mut row, l('b'));

        assert_eq!(buffer.delete(&mut row), Some(1));
        assert_eq!(buffer.cursor(), 1);
        assert_eq!(row.text(), "a");
        assert_eq!(row.letter(1), None);
    }

    #[test]
    fn test_insert_then_delete_then_insert_reuses_slot() {
        let mut row = GuessRow::default();
        let mut buffer = InputBuffer::new();
        buffer.insert(&mut row, l('a'));
        buffer.delete(&mut row);

        assert_eq!(buffer.insert(&mut row, l('z')), Some(0));
        assert_eq!(row.text(), "z");
    }

    #[test]
    fn test_frozen_row_rejects_edits() {
        // Arrange: a revealed row
        let mut board = Board::new();
        let mut buffer = InputBuffer::new();
        buffer.insert(board.row_mut(0).unwrap(), l('a'));
        board.classify(0, [Classification::Absent; WORD_LENGTH]).unwrap();
        let row = board.row_mut(0).unwrap();

        // Act / Assert
        assert_eq!(buffer.insert(row, l('b')), None);
        assert_eq!(buffer.delete(row), None);
        assert_eq!(buffer.cursor(), 1);
    }

    #[test]
    fn test_reset_rewinds_cursor() {
        let mut row = GuessRow::default();
        let mut buffer = InputBuffer::new();
        buffer.insert(&mut row, l('a'));

        buffer.reset();

        assert_eq!(buffer.cursor(), 0);
    }
}
