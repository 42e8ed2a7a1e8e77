//! Verdict decoding: arbiter payload → per-position classifications.
//!
//! Wire format: exactly [`WORD_LENGTH`] characters, one per guessed letter.
//!
//! ```text
//! '-'        → Absent
//! '*'        → Present
//! any other  → Correct   (the arbiter echoes the correct letter itself)
//! ```
//!
//! No letter-identity check is made on the "any other" case: `"c?a!e"` decodes
//! to `[Correct, Correct, Correct, Correct, Correct]` just like `"crane"`.

use crate::domain::board::WORD_LENGTH;
use crate::domain::classification::Classification;
use crate::protocol::messages::ProtocolError;

/// Wire marker for a letter that is not in the word.
pub const ABSENT_MARKER: char = '-';

/// Wire marker for a letter that is in the word at another position.
pub const PRESENT_MARKER: char = '*';

/// Classification of a single wire character.
pub fn classify_marker(marker: char) -> Classification {
    match marker {
        ABSENT_MARKER => Classification::Absent,
        PRESENT_MARKER => Classification::Present,
        _ => Classification::Correct,
    }
}

/// A decoded verdict, position-aligned with the guess it scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    classifications: [Classification; WORD_LENGTH],
}

impl Verdict {
    /// Decodes a verdict payload.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::VerdictLength`] unless `payload` is exactly
    /// [`WORD_LENGTH`] characters long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordle_core::{Classification, Verdict};
    ///
    /// let verdict = Verdict::decode("c*-n-").unwrap();
    /// assert_eq!(verdict.get(0), Some(Classification::Correct));
    /// assert_eq!(verdict.get(1), Some(Classification::Present));
    /// assert_eq!(verdict.get(2), Some(Classification::Absent));
    /// assert!(!verdict.is_win());
    /// ```
    pub fn decode(payload: &str) -> Result<Self, ProtocolError> {
        let actual = payload.chars().count();
        if actual != WORD_LENGTH {
            return Err(ProtocolError::VerdictLength {
                expected: WORD_LENGTH,
                actual,
            });
        }

        let mut classifications = [Classification::Absent; WORD_LENGTH];
        for (slot, marker) in classifications.iter_mut().zip(payload.chars()) {
            *slot = classify_marker(marker);
        }
        Ok(Self { classifications })
    }

    /// All five classifications in guess order.
    pub fn classifications(&self) -> [Classification; WORD_LENGTH] {
        self.classifications
    }

    /// Classification at position `col`.
    pub fn get(&self, col: usize) -> Option<Classification> {
        self.classifications.get(col).copied()
    }

    /// `true` when every position is `Correct`.
    pub fn is_win(&self) -> bool {
        self.classifications
            .iter()
            .all(|c| *c == Classification::Correct)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
