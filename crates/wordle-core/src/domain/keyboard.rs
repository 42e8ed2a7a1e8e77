//! Keyboard key colouring: the best score seen for each letter.
//!
//! # The merge rule (for beginners)
//!
//! Every revealed guess tells us something about the letters it used.  The
//! keyboard shows the *strongest* thing we have learned about each letter so
//! far, using the order `Absent < Present < Correct`.
//!
//! A key therefore never moves backwards.  If `s` was shown as `Present`
//! after guessing "soare", a later guess "chess" that scores one of its `s`
//! letters `Absent` must not turn the key grey again: we already know `s` is
//! in the word.
//!
//! Because the merge is `max`, it is commutative and idempotent; the order in
//! which positions are merged only changes the order of presenter updates.

use crate::domain::classification::Classification;
use crate::domain::letter::{Letter, ALPHABET_SIZE};

/// On-screen keyboard rows as printed on the buttons.
///
/// `Enter` and `Del` are the two editing keys; see [`crate::Key::from_label`].
pub const KEYBOARD_ROWS: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["Enter", "Z", "X", "C", "V", "B", "N", "M", "Del"],
];

/// Best-known classification for each of the 26 letters.
///
/// A key with no entry has not appeared in any revealed guess yet ("no
/// information"), which the renderer draws differently from `Absent`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyState {
    keys: [Option<Classification>; ALPHABET_SIZE],
}

impl KeyState {
    /// Creates a keyboard with no information about any key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Best classification known for `letter`, or `None` if it has not been
    /// revealed yet.
    pub fn get(&self, letter: Letter) -> Option<Classification> {
        self.keys[letter.index()]
    }

    /// Applies `max(current, classification)` to `letter`.
    ///
    /// Returns `Some(new_value)` when the displayed value changed (first
    /// information about the key, or an upgrade) and `None` when the merge
    /// left the key as it was.  Callers forward only `Some` results to the
    /// presenter, so a regression can never reach the screen.
    pub fn merge(
        &mut self,
        letter: Letter,
        classification: Classification,
    ) -> Option<Classification> {
        let slot = &mut self.keys[letter.index()];
        match *slot {
            Some(current) if current >= classification => None,
            _ => {
                *slot = Some(classification);
                Some(classification)
            }
        }
    }

    /// Iterates every letter that has a known classification.
    pub fn known(&self) -> impl Iterator<Item = (Letter, Classification)> + '_ {
        Letter::all().filter_map(move |l| self.get(l).map(|c| (l, c)))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classification::Classification::{Absent, Correct, Present};

    fn l(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn test_new_keyboard_has_no_information() {
        let keys = KeyState::new();
        assert!(Letter::all().all(|letter| keys.get(letter).is_none()));
        assert_eq!(keys.known().count(), 0);
    }

    #[test]
    fn test_first_merge_is_always_reported() {
        let mut keys = KeyState::new();
        assert_eq!(keys.merge(l('x'), Absent), Some(Absent));
        assert_eq!(keys.get(l('x')), Some(Absent));
    }

    #[test]
    fn test_upgrades_are_reported() {
        let mut keys = KeyState::new();
        keys.merge(l('s'), Absent);
        assert_eq!(keys.merge(l('s'), Present), Some(Present));
        assert_eq!(keys.merge(l('s'), Correct), Some(Correct));
        assert_eq!(keys.get(l('s')), Some(Correct));
    }

    #[test]
    fn test_regressions_are_ignored() {
        // Arrange: "soare" revealed s as Present
        let mut keys = KeyState::new();
        keys.merge(l('s'), Present);

        // Act: "chess" reveals an s as Absent
        let update = keys.merge(l('s'), Absent);

        // Assert
        assert_eq!(update, None);
        assert_eq!(keys.get(l('s')), Some(Present));
    }

    #[test]
    fn test_repeating_same_value_is_not_reported() {
        let mut keys = KeyState::new();
        keys.merge(l('e'), Correct);
        assert_eq!(keys.merge(l('e'), Correct), None);
    }

    #[test]
    fn test_merge_is_monotonic_for_every_sequence() {
        // Every sequence of three classifications applied to one key must
        // produce a non-decreasing series of stored values.
        let all = [Absent, Present, Correct];
        for a in all {
            for b in all {
                for c in all {
                    let mut keys = KeyState::new();
                    let mut previous = None;
                    for value in [a, b, c] {
                        keys.merge(l('k'), value);
                        let stored = keys.get(l('k'));
                        assert!(stored >= previous, "{a:?},{b:?},{c:?} regressed");
                        previous = stored;
                    }
                    assert_eq!(previous, Some(a.max(b).max(c)));
                }
            }
        }
    }

    #[test]
    fn test_keyboard_rows_cover_the_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS
            .iter()
            .flat_map(|row| row.iter())
            .filter(|label| label.len() == 1)
            .filter_map(|label| label.chars().next())
            .collect();
        letters.sort_unstable();
        let expected: Vec<char> = ('A'..='Z').collect();
        assert_eq!(letters, expected);
    }
}
