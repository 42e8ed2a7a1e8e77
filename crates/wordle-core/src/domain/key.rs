//! Key presses accepted by the game.
//!
//! Two input surfaces produce keys:
//!
//! - **Physical keys** arrive as a key name: a single character for letters,
//!   `"Enter"` and `"Backspace"` for the two editing keys.  Everything else
//!   (`"Shift"`, `"F1"`, `"7"`, …) is ignored.
//! - **On-screen buttons** carry their printed label.  The only label that
//!   differs from a physical key name is `"Del"`, which means `Backspace`;
//!   every other label passes through unchanged.

use crate::domain::letter::Letter;

/// Label of the on-screen delete button.
pub const DEL_LABEL: &str = "Del";
/// Key name of the submit key.
pub const ENTER_LABEL: &str = "Enter";
/// Key name of the delete key.
pub const BACKSPACE_LABEL: &str = "Backspace";

/// A key press after the input surface has been normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A letter key (case already normalized).
    Letter(Letter),
    /// Submit the current guess.
    Enter,
    /// Remove the last typed letter.
    Backspace,
}

impl Key {
    /// Maps a key name or on-screen button label to a [`Key`].
    ///
    /// Returns `None` for keys the game does not react to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordle_core::{Key, Letter};
    ///
    /// assert_eq!(Key::from_label("Del"), Some(Key::Backspace));
    /// assert_eq!(Key::from_label("A"), Some(Key::Letter(Letter::new('a').unwrap())));
    /// assert_eq!(Key::from_label("Shift"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Key> {
        match label {
            ENTER_LABEL => Some(Key::Enter),
            BACKSPACE_LABEL | DEL_LABEL => Some(Key::Backspace),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Letter::new(c).ok().map(Key::Letter),
                    _ => None,
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
