//! A single guessable letter.

use std::fmt;

use thiserror::Error;

/// Number of letters in the alphabet the game is played with.
pub const ALPHABET_SIZE: usize = 26;

/// Errors produced when a character cannot be used as a [`Letter`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LetterError {
    /// The character is not an ASCII letter `a`–`z` / `A`–`Z`.
    #[error("not a letter: {0:?}")]
    NotALetter(char),
}

/// One ASCII letter, always stored in lowercase.
///
/// Construction normalizes case, so `Letter::new('S')` and `Letter::new('s')`
/// compare equal.  Display code that wants capitals calls
/// [`Letter::to_uppercase`].
///
/// # Examples
///
/// ```rust
/// use wordle_core::Letter;
///
/// let s = Letter::new('S').unwrap();
/// assert_eq!(s.as_char(), 's');
/// assert_eq!(s.index(), 18);
/// assert!(Letter::new('1').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Creates a letter from `c`, lowercasing it.
    ///
    /// # Errors
    ///
    /// Returns [`LetterError::NotALetter`] for anything outside `a`–`z` / `A`–`Z`.
    pub fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase() as u8))
        } else {
            Err(LetterError::NotALetter(c))
        }
    }

    /// Returns the letter at alphabet position `index` (0 = `a`).
    pub fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_SIZE {
            Some(Self(b'a' + index as u8))
        } else {
            None
        }
    }

    /// Iterates `a` through `z` in order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_SIZE).filter_map(Letter::from_index)
    }

    /// The lowercase character.
    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// The uppercase character, used by keyboard labels.
    pub fn to_uppercase(self) -> char {
        self.0.to_ascii_uppercase() as char
    }

    /// Zero-based alphabet position (`a` = 0, `z` = 25).
    pub fn index(self) -> usize {
        (self.0 - b'a') as usize
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Letter::new(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
