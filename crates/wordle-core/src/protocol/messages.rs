//! Text messages exchanged with the arbiter.
//!
//! # Wire format
//!
//! Arbiter → client, one websocket text frame per message:
//!
//! ```text
//! <tag>:<payload>
//! ```
//!
//! The tag ends at the **first** colon; the payload is everything after it
//! (and may itself contain colons).
//!
//! | Tag        | Payload                           | Parsed as                  |
//! |------------|-----------------------------------|----------------------------|
//! | `invalid`  | human-readable rejection reason   | [`ServerMessage::Invalid`] |
//! | `final`    | the hidden word                   | [`ServerMessage::Final`]   |
//! | any other  | 5-character verdict               | [`ServerMessage::Feedback`]|
//!
//! The reference arbiter tags verdicts `result`, but any tag that is neither
//! `invalid` nor `final` is accepted as feedback.
//!
//! Client → arbiter is the raw lowercase guess with no framing at all, so it
//! has no type here.

use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

use crate::protocol::feedback::Verdict;

/// Tag of a rejected guess.
pub const INVALID_TAG: &str = "invalid";

/// Tag of the word reveal sent after the last guess was used up.
pub const FINAL_TAG: &str = "final";

/// Tag the reference arbiter uses for verdicts.
pub const RESULT_TAG: &str = "result";

/// Separator between tag and payload.
pub const TAG_SEPARATOR: char = ':';

/// Errors that can occur while parsing arbiter messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The message has no `:` separating tag and payload.
    #[error("malformed message (no tag separator): {0:?}")]
    MissingSeparator(String),

    /// A verdict payload did not have one character per guessed letter.
    #[error("verdict must be {expected} characters, got {actual}")]
    VerdictLength { expected: usize, actual: usize },
}

/// A parsed arbiter → client message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerMessage {
    /// The guess was rejected (not a word, wrong length, …).  The guess does
    /// not count against the player.
    Invalid(String),

    /// The game is over and the hidden word is revealed.
    Final(String),

    /// Per-letter verdict for the pending guess.
    Feedback(Verdict),
}

impl ServerMessage {
    /// Parses a raw text frame.
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::MissingSeparator`] when there is no `:`.
    /// - [`ProtocolError::VerdictLength`] when a feedback payload is not
    ///   exactly five characters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordle_core::ServerMessage;
    ///
    /// let msg = ServerMessage::parse("invalid:That is not a word.").unwrap();
    /// assert_eq!(msg, ServerMessage::Invalid("That is not a word.".into()));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ProtocolError> {
        let (tag, payload) = raw
            .split_once(TAG_SEPARATOR)
            .ok_or_else(|| ProtocolError::MissingSeparator(raw.to_string()))?;

        trace!(tag, payload, "parsing arbiter message");

        match tag {
            INVALID_TAG => Ok(ServerMessage::Invalid(payload.to_string())),
            FINAL_TAG => Ok(ServerMessage::Final(payload.to_string())),
            _ => Verdict::decode(payload).map(ServerMessage::Feedback),
        }
    }
}

impl FromStr for ServerMessage {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServerMessage::parse(s)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
