//! PlayGame use case: the guess state machine.
//!
//! # States
//!
//! ```text
//!                 letters / Backspace
//!               ┌────────────────────┐
//!               ▼                    │
//!        AwaitingInput ──5th letter──▶ ReadyToSubmit
//!               ▲                         │ Enter (guess sent)
//!               │ invalid / miss          ▼
//!               └──────────────── AwaitingServer
//!                                         │ all-correct verdict    final (0 left)
//!                                         ▼                         ▼
//!                                        Won                       Lost
//! ```
//!
//! `Won` and `Lost` are absorbing.  While `AwaitingServer`, key presses are
//! dropped so the player cannot type into a row whose verdict is still in
//! flight.  After the sixth miss the session stays frozen (no input) until
//! the arbiter's `final` message reveals the word and ends the game.
//!
//! All state changes happen when an event is handled.  Reveal delays in the
//! emitted [`PresenterCommand`]s are pacing hints for the renderer and never
//! hold back the session.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use wordle_core::{
    Board, BoardError, InputBuffer, Key, KeyState, Letter, ProtocolError, ServerMessage, Verdict,
    NUMBER_OF_GUESSES, WORD_LENGTH,
};

use crate::domain::commands::PresenterCommand;

// ── User-facing texts ─────────────────────────────────────────────────────────

/// Shown when Enter is pressed before five letters are typed.
pub const NOT_ENOUGH_LETTERS: &str = "Not enough letters!";

/// Shown when a verdict is all-correct.
pub const WIN_MESSAGE: &str = "You guessed right! Game over!";

/// First of the two messages shown when the game is lost.
pub const OUT_OF_GUESSES: &str = "You've run out of guesses! Game over!";

/// Shown when the connection drops before the game is over.
pub const CONNECTION_LOST: &str = "Connection to the server was lost.";

// ── Errors ────────────────────────────────────────────────────────────────────

/// Error returned when a guess cannot be handed to the transport.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The connection to the arbiter is gone.
    #[error("connection to the arbiter is closed")]
    Closed,
}

/// Errors surfaced by the state machine.
///
/// Every variant has already been shown to the player through the presenter
/// by the time it is returned; callers only need to log it.  A finished game
/// silently discards input and is not an error.
#[derive(Debug, Error)]
pub enum GameError {
    /// Enter was pressed with fewer than five letters typed.
    #[error("guess has {filled} of {} letters", WORD_LENGTH)]
    IncompleteGuess { filled: usize },

    /// The arbiter answered `invalid:<reason>`.
    #[error("guess rejected by arbiter: {0}")]
    Rejected(String),

    /// A well-formed message arrived at a point where it makes no sense.
    #[error("unexpected message from arbiter: {0}")]
    UnexpectedMessage(&'static str),

    /// The arbiter message could not be parsed.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The verdict could not be written into the board.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// The guess could not be sent.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

// ── Collaborator traits ───────────────────────────────────────────────────────

/// Rendering seam.  Receives commands in the order the game emits them.
pub trait Presenter: Send + Sync {
    /// Applies (or schedules) one command.
    fn present(&self, command: PresenterCommand);
}

/// Outbound half of the arbiter connection.
#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    /// Sends the raw guess text, unframed.
    fn send(&self, guess: &str) -> Result<(), TransportError>;
}

// ── Events ────────────────────────────────────────────────────────────────────

/// Everything that can drive the state machine, serialized through one
/// channel so turn order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A key press from the terminal or on-screen keyboard.
    Key(Key),
    /// A raw text frame from the arbiter.
    ServerMessage(String),
    /// The arbiter connection closed.
    Disconnected,
    /// The player asked to quit.
    Quit,
}

// ── Session state ─────────────────────────────────────────────────────────────

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Observable state of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting letters for the current row (or frozen with no guesses left,
    /// waiting for the word reveal).
    AwaitingInput,
    /// All five letters typed; Enter submits.
    ReadyToSubmit,
    /// Guess sent; input locked until the arbiter replies.
    AwaitingServer,
    Won,
    Lost,
}

/// Turn bookkeeping for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    remaining_guesses: usize,
    input: InputBuffer,
    awaiting_server: bool,
    outcome: Option<Outcome>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            remaining_guesses: NUMBER_OF_GUESSES,
            input: InputBuffer::new(),
            awaiting_server: false,
            outcome: None,
        }
    }
}

impl GameSession {
    /// Guesses left, counting down from [`NUMBER_OF_GUESSES`].
    pub fn remaining_guesses(&self) -> usize {
        self.remaining_guesses
    }

    /// Index of the row being typed.  Equals [`NUMBER_OF_GUESSES`] once all
    /// guesses are used up.
    pub fn current_row(&self) -> usize {
        NUMBER_OF_GUESSES - self.remaining_guesses
    }

    /// Next empty slot in the current row.
    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    /// `true` once the game is won or lost.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Derived state-machine phase.
    pub fn phase(&self) -> Phase {
        match self.outcome {
            Some(Outcome::Won) => Phase::Won,
            Some(Outcome::Lost) => Phase::Lost,
            None if self.awaiting_server => Phase::AwaitingServer,
            None if self.input.is_full() => Phase::ReadyToSubmit,
            None => Phase::AwaitingInput,
        }
    }

    /// `true` when key presses may change the board.
    fn accepts_input(&self) -> bool {
        !self.is_terminal() && !self.awaiting_server && self.remaining_guesses > 0
    }
}

// ── State machine ─────────────────────────────────────────────────────────────

/// The guess state machine.
///
/// Owns the [`Board`], the [`KeyState`], and the [`GameSession`].  Side
/// effects go through the injected [`Transport`] and [`Presenter`].
pub struct GuessStateMachine {
    transport: Arc<dyn Transport>,
    presenter: Arc<dyn Presenter>,
    reveal_stagger: Duration,
    board: Board,
    keys: KeyState,
    session: GameSession,
}

impl GuessStateMachine {
    /// Creates a fresh game.  Called when the arbiter connection opens.
    pub fn new(
        transport: Arc<dyn Transport>,
        presenter: Arc<dyn Presenter>,
        reveal_stagger: Duration,
    ) -> Self {
        Self {
            transport,
            presenter,
            reveal_stagger,
            board: Board::new(),
            keys: KeyState::new(),
            session: GameSession::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Routes one event to the matching handler.
    ///
    /// `Quit` is a no-op here; the event loop owning the machine stops on it.
    ///
    /// # Errors
    ///
    /// Whatever the handler returns; see [`GameError`].
    pub fn handle_event(&mut self, event: GameEvent) -> Result<(), GameError> {
        match event {
            GameEvent::Key(key) => self.on_key(key),
            GameEvent::ServerMessage(raw) => self.on_server_message(&raw),
            GameEvent::Disconnected => {
                self.on_disconnected();
                Ok(())
            }
            GameEvent::Quit => Ok(()),
        }
    }

    /// Handles a key press.
    ///
    /// Ignored silently when the game is over, a guess is pending, or no
    /// guesses remain.
    ///
    /// # Errors
    ///
    /// Only `Enter` can fail; see [`GuessStateMachine::submit`].
    pub fn on_key(&mut self, key: Key) -> Result<(), GameError> {
        if !self.session.accepts_input() {
            debug!(?key, phase = ?self.phase(), "key ignored");
            return Ok(());
        }

        match key {
            Key::Letter(letter) => {
                self.insert(letter);
                Ok(())
            }
            Key::Backspace => {
                self.delete();
                Ok(())
            }
            Key::Enter => self.submit(),
        }
    }

    /// Sends the current row to the arbiter.
    ///
    /// # Errors
    ///
    /// - [`GameError::IncompleteGuess`] with fewer than five letters; nothing
    ///   is sent and the board is unchanged.
    /// - [`GameError::Transport`] when the connection is gone.
    pub fn submit(&mut self) -> Result<(), GameError> {
        if !self.session.accepts_input() {
            return Ok(());
        }

        let row = self.session.current_row();
        let guess = self
            .board
            .row(row)
            .map(|r| self.session.input.current_guess_text(r))
            .unwrap_or_default();

        let filled = guess.chars().count();
        if filled != WORD_LENGTH {
            self.show_error(NOT_ENOUGH_LETTERS);
            return Err(GameError::IncompleteGuess { filled });
        }

        if let Err(e) = self.transport.send(&guess) {
            self.show_error(CONNECTION_LOST);
            return Err(e.into());
        }

        debug!(row, %guess, "guess submitted");
        self.session.awaiting_server = true;
        Ok(())
    }

    /// Handles a raw arbiter frame.
    ///
    /// Frames arriving after the game is over are dropped.
    ///
    /// # Errors
    ///
    /// - [`GameError::Rejected`] for `invalid:<reason>` (the reason is shown
    ///   and the row stays editable).
    /// - [`GameError::Protocol`] for frames that cannot be parsed.
    /// - [`GameError::UnexpectedMessage`] for a `final` while guesses remain
    ///   or a verdict with no guess pending.
    pub fn on_server_message(&mut self, raw: &str) -> Result<(), GameError> {
        if self.session.is_terminal() {
            debug!(raw, "message after game over ignored");
            return Ok(());
        }

        let message = match ServerMessage::parse(raw) {
            Ok(message) => message,
            Err(e) => {
                self.show_error(&format!("Unexpected reply from server: {e}"));
                return Err(e.into());
            }
        };

        match message {
            ServerMessage::Invalid(reason) => {
                self.session.awaiting_server = false;
                self.show_error(&reason);
                Err(GameError::Rejected(reason))
            }
            ServerMessage::Final(word) => self.reveal_word(&word),
            ServerMessage::Feedback(verdict) => self.apply_verdict(verdict),
        }
    }

    /// Handles the arbiter connection closing.
    pub fn on_disconnected(&mut self) {
        if !self.session.is_terminal() {
            warn!("arbiter connection closed mid-game");
            self.show_error(CONNECTION_LOST);
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn insert(&mut self, letter: Letter) {
        let row = self.session.current_row();
        let Some(target) = self.board.row_mut(row) else {
            return;
        };
        if let Some(col) = self.session.input.insert(target, letter) {
            self.presenter
                .present(PresenterCommand::FillCell { row, col, letter });
        }
    }

    fn delete(&mut self) {
        let row = self.session.current_row();
        let Some(target) = self.board.row_mut(row) else {
            return;
        };
        if let Some(col) = self.session.input.delete(target) {
            self.presenter
                .present(PresenterCommand::ClearCell { row, col });
        }
    }

    fn reveal_word(&mut self, word: &str) -> Result<(), GameError> {
        if self.session.remaining_guesses > 0 {
            self.show_error("Unexpected reply from server: game is not over yet");
            return Err(GameError::UnexpectedMessage("final before guesses ran out"));
        }

        self.show_error(OUT_OF_GUESSES);
        self.show_error(&format!("The word was: \"{word}\""));
        self.session.awaiting_server = false;
        self.session.outcome = Some(Outcome::Lost);
        info!(word, "game lost");
        Ok(())
    }

    fn apply_verdict(&mut self, verdict: Verdict) -> Result<(), GameError> {
        if !self.session.awaiting_server {
            self.show_error("Unexpected reply from server: no guess is pending");
            return Err(GameError::UnexpectedMessage("verdict with no guess pending"));
        }

        let row = self.session.current_row();
        self.board.classify(row, verdict.classifications())?;
        self.session.awaiting_server = false;

        let letters: Vec<Option<Letter>> = match self.board.row(row) {
            Some(r) => (0..WORD_LENGTH).map(|col| r.letter(col)).collect(),
            None => Vec::new(),
        };

        for (col, classification) in verdict.classifications().into_iter().enumerate() {
            self.presenter.present(PresenterCommand::RevealCell {
                row,
                col,
                classification,
                delay: self.reveal_stagger * col as u32,
            });

            let Some(letter) = letters.get(col).copied().flatten() else {
                continue;
            };
            if let Some(upgraded) = self.keys.merge(letter, classification) {
                self.presenter.present(PresenterCommand::UpdateKey {
                    letter,
                    classification: upgraded,
                });
            }
        }

        if verdict.is_win() {
            self.presenter
                .present(PresenterCommand::ShowSuccess(WIN_MESSAGE.to_string()));
            self.session.remaining_guesses = 0;
            self.session.outcome = Some(Outcome::Won);
            info!(guesses = row + 1, "game won");
        } else {
            self.session.remaining_guesses -= 1;
            self.session.input.reset();
            debug!(
                remaining = self.session.remaining_guesses,
                "verdict applied"
            );
        }
        Ok(())
    }

    fn show_error(&self, text: &str) {
        self.presenter
            .present(PresenterCommand::ShowError(text.to_string()));
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
