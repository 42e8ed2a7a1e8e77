//! Recording doubles for the `Presenter` and `Transport` seams.
//!
//! # Why recording doubles?
//!
//! The real presenter draws on a terminal and the real transport needs a
//! running arbiter.  Neither can be observed from test code.  These doubles
//! push every call into a `Mutex<Vec<...>>` so tests can assert exactly what
//! the game emitted and in what order.
//!
//! # Usage in tests
//!
//! ```ignore
//! let presenter = Arc::new(RecordingPresenter::new());
//! let transport = Arc::new(RecordingTransport::new());
//! let mut game = GuessStateMachine::new(transport.clone(), presenter.clone(), stagger);
//!
//! game.on_key(Key::Enter)?;
//! assert_eq!(transport.sent(), vec!["crane"]);
//! ```
//!
//! # `closed` flag
//!
//! Call [`RecordingTransport::close`] to make every later `send` fail with
//! `TransportError::Closed`, as if the connection had dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::application::{Presenter, Transport, TransportError};
use crate::domain::commands::PresenterCommand;

/// A presenter that records every command.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    commands: Mutex<Vec<PresenterCommand>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far.
    pub fn commands(&self) -> Vec<PresenterCommand> {
        self.commands
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }

    /// Returns and forgets the recorded commands.
    pub fn take(&self) -> Vec<PresenterCommand> {
        self.commands
            .lock()
            .map(|mut c| std::mem::take(&mut *c))
            .unwrap_or_default()
    }
}

impl Presenter for RecordingPresenter {
    fn present(&self, command: PresenterCommand) {
        if let Ok(mut commands) = self.commands.lock() {
            commands.push(command);
        }
    }
}

/// A transport that records every guess.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<String>>,
    closed: AtomicBool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guesses sent so far, oldest first.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Simulates the connection dropping.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Relaxed);
    }
}

impl Transport for RecordingTransport {
    fn send(&self, guess: &str) -> Result<(), TransportError> {
        if self.closed.load(Ordering::Relaxed) {
            return Err(TransportError::Closed);
        }
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(guess.to_string());
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_presenter_take_empties_log() {
        // Arrange
        let presenter = RecordingPresenter::new();
        presenter.present(PresenterCommand::ShowError("x".to_string()));

        // Act
        let taken = presenter.take();

        // Assert
        assert_eq!(taken.len(), 1);
        assert!(presenter.commands().is_empty());
    }

    #[test]
    fn test_recording_transport_fails_after_close() {
        let transport = RecordingTransport::new();
        transport.send("crane").unwrap();

        transport.close();

        assert_eq!(transport.send("slate"), Err(TransportError::Closed));
        assert_eq!(transport.sent(), vec!["crane".to_string()]);
    }
}
