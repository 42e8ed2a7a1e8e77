//! The game's event loop.
//!
//! Key presses, arbiter frames and the disconnect notice all arrive on one
//! `mpsc` channel and are handed to the [`GuessStateMachine`] one at a time,
//! so every event sees the state left by the previous one.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::{GameError, GameEvent, GuessStateMachine};

/// Feeds `events` to `machine` until the game ends, the player quits, the
/// connection drops, or every sender is gone.  Returns the machine so the
/// caller can inspect the final state.
pub async fn run_event_loop(
    mut machine: GuessStateMachine,
    mut events: mpsc::Receiver<GameEvent>,
) -> GuessStateMachine {
    while let Some(event) = events.recv().await {
        debug!(?event, "dispatching event");
        let stop = matches!(event, GameEvent::Quit | GameEvent::Disconnected);

        match machine.handle_event(event) {
            Ok(()) => {}
            Err(e @ (GameError::IncompleteGuess { .. } | GameError::Rejected(_))) => {
                debug!("{e}");
            }
            Err(e) => warn!("{e}"),
        }

        if stop {
            info!("session ended");
            break;
        }
        if let Some(outcome) = machine.session().outcome() {
            info!(?outcome, "game over");
            break;
        }
    }
    machine
}

// ── Tests ─────────────────────────────────────────────────────────────────────
