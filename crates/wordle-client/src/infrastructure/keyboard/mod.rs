//! Line-oriented keyboard: turns stdin lines into key presses.
//!
//! A terminal delivers input a line at a time, so each line is expanded into
//! the key presses a player would have made on the on-screen keyboard.  A
//! line that types letters replaces whatever is left in the current row, so
//! it starts with one `Backspace` per column (`⌫⁵` below).  Deleting from an
//! empty row does nothing.
//!
//! | Line          | Keys                                 |
//! |---------------|--------------------------------------|
//! | `crane`       | `⌫⁵ c r a n e Enter`                 |
//! | `cr`          | `⌫⁵ c r Enter` (too short, rejected by the game) |
//! | `Del`         | `Backspace`                          |
//! | `cra Del Del` | `⌫⁵ c r a Backspace Backspace`       |
//! | *(empty)*     | `Enter`                              |
//!
//! The control labels `Enter`, `Del` and `Backspace` are matched without
//! regard to case.  Non-letter characters are dropped, like any key the game
//! does not react to.
//!
//! End of input only stops the reader.  The game goes on until it ends or
//! the connection drops, so `echo crane | wordle-client` still shows the
//! verdict.
//!
//! Reading happens on a dedicated OS thread.  Blocking reads on stdin cannot
//! be cancelled, and a runtime worker stuck in one would delay shutdown.

use std::io::BufRead;
use std::thread;

use tokio::sync::mpsc;
use tracing::{debug, error};

use wordle_core::domain::key::{BACKSPACE_LABEL, DEL_LABEL, ENTER_LABEL};
use wordle_core::{Key, Letter, WORD_LENGTH};

use crate::application::GameEvent;

/// Expands one input line into key presses.
pub fn parse_input_line(line: &str) -> Vec<Key> {
    let mut keys = Vec::new();
    let mut ends_with_control = false;

    if line.split_whitespace().any(|token| control_key(token).is_none()) {
        keys.extend([Key::Backspace; WORD_LENGTH]);
    }

    for token in line.split_whitespace() {
        if let Some(key) = control_key(token) {
            keys.push(key);
            ends_with_control = true;
            continue;
        }
        keys.extend(token.chars().filter_map(|c| Letter::new(c).ok().map(Key::Letter)));
        ends_with_control = false;
    }

    if !ends_with_control {
        keys.push(Key::Enter);
    }
    keys
}

fn control_key(token: &str) -> Option<Key> {
    if token.eq_ignore_ascii_case(ENTER_LABEL) {
        Some(Key::Enter)
    } else if token.eq_ignore_ascii_case(DEL_LABEL) || token.eq_ignore_ascii_case(BACKSPACE_LABEL)
    {
        Some(Key::Backspace)
    } else {
        None
    }
}

/// Reads lines from `reader` and sends their key presses on `events`.
///
/// Stops at end of input without sending anything, or early if the event
/// channel is closed.  Must not be called from inside the async runtime.
pub fn forward_lines<R: BufRead>(reader: R, events: &mpsc::Sender<GameEvent>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("failed to read from stdin: {e}");
                break;
            }
        };

        for key in parse_input_line(&line) {
            if events.blocking_send(GameEvent::Key(key)).is_err() {
                return;
            }
        }
    }

    debug!("end of input");
}

/// Starts the stdin reader thread.  The thread owns `events`, so the sender
/// is dropped once stdin is exhausted.
///
/// # Errors
///
/// Returns the I/O error if the OS refuses to create the thread.
pub fn spawn_stdin_reader(
    events: mpsc::Sender<GameEvent>,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin-keyboard".to_string())
        .spawn(move || forward_lines(std::io::stdin().lock(), &events))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
