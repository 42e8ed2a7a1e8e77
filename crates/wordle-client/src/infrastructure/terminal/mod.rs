//! Terminal presenter: draws the board and keyboard on stdout.
//!
//! # Two halves
//!
//! - [`TerminalPresenter`] implements the application's `Presenter` trait.
//!   It is called synchronously from the state machine and only pushes the
//!   command onto an unbounded channel.
//! - [`run_renderer`] owns the receiving end.  It keeps a [`Screen`]
//!   projection of what the player should see, applies commands in order,
//!   and redraws whenever the queue is drained.
//!
//! # Reveal pacing
//!
//! A verdict produces five `RevealCell` commands with delays `0, s, 2s, …`
//! measured from the moment the verdict arrived.  The renderer sleeps until
//! each cell's due time and redraws in between, so cells flip one after
//! another.  Game state has already moved on by then; the sleeping only
//! affects what is on screen.
//!
//! # Cell styles
//!
//! | State      | Colour               | Plain     |
//! |------------|----------------------|-----------|
//! | empty      | –                    | `[ ]`     |
//! | typed      | bold                 | `[C]`     |
//! | `Correct`  | black on green       | `+C+`     |
//! | `Present`  | black on yellow      | `?C?`     |
//! | `Absent`   | white on grey        | `-C-`     |

use std::fmt::Write as _;
use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, error, trace};

use wordle_core::{
    Classification, Key, KeyState, Letter, KEYBOARD_ROWS, NUMBER_OF_GUESSES, WORD_LENGTH,
};

use crate::application::Presenter;
use crate::domain::commands::PresenterCommand;

// ── Presenter ─────────────────────────────────────────────────────────────────

/// Channel-backed [`Presenter`] for the terminal.
#[derive(Debug, Clone)]
pub struct TerminalPresenter {
    commands: mpsc::UnboundedSender<PresenterCommand>,
}

impl TerminalPresenter {
    /// Creates the presenter and the receiver to hand to [`run_renderer`].
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PresenterCommand>) {
        let (commands, rx) = mpsc::unbounded_channel();
        (Self { commands }, rx)
    }
}

impl Presenter for TerminalPresenter {
    fn present(&self, command: PresenterCommand) {
        if self.commands.send(command).is_err() {
            trace!("renderer stopped; command dropped");
        }
    }
}

// ── Screen projection ─────────────────────────────────────────────────────────

/// A toast line under the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toast {
    Error(String),
    Success(String),
}

/// One board cell as currently displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<Letter>,
    pub classification: Option<Classification>,
}

/// What the player currently sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    cells: [[Cell; WORD_LENGTH]; NUMBER_OF_GUESSES],
    keys: KeyState,
    toasts: Vec<Toast>,
}

impl Screen {
    /// An empty board with an uncoloured keyboard.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn key(&self, letter: Letter) -> Option<Classification> {
        self.keys.get(letter)
    }

    /// Toasts shown since the last [`Screen::clear_toasts`].
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn clear_toasts(&mut self) {
        self.toasts.clear();
    }

    /// Applies one command.  Out-of-range coordinates are ignored.
    pub fn apply(&mut self, command: PresenterCommand) {
        match command {
            PresenterCommand::FillCell { row, col, letter } => {
                if let Some(cell) = self.cell_mut(row, col) {
                    cell.letter = Some(letter);
                }
            }
            PresenterCommand::ClearCell { row, col } => {
                if let Some(cell) = self.cell_mut(row, col) {
                    cell.letter = None;
                }
            }
            PresenterCommand::RevealCell {
                row,
                col,
                classification,
                ..
            } => {
                if let Some(cell) = self.cell_mut(row, col) {
                    cell.classification = Some(classification);
                }
            }
            PresenterCommand::UpdateKey {
                letter,
                classification,
            } => {
                self.keys.merge(letter, classification);
            }
            PresenterCommand::ShowError(text) => self.toasts.push(Toast::Error(text)),
            PresenterCommand::ShowSuccess(text) => self.toasts.push(Toast::Success(text)),
        }
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Draws the board, the keyboard and any toasts.
    ///
    /// The frame carries styling only; clearing the screen is left to the
    /// renderer.
    pub fn render(&self, color: bool) -> String {
        let mut out = String::new();

        for row in &self.cells {
            out.push_str("  ");
            for cell in row {
                let glyph = cell.letter.map(Letter::to_uppercase).unwrap_or(' ');
                let typed = cell.letter.is_some();
                out.push_str(&style_cell(glyph, typed, cell.classification, color));
            }
            out.push('\n');
        }
        out.push('\n');

        for labels in KEYBOARD_ROWS {
            out.push_str("  ");
            for label in labels {
                out.push_str(&self.render_key(label, color));
                out.push(' ');
            }
            out.push('\n');
        }

        for toast in &self.toasts {
            out.push('\n');
            let _ = match (toast, color) {
                (Toast::Error(text), true) => write!(out, "{}", text.as_str().red()),
                (Toast::Success(text), true) => write!(out, "{}", text.as_str().green()),
                (Toast::Error(text) | Toast::Success(text), false) => write!(out, "{text}"),
            };
        }
        out.push('\n');
        out
    }

    fn render_key(&self, label: &str, color: bool) -> String {
        match Key::from_label(label) {
            Some(Key::Letter(letter)) => {
                style_cell(letter.to_uppercase(), false, self.keys.get(letter), color)
            }
            _ => format!(" {label} "),
        }
    }
}

fn style_cell(
    glyph: char,
    typed: bool,
    classification: Option<Classification>,
    color: bool,
) -> String {
    if !color {
        return match classification {
            Some(Classification::Correct) => format!("+{glyph}+"),
            Some(Classification::Present) => format!("?{glyph}?"),
            Some(Classification::Absent) => format!("-{glyph}-"),
            None => format!("[{glyph}]"),
        };
    }

    let face = format!(" {glyph} ");
    let styled = match classification {
        Some(Classification::Correct) => face.black().on_green(),
        Some(Classification::Present) => face.black().on_yellow(),
        Some(Classification::Absent) => face.white().on_dark_grey(),
        None if typed => format!("[{glyph}]").bold(),
        None => return format!("[{glyph}]"),
    };
    styled.to_string()
}

// ── Renderer task ─────────────────────────────────────────────────────────────

/// Applies commands to a [`Screen`] and writes frames to `out` until every
/// presenter handle is dropped.  Returns the final screen.
///
/// An initial empty board is drawn before the first command arrives.
pub async fn run_renderer<W: Write>(
    mut commands: mpsc::UnboundedReceiver<PresenterCommand>,
    color: bool,
    mut out: W,
) -> Screen {
    let mut screen = Screen::new();
    let mut reveal_origin = Instant::now();
    draw(&mut screen, color, &mut out);

    while let Some(first) = commands.recv().await {
        let mut next = Some(first);
        while let Some(command) = next {
            if let PresenterCommand::RevealCell { delay, .. } = &command {
                if delay.is_zero() {
                    reveal_origin = Instant::now();
                } else {
                    draw(&mut screen, color, &mut out);
                    sleep_until(reveal_origin + *delay).await;
                }
            }
            screen.apply(command);
            next = commands.try_recv().ok();
        }
        draw(&mut screen, color, &mut out);
    }

    debug!("renderer stopped");
    screen
}

fn draw<W: Write>(screen: &mut Screen, color: bool, out: &mut W) {
    if let Err(e) = write_frame(&screen.render(color), color, out) {
        error!("failed to draw frame: {e}");
    }
    screen.clear_toasts();
}

/// Writes one frame, repainting from the top-left corner in colour mode.
fn write_frame<W: Write>(frame: &str, color: bool, out: &mut W) -> io::Result<()> {
    if color {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    out.write_all(frame.as_bytes())?;
    out.flush()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn test_fill_and_clear_cell() {
        // Arrange
        let mut screen = Screen::new();

        // Act
        screen.apply(PresenterCommand::FillCell {
            row: 0,
            col: 0,
            letter: letter('c'),
        });
        screen.apply(PresenterCommand::FillCell {
            row: 0,
            col: 1,
            letter: letter('r'),
        });
        screen.apply(PresenterCommand::ClearCell { row: 0, col: 1 });

        // Assert
        assert_eq!(screen.cell(0, 0).unwrap().letter, Some(letter('c')));
        assert_eq!(screen.cell(0, 1).unwrap().letter, None);
    }

    #[test]
    fn test_out_of_range_commands_are_ignored() {
        let mut screen = Screen::new();

        screen.apply(PresenterCommand::ClearCell { row: 9, col: 9 });

        assert_eq!(screen, Screen::new());
    }

    #[test]
    fn test_reveal_and_key_update() {
        let mut screen = Screen::new();

        screen.apply(PresenterCommand::RevealCell {
            row: 2,
            col: 4,
            classification: Classification::Present,
            delay: Duration::ZERO,
        });
        screen.apply(PresenterCommand::UpdateKey {
            letter: letter('s'),
            classification: Classification::Present,
        });

        assert_eq!(
            screen.cell(2, 4).unwrap().classification,
            Some(Classification::Present)
        );
        assert_eq!(screen.key(letter('s')), Some(Classification::Present));
    }

    #[test]
    fn test_plain_render_shows_styles_and_toasts() {
        // Arrange
        let mut screen = Screen::new();
        screen.apply(PresenterCommand::FillCell {
            row: 0,
            col: 0,
            letter: letter('c'),
        });
        screen.apply(PresenterCommand::RevealCell {
            row: 0,
            col: 0,
            classification: Classification::Correct,
            delay: Duration::ZERO,
        });
        screen.apply(PresenterCommand::FillCell {
            row: 1,
            col: 0,
            letter: letter('q'),
        });
        screen.apply(PresenterCommand::ShowError("Not enough letters!".to_string()));

        // Act
        let frame = screen.render(false);

        // Assert
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines[0], "  +C+[ ][ ][ ][ ]");
        assert_eq!(lines[1], "  [Q][ ][ ][ ][ ]");
        assert!(frame.contains(" Enter "));
        assert!(frame.contains(" Del "));
        assert!(frame.contains("Not enough letters!"));
        assert!(!frame.contains('\x1b'));
    }

    #[test]
    fn test_color_render_styles_revealed_cells_and_keys() {
        // Arrange
        let mut screen = Screen::new();
        screen.apply(PresenterCommand::FillCell {
            row: 0,
            col: 0,
            letter: letter('c'),
        });
        screen.apply(PresenterCommand::RevealCell {
            row: 0,
            col: 0,
            classification: Classification::Correct,
            delay: Duration::ZERO,
        });
        screen.apply(PresenterCommand::UpdateKey {
            letter: letter('a'),
            classification: Classification::Absent,
        });
        screen.apply(PresenterCommand::ShowSuccess("Splendid!".to_string()));

        // Act
        let frame = screen.render(true);

        // Assert
        assert!(frame.contains(&" C ".black().on_green().to_string()));
        assert!(frame.contains(&" A ".white().on_dark_grey().to_string()));
        assert!(frame.contains(&"Splendid!".green().to_string()));
        assert!(!frame.contains("+C+"));
    }

    #[tokio::test]
    async fn test_color_renderer_clears_screen_before_each_frame() {
        // Arrange
        let (presenter, rx) = TerminalPresenter::new();
        drop(presenter);
        let mut clear = Vec::new();
        queue!(clear, Clear(ClearType::All), MoveTo(0, 0)).unwrap();
        let mut out: Vec<u8> = Vec::new();

        // Act
        run_renderer(rx, true, &mut out).await;

        // Assert
        assert!(out.starts_with(&clear));
    }

    #[tokio::test]
    async fn test_plain_renderer_never_clears_screen() {
        let (presenter, rx) = TerminalPresenter::new();
        drop(presenter);
        let mut out: Vec<u8> = Vec::new();

        run_renderer(rx, false, &mut out).await;

        assert!(out.starts_with(b"  [ ]"));
        assert!(!out.contains(&0x1b));
    }

    #[test]
    fn test_terminal_presenter_forwards_commands() {
        let (presenter, mut rx) = TerminalPresenter::new();

        presenter.present(PresenterCommand::ShowSuccess("yay".to_string()));

        assert_eq!(
            rx.try_recv().unwrap(),
            PresenterCommand::ShowSuccess("yay".to_string())
        );
    }

    #[tokio::test]
    async fn test_renderer_applies_commands_and_stops_when_presenter_dropped() {
        // Arrange
        let (presenter, rx) = TerminalPresenter::new();
        presenter.present(PresenterCommand::FillCell {
            row: 0,
            col: 0,
            letter: letter('w'),
        });
        presenter.present(PresenterCommand::ShowError("Word not found".to_string()));
        drop(presenter);
        let mut out: Vec<u8> = Vec::new();

        // Act
        let screen = run_renderer(rx, false, &mut out).await;

        // Assert
        assert_eq!(screen.cell(0, 0).unwrap().letter, Some(letter('w')));
        assert!(screen.toasts().is_empty(), "toasts are cleared after drawing");
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[W]"));
        assert!(text.contains("Word not found"));
    }

    #[tokio::test]
    async fn test_renderer_honors_reveal_delays() {
        // Arrange
        let (presenter, rx) = TerminalPresenter::new();
        for col in 0..2 {
            presenter.present(PresenterCommand::RevealCell {
                row: 0,
                col,
                classification: Classification::Absent,
                delay: Duration::from_millis(20) * col as u32,
            });
        }
        drop(presenter);
        let started = std::time::Instant::now();

        // Act
        let screen = run_renderer(rx, false, std::io::sink()).await;

        // Assert
        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(
            screen.cell(0, 1).unwrap().classification,
            Some(Classification::Absent)
        );
    }
}
