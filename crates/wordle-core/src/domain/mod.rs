//! Domain entities for the Wordle client engine.
//!
//! This module contains pure game rules with no infrastructure dependencies.
//!
//! # What lives here?
//!
//! - [`letter`] – a validated, lowercase `a`–`z` letter.
//! - [`key`] – a key press from the physical or on-screen keyboard.
//! - [`classification`] – the per-letter score (`Absent < Present < Correct`).
//! - [`board`] – the six guess rows and their revealed scores.
//! - [`input_buffer`] – the cursor that fills and clears the active row.
//! - [`keyboard`] – the best-known score of every keyboard key.
//!
//! The turn-by-turn state machine that ties these together lives in the
//! client crate's application layer, because it needs a transport and a
//! presenter to talk to.

pub mod board;
pub mod classification;
pub mod input_buffer;
pub mod key;
pub mod keyboard;
pub mod letter;
