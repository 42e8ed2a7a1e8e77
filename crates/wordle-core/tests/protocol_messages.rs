//! Integration tests for the wordle-core protocol and domain API.
//!
//! These tests drive the public surface the client crate depends on: parsing
//! an arbiter frame, writing the verdict into the board, and merging it into
//! the keyboard.

use wordle_core::{
    Board, Classification, InputBuffer, KeyState, Letter, ProtocolError, ServerMessage,
    WORD_LENGTH,
};

fn type_guess(board: &mut Board, row: usize, guess: &str) -> InputBuffer {
    let mut buffer = InputBuffer::new();
    let target = board.row_mut(row).expect("row must exist");
    for c in guess.chars() {
        buffer.insert(target, Letter::new(c).expect("test guesses are letters"));
    }
    buffer
}

/// Applies a feedback frame to `row` the way the client does.
fn reveal(
    board: &mut Board,
    keys: &mut KeyState,
    row: usize,
    raw: &str,
) -> Vec<(Letter, Classification)> {
    let verdict = match ServerMessage::parse(raw).expect("frame must parse") {
        ServerMessage::Feedback(v) => v,
        other => panic!("expected feedback, got {other:?}"),
    };
    board.classify(row, verdict.classifications()).expect("row must be open");

    let guess = board.row(row).expect("row must exist");
    let mut updates = Vec::new();
    for col in 0..WORD_LENGTH {
        let letter = guess.letter(col).expect("submitted rows are full");
        if let Some(c) = keys.merge(letter, verdict.classifications()[col]) {
            updates.push((letter, c));
        }
    }
    updates
}

#[test]
fn test_typed_guess_text_matches_what_is_sent() {
    let mut board = Board::new();
    let buffer = type_guess(&mut board, 0, "CRANE");

    assert_eq!(buffer.current_guess_text(board.row(0).unwrap()), "crane");
}

#[test]
fn test_reveal_writes_classifications_into_the_row() {
    let mut board = Board::new();
    let mut keys = KeyState::new();
    type_guess(&mut board, 0, "crane");

    reveal(&mut board, &mut keys, 0, "result:c*-n-");

    let row = board.row(0).unwrap();
    assert_eq!(
        row.classifications(),
        Some([
            Classification::Correct,
            Classification::Present,
            Classification::Absent,
            Classification::Correct,
            Classification::Absent,
        ])
    );
}

#[test]
fn test_key_never_regresses_across_guesses() {
    // Arrange: "soare" puts s in the word, wrong place
    let mut board = Board::new();
    let mut keys = KeyState::new();
    let s = Letter::new('s').unwrap();
    type_guess(&mut board, 0, "soare");
    let first = reveal(&mut board, &mut keys, 0, "result:*----");
    assert!(first.contains(&(s, Classification::Present)));

    // Act: "chess" scores its first s Absent and its second s Present
    type_guess(&mut board, 1, "chess");
    let second = reveal(&mut board, &mut keys, 1, "result:----*");

    // Assert: no update for s was produced, and it is still Present
    assert!(second.iter().all(|(letter, _)| *letter != s));
    assert_eq!(keys.get(s), Some(Classification::Present));
}

#[test]
fn test_repeated_letter_in_one_guess_reports_only_upgrades() {
    let mut board = Board::new();
    let mut keys = KeyState::new();
    type_guess(&mut board, 0, "geese");

    let updates = reveal(&mut board, &mut keys, 0, "result:-e*-e");

    let e = Letter::new('e').unwrap();
    let e_updates: Vec<_> = updates.iter().filter(|(l, _)| *l == e).collect();
    // e: Correct at col 1 first, then Present and Correct are not upgrades.
    assert_eq!(e_updates, vec![&(e, Classification::Correct)]);
}

#[test]
fn test_malformed_frames_are_typed_errors() {
    assert!(matches!(
        ServerMessage::parse("no separator here"),
        Err(ProtocolError::MissingSeparator(_))
    ));
    assert!(matches!(
        ServerMessage::parse("result:toolong"),
        Err(ProtocolError::VerdictLength { actual: 7, .. })
    ));
}
