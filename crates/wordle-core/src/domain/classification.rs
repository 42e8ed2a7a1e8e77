//! Per-letter feedback strength.

/// How well one guessed letter matched the hidden word.
///
/// The variants are declared weakest first, so the derived [`Ord`] gives the
/// total order `Absent < Present < Correct` that the keyboard merge rule
/// relies on.
///
/// | Variant   | Meaning                          | Wire marker     |
/// |-----------|----------------------------------|-----------------|
/// | `Absent`  | letter is not in the word        | `-`             |
/// | `Present` | in the word, wrong position      | `*`             |
/// | `Correct` | in the word, this position       | any other char  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Classification {
    #[default]
    Absent,
    Present,
    Correct,
}

impl Classification {
    /// Short lowercase name used in logs and terminal legends.
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Absent => "absent",
            Classification::Present => "present",
            Classification::Correct => "correct",
        }
    }
}
