//! Parsing of typed move lines.

use tracing::instrument;

/// A line the player typed, once understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    /// Leave the game.
    Quit,
    /// Claim the edge at this display coordinate.
    Move {
        /// Display row.
        row: i64,
        /// Display column.
        col: i64,
    },
}

/// Why a line was not accepted. The player is asked again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Not exactly two tokens.
    #[display("Please enter exactly two numbers: row col")]
    WrongArity,
    /// A token is not an integer.
    #[display("Row and col must be integers.")]
    NotInteger,
    /// Outside the display grid.
    #[display("Out of range. Row must be 1..{max_row}, Col 1..{max_col}.")]
    OutOfRange {
        /// Largest valid display row.
        max_row: usize,
        /// Largest valid display column.
        max_col: usize,
    },
}

impl std::error::Error for InputError {}

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// Parses `row col` (space- or comma-separated) or a quit word.
#[instrument]
pub fn parse_move_line(line: &str, max_row: usize, max_col: usize) -> Result<MoveInput, InputError> {
    let line = line.trim();
    if QUIT_WORDS.iter().any(|word| line.eq_ignore_ascii_case(word)) {
        return Ok(MoveInput::Quit);
    }

    let normalized = line.replace(',', " ");
    let parts: Vec<&str> = normalized.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(InputError::WrongArity);
    };

    let (Ok(row), Ok(col)) = (row.parse::<i64>(), col.parse::<i64>()) else {
        return Err(InputError::NotInteger);
    };

    let in_range = |value: i64, max: usize| usize::try_from(value).is_ok_and(|v| (1..=max).contains(&v));
    if !in_range(row, max_row) || !in_range(col, max_col) {
        return Err(InputError::OutOfRange { max_row, max_col });
    }

    Ok(MoveInput::Move { row, col })
}
