//! Core domain types for dots and boxes.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// One of the two seats at the table.
///
/// The seat, not the name, is what boxes and scores are keyed by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum Seat {
    /// Moves on odd turns (turn 1 included).
    First,
    /// Moves on even turns.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Seat that moves on the given 1-based turn number.
    pub fn for_turn(turn: u32) -> Self {
        if turn.saturating_sub(1) % 2 == 0 {
            Seat::First
        } else {
            Seat::Second
        }
    }

    /// Index into per-seat arrays (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// Single-character mark drawn inside owned boxes.
    pub fn mark(self) -> char {
        match self {
            Seat::First => '1',
            Seat::Second => '2',
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::First => write!(f, "first player"),
            Seat::Second => write!(f, "second player"),
        }
    }
}

/// A player's display name, unique within a game.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{}", _0)]
pub struct PlayerName(String);

impl PlayerName {
    /// Creates a player name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Ownership state of a single box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoxCell {
    /// Not yet completed.
    #[default]
    Unowned,
    /// Completed by the player in this seat.
    Owned(Seat),
}

impl BoxCell {
    /// Returns the owning seat, if any.
    pub fn owner(self) -> Option<Seat> {
        match self {
            BoxCell::Unowned => None,
            BoxCell::Owned(seat) => Some(seat),
        }
    }

    /// True once some player has completed the box.
    pub fn is_owned(self) -> bool {
        matches!(self, BoxCell::Owned(_))
    }
}

/// Direction of an edge between two dots.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, derive_more::Display,
)]
pub enum Orientation {
    /// Joins two dots in the same dot row.
    #[display("horizontal")]
    Horizontal,
    /// Joins two dots in the same dot column.
    #[display("vertical")]
    Vertical,
}

/// Reference to one edge in the horizontal or vertical edge grid.
///
/// Indices are 0-based grid indices, not display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Which grid the edge lives in.
    pub orientation: Orientation,
    /// Grid row.
    pub row: usize,
    /// Grid column.
    pub col: usize,
}

impl Edge {
    /// Horizontal edge on dot row `row`, spanning box column `col`.
    pub fn horizontal(row: usize, col: usize) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            row,
            col,
        }
    }

    /// Vertical edge on box row `row`, at dot column `col`.
    pub fn vertical(row: usize, col: usize) -> Self {
        Self {
            orientation: Orientation::Vertical,
            row,
            col,
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} edge [{}][{}]", self.orientation, self.row, self.col)
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The seat with the higher score.
    Winner(Seat),
    /// Both seats own the same number of boxes.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Winner(seat) => Some(*seat),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was tied.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}
