//! First-class action types for dots and boxes.
//!
//! Accepted moves are returned as values and kept in the game's history;
//! rejected moves come back as a [`MoveError`] carrying the reason.

use super::types::{Edge, Orientation, Seat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Seat that made the move.
    pub seat: Seat,
    /// Edge that was claimed.
    pub edge: Edge,
    /// Boxes closed by this edge: 0, 1 or 2.
    pub boxes_completed: u8,
}

impl MoveOutcome {
    /// True when the mover keeps the turn.
    pub fn earned_extra_turn(&self) -> bool {
        self.boxes_completed > 0
    }
}

/// One accepted move in the game's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number the move was made on.
    turn: u32,
    /// Seat that made the move.
    seat: Seat,
    /// Edge that was claimed.
    edge: Edge,
    /// Boxes closed by the move.
    boxes_completed: u8,
}

impl MoveRecord {
    pub(crate) fn new(turn: u32, outcome: MoveOutcome) -> Self {
        Self {
            turn,
            seat: outcome.seat,
            edge: outcome.edge,
            boxes_completed: outcome.boxes_completed,
        }
    }
}

/// Reason a move was rejected. The game state is unchanged whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Display coordinate outside the board.
    #[display(
        "Coordinates out of range. Row must be in [1..{max_row}], Col in [1..{max_col}]."
    )]
    OutOfRange {
        /// Requested display row.
        row: i64,
        /// Requested display column.
        col: i64,
        /// Largest valid display row.
        max_row: usize,
        /// Largest valid display column.
        max_col: usize,
    },

    /// Coordinate names a dot or a box interior.
    #[display(
        "Invalid position ({row}, {col}). Choose an edge (between two dots), not a dot or box interior."
    )]
    NotAnEdge {
        /// Requested display row.
        row: i64,
        /// Requested display column.
        col: i64,
    },

    /// Coordinate maps to an edge index outside its grid.
    #[display("That {orientation} edge is out of bounds.")]
    EdgeOutOfBounds {
        /// Grid the coordinate pointed into.
        orientation: Orientation,
        /// Requested display row.
        row: i64,
        /// Requested display column.
        col: i64,
    },

    /// The edge was claimed earlier in the game.
    #[display("That {} edge is already taken.", _0.orientation)]
    EdgeAlreadyClaimed(Edge),
}

impl std::error::Error for MoveError {}

/// Reason a game could not be created.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// A board needs at least one row and one column of boxes.
    #[display("rows and cols must be >= 1 (got {rows} x {cols})")]
    InvalidDimensions {
        /// Requested box rows.
        rows: usize,
        /// Requested box columns.
        cols: usize,
    },

    /// The edge and box grids for these dimensions overflow `usize`.
    #[display("a {rows} x {cols} board is too large")]
    BoardTooLarge {
        /// Requested box rows.
        rows: usize,
        /// Requested box columns.
        cols: usize,
    },

    /// A player name is empty or only whitespace.
    #[display("player names must not be blank")]
    BlankPlayerName,

    /// Both seats were given the same name.
    #[display("players must have distinct names (both are {:?})", _0)]
    DuplicatePlayers(String),
}

impl std::error::Error for SetupError {}
