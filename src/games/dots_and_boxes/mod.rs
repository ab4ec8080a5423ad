//! Dots and boxes: two players take turns claiming edges between dots, and
//! whoever closes a box owns it and moves again.

mod action;
mod board;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod saved;
mod types;

pub use action::{MoveError, MoveOutcome, MoveRecord, SetupError};
pub use board::Board;
pub use game::Game;
pub use position::{display_coordinate, translate};
pub use saved::{RestoreError, SavedGame};
pub use types::{BoxCell, Edge, Orientation, Outcome, PlayerName, Seat};
