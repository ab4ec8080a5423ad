//! End-of-game detection and scoring.

use super::super::{Board, Outcome, Seat};
use tracing::instrument;

/// True once every box has an owner.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.owned_count() == board.box_count()
}

/// Final result, or `None` while boxes remain unowned.
///
/// The seat owning more boxes wins; equal counts tie.
#[instrument(skip(board))]
pub fn decide(board: &Board) -> Option<Outcome> {
    if !is_full(board) {
        return None;
    }
    let first = board.owned_by(Seat::First);
    let second = board.owned_by(Seat::Second);
    Some(match first.cmp(&second) {
        std::cmp::Ordering::Greater => Outcome::Winner(Seat::First),
        std::cmp::Ordering::Less => Outcome::Winner(Seat::Second),
        std::cmp::Ordering::Equal => Outcome::Tie,
    })
}
