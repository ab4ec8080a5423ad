//! Ownership invariant: a box is owned exactly when it is enclosed.

use super::super::Game;
use super::Invariant;

/// Invariant: owned boxes have all four edges claimed, and no enclosed box
/// is left unowned.
pub struct OwnershipMatchesEdgesInvariant;

impl Invariant<Game> for OwnershipMatchesEdgesInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        (0..board.rows()).all(|row| {
            (0..board.cols())
                .all(|col| board.owner(row, col).is_owned() == board.is_enclosed(row, col))
        })
    }

    fn description() -> &'static str {
        "Boxes are owned exactly when enclosed"
    }
}
