//! History invariant: the claimed edges are exactly the recorded moves.

use super::super::Game;
use super::Invariant;

/// Invariant: replaying the history onto an empty board claims each edge
/// once and reproduces the current edge grids.
///
/// Because the history only grows, this also shows claimed edges are never
/// released.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let current = game.board();
        let mut replayed = current.cleared();

        for record in game.history() {
            let edge = *record.edge();
            if replayed.is_claimed(edge) || !replayed.claim(edge) {
                return false;
            }
        }

        current
            .edges()
            .all(|edge| current.is_claimed(edge) == replayed.is_claimed(edge))
    }

    fn description() -> &'static str {
        "Claimed edges match move history"
    }
}
