//! Turn counter invariant: the counter advances only on scoreless moves.

use super::super::Game;
use super::Invariant;

/// Invariant: the turn number is one plus the number of accepted moves that
/// completed no box, and each recorded move carries the turn it was made on.
pub struct TurnCounterInvariant;

impl Invariant<Game> for TurnCounterInvariant {
    fn holds(game: &Game) -> bool {
        let mut turn = 1;
        for record in game.history() {
            if *record.turn() != turn {
                return false;
            }
            if *record.boxes_completed() == 0 {
                turn += 1;
            }
        }
        turn == game.turn_number()
    }

    fn description() -> &'static str {
        "Turn counter advances only on moves that complete no box"
    }
}
