//! Score invariant: each score equals the boxes that seat owns.

use super::super::{Game, Seat};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: every seat's score equals the number of boxes it owns.
///
/// Summed over both seats this also gives `total score == owned boxes`.
pub struct ScoresMatchBoxesInvariant;

impl Invariant<Game> for ScoresMatchBoxesInvariant {
    fn holds(game: &Game) -> bool {
        Seat::iter().all(|seat| game.score(seat) as usize == game.board().owned_by(seat))
    }

    fn description() -> &'static str {
        "Scores match owned boxes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        let game = Game::new("p1", "p2", 2, 2).unwrap();
        assert!(ScoresMatchBoxesInvariant::holds(&game));
    }

    #[test]
    fn test_completed_box_holds() {
        let mut game = Game::new("p1", "p2", 1, 1).unwrap();
        for (row, col) in [(1, 2), (2, 1), (2, 3), (3, 2)] {
            game.apply_move(row, col).unwrap();
        }
        assert!(ScoresMatchBoxesInvariant::holds(&game));
    }

    #[test]
    fn test_inflated_score_violates() {
        let mut game = Game::new("p1", "p2", 1, 1).unwrap();
        game.scores[Seat::Second.index()] = 1;
        assert!(!ScoresMatchBoxesInvariant::holds(&game));
    }
}
