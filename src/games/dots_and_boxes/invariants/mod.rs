//! First-class invariants for dots and boxes.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The engine checks them in debug builds; each one is also testable
//! on its own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for four-tuples of [`Invariant`]s, the shape of
/// [`DotsAndBoxesInvariants`].
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks: [(fn(&S) -> bool, &'static str); 4] = [
            (I1::holds, I1::description()),
            (I2::holds, I2::description()),
            (I3::holds, I3::description()),
            (I4::holds, I4::description()),
        ];
        let violations: Vec<_> = checks
            .iter()
            .filter(|(holds, _)| !holds(state))
            .map(|&(_, description)| InvariantViolation::new(description))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod history_consistent;
pub mod ownership_matches_edges;
pub mod scores_match_boxes;
pub mod turn_counter;

pub use history_consistent::HistoryConsistentInvariant;
pub use ownership_matches_edges::OwnershipMatchesEdgesInvariant;
pub use scores_match_boxes::ScoresMatchBoxesInvariant;
pub use turn_counter::TurnCounterInvariant;

/// All dots and boxes invariants as a composable set.
pub type DotsAndBoxesInvariants = (
    ScoresMatchBoxesInvariant,
    OwnershipMatchesEdgesInvariant,
    TurnCounterInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::dots_and_boxes::{Game, Seat};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new("p1", "p2", 3, 3).unwrap();
        assert!(DotsAndBoxesInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::new("p1", "p2", 1, 2).unwrap();
        for (row, col) in [(1, 2), (2, 1), (3, 2), (2, 3), (1, 4)] {
            game.apply_move(row, col).unwrap();
        }
        assert!(DotsAndBoxesInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut game = Game::new("p1", "p2", 1, 1).unwrap();
        game.apply_move(1, 2).unwrap();

        // Hand the box to a player without enclosing it or scoring it
        game.board.set_owner(0, 0, Seat::First);

        let violations = DotsAndBoxesInvariants::check_all(&game).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert!(descriptions.contains(&ScoresMatchBoxesInvariant::description()));
        assert!(descriptions.contains(&OwnershipMatchesEdgesInvariant::description()));
        assert!(!descriptions.contains(&TurnCounterInvariant::description()));
    }
}
