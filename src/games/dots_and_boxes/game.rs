//! Dots and boxes game engine.
//!
//! A [`Game`] owns the board, the two players, their scores and the turn
//! counter. It is mutated in place by [`Game::apply_move`] and queried by
//! whatever front end drives it; it never performs IO.

use super::action::{MoveError, MoveOutcome, MoveRecord, SetupError};
use super::board::Board;
use super::invariants::{DotsAndBoxesInvariants, InvariantSet};
use super::position::translate;
use super::rules;
use super::saved::SavedGame;
use super::types::{Edge, Outcome, PlayerName, Seat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Dots and boxes game engine.
///
/// Serializes as its setup plus the claimed edges in order. Deserializing
/// replays those edges through the same checks as [`Game::apply_move`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "SavedGame", try_from = "SavedGame")]
pub struct Game {
    pub(super) players: [PlayerName; 2],
    pub(super) board: Board,
    pub(super) scores: [u32; 2],
    pub(super) turn: u32,
    pub(super) history: Vec<MoveRecord>,
}

impl Game {
    /// Creates a game on a `rows × cols` board of boxes.
    ///
    /// `player_one` takes the first turn.
    #[instrument(skip(player_one, player_two))]
    pub fn new(
        player_one: impl AsRef<str>,
        player_two: impl AsRef<str>,
        rows: usize,
        cols: usize,
    ) -> Result<Self, SetupError> {
        let (player_one, player_two) = (player_one.as_ref(), player_two.as_ref());
        Self::check_setup(player_one, player_two, rows, cols).inspect_err(|e| {
            warn!(error = %e, "Rejected game setup");
        })?;
        let board = Board::try_new(rows, cols).ok_or(SetupError::BoardTooLarge { rows, cols })?;

        debug!(rows, cols, "New game");
        Ok(Self {
            players: [PlayerName::new(player_one), PlayerName::new(player_two)],
            board,
            scores: [0, 0],
            turn: 1,
            history: Vec::new(),
        })
    }

    /// Checks the arguments [`Game::new`] would accept, without building a board.
    pub fn check_setup(
        player_one: &str,
        player_two: &str,
        rows: usize,
        cols: usize,
    ) -> Result<(), SetupError> {
        if rows < 1 || cols < 1 {
            return Err(SetupError::InvalidDimensions { rows, cols });
        }
        if Board::grid_sizes(rows, cols).is_none() {
            return Err(SetupError::BoardTooLarge { rows, cols });
        }
        if player_one.trim().is_empty() || player_two.trim().is_empty() {
            return Err(SetupError::BlankPlayerName);
        }
        if player_one == player_two {
            return Err(SetupError::DuplicatePlayers(player_one.to_string()));
        }
        Ok(())
    }

    /// Claims the edge at a 1-based display coordinate for the current player.
    ///
    /// Completing one or two boxes awards them to the mover, who then moves
    /// again. Completing none passes the turn. On error nothing changes.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn apply_move(&mut self, row: i64, col: i64) -> Result<MoveOutcome, MoveError> {
        let edge = translate(self.board.rows(), self.board.cols(), row, col).inspect_err(|e| {
            warn!(error = %e, "Rejected move");
        })?;
        self.claim_edge(edge)
    }

    /// Claims an edge known to be on the board.
    pub(super) fn claim_edge(&mut self, edge: Edge) -> Result<MoveOutcome, MoveError> {
        if self.board.is_claimed(edge) {
            warn!(%edge, "Rejected move on claimed edge");
            return Err(MoveError::EdgeAlreadyClaimed(edge));
        }

        let seat = self.current_seat();
        self.board.claim(edge);
        debug!(%edge, %seat, "Edge claimed");

        let completed = rules::completed_by(&self.board, edge);
        for &(box_row, box_col) in &completed {
            self.board.set_owner(box_row, box_col, seat);
            self.scores[seat.index()] += 1;
            debug!(box_row, box_col, %seat, "Box completed");
        }

        let outcome = MoveOutcome {
            seat,
            edge,
            // At most two boxes touch an edge.
            boxes_completed: completed.len() as u8,
        };
        self.history.push(MoveRecord::new(self.turn, outcome));

        if completed.is_empty() {
            self.turn += 1;
            debug!(turn = self.turn, next = %self.current_seat(), "Turn passed");
        }

        self.assert_invariants();
        Ok(outcome)
    }

    /// True iff every box is owned.
    pub fn is_game_over(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Final result once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        rules::decide(&self.board)
    }

    /// Name of the player whose move it is.
    pub fn current_player(&self) -> &PlayerName {
        self.player(self.current_seat())
    }

    /// Seat whose move it is.
    pub fn current_seat(&self) -> Seat {
        Seat::for_turn(self.turn)
    }

    /// Name of the player in a seat.
    pub fn player(&self, seat: Seat) -> &PlayerName {
        &self.players[seat.index()]
    }

    /// Boxes owned by a seat.
    pub fn score(&self, seat: Seat) -> u32 {
        self.scores[seat.index()]
    }

    /// Each player's name paired with their score, first seat first.
    pub fn scores(&self) -> [(&PlayerName, u32); 2] {
        [
            (self.player(Seat::First), self.score(Seat::First)),
            (self.player(Seat::Second), self.score(Seat::Second)),
        ]
    }

    /// Current turn number, starting at 1.
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    /// Read-only view of edges and boxes.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Checks every game invariant, panicking in debug builds on violation.
    fn assert_invariants(&self) {
        let result = DotsAndBoxesInvariants::check_all(self);
        if let Err(violations) = &result {
            for violation in violations {
                warn!(description = %violation.description, "Invariant violated");
            }
        }
        debug_assert!(result.is_ok(), "Invariants violated: {:?}", result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::dots_and_boxes::BoxCell;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            Game::new("p1", "p2", 0, 3),
            Err(SetupError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert_eq!(
            Game::new("p1", "p2", 2, 0),
            Err(SetupError::InvalidDimensions { rows: 2, cols: 0 })
        );
    }

    #[test]
    fn test_new_rejects_duplicate_names() {
        assert_eq!(
            Game::new("ann", "ann", 2, 2),
            Err(SetupError::DuplicatePlayers("ann".to_string()))
        );
    }

    #[test]
    fn test_new_rejects_oversized_board() {
        assert_eq!(
            Game::new("a", "b", usize::MAX, 1),
            Err(SetupError::BoardTooLarge {
                rows: usize::MAX,
                cols: 1
            })
        );
        assert_eq!(
            Game::new("a", "b", 2, usize::MAX),
            Err(SetupError::BoardTooLarge {
                rows: 2,
                cols: usize::MAX
            })
        );
    }

    #[test]
    fn test_new_rejects_blank_names() {
        assert_eq!(Game::new("", "p2", 2, 2), Err(SetupError::BlankPlayerName));
        assert_eq!(Game::new("p1", " \t", 2, 2), Err(SetupError::BlankPlayerName));
    }

    #[test]
    fn test_initial_state() {
        let game = Game::new("p1", "p2", 2, 3).unwrap();
        assert_eq!(game.turn_number(), 1);
        assert_eq!(game.current_seat(), Seat::First);
        assert_eq!(game.current_player().as_str(), "p1");
        assert_eq!(game.score(Seat::First), 0);
        assert_eq!(game.score(Seat::Second), 0);
        assert!(!game.is_game_over());
        assert_eq!(game.outcome(), None);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_move_without_completion_passes_turn() {
        let mut game = Game::new("p1", "p2", 1, 1).unwrap();
        let outcome = game.apply_move(1, 2).unwrap();
        assert_eq!(outcome.boxes_completed, 0);
        assert_eq!(outcome.seat, Seat::First);
        assert_eq!(outcome.edge, Edge::horizontal(0, 0));
        assert_eq!(game.turn_number(), 2);
        assert_eq!(game.current_player().as_str(), "p2");
    }

    #[test]
    fn test_rejection_leaves_state_unchanged() {
        let mut game = Game::new("p1", "p2", 1, 1).unwrap();
        game.apply_move(1, 2).unwrap();
        let before = game.clone();

        assert!(matches!(
            game.apply_move(1, 2),
            Err(MoveError::EdgeAlreadyClaimed(_))
        ));
        assert!(matches!(
            game.apply_move(2, 2),
            Err(MoveError::NotAnEdge { .. })
        ));
        assert!(matches!(
            game.apply_move(0, 1),
            Err(MoveError::OutOfRange { .. })
        ));
        assert_eq!(game, before);
    }

    #[test]
    fn test_completion_keeps_turn() {
        let mut game = Game::new("p1", "p2", 1, 1).unwrap();
        for (row, col) in [(1, 2), (2, 1), (2, 3)] {
            assert_eq!(game.apply_move(row, col).unwrap().boxes_completed, 0);
        }
        assert_eq!(game.turn_number(), 4);
        assert_eq!(game.current_seat(), Seat::Second);

        let outcome = game.apply_move(3, 2).unwrap();
        assert_eq!(outcome.boxes_completed, 1);
        assert_eq!(outcome.seat, Seat::Second);
        assert_eq!(game.turn_number(), 4);
        assert_eq!(game.board().owner(0, 0), BoxCell::Owned(Seat::Second));
        assert!(game.is_game_over());
        assert_eq!(game.outcome(), Some(Outcome::Winner(Seat::Second)));
    }

    #[test]
    fn test_history_records_turns() {
        let mut game = Game::new("p1", "p2", 1, 1).unwrap();
        game.apply_move(1, 2).unwrap();
        game.apply_move(3, 2).unwrap();
        let history = game.history();
        assert_eq!(history.len(), 2);
        assert_eq!(*history[0].turn(), 1);
        assert_eq!(*history[0].seat(), Seat::First);
        assert_eq!(*history[1].turn(), 2);
        assert_eq!(*history[1].seat(), Seat::Second);
        assert_eq!(*history[1].edge(), Edge::horizontal(1, 0));
    }
}
