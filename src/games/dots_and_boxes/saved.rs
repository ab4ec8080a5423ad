//! Serialized form of a game.
//!
//! Only the setup and the claimed edges are stored. Everything else (box
//! owners, scores, the turn counter) is rebuilt by replaying the edges, so a
//! payload can never describe a state the engine could not have reached.

use super::action::{MoveError, SetupError};
use super::game::Game;
use super::types::{Edge, Seat};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A game as stored: players, board size and the edges claimed, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    /// Name of the player who moved first.
    pub player_one: String,
    /// Name of the other player.
    pub player_two: String,
    /// Box rows.
    pub rows: usize,
    /// Box columns.
    pub cols: usize,
    /// Claimed edges in the order they were claimed.
    pub moves: Vec<Edge>,
}

impl From<Game> for SavedGame {
    fn from(game: Game) -> Self {
        Self {
            player_one: game.player(Seat::First).as_str().to_string(),
            player_two: game.player(Seat::Second).as_str().to_string(),
            rows: game.board().rows(),
            cols: game.board().cols(),
            moves: game.history().iter().map(|record| *record.edge()).collect(),
        }
    }
}

/// Why a stored game could not be rebuilt.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RestoreError {
    /// The stored players or board size are not a valid setup.
    #[display("invalid setup: {}", _0)]
    Setup(SetupError),

    /// A stored edge lies outside the board.
    #[display("move {index}: {edge} is not on the board")]
    EdgeOffBoard {
        /// Position in the stored move list.
        index: usize,
        /// The offending edge.
        edge: Edge,
    },

    /// A stored edge was rejected by the engine.
    #[display("move {index}: {error}")]
    Move {
        /// Position in the stored move list.
        index: usize,
        /// Why the engine refused it.
        error: MoveError,
    },
}

impl std::error::Error for RestoreError {}

impl From<SetupError> for RestoreError {
    fn from(error: SetupError) -> Self {
        Self::Setup(error)
    }
}

impl TryFrom<SavedGame> for Game {
    type Error = RestoreError;

    #[instrument(skip(saved), fields(rows = saved.rows, cols = saved.cols, moves = saved.moves.len()))]
    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        let mut game = Game::new(&saved.player_one, &saved.player_two, saved.rows, saved.cols)?;

        for (index, edge) in saved.moves.into_iter().enumerate() {
            if !game.board().contains(edge) {
                warn!(index, %edge, "Stored edge is off the board");
                return Err(RestoreError::EdgeOffBoard { index, edge });
            }
            game.claim_edge(edge)
                .map_err(|error| RestoreError::Move { index, error })?;
        }

        Ok(game)
    }
}
