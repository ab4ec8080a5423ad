//! Strictly Dots library - a type-safe Dots and Boxes engine
//!
//! # Architecture
//!
//! - **Games**: the dots and boxes engine, coordinate translation, rules
//!   and invariants
//! - **Console**: line-oriented front end that renders the board and
//!   forwards moves to the engine
//! - **Config**: TOML game configuration
//!
//! # Example
//!
//! ```
//! use strictly_dots::{Game, Seat};
//!
//! let mut game = Game::new("p1", "p2", 1, 1)?;
//! for (row, col) in [(1, 2), (2, 1), (2, 3)] {
//!     game.apply_move(row, col)?;
//! }
//! let outcome = game.apply_move(3, 2)?;
//! assert_eq!(outcome.boxes_completed, 1);
//! assert!(game.is_game_over());
//! assert_eq!(game.score(Seat::Second), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

pub mod console;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console session
pub use console::{SessionEnd, run_session};

// Crate-level exports - Game types (dots and boxes)
pub use games::dots_and_boxes::{
    Board, BoxCell, Edge, Game, MoveError, MoveOutcome, MoveRecord, Orientation, Outcome,
    PlayerName, RestoreError, SavedGame, Seat, SetupError, display_coordinate, invariants, rules,
    translate,
};
