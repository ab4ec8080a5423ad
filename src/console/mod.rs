//! Console front end: reads moves from a line-oriented input and prints the
//! board, status and results.
//!
//! The engine never sees malformed lines; everything typed is parsed and
//! range-checked here first, and the engine re-validates what gets through.

pub mod input;
pub mod render;

use crate::games::dots_and_boxes::{Game, Outcome};
use anyhow::{Context, Result};
use input::{MoveInput, parse_move_line};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every box was claimed.
    Completed(Outcome),
    /// The player quit, or input ran out, before the game finished.
    Quit,
}

const WELCOME: &str = "\
Welcome to Dots & Boxes!
Enter moves by specifying the grid coordinates (row col) printed along the edges.
Pick a coordinate that lies on an edge (between two dots), not a dot or inside a box.
You get another turn if your move completes a box. Type 'q' to quit.
";

/// Plays `game` to completion or until the player quits.
#[instrument(skip_all, fields(rows = game.board().rows(), cols = game.board().cols()))]
pub fn run_session<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut output: W,
) -> Result<SessionEnd> {
    info!("Session started");
    writeln!(output, "{}", WELCOME)?;

    let mut quit = false;
    while !game.is_game_over() {
        write_status(game, &mut output)?;

        let Some((row, col)) = read_move(game, &mut input, &mut output)? else {
            quit = true;
            break;
        };

        match game.apply_move(row, col) {
            Ok(outcome) if outcome.earned_extra_turn() => {
                let plural = if outcome.boxes_completed == 1 { "" } else { "es" };
                writeln!(
                    output,
                    "{} completed {} box{} and moves again.",
                    game.player(outcome.seat),
                    outcome.boxes_completed,
                    plural
                )?;
            }
            Ok(_) => {}
            Err(e) => writeln!(output, "[Invalid move] {}", e)?,
        }
        writeln!(output)?;
    }

    if quit {
        writeln!(output, "\nYou quit the game.")?;
    }
    writeln!(output, "{}\n", render::render_board(game.board()))?;
    writeln!(output, "{}", render::final_report(game))?;
    output.flush().context("Failed to flush output")?;

    let end = match game.outcome() {
        Some(outcome) => SessionEnd::Completed(outcome),
        None => SessionEnd::Quit,
    };
    info!(?end, turns = game.turn_number(), "Session ended");
    Ok(end)
}

fn write_status<W: Write>(game: &Game, output: &mut W) -> Result<()> {
    writeln!(output, "{}\n", render::render_board(game.board()))?;
    writeln!(output, "{}", render::scores_line(game))?;
    writeln!(output, "{}", render::turn_line(game))?;
    Ok(())
}

/// Prompts until a well-formed move is typed. `None` means quit or end of input.
fn read_move<R: BufRead, W: Write>(
    game: &Game,
    input: &mut R,
    output: &mut W,
) -> Result<Option<(i64, i64)>> {
    let max_row = game.board().max_display_row();
    let max_col = game.board().max_display_col();
    let mut line = String::new();

    loop {
        write!(
            output,
            "Move (row col) between 1..{} and 1..{} or 'q' to quit: ",
            max_row, max_col
        )?;
        output.flush().context("Failed to flush prompt")?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read move from input")?;
        if read == 0 {
            debug!("End of input");
            return Ok(None);
        }

        match parse_move_line(&line, max_row, max_col) {
            Ok(MoveInput::Quit) => return Ok(None),
            Ok(MoveInput::Move { row, col }) => return Ok(Some((row, col))),
            Err(e) => {
                debug!(error = %e, line = line.trim(), "Unparseable move line");
                writeln!(output, "[Input error] {}", e)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::dots_and_boxes::Seat;

    fn play(game: &mut Game, script: &str) -> (SessionEnd, String) {
        let mut output = Vec::new();
        let end = run_session(game, script.as_bytes(), &mut output).unwrap();
        (end, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_full_unit_game() {
        let mut game = Game::new("p1", "p2", 1, 1).unwrap();
        let (end, output) = play(&mut game, "1 2\n2,1\n2 3\n3 2\n");

        assert_eq!(end, SessionEnd::Completed(Outcome::Winner(Seat::Second)));
        assert!(output.starts_with("Welcome to Dots & Boxes!"));
        assert!(output.contains("p2 completed 1 box and moves again."));
        assert!(output.contains("Winner: p2 🏆"));
        assert!(!output.contains("You quit"));
    }

    #[test]
    fn test_bad_lines_reprompt() {
        let mut game = Game::new("p1", "p2", 1, 1).unwrap();
        let (end, output) = play(&mut game, "hello there\n1\n9 9\n1 2\nq\n");

        assert_eq!(end, SessionEnd::Quit);
        assert!(output.contains("[Input error] Row and col must be integers."));
        assert!(output.contains("[Input error] Please enter exactly two numbers: row col"));
        assert!(output.contains("[Input error] Out of range. Row must be 1..3, Col 1..3."));
        assert_eq!(game.board().claimed_count(), 1);
        assert!(output.contains("You quit the game."));
        assert!(!output.contains("Winner"));
    }

    #[test]
    fn test_engine_rejections_are_printed() {
        let mut game = Game::new("p1", "p2", 1, 1).unwrap();
        let (_, output) = play(&mut game, "1 2\n1 2\n1 1\nquit\n");

        assert!(output.contains("[Invalid move] That horizontal edge is already taken."));
        assert!(output.contains("[Invalid move] Invalid position (1, 1)."));
        assert_eq!(game.turn_number(), 2);
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut game = Game::new("p1", "p2", 2, 2).unwrap();
        let (end, output) = play(&mut game, "1 2\n");

        assert_eq!(end, SessionEnd::Quit);
        assert!(output.contains("Final Scores: p1 : 0, p2 : 0"));
    }
}
