//! Plain-text rendering of a game.

use crate::games::dots_and_boxes::{Board, BoxCell, Game, Outcome, Seat};

const DOT: &str = "•";

/// Draws the board with display coordinates along the top and left.
///
/// Dots are `•`, claimed horizontal edges `-`, claimed vertical edges `|`,
/// and owned boxes show their owner's seat mark.
pub fn render_board(board: &Board) -> String {
    let max_row = board.max_display_row();
    let max_col = board.max_display_col();
    let label_width = max_row.to_string().len();
    let cell_width = max_col.to_string().len();
    let cell = |s: &str| format!(" {:>cell_width$}", s);

    let mut lines = Vec::with_capacity(max_row + 1);

    let mut header = " ".repeat(label_width);
    for col in 1..=max_col {
        header.push_str(&cell(&col.to_string()));
    }
    lines.push(header);

    for display_row in 1..=max_row {
        let mut line = format!("{:>label_width$}", display_row);
        let row = display_row / 2;
        if display_row % 2 == 1 {
            for col in 0..board.cols() {
                line.push_str(&cell(DOT));
                line.push_str(&cell(if board.horizontal(row, col) { "-" } else { " " }));
            }
            line.push_str(&cell(DOT));
        } else {
            let row = row - 1;
            for col in 0..=board.cols() {
                line.push_str(&cell(if board.vertical(row, col) { "|" } else { " " }));
                if col < board.cols() {
                    let mark = match board.owner(row, col) {
                        BoxCell::Owned(seat) => seat.mark().to_string(),
                        BoxCell::Unowned => " ".to_string(),
                    };
                    line.push_str(&cell(&mark));
                }
            }
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// `Scores — p1 [1]: 0 | p2 [2]: 0`
pub fn scores_line(game: &Game) -> String {
    let [(first, first_score), (second, second_score)] = game.scores();
    format!(
        "Scores — {} [{}]: {} | {} [{}]: {}",
        first,
        Seat::First.mark(),
        first_score,
        second,
        Seat::Second.mark(),
        second_score
    )
}

/// `Turn 3: p1`
pub fn turn_line(game: &Game) -> String {
    format!("Turn {}: {}", game.turn_number(), game.current_player())
}

/// Final scores, plus the winner or a tie once every box is owned.
pub fn final_report(game: &Game) -> String {
    let [(first, first_score), (second, second_score)] = game.scores();
    let mut report = format!(
        "Final Scores: {} : {}, {} : {}",
        first, first_score, second, second_score
    );
    match game.outcome() {
        Some(Outcome::Winner(seat)) => {
            report.push_str(&format!("\nWinner: {} 🏆", game.player(seat)));
        }
        Some(Outcome::Tie) => report.push_str("\nIt's a tie!"),
        None => {}
    }
    report
}
