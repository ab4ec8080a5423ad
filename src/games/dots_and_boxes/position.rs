//! Display-coordinate translation.
//!
//! Players address edges on a `(2 * rows + 1) × (2 * cols + 1)` grid of
//! 1-based display coordinates in which dots sit at (odd, odd), box
//! interiors at (even, even), horizontal edges at (odd, even) and vertical
//! edges at (even, odd).

use super::action::MoveError;
use super::types::{Edge, Orientation};
use tracing::instrument;

/// Maps a display coordinate on a `rows × cols` board to an edge.
///
/// Total over all `i64` inputs: every coordinate either yields an edge or a
/// typed [`MoveError`].
#[instrument]
pub fn translate(rows: usize, cols: usize, row: i64, col: i64) -> Result<Edge, MoveError> {
    let max_row = rows.saturating_mul(2).saturating_add(1);
    let max_col = cols.saturating_mul(2).saturating_add(1);

    let (Some(r), Some(c)) = (in_range(row, max_row), in_range(col, max_col)) else {
        return Err(MoveError::OutOfRange {
            row,
            col,
            max_row,
            max_col,
        });
    };

    match (r % 2, c % 2) {
        (1, 0) => {
            let edge = Edge::horizontal(r / 2, (c / 2).wrapping_sub(1));
            check_bounds(edge, rows + 1, cols, row, col)
        }
        (0, 1) => {
            let edge = Edge::vertical((r / 2).wrapping_sub(1), c / 2);
            check_bounds(edge, rows, cols + 1, row, col)
        }
        _ => Err(MoveError::NotAnEdge { row, col }),
    }
}

/// Returns the coordinate as `usize` when it lies in `1..=max`.
fn in_range(value: i64, max: usize) -> Option<usize> {
    usize::try_from(value)
        .ok()
        .filter(|value| (1..=max).contains(value))
}

fn check_bounds(
    edge: Edge,
    height: usize,
    width: usize,
    row: i64,
    col: i64,
) -> Result<Edge, MoveError> {
    if edge.row < height && edge.col < width {
        Ok(edge)
    } else {
        Err(MoveError::EdgeOutOfBounds {
            orientation: edge.orientation,
            row,
            col,
        })
    }
}

/// Display coordinate of an edge: the inverse of [`translate`].
pub fn display_coordinate(edge: Edge) -> (usize, usize) {
    match edge.orientation {
        Orientation::Horizontal => (edge.row * 2 + 1, edge.col * 2 + 2),
        Orientation::Vertical => (edge.row * 2 + 2, edge.col * 2 + 1),
    }
}
