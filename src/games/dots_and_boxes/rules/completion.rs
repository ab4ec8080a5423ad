//! Box adjacency and completion.

use super::super::{Board, Edge, Orientation};
use tracing::instrument;

/// Boxes touching an edge, as `(row, col)`.
///
/// A horizontal edge on dot row `i` touches the box above when `i > 0` and
/// the box below when `i < rows`. A vertical edge at dot column `j` touches
/// the box to its left when `j > 0` and to its right when `j < cols`. The
/// two neighbours are always distinct; boundary edges have only one.
#[instrument(skip(board))]
pub fn adjacent_boxes(board: &Board, edge: Edge) -> Vec<(usize, usize)> {
    let mut boxes = Vec::with_capacity(2);
    match edge.orientation {
        Orientation::Horizontal => {
            if edge.row > 0 {
                boxes.push((edge.row - 1, edge.col));
            }
            if edge.row < board.rows() {
                boxes.push((edge.row, edge.col));
            }
        }
        Orientation::Vertical => {
            if edge.col > 0 {
                boxes.push((edge.row, edge.col - 1));
            }
            if edge.col < board.cols() {
                boxes.push((edge.row, edge.col));
            }
        }
    }
    boxes
}

/// Unowned boxes next to `edge` whose four edges are all claimed.
///
/// Called right after `edge` is claimed, this is the set of boxes the mover
/// has just completed.
#[instrument(skip(board))]
pub fn completed_by(board: &Board, edge: Edge) -> Vec<(usize, usize)> {
    adjacent_boxes(board, edge)
        .into_iter()
        .filter(|&(row, col)| !board.owner(row, col).is_owned() && board.is_enclosed(row, col))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::dots_and_boxes::Seat;

    #[test]
    fn test_boundary_edges_have_one_neighbour() {
        let board = Board::try_new(2, 2).unwrap();
        assert_eq!(adjacent_boxes(&board, Edge::horizontal(0, 1)), vec![(0, 1)]);
        assert_eq!(adjacent_boxes(&board, Edge::horizontal(2, 0)), vec![(1, 0)]);
        assert_eq!(adjacent_boxes(&board, Edge::vertical(1, 0)), vec![(1, 0)]);
        assert_eq!(adjacent_boxes(&board, Edge::vertical(0, 2)), vec![(0, 1)]);
    }

    #[test]
    fn test_interior_edges_have_two_neighbours() {
        let board = Board::try_new(2, 2).unwrap();
        assert_eq!(
            adjacent_boxes(&board, Edge::horizontal(1, 0)),
            vec![(0, 0), (1, 0)]
        );
        assert_eq!(
            adjacent_boxes(&board, Edge::vertical(0, 1)),
            vec![(0, 0), (0, 1)]
        );
    }

    #[test]
    fn test_single_box_board_never_double_counts() {
        let board = Board::try_new(1, 1).unwrap();
        for edge in board.edges() {
            assert_eq!(adjacent_boxes(&board, edge), vec![(0, 0)]);
        }
    }

    #[test]
    fn test_completed_by_skips_owned_boxes() {
        let mut board = Board::try_new(1, 1).unwrap();
        for edge in Board::box_edges(0, 0) {
            board.claim(edge);
        }
        assert_eq!(completed_by(&board, Edge::vertical(0, 1)), vec![(0, 0)]);

        board.set_owner(0, 0, Seat::First);
        assert!(completed_by(&board, Edge::vertical(0, 1)).is_empty());
    }

    #[test]
    fn test_completed_by_needs_enclosure() {
        let mut board = Board::try_new(1, 2).unwrap();
        board.claim(Edge::vertical(0, 1));
        assert!(completed_by(&board, Edge::vertical(0, 1)).is_empty());
    }
}
