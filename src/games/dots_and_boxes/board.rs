//! Edge and box storage for a dots and boxes board.
//!
//! The board is plain storage: it knows which edges are claimed and who owns
//! each box, but not whose turn it is. Rules live in [`super::rules`].

use super::types::{BoxCell, Edge, Orientation, Seat};
use tracing::instrument;

/// Lengths of the three grids backing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GridSizes {
    pub(crate) horizontal: usize,
    pub(crate) vertical: usize,
    pub(crate) boxes: usize,
}

/// A `rows × cols` board of boxes with its surrounding edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// `(rows + 1) × cols`, row-major.
    horizontal: Vec<bool>,
    /// `rows × (cols + 1)`, row-major.
    vertical: Vec<bool>,
    /// `rows × cols`, row-major.
    boxes: Vec<BoxCell>,
}

impl Board {
    /// Grid lengths for a `rows × cols` board, or `None` if any size,
    /// the edge total or a display maximum overflows `usize`.
    pub(crate) fn grid_sizes(rows: usize, cols: usize) -> Option<GridSizes> {
        let horizontal = rows.checked_add(1)?.checked_mul(cols)?;
        let vertical = cols.checked_add(1)?.checked_mul(rows)?;
        let boxes = rows.checked_mul(cols)?;
        horizontal.checked_add(vertical)?;
        rows.checked_mul(2)?.checked_add(1)?;
        cols.checked_mul(2)?.checked_add(1)?;
        Some(GridSizes {
            horizontal,
            vertical,
            boxes,
        })
    }

    /// Creates an empty board, or `None` when a grid size overflows.
    /// Callers validate that both dimensions are at least 1.
    #[instrument]
    pub(crate) fn try_new(rows: usize, cols: usize) -> Option<Self> {
        let sizes = Self::grid_sizes(rows, cols)?;
        Some(Self {
            rows,
            cols,
            horizontal: vec![false; sizes.horizontal],
            vertical: vec![false; sizes.vertical],
            boxes: vec![BoxCell::Unowned; sizes.boxes],
        })
    }

    /// An empty board with the same dimensions.
    pub(crate) fn cleared(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            horizontal: vec![false; self.horizontal.len()],
            vertical: vec![false; self.vertical.len()],
            boxes: vec![BoxCell::Unowned; self.boxes.len()],
        }
    }

    /// Number of box rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of box columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of boxes.
    pub fn box_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    /// Largest valid display row (`2 * rows + 1`).
    pub fn max_display_row(&self) -> usize {
        self.rows * 2 + 1
    }

    /// Largest valid display column (`2 * cols + 1`).
    pub fn max_display_col(&self) -> usize {
        self.cols * 2 + 1
    }

    /// Whether the edge exists on this board.
    pub fn contains(&self, edge: Edge) -> bool {
        self.edge_index(edge).is_some()
    }

    fn edge_index(&self, edge: Edge) -> Option<usize> {
        let (height, width) = match edge.orientation {
            Orientation::Horizontal => (self.rows + 1, self.cols),
            Orientation::Vertical => (self.rows, self.cols + 1),
        };
        (edge.row < height && edge.col < width).then_some(edge.row * width + edge.col)
    }

    /// Whether the edge has been claimed. Edges off the board read as unclaimed.
    pub fn is_claimed(&self, edge: Edge) -> bool {
        match (edge.orientation, self.edge_index(edge)) {
            (Orientation::Horizontal, Some(idx)) => self.horizontal[idx],
            (Orientation::Vertical, Some(idx)) => self.vertical[idx],
            (_, None) => false,
        }
    }

    /// Whether horizontal edge `[row][col]` is claimed.
    pub fn horizontal(&self, row: usize, col: usize) -> bool {
        self.is_claimed(Edge::horizontal(row, col))
    }

    /// Whether vertical edge `[row][col]` is claimed.
    pub fn vertical(&self, row: usize, col: usize) -> bool {
        self.is_claimed(Edge::vertical(row, col))
    }

    /// Marks an edge claimed. Returns false if the edge is off the board.
    pub(crate) fn claim(&mut self, edge: Edge) -> bool {
        match (edge.orientation, self.edge_index(edge)) {
            (Orientation::Horizontal, Some(idx)) => {
                self.horizontal[idx] = true;
                true
            }
            (Orientation::Vertical, Some(idx)) => {
                self.vertical[idx] = true;
                true
            }
            (_, None) => false,
        }
    }

    /// Owner of box `[row][col]`. Boxes off the board read as unowned.
    pub fn owner(&self, row: usize, col: usize) -> BoxCell {
        if row < self.rows && col < self.cols {
            self.boxes[row * self.cols + col]
        } else {
            BoxCell::Unowned
        }
    }

    /// Assigns box `[row][col]` to a seat.
    pub(crate) fn set_owner(&mut self, row: usize, col: usize, seat: Seat) {
        if row < self.rows && col < self.cols {
            self.boxes[row * self.cols + col] = BoxCell::Owned(seat);
        }
    }

    /// The four edges bounding box `[row][col]`: top, bottom, left, right.
    pub fn box_edges(row: usize, col: usize) -> [Edge; 4] {
        [
            Edge::horizontal(row, col),
            Edge::horizontal(row + 1, col),
            Edge::vertical(row, col),
            Edge::vertical(row, col + 1),
        ]
    }

    /// Whether all four edges of box `[row][col]` are claimed.
    pub fn is_enclosed(&self, row: usize, col: usize) -> bool {
        Self::box_edges(row, col)
            .iter()
            .all(|edge| self.is_claimed(*edge))
    }

    /// Number of boxes owned by anyone.
    pub fn owned_count(&self) -> usize {
        self.boxes.iter().filter(|cell| cell.is_owned()).count()
    }

    /// Number of boxes owned by the given seat.
    pub fn owned_by(&self, seat: Seat) -> usize {
        self.boxes
            .iter()
            .filter(|cell| cell.owner() == Some(seat))
            .count()
    }

    /// Number of claimed edges.
    pub fn claimed_count(&self) -> usize {
        self.horizontal
            .iter()
            .chain(self.vertical.iter())
            .filter(|claimed| **claimed)
            .count()
    }

    /// Every edge on the board, horizontals first, each grid row-major.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let horizontals = (0..=self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| Edge::horizontal(row, col)));
        let verticals = (0..self.rows)
            .flat_map(move |row| (0..=self.cols).map(move |col| Edge::vertical(row, col)));
        horizontals.chain(verticals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_dimensions() {
        let board = Board::try_new(2, 3).unwrap();
        assert_eq!(board.box_count(), 6);
        // 3 dot rows of 3 horizontals + 2 box rows of 4 verticals
        assert_eq!(board.edge_count(), 9 + 8);
        assert_eq!(board.edges().count(), board.edge_count());
        assert_eq!(board.max_display_row(), 5);
        assert_eq!(board.max_display_col(), 7);
        assert_eq!(board.claimed_count(), 0);
        assert_eq!(board.owned_count(), 0);
    }

    #[test]
    fn test_claim_sets_only_that_edge() {
        let mut board = Board::try_new(2, 2).unwrap();
        assert!(board.claim(Edge::vertical(1, 2)));
        assert!(board.vertical(1, 2));
        assert!(!board.vertical(1, 1));
        assert!(!board.horizontal(1, 2));
        assert_eq!(board.claimed_count(), 1);
    }

    #[test]
    fn test_claim_off_board_is_refused() {
        let mut board = Board::try_new(1, 1).unwrap();
        assert!(!board.claim(Edge::horizontal(2, 0)));
        assert!(!board.claim(Edge::vertical(0, 2)));
        assert!(!board.contains(Edge::horizontal(0, 1)));
        assert_eq!(board.claimed_count(), 0);
    }

    #[test]
    fn test_oversized_board_is_refused() {
        assert_eq!(Board::try_new(usize::MAX, 1), None);
        assert_eq!(Board::try_new(1, usize::MAX), None);
        assert_eq!(Board::try_new(usize::MAX / 2, 2), None);
        assert!(Board::grid_sizes(usize::MAX / 4, 1).is_some());
    }

    #[test]
    fn test_cleared_keeps_dimensions() {
        let mut board = Board::try_new(2, 3).unwrap();
        board.claim(Edge::vertical(1, 3));
        board.set_owner(1, 2, Seat::First);
        let cleared = board.cleared();
        assert_eq!(cleared, Board::try_new(2, 3).unwrap());
    }

    #[test]
    fn test_enclosed_needs_all_four_edges() {
        let mut board = Board::try_new(1, 1).unwrap();
        for edge in &Board::box_edges(0, 0)[..3] {
            board.claim(*edge);
            assert!(!board.is_enclosed(0, 0));
        }
        board.claim(Board::box_edges(0, 0)[3]);
        assert!(board.is_enclosed(0, 0));
    }

    #[test]
    fn test_set_owner_counts() {
        let mut board = Board::try_new(2, 2).unwrap();
        board.set_owner(0, 1, Seat::Second);
        board.set_owner(1, 1, Seat::First);
        assert_eq!(board.owner(0, 1), BoxCell::Owned(Seat::Second));
        assert_eq!(board.owned_count(), 2);
        assert_eq!(board.owned_by(Seat::First), 1);
        assert_eq!(board.owned_by(Seat::Second), 1);
        assert_eq!(board.owner(5, 5), BoxCell::Unowned);
    }
}
