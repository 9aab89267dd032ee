//! The 10×10 cell matrix with bounds-checked neighbor queries.

use crate::board::{Cell, SIZE};

/// The cell matrix. A plain value type so that search states copy cheaply.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid([[Cell; SIZE]; SIZE]);

impl Grid {
    pub(crate) fn new() -> Grid {
        Grid([[Cell::Unknown; SIZE]; SIZE])
    }

    /// Reads a cell. `None` means the position is outside the grid, which is
    /// never confused with a cell that is merely still [`Cell::Unknown`].
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < SIZE && col < SIZE {
            Some(self.0[row][col])
        } else {
            None
        }
    }

    /// Reads the cell at a signed offset from (`row`, `col`).
    pub(crate) fn offset(&self, row: usize, col: usize, d_row: i32, d_col: i32) -> Option<Cell> {
        let row = row as i32 + d_row;
        let col = col as i32 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// The cells directly above and below.
    pub fn vertical_neighbors(&self, row: usize, col: usize) -> (Option<Cell>, Option<Cell>) {
        (self.offset(row, col, -1, 0), self.offset(row, col, 1, 0))
    }

    /// The cells directly to the left and to the right.
    pub fn horizontal_neighbors(&self, row: usize, col: usize) -> (Option<Cell>, Option<Cell>) {
        (self.offset(row, col, 0, -1), self.offset(row, col, 0, 1))
    }

    /// The four diagonal neighbors, upper-left first, lower-right last.
    pub fn diagonal_neighbors(&self, row: usize, col: usize) -> [Option<Cell>; 4] {
        [
            self.offset(row, col, -1, -1),
            self.offset(row, col, -1, 1),
            self.offset(row, col, 1, -1),
            self.offset(row, col, 1, 1),
        ]
    }

    // raw store; the guarded write lives on Board, which owns the counters
    pub(crate) fn put(&mut self, row: usize, col: usize, value: Cell) {
        self.0[row][col] = value;
    }

    pub(crate) fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Glyph, Piece};

    #[test]
    fn out_of_range_is_not_unknown() {
        let grid = Grid::new();
        assert_eq!(grid.get(0, 0), Some(Cell::Unknown));
        assert_eq!(grid.get(10, 0), None);
        assert_eq!(grid.get(0, 10), None);
        assert_eq!(grid.offset(0, 0, -1, 0), None);
    }

    #[test]
    fn neighbors_at_a_corner() {
        let mut grid = Grid::new();
        grid.put(0, 1, Cell::Clue(Glyph::Left));
        grid.put(1, 1, Cell::Piece(Piece::Center));

        let (above, below) = grid.vertical_neighbors(0, 0);
        assert_eq!(above, None);
        assert_eq!(below, Some(Cell::Unknown));

        let (left, right) = grid.horizontal_neighbors(0, 0);
        assert_eq!(left, None);
        assert_eq!(right, Some(Cell::Clue(Glyph::Left)));

        assert_eq!(
            grid.diagonal_neighbors(0, 0),
            [None, None, None, Some(Cell::Piece(Piece::Center))]
        );
    }
}
