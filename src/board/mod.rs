//! The board: grid, line counters, fleet and the deduction engine.

mod cell;
mod grid;

pub use self::cell::{Cell, Glyph, Piece};
pub use self::grid::Grid;

use std::fmt;

use crate::puzzle::Hint;

/// Grid side length.
pub const SIZE: usize = 10;

/// Unplaced ships per length 1..=4 on a fresh board.
const FLEET: [i8; 4] = [4, 3, 2, 1];

/// How a ship lies on the board. `Point` is the degenerate orientation of a
/// size-1 ship.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Orientation {
    /// Ship runs top to bottom.
    Vertical,
    /// Ship runs left to right.
    Horizontal,
    /// Single square, no axis.
    Point,
}

/// A concrete ship placement: anchor square, length and orientation.
///
/// The anchor is the topmost or leftmost square. Length 1 goes with
/// [`Orientation::Point`], longer ships with a real axis.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Placement {
    /// Anchor row.
    pub row: usize,
    /// Anchor column.
    pub col: usize,
    /// Ship length, 1..=4.
    pub len: usize,
    /// Axis of the ship.
    pub orientation: Orientation,
}

// Outcome of one guaranteed-line scan.
enum Deduced {
    Ship(Placement),
    Contradiction,
}

/// A board in some state of resolution.
///
/// Boards are plain values. The search clones one per explored node, so all
/// storage is inline and `Copy`. Once the `dead` flag is set it stays set for
/// that value; the search discards such branches.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    pub(crate) grid: Grid,
    // ship cells still required per line; signed because degenerate branches
    // can overshoot before they are pruned
    pub(crate) row_ships: [i8; SIZE],
    pub(crate) col_ships: [i8; SIZE],
    // cells not yet resolved per line
    pub(crate) row_open: [i8; SIZE],
    pub(crate) col_open: [i8; SIZE],
    pub(crate) fleet: [i8; 4],
    // row-major scan position for free enumeration
    pub(crate) cursor: (usize, usize),
    // index of the next unconsumed hint
    pub(crate) hints_done: usize,
    pub(crate) dead: bool,
}

impl Board {
    pub(crate) fn new(row_targets: &[u8; SIZE], col_targets: &[u8; SIZE]) -> Board {
        let mut board = Board {
            grid: Grid::new(),
            row_ships: row_targets.map(|t| t as i8),
            col_ships: col_targets.map(|t| t as i8),
            row_open: [SIZE as i8; SIZE],
            col_open: [SIZE as i8; SIZE],
            fleet: FLEET,
            cursor: (0, 0),
            hints_done: 0,
            dead: false,
        };
        board.saturate();
        board
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether the board violated a capacity or fleet invariant.
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Whether every ship of the fleet has been placed.
    pub fn is_solved(&self) -> bool {
        self.fleet == [0; 4]
    }

    // Guarded write. Clue squares are never overwritten; the open counters
    // move exactly once, on the transition away from `Unknown`.
    fn set(&mut self, row: usize, col: usize, value: Cell) {
        match self.grid.get(row, col) {
            Some(Cell::Unknown) => {
                self.row_open[row] -= 1;
                self.col_open[col] -= 1;
                self.grid.put(row, col, value);
            }
            Some(Cell::Water) | Some(Cell::Piece(_)) => self.grid.put(row, col, value),
            Some(Cell::Clue(_)) | None => {}
        }
    }

    // A ship square consumes its lines' required counts even when the square
    // itself is a protected clue that the write cannot touch.
    fn put_piece(&mut self, row: usize, col: usize, piece: Piece) {
        self.set(row, col, Cell::Piece(piece));
        self.row_ships[row] -= 1;
        self.col_ships[col] -= 1;
    }

    fn water(&mut self, row: i32, col: i32) {
        if row >= 0 && col >= 0 && (row as usize) < SIZE && (col as usize) < SIZE {
            self.set(row as usize, col as usize, Cell::Water);
        }
    }

    // The two cells flanking (row, col) across the ship's axis.
    fn water_flanks(&mut self, row: usize, col: usize, orientation: Orientation) {
        let (row, col) = (row as i32, col as i32);
        match orientation {
            Orientation::Vertical => {
                self.water(row, col - 1);
                self.water(row, col + 1);
            }
            Orientation::Horizontal | Orientation::Point => {
                self.water(row - 1, col);
                self.water(row + 1, col);
            }
        }
    }

    // Flanks of an extremity, the cell one step beyond it along the axis,
    // and that cell's flanks.
    fn water_beyond(&mut self, row: usize, col: usize, orientation: Orientation, step: i32) {
        self.water_flanks(row, col, orientation);
        let (next_row, next_col) = match orientation {
            Orientation::Vertical => (row as i32 + step, col as i32),
            Orientation::Horizontal | Orientation::Point => (row as i32, col as i32 + step),
        };
        if next_row < 0 || next_col < 0 || next_row as usize >= SIZE || next_col as usize >= SIZE {
            return;
        }
        self.water(next_row, next_col);
        self.water_flanks(next_row as usize, next_col as usize, orientation);
    }

    fn surround_point(&mut self, row: usize, col: usize) {
        self.water_beyond(row, col, Orientation::Vertical, -1);
        self.water_beyond(row, col, Orientation::Vertical, 1);
        self.water_beyond(row, col, Orientation::Horizontal, -1);
        self.water_beyond(row, col, Orientation::Horizontal, 1);
    }

    /// Forces every still-unknown cell of a line whose required count is met
    /// to water. Saturating and idempotent.
    pub(crate) fn saturate(&mut self) {
        for i in 0..SIZE {
            if self.row_ships[i] == 0 {
                for col in 0..SIZE {
                    if self.grid.get(i, col) == Some(Cell::Unknown) {
                        self.set(i, col, Cell::Water);
                    }
                }
                self.row_open[i] = 0;
            }
            if self.col_ships[i] == 0 {
                for row in 0..SIZE {
                    if self.grid.get(row, i) == Some(Cell::Unknown) {
                        self.set(row, i, Cell::Water);
                    }
                }
                self.col_open[i] = 0;
            }
        }
    }

    /// Places a ship and runs deduction to its fixpoint.
    pub(crate) fn place(&mut self, placement: Placement) {
        self.apply(placement);
        if !self.dead {
            self.propagate();
        }
    }

    // One placement: capacity checks, piece glyphs, perimeter closure and
    // fleet bookkeeping. No deduction.
    fn apply(&mut self, placement: Placement) {
        if self.capacity_violated() {
            self.dead = true;
            return;
        }
        let Placement {
            row,
            col,
            len,
            orientation,
        } = placement;
        match orientation {
            Orientation::Point => {
                self.put_piece(row, col, Piece::Center);
                self.surround_point(row, col);
            }
            Orientation::Vertical => {
                self.put_piece(row, col, Piece::Top);
                self.water_beyond(row, col, Orientation::Vertical, -1);
                for i in 1..len - 1 {
                    self.water_flanks(row + i, col, Orientation::Vertical);
                    self.put_piece(row + i, col, Piece::Middle);
                }
                self.put_piece(row + len - 1, col, Piece::Bottom);
                self.water_beyond(row + len - 1, col, Orientation::Vertical, 1);
            }
            Orientation::Horizontal => {
                self.put_piece(row, col, Piece::Left);
                self.water_beyond(row, col, Orientation::Horizontal, -1);
                for i in 1..len - 1 {
                    self.put_piece(row, col + i, Piece::Middle);
                    self.water_flanks(row, col + i, Orientation::Horizontal);
                }
                self.put_piece(row, col + len - 1, Piece::Right);
                self.water_beyond(row, col + len - 1, Orientation::Horizontal, 1);
            }
        }
        self.fleet[len - 1] -= 1;
        if self.fleet[len - 1] < 0 || self.capacity_violated() {
            self.dead = true;
        }
    }

    fn capacity_violated(&self) -> bool {
        (0..SIZE).any(|i| {
            self.row_ships[i] > self.row_open[i] || self.col_ships[i] > self.col_open[i]
        })
    }

    /// Deduction fixpoint: saturate, then place the next guaranteed run,
    /// until nothing is forced anymore or the board dies. An explicit loop
    /// so the cascade cannot recurse unboundedly.
    pub(crate) fn propagate(&mut self) {
        loop {
            if self.dead {
                return;
            }
            self.saturate();
            match self.next_guaranteed() {
                Some(Deduced::Contradiction) => {
                    self.dead = true;
                    return;
                }
                Some(Deduced::Ship(run)) => self.apply(run),
                None => return,
            }
        }
    }

    // In a line where every open cell must be ship, each maximal run of open
    // cells is exactly one ship. Runs of one are left to the capacity rules,
    // runs longer than the longest ship are a contradiction.
    fn next_guaranteed(&self) -> Option<Deduced> {
        for i in 0..SIZE {
            if self.row_ships[i] == self.row_open[i] && self.row_open[i] != 0 {
                let mut col = 0;
                while let Some(start) = self.first_open_in_row(i, col) {
                    let len = self.open_run_in_row(i, start);
                    if len > 4 {
                        return Some(Deduced::Contradiction);
                    }
                    if len >= 2 {
                        return Some(Deduced::Ship(Placement {
                            row: i,
                            col: start,
                            len,
                            orientation: Orientation::Horizontal,
                        }));
                    }
                    col = start + 2;
                }
            }
            if self.col_ships[i] == self.col_open[i] && self.col_open[i] != 0 {
                let mut row = 0;
                while let Some(start) = self.first_open_in_col(i, row) {
                    let len = self.open_run_in_col(i, start);
                    if len > 4 {
                        return Some(Deduced::Contradiction);
                    }
                    if len >= 2 {
                        return Some(Deduced::Ship(Placement {
                            row: start,
                            col: i,
                            len,
                            orientation: Orientation::Vertical,
                        }));
                    }
                    row = start + 2;
                }
            }
        }
        None
    }

    pub(crate) fn first_open_in_row(&self, row: usize, from: usize) -> Option<usize> {
        (from..SIZE).find(|&col| self.grid.get(row, col) == Some(Cell::Unknown))
    }

    pub(crate) fn first_open_in_col(&self, col: usize, from: usize) -> Option<usize> {
        (from..SIZE).find(|&row| self.grid.get(row, col) == Some(Cell::Unknown))
    }

    pub(crate) fn open_run_in_row(&self, row: usize, start: usize) -> usize {
        (start..SIZE)
            .take_while(|&col| self.grid.get(row, col) == Some(Cell::Unknown))
            .count()
    }

    pub(crate) fn open_run_in_col(&self, col: usize, start: usize) -> usize {
        (start..SIZE)
            .take_while(|&row| self.grid.get(row, col) == Some(Cell::Unknown))
            .count()
    }

    /// Whether a ship square may be proposed at (`row`, `col`): the square
    /// itself holds no clue and no deduced piece, and none of its eight
    /// neighbors is a ship square. Out-of-range neighbors are fine.
    pub(crate) fn adjacency_clear(&self, row: usize, col: usize) -> bool {
        match self.grid.get(row, col) {
            None | Some(Cell::Clue(_)) | Some(Cell::Piece(_)) => return false,
            Some(Cell::Unknown) | Some(Cell::Water) => {}
        }
        let (above, below) = self.grid.vertical_neighbors(row, col);
        let (left, right) = self.grid.horizontal_neighbors(row, col);
        [above, below, left, right]
            .into_iter()
            .chain(self.grid.diagonal_neighbors(row, col))
            .flatten()
            .all(|cell| !cell.is_ship())
    }

    /// Writes the head hint's glyph over its square and consumes the hint.
    /// The raw write may cover a deduced piece with its uppercase clue.
    pub(crate) fn stamp(&mut self, hint: Hint) {
        let (row, col) = (hint.row as usize, hint.col as usize);
        if hint.glyph == Glyph::Water && self.grid.get(row, col) == Some(Cell::Unknown) {
            self.row_open[row] -= 1;
            self.col_open[col] -= 1;
        }
        self.grid.put(row, col, Cell::Clue(hint.glyph));
        self.hints_done += 1;
    }

    pub(crate) fn open_total(&self) -> i32 {
        let rows: i32 = self.row_open.iter().map(|&n| n as i32).sum();
        let cols: i32 = self.col_open.iter().map(|&n| n as i32).sum();
        rows + cols
    }

    pub(crate) fn ships_total(&self) -> i32 {
        let rows: i32 = self.row_ships.iter().map(|&n| n as i32).sum();
        let cols: i32 = self.col_ships.iter().map(|&n| n as i32).sum();
        rows + cols
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
