//! Candidate-action enumeration, in strict tiers.
//!
//! The first non-empty tier wins: a dead board yields nothing, then the head
//! hint is resolved, then a line whose open cells are all required is forced,
//! and only then are free placements enumerated. An empty result is how a
//! dead branch is reported; the search backtracks on it.

use crate::board::{Board, Cell, Glyph, Orientation, Placement, SIZE};
use crate::puzzle::Hint;

/// One candidate move, tagged with the tier that produced it.
///
/// The tag decides the transition bookkeeping: hint actions consume the head
/// hint, free placements move the scan cursor.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Action {
    /// Consume the head hint without any geometry: a `W` hint, or a hint
    /// whose role the cell already carries.
    ConsumeHint,
    /// Place a ship that realizes the head hint, then consume the hint.
    HintShip(Placement),
    /// The single placement forced by a fully-required line.
    ForcedShip(Placement),
    /// An ordinary enumerated placement.
    FreeShip(Placement),
}

impl Action {
    /// The placement this action performs, if it has one.
    pub fn placement(self) -> Option<Placement> {
        match self {
            Action::ConsumeHint => None,
            Action::HintShip(p) | Action::ForcedShip(p) | Action::FreeShip(p) => Some(p),
        }
    }
}

impl Board {
    /// Enumerates the candidate actions for this board. `hint` is the head
    /// of the hint queue, if any remains.
    pub(crate) fn candidate_actions(&self, hint: Option<Hint>) -> Vec<Action> {
        if self.dead {
            return Vec::new();
        }
        for i in 0..SIZE {
            if self.row_ships[i] > self.row_open[i] || self.col_ships[i] > self.col_open[i] {
                return Vec::new();
            }
        }
        if let Some(hint) = hint {
            return self.hint_actions(hint);
        }
        for i in 0..SIZE {
            if self.row_ships[i] == self.row_open[i] && self.row_open[i] != 0 {
                return self.forced_row_actions(i);
            }
            if self.col_ships[i] == self.col_open[i] && self.col_open[i] != 0 {
                return self.forced_col_actions(i);
            }
        }
        self.free_actions()
    }

    // Validity filter: in bounds, every covered line can still take the ship
    // cells, and every covered square passes the adjacency check.
    fn try_ship(&self, row: i32, col: i32, len: usize, orientation: Orientation) -> Option<Placement> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= SIZE || col >= SIZE {
            return None;
        }
        let fits = match orientation {
            Orientation::Point => {
                self.col_ships[col] >= 1
                    && self.row_ships[row] >= 1
                    && self.adjacency_clear(row, col)
            }
            Orientation::Vertical => {
                row + len <= SIZE
                    && self.col_ships[col] >= len as i8
                    && (row..row + len)
                        .all(|r| self.row_ships[r] >= 1 && self.adjacency_clear(r, col))
            }
            Orientation::Horizontal => {
                col + len <= SIZE
                    && self.row_ships[row] >= len as i8
                    && (col..col + len)
                        .all(|c| self.col_ships[c] >= 1 && self.adjacency_clear(row, c))
            }
        };
        fits.then(|| Placement {
            row,
            col,
            len,
            orientation,
        })
    }

    fn hint_actions(&self, hint: Hint) -> Vec<Action> {
        let (row, col) = (hint.row as i32, hint.col as i32);
        let mut actions = Vec::new();
        let push = |p: Option<Placement>, actions: &mut Vec<Action>| {
            if let Some(p) = p {
                actions.push(Action::HintShip(p));
            }
        };
        match hint.glyph {
            Glyph::Water => return vec![Action::ConsumeHint],
            Glyph::Middle => {
                // every alignment that makes the cell an interior segment
                for len in 3..=4usize {
                    if self.fleet[len - 1] == 0 {
                        continue;
                    }
                    let reach = len as i32 - 2;
                    push(self.try_ship(row - reach, col, len, Orientation::Vertical), &mut actions);
                    push(self.try_ship(row, col - reach, len, Orientation::Horizontal), &mut actions);
                    if len == 4 {
                        push(self.try_ship(row - 1, col, len, Orientation::Vertical), &mut actions);
                        push(self.try_ship(row, col - 1, len, Orientation::Horizontal), &mut actions);
                    }
                }
            }
            glyph => {
                let lengths = if glyph == Glyph::Center { 1..=1 } else { 2..=4 };
                for len in lengths {
                    if self.fleet[len - 1] == 0 {
                        continue;
                    }
                    let span = len as i32 - 1;
                    let candidate = match glyph {
                        Glyph::Center => self.try_ship(row, col, len, Orientation::Point),
                        Glyph::Top => self.try_ship(row, col, len, Orientation::Vertical),
                        Glyph::Bottom => self.try_ship(row - span, col, len, Orientation::Vertical),
                        Glyph::Left => self.try_ship(row, col, len, Orientation::Horizontal),
                        Glyph::Right => self.try_ship(row, col - span, len, Orientation::Horizontal),
                        Glyph::Middle | Glyph::Water => unreachable!(),
                    };
                    push(candidate, &mut actions);
                }
                // the hint may already be satisfied by an earlier deduction
                if actions.is_empty() {
                    if let Some(cell) = self.grid.get(hint.row as usize, hint.col as usize) {
                        if cell.has_role(hint.glyph) {
                            actions.push(Action::ConsumeHint);
                        }
                    }
                }
            }
        }
        actions
    }

    fn forced_row_actions(&self, row: usize) -> Vec<Action> {
        let start = match self.first_open_in_row(row, 0) {
            Some(col) => col,
            None => return Vec::new(),
        };
        let len = self.open_run_in_row(row, start);
        if len > 4 {
            return Vec::new();
        }
        if len >= 2 {
            return vec![Action::ForcedShip(Placement {
                row,
                col: start,
                len,
                orientation: Orientation::Horizontal,
            })];
        }
        // a lone open cell can still belong to a perpendicular ship
        self.coverings(row, start, Orientation::Vertical)
            .into_iter()
            .map(Action::ForcedShip)
            .collect()
    }

    fn forced_col_actions(&self, col: usize) -> Vec<Action> {
        let start = match self.first_open_in_col(col, 0) {
            Some(row) => row,
            None => return Vec::new(),
        };
        let len = self.open_run_in_col(col, start);
        if len > 4 {
            return Vec::new();
        }
        if len >= 2 {
            return vec![Action::ForcedShip(Placement {
                row: start,
                col,
                len,
                orientation: Orientation::Vertical,
            })];
        }
        self.coverings(start, col, Orientation::Horizontal)
            .into_iter()
            .map(Action::ForcedShip)
            .collect()
    }

    // All in-stock placements that cover (row, col) along the given axis,
    // plus the size-1 placement.
    fn coverings(&self, row: usize, col: usize, orientation: Orientation) -> Vec<Placement> {
        let mut placements = Vec::new();
        for len in 1..=4usize {
            if self.fleet[len - 1] == 0 {
                continue;
            }
            if len == 1 {
                if let Some(p) = self.try_ship(row as i32, col as i32, 1, Orientation::Point) {
                    placements.push(p);
                }
                continue;
            }
            for offset in (1 - len as i32)..=0 {
                let candidate = match orientation {
                    Orientation::Vertical => {
                        self.try_ship(row as i32 + offset, col as i32, len, orientation)
                    }
                    Orientation::Horizontal => {
                        self.try_ship(row as i32, col as i32 + offset, len, orientation)
                    }
                    Orientation::Point => unreachable!(),
                };
                if let Some(p) = candidate {
                    placements.push(p);
                }
            }
        }
        placements
    }

    fn free_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        let (cursor_row, cursor_col) = self.cursor;
        for row in cursor_row..SIZE {
            let first_col = if row == cursor_row { cursor_col } else { 0 };
            for col in first_col..SIZE {
                if self.grid.get(row, col) != Some(Cell::Unknown) {
                    continue;
                }
                for len in 1..=4usize {
                    if self.fleet[len - 1] == 0 {
                        continue;
                    }
                    if len == 1 {
                        if let Some(p) = self.try_ship(row as i32, col as i32, 1, Orientation::Point) {
                            actions.push(Action::FreeShip(p));
                        }
                        continue;
                    }
                    if let Some(p) = self.try_ship(row as i32, col as i32, len, Orientation::Vertical) {
                        actions.push(Action::FreeShip(p));
                    }
                    if let Some(p) = self.try_ship(row as i32, col as i32, len, Orientation::Horizontal) {
                        actions.push(Action::FreeShip(p));
                    }
                }
            }
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    fn hint(row: u8, col: u8, glyph: Glyph) -> Hint {
        Hint { row, col, glyph }
    }

    #[test]
    fn dead_boards_yield_no_actions() {
        let mut board = Board::new(&[4; SIZE], &[4; SIZE]);
        for i in 0..5 {
            board.place(Placement {
                row: 2 * i,
                col: 2 * i,
                len: 1,
                orientation: Orientation::Point,
            });
        }
        assert!(board.is_dead());
        assert_eq!(board.candidate_actions(None), Vec::new());
    }

    #[test]
    fn water_hints_are_consumed_without_geometry() {
        let board = Board::new(&[4; SIZE], &[4; SIZE]);
        let actions = board.candidate_actions(Some(hint(5, 5, Glyph::Water)));
        assert_eq!(actions, vec![Action::ConsumeHint]);
    }

    #[test]
    fn hints_outrank_forced_lines() {
        // row 0 is fully required, but the live hint wins the tier order
        let board = Board::new(&[10, 4, 4, 4, 4, 4, 4, 4, 4, 4], &[4; SIZE]);
        let actions = board.candidate_actions(Some(hint(5, 5, Glyph::Water)));
        assert_eq!(actions, vec![Action::ConsumeHint]);
    }

    #[test]
    fn middle_hint_enumerates_interior_coverings() {
        let board = Board::new(&[4; SIZE], &[4; SIZE]);
        let actions = board.candidate_actions(Some(hint(5, 5, Glyph::Middle)));
        let expected = [
            (4, 5, 3, Orientation::Vertical),
            (5, 4, 3, Orientation::Horizontal),
            (3, 5, 4, Orientation::Vertical),
            (5, 3, 4, Orientation::Horizontal),
            (4, 5, 4, Orientation::Vertical),
            (5, 4, 4, Orientation::Horizontal),
        ];
        let expected: Vec<Action> = expected
            .iter()
            .map(|&(row, col, len, orientation)| {
                Action::HintShip(Placement {
                    row,
                    col,
                    len,
                    orientation,
                })
            })
            .collect();
        assert_eq!(actions, expected);
    }

    #[test]
    fn end_hint_enumerates_one_placement_per_length() {
        let board = Board::new(&[4; SIZE], &[4; SIZE]);
        let actions = board.candidate_actions(Some(hint(0, 0, Glyph::Top)));
        let expected: Vec<Action> = [2, 3, 4]
            .iter()
            .map(|&len| {
                Action::HintShip(Placement {
                    row: 0,
                    col: 0,
                    len,
                    orientation: Orientation::Vertical,
                })
            })
            .collect();
        assert_eq!(actions, expected);
    }

    #[test]
    fn satisfied_end_hint_falls_back_to_consume() {
        let mut board = Board::new(&[4; SIZE], &[4; SIZE]);
        board.place(Placement {
            row: 0,
            col: 0,
            len: 2,
            orientation: Orientation::Vertical,
        });
        assert_eq!(board.grid().get(0, 0), Some(Cell::Piece(Piece::Top)));
        let actions = board.candidate_actions(Some(hint(0, 0, Glyph::Top)));
        assert_eq!(actions, vec![Action::ConsumeHint]);
    }

    #[test]
    fn unsatisfiable_middle_hint_yields_nothing() {
        // no fallback for M: a deduced middle under an M hint dies here
        let mut board = Board::new(&[4; SIZE], &[4; SIZE]);
        board.place(Placement {
            row: 4,
            col: 5,
            len: 3,
            orientation: Orientation::Vertical,
        });
        assert_eq!(board.grid().get(5, 5), Some(Cell::Piece(Piece::Middle)));
        let actions = board.candidate_actions(Some(hint(5, 5, Glyph::Middle)));
        assert_eq!(actions, Vec::new());
    }

    #[test]
    fn forced_singleton_expands_across_the_line() {
        // row 2 keeps a single open cell that must be ship; the candidates
        // cover it perpendicular to the row
        let board = Board::new(
            &[0, 0, 1, 1, 1, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 3, 0, 0, 0, 0],
        );
        assert_eq!(board.row_open[2], 1);
        let actions = board.candidate_actions(None);
        let expected = [
            (2, 5, 1, Orientation::Point),
            (2, 5, 2, Orientation::Vertical),
            (2, 5, 3, Orientation::Vertical),
        ];
        let expected: Vec<Action> = expected
            .iter()
            .map(|&(row, col, len, orientation)| {
                Action::ForcedShip(Placement {
                    row,
                    col,
                    len,
                    orientation,
                })
            })
            .collect();
        assert_eq!(actions, expected);
    }

    #[test]
    fn free_enumeration_starts_at_the_cursor() {
        let mut board = Board::new(&[4; SIZE], &[4; SIZE]);
        board.cursor = (9, 8);
        let actions = board.candidate_actions(None);
        let expected = vec![
            Action::FreeShip(Placement {
                row: 9,
                col: 8,
                len: 1,
                orientation: Orientation::Point,
            }),
            Action::FreeShip(Placement {
                row: 9,
                col: 8,
                len: 2,
                orientation: Orientation::Horizontal,
            }),
            Action::FreeShip(Placement {
                row: 9,
                col: 9,
                len: 1,
                orientation: Orientation::Point,
            }),
        ];
        assert_eq!(actions, expected);
    }
}
