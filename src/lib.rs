#![warn(missing_docs)]
//! The Bimaru library
//!
//! ## Overview
//!
//! Bimaru solves battleship solitaire puzzles on the classic 10×10 grid:
//! four size-1, three size-2, two size-3 and one size-4 ship, placed so that
//! no two ships touch, not even diagonally, while every row and column holds
//! exactly its required number of ship cells.
//!
//! Deterministic deduction (water saturation, perimeter closure,
//! guaranteed-ship detection) does most of the work; the remaining choices
//! are explored by tree search. Instances with exactly three hints run an
//! informed best-first search, everything else an exhaustive depth-first
//! tree search.
//!
//! ## Example
//!
//! ```
//! use bimaru::Puzzle;
//!
//! let instance = "\
//! ROW 5 1 4 1 0 2 2 2 0 3
//! COLUMN 7 0 2 2 2 1 2 1 1 2
//! 12
//! HINT 0 0 T
//! HINT 3 0 B
//! HINT 0 2 L
//! HINT 0 4 R
//! HINT 2 5 L
//! HINT 0 7 C
//! HINT 2 8 C
//! HINT 5 0 T
//! HINT 7 0 B
//! HINT 5 9 T
//! HINT 9 2 L
//! HINT 9 6 C
//! ";
//!
//! let puzzle = Puzzle::from_str(instance).unwrap();
//! let solution = puzzle.solve().expect("this instance is solvable");
//! assert!(solution.is_solved());
//! print!("{}", solution);
//! ```
//!
//! Clue squares print uppercase, deduced ship segments lowercase, water as
//! `.`.

mod actions;
mod board;
mod puzzle;
mod solver;

pub mod errors;
pub mod search;

pub use crate::actions::Action;
pub use crate::board::{Board, Cell, Glyph, Grid, Orientation, Piece, Placement, SIZE};
pub use crate::puzzle::{Hint, Puzzle};
pub use crate::solver::{Bimaru, SearchStrategy};
