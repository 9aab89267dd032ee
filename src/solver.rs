//! The puzzle as a search problem, and the strategy-selection policy.

use log::debug;

use crate::actions::Action;
use crate::board::Board;
use crate::puzzle::{Hint, Puzzle};
use crate::search::{self, Problem};

/// Which search algorithm to run.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SearchStrategy {
    /// Exhaustive uninformed tree search.
    DepthFirst,
    /// Heuristic-ordered best-first search.
    BestFirst,
}

/// A puzzle instance wired up as a search problem.
///
/// States are plain [`Board`] snapshots; a transition copies the parent
/// board, applies one action through the deduction engine and lets the
/// cascade run to its fixpoint. The goal is an empty fleet.
pub struct Bimaru {
    puzzle: Puzzle,
}

impl Bimaru {
    /// Wraps an instance for solving.
    pub fn new(puzzle: Puzzle) -> Bimaru {
        Bimaru { puzzle }
    }

    /// The wrapped instance.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    // Instances shipped with exactly three hints respond well to the
    // informed search; everything else runs the exhaustive one.
    fn auto_strategy(&self) -> SearchStrategy {
        if self.puzzle.hints().len() == 3 {
            SearchStrategy::BestFirst
        } else {
            SearchStrategy::DepthFirst
        }
    }

    /// Solves the instance, picking the strategy from the hint count.
    pub fn solve(&self) -> Option<Board> {
        self.solve_with(self.auto_strategy())
    }

    /// Solves the instance with an explicit strategy.
    pub fn solve_with(&self, strategy: SearchStrategy) -> Option<Board> {
        debug!(
            "solving with {:?} ({} hints)",
            strategy,
            self.puzzle.hints().len()
        );
        match strategy {
            SearchStrategy::DepthFirst => search::depth_first_tree_search(self),
            SearchStrategy::BestFirst => search::best_first_search(self),
        }
    }

    fn head_hint(&self, board: &Board) -> Option<Hint> {
        self.puzzle.hints().get(board.hints_done).copied()
    }
}

impl Problem for Bimaru {
    type State = Board;
    type Action = Action;

    fn initial(&self) -> Board {
        self.puzzle.initial_board()
    }

    fn actions(&self, board: &Board) -> Vec<Action> {
        board.candidate_actions(self.head_hint(board))
    }

    fn transition(&self, board: &Board, action: &Action) -> Board {
        let mut next = *board;
        match *action {
            Action::ConsumeHint => {
                next.stamp(self.puzzle.hints()[board.hints_done]);
            }
            Action::HintShip(placement) => {
                next.place(placement);
                next.stamp(self.puzzle.hints()[board.hints_done]);
            }
            Action::ForcedShip(placement) => {
                next.place(placement);
            }
            Action::FreeShip(placement) => {
                next.place(placement);
                next.cursor = (placement.row, placement.col);
            }
        }
        next
    }

    fn is_goal(&self, board: &Board) -> bool {
        board.is_solved()
    }

    // Deliberately steep and non-admissible: it orders the frontier towards
    // boards with few outstanding required cells, nothing more.
    fn heuristic(&self, board: &Board) -> i32 {
        board.open_total() + 10 * board.ships_total()
    }
}
