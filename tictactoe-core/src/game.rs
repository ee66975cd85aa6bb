//! Game state and move generation

use crate::error::{Error, MoveError, Result};
use crate::grid::{Grid, Mark, GRID_CELLS};
use crate::validate;
use rand::seq::SliceRandom;
use rand::Rng;

/// The 8 winning line patterns: 3 rows, 3 columns, 2 diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// First winning line fully held by one mark, in `WINNING_LINES` order
fn find_winner(grid: &Grid) -> Option<(Mark, [usize; 3])> {
    for line in WINNING_LINES {
        for mark in [Mark::Cross, Mark::Naught] {
            if line.iter().all(|&i| grid.cell(i) == Some(mark)) {
                return Some((mark, line));
            }
        }
    }
    None
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Immutable game state: a grid plus the mark that opened the game.
///
/// Winner and winning cells are derived once at construction; every move
/// produces a fresh state, so values are safe to share and copy freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    grid: Grid,
    starting_mark: Mark,
    winner: Option<Mark>,
    winning_cells: Option<[usize; 3]>,
}

impl GameState {
    /// Validate and construct a state from an arbitrary grid
    pub fn new(grid: Grid, starting_mark: Mark) -> Result<Self> {
        let (winner, winning_cells) = match find_winner(&grid) {
            Some((mark, line)) => (Some(mark), Some(line)),
            None => (None, None),
        };
        validate::validate_game_state(&grid, starting_mark, winner)?;
        Ok(Self {
            grid,
            starting_mark,
            winner,
            winning_cells,
        })
    }

    /// Construct from the canonical 9-character cell string
    pub fn from_cells(cells: &str, starting_mark: Mark) -> Result<Self> {
        Self::new(cells.parse()?, starting_mark)
    }

    /// The untouched opening position
    pub fn initial(starting_mark: Mark) -> Self {
        Self {
            grid: Grid::empty(),
            starting_mark,
            winner: None,
            winning_cells: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn starting_mark(&self) -> Mark {
        self.starting_mark
    }

    /// Whose turn it is
    pub fn current_mark(&self) -> Mark {
        if self.grid.count(Mark::Cross) == self.grid.count(Mark::Naught) {
            self.starting_mark
        } else {
            self.starting_mark.other()
        }
    }

    pub fn not_started(&self) -> bool {
        self.grid.empty_count() == GRID_CELLS
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    pub fn winning_cells(&self) -> Option<[usize; 3]> {
        self.winning_cells
    }

    pub fn tie(&self) -> bool {
        self.grid.empty_count() == 0 && self.winner.is_none()
    }

    pub fn game_over(&self) -> bool {
        self.winner.is_some() || self.tie()
    }

    /// Legal moves in ascending cell-index order; empty once the game is
    /// over. The ordering is load-bearing: search tie-breaks resolve to
    /// the first maximum.
    pub fn possible_moves(&self) -> Vec<Move> {
        if self.game_over() {
            return Vec::new();
        }
        (0..GRID_CELLS)
            .filter(|&index| self.grid.cell(index).is_none())
            .map(|index| self.apply_move(index))
            .collect()
    }

    /// Play the current mark at `index`, or fail if the cell is taken or
    /// out of range
    pub fn make_move_to(&self, index: usize) -> Result<Move> {
        if index >= GRID_CELLS || self.grid.cell(index).is_some() {
            return Err(Error::InvalidMove(MoveError::Unplayable { index }));
        }
        Ok(self.apply_move(index))
    }

    /// Uniformly random legal move, None if there are none
    pub fn make_random_move<R: Rng>(&self, rng: &mut R) -> Option<Move> {
        self.possible_moves().choose(rng).copied()
    }

    /// Score this state for `mark`: tie 0, win +1, loss -1. A state that
    /// is not over scores -1 under `heuristic` (pessimistic cutoff) and
    /// fails otherwise.
    pub fn evaluate_score(&self, mark: Mark, heuristic: bool) -> Result<i32> {
        if self.game_over() {
            if self.tie() {
                Ok(0)
            } else if self.winner == Some(mark) {
                Ok(1)
            } else {
                Ok(-1)
            }
        } else if heuristic {
            Ok(-1)
        } else {
            Err(Error::UnknownGameState)
        }
    }

    // A legal move on a valid state always yields a valid state, so the
    // after-state skips re-validation.
    fn apply_move(&self, index: usize) -> Move {
        let mark = self.current_mark();
        let grid = self.grid.with_mark_at(index, mark);
        let (winner, winning_cells) = match find_winner(&grid) {
            Some((mark, line)) => (Some(mark), Some(line)),
            None => (None, None),
        };
        Move {
            mark,
            cell_index: index,
            before_state: *self,
            after_state: Self {
                grid,
                starting_mark: self.starting_mark,
                winner,
                winning_cells,
            },
        }
    }
}

// ============================================================================
// MOVES
// ============================================================================

/// One edge of the move DAG: a mark played at a cell, with the states on
/// either side. Created only by [`GameState::make_move_to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    mark: Mark,
    cell_index: usize,
    before_state: GameState,
    after_state: GameState,
}

impl Move {
    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn cell_index(&self) -> usize {
        self.cell_index
    }

    pub fn before_state(&self) -> &GameState {
        &self.before_state
    }

    pub fn after_state(&self) -> &GameState {
        &self.after_state
    }
}
