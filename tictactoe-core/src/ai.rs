//! Minimax search family
//!
//! Four interchangeable evaluators over the move DAG: plain minimax,
//! depth-limited heuristic, alpha-beta pruning, and precomputed-table
//! lookup. All score a [`Move`] for a maximizer mark in {-1, 0, 1}.

use crate::error::Result;
use crate::game::{GameState, Move};
use crate::grid::Mark;
use crate::table::ScoreTable;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Default remaining plies for the heuristic variant
pub const DEFAULT_HEURISTIC_DEPTH: u32 = 3;

/// Default RNG seed for opening-move selection
const DEFAULT_SEED: u64 = 42;

/// True score bounds for the game, the initial alpha-beta window
const SCORE_MIN: i32 = -1;
const SCORE_MAX: i32 = 1;

// ============================================================================
// EVALUATORS
// ============================================================================

/// Plain minimax: exhaustive recursion, no pruning.
///
/// `choose_highest` is true when the side to move in `after_state` is the
/// maximizer; it flips every ply.
pub fn minimax(mv: &Move, maximizer: Mark, choose_highest: bool) -> Result<i32> {
    if mv.after_state().game_over() {
        return mv.after_state().evaluate_score(maximizer, false);
    }
    let mut best = if choose_highest { SCORE_MIN } else { SCORE_MAX };
    for next in mv.after_state().possible_moves() {
        let score = minimax(&next, maximizer, !choose_highest)?;
        best = if choose_highest {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    Ok(best)
}

/// Depth-limited minimax: at `depth` 0 a non-terminal node scores as the
/// pessimistic heuristic value (-1) instead of being expanded
pub fn heuristic(mv: &Move, maximizer: Mark, choose_highest: bool, depth: u32) -> Result<i32> {
    if mv.after_state().game_over() || depth == 0 {
        return mv.after_state().evaluate_score(maximizer, true);
    }
    let mut best = if choose_highest { SCORE_MIN } else { SCORE_MAX };
    for next in mv.after_state().possible_moves() {
        let score = heuristic(&next, maximizer, !choose_highest, depth - 1)?;
        best = if choose_highest {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    Ok(best)
}

/// Alpha-beta pruning: identical scores to [`minimax`], fewer nodes.
///
/// Alpha is the score the maximizer is already assured, beta the one the
/// minimizer is assured; once `alpha > beta` the remaining siblings
/// cannot change the parent's choice and are skipped.
pub fn pruning(
    mv: &Move,
    maximizer: Mark,
    choose_highest: bool,
    mut alpha: i32,
    mut beta: i32,
) -> Result<i32> {
    if mv.after_state().game_over() {
        return mv.after_state().evaluate_score(maximizer, false);
    }
    let mut best = if choose_highest { SCORE_MIN } else { SCORE_MAX };
    for next in mv.after_state().possible_moves() {
        let score = pruning(&next, maximizer, !choose_highest, alpha, beta)?;
        if choose_highest {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if alpha > beta {
            break;
        }
    }
    Ok(best)
}

// ============================================================================
// STRATEGY SELECTION
// ============================================================================

/// Search variant, dispatched by a single match
#[derive(Clone, Debug, Default)]
pub enum Strategy {
    #[default]
    Minimax,
    Heuristic {
        depth: u32,
    },
    Pruning,
    Precomputed(ScoreTable),
}

impl Strategy {
    /// Score one candidate move for `maximizer`. The opponent moves next,
    /// so recursion starts on the minimizing side.
    pub fn score(&self, mv: &Move, maximizer: Mark) -> Result<i32> {
        match self {
            Strategy::Minimax => minimax(mv, maximizer, false),
            Strategy::Heuristic { depth } => heuristic(mv, maximizer, false, *depth),
            Strategy::Pruning => pruning(mv, maximizer, false, SCORE_MIN, SCORE_MAX),
            Strategy::Precomputed(table) => table.score(mv, maximizer),
        }
    }
}

/// Best move for the side to move, or None if the game is over.
///
/// Every legal move is scored with `maximizer = state.current_mark()`;
/// ties resolve to the lowest cell index (stable max over the ordered
/// move list).
pub fn find_best_move(state: &GameState, strategy: &Strategy) -> Result<Option<Move>> {
    let maximizer = state.current_mark();
    let moves = state.possible_moves();
    let scores = score_moves(&moves, strategy, maximizer)?;

    let mut best: Option<(Move, i32)> = None;
    for (mv, score) in moves.into_iter().zip(scores) {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }
    Ok(best.map(|(mv, _)| mv))
}

#[cfg(feature = "parallel")]
fn score_moves(moves: &[Move], strategy: &Strategy, maximizer: Mark) -> Result<Vec<i32>> {
    use rayon::prelude::*;
    // Sibling subtrees are independent and pure; indexed collection keeps
    // the ordering the tie-break relies on.
    moves
        .par_iter()
        .map(|mv| strategy.score(mv, maximizer))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_moves(moves: &[Move], strategy: &Strategy, maximizer: Mark) -> Result<Vec<i32>> {
    moves
        .iter()
        .map(|mv| strategy.score(mv, maximizer))
        .collect()
}

// ============================================================================
// ENGINE
// ============================================================================

/// Move-selecting engine: a strategy plus a seeded RNG for the opening
pub struct Engine {
    strategy: Strategy,
    rng: ChaCha8Rng,
}

impl Engine {
    pub fn new(strategy: Strategy) -> Self {
        Self::with_seed(strategy, DEFAULT_SEED)
    }

    pub fn with_seed(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Best move for the current position.
    ///
    /// On the untouched board every opening is symmetric, so a random
    /// cell short-circuits the full-tree search.
    pub fn best_move(&mut self, state: &GameState) -> Result<Option<Move>> {
        if state.not_started() {
            return Ok(state.make_random_move(&mut self.rng));
        }
        find_best_move(state, &self.strategy)
    }
}

// ============================================================================
// TESTS
// ============================================================================
