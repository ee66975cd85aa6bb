//! Integration tests for the tic-tac-toe engine
//!
//! Tests the full stack: state model, search variants, and the
//! precomputed score table.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tictactoe_core::{
    find_best_move, minimax, pruning, Engine, GameState, Mark, Move, ScoreTable, Strategy,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn state(cells: &str, starting_mark: Mark) -> GameState {
    GameState::from_cells(cells, starting_mark).unwrap()
}

/// Assert plain minimax and alpha-beta agree on this move and on every
/// move reachable below it
fn assert_pruning_matches(mv: &Move, maximizer: Mark, choose_highest: bool) {
    let plain = minimax(mv, maximizer, choose_highest).unwrap();
    let pruned = pruning(mv, maximizer, choose_highest, -1, 1).unwrap();
    assert_eq!(
        plain,
        pruned,
        "scores diverge after {} -> cell {}",
        mv.before_state().grid(),
        mv.cell_index()
    );
    for next in mv.after_state().possible_moves() {
        assert_pruning_matches(&next, maximizer, !choose_highest);
    }
}

// ============================================================================
// SEARCH EQUIVALENCE
// ============================================================================

#[test]
fn test_pruning_equals_minimax_everywhere() {
    // Every reachable move below each first X move; pruning is a pure
    // node-count optimization and may never change a score
    let root = state("X        ", Mark::Cross);
    for mv in root.possible_moves() {
        assert_pruning_matches(&mv, Mark::Cross, false);
    }
}

#[test]
fn test_precomputed_equals_minimax_on_sampled_states() {
    let table = ScoreTable::precompute().unwrap();
    for cells in ["X        ", "XO       ", "XOX O    ", "XX OO    "] {
        let s = state(cells, Mark::Cross);
        for mv in s.possible_moves() {
            for maximizer in [Mark::Cross, Mark::Naught] {
                assert_eq!(
                    table.score(&mv, maximizer).unwrap(),
                    minimax(&mv, maximizer, false).unwrap(),
                    "{cells:?} cell {}",
                    mv.cell_index()
                );
            }
        }
    }
}

// ============================================================================
// OPTIMAL PLAY
// ============================================================================

/// Minimax X against a random O never loses, from any random opening
#[test]
fn test_minimax_never_loses_to_random() {
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut engine = Engine::with_seed(Strategy::Pruning, seed);

        let mut s = GameState::initial(Mark::Cross);
        while !s.game_over() {
            let mv = if s.current_mark() == Mark::Cross {
                engine.best_move(&s).unwrap()
            } else {
                s.make_random_move(&mut rng)
            };
            s = *mv.expect("non-terminal state must have moves").after_state();
        }
        assert_ne!(s.winner(), Some(Mark::Naught), "lost game (seed {seed})");
    }
}

/// Two optimal players always tie
#[test]
fn test_self_play_is_always_a_tie() {
    // Skip the random opening shortcut by starting one ply in
    let root = state("    X    ", Mark::Cross);
    let mut s = root;
    while !s.game_over() {
        let mv = find_best_move(&s, &Strategy::Minimax).unwrap().unwrap();
        s = *mv.after_state();
    }
    assert!(s.tie());
    assert!(s.possible_moves().is_empty());
}

// ============================================================================
// STATE MODEL PROPERTIES
// ============================================================================

/// Exactly one of winner / tie / ongoing holds at every state of a full
/// random playthrough, and finished states offer no moves
#[test]
fn test_trichotomy_along_random_games() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..50 {
        let mut s = GameState::initial(Mark::Cross);
        loop {
            let outcomes = [s.winner().is_some(), s.tie(), !s.game_over()];
            assert_eq!(outcomes.iter().filter(|&&o| o).count(), 1);
            if s.game_over() {
                assert!(s.possible_moves().is_empty());
                break;
            }
            s = *s.make_random_move(&mut rng).unwrap().after_state();
        }
    }
}

#[test]
fn test_best_move_is_deterministic() {
    let s = state("XO       ", Mark::Cross);
    let a = find_best_move(&s, &Strategy::Minimax).unwrap().unwrap();
    let b = find_best_move(&s, &Strategy::Pruning).unwrap().unwrap();
    assert_eq!(a.cell_index(), b.cell_index());
}
