//! TICTACTOE Core - Game engine and AI
//!
//! This crate provides the core game logic for tic-tac-toe:
//! - Grid representation with cell-string encoding
//! - Immutable game state and move generation
//! - State validation (mark balance, turn parity, winner consistency)
//! - Minimax search family (plain, depth-limited, alpha-beta, precomputed)
//! - Offline score-table builder and JSON serializer

pub mod ai;
pub mod error;
pub mod game;
pub mod grid;
pub mod table;
pub mod validate;

// Re-exports for convenient access
pub use ai::{find_best_move, heuristic, minimax, pruning, Engine, Strategy, DEFAULT_HEURISTIC_DEPTH};
pub use error::{Error, MoveError, Result};
pub use game::{GameState, Move, WINNING_LINES};
pub use grid::{Grid, Mark};
pub use table::{ScoreTable, DEFAULT_TABLE_FILENAME};
