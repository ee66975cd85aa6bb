//! Error types for the tic-tac-toe engine

use crate::grid::Mark;
use thiserror::Error;

/// Main error type for the engine
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid grid {cells:?}: expected 9 cells of 'X', 'O', or ' '")]
    InvalidGrid { cells: String },

    #[error("invalid game state: {reason}")]
    InvalidGameState { reason: &'static str },

    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),

    #[error("cannot score a game that is not over")]
    UnknownGameState,

    #[error("no precomputed score for key {key:?}")]
    MissingKey { key: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Why a move was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell {index} is not playable")]
    Unplayable { index: usize },

    #[error("it is not {mark}'s turn")]
    WrongTurn { mark: Mark },

    #[error("no more possible moves")]
    NoMovesLeft,
}

/// Convenience alias for Results using the engine's Error type
pub type Result<T> = std::result::Result<T, Error>;
