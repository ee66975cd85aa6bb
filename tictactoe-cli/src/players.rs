//! Player abstractions for the console frontend
//!
//! A [`Player`] produces a move when it is their turn; implementations
//! cover human console input, random play, and the engine strategies.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tictactoe_core::{
    Engine, Error, GameState, Mark, Move, MoveError, ScoreTable, Strategy,
    DEFAULT_HEURISTIC_DEPTH, DEFAULT_TABLE_FILENAME,
};

/// Selectable player kinds for the play command
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    Human,
    Random,
    Minimax,
    Heuristic,
    Pruning,
    Precomputed,
}

/// A participant able to move when it is their turn
pub trait Player {
    fn mark(&self) -> Mark;

    /// The player's chosen move, or None if the game is already over
    fn get_move(&mut self, state: &GameState) -> Result<Option<Move>>;

    /// Apply this player's move to `state`, enforcing turn order
    fn make_move(&mut self, state: &GameState) -> Result<GameState> {
        if self.mark() != state.current_mark() {
            return Err(Error::from(MoveError::WrongTurn { mark: self.mark() }).into());
        }
        match self.get_move(state)? {
            Some(mv) => Ok(*mv.after_state()),
            None => Err(Error::from(MoveError::NoMovesLeft).into()),
        }
    }
}

/// Build a player of the given kind
pub fn make_player(
    kind: PlayerKind,
    mark: Mark,
    seed: u64,
    delay: Duration,
    table_path: Option<&Path>,
) -> Result<Box<dyn Player>> {
    let strategy = match kind {
        PlayerKind::Human => return Ok(Box::new(Human { mark })),
        PlayerKind::Random => {
            return Ok(Box::new(Random {
                mark,
                rng: ChaCha8Rng::seed_from_u64(seed),
                delay,
            }))
        }
        PlayerKind::Minimax => Strategy::Minimax,
        PlayerKind::Heuristic => Strategy::Heuristic {
            depth: DEFAULT_HEURISTIC_DEPTH,
        },
        PlayerKind::Pruning => Strategy::Pruning,
        PlayerKind::Precomputed => {
            let path = table_path.unwrap_or_else(|| Path::new(DEFAULT_TABLE_FILENAME));
            let table = ScoreTable::load(path)
                .with_context(|| format!("failed to load score table {}", path.display()))?;
            tracing::info!(entries = table.len(), "loaded score table");
            Strategy::Precomputed(table)
        }
    };
    Ok(Box::new(Computer {
        mark,
        engine: Engine::with_seed(strategy, seed),
        delay,
    }))
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

/// Console player: reads coordinates like `A1` or `1A` from stdin
pub struct Human {
    pub mark: Mark,
}

impl Player for Human {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn get_move(&mut self, state: &GameState) -> Result<Option<Move>> {
        let stdin = io::stdin();
        while !state.game_over() {
            print!("{}'s move: ", self.mark);
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                bail!("input closed");
            }
            let Some(index) = cell_index(line.trim()) else {
                println!("Give the coordinate in the format A1 or 1A.");
                continue;
            };
            match state.make_move_to(index) {
                Ok(mv) => return Ok(Some(mv)),
                Err(Error::InvalidMove(_)) => {
                    println!("That cell is already occupied.");
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(None)
    }
}

/// Uniformly random player
pub struct Random {
    mark: Mark,
    rng: ChaCha8Rng,
    delay: Duration,
}

impl Player for Random {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn get_move(&mut self, state: &GameState) -> Result<Option<Move>> {
        thread::sleep(self.delay);
        Ok(state.make_random_move(&mut self.rng))
    }
}

/// Engine-backed player with a thinking delay
pub struct Computer {
    mark: Mark,
    engine: Engine,
    delay: Duration,
}

impl Player for Computer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn get_move(&mut self, state: &GameState) -> Result<Option<Move>> {
        thread::sleep(self.delay);
        Ok(self.engine.best_move(state)?)
    }
}

/// Parse a board coordinate (`A1`, `1A`, case-insensitive) to a cell
/// index 0-8
pub fn cell_index(input: &str) -> Option<usize> {
    let mut chars = input.chars();
    let (a, b) = (chars.next()?, chars.next()?);
    if chars.next().is_some() {
        return None;
    }
    let (col, row) = if a.is_ascii_alphabetic() { (a, b) } else { (b, a) };
    let col = match col.to_ascii_uppercase() {
        c @ 'A'..='C' => c as usize - 'A' as usize,
        _ => return None,
    };
    let row = match row {
        r @ '1'..='3' => r as usize - '1' as usize,
        _ => return None,
    };
    Some(3 * row + col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_index_both_orders() {
        assert_eq!(cell_index("A1"), Some(0));
        assert_eq!(cell_index("1A"), Some(0));
        assert_eq!(cell_index("c3"), Some(8));
        assert_eq!(cell_index("B2"), Some(4));
        assert_eq!(cell_index("3a"), Some(6));
    }

    #[test]
    fn test_cell_index_rejects_garbage() {
        assert_eq!(cell_index(""), None);
        assert_eq!(cell_index("A"), None);
        assert_eq!(cell_index("A4"), None);
        assert_eq!(cell_index("D1"), None);
        assert_eq!(cell_index("A12"), None);
        assert_eq!(cell_index("11"), None);
    }

    fn computer(mark: Mark) -> Computer {
        Computer {
            mark,
            engine: Engine::new(Strategy::Minimax),
            delay: Duration::ZERO,
        }
    }

    #[test]
    fn test_turn_enforcement() {
        let state = GameState::from_cells("X        ", Mark::Cross).unwrap();
        let err = computer(Mark::Cross).make_move(&state).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidMove(MoveError::WrongTurn { mark: Mark::Cross }))
        ));

        let next = computer(Mark::Naught).make_move(&state).unwrap();
        assert_eq!(next.current_mark(), Mark::Cross);
    }

    #[test]
    fn test_finished_game_rejected_as_no_moves() {
        let state = GameState::from_cells("XXXOO    ", Mark::Cross).unwrap();
        let err = computer(state.current_mark()).make_move(&state).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidMove(MoveError::NoMovesLeft))
        ));
    }
}
