//! Game-state well-formedness checks
//!
//! Run at `GameState` construction, in order: mark-count balance,
//! starting-mark consistency, winner/count parity. The first failing
//! check reports its reason.

use crate::error::{Error, Result};
use crate::grid::{Grid, Mark};

pub fn validate_game_state(grid: &Grid, starting_mark: Mark, winner: Option<Mark>) -> Result<()> {
    validate_number_of_marks(grid)?;
    validate_starting_mark(grid, starting_mark)?;
    validate_winner(grid, starting_mark, winner)
}

/// Marks alternate, so one side is at most one move ahead
pub fn validate_number_of_marks(grid: &Grid) -> Result<()> {
    let x_count = grid.count(Mark::Cross) as i32;
    let o_count = grid.count(Mark::Naught) as i32;
    if (x_count - o_count).abs() > 1 {
        return Err(Error::InvalidGameState {
            reason: "wrong number of Xs and Os",
        });
    }
    Ok(())
}

/// Whichever mark leads in count must be the one that started
pub fn validate_starting_mark(grid: &Grid, starting_mark: Mark) -> Result<()> {
    let x_count = grid.count(Mark::Cross);
    let o_count = grid.count(Mark::Naught);
    let leader = if x_count > o_count {
        Some(Mark::Cross)
    } else if o_count > x_count {
        Some(Mark::Naught)
    } else {
        None
    };
    if let Some(leader) = leader {
        if leader != starting_mark {
            return Err(Error::InvalidGameState {
                reason: "wrong starting mark",
            });
        }
    }
    Ok(())
}

/// A winner must have made the last move: if the winner started, it is
/// strictly ahead in count; otherwise the counts are level.
pub fn validate_winner(grid: &Grid, starting_mark: Mark, winner: Option<Mark>) -> Result<()> {
    let winner = match winner {
        Some(winner) => winner,
        None => return Ok(()),
    };
    let winner_count = grid.count(winner);
    let loser_count = grid.count(winner.other());
    let consistent = if winner == starting_mark {
        winner_count > loser_count
    } else {
        winner_count <= loser_count
    };
    if !consistent {
        return Err(Error::InvalidGameState {
            reason: "winner's mark count does not match turn parity",
        });
    }
    Ok(())
}
