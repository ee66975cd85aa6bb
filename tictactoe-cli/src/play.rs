//! Play command - interactive console game
//!
//! Builds the two players from CLI arguments, then alternates turns
//! until the game is over, rendering the board between moves.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;

use tictactoe_core::{GameState, Mark};

use crate::players::{make_player, Player, PlayerKind};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Player kind for X
    #[arg(short = 'x', long, value_enum, default_value = "human")]
    pub x: PlayerKind,

    /// Player kind for O
    #[arg(short = 'o', long, value_enum, default_value = "minimax")]
    pub o: PlayerKind,

    /// Which mark opens the game
    #[arg(short = 's', long, default_value = "X", value_parser = parse_mark)]
    pub starting: Mark,

    /// Computer thinking delay in milliseconds
    #[arg(long, default_value = "300")]
    pub delay_ms: u64,

    /// Score table file for precomputed players
    #[arg(long, value_name = "FILE")]
    pub table: Option<PathBuf>,
}

pub fn parse_mark(s: &str) -> Result<Mark, String> {
    match s {
        "X" | "x" => Ok(Mark::Cross),
        "O" | "o" => Ok(Mark::Naught),
        _ => Err(format!("expected X or O, got {s:?}")),
    }
}

// ============================================================================
// GAME LOOP
// ============================================================================

pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    let delay = Duration::from_millis(args.delay_ms);

    tracing::info!(?args.x, ?args.o, seed, "starting game");

    let mut player_x: Box<dyn Player> =
        make_player(args.x, Mark::Cross, seed, delay, args.table.as_deref())?;
    let mut player_o: Box<dyn Player> = make_player(
        args.o,
        Mark::Naught,
        // Distinct stream so two random players diverge
        seed.wrapping_add(1),
        delay,
        args.table.as_deref(),
    )?;

    let mut state = GameState::initial(args.starting);
    println!("{}", render(&state));

    while !state.game_over() {
        let player = if state.current_mark() == Mark::Cross {
            &mut player_x
        } else {
            &mut player_o
        };
        state = player.make_move(&state)?;
        println!("{}", render(&state));
    }

    report_result(&state);
    Ok(())
}

fn report_result(state: &GameState) {
    match state.winner() {
        Some(mark) => {
            let cells: Vec<String> = state
                .winning_cells()
                .into_iter()
                .flatten()
                .map(cell_name)
                .collect();
            println!("{} wins on {}", mark, cells.join(" "));
        }
        None => println!("It's a tie!"),
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// Board with A-C column and 1-3 row labels
pub fn render(state: &GameState) -> String {
    let cells = state.grid().cells();
    let cell = |i: usize| cells[i].map(Mark::as_char).unwrap_or(' ');
    let mut out = String::new();
    out.push_str("     A   B   C\n");
    for row in 0..3 {
        if row > 0 {
            out.push_str("    ---+---+---\n");
        }
        out.push_str(&format!(
            " {}   {} | {} | {}\n",
            row + 1,
            cell(3 * row),
            cell(3 * row + 1),
            cell(3 * row + 2)
        ));
    }
    out
}

/// Coordinate label for a cell index (0 -> A1, 8 -> C3)
pub fn cell_name(index: usize) -> String {
    let col = (b'A' + (index % 3) as u8) as char;
    let row = index / 3 + 1;
    format!("{col}{row}")
}
