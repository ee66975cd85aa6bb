//! Eval command - one-shot position analysis

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use tictactoe_core::{
    find_best_move, GameState, Mark, Move, ScoreTable, Strategy, DEFAULT_HEURISTIC_DEPTH,
    DEFAULT_TABLE_FILENAME,
};

use crate::play::{cell_name, parse_mark, render};

#[derive(Args)]
pub struct EvalArgs {
    /// 9-character board string (X, O, space), row-major from top-left
    #[arg(long, value_name = "CELLS")]
    pub board: String,

    /// Which mark opened the game
    #[arg(short = 's', long, default_value = "X", value_parser = parse_mark)]
    pub starting: Mark,

    /// Search variant
    #[arg(long, value_enum, default_value = "minimax")]
    pub strategy: StrategyKind,

    /// Score table file (precomputed strategy only)
    #[arg(long, value_name = "FILE")]
    pub table: Option<PathBuf>,
}

/// Search variants selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    Minimax,
    Heuristic,
    Pruning,
    Precomputed,
}

pub fn run(args: EvalArgs) -> Result<()> {
    let state = GameState::from_cells(&args.board, args.starting)
        .with_context(|| format!("invalid position {:?}", args.board))?;

    println!("{}", render(&state));

    if state.game_over() {
        match state.winner() {
            Some(mark) => println!("Game over: {mark} has won"),
            None => println!("Game over: tie"),
        }
        return Ok(());
    }

    let strategy = build_strategy(&args)?;
    let maximizer = state.current_mark();

    println!("Scores for {maximizer}:");
    for mv in state.possible_moves() {
        let score = strategy.score(&mv, maximizer)?;
        println!("  {}: {:+}", cell_name(mv.cell_index()), score);
    }

    let best = find_best_move(&state, &strategy)?;
    if let Some(best) = best.as_ref().map(Move::cell_index) {
        println!("Best move: {}", cell_name(best));
    }
    Ok(())
}

fn build_strategy(args: &EvalArgs) -> Result<Strategy> {
    Ok(match args.strategy {
        StrategyKind::Minimax => Strategy::Minimax,
        StrategyKind::Heuristic => Strategy::Heuristic {
            depth: DEFAULT_HEURISTIC_DEPTH,
        },
        StrategyKind::Pruning => Strategy::Pruning,
        StrategyKind::Precomputed => {
            let path = args
                .table
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE_FILENAME));
            let table = ScoreTable::load(&path)
                .with_context(|| format!("failed to load score table {}", path.display()))?;
            Strategy::Precomputed(table)
        }
    })
}
