//! TICTACTOE CLI - Command-line interface
//!
//! Commands:
//! - play: Interactive console game against any engine strategy
//! - eval: Score every available move in a given position
//! - precompute: Build and save the full minimax score table

use clap::{Parser, Subcommand};

mod eval_cmd;
mod play;
mod players;
mod precompute;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe game engine and console frontend")]
struct Cli {
    /// RNG seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(play::PlayArgs),
    /// Analyze a position
    Eval(eval_cmd::EvalArgs),
    /// Build the precomputed minimax table
    Precompute(precompute::PrecomputeArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args, cli.seed),
        Commands::Eval(args) => eval_cmd::run(args),
        Commands::Precompute(args) => precompute::run(args),
    }
}
