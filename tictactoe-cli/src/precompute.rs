//! Precompute command - build and save the full minimax score table

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;

use tictactoe_core::{ScoreTable, DEFAULT_TABLE_FILENAME};

#[derive(Args)]
pub struct PrecomputeArgs {
    /// Output file
    #[arg(long, value_name = "FILE", default_value = DEFAULT_TABLE_FILENAME)]
    pub output: PathBuf,
}

pub fn run(args: PrecomputeArgs) -> Result<()> {
    tracing::info!("precomputing minimax scores for both starting marks");
    let started = Instant::now();

    let table = ScoreTable::precompute()?;
    table
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    tracing::info!(
        entries = table.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "score table written"
    );
    println!(
        "Wrote {} scores to {}",
        table.len(),
        args.output.display()
    );
    Ok(())
}
