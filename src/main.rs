//! Batch runner (default binary).
//!
//! Reads one command sequence per line from the input file, replays each on
//! its own grid, and writes the resulting heights to the output file in
//! input order.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tetris_stack::cli::{Args, Config};
use tetris_stack::engine::run_batch;
use tetris_stack::io::{read_lines, write_heights};

fn main() -> Result<()> {
    // RUST_LOG overrides; otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = Config::from_args(Args::parse())?;
    info!(
        "replaying {} -> {} (jobs: {}, format: {:?})",
        config.input.display(),
        config.output.display(),
        config.batch.jobs,
        config.format
    );

    let lines = read_lines(&config.input)?;
    let heights = run_batch(&lines, &config.batch)
        .with_context(|| format!("Failed to process {}", config.input.display()))?;
    write_heights(&config.output, &heights, config.format)?;

    info!("wrote {} height(s) to {}", heights.len(), config.output.display());
    Ok(())
}
