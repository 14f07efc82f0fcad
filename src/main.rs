//! tictactoe_timeline - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_timeline::{AppConfig, ReplaySummary, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play {
        config: None,
        log_file: None,
    }) {
        Command::Play { config, log_file } => run_play(config, log_file).await,
        Command::Replay { cells, json } => run_replay(&cells, json),
    }
}

/// Run the interactive terminal game
async fn run_play(config: Option<PathBuf>, log_file: Option<PathBuf>) -> Result<()> {
    let mut config = AppConfig::load(config.as_deref()).context("Failed to load config")?;
    if let Some(log_file) = log_file {
        config = config.with_log_file(log_file);
    }
    run_tui(config).await
}

/// Replay moves headlessly and print the outcome
fn run_replay(cells: &[u8], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(moves = cells.len(), "Replaying moves");
    let cells: Vec<usize> = cells.iter().map(|&c| usize::from(c)).collect();
    let summary = ReplaySummary::from_cells(&cells)?;

    if json {
        println!("{}", summary.render_json()?);
    } else {
        print!("{}", summary.render_text());
    }
    Ok(())
}
