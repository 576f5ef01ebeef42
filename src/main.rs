//! Strictly Timetravel - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use cli::{Cli, Command};
use strictly_timetravel::{GameSession, Position, Settings, SortOrder};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.descending {
        settings = settings.with_order(SortOrder::Descending);
    }

    match cli.command {
        Command::Play => run_play(&settings),
        Command::Replay { moves, jump, json } => run_replay(&settings, &moves, jump, json),
    }
}

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Run the terminal UI, logging to a file so output does not corrupt the screen.
fn run_play(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    strictly_timetravel::run_tui(settings)
}

/// Apply moves without a terminal UI and print the projection.
fn run_replay(settings: &Settings, moves: &[Position], jump: Option<usize>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr)
        .init();

    let mut session = GameSession::with_order(settings.order());
    for pos in moves {
        let outcome = session.play(*pos);
        if let Some(reason) = outcome.rejection() {
            warn!(position = %pos, %reason, "Move had no effect");
        }
    }

    if let Some(step) = jump {
        let len = session.history().len();
        ensure!(step < len, "Cannot jump to step {step}: history has steps 0..={}", len - 1);
        session.jump_to(step);
    }

    info!(steps = session.history().len() - 1, cursor = session.cursor(), "Replay finished");

    let projection = session.projection();
    if json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        println!("{projection}");
    }
    Ok(())
}
