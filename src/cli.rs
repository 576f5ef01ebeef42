//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_timetravel::Position;

/// Strictly Timetravel - tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Falls back to $STRICTLY_TIMETRAVEL_CONFIG.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// List moves most recent first
    #[arg(long, global = true)]
    pub descending: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply moves non-interactively and print the result
    Replay {
        /// Cells to play in order, as indices 0-8 or labels (e.g. 4,top-left,8)
        #[arg(short, long, value_delimiter = ',', value_parser = parse_cell)]
        moves: Vec<Position>,

        /// Step to jump to after the moves
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the projection as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_cell(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{s}' is not a cell (use 0-8 or a label like center)"))
}
