//! Command-line interface for strictly_rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Local tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_rewind.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// List history oldest first, overriding the config
        #[arg(long)]
        ascending: bool,
    },

    /// Replay a script of events and print the resulting view as JSON
    Replay {
        /// Script file, or `-` for stdin
        script: PathBuf,
    },
}
