//! Strictly Rewind - Unified CLI
//!
//! Terminal tic-tac-toe with time travel, plus a headless replay mode.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::Read;
use std::path::Path;
use strictly_rewind::{GameController, RewindConfig, SortOrder, parse_script, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { ascending } => run_play(config, ascending),
        Command::Replay { script } => run_replay(&config, &script),
    }
}

/// Run the interactive terminal game
fn run_play(config: RewindConfig, ascending: bool) -> Result<()> {
    // Log to file to avoid interfering with the TUI
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    log_config(&config);

    let config = if ascending {
        config.with_initial_sort(SortOrder::Ascending)
    } else {
        config
    };

    run_tui(&config)
}

/// Replay a script and print the final view
fn run_replay(config: &RewindConfig, script: &Path) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();
    log_config(config);

    let source = if script == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read script from stdin")?;
        source
    } else {
        std::fs::read_to_string(script)
            .with_context(|| format!("Failed to read script {}", script.display()))?
    };

    let events = parse_script(&source)?;
    let mut controller = GameController::with_sort_order(*config.initial_sort());
    replay(&mut controller, &events);
    info!(events = events.len(), step = controller.current_step(), "Replay finished");

    println!("{}", serde_json::to_string_pretty(&controller.view())?);
    Ok(())
}

/// Records the active configuration once a subscriber is installed.
fn log_config(config: &RewindConfig) {
    info!(
        initial_sort = %config.initial_sort(),
        log_file = %config.log_file().display(),
        log_filter = %config.log_filter(),
        "Using configuration"
    );
}

fn env_filter(config: &RewindConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}
