//! Perfect Tic-Tac-Toe - terminal game
//!
//! Human vs human, or human vs a computer that never loses.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use perfect_tictactoe::{Cli, Console, GameConfig, Orchestrator};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing();

    let config = load_config(&cli)?;
    let mut console = Console::stdio();

    let mode = match cli.mode {
        Some(mode) => mode,
        None => console.ask_mode()?,
    };

    let mut game = Orchestrator::for_mode(mode, &config, console);
    let outcome = game.run()?;
    info!(%outcome, "Exiting");

    Ok(())
}

/// Logs go to stderr so stdout carries only the game.
#[instrument]
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(&cli.config)?;

    if let Some(mark) = cli.computer_mark {
        info!(?mark, "Overriding computer mark");
        config = config.with_computer_mark(mark.into());
    }

    Ok(config)
}
