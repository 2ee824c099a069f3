//! Command-line interface for perfect_tictactoe.

use crate::mode::GameMode;
use clap::{Parser, ValueEnum};
use tictactoe_engine::Mark;

/// Perfect Tic-Tac-Toe - play a second human or an unbeatable computer
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Terminal tic-tac-toe with a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game mode. When omitted, the game asks at startup.
    #[arg(short, long, value_enum)]
    pub mode: Option<GameMode>,

    /// Mark the computer plays in vs-computer games (overrides the config file)
    #[arg(long, value_enum)]
    pub computer_mark: Option<MarkArg>,

    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,
}

/// Mark as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lower")]
pub enum MarkArg {
    /// Mark X
    X,
    /// Mark O
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}
