//! Perfect Tic-Tac-Toe library - terminal play against a minimax opponent
//!
//! The game rules and move search live in [`tictactoe_engine`]; this crate
//! adds the text front end.
//!
//! # Architecture
//!
//! - **Console**: line-oriented input/output over any reader/writer pair
//! - **Players**: humans typing positions, or the perfect-play computer
//! - **Orchestrator**: owns the board, alternates turns, announces results
//! - **Config**: optional TOML settings plus command-line overrides
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{ComputerPlayer, Console, Orchestrator};
//! use std::io::Cursor;
//! use tictactoe_engine::Outcome;
//!
//! let console = Console::new(Cursor::new(String::new()), Vec::new());
//! let mut game: Orchestrator<Cursor<String>, Vec<u8>> = Orchestrator::new(
//!     Box::new(ComputerPlayer::new("Computer X")),
//!     Box::new(ComputerPlayer::new("Computer O")),
//!     console,
//! );
//! assert_eq!(game.run().unwrap(), Outcome::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod error;
mod mode;
mod orchestrator;
mod players;

// Crate-level exports - Command line
pub use cli::{Cli, MarkArg};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Terminal I/O
pub use console::{Console, Rejection, parse_position};

// Crate-level exports - Errors
pub use error::GameError;

// Crate-level exports - Game flow
pub use mode::GameMode;
pub use orchestrator::Orchestrator;
pub use players::{ComputerPlayer, HumanPlayer, Player};
