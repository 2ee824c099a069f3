//! Tic-tac-toe engine - board model and perfect-play move selection.
//!
//! This crate contains no I/O. It provides:
//!
//! - **Board model**: a 3x3 grid of [`Cell`]s addressed by [`Position`],
//!   with per-mark evaluation ([`Verdict`]) and whole-board [`Outcome`]s
//! - **Move selection**: [`best_move`], an exhaustive minimax search that
//!   returns the optimal move and its exact value
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{best_move, Board, Mark, Position, Score};
//!
//! let board: Board = "XX.OO....".parse().unwrap();
//! let result = best_move(&board, Mark::X);
//!
//! assert_eq!(result.position(), Some(Position::TopRight));
//! assert_eq!(result.score(), Score::Win);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod minimax;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use error::BoardError;
pub use minimax::{MoveResult, Score, best_move};
pub use outcome::{Outcome, Verdict};
pub use position::Position;
pub use types::{Board, Cell, Mark, ParseBoardError};
