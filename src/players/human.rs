//! Human player that types moves at the console.

use super::Player;
use crate::console::Console;
use crate::error::GameError;
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, Mark, Position};
use tracing::debug;

/// Human player using line input.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<R: BufRead, W: Write> Player<R, W> for HumanPlayer {
    fn choose_move(
        &mut self,
        board: &Board,
        mark: Mark,
        console: &mut Console<R, W>,
    ) -> Result<Position, GameError> {
        let pos = console.ask_position(board, mark)?;
        debug!(player = %self.name, position = pos.number(), "Human chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
