//! Computer player backed by exhaustive minimax.

use super::Player;
use crate::console::Console;
use crate::error::GameError;
use tictactoe_engine::{Board, Mark, Position, best_move};
use tracing::debug;

/// Perfect-play opponent. Moves silently.
pub struct ComputerPlayer {
    name: String,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<R, W> Player<R, W> for ComputerPlayer {
    fn choose_move(
        &mut self,
        board: &Board,
        mark: Mark,
        _console: &mut Console<R, W>,
    ) -> Result<Position, GameError> {
        let result = best_move(board, mark);
        let pos = result.position().ok_or(GameError::NoMoveAvailable(mark))?;
        debug!(
            player = %self.name,
            position = pos.number(),
            score = result.score().value(),
            "Computer chose position"
        );
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
