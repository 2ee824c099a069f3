//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::console::Console;
use crate::error::GameError;
use tictactoe_engine::{Board, Mark, Position};

/// Something that can pick a move when its turn comes.
pub trait Player<R, W> {
    /// Picks the position `mark` should occupy next.
    ///
    /// The returned position must be empty on `board`.
    fn choose_move(
        &mut self,
        board: &Board,
        mark: Mark,
        console: &mut Console<R, W>,
    ) -> Result<Position, GameError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
