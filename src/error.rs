//! Game loop error types.

use tictactoe_engine::{BoardError, Mark};

/// Error that ends a match early.
///
/// Bad human input is not an error: it is rejected and the player is asked
/// again.
#[derive(Debug, derive_more::Display)]
pub enum GameError {
    /// Input reached end-of-file while a move was expected.
    #[display("Input closed before a move was entered")]
    InputClosed,

    /// Reading from or writing to the terminal failed.
    #[display("Terminal I/O failed: {}", _0)]
    Io(std::io::Error),

    /// A player produced a move the board refused.
    #[display("Illegal move: {}", _0)]
    Board(BoardError),

    /// The computer was asked to move on a finished board.
    #[display("No move available for {}", _0)]
    NoMoveAvailable(Mark),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(err) => Some(err),
            GameError::Board(err) => Some(err),
            GameError::InputClosed | GameError::NoMoveAvailable(_) => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}
