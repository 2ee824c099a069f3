//! Board error types.

use crate::Position;

/// Error returned when a placement would break the board invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The cell at the position already holds a mark.
    #[display("Cell {} is already occupied", _0.number())]
    OccupiedCell(Position),
}

impl std::error::Error for BoardError {}
