//! Draw detection logic for tic-tac-toe.

use crate::{Board, Cell};

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
