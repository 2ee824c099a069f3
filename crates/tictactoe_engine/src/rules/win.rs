//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};
use strum::IntoEnumIterator;

/// Every row, column and diagonal. For each index `i` the table lists row
/// `i` then column `i`; the two diagonals close the table.
pub const LINES: [[Position; 3]; 8] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `mark` occupies a complete line.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let held = Cell::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == held))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark has three in a row, `None` otherwise.
/// X is checked first; a board built through legal alternating play never
/// holds lines for both marks.
pub fn check_winner(board: &Board) -> Option<Mark> {
    Mark::iter().find(|mark| has_line(board, *mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.place(Mark::O, pos).unwrap();
            }
            assert!(has_line(&board, Mark::O), "line {:?} should win", line);
            assert!(!has_line(&board, Mark::X));
            assert_eq!(check_winner(&board), Some(Mark::O));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.OO....".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX......".parse().unwrap();
        assert!(!has_line(&board, Mark::X));
        assert!(!has_line(&board, Mark::O));
    }
}
