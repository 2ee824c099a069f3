//! Core domain types for tic-tac-toe.

use crate::error::BoardError;
use crate::outcome::{Outcome, Verdict};
use crate::position::Position;
use crate::rules;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// The symbol a player places.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// Only [`Board::place`] and [`Board::clear`] mutate the cells, so a board
/// built through the public API holds exactly the marks that were placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Resets every cell to empty.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Checks if a cell holds no mark.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Places `mark` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OccupiedCell`] if the cell already holds a mark;
    /// the board is left unchanged.
    #[instrument(skip(self))]
    pub fn place(&mut self, mark: Mark, pos: Position) -> Result<(), BoardError> {
        if !self.is_empty(pos) {
            return Err(BoardError::OccupiedCell(pos));
        }
        self.fill(mark, pos);
        Ok(())
    }

    /// Writes a mark without checking occupancy. Callers must have checked
    /// [`Board::is_empty`].
    pub(crate) fn fill(&mut self, mark: Mark, pos: Position) {
        self.cells[pos.index()] = Cell::Occupied(mark);
    }

    /// Reports where the game stands from `mark`'s point of view.
    ///
    /// Only wins for `mark` are checked; callers that need both sides
    /// evaluate each mark or use [`Board::outcome`].
    pub fn evaluate(&self, mark: Mark) -> Verdict {
        if rules::has_line(self, mark) {
            Verdict::Won
        } else if rules::is_full(self) {
            Verdict::Drawn
        } else {
            Verdict::Ongoing
        }
    }

    /// Returns the mark holding a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Classifies the whole board, checking both marks.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(mark) => Outcome::Win(mark),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding a mark.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |pos| self.is_empty(*pos))
    }

    /// Returns a copy with every X relabelled O and vice versa.
    pub fn swap_marks(&self) -> Self {
        let mut swapped = *self;
        for cell in swapped.cells.iter_mut() {
            if let Cell::Occupied(mark) = cell {
                *mark = mark.opponent();
            }
        }
        swapped
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their position number so a player can see which
    /// number to enter.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            write!(f, " ")?;
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "  {}", pos + 1)?,
                    Cell::Occupied(mark) => write!(f, "  {}", mark)?,
                }
                if col < 2 {
                    write!(f, "  |")?;
                }
            }
            writeln!(f)?;
            if row < 2 {
                writeln!(f, " -----+-----+------")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board layout string.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid board layout: {}", reason)]
pub struct ParseBoardError {
    /// What was wrong with the input.
    pub reason: String,
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells in row-major order. `X`/`O` (either case) are marks;
    /// `.`, `-`, space or a digit is an empty cell. Line breaks and `|` are
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !matches!(c, '\n' | '\r' | '|')).collect();
        if symbols.len() != 9 {
            return Err(ParseBoardError {
                reason: format!("expected 9 cells, found {}", symbols.len()),
            });
        }

        let mut board = Board::new();
        for (pos, symbol) in Position::ALL.into_iter().zip(symbols) {
            match symbol {
                'X' | 'x' => board.fill(Mark::X, pos),
                'O' | 'o' => board.fill(Mark::O, pos),
                '.' | '-' | ' ' | '1'..='9' => {}
                other => {
                    return Err(ParseBoardError {
                        reason: format!("unexpected symbol {:?} at {}", other, pos.number()),
                    });
                }
            }
        }
        Ok(board)
    }
}
