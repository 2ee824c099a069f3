//! Game outcome types.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Where the game stands for a single mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The mark holds a complete row, column or diagonal.
    Won,
    /// Every cell is filled and the mark holds no line.
    Drawn,
    /// Neither of the above.
    Ongoing,
}

/// Whole-board classification, derived from the cells on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is still being played.
    InProgress,
    /// Board is full with no line.
    Draw,
    /// A mark completed a line.
    Win(Mark),
}

impl Outcome {
    /// Returns true once no further moves can be made.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(mark) => write!(f, "{} WINS", mark),
            Outcome::Draw => write!(f, "DRAW"),
            Outcome::InProgress => write!(f, "IN PROGRESS"),
        }
    }
}
