//! Exhaustive minimax move selection.
//!
//! The full 3x3 game tree is small enough to search completely, so there is
//! no pruning and no heuristic: every score is exact.

use crate::outcome::Verdict;
use crate::position::Position;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game-theoretic value of a board for the mark about to move.
///
/// Variants are declared in ascending order so that `Loss < Draw < Win`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Score {
    /// The mover loses against perfect play.
    #[display("-1")]
    Loss,
    /// Perfect play from both sides draws.
    #[display("0")]
    Draw,
    /// The mover can force a win.
    #[display("1")]
    Win,
}

impl Score {
    /// Integer form (-1, 0 or 1).
    pub fn value(self) -> i8 {
        match self {
            Score::Loss => -1,
            Score::Draw => 0,
            Score::Win => 1,
        }
    }
}

impl std::ops::Neg for Score {
    type Output = Score;

    /// The same board seen by the other mark.
    fn neg(self) -> Score {
        match self {
            Score::Loss => Score::Win,
            Score::Draw => Score::Draw,
            Score::Win => Score::Loss,
        }
    }
}

/// Result of a search: the value for the mover and the move achieving it.
///
/// `position` is `None` when the board is already decided or has no empty
/// cell, so no move was scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveResult {
    score: Score,
    position: Option<Position>,
}

impl MoveResult {
    /// Creates a result.
    pub fn new(score: Score, position: Option<Position>) -> Self {
        Self { score, position }
    }

    /// Value for the mark that was to move.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Chosen position, if a move was scored.
    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

/// Finds the optimal move for `mark` on `board`.
///
/// Candidates are tried in row-major order and only a strictly better score
/// replaces the current best, so among equally valued moves the lowest
/// numbered position is returned. The caller's board is never modified.
#[instrument(level = "trace", skip(board), fields(filled = board.filled_count()))]
pub fn best_move(board: &Board, mark: Mark) -> MoveResult {
    let mut nodes = 0u64;
    let result = search(board, mark, &mut nodes);
    debug!(
        %mark,
        position = ?result.position.map(Position::number),
        score = result.score.value(),
        nodes,
        "Search complete"
    );
    result
}

fn search(board: &Board, mark: Mark, nodes: &mut u64) -> MoveResult {
    *nodes += 1;

    if board.evaluate(mark) == Verdict::Won {
        return MoveResult::new(Score::Win, None);
    }
    if board.evaluate(mark.opponent()) == Verdict::Won {
        return MoveResult::new(Score::Loss, None);
    }

    let mut best: Option<(Score, Position)> = None;
    for pos in board.empty_positions() {
        let mut child = *board;
        child.fill(mark, pos);
        let score = -search(&child, mark.opponent(), nodes).score;

        let improves = match best {
            Some((best_score, _)) => score > best_score,
            None => true,
        };
        if improves {
            best = Some((score, pos));
        }
    }

    match best {
        Some((score, pos)) => MoveResult::new(score, Some(pos)),
        None => MoveResult::new(Score::Draw, None),
    }
}
