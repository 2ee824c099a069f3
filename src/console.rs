//! Line-oriented terminal I/O.
//!
//! [`Console`] is generic over its reader and writer so matches can be
//! driven from in-memory buffers as easily as from stdin/stdout.

use crate::error::GameError;
use crate::mode::GameMode;
use std::io::{BufRead, StdinLock, Stdout, Write};
use tictactoe_engine::{Board, Mark, Outcome, Position};
use tracing::{debug, instrument};

const MODE_QUESTION: &str = "Want to play human vs. computer? (y/n) Any answer other than 'y' will result in a human vs. human game";

/// Why a typed move was turned down.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// Input was not an integer.
    #[display("{:?} is not a number", _0)]
    NotANumber(String),
    /// Number outside 1-9.
    #[display("{} is not between 1 and 9", _0)]
    OutOfRange(i64),
    /// Cell already holds a mark.
    #[display("cell {} is already taken", _0.number())]
    Occupied(Position),
}

/// Interprets one line of human input as a move on `board`.
pub fn parse_position(answer: &str, board: &Board) -> Result<Position, Rejection> {
    let trimmed = answer.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| Rejection::NotANumber(trimmed.to_string()))?;
    let pos = Position::from_number(number).ok_or(Rejection::OutOfRange(number))?;
    if board.is_empty(pos) {
        Ok(pos)
    } else {
        Err(Rejection::Occupied(pos))
    }
}

/// Terminal reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its terminator. `None` at end of input.
    ///
    /// Invalid UTF-8 is decoded lossily.
    pub fn read_line(&mut self) -> Result<Option<String>, GameError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Asks whether to play against the computer.
    #[instrument(skip(self))]
    pub fn ask_mode(&mut self) -> Result<GameMode, GameError> {
        writeln!(self.output, "{}", MODE_QUESTION)?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        let mode = GameMode::from_answer(&answer);
        debug!(mode = mode.name(), "Mode selected");
        Ok(mode)
    }

    /// Prints the board preceded by a blank line.
    pub fn show_board(&mut self, board: &Board) -> Result<(), GameError> {
        writeln!(self.output)?;
        write!(self.output, "{}", board)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompts until the human enters an empty position 1-9.
    ///
    /// The board is shown before every prompt. Rejected answers never touch
    /// the board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InputClosed`] if input ends first.
    #[instrument(skip(self, board))]
    pub fn ask_position(&mut self, board: &Board, mark: Mark) -> Result<Position, GameError> {
        loop {
            self.show_board(board)?;
            writeln!(self.output, "Where would you like to place your '{}'? [1-9]:", mark)?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Err(GameError::InputClosed);
            };
            match parse_position(&answer, board) {
                Ok(pos) => return Ok(pos),
                Err(rejection) => debug!(%rejection, "Move rejected"),
            }
        }
    }

    /// Shows the final board and the result line.
    #[instrument(skip(self, board))]
    pub fn announce(&mut self, board: &Board, outcome: Outcome) -> Result<(), GameError> {
        self.show_board(board)?;
        writeln!(self.output, "{}", outcome)?;
        self.output.flush()?;
        Ok(())
    }
}
