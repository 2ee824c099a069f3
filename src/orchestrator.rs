//! Game orchestration between players.

use crate::config::GameConfig;
use crate::console::Console;
use crate::error::GameError;
use crate::mode::GameMode;
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, Mark, Outcome, Verdict};
use tracing::{debug, info, instrument};

/// Runs one match: owns the board, the turn and both players.
pub struct Orchestrator<R, W> {
    board: Board,
    to_move: Mark,
    player_x: Box<dyn Player<R, W>>,
    player_o: Box<dyn Player<R, W>>,
    console: Console<R, W>,
}

impl<R: BufRead + 'static, W: Write + 'static> Orchestrator<R, W> {
    /// Seats players according to `mode` and `config`.
    ///
    /// In [`GameMode::VsComputer`] the computer takes the configured mark and
    /// the human the other one.
    #[instrument(skip(config, console))]
    pub fn for_mode(mode: GameMode, config: &GameConfig, console: Console<R, W>) -> Self {
        let human = |mark: Mark| -> Box<dyn Player<R, W>> {
            Box::new(HumanPlayer::new(format!("{} {}", config.human_name(), mark)))
        };

        let (player_x, player_o) = match mode {
            GameMode::VsHuman => (human(Mark::X), human(Mark::O)),
            GameMode::VsComputer => {
                let computer: Box<dyn Player<R, W>> = Box::new(ComputerPlayer::new("Computer"));
                match config.computer_mark() {
                    Mark::X => (computer, human(Mark::O)),
                    Mark::O => (human(Mark::X), computer),
                }
            }
        };

        info!(mode = mode.name(), "Seating players");
        Self::new(player_x, player_o, console)
    }
}

impl<R: BufRead, W: Write> Orchestrator<R, W> {
    /// Creates an orchestrator with an empty board; X moves first.
    pub fn new(
        player_x: Box<dyn Player<R, W>>,
        player_o: Box<dyn Player<R, W>>,
        console: Console<R, W>,
    ) -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            player_x,
            player_o,
            console,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Consumes the orchestrator and returns its console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Plays one move and reports where the game stands afterwards.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play_turn(&mut self) -> Result<Outcome, GameError> {
        let mark = self.to_move;
        let player = match mark {
            Mark::X => &mut self.player_x,
            Mark::O => &mut self.player_o,
        };

        debug!(player = player.name(), "Waiting for move");
        let position = player.choose_move(&self.board, mark, &mut self.console)?;
        self.board.place(mark, position)?;
        info!(player = player.name(), %position, "Move made");

        self.to_move = mark.opponent();
        Ok(match self.board.evaluate(mark) {
            Verdict::Won => Outcome::Win(mark),
            Verdict::Drawn => Outcome::Draw,
            Verdict::Ongoing => Outcome::InProgress,
        })
    }

    /// Runs the game loop until a win or draw, then announces it.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, GameError> {
        info!("Starting game orchestration");

        loop {
            let outcome = self.play_turn()?;
            if outcome.is_over() {
                self.console.announce(&self.board, outcome)?;
                info!(%outcome, "Game over");
                return Ok(outcome);
            }
        }
    }
}
