//! Game mode selection.

use tracing::instrument;

/// Game mode - who sits opposite the human?
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GameMode {
    /// Human vs perfect-play computer
    VsComputer,
    /// Two humans sharing the terminal
    VsHuman,
}

impl GameMode {
    /// Maps the answer to the startup question onto a mode.
    ///
    /// Only the exact answer `y` selects [`GameMode::VsComputer`]; anything
    /// else, `n` and empty answers included, is a two-human game.
    #[instrument]
    pub fn from_answer(answer: &str) -> Self {
        if answer == "y" {
            GameMode::VsComputer
        } else {
            GameMode::VsHuman
        }
    }

    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::VsComputer => "Human vs Computer",
            GameMode::VsHuman => "Human vs Human",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_lowercase_y_selects_computer() {
        assert_eq!(GameMode::from_answer("y"), GameMode::VsComputer);
        for answer in ["n", "", "Y", "yes", " y", "y ", "no", "q"] {
            assert_eq!(GameMode::from_answer(answer), GameMode::VsHuman, "{:?}", answer);
        }
    }
}
