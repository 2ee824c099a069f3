//! Tests for terminal prompts and input handling.

use perfect_tictactoe::{Console, GameError, GameMode};
use std::io::Cursor;
use tictactoe_engine::{Board, Mark, Outcome, Position};

fn console(input: &str) -> Console<Cursor<String>, Vec<u8>> {
    Console::new(Cursor::new(input.to_string()), Vec::new())
}

fn printed(console: Console<Cursor<String>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn test_mode_answer_y_selects_computer() {
    let mut console = console("y\n");
    assert_eq!(console.ask_mode().unwrap(), GameMode::VsComputer);
    assert!(printed(console).contains("human vs. computer"));
}

#[test]
fn test_mode_any_other_answer_selects_humans() {
    for input in ["n\n", "\n", "Y\n", "yes\n", " y\n", "maybe\n"] {
        let mut console = console(input);
        assert_eq!(console.ask_mode().unwrap(), GameMode::VsHuman, "{:?}", input);
    }
}

#[test]
fn test_mode_windows_line_ending() {
    let mut console = console("y\r\n");
    assert_eq!(console.ask_mode().unwrap(), GameMode::VsComputer);
}

#[test]
fn test_mode_end_of_input_selects_humans() {
    let mut console = console("");
    assert_eq!(console.ask_mode().unwrap(), GameMode::VsHuman);
}

#[test]
fn test_ask_position_shows_board_before_each_prompt() {
    let board: Board = "X...O....".parse().unwrap();
    let mut console = console("1\n5\n9\n");

    let pos = console.ask_position(&board, Mark::X).unwrap();
    assert_eq!(pos, Position::BottomRight);

    let output = printed(console);
    assert_eq!(output.matches(" -----+-----+------").count(), 6);
    assert_eq!(output.matches("[1-9]:").count(), 3);
    assert!(output.starts_with("\n   X  |  2  |  3\n"));
}

#[test]
fn test_ask_position_input_closed() {
    let mut console = console("42\n");
    let err = console.ask_position(&Board::new(), Mark::O).unwrap_err();
    assert!(matches!(err, GameError::InputClosed));
    assert_eq!(err.to_string(), "Input closed before a move was entered");
}

#[test]
fn test_announce_draw_and_win() {
    let mut console = console("");
    let board: Board = "XOXXOOOXX".parse().unwrap();
    console.announce(&board, Outcome::Draw).unwrap();
    assert!(printed(console).ends_with("   O  |  X  |  X\nDRAW\n"));

    let mut console = self::console("");
    let board: Board = "OOOXX.X..".parse().unwrap();
    console.announce(&board, Outcome::Win(Mark::O)).unwrap();
    assert!(printed(console).ends_with("O WINS\n"));
}

#[test]
fn test_non_utf8_move_is_reprompted() {
    let mut console = Console::new(Cursor::new(vec![0xff, 0xfe, b'\n', b'5', b'\n']), Vec::new());
    let pos = console.ask_position(&Board::new(), Mark::X).unwrap();
    assert_eq!(pos, Position::Center);

    let output = String::from_utf8(console.into_output()).unwrap();
    assert_eq!(output.matches("[1-9]:").count(), 2);
}

#[test]
fn test_non_utf8_mode_answer_selects_humans() {
    let mut console = Console::new(Cursor::new(vec![0xff, b'\n']), Vec::new());
    assert_eq!(console.ask_mode().unwrap(), GameMode::VsHuman);
}
