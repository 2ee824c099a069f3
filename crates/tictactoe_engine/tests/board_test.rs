//! Tests for the tic-tac-toe board model.

use tictactoe_engine::{Board, Cell, Mark, Position, Verdict};

/// Builds every one of the 3^9 cell layouts, legal or not.
fn all_layouts() -> Vec<Board> {
    (0..3usize.pow(9))
        .map(|code| {
            let layout: String = (0..9)
                .map(|i| match (code / 3usize.pow(i)) % 3 {
                    0 => '.',
                    1 => 'X',
                    _ => 'O',
                })
                .collect();
            layout.parse().expect("generated layout is valid")
        })
        .collect()
}

fn has_any_line(board: &Board) -> bool {
    board.evaluate(Mark::X) == Verdict::Won || board.evaluate(Mark::O) == Verdict::Won
}

#[test]
fn test_unfinished_boards_are_ongoing() {
    let mut checked = 0;
    for board in all_layouts() {
        if has_any_line(&board) || board.filled_count() > 8 {
            continue;
        }
        assert_eq!(board.evaluate(Mark::X), Verdict::Ongoing, "{}", board);
        assert_eq!(board.evaluate(Mark::O), Verdict::Ongoing, "{}", board);
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn test_full_boards_without_line_are_drawn_for_both() {
    let mut checked = 0;
    for board in all_layouts() {
        if !board.is_full() || has_any_line(&board) {
            continue;
        }
        assert_eq!(board.evaluate(Mark::X), Verdict::Drawn, "{}", board);
        assert_eq!(board.evaluate(Mark::O), Verdict::Drawn, "{}", board);
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn test_evaluate_reports_only_the_given_mark() {
    let board: Board = "OOOXX.X..".parse().unwrap();
    assert_eq!(board.evaluate(Mark::O), Verdict::Won);
    assert_eq!(board.evaluate(Mark::X), Verdict::Ongoing);
}

#[test]
fn test_is_empty_tracks_placements() {
    let mut board = Board::new();
    assert!(Position::ALL.iter().all(|p| board.is_empty(*p)));

    board.place(Mark::X, Position::TopRight).unwrap();
    assert!(!board.is_empty(Position::TopRight));
    assert_eq!(board.get(Position::TopRight), Cell::Occupied(Mark::X));
    let free: Vec<Position> = board.empty_positions().collect();
    assert_eq!(free.len(), 8);
    assert!(!free.contains(&Position::TopRight));
}

#[test]
fn test_copy_is_independent() {
    let mut original = Board::new();
    original.place(Mark::X, Position::Center).unwrap();
    let before = original.render();

    let mut copy = original;
    copy.place(Mark::O, Position::TopLeft).unwrap();
    copy.place(Mark::X, Position::BottomRight).unwrap();

    assert_eq!(original.render(), before);
    assert_ne!(copy.render(), before);
    assert_eq!(original.filled_count(), 1);
}

#[test]
fn test_clone_then_clear_leaves_original() {
    let original: Board = "XO.X.O...".parse().unwrap();
    let before = original.render();

    let mut copy = original.clone();
    copy.clear();

    assert_eq!(original.render(), before);
    assert_eq!(copy, Board::new());
}
