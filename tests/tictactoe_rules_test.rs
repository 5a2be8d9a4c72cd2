//! Tests for move legality, win and tie detection.

use tactoe::rules::{check_winner, is_draw, is_full};
use tactoe::{Board, GameState, GameStatus, Mark, MoveError, Position, WINNING_LINES};

/// Every assignment of the three marks to the nine cells.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut cells = [Mark::Empty; 9];
        for cell in cells.iter_mut() {
            *cell = match code % 3 {
                0 => Mark::Empty,
                1 => Mark::X,
                _ => Mark::O,
            };
            code /= 3;
        }
        Board::from_cells(cells)
    })
}

fn uniform_line(board: &Board) -> Option<Mark> {
    WINNING_LINES.iter().find_map(|line| {
        let first = board.get(line[0])?;
        let uniform = !first.is_empty() && line.iter().all(|&i| board.get(i) == Some(first));
        uniform.then_some(first)
    })
}

#[test]
fn test_winner_iff_uniform_line() {
    for board in all_boards() {
        let winner = check_winner(&board);
        assert_eq!(winner, uniform_line(&board), "board {:?}", board);
        if let Some(mark) = winner {
            assert!(!mark.is_empty());
        }
    }
}

#[test]
fn test_tie_iff_full_without_winner() {
    for board in all_boards() {
        let expected = board.empty_cells().next().is_none() && check_winner(&board).is_none();
        assert_eq!(is_draw(&board), expected, "board {:?}", board);
        assert_eq!(is_full(&board), board.empty_cells().next().is_none());
    }
}

#[test]
fn test_apply_move_rejects_occupied_and_out_of_range() {
    let mut game = GameState::with_seed(0);
    assert!(game.apply_move(4));
    game.switch_turn();
    let snapshot = *game.board();

    for pos in [4, 9, 10, 100, usize::MAX] {
        assert!(!game.apply_move(pos));
        assert_eq!(*game.board(), snapshot);
    }
    assert_eq!(game.try_apply_move(4), Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(game.try_apply_move(12), Err(MoveError::OutOfRange(12)));
    assert_eq!(game.current_player(), Mark::O);
}

#[test]
fn test_move_error_messages() {
    assert_eq!(
        MoveError::SquareOccupied(Position::TopRight).to_string(),
        "Top-right is already occupied"
    );
    assert_eq!(
        MoveError::OutOfRange(9).to_string(),
        "Position 9 is out of range (must be 0-8)"
    );
}

#[test]
fn test_full_game_to_x_win() {
    let mut game = GameState::with_seed(0);
    for pos in [0, 3, 1, 4] {
        assert!(game.apply_move(pos));
        assert_eq!(game.detect_winner(), None);
        game.switch_turn();
    }
    assert!(game.apply_move(2));
    assert_eq!(game.detect_winner(), Some(Mark::X));
    assert!(!game.detect_tie());
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_full_game_to_tie() {
    let mut game = GameState::with_seed(0);
    // X O X / X O O / O X X
    for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        assert!(game.apply_move(pos));
        game.switch_turn();
    }
    assert_eq!(game.detect_winner(), None);
    assert!(game.detect_tie());
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_reset_clears_board_only() {
    let mut game = GameState::with_seed(0);
    game.apply_move(0);
    game.switch_turn();
    game.apply_move(4);
    game.switch_turn();
    game.switch_turn();

    game.reset();
    assert!(game.board().cells().iter().all(|mark| mark.is_empty()));
    assert_eq!(game.current_player(), Mark::O);
}
