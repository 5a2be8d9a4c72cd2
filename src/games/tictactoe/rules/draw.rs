//! Draw detection logic for tic-tac-toe.

use super::super::types::{Board, Mark};
use super::win::check_winner;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&mark| mark != Mark::Empty)
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(4, X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_cells([X; 9]);
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_cells([X, O, X, O, X, X, O, X, O]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X wins top row on a full board
        let board = Board::from_cells([X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_not_draw_with_empty_cell() {
        let board = Board::from_cells([X, O, X, O, X, X, O, X, E]);
        assert!(!is_draw(&board));
    }
}
