//! Win detection logic for tic-tac-toe.

use super::super::types::{Board, Mark, WINNING_LINES};

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first uniformly
/// occupied line decides, so a board with several completed lines still
/// has a single deterministic answer.
pub fn check_winner(board: &Board) -> Option<Mark> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a)?;
        (!mark.is_empty() && board.get(b) == Some(mark) && board.get(c) == Some(mark))
            .then_some(mark)
    })
}

/// Returns true if some line through `pos` is fully occupied by `mark`.
pub fn completes_line(board: &Board, pos: usize, mark: Mark) -> bool {
    !mark.is_empty()
        && WINNING_LINES
            .iter()
            .filter(|line| line.contains(&pos))
            .any(|line| line.iter().all(|&i| board.get(i) == Some(mark)))
}
