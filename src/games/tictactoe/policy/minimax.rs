//! Exhaustive minimax search.
//!
//! Scores are always from X's point of view: +1 when X wins, -1 when O
//! wins, 0 for a draw. X maximises and O minimises. The full tree is
//! searched on every call with no pruning and no depth limit; boards are
//! `Copy`, so each ply recurses on its own value and nothing is undone.

use super::super::rules::{check_winner, is_full};
use super::super::types::{Board, Mark};
use tracing::{debug, instrument};

/// Score of a finished game, or `None` while play continues.
pub fn terminal_score(board: &Board) -> Option<i8> {
    match check_winner(board) {
        Some(Mark::X) => Some(1),
        Some(Mark::O) => Some(-1),
        Some(Mark::Empty) => None,
        None => is_full(board).then_some(0),
    }
}

/// Value of `board` with `to_move` about to play, under perfect play.
pub fn evaluate(board: Board, to_move: Mark) -> i8 {
    if let Some(score) = terminal_score(&board) {
        return score;
    }

    let scores = board
        .empty_cells()
        .map(|pos| evaluate(board.with_mark(pos, to_move), to_move.opponent()));
    let best = match to_move {
        Mark::X => scores.max(),
        _ => scores.min(),
    };
    best.unwrap_or(0)
}

/// Chooses the game-theoretically best cell for `mark`.
///
/// Every empty cell is tried in ascending order with the opponent to move
/// next; the first cell with the best score for `mark` wins ties. Returns
/// `None` for a full board or for `Mark::Empty`.
#[instrument(skip(board))]
pub fn select_move(board: &Board, mark: Mark) -> Option<usize> {
    if mark.is_empty() {
        return None;
    }

    let mut best: Option<(usize, i8)> = None;
    for pos in board.empty_cells() {
        let score = evaluate(board.with_mark(pos, mark), mark.opponent());
        let improves = match best {
            None => true,
            Some((_, current)) if mark == Mark::X => score > current,
            Some((_, current)) => score < current,
        };
        if improves {
            best = Some((pos, score));
        }
    }

    if let Some((position, score)) = best {
        debug!(position, score, "Minimax chose move");
    }
    best.map(|(pos, _)| pos)
}
