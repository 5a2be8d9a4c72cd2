//! Fixed-priority rule cascade.
//!
//! Each rule looks at the board once and either names a cell or passes.
//! Rules are tried in [`RULES`] order and the first hit is played:
//!
//! 1. complete a line for the mover
//! 2. block the opponent's immediate win (blocking variant only)
//! 3. take the center
//! 4. take the corner opposite one held by the opponent
//! 5. take any corner (0, 2, 6, 8)
//! 6. take any side (1, 3, 5, 7)
//!
//! The last two rules cover every cell, so any board with an empty cell
//! yields a move.

use super::super::rules::completes_line;
use super::super::types::{Board, Mark};
use tracing::{debug, instrument};

/// Board and mover seen by every rule.
#[derive(Debug, Clone, Copy)]
struct Situation<'a> {
    board: &'a Board,
    mark: Mark,
    blocking: bool,
}

type Rule = fn(&Situation<'_>) -> Option<usize>;

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];
const SIDES: [usize; 4] = [1, 3, 5, 7];
/// (held by opponent, corner to take)
const OPPOSITE_CORNERS: [(usize, usize); 4] = [(0, 8), (8, 0), (2, 6), (6, 2)];

const RULES: [(&str, Rule); 6] = [
    ("win", take_win),
    ("block", block_win),
    ("center", take_center),
    ("opposite-corner", take_opposite_corner),
    ("corner", take_corner),
    ("side", take_side),
];

/// Chooses a cell for `mark` using the rule cascade.
///
/// With `blocking` set the opponent's immediate wins are blocked before
/// any positional rule applies. Returns `None` only for a full board.
#[instrument(skip(board))]
pub fn select_move(board: &Board, mark: Mark, blocking: bool) -> Option<usize> {
    let situation = Situation {
        board,
        mark,
        blocking,
    };
    RULES.iter().find_map(|(name, rule)| {
        let choice = rule(&situation)?;
        debug!(rule = *name, position = choice, "Heuristic rule matched");
        Some(choice)
    })
}

/// First empty cell (ascending) where `mark` completes a line.
pub fn winning_move(board: &Board, mark: Mark) -> Option<usize> {
    board
        .empty_cells()
        .find(|&pos| completes_line(&board.with_mark(pos, mark), pos, mark))
}

fn take_win(s: &Situation<'_>) -> Option<usize> {
    winning_move(s.board, s.mark)
}

fn block_win(s: &Situation<'_>) -> Option<usize> {
    if !s.blocking {
        return None;
    }
    winning_move(s.board, s.mark.opponent())
}

fn take_center(s: &Situation<'_>) -> Option<usize> {
    s.board.is_empty(CENTER).then_some(CENTER)
}

fn take_opposite_corner(s: &Situation<'_>) -> Option<usize> {
    let opponent = s.mark.opponent();
    OPPOSITE_CORNERS
        .iter()
        .find(|&&(held, target)| {
            s.board.get(held) == Some(opponent) && s.board.is_empty(target)
        })
        .map(|&(_, target)| target)
}

fn take_corner(s: &Situation<'_>) -> Option<usize> {
    CORNERS.into_iter().find(|&pos| s.board.is_empty(pos))
}

fn take_side(s: &Situation<'_>) -> Option<usize> {
    SIDES.into_iter().find(|&pos| s.board.is_empty(pos))
}
