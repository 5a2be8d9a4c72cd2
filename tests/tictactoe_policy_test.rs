//! Tests for the computer opponent policies.

use std::collections::HashSet;

use tactoe::policy::{heuristic, minimax};
use tactoe::rules::check_winner;
use tactoe::{Board, Difficulty, GameState, GameStatus, Mark, Matchup};

use Mark::{Empty as E, O, X};

#[test]
fn test_heuristic_takes_win() {
    let board = Board::from_cells([X, X, E, E, E, E, E, E, E]);
    assert_eq!(heuristic::select_move(&board, X, false), Some(2));
}

#[test]
fn test_heuristic_blocks_before_positional_rules() {
    let board = Board::from_cells([O, O, E, X, E, E, E, E, E]);
    assert_eq!(heuristic::select_move(&board, X, true), Some(2));
}

#[test]
fn test_heuristic_center_then_opposite_corner() {
    let board = Board::from_cells([O, E, E, E, E, E, E, E, E]);
    assert_eq!(heuristic::select_move(&board, X, false), Some(4));

    let board = Board::from_cells([O, E, E, E, O, E, E, E, E]);
    assert_eq!(heuristic::select_move(&board, X, false), Some(8));
}

/// Every board reachable by alternating play from the empty board,
/// stopping at finished games, with the mark to move.
fn reachable_positions() -> Vec<(Board, Mark)> {
    let mut seen = HashSet::new();
    let mut stack = vec![(Board::new(), X)];
    let mut out = Vec::new();
    while let Some((board, to_move)) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if check_winner(&board).is_some() || board.empty_cells().next().is_none() {
            continue;
        }
        out.push((board, to_move));
        for pos in board.empty_cells() {
            stack.push((board.with_mark(pos, to_move), to_move.opponent()));
        }
    }
    out
}

#[test]
fn test_heuristic_is_total_over_reachable_boards() {
    for (board, mark) in reachable_positions() {
        for blocking in [false, true] {
            let pos = heuristic::select_move(&board, mark, blocking)
                .unwrap_or_else(|| panic!("no move on {:?}", board));
            assert!(board.is_empty(pos), "occupied cell {} on {:?}", pos, board);
        }
    }
}

#[test]
fn test_minimax_mirror_always_draws() {
    let matchup = Matchup::new(Difficulty::MinimaxOptimal, Difficulty::MinimaxOptimal);
    assert_eq!(matchup.play(), GameStatus::Draw);
}

/// Plays minimax for `side` against every possible sequence of opponent
/// replies and returns the number of finished games and how many were lost.
fn minimax_against_every_reply(side: Mark) -> (usize, usize) {
    let mut stack = vec![(Board::new(), X)];
    let (mut finished, mut lost) = (0, 0);
    while let Some((board, to_move)) = stack.pop() {
        if let Some(winner) = check_winner(&board) {
            finished += 1;
            if winner != side {
                lost += 1;
            }
            continue;
        }
        if board.empty_cells().next().is_none() {
            finished += 1;
            continue;
        }
        if to_move == side {
            let pos = minimax::select_move(&board, side).expect("open cell");
            stack.push((board.with_mark(pos, side), side.opponent()));
        } else {
            for pos in board.empty_cells() {
                stack.push((board.with_mark(pos, to_move), side));
            }
        }
    }
    (finished, lost)
}

#[test]
fn test_minimax_never_loses_as_either_side() {
    for side in [X, O] {
        let (finished, lost) = minimax_against_every_reply(side);
        assert!(finished > 0);
        assert_eq!(lost, 0, "minimax as {} lost {} of {} games", side, lost, finished);
    }
}

#[test]
fn test_minimax_never_loses_to_other_policies() {
    let opponents = [
        Difficulty::Random,
        Difficulty::Heuristic,
        Difficulty::HeuristicBlocking,
    ];
    for opponent in opponents {
        let as_x = Matchup::new(Difficulty::MinimaxOptimal, opponent)
            .seeded(42)
            .play_many(4);
        assert_eq!(as_x.losses(X), 0, "minimax as X lost to {}: {}", opponent, as_x);

        let as_o = Matchup::new(opponent, Difficulty::MinimaxOptimal)
            .seeded(42)
            .play_many(4);
        assert_eq!(as_o.losses(O), 0, "minimax as O lost to {}: {}", opponent, as_o);
    }
}

#[test]
fn test_minimax_punishes_weak_heuristic() {
    // The non-blocking heuristic ignores threats, so minimax wins as X.
    let status = Matchup::new(Difficulty::MinimaxOptimal, Difficulty::Heuristic).play();
    assert_eq!(status, GameStatus::Won(X));
}

#[test]
fn test_minimax_is_role_agnostic() {
    // Same threat, mirrored marks: each side blocks the other's row.
    let board = Board::from_cells([X, X, E, E, O, E, E, E, E]);
    assert_eq!(minimax::select_move(&board, O), Some(2));

    let board = Board::from_cells([O, O, E, E, X, E, E, E, E]);
    assert_eq!(minimax::select_move(&board, X), Some(2));
}

#[test]
fn test_full_board_computer_move_is_noop() {
    let mut game = GameState::with_seed(5);
    // X O X / X O O / O X X
    for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        assert!(game.apply_move(pos));
        game.switch_turn();
    }
    let board = *game.board();
    let player = game.current_player();

    for difficulty in [
        Difficulty::Random,
        Difficulty::Heuristic,
        Difficulty::HeuristicBlocking,
        Difficulty::MinimaxOptimal,
    ] {
        game.set_difficulty(difficulty);
        assert_eq!(game.computer_move(), None);
        assert_eq!(*game.board(), board);
        assert_eq!(game.current_player(), player);
    }
}

#[test]
fn test_computer_move_never_mutates_outside_one_cell() {
    let mut game = GameState::with_seed(9);
    game.set_difficulty(Difficulty::MinimaxOptimal);
    assert!(game.apply_move(0));
    game.switch_turn();
    let before = *game.board();

    let played = game.computer_move().expect("board has room");
    let after = *game.board();
    let changed: Vec<usize> = (0..9).filter(|&i| before.get(i) != after.get(i)).collect();
    assert_eq!(changed, vec![played.to_index()]);
    assert_eq!(after.get(played.to_index()), Some(O));
}
