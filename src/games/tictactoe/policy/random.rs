//! Uniform-random opponent.

use super::super::types::Board;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Picks any empty cell with equal probability.
///
/// Returns `None` only for a full board.
pub fn select_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let empty: Vec<usize> = board.empty_cells().collect();
    empty.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_only_empty_cells_are_chosen() {
        let board = Board::new()
            .with_mark(0, Mark::X)
            .with_mark(4, Mark::O)
            .with_mark(8, Mark::X);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let pos = select_move(&board, &mut rng).expect("board has empty cells");
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_single_empty_cell() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            Mark::X, Mark::O, Mark::X,
            Mark::O, Mark::Empty, Mark::X,
            Mark::O, Mark::X, Mark::O,
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_move(&board, &mut rng), Some(4));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_cells([Mark::X; 9]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_move(&board, &mut rng), None);
    }
}
