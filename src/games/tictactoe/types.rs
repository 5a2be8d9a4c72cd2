//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Occupant of a single cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Unoccupied cell.
    #[default]
    #[display(" ")]
    Empty,
    /// Player X (always moves first in a fresh game).
    #[display("X")]
    X,
    /// Player O.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing mark. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Returns true for the unoccupied mark.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

/// The eight index triples that win when uniformly occupied.
///
/// Order matters for [`check_winner`](super::rules::check_winner): rows
/// top to bottom, then columns left to right, then the two diagonals.
#[rustfmt::skip]
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// 3x3 tic-tac-toe board.
///
/// The board is `Copy`: search code works on value copies and never
/// touches the board owned by a live game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Mark; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; 9],
        }
    }

    /// Creates a board from explicit cell contents.
    pub fn from_cells(cells: [Mark; 9]) -> Self {
        Self { cells }
    }

    /// Gets the mark at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Mark> {
        self.cells.get(pos).copied()
    }

    /// Sets the mark at the given position.
    ///
    /// Returns false without touching the board if `pos` is out of range.
    pub fn set(&mut self, pos: usize, mark: Mark) -> bool {
        match self.cells.get_mut(pos) {
            Some(cell) => {
                *cell = mark;
                true
            }
            None => false,
        }
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    pub fn with_mark(mut self, pos: usize, mark: Mark) -> Self {
        self.set(pos, mark);
        self
    }

    /// Checks if a cell is empty. Out-of-range positions are never empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Mark::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Mark; 9] {
        &self.cells
    }

    /// Iterates over the indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(pos, _)| pos)
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells = [Mark::Empty; 9];
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based cell number so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Mark::Empty => (pos + 1).to_string(),
                    mark => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
