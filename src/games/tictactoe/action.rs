//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects: a session reports the
//! moves it applied so a front end can render them.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    pub player: Mark,
    /// The position where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Returns the mark placed by this move.
    pub fn player(&self) -> Mark {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a requested move was rejected.
///
/// Rejection never changes the game; the caller decides how to surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a cell (valid cells are 0-8).
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}
