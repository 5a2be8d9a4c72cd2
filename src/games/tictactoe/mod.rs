//! Tic-tac-toe: board, rules, live game state and computer opponents.

pub mod action;
pub mod game;
pub mod policy;
pub mod position;
pub mod rules;
pub mod types;

pub use action::{Move, MoveError};
pub use game::{GameState, GameStatus};
pub use policy::Difficulty;
pub use position::Position;
pub use types::{Board, Mark, WINNING_LINES};
