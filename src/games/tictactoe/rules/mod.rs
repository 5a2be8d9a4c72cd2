//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the live game and the search policies share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, completes_line};
