//! Tactoe library - tic-tac-toe engine with computer opponents
//!
//! The core is a single-threaded game state plus four selectable
//! opponent policies. Everything around it is thin.
//!
//! # Architecture
//!
//! - **Games**: board, rules, live [`GameState`] and opponent policies
//! - **Session**: game mode, player names and the in-memory win record
//! - **Matchup**: computer-vs-computer series between two difficulties
//! - **Terminal**: line-based front end used by the `tactoe` binary
//!
//! # Example
//!
//! ```
//! use tactoe::{Difficulty, GameState, Mark};
//!
//! let mut game = GameState::with_seed(7);
//! game.set_difficulty(Difficulty::MinimaxOptimal);
//!
//! assert!(game.apply_move(0));
//! game.switch_turn();
//! game.computer_move();
//!
//! assert_eq!(game.board().get(4), Some(Mark::O));
//! assert_eq!(game.detect_winner(), None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod games;
mod matchup;
mod session;
mod terminal;

// Crate-level exports - Configuration
pub use config::SessionConfig;
pub use error::ConfigError;

// Crate-level exports - Session management
pub use session::{GameMode, GameRecord, GameSession, TurnReport};

// Crate-level exports - Computer-vs-computer play
pub use matchup::{Matchup, Tally};

// Crate-level exports - Terminal front end
pub use terminal::run_terminal_session;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Difficulty, GameState, GameStatus, Mark, Move, MoveError, Position, WINNING_LINES,
};

// Crate-level exports - Rules and policies, for callers that work on bare boards
pub use games::tictactoe::{policy, rules};
