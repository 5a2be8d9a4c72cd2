//! Live game state and the operations that mutate it.

use super::action::MoveError;
use super::policy::{self, Difficulty};
use super::position::Position;
use super::rules::{check_winner, is_draw};
use super::types::{Board, Mark};
use crate::error::ConfigError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has a winner or is drawn.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// One game in progress: the board, the player to move and the
/// configured computer difficulty.
///
/// The board is only ever written by [`GameState::apply_move`] (and its
/// fallible twin) and cleared by [`GameState::reset`]. Policies receive a
/// shared reference and search on copies.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Mark,
    difficulty: Difficulty,
    rng: StdRng,
}

impl GameState {
    /// Creates a new game with X to move and an OS-seeded random source.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a new game whose random policy is reproducible.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            difficulty: Difficulty::default(),
            rng,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next move places.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the computer difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Sets the computer difficulty.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug!(?difficulty, "Difficulty set");
        self.difficulty = difficulty;
    }

    /// Sets the computer difficulty from its numeric code (0-3).
    ///
    /// Unknown codes are rejected and leave the difficulty unchanged.
    #[instrument(skip(self))]
    pub fn set_difficulty_code(&mut self, code: u8) -> Result<(), ConfigError> {
        let difficulty = Difficulty::try_from(code)?;
        self.set_difficulty(difficulty);
        Ok(())
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Does not switch turns. Returns the position played, or why the move
    /// was rejected; a rejected move leaves the game untouched.
    #[instrument(skip(self))]
    pub fn try_apply_move(&mut self, pos: usize) -> Result<Position, MoveError> {
        let position = Position::from_index(pos).ok_or(MoveError::OutOfRange(pos))?;
        if !self.board.is_empty(pos) {
            warn!(%position, "Rejected move onto occupied square");
            return Err(MoveError::SquareOccupied(position));
        }

        self.board.set(pos, self.current_player);
        debug!(player = %self.current_player, %position, "Move applied");
        Ok(position)
    }

    /// Places the current player's mark at `pos` if the cell is empty.
    ///
    /// Returns false, with no change, for occupied or out-of-range cells.
    pub fn apply_move(&mut self, pos: usize) -> bool {
        self.try_apply_move(pos).is_ok()
    }

    /// Hands the move to the other player.
    ///
    /// Unguarded: callers invoke it exactly once per completed move.
    #[instrument(skip(self))]
    pub fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Returns the winning mark, if any line is complete.
    pub fn detect_winner(&self) -> Option<Mark> {
        check_winner(&self.board)
    }

    /// Returns true when the board is full and nobody has won.
    pub fn detect_tie(&self) -> bool {
        is_draw(&self.board)
    }

    /// Summarises winner and tie detection.
    pub fn status(&self) -> GameStatus {
        match self.detect_winner() {
            Some(winner) => GameStatus::Won(winner),
            None if self.detect_tie() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Empties the board. The player to move is left as it was.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
    }

    /// Empties the board and gives the first move to X.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.reset();
        self.current_player = Mark::X;
    }

    /// Plays the computer's reply for the current player.
    ///
    /// Selects a cell with the configured policy, applies it and switches
    /// turns. On a full board nothing happens and `None` is returned.
    #[instrument(skip(self), fields(difficulty = %self.difficulty, player = %self.current_player))]
    pub fn computer_move(&mut self) -> Option<Position> {
        let choice = policy::select_move(
            self.difficulty,
            &self.board,
            self.current_player,
            &mut self.rng,
        )?;

        match self.try_apply_move(choice) {
            Ok(position) => {
                info!(%position, "Computer moved");
                self.switch_turn();
                Some(position)
            }
            Err(e) => {
                warn!(error = %e, "Policy chose an unplayable cell");
                None
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
