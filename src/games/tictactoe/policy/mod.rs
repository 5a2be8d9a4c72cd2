//! Computer opponent policies and the difficulty that selects them.

pub mod heuristic;
pub mod minimax;
pub mod random;

use super::types::{Board, Mark};
use crate::error::ConfigError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Strategy used to compute the computer's move.
///
/// Numeric codes 0-3 are accepted at the boundary through
/// [`TryFrom<u8>`]; anything else is a configuration error.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Random,
    /// Rule cascade without blocking.
    #[default]
    Heuristic,
    /// Rule cascade that blocks the opponent's immediate wins.
    HeuristicBlocking,
    /// Exhaustive minimax search; never loses.
    MinimaxOptimal,
}

impl Difficulty {
    /// Numeric code used across the presentation boundary.
    pub fn code(self) -> u8 {
        match self {
            Difficulty::Random => 0,
            Difficulty::Heuristic => 1,
            Difficulty::HeuristicBlocking => 2,
            Difficulty::MinimaxOptimal => 3,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Difficulty::Random),
            1 => Ok(Difficulty::Heuristic),
            2 => Ok(Difficulty::HeuristicBlocking),
            3 => Ok(Difficulty::MinimaxOptimal),
            other => Err(ConfigError::new(format!(
                "Invalid difficulty code {} (expected 0-3)",
                other
            ))),
        }
    }
}

/// Dispatches to the policy configured by `difficulty`.
///
/// `rng` is only consumed by [`Difficulty::Random`]. Returns `None` when
/// the board has no empty cell.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(
    difficulty: Difficulty,
    board: &Board,
    mark: Mark,
    rng: &mut R,
) -> Option<usize> {
    let choice = match difficulty {
        Difficulty::Random => random::select_move(board, rng),
        Difficulty::Heuristic => heuristic::select_move(board, mark, false),
        Difficulty::HeuristicBlocking => heuristic::select_move(board, mark, true),
        Difficulty::MinimaxOptimal => minimax::select_move(board, mark),
    };
    debug!(?choice, "Opponent policy selected move");
    choice
}
