//! Computer-vs-computer games between two difficulties.

use crate::games::tictactoe::{Difficulty, GameState, GameStatus, Mark};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Win/draw counts over a series of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct Tally {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Tally {
    /// Counts one finished game. Games still in progress are ignored.
    pub fn add(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::Won(Mark::Empty) | GameStatus::InProgress => {}
        }
    }

    /// Number of games counted.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Games lost by the side playing `mark`.
    pub fn losses(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.o_wins,
            Mark::O => self.x_wins,
            Mark::Empty => 0,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Two difficulties playing each other, X first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Matchup {
    /// Policy playing X.
    x: Difficulty,
    /// Policy playing O.
    o: Difficulty,
    /// Seed for random policies; OS entropy when absent.
    #[new(default)]
    seed: Option<u64>,
}

impl Matchup {
    /// Makes random policies reproducible.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Plays one game from an empty board and returns its result.
    #[instrument]
    pub fn play(&self) -> GameStatus {
        let mut state = self.new_state();
        self.play_out(&mut state)
    }

    /// Plays `games` games in a row and counts the results.
    ///
    /// One random source is shared across the series so random policies
    /// do not repeat the same game.
    #[instrument]
    pub fn play_many(&self, games: u32) -> Tally {
        let mut state = self.new_state();
        let mut tally = Tally::default();
        for _ in 0..games {
            state.restart();
            tally.add(self.play_out(&mut state));
        }
        info!(%tally, "Matchup finished");
        tally
    }

    fn new_state(&self) -> GameState {
        match self.seed {
            Some(seed) => GameState::with_seed(seed),
            None => GameState::new(),
        }
    }

    fn play_out(&self, state: &mut GameState) -> GameStatus {
        loop {
            let status = state.status();
            if status.is_over() {
                debug!(?status, board = %state.board().display(), "Game finished");
                return status;
            }

            let difficulty = match state.current_player() {
                Mark::O => self.o,
                _ => self.x,
            };
            state.set_difficulty(difficulty);
            if state.computer_move().is_none() {
                return state.status();
            }
        }
    }
}
