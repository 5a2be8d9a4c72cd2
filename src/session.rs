//! Play session: mode, player names, win record and turn flow.

use crate::config::SessionConfig;
use crate::games::tictactoe::{Difficulty, GameState, GameStatus, Mark, Move, MoveError};
use crate::matchup::Tally;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who sits on the O side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the board; the loser starts the next game.
    #[default]
    TwoPlayer,
    /// A human plays X against the computer and always starts.
    VsComputer,
}

impl GameMode {
    /// Names used when none are configured.
    pub fn default_names(self) -> (&'static str, &'static str) {
        match self {
            GameMode::TwoPlayer => ("Player-1", "Player-2"),
            GameMode::VsComputer => ("User", "Computer"),
        }
    }
}

/// A finished game and the message announced for it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct GameRecord {
    /// Final status: a winner or a draw.
    status: GameStatus,
    /// Announcement such as `"Ada wins!"` or `"It's a draw!"`.
    message: String,
}

/// What happened after one human move.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TurnReport {
    /// Moves applied, the human's first and then any computer reply.
    pub moves: Vec<Move>,
    /// Set when the turn ended a game; the board has already been reset.
    pub finished: Option<GameRecord>,
}

/// One run of the program: a game in progress plus the history of
/// finished games.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    mode: GameMode,
    player1_name: String,
    player2_name: String,
    record: Vec<GameRecord>,
}

impl GameSession {
    /// Creates a session from configuration.
    #[instrument(skip(config), fields(mode = %config.mode(), difficulty = %config.difficulty()))]
    pub fn new(config: &SessionConfig) -> Self {
        let mut state = match config.seed() {
            Some(seed) => GameState::with_seed(*seed),
            None => GameState::new(),
        };
        state.set_difficulty(*config.difficulty());

        let mode = *config.mode();
        let (default1, default2) = mode.default_names();
        let player1_name = config
            .player1_name()
            .clone()
            .unwrap_or_else(|| default1.to_string());
        let player2_name = config
            .player2_name()
            .clone()
            .unwrap_or_else(|| default2.to_string());

        info!(player1 = %player1_name, player2 = %player2_name, "Session started");
        Self {
            state,
            mode,
            player1_name,
            player2_name,
            record: Vec::new(),
        }
    }

    /// Returns the game in progress.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the finished games, oldest first.
    pub fn record(&self) -> &[GameRecord] {
        &self.record
    }

    /// Counts wins per mark and draws over the finished games.
    pub fn tally(&self) -> Tally {
        self.record
            .iter()
            .fold(Tally::default(), |mut tally, game| {
                tally.add(*game.status());
                tally
            })
    }

    /// Returns the display name of the player holding `mark`.
    pub fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::O => &self.player2_name,
            _ => &self.player1_name,
        }
    }

    /// Switches mode and starts a fresh game with X to move.
    ///
    /// Player names fall back to the new mode's defaults.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        let (name1, name2) = mode.default_names();
        self.mode = mode;
        self.player1_name = name1.to_string();
        self.player2_name = name2.to_string();
        self.state.restart();
        info!(%mode, "Game mode changed");
    }

    /// Renames the players.
    #[instrument(skip_all)]
    pub fn set_names(&mut self, player1: impl Into<String>, player2: impl Into<String>) {
        self.player1_name = player1.into();
        self.player2_name = player2.into();
        debug!(player1 = %self.player1_name, player2 = %self.player2_name, "Players renamed");
    }

    /// Changes the computer difficulty; takes effect on its next move.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.state.set_difficulty(difficulty);
    }

    /// Abandons the game in progress and starts over with X to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state.restart();
    }

    /// Plays a human move at `pos` (0-8) and, in vs-computer mode, the
    /// computer's reply.
    ///
    /// A rejected move changes nothing. When a move ends the game the
    /// result is recorded and a new game is set up before returning.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn play(&mut self, pos: usize) -> Result<TurnReport, MoveError> {
        let mut report = TurnReport::default();

        let human = self.state.current_player();
        let position = self.state.try_apply_move(pos)?;
        self.state.switch_turn();
        report.moves.push(Move::new(human, position));

        if let Some(record) = self.finish_if_over() {
            report.finished = Some(record);
            return Ok(report);
        }

        if self.mode == GameMode::VsComputer {
            let computer = self.state.current_player();
            if let Some(position) = self.state.computer_move() {
                report.moves.push(Move::new(computer, position));
            }
            report.finished = self.finish_if_over();
        }

        Ok(report)
    }

    /// Records the result and sets up the next game if the current one
    /// is over. Winner is checked before tie.
    fn finish_if_over(&mut self) -> Option<GameRecord> {
        let status = self.state.status();
        let message = match status {
            GameStatus::InProgress => return None,
            GameStatus::Won(mark) => format!("{} wins!", self.name_of(mark)),
            GameStatus::Draw => "It's a draw!".to_string(),
        };

        info!(%message, "Game over");
        let record = GameRecord::new(status, message);
        self.record.push(record.clone());

        match self.mode {
            // The human is X and always opens against the computer.
            GameMode::VsComputer => self.state.restart(),
            // Turn already passed to the player who did not move last.
            GameMode::TwoPlayer => self.state.reset(),
        }
        debug!(next = %self.state.current_player(), "Next game ready");

        Some(record)
    }
}
