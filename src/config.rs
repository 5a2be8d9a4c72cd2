//! Session configuration.

use crate::error::ConfigError;
use crate::games::tictactoe::Difficulty;
use crate::session::GameMode;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one play session, loadable from TOML.
///
/// Every field is optional in the file:
///
/// ```toml
/// mode = "vs-computer"
/// difficulty = "minimax-optimal"
/// player1_name = "Ada"
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Two humans, or a human against the computer.
    mode: GameMode,

    /// Computer strategy in vs-computer mode.
    difficulty: Difficulty,

    /// Name shown for X. Defaults per mode.
    player1_name: Option<String>,

    /// Name shown for O. Defaults per mode.
    player2_name: Option<String>,

    /// Seed for the random opponent; OS entropy when absent.
    seed: Option<u64>,
}

impl SessionConfig {
    /// Creates a configuration for the given mode and difficulty.
    #[instrument]
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            mode,
            difficulty,
            ..Self::default()
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading session config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Overrides the game mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Overrides the player names; `None` keeps the current value.
    pub fn with_names(mut self, player1: Option<String>, player2: Option<String>) -> Self {
        self.player1_name = player1.or(self.player1_name);
        self.player2_name = player2.or(self.player2_name);
        self
    }

    /// Overrides the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
