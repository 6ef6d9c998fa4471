//! Session configuration loaded from TOML.

use crate::games::cube::{Difficulty, Mark};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings fixed for the lifetime of a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SessionConfig {
    /// Display name for mark X.
    #[setters(into)]
    player_x: String,

    /// Display name for mark O.
    #[setters(into)]
    player_o: String,

    /// Whether one side is played by the computer.
    vs_computer: bool,

    /// Mark played by the computer.
    computer_mark: Mark,

    /// Strength of the computer.
    difficulty: Difficulty,

    /// Whether X moves first.
    x_first: bool,

    /// Pause before each computer move, in milliseconds.
    computer_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_x: "Player X".to_string(),
            player_o: "Player O".to_string(),
            vs_computer: true,
            computer_mark: Mark::O,
            difficulty: Difficulty::default(),
            x_first: true,
            computer_delay_ms: 500,
        }
    }
}

impl SessionConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        let config = config.validated()?;
        info!(difficulty = %config.difficulty, vs_computer = config.vs_computer, "Config loaded");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Trims player names and rejects blank ones.
    #[instrument(skip(self))]
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.player_x = self.player_x.trim().to_string();
        self.player_o = self.player_o.trim().to_string();
        if self.player_x.is_empty() || self.player_o.is_empty() {
            return Err(ConfigError::new("Both players need a name".to_string()));
        }
        Ok(self)
    }

    /// Display name of the player using `mark`.
    pub fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    /// Mark that opens the game.
    pub fn first_mark(&self) -> Mark {
        if self.x_first { Mark::X } else { Mark::O }
    }

    /// Returns true if the computer plays `mark` in this session.
    pub fn is_computer(&self, mark: Mark) -> bool {
        self.vs_computer && self.computer_mark == mark
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
