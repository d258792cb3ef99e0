//! Match configuration loaded from TOML.

use crate::ai::{AiConfig, Difficulty};
use crate::game::{GameMode, Player, MIN_BOARD_SIZE};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Host-level match settings.
///
/// Every field has a default, so a minimal file works:
///
/// ```toml
/// board_size = 7
/// difficulty = "hard"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    pub board_size: usize,

    /// AI difficulty tier; `none` plays player-vs-player.
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,

    /// Which seat the AI occupies when enabled.
    #[serde(default = "default_ai_player")]
    pub ai_player: Player,

    /// Base URL of a remote move provider replacing the local AI.
    #[serde(default)]
    pub remote_url: Option<String>,

    /// Remote provider deadline in milliseconds.
    #[serde(default = "default_remote_timeout_ms")]
    pub remote_timeout_ms: u64,
}

fn default_board_size() -> usize {
    7
}

fn default_difficulty() -> Difficulty {
    Difficulty::None
}

fn default_ai_player() -> Player {
    Player::Second
}

fn default_remote_timeout_ms() -> u64 {
    5_000
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            difficulty: default_difficulty(),
            ai_player: default_ai_player(),
            remote_url: None,
            remote_timeout_ms: default_remote_timeout_ms(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            board_size = config.board_size,
            difficulty = ?config.difficulty,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Rejects settings a session would refuse later anyway.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "board_size {} is below the minimum of {}",
                self.board_size, MIN_BOARD_SIZE
            )));
        }
        Ok(())
    }

    /// The session mode these settings describe.
    pub fn mode(&self) -> GameMode {
        match self.difficulty {
            Difficulty::None => GameMode::PlayerVsPlayer,
            difficulty => GameMode::PlayerVsAi(AiConfig {
                difficulty,
                player: self.ai_player,
            }),
        }
    }

    /// The remote provider deadline.
    pub fn remote_timeout(&self) -> Duration {
        Duration::from_millis(self.remote_timeout_ms)
    }
}

/// Configuration error with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
