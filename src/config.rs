//! Game configuration loaded from TOML.

use crate::games::dots_and_boxes::Game;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Board size and player names for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Box rows.
    #[serde(default = "default_rows")]
    rows: usize,

    /// Box columns.
    #[serde(default = "default_cols")]
    cols: usize,

    /// Name of the player who moves first.
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Name of the player who moves second.
    #[serde(default = "default_player_two")]
    player_two: String,
}

/// Largest row or column count, matching the `u16` the command line parses.
const MAX_DIMENSION: usize = u16::MAX as usize;

fn default_rows() -> usize {
    3
}

fn default_cols() -> usize {
    3
}

fn default_player_one() -> String {
    "p1".to_string()
}

fn default_player_two() -> String {
    "p2".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            player_one: default_player_one(),
            player_two: default_player_two(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(rows = config.rows, cols = config.cols, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces any field for which an override is given.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        rows: Option<usize>,
        cols: Option<usize>,
        player_one: Option<String>,
        player_two: Option<String>,
    ) -> Self {
        if let Some(rows) = rows {
            self.rows = rows;
        }
        if let Some(cols) = cols {
            self.cols = cols;
        }
        if let Some(name) = player_one {
            self.player_one = name;
        }
        if let Some(name) = player_two {
            self.player_two = name;
        }
        self
    }

    /// Checks the values a [`Game`] would reject, plus sizes beyond what the
    /// command line accepts.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(ConfigError::new(format!(
                "Board dimensions must be at most {} (got {} x {})",
                MAX_DIMENSION, self.rows, self.cols
            )));
        }
        Game::check_setup(&self.player_one, &self.player_two, self.rows, self.cols)
            .map_err(|e| ConfigError::new(e.to_string()))
    }

    /// Validates and builds a new game.
    #[instrument(skip(self))]
    pub fn build_game(&self) -> Result<Game, ConfigError> {
        self.validate()?;
        Game::new(&self.player_one, &self.player_two, self.rows, self.cols)
            .map_err(|e| ConfigError::new(e.to_string()))
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
