//! Configuration file loading for terminal games.
//!
//! Settings live in a TOML file (`chess.toml` by default). A missing file is
//! not an error: every field has a default.

use chess_core::Color;
use chess_engine::GameOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Display names of the two players.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Players {
    #[serde(default = "default_white")]
    pub white: String,
    #[serde(default = "default_black")]
    pub black: String,
}

fn default_white() -> String {
    "Player 1".to_string()
}

fn default_black() -> String {
    "Player 2".to_string()
}

impl Players {
    /// Returns the name of the player holding `color`.
    pub fn name(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

impl Default for Players {
    fn default() -> Self {
        Players {
            white: default_white(),
            black: default_black(),
        }
    }
}

/// Main terminal configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TerminalConfig {
    /// Player names.
    #[serde(default)]
    pub players: Players,
    /// Move list replayed when no file is given on the command line.
    /// Defaults to `moves.json`.
    #[serde(default = "default_moves_file")]
    pub moves_file: PathBuf,
    /// Reject moves of the side not on turn. Defaults to true.
    #[serde(default = "default_true")]
    pub enforce_turn_order: bool,
    /// Wait for Enter between replayed moves. Defaults to false.
    #[serde(default)]
    pub pause_between_moves: bool,
}

fn default_moves_file() -> PathBuf {
    PathBuf::from("moves.json")
}

fn default_true() -> bool {
    true
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            players: Players::default(),
            moves_file: default_moves_file(),
            enforce_turn_order: true,
            pause_between_moves: false,
        }
    }
}

impl TerminalConfig {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            tracing::debug!("no config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path, `chess.toml` in the working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }

    /// Game options derived from this configuration.
    pub fn game_options(&self) -> GameOptions {
        GameOptions {
            enforce_turn_order: self.enforce_turn_order,
        }
    }
}
