use std::path::Path;
use std::time::Duration;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};

/// Board dimensions, fixed for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// How long the terminal UI waits after the final piece lands before
    /// announcing the result
    pub outcome_delay_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            outcome_delay_ms: 100,
        }
    }
}

impl DisplayConfig {
    pub fn outcome_delay(&self) -> Duration {
        Duration::from_millis(self.outcome_delay_ms)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width == 0 || self.board.width > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.width must be in [1, {MAX_DIMENSION}]"
            )));
        }
        if self.board.height == 0 || self.board.height > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.height must be in [1, {MAX_DIMENSION}]"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
