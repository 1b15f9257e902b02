use std::path::Path;

use crate::error::ConfigError;
use crate::game::{COLS, ROWS};

/// Layout-generation configuration, loadable from TOML. Grid dimensions are
/// compile-time constants ([`ROWS`]/[`COLS`]); everything tunable about a
/// fresh board lives here.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fewest walls a column may receive.
    pub min_walls: usize,
    /// Most walls a column may receive.
    pub max_walls: usize,
    /// Mice placed per player (fewer may land if placement retries run out).
    pub mice_per_player: usize,
    /// Width of each player's starting column band: Red gets this many
    /// columns from the left edge, Blue from the right.
    pub columns_per_player: usize,
    /// Retry budget per mouse when searching for a supported cell.
    pub placement_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            min_walls: 5,
            max_walls: 8,
            mice_per_player: 12,
            columns_per_player: 9,
            placement_attempts: 1000,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_walls > self.max_walls {
            return Err(ConfigError::Validation(
                "min_walls must be <= max_walls".into(),
            ));
        }
        if self.max_walls > ROWS {
            return Err(ConfigError::Validation(format!(
                "max_walls must be <= {} (grid height)",
                ROWS
            )));
        }
        if self.mice_per_player == 0 {
            return Err(ConfigError::Validation(
                "mice_per_player must be > 0".into(),
            ));
        }
        if self.columns_per_player == 0 {
            return Err(ConfigError::Validation(
                "columns_per_player must be > 0".into(),
            ));
        }
        if self.columns_per_player * 2 > COLS {
            return Err(ConfigError::Validation(format!(
                "columns_per_player must be <= {} so the bands cannot overlap",
                COLS / 2
            )));
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::Validation(
                "placement_attempts must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
