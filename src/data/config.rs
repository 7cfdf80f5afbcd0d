//! Game configuration
//!
//! Tunables loaded from a RON file, with fallback to built-in defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::items::INVENTORY_CAPACITY;

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "assets/config.ron";

/// Errors reading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Random interior wall samples on generated floors
    pub interior_walls: usize,
    /// Chests placed on generated floors
    pub chest_count: usize,
    /// Random samples tried before a placement is skipped
    pub placement_attempts: u32,
    /// Distinct inventory entries
    pub inventory_capacity: usize,
    /// Save slots offered
    pub save_slots: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            interior_walls: 360,
            chest_count: 8,
            placement_attempts: 100,
            inventory_capacity: INVENTORY_CAPACITY,
            save_slots: 3,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from RON text
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(content)?)
    }

    /// Read a configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Load a configuration file, falling back to defaults when it is missing
    /// or broken
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = GameConfig::from_ron_str(
            "(interior_walls: 200, chest_count: 4, placement_attempts: 50, \
             inventory_capacity: 10, save_slots: 1)",
        )
        .expect("valid config");
        assert_eq!(config.interior_walls, 200);
        assert_eq!(config.chest_count, 4);
        assert_eq!(config.inventory_capacity, 10);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = GameConfig::from_ron_str("(chest_count: 3)").expect("valid config");
        assert_eq!(config.chest_count, 3);
        assert_eq!(config.interior_walls, 360);
        assert_eq!(config.placement_attempts, 100);
    }

    #[test]
    fn test_broken_file_falls_back() {
        let path = std::env::temp_dir()
            .join(format!("gloomwell-config-{}.ron", std::process::id()));
        fs::write(&path, "(chest_count: ").expect("write temp config");
        assert!(GameConfig::from_file(&path).is_err());
        assert_eq!(GameConfig::load(&path), GameConfig::default());
        let _ = fs::remove_file(&path);

        assert_eq!(GameConfig::load(Path::new("does/not/exist.ron")), GameConfig::default());
    }
}
