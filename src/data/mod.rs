//! External game data
//!
//! Configuration loaded from RON files under `assets/`.

pub mod config;

pub use config::{ConfigError, GameConfig, DEFAULT_CONFIG_PATH};
