//! Game save/load system
//!
//! Handles saving and loading game state to/from disk. Only the hero's
//! progress is stored; the floor itself is regenerated from its index.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::entities::{Hero, HeroClass};
use crate::items::{Inventory, ItemId};
use crate::world::{Position, MAX_FLOORS};

/// Save file version for compatibility checking
pub const SAVE_VERSION: u32 = 1;

/// Complete save data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub hero: Hero,
    /// Carried and worn items
    pub inventory: Inventory,
    pub floor: u32,
    pub position: Position,
    /// Next id the loot factory hands out
    pub next_item_id: ItemId,
    /// Chests already opened on the current floor
    #[serde(default)]
    pub opened_chests: Vec<Position>,
    /// Cells of monsters already killed on the current floor
    #[serde(default)]
    pub defeated_monsters: Vec<Position>,
    #[serde(default)]
    pub won: bool,
}

impl SaveData {
    /// Reject data that cannot describe a real game
    pub fn validate(&self) -> Result<(), SaveError> {
        if self.version != SAVE_VERSION {
            return Err(SaveError::VersionMismatch {
                expected: SAVE_VERSION,
                found: self.version,
            });
        }
        if self.floor >= MAX_FLOORS {
            return Err(SaveError::InvalidData(format!("floor {} out of range", self.floor)));
        }
        if !self.position.in_bounds() {
            return Err(SaveError::InvalidData(format!(
                "position {} outside the board",
                self.position
            )));
        }
        if self.hero.health.max <= 0 {
            return Err(SaveError::InvalidData("hero has no maximum health".to_string()));
        }
        Ok(())
    }
}

/// Save error types
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
    #[error("Invalid save data: {0}")]
    InvalidData(String),
}

/// Serialize save data to JSON bytes
pub fn encode(data: &SaveData) -> Result<Vec<u8>, SaveError> {
    Ok(serde_json::to_vec_pretty(data)?)
}

/// Parse and validate JSON save bytes
pub fn decode(bytes: &[u8]) -> Result<SaveData, SaveError> {
    let data: SaveData = serde_json::from_slice(bytes)?;
    data.validate()?;
    Ok(data)
}

/// Get the save directory path
pub fn save_directory() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "gloomwell", "Gloomwell") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("saves");
        path
    } else {
        // Fallback to current directory
        PathBuf::from("./saves")
    }
}

/// Get the path for a specific save slot
pub fn save_path(slot: u8) -> PathBuf {
    let mut path = save_directory();
    path.push(format!("save_{}.json", slot));
    path
}

/// Check if a save exists in the given slot
pub fn save_exists(slot: u8) -> bool {
    save_path(slot).exists()
}

/// Brief summary of a save for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSummary {
    pub class: HeroClass,
    pub level: u32,
    pub floor: u32,
}

impl From<&SaveData> for SaveSummary {
    fn from(data: &SaveData) -> Self {
        Self {
            class: data.hero.class,
            level: data.hero.level(),
            floor: data.floor,
        }
    }
}

/// List the first `slots` save slots with a summary of each occupied one
pub fn list_saves(slots: u8) -> Vec<(u8, Option<SaveSummary>)> {
    (0..slots)
        .map(|slot| {
            let summary = if save_exists(slot) {
                load_game(slot).ok().map(|data| SaveSummary::from(&data))
            } else {
                None
            };
            (slot, summary)
        })
        .collect()
}

/// Write save data to a file, creating parent directories
pub fn save_to_path(data: &SaveData, path: &Path) -> Result<(), SaveError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, encode(data)?)?;
    Ok(())
}

/// Read and validate save data from a file
pub fn load_from_path(path: &Path) -> Result<SaveData, SaveError> {
    let bytes = fs::read(path)?;
    decode(&bytes)
}

/// Save the game to a slot
pub fn save_game(game: &crate::game::Game, slot: u8) -> Result<(), SaveError> {
    save_to_path(&game.to_save_data(), &save_path(slot))?;
    log::info!("Game saved to slot {}", slot);
    Ok(())
}

/// Load a game from a slot
pub fn load_game(slot: u8) -> Result<SaveData, SaveError> {
    let save = load_from_path(&save_path(slot))?;
    log::info!("Game loaded from slot {}", slot);
    Ok(save)
}

/// Delete a save slot
pub fn delete_save(slot: u8) -> Result<(), SaveError> {
    let path = save_path(slot);
    if path.exists() {
        fs::remove_file(&path)?;
        log::info!("Deleted save slot {}", slot);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    fn sample() -> SaveData {
        Game::with_seed(HeroClass::Warrior, 21).expect("game starts").to_save_data()
    }

    fn temp_file(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("gloomwell_test_{}_{}", std::process::id(), name));
        path.push("save.json");
        path
    }

    #[test]
    fn test_encode_decode() {
        let data = sample();
        let bytes = encode(&data).expect("encodes");
        assert_eq!(decode(&bytes).expect("decodes"), data);
    }

    #[test]
    fn test_file_round_trip() {
        let data = sample();
        let path = temp_file("round_trip");
        save_to_path(&data, &path).expect("saves");
        assert_eq!(load_from_path(&path).expect("loads"), data);
        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_version_mismatch() {
        let mut data = sample();
        data.version = 7;
        let bytes = encode(&data).expect("encodes");
        assert!(matches!(
            decode(&bytes),
            Err(SaveError::VersionMismatch { expected: 1, found: 7 })
        ));
    }

    #[test]
    fn test_invalid_data() {
        let mut data = sample();
        data.floor = 10;
        assert!(matches!(data.validate(), Err(SaveError::InvalidData(_))));

        let mut data = sample();
        data.position = Position::new(-1, 3);
        assert!(matches!(data.validate(), Err(SaveError::InvalidData(_))));
    }

    #[test]
    fn test_garbage_and_missing_file() {
        assert!(matches!(decode(b"not json"), Err(SaveError::Parse(_))));
        let missing = temp_file("missing");
        assert!(matches!(load_from_path(&missing), Err(SaveError::Io(_))));
    }

    #[test]
    fn test_summary() {
        let summary = SaveSummary::from(&sample());
        assert_eq!(summary, SaveSummary { class: HeroClass::Warrior, level: 1, floor: 0 });
    }

    #[test]
    fn test_slot_paths() {
        assert_ne!(save_path(0), save_path(1));
        assert!(save_path(2).ends_with("save_2.json"));
    }
}
