//! Save/load system
//!
//! Versioned JSON snapshots of a campaign in numbered slots.

pub mod save_game;

pub use save_game::{
    SaveData, SaveError, SaveSummary, SAVE_VERSION,
    encode, decode,
    save_game, load_game, delete_save,
    save_exists, list_saves, save_path, save_directory,
    save_to_path, load_from_path,
};
