//! Gloomwell - A ten-floor turn-based dungeon crawler
//!
//! Descend through ten fixed-size floors, loot chests, level up, and
//! defeat the boss guarding each exit.

pub mod game;
pub mod world;
pub mod entities;
pub mod combat;
pub mod items;
pub mod progression;
pub mod save;
pub mod data;

// Re-export commonly used types
pub use game::{Direction, Game, GameListener, GameState, MoveOutcome};
pub use entities::{Hero, HeroClass};
pub use world::{Level, Position};
