//! Entity definitions
//!
//! The hero, monsters and chests that populate a floor.

pub mod components;
pub mod hero;
pub mod monsters;
pub mod chests;

pub use components::{Facing, GrowthStat, GrowthStats, Health, UnknownStat};
pub use hero::{Hero, HeroClass};
pub use monsters::{Monster, MonsterKind};
pub use chests::{stock_chest, Chest};
