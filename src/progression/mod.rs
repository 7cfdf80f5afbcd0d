//! Progression system
//!
//! Experience curve, level-up bonuses and stat point spending.

pub mod xp;
pub mod stats;

pub use xp::{
    add_experience, health_bonus_for_level, level_for_xp, xp_for_level, xp_to_next_level,
    LevelUpSummary, MAX_LEVEL, XP_THRESHOLDS,
};
pub use stats::{spend_on, spend_stat_points};
