//! Experience and leveling
//!
//! Fixed experience curve, per-level bonuses and multi-level level-ups.

use crate::entities::Hero;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 30;

/// Cumulative experience required for each level, starting at level 1
pub const XP_THRESHOLDS: [u32; MAX_LEVEL as usize] = [
    0, 500, 700, 800, 1000, 1400, 1800, 2400, 2800, 3000, //
    3800, 4600, 5400, 6200, 7000, 8600, 10200, 11800, 13400, 15000, //
    17000, 19000, 21000, 23000, 25000, 28000, 30000, 35000, 40000, 50000,
];

/// Primary stat gained per level
pub const PRIMARY_STAT_BONUS: i32 = 10;

/// Unspent stat points gained per level
pub const STAT_POINTS_PER_LEVEL: i32 = 5;

/// What a level-up granted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpSummary {
    pub from_level: u32,
    pub to_level: u32,
    pub health_gained: i32,
    pub primary_stat_gained: i32,
    pub stat_points_gained: i32,
}

impl LevelUpSummary {
    pub fn levels_gained(&self) -> u32 {
        self.to_level - self.from_level
    }
}

/// Cumulative XP needed to reach a level
pub fn xp_for_level(level: u32) -> u32 {
    let idx = level.clamp(1, MAX_LEVEL) as usize - 1;
    XP_THRESHOLDS[idx]
}

/// Highest level whose threshold is met
pub fn level_for_xp(xp: u32) -> u32 {
    XP_THRESHOLDS
        .iter()
        .rposition(|&threshold| xp >= threshold)
        .map_or(1, |idx| idx as u32 + 1)
}

/// XP still missing for the next level, or None at the cap
pub fn xp_to_next_level(xp: u32) -> Option<u32> {
    let level = level_for_xp(xp);
    if level >= MAX_LEVEL {
        None
    } else {
        Some(xp_for_level(level + 1) - xp)
    }
}

/// Health granted on reaching a level.
///
/// Levels 10 and 20 grant 100 and level 30 grants 500; otherwise the band
/// decides: up to 4 gives 5, up to 10 gives 10, then 15, 20, 25 and 30.
pub fn health_bonus_for_level(level: u32) -> i32 {
    match level {
        10 | 20 => 100,
        30 => 500,
        0..=4 => 5,
        5..=9 => 10,
        11..=15 => 15,
        16..=19 => 20,
        21..=25 => 25,
        _ => 30,
    }
}

/// Add experience and apply the bonus of every level crossed.
///
/// Returns a summary when at least one level was gained.
pub fn add_experience(hero: &mut Hero, amount: u32) -> Option<LevelUpSummary> {
    if amount == 0 {
        return None;
    }

    hero.experience = hero.experience.saturating_add(amount);
    let new_level = level_for_xp(hero.experience);
    if new_level <= hero.level {
        return None;
    }

    let primary = hero.class.primary_stat();
    let mut summary = LevelUpSummary {
        from_level: hero.level,
        to_level: new_level,
        health_gained: 0,
        primary_stat_gained: 0,
        stat_points_gained: 0,
    };

    for level in hero.level + 1..=new_level {
        let health = health_bonus_for_level(level);
        hero.health.raise_max(health);
        hero.stats.add(primary, PRIMARY_STAT_BONUS);
        hero.stat_points += STAT_POINTS_PER_LEVEL;

        summary.health_gained += health;
        summary.primary_stat_gained += PRIMARY_STAT_BONUS;
        summary.stat_points_gained += STAT_POINTS_PER_LEVEL;
    }
    hero.level = new_level;

    log::info!(
        "{} reached level {} (+{} health)",
        hero.class.name(),
        new_level,
        summary.health_gained
    );
    Some(summary)
}
