//! Stat point spending

use crate::entities::{GrowthStat, Hero};

/// Move `amount` unspent points into a growth stat.
///
/// Fails with no change when the name is not a growth stat, the amount is
/// negative, or the pool is too small.
pub fn spend_stat_points(hero: &mut Hero, stat_name: &str, amount: i32) -> bool {
    let Ok(stat) = stat_name.parse::<GrowthStat>() else {
        log::debug!("Rejected stat spend on unknown stat {:?}", stat_name);
        return false;
    };
    spend_on(hero, stat, amount)
}

/// Typed variant of [`spend_stat_points`]
pub fn spend_on(hero: &mut Hero, stat: GrowthStat, amount: i32) -> bool {
    if amount < 0 || amount > hero.stat_points {
        return false;
    }
    hero.stats.add(stat, amount);
    hero.stat_points -= amount;
    true
}
