//! Monsters
//!
//! Small, large and boss monsters scaled by floor.

use serde::{Deserialize, Serialize};

use super::components::Health;

/// Flat damage of a small monster, indexed by floor
const SMALL_DAMAGE: [i32; 10] = [15, 30, 50, 100, 200, 300, 500, 600, 800, 1000];

/// Monster size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Small,
    Large,
    Boss,
}

impl MonsterKind {
    pub fn name(&self) -> &'static str {
        match self {
            MonsterKind::Small => "small monster",
            MonsterKind::Large => "large monster",
            MonsterKind::Boss => "boss",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            MonsterKind::Small => 's',
            MonsterKind::Large => 'L',
            MonsterKind::Boss => 'B',
        }
    }

    /// Health multiplier relative to a small monster
    fn health_multiplier(&self) -> i32 {
        match self {
            MonsterKind::Small => 1,
            MonsterKind::Large => 2,
            MonsterKind::Boss => 3,
        }
    }

    /// Damage multiplier relative to a small monster
    fn damage_multiplier(&self) -> i32 {
        match self {
            MonsterKind::Small | MonsterKind::Large => 1,
            MonsterKind::Boss => 2,
        }
    }

    /// XP multiplier applied to the floor's base reward
    fn xp_multiplier(&self) -> u32 {
        match self {
            MonsterKind::Small => 1,
            MonsterKind::Large => 2,
            MonsterKind::Boss => 5,
        }
    }
}

/// A monster living on one floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub kind: MonsterKind,
    pub floor: u32,
    pub health: Health,
    pub damage: i32,
}

impl Monster {
    /// Build a monster for a floor. Floors past the table reuse the last row.
    pub fn new(kind: MonsterKind, floor: u32) -> Self {
        let idx = (floor as usize).min(SMALL_DAMAGE.len() - 1);
        let base_health = 100 * (floor as i32 + 1);
        Self {
            kind,
            floor,
            health: Health::new(base_health * kind.health_multiplier()),
            damage: SMALL_DAMAGE[idx] * kind.damage_multiplier(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_boss(&self) -> bool {
        self.kind == MonsterKind::Boss
    }

    /// Experience granted on defeat
    pub fn xp_reward(&self) -> u32 {
        (50 + 10 * self.floor) * self.kind.xp_multiplier()
    }

    /// Apply damage, floored at zero health. Returns damage actually taken.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health.take_damage(amount)
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_by_kind() {
        let small = Monster::new(MonsterKind::Small, 2);
        assert_eq!(small.health.max, 300);
        assert_eq!(small.damage, 50);

        let large = Monster::new(MonsterKind::Large, 2);
        assert_eq!(large.health.max, 600);
        assert_eq!(large.damage, 50);

        let boss = Monster::new(MonsterKind::Boss, 2);
        assert_eq!(boss.health.max, 900);
        assert_eq!(boss.damage, 100);
    }

    #[test]
    fn test_xp_reward() {
        assert_eq!(Monster::new(MonsterKind::Small, 0).xp_reward(), 50);
        assert_eq!(Monster::new(MonsterKind::Large, 3).xp_reward(), 160);
        assert_eq!(Monster::new(MonsterKind::Boss, 9).xp_reward(), 700);
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let mut monster = Monster::new(MonsterKind::Small, 0);
        monster.health.current = 1;
        assert_eq!(monster.take_damage(100), 1);
        assert_eq!(monster.health.current, 0);
        assert!(monster.is_dead());
    }

    #[test]
    fn test_floor_past_table_reuses_last_row() {
        let monster = Monster::new(MonsterKind::Small, 12);
        assert_eq!(monster.damage, 1000);
    }
}
