//! The hero
//!
//! Class, health, growth stats and the equipment accumulators.

use serde::{Deserialize, Serialize};

use super::components::{Facing, GrowthStat, GrowthStats, Health};

/// Playable classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroClass {
    Warrior,
    Archer,
    Mage,
}

impl HeroClass {
    pub const ALL: [HeroClass; 3] = [HeroClass::Warrior, HeroClass::Archer, HeroClass::Mage];

    pub fn name(&self) -> &'static str {
        match self {
            HeroClass::Warrior => "Warrior",
            HeroClass::Archer => "Archer",
            HeroClass::Mage => "Mage",
        }
    }

    /// The stat that scales this class's damage and level-up gains
    pub fn primary_stat(&self) -> GrowthStat {
        match self {
            HeroClass::Warrior => GrowthStat::Force,
            HeroClass::Archer => GrowthStat::Agility,
            HeroClass::Mage => GrowthStat::Wisdom,
        }
    }

    pub fn base_health(&self) -> i32 {
        50
    }

    pub fn base_stats(&self) -> GrowthStats {
        match self {
            HeroClass::Warrior => GrowthStats::new(30, 20, 10),
            HeroClass::Archer => GrowthStats::new(10, 30, 20),
            HeroClass::Mage => GrowthStats::new(20, 10, 30),
        }
    }
}

impl std::str::FromStr for HeroClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warrior" => Ok(HeroClass::Warrior),
            "archer" => Ok(HeroClass::Archer),
            "mage" => Ok(HeroClass::Mage),
            other => Err(format!("unknown class: {}", other)),
        }
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub class: HeroClass,
    pub health: Health,
    pub stats: GrowthStats,
    /// Flat damage granted by equipment
    pub damage: i32,
    /// Flat resistance granted by equipment
    pub resistance: i32,
    pub facing: Facing,
    pub(crate) experience: u32,
    pub(crate) level: u32,
    pub(crate) stat_points: i32,
}

impl Hero {
    /// A fresh level 1 hero of the given class
    pub fn new(class: HeroClass) -> Self {
        Self {
            class,
            health: Health::new(class.base_health()),
            stats: class.base_stats(),
            damage: 0,
            resistance: 0,
            facing: Facing::Front,
            experience: 0,
            level: 1,
            stat_points: 0,
        }
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Unspent stat points
    pub fn stat_points(&self) -> i32 {
        self.stat_points
    }

    /// Value of the class-primary growth stat
    pub fn primary_stat_value(&self) -> i32 {
        self.stats.get(self.class.primary_stat())
    }

    /// Damage dealt per attack: equipment damage plus the primary stat
    pub fn total_damage(&self) -> i32 {
        self.damage + self.primary_stat_value()
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_base_stats() {
        let warrior = Hero::new(HeroClass::Warrior);
        assert_eq!(warrior.health.max, 50);
        assert_eq!(warrior.stats, GrowthStats::new(30, 20, 10));
        assert_eq!(warrior.level(), 1);
        assert_eq!(warrior.experience(), 0);
        assert_eq!(warrior.facing, Facing::Front);

        let archer = Hero::new(HeroClass::Archer);
        assert_eq!(archer.primary_stat_value(), 30);

        let mage = Hero::new(HeroClass::Mage);
        assert_eq!(mage.stats.wisdom, 30);
    }

    #[test]
    fn test_total_damage_uses_primary_stat() {
        let mut hero = Hero::new(HeroClass::Mage);
        hero.damage = 12;
        assert_eq!(hero.total_damage(), 42);

        let mut hero = Hero::new(HeroClass::Archer);
        hero.damage = 5;
        assert_eq!(hero.total_damage(), 35);
    }

    #[test]
    fn test_parse_class() {
        assert_eq!("Mage".parse::<HeroClass>(), Ok(HeroClass::Mage));
        assert!("bard".parse::<HeroClass>().is_err());
    }
}
