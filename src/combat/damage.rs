//! Damage calculation
//!
//! Pure combat math for both sides of a fight.

use crate::entities::{Hero, Monster, MonsterKind};

/// Resistance a boss on this floor ignores
pub fn boss_penetration(floor: u32) -> i32 {
    (floor as i32 + 1) * 10
}

/// Hero resistance that still counts against a monster
pub fn effective_resistance(kind: MonsterKind, floor: u32, resistance: i32) -> i32 {
    match kind {
        MonsterKind::Boss => (resistance - boss_penetration(floor)).max(0),
        MonsterKind::Small | MonsterKind::Large => resistance,
    }
}

/// Damage a monster deals to a hero with the given resistance, never negative
pub fn monster_attack_damage(monster: &Monster, hero_resistance: i32) -> i32 {
    let resistance = effective_resistance(monster.kind, monster.floor, hero_resistance);
    (monster.damage - resistance).max(0)
}

/// Damage the hero deals per attack, never negative
pub fn hero_attack_damage(hero: &Hero) -> i32 {
    hero.total_damage().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::HeroClass;

    #[test]
    fn test_small_monster_uses_full_resistance() {
        let monster = Monster::new(MonsterKind::Small, 2);
        assert_eq!(monster_attack_damage(&monster, 20), 30);
        assert_eq!(monster_attack_damage(&monster, 80), 0);
    }

    #[test]
    fn test_boss_ignores_resistance() {
        // Floor 2 boss: 100 damage, ignores 30 resistance
        let boss = Monster::new(MonsterKind::Boss, 2);
        assert_eq!(monster_attack_damage(&boss, 20), 100);
        assert_eq!(monster_attack_damage(&boss, 30), 100);
        assert_eq!(monster_attack_damage(&boss, 50), 80);

        let large = Monster::new(MonsterKind::Large, 2);
        assert_eq!(monster_attack_damage(&large, 50), 0);
    }

    #[test]
    fn test_damage_never_negative() {
        let boss = Monster::new(MonsterKind::Boss, 0);
        assert_eq!(monster_attack_damage(&boss, 1000), 0);

        let mut hero = Hero::new(HeroClass::Warrior);
        hero.damage = -100;
        assert_eq!(hero_attack_damage(&hero), 0);
    }

    #[test]
    fn test_hero_damage() {
        let mut hero = Hero::new(HeroClass::Warrior);
        assert_eq!(hero_attack_damage(&hero), 30);
        hero.damage = 12;
        assert_eq!(hero_attack_damage(&hero), 42);
    }
}
