//! Loot generation
//!
//! The loot factory owns the item id counter and the gameplay random source.
//! Rarity rolls scale with hero level; item stats follow fixed formulas.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::item::{
    ArmorKind, Equipment, ItemId, ItemKind, Rarity, RuneKind, WeaponKind, POTION_HEALING,
};
use super::names::item_name;
use crate::entities::HeroClass;

/// Hero level at which rarity scaling maxes out
const RARITY_SCALE_LEVEL: f64 = 30.0;

/// Drop weight of a tier at a given hero level.
///
/// Locked tiers weigh nothing. At full scale Common loses 70% of its weight,
/// Uncommon 30%, Rare and Epic gain 150% and the top three tiers gain 100%.
pub fn rarity_weight(rarity: Rarity, hero_level: u32) -> u32 {
    if hero_level < rarity.min_level() {
        return 0;
    }

    let scale = (hero_level as f64 / RARITY_SCALE_LEVEL).min(1.0);
    let factor = match rarity {
        Rarity::Common => 1.0 - scale * 0.7,
        Rarity::Uncommon => 1.0 - scale * 0.3,
        Rarity::Rare | Rarity::Epic => 1.0 + scale * 1.5,
        Rarity::Legendary | Rarity::Mythic | Rarity::Divine => 1.0 + scale,
    };
    (rarity.base_weight() as f64 * factor) as u32
}

/// Roll a rarity for a hero level.
///
/// Draws 0..100 and walks the cumulative weights. A draw past the total
/// falls back to Common.
pub fn roll_rarity(hero_level: u32, rng: &mut impl Rng) -> Rarity {
    let roll = rng.gen_range(0..100);
    let mut cumulative = 0;
    for rarity in Rarity::ALL {
        cumulative += rarity_weight(rarity, hero_level);
        if roll < cumulative {
            return rarity;
        }
    }
    Rarity::Common
}

/// Item factory: id counter plus random source
#[derive(Debug, Clone)]
pub struct LootFactory {
    next_id: ItemId,
    rng: StdRng,
}

impl Default for LootFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LootFactory {
    /// Factory with an entropy-seeded random source
    pub fn new() -> Self {
        Self {
            next_id: 1,
            rng: StdRng::from_entropy(),
        }
    }

    /// Factory with a fixed seed, for reproducible runs and tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            next_id: 1,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Id the next item will receive
    pub fn next_id(&self) -> ItemId {
        self.next_id
    }

    /// Resume numbering, e.g. after loading a save
    pub fn set_next_id(&mut self, id: ItemId) {
        self.next_id = id.max(1);
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Gameplay random source
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn roll_rarity(&mut self, hero_level: u32) -> Rarity {
        roll_rarity(hero_level, &mut self.rng)
    }

    fn blank(&mut self, kind: ItemKind, rarity: Rarity) -> Equipment {
        let id = self.allocate_id();
        Equipment::new(id, kind, rarity, item_name(kind, rarity))
    }

    /// A random weapon for the class
    pub fn create_weapon(&mut self, class: HeroClass, level: u32, rarity: Rarity) -> Equipment {
        let options = WeaponKind::for_class(class);
        let kind = options[self.rng.gen_range(0..options.len())];
        self.create_weapon_of(kind, level, rarity)
    }

    /// A specific weapon: damage = (10 + 2 * level) * multiplier / 10
    pub fn create_weapon_of(&mut self, kind: WeaponKind, level: u32, rarity: Rarity) -> Equipment {
        let mut item = self.blank(ItemKind::Weapon(kind), rarity);
        item.damage = (10 + 2 * level as i32) * rarity.multiplier() / 10;
        item
    }

    /// An armor piece scaled by level and rarity
    pub fn create_armor(&mut self, kind: ArmorKind, level: u32, rarity: Rarity) -> Equipment {
        let mut item = self.blank(ItemKind::Armor(kind), rarity);
        let mult = rarity.multiplier();
        let base = 5 + level as i32;
        match kind {
            ArmorKind::Head => {
                item.health = base * mult / 10;
                item.resistance = mult;
            }
            ArmorKind::Body => {
                item.health = base * 2 * mult / 10;
                item.resistance = mult * 2;
            }
            ArmorKind::Belt => {
                item.health = base * mult / 10;
                item.stat_bonus = mult / 2;
            }
            ArmorKind::Boots => {
                item.agility = mult;
            }
            ArmorKind::OffHand => {
                item.resistance = mult;
            }
        }
        item
    }

    /// A rune granting `value` to one stat. Gold runes grant it to all three
    /// growth stats plus five times the value in health.
    pub fn create_rune(&mut self, kind: RuneKind, value: i32) -> Equipment {
        let mut item = self.blank(ItemKind::Rune(kind), Rarity::Rare);
        match kind {
            RuneKind::Force => item.force = value,
            RuneKind::Agility => item.agility = value,
            RuneKind::Wisdom => item.wisdom = value,
            RuneKind::Health => item.health = value,
            RuneKind::Experience => item.experience = value.max(0) as u32,
            RuneKind::Gold => {
                item.force = value;
                item.agility = value;
                item.wisdom = value;
                item.health = value * 5;
            }
        }
        item
    }

    /// A single-use healing potion
    pub fn create_potion(&mut self) -> Equipment {
        let mut item = self.blank(ItemKind::Potion, Rarity::Common);
        item.health_recovery = POTION_HEALING;
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_at_level_one() {
        assert_eq!(rarity_weight(Rarity::Common, 1), 29);
        assert_eq!(rarity_weight(Rarity::Uncommon, 1), 24);
        assert_eq!(rarity_weight(Rarity::Rare, 1), 0);
        assert_eq!(rarity_weight(Rarity::Divine, 1), 0);
    }

    #[test]
    fn test_weights_at_full_scale() {
        assert_eq!(rarity_weight(Rarity::Common, 30), 9);
        assert_eq!(rarity_weight(Rarity::Uncommon, 30), 17);
        assert_eq!(rarity_weight(Rarity::Rare, 30), 50);
        assert_eq!(rarity_weight(Rarity::Epic, 30), 25);
        assert_eq!(rarity_weight(Rarity::Legendary, 30), 16);
        assert_eq!(rarity_weight(Rarity::Mythic, 45), 10);
        assert_eq!(rarity_weight(Rarity::Divine, 30), 4);
    }

    #[test]
    fn test_rarity_gating() {
        let mut rng = StdRng::seed_from_u64(42);
        for level in 1..=30 {
            for _ in 0..500 {
                let rarity = roll_rarity(level, &mut rng);
                assert!(
                    level >= rarity.min_level(),
                    "{:?} rolled at level {}",
                    rarity,
                    level
                );
            }
        }
    }

    #[test]
    fn test_cumulative_weights_saturate_at_high_level() {
        // At level 30 Common..Epic already cover the whole 0..100 draw
        let mut rng = StdRng::seed_from_u64(3);
        let rolls: Vec<Rarity> = (0..2000).map(|_| roll_rarity(30, &mut rng)).collect();
        assert!(rolls.contains(&Rarity::Epic));
        assert!(rolls.iter().all(|r| *r <= Rarity::Epic));

        // At level 25 the last draws spill into Legendary
        let mut rng = StdRng::seed_from_u64(3);
        let rolls: Vec<Rarity> = (0..2000).map(|_| roll_rarity(25, &mut rng)).collect();
        assert!(rolls.contains(&Rarity::Legendary));
    }

    #[test]
    fn test_weapon_damage_formula() {
        let mut loot = LootFactory::seeded(1);
        let common = loot.create_weapon_of(WeaponKind::Sword, 1, Rarity::Common);
        assert_eq!(common.damage, 12);
        let epic = loot.create_weapon_of(WeaponKind::Staff, 10, Rarity::Epic);
        assert_eq!(epic.damage, 60);
        let rare = loot.create_weapon_of(WeaponKind::Bow, 3, Rarity::Rare);
        assert_eq!(rare.damage, 24);
    }

    #[test]
    fn test_class_weapons() {
        let mut loot = LootFactory::seeded(1);
        for _ in 0..30 {
            let weapon = loot.create_weapon(HeroClass::Archer, 1, Rarity::Common);
            match weapon.kind {
                ItemKind::Weapon(kind) => {
                    assert!(WeaponKind::for_class(HeroClass::Archer).contains(&kind))
                }
                other => panic!("expected weapon, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_armor_formulas() {
        let mut loot = LootFactory::seeded(1);
        let head = loot.create_armor(ArmorKind::Head, 3, Rarity::Uncommon);
        assert_eq!((head.health, head.resistance), (9, 12));
        let body = loot.create_armor(ArmorKind::Body, 3, Rarity::Uncommon);
        assert_eq!((body.health, body.resistance), (19, 24));
        let belt = loot.create_armor(ArmorKind::Belt, 0, Rarity::Rare);
        assert_eq!((belt.health, belt.stat_bonus), (7, 7));
        let boots = loot.create_armor(ArmorKind::Boots, 9, Rarity::Divine);
        assert_eq!(boots.agility, 40);
        let shield = loot.create_armor(ArmorKind::OffHand, 9, Rarity::Epic);
        assert_eq!(shield.resistance, 20);
    }

    #[test]
    fn test_gold_rune() {
        let mut loot = LootFactory::seeded(1);
        let rune = loot.create_rune(RuneKind::Gold, 7);
        assert_eq!((rune.force, rune.agility, rune.wisdom, rune.health), (7, 7, 7, 35));
        assert_eq!(rune.rarity, Rarity::Rare);

        let xp = loot.create_rune(RuneKind::Experience, 9);
        assert_eq!(xp.experience, 9);
        assert_eq!(xp.force, 0);
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut loot = LootFactory::seeded(1);
        let a = loot.create_potion();
        let b = loot.create_potion();
        assert_eq!(b.id, a.id + 1);
        assert_eq!(a.health_recovery, POTION_HEALING);

        loot.set_next_id(500);
        assert_eq!(loot.create_potion().id, 500);
        assert_eq!(loot.next_id(), 501);
    }
}
