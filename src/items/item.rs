//! Item definitions
//!
//! Rarity tiers, item kinds, equipment slots and the stat deltas an item
//! applies to the hero.

use serde::{Deserialize, Serialize};

use crate::entities::{GrowthStat, Hero, HeroClass};
use crate::progression::{add_experience, LevelUpSummary};

/// Unique identifier for item instances
pub type ItemId = u64;

/// Health restored by a potion
pub const POTION_HEALING: i32 = 5;

// ============================================================================
// Rarity
// ============================================================================

/// Item rarity tiers, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
    Divine,
}

impl Rarity {
    pub const ALL: [Rarity; 7] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
        Rarity::Divine,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
            Rarity::Divine => "Divine",
        }
    }

    /// Drop weight out of 100 before level scaling
    pub fn base_weight(&self) -> u32 {
        match self {
            Rarity::Common => 30,
            Rarity::Uncommon => 25,
            Rarity::Rare => 20,
            Rarity::Epic => 10,
            Rarity::Legendary => 8,
            Rarity::Mythic => 5,
            Rarity::Divine => 2,
        }
    }

    /// Lowest hero level at which this tier can drop
    pub fn min_level(&self) -> u32 {
        match self {
            Rarity::Common | Rarity::Uncommon => 1,
            Rarity::Rare => 5,
            Rarity::Epic => 15,
            Rarity::Legendary => 20,
            Rarity::Mythic => 22,
            Rarity::Divine => 25,
        }
    }

    /// Stat multiplier in tenths (10 = x1.0)
    pub fn multiplier(&self) -> i32 {
        match self {
            Rarity::Common => 10,
            Rarity::Uncommon => 12,
            Rarity::Rare => 15,
            Rarity::Epic => 20,
            Rarity::Legendary => 25,
            Rarity::Mythic => 30,
            Rarity::Divine => 40,
        }
    }
}

// ============================================================================
// Item kinds
// ============================================================================

/// Weapon types, three per class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Sword,
    Hammer,
    Axe,
    Crossbow,
    Bow,
    Dagger,
    Wand,
    Staff,
    Scepter,
}

impl WeaponKind {
    pub fn name(&self) -> &'static str {
        match self {
            WeaponKind::Sword => "Sword",
            WeaponKind::Hammer => "Hammer",
            WeaponKind::Axe => "Axe",
            WeaponKind::Crossbow => "Crossbow",
            WeaponKind::Bow => "Bow",
            WeaponKind::Dagger => "Dagger",
            WeaponKind::Wand => "Wand",
            WeaponKind::Staff => "Staff",
            WeaponKind::Scepter => "Scepter",
        }
    }

    /// Weapons a class can wield
    pub fn for_class(class: HeroClass) -> [WeaponKind; 3] {
        match class {
            HeroClass::Warrior => [WeaponKind::Sword, WeaponKind::Hammer, WeaponKind::Axe],
            HeroClass::Archer => [WeaponKind::Crossbow, WeaponKind::Bow, WeaponKind::Dagger],
            HeroClass::Mage => [WeaponKind::Wand, WeaponKind::Staff, WeaponKind::Scepter],
        }
    }
}

/// Armor pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmorKind {
    Head,
    Body,
    Belt,
    Boots,
    OffHand,
}

impl ArmorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ArmorKind::Head => "Helm",
            ArmorKind::Body => "Armor",
            ArmorKind::Belt => "Belt",
            ArmorKind::Boots => "Boots",
            ArmorKind::OffHand => "Shield",
        }
    }
}

/// Rune effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuneKind {
    Force,
    Agility,
    Wisdom,
    Health,
    Experience,
    /// Boosts all three growth stats and health
    Gold,
}

impl RuneKind {
    pub fn name(&self) -> &'static str {
        match self {
            RuneKind::Force => "Force",
            RuneKind::Agility => "Agility",
            RuneKind::Wisdom => "Wisdom",
            RuneKind::Health => "Vitality",
            RuneKind::Experience => "Insight",
            RuneKind::Gold => "Gold",
        }
    }
}

/// What an item is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon(WeaponKind),
    Armor(ArmorKind),
    Rune(RuneKind),
    Potion,
}

impl ItemKind {
    /// Slot the item occupies when worn, if any
    pub fn equip_slot(&self) -> Option<EquipSlot> {
        match self {
            ItemKind::Weapon(_) => Some(EquipSlot::Weapon),
            ItemKind::Armor(ArmorKind::Head) => Some(EquipSlot::Head),
            ItemKind::Armor(ArmorKind::Body) => Some(EquipSlot::Body),
            ItemKind::Armor(ArmorKind::Belt) => Some(EquipSlot::Belt),
            ItemKind::Armor(ArmorKind::Boots) => Some(EquipSlot::Boots),
            ItemKind::Armor(ArmorKind::OffHand) => Some(EquipSlot::OffHand),
            ItemKind::Rune(_) | ItemKind::Potion => None,
        }
    }

    pub fn is_equippable(&self) -> bool {
        self.equip_slot().is_some()
    }

    /// Potions and runes are used up on use
    pub fn is_consumable(&self) -> bool {
        matches!(self, ItemKind::Rune(_) | ItemKind::Potion)
    }
}

/// Equipment slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Head,
    Body,
    Belt,
    Boots,
    OffHand,
}

impl EquipSlot {
    pub const ALL: [EquipSlot; 6] = [
        EquipSlot::Weapon,
        EquipSlot::Head,
        EquipSlot::Body,
        EquipSlot::Belt,
        EquipSlot::Boots,
        EquipSlot::OffHand,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EquipSlot::Weapon => "Weapon",
            EquipSlot::Head => "Head",
            EquipSlot::Body => "Body",
            EquipSlot::Belt => "Belt",
            EquipSlot::Boots => "Boots",
            EquipSlot::OffHand => "Off Hand",
        }
    }
}

// ============================================================================
// Equipment
// ============================================================================

/// A single item with its stat deltas and inventory state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    pub rarity: Rarity,

    /// Flat damage
    pub damage: i32,
    /// Health granted while applied
    pub health: i32,
    /// Health restored on use (potions)
    pub health_recovery: i32,
    /// Extra flat damage
    pub damage_bonus: i32,
    /// Bonus added to each growth stat
    pub stat_bonus: i32,
    pub resistance: i32,
    pub force: i32,
    pub agility: i32,
    pub wisdom: i32,
    /// Experience granted when applied. Never taken back.
    pub experience: u32,

    pub in_inventory: bool,
    pub equipped: bool,
    pub quantity: u32,
}

impl Equipment {
    /// A blank item with no stat deltas
    pub fn new(id: ItemId, kind: ItemKind, rarity: Rarity, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            rarity,
            damage: 0,
            health: 0,
            health_recovery: 0,
            damage_bonus: 0,
            stat_bonus: 0,
            resistance: 0,
            force: 0,
            agility: 0,
            wisdom: 0,
            experience: 0,
            in_inventory: false,
            equipped: false,
            quantity: 1,
        }
    }

    pub fn is_potion(&self) -> bool {
        self.kind == ItemKind::Potion
    }

    pub fn equip_slot(&self) -> Option<EquipSlot> {
        self.kind.equip_slot()
    }

    /// The item's own growth stat value
    fn stat(&self, stat: GrowthStat) -> i32 {
        match stat {
            GrowthStat::Force => self.force,
            GrowthStat::Agility => self.agility,
            GrowthStat::Wisdom => self.wisdom,
        }
    }

    /// Damage this item adds for a given class.
    ///
    /// Warriors also gain the item's force as damage, archers its agility and
    /// mages its wisdom.
    pub fn damage_for(&self, class: HeroClass) -> i32 {
        self.damage + self.damage_bonus + self.stat(class.primary_stat())
    }

    /// Apply the item to the hero.
    ///
    /// Potions heal and stop there. Everything else adds its stat deltas and
    /// grants its experience, which can level the hero up.
    pub fn apply_to(&self, hero: &mut Hero) -> Option<LevelUpSummary> {
        if self.is_potion() {
            hero.health.heal(self.health_recovery);
            return None;
        }

        if self.health != 0 {
            hero.health.raise_max(self.health);
        }
        for stat in GrowthStat::ALL {
            hero.stats.add(stat, self.stat(stat) + self.stat_bonus);
        }
        hero.damage += self.damage_for(hero.class);
        hero.resistance += self.resistance;

        add_experience(hero, self.experience)
    }

    /// Exact inverse of [`Equipment::apply_to`], except experience is kept.
    ///
    /// Does nothing for potions.
    pub fn remove_from(&self, hero: &mut Hero) {
        if self.is_potion() {
            return;
        }

        if self.health != 0 {
            hero.health.lower_max(self.health);
        }
        for stat in GrowthStat::ALL {
            hero.stats.add(stat, -(self.stat(stat) + self.stat_bonus));
        }
        hero.damage -= self.damage_for(hero.class);
        hero.resistance -= self.resistance;
    }
}
