//! Chests
//!
//! Chests are stocked when a floor is built and can be opened exactly once.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::items::{ArmorKind, Equipment, LootFactory, RuneKind};

/// Armor pieces that can turn up in a chest
const CHEST_ARMOR: [ArmorKind; 4] =
    [ArmorKind::Head, ArmorKind::Body, ArmorKind::Belt, ArmorKind::Boots];

/// Runes that can turn up in a chest
const CHEST_RUNES: [RuneKind; 6] = [
    RuneKind::Force,
    RuneKind::Agility,
    RuneKind::Wisdom,
    RuneKind::Health,
    RuneKind::Experience,
    RuneKind::Gold,
];

/// A loot chest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chest {
    pub id: u32,
    items: Vec<Equipment>,
    opened: bool,
}

impl Chest {
    pub fn new(id: u32, items: Vec<Equipment>) -> Self {
        Self { id, items, opened: false }
    }

    pub fn items(&self) -> &[Equipment] {
        &self.items
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }

    /// Open the chest and hand out copies of its contents.
    ///
    /// The chest keeps its list as a record of what it held. The opened flag
    /// is write-once: a second call hands out nothing.
    pub fn open(&mut self) -> Vec<Equipment> {
        if self.opened {
            return Vec::new();
        }
        self.opened = true;
        self.items.clone()
    }
}

/// Stock a chest for a floor.
///
/// The item mix comes from a source seeded by chest id and floor, so a chest
/// always holds the same kinds of items. Rarity rolls and item ids come from
/// the loot factory.
pub fn stock_chest(id: u32, floor: u32, loot: &mut LootFactory) -> Chest {
    let mut rng = StdRng::seed_from_u64(id as u64 * 1000 + floor as u64);
    let item_level = floor * 3;

    let mut items = vec![loot.create_potion()];

    let extra = rng.gen_range(1..=3);
    for _ in 0..extra {
        let roll = rng.gen_range(0..10);
        let item = if roll < 4 {
            let kind = CHEST_ARMOR[rng.gen_range(0..CHEST_ARMOR.len())];
            let rarity = loot.roll_rarity(item_level);
            loot.create_armor(kind, item_level, rarity)
        } else if roll < 8 {
            loot.create_potion()
        } else {
            let kind = CHEST_RUNES[rng.gen_range(0..CHEST_RUNES.len())];
            loot.create_rune(kind, 5 + floor as i32)
        };
        items.push(item);
    }

    Chest::new(id, items)
}
