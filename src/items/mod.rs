//! Item system

pub mod item;
pub mod names;
pub mod loot;
pub mod loadout;
pub mod inventory;

pub use item::{
    ArmorKind, EquipSlot, Equipment, ItemId, ItemKind, Rarity, RuneKind, WeaponKind,
    POTION_HEALING,
};
pub use loot::{rarity_weight, roll_rarity, LootFactory};
pub use loadout::Loadout;
pub use inventory::{Inventory, ItemUse, INVENTORY_CAPACITY};
