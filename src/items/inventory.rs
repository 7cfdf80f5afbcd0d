//! Inventory system
//!
//! Bounded list of carried items plus the worn loadout. Equipping moves an
//! item from the list into its slot and applies its stats to the hero.

use serde::{Deserialize, Serialize};

use super::item::{EquipSlot, Equipment, ItemId};
use super::loadout::Loadout;
use crate::entities::Hero;
use crate::progression::LevelUpSummary;

/// Distinct entries the inventory can hold
pub const INVENTORY_CAPACITY: usize = 84;

/// Result of using a consumable
#[derive(Debug, Clone, PartialEq)]
pub struct ItemUse {
    /// The single item consumed
    pub item: Equipment,
    /// Level gains triggered by the item's experience
    pub level_up: Option<LevelUpSummary>,
}

/// Carried and worn items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Equipment>,
    equipped: Loadout,
    capacity: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_capacity(INVENTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            equipped: Loadout::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of distinct carried entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Carried items in pickup order
    pub fn items(&self) -> &[Equipment] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Equipment> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn loadout(&self) -> &Loadout {
        &self.equipped
    }

    pub fn equipped(&self, slot: EquipSlot) -> Option<&Equipment> {
        self.equipped.get(slot)
    }

    /// Whether `item` could be added right now
    fn has_room_for(&self, id: ItemId) -> bool {
        self.contains(id) || !self.is_full()
    }

    /// Add an item. An entry with the same id stacks instead of taking a slot.
    ///
    /// Returns false without changing anything if the inventory is full.
    pub fn add_item(&mut self, mut item: Equipment) -> bool {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity += 1;
            return true;
        }
        if self.is_full() {
            return false;
        }
        item.in_inventory = true;
        item.equipped = false;
        item.quantity = 1;
        self.items.push(item);
        true
    }

    /// Remove one of an item. Stacks shrink by one; the last copy leaves the list.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Equipment> {
        let idx = self.items.iter().position(|i| i.id == id)?;
        if self.items[idx].quantity > 1 {
            self.items[idx].quantity -= 1;
            let mut single = self.items[idx].clone();
            single.quantity = 1;
            Some(single)
        } else {
            let mut item = self.items.remove(idx);
            item.in_inventory = false;
            Some(item)
        }
    }

    /// Wear a carried item and apply its stats to the hero.
    ///
    /// Whatever occupied the slot goes back into the inventory, taking the
    /// entry the worn item leaves. Fails with no change for consumables,
    /// unknown ids, or stacked entries, since an id is never both carried
    /// and worn.
    pub fn equip_item(&mut self, id: ItemId, hero: &mut Hero) -> bool {
        let Some(item) = self.get(id) else {
            return false;
        };
        let Some(slot) = item.equip_slot() else {
            return false;
        };
        if item.quantity > 1 {
            log::debug!("Item {} is stacked x{} and cannot be worn", id, item.quantity);
            return false;
        }

        let Some(mut item) = self.remove_item(id) else {
            return false;
        };

        if let Some(previous) = self.equipped.unequip(slot) {
            previous.remove_from(hero);
            let returned = self.add_item(previous);
            debug_assert!(returned, "bumped item must fit the freed entry");
        }

        item.in_inventory = false;
        item.equipped = true;
        item.apply_to(hero);
        match self.equipped.equip(item) {
            Ok(bumped) => debug_assert!(bumped.is_none(), "slot {:?} was just emptied", slot),
            Err(item) => log::error!("Item {} lost its slot while equipping", item.id),
        }
        true
    }

    /// Take off a worn item, reverse its stats and return it to the inventory.
    ///
    /// Fails with no change if the item is not worn or there is no room.
    pub fn unequip_item(&mut self, id: ItemId, hero: &mut Hero) -> bool {
        let Some(slot) = self.equipped.slot_of(id) else {
            return false;
        };
        if !self.has_room_for(id) {
            return false;
        }
        let Some(item) = self.equipped.unequip(slot) else {
            return false;
        };
        item.remove_from(hero);
        self.add_item(item)
    }

    /// Consume a potion or rune and apply its effect.
    ///
    /// Returns None if the item is missing or not consumable.
    pub fn use_item(&mut self, id: ItemId, hero: &mut Hero) -> Option<ItemUse> {
        if !self.get(id)?.kind.is_consumable() {
            return None;
        }
        let item = self.remove_item(id)?;
        let level_up = item.apply_to(hero);
        Some(ItemUse { item, level_up })
    }

    /// First carried item matching a predicate
    pub fn find<F>(&self, f: F) -> Option<&Equipment>
    where
        F: Fn(&Equipment) -> bool,
    {
        self.items.iter().find(|i| f(i))
    }
}
