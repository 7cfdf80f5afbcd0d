//! Worn equipment
//!
//! Maps each equipment slot to the item currently worn there.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::item::{EquipSlot, Equipment, ItemId};

/// Items currently worn by the hero
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    slots: BTreeMap<EquipSlot, Equipment>,
}

impl Loadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an item in its slot, returning whatever was there before.
    ///
    /// Items with no slot are handed back as the error.
    pub fn equip(&mut self, item: Equipment) -> Result<Option<Equipment>, Equipment> {
        match item.equip_slot() {
            Some(slot) => Ok(self.slots.insert(slot, item)),
            None => Err(item),
        }
    }

    pub fn unequip(&mut self, slot: EquipSlot) -> Option<Equipment> {
        self.slots.remove(&slot)
    }

    pub fn get(&self, slot: EquipSlot) -> Option<&Equipment> {
        self.slots.get(&slot)
    }

    pub fn is_empty(&self, slot: EquipSlot) -> bool {
        !self.slots.contains_key(&slot)
    }

    /// Slot holding the item with this id
    pub fn slot_of(&self, id: ItemId) -> Option<EquipSlot> {
        self.slots
            .iter()
            .find(|(_, item)| item.id == id)
            .map(|(slot, _)| *slot)
    }

    pub fn items(&self) -> impl Iterator<Item = &Equipment> {
        self.slots.values()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}
