//! Display names for generated items

use super::item::{ItemKind, Rarity};

/// Name shown for an item of the given kind and rarity
pub fn item_name(kind: ItemKind, rarity: Rarity) -> String {
    match kind {
        ItemKind::Weapon(weapon) => format!("{} {}", rarity.name(), weapon.name()),
        ItemKind::Armor(armor) => format!("{} {}", rarity.name(), armor.name()),
        ItemKind::Rune(rune) => format!("Rune of {}", rune.name()),
        ItemKind::Potion => "Healing Potion".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ArmorKind, RuneKind, WeaponKind};

    #[test]
    fn test_names() {
        assert_eq!(item_name(ItemKind::Weapon(WeaponKind::Staff), Rarity::Epic), "Epic Staff");
        assert_eq!(item_name(ItemKind::Armor(ArmorKind::OffHand), Rarity::Common), "Common Shield");
        assert_eq!(item_name(ItemKind::Rune(RuneKind::Gold), Rarity::Rare), "Rune of Gold");
        assert_eq!(item_name(ItemKind::Potion, Rarity::Common), "Healing Potion");
    }
}
