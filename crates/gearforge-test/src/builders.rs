//! Construction helpers for fixture items and crafting options.

use gearforge_core::{Affix, CraftingOption, EquipmentSlot, Item, WILDCARD_ITEM};

/// An item with numeric Enhancement-type affixes.
pub fn statted_item(name: &str, slot: EquipmentSlot, stats: &[(&str, f64)]) -> Item {
    let mut item = Item::new(name, slot);
    item.affixes = stats
        .iter()
        .map(|&(property, value)| Affix::number(property, "Enhancement", value))
        .collect();
    item
}

/// A ring with numeric Enhancement-type affixes.
pub fn ring(name: &str, stats: &[(&str, f64)]) -> Item {
    statted_item(name, EquipmentSlot::Ring, stats)
}

/// A wildcard crafting-catalog row granting one Augment-type affix.
pub fn wildcard_option(
    slot_type: &str,
    name: &str,
    property: &str,
    value: f64,
) -> (String, String, CraftingOption) {
    (
        slot_type.to_owned(),
        WILDCARD_ITEM.to_owned(),
        CraftingOption {
            name: name.to_owned(),
            affixes: vec![Affix::number(property, "Augment", value)],
            ..CraftingOption::default()
        },
    )
}
