//! Ready-made scenario catalogs.

use gearforge_core::{
    Affix, CraftingOption, EquipmentSlot, ItemCatalog, ItemSet, SetCatalog, SetThreshold,
};

use crate::builders::{ring, statted_item, wildcard_option};

/// The three target properties most tests optimize for.
pub fn standard_properties() -> Vec<String> {
    vec![
        "Strength".to_owned(),
        "Dexterity".to_owned(),
        "Constitution".to_owned(),
    ]
}

/// Three rings: +8 Strength, +8 Dexterity, +5 Strength.
pub fn rings_catalog() -> ItemCatalog {
    ItemCatalog::from_items(vec![
        ring("Ring of Strength", &[("Strength", 8.0)]),
        ring("Ring of Dexterity", &[("Dexterity", 8.0)]),
        ring("Simple Ring", &[("Strength", 5.0)]),
    ])
}

/// A set with cumulative thresholds: 2 pieces +5 Strength, 3 pieces +10
/// Strength. Pair with [`guardian_pieces`].
pub fn guardian_set_catalog() -> SetCatalog {
    SetCatalog::from_sets(vec![ItemSet {
        name: "Guardian of the Gates".to_owned(),
        thresholds: vec![
            SetThreshold {
                pieces: 2,
                affixes: vec![Affix::number("Strength", "Set", 5.0)],
            },
            SetThreshold {
                pieces: 3,
                affixes: vec![Affix::number("Strength", "Set", 10.0)],
            },
        ],
    }])
}

/// Three plain items that all belong to the Guardian of the Gates set.
pub fn guardian_pieces() -> Vec<gearforge_core::Item> {
    let mut pieces = vec![
        statted_item("Guardian Helm", EquipmentSlot::Helm, &[]),
        statted_item("Guardian Belt", EquipmentSlot::Belt, &[]),
        statted_item("Guardian Cloak", EquipmentSlot::Cloak, &[]),
    ];
    for piece in &mut pieces {
        piece.sets = vec!["Guardian of the Gates".to_owned()];
    }
    pieces
}

/// Wildcard options for `Red` sockets: Strength +8, Accuracy +4 and a
/// filler option with no affixes.
pub fn red_augment_rows() -> Vec<(String, String, CraftingOption)> {
    let mut rows = vec![
        wildcard_option("Red", "Ruby of Strength", "Strength", 8.0),
        wildcard_option("Red", "Ruby of Accuracy", "Accuracy", 4.0),
    ];
    rows.push((
        "Red".to_owned(),
        gearforge_core::WILDCARD_ITEM.to_owned(),
        CraftingOption {
            name: "Cracked Ruby".to_owned(),
            ..CraftingOption::default()
        },
    ));
    rows
}
