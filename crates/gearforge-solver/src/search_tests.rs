use gearforge_core::{
    Affix, CraftingCatalog, EquipmentSlot, Exclusions, GearSlot, Item, ItemCatalog, ItemSet,
    PropertyScore, SetCatalog, SetThreshold,
};
use std::sync::atomic::{AtomicUsize, Ordering};

use gearforge_test::{red_augment_rows, rings_catalog, standard_properties, statted_item};

use crate::collector::OptimizedGearSetup;
use crate::search::{optimize_gear, optimize_gear_with, OptimizeOptions, OptimizeOutcome};
use crate::termination::{AbortFlag, Termination};

fn options() -> OptimizeOptions {
    OptimizeOptions::new(standard_properties()).with_max_results(5)
}

fn item_name(catalog: &ItemCatalog, entry: &OptimizedGearSetup, slot: GearSlot) -> Option<String> {
    entry
        .setup
        .get(slot)
        .map(|id| catalog.get(id).name.clone())
}

#[test]
fn test_rings_scenario() {
    let items = rings_catalog();
    let outcome = optimize_gear(&items, &SetCatalog::default(), &CraftingCatalog::default(), &options());
    let results = outcome.results();
    assert!(!results.is_empty());

    let top = &results[0];
    let rings = [
        item_name(&items, top, GearSlot::Ring1).unwrap(),
        item_name(&items, top, GearSlot::Ring2).unwrap(),
    ];
    assert!(rings.contains(&"Ring of Strength".to_owned()));
    assert!(rings.contains(&"Ring of Dexterity".to_owned()));
    assert_eq!(
        top.result.property_values,
        vec![
            ("Strength".to_owned(), 8.0),
            ("Dexterity".to_owned(), 8.0),
            ("Constitution".to_owned(), 0.0),
        ]
    );
}

#[test]
fn test_results_follow_ordered_tuple_rule() {
    let items = rings_catalog();
    let outcome = optimize_gear(&items, &SetCatalog::default(), &CraftingCatalog::default(), &options());
    let results = outcome.results();

    // Re-deriving the sort from the returned property values must match
    // the returned order.
    for pair in results.windows(2) {
        let derive = |entry: &OptimizedGearSetup| {
            let values: Vec<f64> = entry
                .result
                .property_values
                .iter()
                .map(|&(_, v)| v)
                .collect();
            PropertyScore::from_values(&values)
        };
        assert!(derive(&pair[0]) >= derive(&pair[1]));
        assert_eq!(&derive(&pair[0]), pair[0].score());
    }
}

#[test]
fn test_empty_catalog_returns_no_results() {
    let outcome = optimize_gear(
        &ItemCatalog::default(),
        &SetCatalog::default(),
        &CraftingCatalog::default(),
        &options(),
    );
    assert_eq!(outcome.results(), &[]);
    assert!(!outcome.is_cancelled());
}

#[test]
fn test_insufficient_properties() {
    let items = rings_catalog();
    let few = OptimizeOptions::new(vec!["Strength", "Dexterity"]);
    let outcome = optimize_gear(&items, &SetCatalog::default(), &CraftingCatalog::default(), &few);
    assert_eq!(outcome, OptimizeOutcome::InsufficientProperties);
    assert!(outcome.results().is_empty());
    assert!(outcome.statistics().is_none());
}

#[test]
fn test_excluded_item_never_appears() {
    let items = rings_catalog();
    let mut exclusions = Exclusions::default();
    exclusions.items.insert("Ring of Strength".to_owned());
    let outcome = optimize_gear(
        &items,
        &SetCatalog::default(),
        &CraftingCatalog::default(),
        &options().with_exclusions(exclusions),
    );

    for entry in outcome.results() {
        for slot in GearSlot::ALL {
            assert_ne!(
                item_name(&items, entry, slot).as_deref(),
                Some("Ring of Strength")
            );
        }
    }
    let top = &outcome.results()[0];
    assert_eq!(top.result.property_values[0].1, 5.0);
    assert_eq!(top.result.property_values[1].1, 8.0);
}

#[test]
fn test_total_exclusion_yields_single_empty_setup() {
    let items = rings_catalog();
    let mut exclusions = Exclusions::default();
    for name in ["Ring of Strength", "Ring of Dexterity", "Simple Ring"] {
        exclusions.items.insert(name.to_owned());
    }
    let outcome = optimize_gear(
        &items,
        &SetCatalog::default(),
        &CraftingCatalog::default(),
        &options().with_exclusions(exclusions),
    );
    let results = outcome.results();
    assert_eq!(results.len(), 1);
    assert!(results[0].setup.is_empty());
    assert!(results[0].score().is_zero());
}

fn weapons_catalog() -> ItemCatalog {
    let mut axe = statted_item("Axe of Ruin", EquipmentSlot::Weapon, &[("Strength", 6.0)]);
    axe.sub_type = Some("Great Axe".to_owned());
    let mut sword = statted_item("Fine Long Sword", EquipmentSlot::Weapon, &[("Strength", 4.0)]);
    sword.sub_type = Some("Long Sword".to_owned());
    // Insight bonus so the shield stacks with the sword's Enhancement.
    let mut shield = Item::new("Wall of Iron", EquipmentSlot::Offhand);
    shield.affixes = vec![Affix::number("Strength", "Insight", 4.0)];
    shield.sub_type = Some("Tower Shield".to_owned());
    ItemCatalog::from_items(vec![axe, sword, shield])
}

#[test]
fn test_two_handed_weapons_never_paired_with_offhand() {
    let items = weapons_catalog();
    let outcome = optimize_gear(
        &items,
        &SetCatalog::default(),
        &CraftingCatalog::default(),
        &options().with_max_results(20),
    );
    for entry in outcome.results() {
        if item_name(&items, entry, GearSlot::Weapon).as_deref() == Some("Axe of Ruin") {
            assert_eq!(entry.setup.get(GearSlot::Offhand), None);
        }
    }

    // Sword and board (4 + 4, distinct items) beats the lone axe (6).
    let top = &outcome.results()[0];
    assert_eq!(
        item_name(&items, top, GearSlot::Weapon).as_deref(),
        Some("Fine Long Sword")
    );
    assert_eq!(
        item_name(&items, top, GearSlot::Offhand).as_deref(),
        Some("Wall of Iron")
    );
    assert_eq!(top.result.property_values[0].1, 8.0);
}

#[test]
fn test_set_completion_wins_over_plain_item() {
    let plain = statted_item("Plate of Power", EquipmentSlot::Armor, &[("Strength", 6.0)]);
    let mut set_armor = Item::new("Bulwark Plate", EquipmentSlot::Armor);
    set_armor.sets = vec!["Bulwark".to_owned()];
    let mut set_ring = Item::new("Bulwark Ring", EquipmentSlot::Ring);
    set_ring.sets = vec!["Bulwark".to_owned()];
    let items = ItemCatalog::from_items(vec![plain, set_armor, set_ring]);

    let sets = SetCatalog::from_sets(vec![ItemSet {
        name: "Bulwark".to_owned(),
        thresholds: vec![SetThreshold {
            pieces: 2,
            affixes: vec![Affix::number("Strength", "Set", 8.0)],
        }],
    }]);

    // max_results 1 keeps the pruning cutoff tight; the set-completing
    // branch must survive the bound.
    let outcome = optimize_gear(
        &items,
        &sets,
        &CraftingCatalog::default(),
        &options().with_max_results(1),
    );
    let top = &outcome.results()[0];
    assert_eq!(
        item_name(&items, top, GearSlot::Armor).as_deref(),
        Some("Bulwark Plate")
    );
    assert_eq!(
        item_name(&items, top, GearSlot::Ring1).as_deref(),
        Some("Bulwark Ring")
    );
    assert_eq!(top.result.property_values[0].1, 8.0);
    assert_eq!(top.result.active_sets, vec!["Bulwark".to_owned()]);
}

#[test]
fn test_socketed_item_scores_with_augment() {
    let mut helm = Item::new("Hollow Helm", EquipmentSlot::Helm);
    helm.crafting_slots = vec!["Red".to_owned()];
    let items = ItemCatalog::from_items(vec![helm]);
    let crafting = CraftingCatalog::from_rows(red_augment_rows());

    let outcome = optimize_gear(&items, &SetCatalog::default(), &crafting, &options());
    let top = &outcome.results()[0];
    assert_eq!(
        item_name(&items, top, GearSlot::Helm).as_deref(),
        Some("Hollow Helm")
    );
    assert_eq!(top.result.property_values[0].1, 8.0);
    assert_eq!(top.result.total_sockets, 1);
    assert_eq!(top.result.unused_sockets, 0);
}

#[test]
fn test_tight_cutoff_agrees_with_wide_search() {
    // With max_results 1 the cutoff engages early and prunes hard; the
    // winner must still be the same setup a wide, barely-pruned search
    // ranks first.
    let items = rings_catalog();
    let sets = SetCatalog::default();
    let crafting = CraftingCatalog::default();
    let wide = optimize_gear(&items, &sets, &crafting, &options().with_max_results(50));
    let tight = optimize_gear(&items, &sets, &crafting, &options().with_max_results(1));
    assert_eq!(tight.results(), &wide.results()[..1]);
}

#[test]
fn test_idempotent_across_runs() {
    let items = rings_catalog();
    let sets = SetCatalog::default();
    let crafting = CraftingCatalog::default();
    let first = optimize_gear(&items, &sets, &crafting, &options());
    let second = optimize_gear(&items, &sets, &crafting, &options());
    assert_eq!(first.results(), second.results());
}

#[test]
fn test_parallel_matches_serial() {
    let items = weapons_catalog();
    let sets = SetCatalog::default();
    let crafting = CraftingCatalog::default();
    let serial = optimize_gear(&items, &sets, &crafting, &options());
    let parallel = optimize_gear(&items, &sets, &crafting, &options().with_parallel(true));
    assert_eq!(serial.results(), parallel.results());
}

#[test]
fn test_pre_aborted_search_is_cancelled() {
    let items = rings_catalog();
    let flag = AbortFlag::new();
    flag.abort();
    assert!(flag.is_terminated());
    let outcome = optimize_gear_with(
        &items,
        &SetCatalog::default(),
        &CraftingCatalog::default(),
        &options(),
        &flag,
    );
    assert!(outcome.is_cancelled());
    assert!(outcome.results().is_empty());
}

/// Reports terminated once a budget of checks is spent, forcing an abort
/// partway through a search.
struct AbortAfterChecks {
    remaining: AtomicUsize,
}

impl AbortAfterChecks {
    fn new(budget: usize) -> AbortAfterChecks {
        AbortAfterChecks {
            remaining: AtomicUsize::new(budget),
        }
    }
}

impl Termination for AbortAfterChecks {
    fn is_terminated(&self) -> bool {
        self.remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_err()
    }
}

#[test]
fn test_mid_search_abort_keeps_partial_results() {
    let items = rings_catalog();
    // Large enough to score a few leaves, small enough to stop well short
    // of the full ring enumeration.
    let termination = AbortAfterChecks::new(20);
    let outcome = optimize_gear_with(
        &items,
        &SetCatalog::default(),
        &CraftingCatalog::default(),
        &options(),
        &termination,
    );
    assert!(outcome.is_cancelled());
    assert!(!outcome.results().is_empty());

    let statistics = outcome.statistics().unwrap();
    assert!(statistics.nodes_expanded > 0);
    // Partial results still come out best-first.
    for pair in outcome.results().windows(2) {
        assert!(pair[0].score() >= pair[1].score());
    }
}

#[test]
fn test_statistics_reported() {
    let items = rings_catalog();
    let outcome = optimize_gear(&items, &SetCatalog::default(), &CraftingCatalog::default(), &options());
    let statistics = outcome.statistics().unwrap();
    assert!(statistics.nodes_expanded > 0);
    assert!(statistics.candidates_scored > 0);
}
