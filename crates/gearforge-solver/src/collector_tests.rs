use gearforge_core::{GearSetup, GearSlot, ItemCatalog, PropertyScore};
use gearforge_scoring::{CraftingSelections, ScoreResult};
use gearforge_test::rings_catalog;

use crate::collector::{OptimizedGearSetup, TopResults};

fn candidate(catalog: &ItemCatalog, ring_name: &str, values: &[f64]) -> OptimizedGearSetup {
    let setup = GearSetup::empty().with(GearSlot::Ring1, catalog.id_by_name(ring_name));
    OptimizedGearSetup {
        setup,
        result: ScoreResult {
            score: PropertyScore::from_values(values),
            scalar: values.iter().sum(),
            property_values: Vec::new(),
            total_sockets: 0,
            unused_sockets: 0,
            other_effects: Vec::new(),
            active_sets: Vec::new(),
            selections: CraftingSelections::empty(),
        },
    }
}

#[test]
fn test_keeps_best_n_sorted() {
    let catalog = rings_catalog();
    let mut top = TopResults::new(2);
    top.offer(candidate(&catalog, "Ring of Strength", &[5.0, 0.0, 0.0]), &catalog);
    top.offer(candidate(&catalog, "Ring of Dexterity", &[8.0, 0.0, 0.0]), &catalog);
    top.offer(candidate(&catalog, "Simple Ring", &[1.0, 0.0, 0.0]), &catalog);

    assert_eq!(top.len(), 2);
    assert_eq!(
        top.cutoff(),
        Some(&PropertyScore::from_values(&[5.0, 0.0, 0.0]))
    );
    let sorted = top.into_sorted_vec();
    assert_eq!(sorted[0].score(), &PropertyScore::from_values(&[8.0, 0.0, 0.0]));
    assert_eq!(sorted[1].score(), &PropertyScore::from_values(&[5.0, 0.0, 0.0]));
}

#[test]
fn test_equal_scores_break_ties_by_canonical_key() {
    let catalog = rings_catalog();
    let mut top = TopResults::new(3);
    // "Simple Ring" sorts after "Ring of Dexterity" by item name.
    top.offer(candidate(&catalog, "Simple Ring", &[4.0, 0.0, 0.0]), &catalog);
    top.offer(candidate(&catalog, "Ring of Dexterity", &[4.0, 0.0, 0.0]), &catalog);

    let sorted = top.into_sorted_vec();
    let name = |entry: &OptimizedGearSetup| {
        catalog
            .get(entry.setup.get(GearSlot::Ring1).unwrap())
            .name
            .clone()
    };
    assert_eq!(name(&sorted[0]), "Ring of Dexterity");
    assert_eq!(name(&sorted[1]), "Simple Ring");
}

#[test]
fn test_structural_duplicates_kept_once() {
    let catalog = rings_catalog();
    let mut top = TopResults::new(5);
    top.offer(candidate(&catalog, "Simple Ring", &[4.0, 0.0, 0.0]), &catalog);
    top.offer(candidate(&catalog, "Simple Ring", &[4.0, 0.0, 0.0]), &catalog);
    assert_eq!(top.len(), 1);
}

#[test]
fn test_cutoff_only_when_full() {
    let catalog = rings_catalog();
    let mut top = TopResults::new(2);
    assert!(top.cutoff().is_none());
    top.offer(candidate(&catalog, "Simple Ring", &[4.0, 0.0, 0.0]), &catalog);
    assert!(top.cutoff().is_none());
    top.offer(candidate(&catalog, "Ring of Dexterity", &[2.0, 0.0, 0.0]), &catalog);
    assert_eq!(
        top.cutoff(),
        Some(&PropertyScore::from_values(&[2.0, 0.0, 0.0]))
    );
}

#[test]
fn test_zero_capacity_accepts_nothing() {
    let catalog = rings_catalog();
    let mut top = TopResults::new(0);
    top.offer(candidate(&catalog, "Simple Ring", &[4.0, 0.0, 0.0]), &catalog);
    assert!(top.is_empty());
}
