//! The scorer: one candidate loadout in, one [`ScoreResult`] out.

use gearforge_core::{
    Affix, AffixPool, CraftingCatalog, Exclusions, GearSetup, ItemCatalog, PropertyScore,
    SetCatalog,
};

use crate::augment::{resolve_all_augments, CraftingSelections};
use crate::set_bonus::evaluate_active_sets;

/// The read-only inputs shared by every score calculation of one search:
/// catalogs, target properties and caller options. Borrowed snapshots for
/// the duration of a call; the scorer never mutates them.
#[derive(Clone, Copy)]
pub struct ScoreContext<'a> {
    pub items: &'a ItemCatalog,
    pub sets: &'a SetCatalog,
    pub crafting: &'a CraftingCatalog,
    pub exclusions: &'a Exclusions,
    /// Target properties in the user's priority order.
    pub targets: &'a [String],
    /// When set, set bonuses do not count toward the score ("raw gear
    /// only" comparisons).
    pub exclude_set_bonuses: bool,
}

/// The immutable scoring record of one candidate loadout.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// The authoritative ranking score: one level per target property in
    /// priority order.
    pub score: PropertyScore,
    /// Informational scalar for display: the sum of the target property
    /// values. Never used for ranking.
    pub scalar: f64,
    /// (target property, combined value) pairs in priority order.
    pub property_values: Vec<(String, f64)>,
    /// Augment sockets present across the setup.
    pub total_sockets: usize,
    /// Sockets left without a chosen option.
    pub unused_sockets: usize,
    /// Effects present on the setup that are not target properties,
    /// deduplicated by name, in name order.
    pub other_effects: Vec<String>,
    /// Names of sets with at least one met threshold, in catalog order.
    pub active_sets: Vec<String>,
    /// The socket selections the score was computed with.
    pub selections: CraftingSelections,
}

/// Scores one setup: base item affixes, resolved (or caller-fixed) augment
/// affixes and active set bonuses combine into one pool, which is read out
/// per target property.
///
/// Pure function of its inputs, no side effects. Pass `fixed_selections`
/// to re-score a manually edited or imported setup without re-resolving
/// augments.
pub fn calculate_score(
    ctx: &ScoreContext<'_>,
    setup: &GearSetup,
    fixed_selections: Option<&CraftingSelections>,
) -> ScoreResult {
    let mut affixes: Vec<Affix> = Vec::new();
    for (_, id) in setup.equipped() {
        affixes.extend(ctx.items.get(id).affixes.iter().cloned());
    }

    let selections = match fixed_selections {
        Some(fixed) => fixed.clone(),
        None => resolve_all_augments(setup, ctx.items, ctx.crafting, ctx.targets, ctx.exclusions),
    };
    for id in selections.chosen() {
        affixes.extend(ctx.crafting.get(id).affixes.iter().cloned());
    }

    let mut active_sets = Vec::new();
    if !ctx.exclude_set_bonuses {
        for active in evaluate_active_sets(setup, ctx.items, ctx.sets) {
            if active.is_active() {
                active_sets.push(active.name.clone());
            }
            affixes.extend(active.stacking_affixes());
        }
    }

    let pool = AffixPool::combine(&affixes);
    let property_values: Vec<(String, f64)> = ctx
        .targets
        .iter()
        .map(|target| (target.clone(), pool.property_total(target)))
        .collect();
    let values: Vec<f64> = property_values.iter().map(|&(_, value)| value).collect();
    let score = PropertyScore::from_values(&values);
    let scalar = values.iter().sum();

    let other_effects = pool
        .iter()
        .filter(|(name, _)| !ctx.targets.iter().any(|target| target == name))
        .map(|(name, total)| format_effect(name, total))
        .collect();

    ScoreResult {
        score,
        scalar,
        total_sockets: selections.total_sockets(),
        unused_sockets: selections.unused_sockets(),
        property_values,
        other_effects,
        active_sets,
        selections,
    }
}

fn format_effect(name: &str, total: f64) -> String {
    if total == total.trunc() {
        format!("{name} {:+}", total as i64)
    } else {
        format!("{name} {total:+}")
    }
}
