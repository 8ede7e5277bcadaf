//! Optimistic per-property bounds for branch-and-bound pruning.
//!
//! All bounds here over-estimate and never under-estimate: a pruned branch
//! provably cannot beat the current Nth-best candidate. Cross-item stacking
//! (same-name same-type affixes collapsing to their maximum) only reduces
//! totals, so summing per-item optima stays admissible as long as negative
//! contributions are clamped to zero before summing.

use gearforge_core::{AffixPool, Item, ItemId};
use gearforge_scoring::ScoreContext;

/// Optimistic contribution of one item to each target property, in target
/// order: its own (clamped) per-type maxima plus the best clamped option
/// for each of its augment sockets.
pub(crate) fn item_upper(ctx: &ScoreContext<'_>, item: &Item) -> Vec<f64> {
    let mut upper = vec![0.0; ctx.targets.len()];

    for (p, target) in ctx.targets.iter().enumerate() {
        let mut per_type: std::collections::HashMap<&str, f64> = std::collections::HashMap::new();
        for affix in &item.affixes {
            if &affix.name != target {
                continue;
            }
            let value = affix.value.as_number();
            let best = per_type.entry(affix.bonus_type.as_str()).or_insert(0.0);
            if value > *best {
                *best = value;
            }
        }
        upper[p] = per_type.values().sum();
    }

    for slot_type in &item.crafting_slots {
        for (p, target) in ctx.targets.iter().enumerate() {
            let mut best = 0.0;
            for id in ctx.crafting.candidates_for(slot_type, &item.name) {
                let option = ctx.crafting.get(id);
                if ctx.exclusions.bars_option(option) {
                    continue;
                }
                let total = AffixPool::combine(&option.affixes).property_total(target);
                if total > best {
                    best = total;
                }
            }
            upper[p] += best;
        }
    }

    upper
}

/// Optimistic total set-bonus contribution per target property, across the
/// sets any candidate item belongs to. Thresholds are cumulative, so every
/// threshold's (clamped) bonuses are summed.
pub(crate) fn set_upper(
    ctx: &ScoreContext<'_>,
    candidate_items: impl Iterator<Item = ItemId>,
) -> Vec<f64> {
    let mut member_sets: std::collections::HashSet<&str> = std::collections::HashSet::new();
    for id in candidate_items {
        for set_name in &ctx.items.get(id).sets {
            member_sets.insert(set_name.as_str());
        }
    }

    let mut upper = vec![0.0; ctx.targets.len()];
    if ctx.exclude_set_bonuses {
        return upper;
    }
    for set in ctx.sets.iter().filter(|set| member_sets.contains(set.name.as_str())) {
        for threshold in &set.thresholds {
            for affix in &threshold.affixes {
                if let Some(p) = ctx.targets.iter().position(|target| target == &affix.name) {
                    let value = affix.value.as_number();
                    if value > 0.0 {
                        upper[p] += value;
                    }
                }
            }
        }
    }
    upper
}
