//! Per-slot candidate grouping and the search decision list.
//!
//! The search walks a fixed list of decisions: one per simple gear
//! position, one for the ring pair and one for the weapon/offhand pair.
//! Every decision always offers the empty choice first, then its item
//! choices in catalog order, so enumeration order is deterministic.

use std::collections::BTreeMap;

use smallvec::{smallvec, SmallVec};

use gearforge_core::{weapon_pair_is_valid, EquipmentSlot, GearSlot, Item, ItemId};
use gearforge_scoring::ScoreContext;

use crate::bound::{item_upper, set_upper};

/// One way to fill a decision's position(s): zero, one or two assignments.
pub(crate) struct Choice {
    pub assignments: SmallVec<[(GearSlot, ItemId); 2]>,
    /// Optimistic per-property contribution of taking this choice.
    pub upper: Vec<f64>,
}

/// One step of the search: all valid choices for one position or pair.
pub(crate) struct Decision {
    pub choices: Vec<Choice>,
    /// Per-property maximum over all choices.
    pub upper: Vec<f64>,
}

impl Decision {
    fn from_choices(property_count: usize, choices: Vec<Choice>) -> Decision {
        let mut upper = vec![0.0; property_count];
        for choice in &choices {
            for (p, &value) in choice.upper.iter().enumerate() {
                if value > upper[p] {
                    upper[p] = value;
                }
            }
        }
        Decision { choices, upper }
    }
}

/// The decision list plus the global optimistic set-bonus contribution.
pub(crate) struct SearchSpace {
    pub decisions: Vec<Decision>,
    pub set_upper: Vec<f64>,
}

/// Simple positions, in canonical search order. Rings and the weapon pair
/// are handled as dedicated paired decisions.
const SIMPLE_SLOTS: [GearSlot; 10] = [
    GearSlot::Armor,
    GearSlot::Belt,
    GearSlot::Boots,
    GearSlot::Bracers,
    GearSlot::Cloak,
    GearSlot::Gloves,
    GearSlot::Goggles,
    GearSlot::Helm,
    GearSlot::Necklace,
    GearSlot::Trinket,
];

pub(crate) fn build_search_space(ctx: &ScoreContext<'_>) -> SearchSpace {
    let kept = keep_candidates(ctx);
    let group = |slot: EquipmentSlot| -> Vec<ItemId> {
        kept.iter()
            .filter(|&&id| ctx.items.get(id).slot == slot)
            .copied()
            .collect()
    };

    let property_count = ctx.targets.len();
    let mut decisions = Vec::with_capacity(SIMPLE_SLOTS.len() + 2);
    for slot in SIMPLE_SLOTS {
        decisions.push(single_decision(ctx, slot, &group(slot.equipment_slot())));
    }
    decisions.push(ring_decision(ctx, &group(EquipmentSlot::Ring)));
    decisions.push(weapon_decision(
        ctx,
        &group(EquipmentSlot::Weapon),
        &group(EquipmentSlot::Offhand),
    ));

    let set_upper = set_upper(ctx, kept.iter().copied());
    debug_assert!(decisions
        .iter()
        .all(|decision| decision.upper.len() == property_count));
    SearchSpace {
        decisions,
        set_upper,
    }
}

fn empty_choice(property_count: usize) -> Choice {
    Choice {
        assignments: SmallVec::new(),
        upper: vec![0.0; property_count],
    }
}

fn single_decision(ctx: &ScoreContext<'_>, slot: GearSlot, items: &[ItemId]) -> Decision {
    let mut choices = vec![empty_choice(ctx.targets.len())];
    for &id in items {
        choices.push(Choice {
            assignments: smallvec![(slot, id)],
            upper: item_upper(ctx, ctx.items.get(id)),
        });
    }
    Decision::from_choices(ctx.targets.len(), choices)
}

/// Ring choices in canonical form: empty, each single ring in `Ring1`, and
/// each unordered pair with the earlier catalog item in `Ring1`. Mirrored
/// assignments are never generated, so structurally identical setups
/// cannot arise from the two interchangeable positions.
fn ring_decision(ctx: &ScoreContext<'_>, rings: &[ItemId]) -> Decision {
    let uppers: Vec<Vec<f64>> = rings
        .iter()
        .map(|&id| item_upper(ctx, ctx.items.get(id)))
        .collect();

    let mut choices = vec![empty_choice(ctx.targets.len())];
    for (i, &ring) in rings.iter().enumerate() {
        choices.push(Choice {
            assignments: smallvec![(GearSlot::Ring1, ring)],
            upper: uppers[i].clone(),
        });
        for (j, &other) in rings.iter().enumerate().skip(i + 1) {
            choices.push(Choice {
                assignments: smallvec![(GearSlot::Ring1, ring), (GearSlot::Ring2, other)],
                upper: sum_uppers(&uppers[i], &uppers[j]),
            });
        }
    }
    Decision::from_choices(ctx.targets.len(), choices)
}

/// Weapon/offhand choices, style-validated before they ever become
/// candidates: invalid pairs are not generated and filtered later.
fn weapon_decision(ctx: &ScoreContext<'_>, weapons: &[ItemId], offhands: &[ItemId]) -> Decision {
    let mut choices = vec![empty_choice(ctx.targets.len())];
    for &offhand in offhands {
        choices.push(Choice {
            assignments: smallvec![(GearSlot::Offhand, offhand)],
            upper: item_upper(ctx, ctx.items.get(offhand)),
        });
    }
    for &weapon in weapons {
        let weapon_item = ctx.items.get(weapon);
        let weapon_upper = item_upper(ctx, weapon_item);
        choices.push(Choice {
            assignments: smallvec![(GearSlot::Weapon, weapon)],
            upper: weapon_upper.clone(),
        });
        for &offhand in offhands {
            let offhand_item = ctx.items.get(offhand);
            if !weapon_pair_is_valid(Some(weapon_item), Some(offhand_item)) {
                continue;
            }
            choices.push(Choice {
                assignments: smallvec![(GearSlot::Weapon, weapon), (GearSlot::Offhand, offhand)],
                upper: sum_uppers(&weapon_upper, &item_upper(ctx, offhand_item)),
            });
        }
    }
    Decision::from_choices(ctx.targets.len(), choices)
}

fn sum_uppers(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
}

/// The relevance/dominance prefilter.
///
/// An item survives when it contributes positively to some target, carries
/// augment sockets, or belongs to a set whose bonuses touch a target. A
/// socketless, setless item is additionally dropped when another item of
/// the same slot and sub-type matches or beats its contribution for every
/// (target, bonus type) pair. The typed comparison keeps the filter exact
/// under the stacking rules, and the sub-type match keeps substitution
/// legal under the fighting-style pairing rules, so nothing is discarded
/// on guesswork.
fn keep_candidates(ctx: &ScoreContext<'_>) -> Vec<ItemId> {
    let relevant_sets: Vec<&str> = ctx
        .sets
        .iter()
        .filter(|set| {
            set.thresholds.iter().any(|threshold| {
                threshold.affixes.iter().any(|affix| {
                    affix.value.as_number() > 0.0
                        && ctx.targets.iter().any(|target| target == &affix.name)
                })
            })
        })
        .map(|set| set.name.as_str())
        .collect();

    let mut eligible: Vec<(ItemId, TypedContributions)> = Vec::new();
    for (id, item) in ctx.items.iter() {
        if item.slot == EquipmentSlot::Augment || ctx.exclusions.bars_item(item) {
            continue;
        }
        let typed = typed_contributions(ctx, item);
        let contributes = typed.values().any(|&value| value > 0.0);
        let in_relevant_set = item
            .sets
            .iter()
            .any(|name| relevant_sets.contains(&name.as_str()));
        if !contributes && item.crafting_slots.is_empty() && !in_relevant_set {
            continue;
        }
        eligible.push((id, typed));
    }

    let mut kept = Vec::with_capacity(eligible.len());
    for (id, typed) in &eligible {
        let item = ctx.items.get(*id);
        let removable = item.crafting_slots.is_empty() && item.sets.is_empty();
        let dominated = removable
            && eligible.iter().any(|(other_id, other_typed)| {
                let other = ctx.items.get(*other_id);
                other_id != id
                    && other.slot == item.slot
                    && other.sub_type == item.sub_type
                    && dominates(other_typed, typed)
                    && (other_typed != typed || other.name < item.name)
            });
        if dominated {
            tracing::debug!(item = %item.name, "dropping dominated candidate");
            continue;
        }
        kept.push(*id);
    }
    kept
}

/// Per (target property, bonus type) maxima of an item's own affixes.
type TypedContributions = BTreeMap<(String, String), f64>;

fn typed_contributions(ctx: &ScoreContext<'_>, item: &Item) -> TypedContributions {
    let mut typed = TypedContributions::new();
    for affix in &item.affixes {
        if !ctx.targets.iter().any(|target| target == &affix.name) {
            continue;
        }
        let value = affix.value.as_number();
        let entry = typed
            .entry((affix.name.clone(), affix.bonus_type.clone()))
            .or_insert(value);
        if value > *entry {
            *entry = value;
        }
    }
    typed
}

/// True when `b` is at least as good as `a` for every key either map has.
fn dominates(b: &TypedContributions, a: &TypedContributions) -> bool {
    a.iter()
        .all(|(key, &value)| b.get(key).copied().unwrap_or(0.0) >= value)
        && b.iter()
            .all(|(key, &value)| value >= a.get(key).copied().unwrap_or(0.0))
}
