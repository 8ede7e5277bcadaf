//! Augment resolution: picking the best crafting option per socket.
//!
//! Sockets are resolved independently. Optimal per-socket choice is not
//! guaranteed globally optimal when two sockets compete for the same scarce
//! property; this is a documented simplification of the engine, not a bug.

use smallvec::SmallVec;

use gearforge_core::{
    AffixPool, CraftingCatalog, CraftingOptionId, Exclusions, GearSetup, GearSlot, Item,
    ItemCatalog,
};

/// The chosen option (or none) for one augment socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketSelection {
    /// The socket's slot type, e.g. `Red`.
    pub slot_type: String,
    /// The chosen option, or `None` for an unused socket.
    pub option: Option<CraftingOptionId>,
}

/// Per-position socket selections for one setup.
///
/// Derived data, recomputed per candidate; not part of setup identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftingSelections {
    per_slot: Vec<SmallVec<[SocketSelection; 3]>>,
}

impl Default for CraftingSelections {
    fn default() -> Self {
        CraftingSelections::empty()
    }
}

impl CraftingSelections {
    /// Selections with no sockets anywhere.
    pub fn empty() -> CraftingSelections {
        CraftingSelections {
            per_slot: vec![SmallVec::new(); GearSlot::COUNT],
        }
    }

    /// The selections for one gear position.
    pub fn for_slot(&self, slot: GearSlot) -> &[SocketSelection] {
        &self.per_slot[slot.index()]
    }

    /// Replaces the selections for one gear position.
    pub fn set_slot(&mut self, slot: GearSlot, selections: SmallVec<[SocketSelection; 3]>) {
        self.per_slot[slot.index()] = selections;
    }

    /// Total number of sockets across the setup.
    pub fn total_sockets(&self) -> usize {
        self.per_slot.iter().map(|sockets| sockets.len()).sum()
    }

    /// Number of sockets with no chosen option.
    pub fn unused_sockets(&self) -> usize {
        self.per_slot
            .iter()
            .flatten()
            .filter(|socket| socket.option.is_none())
            .count()
    }

    /// Iterates over all chosen option ids.
    pub fn chosen(&self) -> impl Iterator<Item = CraftingOptionId> + '_ {
        self.per_slot
            .iter()
            .flatten()
            .filter_map(|socket| socket.option)
    }
}

/// Picks the best crafting option for one socket on one item.
///
/// Candidates are the wildcard options for the slot type extended by the
/// item-specific ones, minus anything barred by the exclusion lists. The
/// winner maximizes the summed contribution to the target properties; ties
/// fall to the option touching more distinct targets, then the lower
/// minimum level, then the lexicographically first name, so resolution is
/// a deterministic total order. Returns `None` when no candidate
/// contributes positively to any target.
pub fn resolve_best_augment(
    item: &Item,
    slot_type: &str,
    crafting: &CraftingCatalog,
    targets: &[String],
    exclusions: &Exclusions,
) -> Option<CraftingOptionId> {
    let mut best: Option<(f64, usize, u32, CraftingOptionId)> = None;
    for id in crafting.candidates_for(slot_type, &item.name) {
        let option = crafting.get(id);
        if exclusions.bars_option(option) {
            continue;
        }
        let pool = AffixPool::combine(&option.affixes);
        let mut contribution = 0.0;
        let mut distinct = 0;
        for target in targets {
            let total = pool.property_total(target);
            contribution += total;
            if total > 0.0 {
                distinct += 1;
            }
        }
        if contribution <= 0.0 {
            continue;
        }
        let candidate = (contribution, distinct, option.min_level, id);
        best = Some(match best.take() {
            None => candidate,
            Some(current) => pick_better(crafting, current, candidate),
        });
    }
    best.map(|(_, _, _, id)| id)
}

fn pick_better(
    crafting: &CraftingCatalog,
    current: (f64, usize, u32, CraftingOptionId),
    candidate: (f64, usize, u32, CraftingOptionId),
) -> (f64, usize, u32, CraftingOptionId) {
    let (cur_sum, cur_distinct, cur_level, cur_id) = current;
    let (new_sum, new_distinct, new_level, new_id) = candidate;
    if new_sum != cur_sum {
        return if new_sum > cur_sum { candidate } else { current };
    }
    if new_distinct != cur_distinct {
        return if new_distinct > cur_distinct {
            candidate
        } else {
            current
        };
    }
    if new_level != cur_level {
        return if new_level < cur_level { candidate } else { current };
    }
    if crafting.get(new_id).name < crafting.get(cur_id).name {
        candidate
    } else {
        current
    }
}

/// Resolves every socket of every equipped item, independently.
pub fn resolve_all_augments(
    setup: &GearSetup,
    items: &ItemCatalog,
    crafting: &CraftingCatalog,
    targets: &[String],
    exclusions: &Exclusions,
) -> CraftingSelections {
    let mut selections = CraftingSelections::empty();
    for (slot, id) in setup.equipped() {
        let item = items.get(id);
        let sockets = item
            .crafting_slots
            .iter()
            .map(|slot_type| SocketSelection {
                slot_type: slot_type.clone(),
                option: resolve_best_augment(item, slot_type, crafting, targets, exclusions),
            })
            .collect();
        selections.set_slot(slot, sockets);
    }
    selections
}
