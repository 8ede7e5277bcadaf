//! Set-bonus evaluation.

use std::collections::HashMap;

use gearforge_core::{Affix, GearSetup, ItemCatalog, SetCatalog, SetThreshold};

/// One item set touched by a setup, with its met thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSet {
    pub name: String,
    /// Equipped pieces declaring membership in this set.
    pub pieces: u32,
    /// Thresholds at or below the equipped piece count (thresholds are
    /// cumulative). Empty when no threshold is met yet.
    pub met: Vec<SetThreshold>,
}

impl ActiveSet {
    /// Whether at least one threshold is met.
    pub fn is_active(&self) -> bool {
        !self.met.is_empty()
    }

    /// Bonus affixes of every met threshold, exactly as the catalog
    /// declares them.
    pub fn affixes(&self) -> impl Iterator<Item = &Affix> {
        self.met.iter().flat_map(|threshold| threshold.affixes.iter())
    }

    /// Met-threshold affixes prepared for pool combination: each bonus
    /// type is widened with its threshold's piece count so that two
    /// thresholds granting the same property under the same bonus type
    /// still stack additively instead of collapsing to the higher value.
    pub fn stacking_affixes(&self) -> Vec<Affix> {
        self.met
            .iter()
            .flat_map(|threshold| {
                threshold.affixes.iter().map(|affix| {
                    let mut tagged = affix.clone();
                    tagged.bonus_type =
                        format!("{} ({} pieces)", affix.bonus_type, threshold.pieces);
                    tagged
                })
            })
            .collect()
    }
}

/// Evaluates which item sets a setup touches and what bonuses apply.
///
/// Sets with zero equipped members are omitted. Output follows catalog
/// declaration order so display and scoring stay reproducible. Set names
/// an item declares but the catalog does not know are ignored with a
/// warning.
pub fn evaluate_active_sets(
    setup: &GearSetup,
    items: &ItemCatalog,
    sets: &SetCatalog,
) -> Vec<ActiveSet> {
    let mut piece_counts: HashMap<&str, u32> = HashMap::new();
    for (_, id) in setup.equipped() {
        for set_name in &items.get(id).sets {
            if sets.by_name(set_name).is_none() {
                tracing::warn!(set = %set_name, "equipped item references unknown set");
                continue;
            }
            *piece_counts.entry(set_name.as_str()).or_insert(0) += 1;
        }
    }

    sets.iter()
        .filter_map(|set| {
            let pieces = piece_counts.get(set.name.as_str()).copied()?;
            let met = set
                .thresholds
                .iter()
                .filter(|threshold| threshold.pieces <= pieces)
                .cloned()
                .collect();
            Some(ActiveSet {
                name: set.name.clone(),
                pieces,
                met,
            })
        })
        .collect()
}
