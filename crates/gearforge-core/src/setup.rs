//! Gear setups: one candidate loadout.

use crate::catalog::ItemCatalog;
use crate::item::GearSlot;

/// Identifier of an item within an [`ItemCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) u32);

impl ItemId {
    /// Index into the catalog's item list.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A mapping from gear position to an optional equipped item.
///
/// Setups are value objects: the search constructs them, scores them and
/// never mutates one after scoring. The same item id must never occupy two
/// positions; [`GearSetup::with`] debug-asserts this invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GearSetup {
    slots: [Option<ItemId>; GearSlot::COUNT],
}

impl GearSetup {
    /// An all-empty setup.
    pub fn empty() -> GearSetup {
        GearSetup::default()
    }

    /// Returns a copy of this setup with one position (re)assigned.
    #[must_use]
    pub fn with(&self, slot: GearSlot, item: Option<ItemId>) -> GearSetup {
        if let Some(id) = item {
            debug_assert!(
                !self
                    .slots
                    .iter()
                    .enumerate()
                    .any(|(i, &occupant)| i != slot.index() && occupant == Some(id)),
                "item assigned to two gear positions"
            );
        }
        let mut next = self.clone();
        next.slots[slot.index()] = item;
        next
    }

    /// The item equipped at a position, if any.
    #[inline]
    pub fn get(&self, slot: GearSlot) -> Option<ItemId> {
        self.slots[slot.index()]
    }

    /// Iterates over occupied positions.
    pub fn equipped(&self) -> impl Iterator<Item = (GearSlot, ItemId)> + '_ {
        GearSlot::ALL
            .iter()
            .filter_map(|&slot| self.slots[slot.index()].map(|id| (slot, id)))
    }

    /// Returns true if no position is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Canonical key for deterministic tie-breaking: the equipped item
    /// names in gear-position order, empty positions as empty strings.
    pub fn canonical_key(&self, catalog: &ItemCatalog) -> Vec<String> {
        GearSlot::ALL
            .iter()
            .map(|&slot| match self.slots[slot.index()] {
                Some(id) => catalog.get(id).name.clone(),
                None => String::new(),
            })
            .collect()
    }
}
