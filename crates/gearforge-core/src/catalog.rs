//! Catalogs: items, crafting options, item sets and exclusion lists.
//!
//! Catalogs arrive from an out-of-process data loading layer already
//! deserialized. Constructors here validate record-by-record: a malformed
//! record is skipped with a warning and the rest of the catalog survives.

use std::collections::{HashMap, HashSet};

use crate::affix::Affix;
#[cfg(feature = "serde")]
use crate::error::{GearForgeError, Result};
use crate::item::Item;
use crate::setup::ItemId;

/// The crafting-catalog key matching any item exposing a slot type.
pub const WILDCARD_ITEM: &str = "*";

/// Identifier of a crafting option within a [`CraftingCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CraftingOptionId(pub(crate) u32);

impl CraftingOptionId {
    /// Index into the catalog's option list.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The immutable item catalog. Items keep their load order; ids are stable
/// for the lifetime of the catalog.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: Vec<Item>,
    by_name: HashMap<String, ItemId>,
}

impl ItemCatalog {
    /// Builds a catalog, skipping malformed records.
    ///
    /// An item with an empty name, or whose name duplicates an earlier
    /// item, is dropped with a warning.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> ItemCatalog {
        let mut catalog = ItemCatalog::default();
        for item in items {
            if item.name.is_empty() {
                tracing::warn!(slot = ?item.slot, "skipping item with empty name");
                continue;
            }
            if catalog.by_name.contains_key(&item.name) {
                tracing::warn!(name = %item.name, "skipping item with duplicate name");
                continue;
            }
            let id = ItemId(catalog.items.len() as u32);
            catalog.by_name.insert(item.name.clone(), id);
            catalog.items.push(item);
        }
        catalog
    }

    /// Parses a JSON catalog document (an array of items) and builds a
    /// catalog from it.
    ///
    /// An absent (`null` or blank) or structurally malformed document is
    /// an error. Bad records inside a well-formed document are skipped
    /// with a warning as in [`ItemCatalog::from_items`].
    #[cfg(feature = "serde")]
    pub fn from_json(document: &str) -> Result<ItemCatalog> {
        let trimmed = document.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(GearForgeError::Catalog(
                "item catalog document is absent".to_owned(),
            ));
        }
        let items: Vec<Item> = serde_json::from_str(trimmed)
            .map_err(|err| GearForgeError::Catalog(err.to_string()))?;
        Ok(ItemCatalog::from_items(items))
    }

    /// Returns the item for an id.
    #[inline]
    pub fn get(&self, id: ItemId) -> &Item {
        &self.items[id.index()]
    }

    /// Looks an item up by name.
    pub fn id_by_name(&self, name: &str) -> Option<ItemId> {
        self.by_name.get(name).copied()
    }

    /// Iterates over (id, item) pairs in load order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (ItemId(i as u32), item))
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One slottable crafting option (an augment or similar).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CraftingOption {
    /// Display name, e.g. `Diamond of Strength +8`.
    pub name: String,
    /// Modifiers granted when slotted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub affixes: Vec<Affix>,
    /// Minimum character level to slot this option.
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_level: u32,
    /// Quests or adventure packs this option comes from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub quests: Vec<String>,
    /// Name of the loose augment item this option is extracted from, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub source_item: Option<String>,
}

/// Crafting options grouped by socket slot type, then by item name.
///
/// Options under the [`WILDCARD_ITEM`] key apply to any item exposing the
/// slot type; options under a specific item name apply only to that item.
#[derive(Debug, Clone, Default)]
pub struct CraftingCatalog {
    options: Vec<CraftingOption>,
    by_slot_type: HashMap<String, HashMap<String, Vec<CraftingOptionId>>>,
}

impl CraftingCatalog {
    /// Builds a catalog from (slot type, item name or `"*"`, option) rows,
    /// skipping options with an empty name.
    pub fn from_rows(
        rows: impl IntoIterator<Item = (String, String, CraftingOption)>,
    ) -> CraftingCatalog {
        let mut catalog = CraftingCatalog::default();
        for (slot_type, item_name, option) in rows {
            if option.name.is_empty() {
                tracing::warn!(slot_type = %slot_type, "skipping crafting option with empty name");
                continue;
            }
            let id = CraftingOptionId(catalog.options.len() as u32);
            catalog.options.push(option);
            catalog
                .by_slot_type
                .entry(slot_type)
                .or_default()
                .entry(item_name)
                .or_default()
                .push(id);
        }
        catalog
    }

    /// Returns the option for an id.
    #[inline]
    pub fn get(&self, id: CraftingOptionId) -> &CraftingOption {
        &self.options[id.index()]
    }

    /// Candidate options for one socket on one item.
    ///
    /// Wildcard and item-specific entries are merged: item-specific options
    /// extend the wildcard set, and on an option-name collision the
    /// item-specific entry replaces the wildcard one.
    pub fn candidates_for(&self, slot_type: &str, item_name: &str) -> Vec<CraftingOptionId> {
        let Some(group) = self.by_slot_type.get(slot_type) else {
            return Vec::new();
        };
        let mut merged: Vec<CraftingOptionId> = group
            .get(WILDCARD_ITEM)
            .map(|ids| ids.clone())
            .unwrap_or_default();
        if let Some(specific) = group.get(item_name) {
            for &id in specific {
                let name = &self.get(id).name;
                if let Some(slot) = merged
                    .iter()
                    .position(|&other| &self.get(other).name == name)
                {
                    merged[slot] = id;
                } else {
                    merged.push(id);
                }
            }
        }
        merged
    }

    /// Number of options in the catalog.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if the catalog holds no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// One piece-count threshold of an item set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetThreshold {
    /// Equipped pieces required for this threshold.
    pub pieces: u32,
    /// Bonus affixes granted once the threshold is met.
    pub affixes: Vec<Affix>,
}

/// A named item set with its bonus thresholds.
///
/// Thresholds are cumulative: every threshold at or below the equipped
/// piece count applies, and their bonus lists union.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSet {
    pub name: String,
    pub thresholds: Vec<SetThreshold>,
}

/// The set catalog, preserving declaration order for stable output.
#[derive(Debug, Clone, Default)]
pub struct SetCatalog {
    sets: Vec<ItemSet>,
    by_name: HashMap<String, usize>,
}

impl SetCatalog {
    /// Builds a catalog, skipping unnamed sets and non-positive thresholds.
    pub fn from_sets(sets: impl IntoIterator<Item = ItemSet>) -> SetCatalog {
        let mut catalog = SetCatalog::default();
        for mut set in sets {
            if set.name.is_empty() {
                tracing::warn!("skipping item set with empty name");
                continue;
            }
            if catalog.by_name.contains_key(&set.name) {
                tracing::warn!(name = %set.name, "skipping item set with duplicate name");
                continue;
            }
            set.thresholds.retain(|threshold| {
                if threshold.pieces == 0 {
                    tracing::warn!(set = %set.name, "skipping non-positive set threshold");
                    false
                } else {
                    true
                }
            });
            catalog.by_name.insert(set.name.clone(), catalog.sets.len());
            catalog.sets.push(set);
        }
        catalog
    }

    /// Parses a JSON catalog document (an array of sets) and builds a
    /// catalog from it. Same absent/malformed-document semantics as
    /// [`ItemCatalog::from_json`].
    #[cfg(feature = "serde")]
    pub fn from_json(document: &str) -> Result<SetCatalog> {
        let trimmed = document.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(GearForgeError::Catalog(
                "set catalog document is absent".to_owned(),
            ));
        }
        let sets: Vec<ItemSet> = serde_json::from_str(trimmed)
            .map_err(|err| GearForgeError::Catalog(err.to_string()))?;
        Ok(SetCatalog::from_sets(sets))
    }

    /// Looks a set up by name.
    pub fn by_name(&self, name: &str) -> Option<&ItemSet> {
        self.by_name.get(name).map(|&i| &self.sets[i])
    }

    /// Iterates sets in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemSet> {
        self.sets.iter()
    }

    /// Number of sets in the catalog.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if the catalog holds no sets.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// Caller-supplied exclusion lists.
///
/// The engine filters against these; it never persists or manages them.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exclusions {
    /// Excluded adventure-pack or quest names.
    #[cfg_attr(feature = "serde", serde(default))]
    pub packs: HashSet<String>,
    /// Excluded augment (crafting option) names.
    #[cfg_attr(feature = "serde", serde(default))]
    pub augments: HashSet<String>,
    /// Excluded item names.
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: HashSet<String>,
}

impl Exclusions {
    /// Returns true if nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty() && self.augments.is_empty() && self.items.is_empty()
    }

    /// Whether an item is barred by name or by its source quests.
    pub fn bars_item(&self, item: &Item) -> bool {
        self.items.contains(&item.name)
            || item.quests.iter().any(|quest| self.packs.contains(quest))
    }

    /// Whether a crafting option is barred by name, source item or source
    /// quests.
    pub fn bars_option(&self, option: &CraftingOption) -> bool {
        self.augments.contains(&option.name)
            || option
                .source_item
                .as_deref()
                .is_some_and(|source| self.items.contains(source))
            || option.quests.iter().any(|quest| self.packs.contains(quest))
    }
}
