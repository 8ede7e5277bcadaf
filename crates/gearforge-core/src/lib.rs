//! GearForge Core - data model and score types for the loadout optimizer
//!
//! This crate provides the fundamental types shared by the GearForge crates:
//! - Affixes and the stacking rules that combine them into property totals
//! - Items, equipment slots and fighting-style classification
//! - Catalogs (items, crafting options, item sets) and exclusion lists
//! - Gear setups (one candidate loadout) and the ordered-tuple ranking score

pub mod affix;
pub mod catalog;
pub mod error;
pub mod item;
pub mod score;
pub mod setup;

#[cfg(test)]
mod item_tests;

pub use affix::{Affix, AffixPool, AffixValue};
pub use catalog::{
    CraftingCatalog, CraftingOption, CraftingOptionId, Exclusions, ItemCatalog, ItemSet,
    SetCatalog, SetThreshold, WILDCARD_ITEM,
};
pub use error::{GearForgeError, Result};
pub use item::{weapon_pair_is_valid, EquipmentSlot, GearSlot, Item, OffhandKind, WeaponStyle};
pub use score::PropertyScore;
pub use setup::{GearSetup, ItemId};
