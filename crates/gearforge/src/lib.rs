//! GearForge - a loadout optimizer for MMO gear planning
//!
//! One import gives the whole pipeline: catalogs in, ranked loadouts out.
//!
//! # Example
//!
//! ```rust
//! use gearforge::prelude::*;
//!
//! let items = ItemCatalog::default();
//! let options = OptimizeOptions::new(["Strength", "Dexterity", "Constitution"]);
//! let outcome = optimize_gear(&items, &SetCatalog::default(), &CraftingCatalog::default(), &options);
//! assert!(outcome.results().is_empty());
//! ```

// Data model
pub use gearforge_core::{
    weapon_pair_is_valid, Affix, AffixPool, AffixValue, CraftingCatalog, CraftingOption,
    CraftingOptionId, EquipmentSlot, Exclusions, GearForgeError, GearSetup, GearSlot, Item,
    ItemCatalog, ItemId, ItemSet, OffhandKind, PropertyScore, Result, SetCatalog, SetThreshold,
    WeaponStyle, WILDCARD_ITEM,
};

// Scoring a single loadout
pub use gearforge_scoring::{
    calculate_score, evaluate_active_sets, resolve_all_augments, resolve_best_augment, ActiveSet,
    CraftingSelections, ScoreContext, ScoreResult, SocketSelection,
};

// The search engine
pub use gearforge_solver::{
    optimize_gear, optimize_gear_with, AbortFlag, NoTermination, OptimizeOptions, OptimizeOutcome,
    OptimizedGearSetup, SearchStatistics, Termination, TopResults, MIN_PROPERTIES,
};

pub mod prelude {
    pub use super::{
        optimize_gear, optimize_gear_with, Affix, AffixValue, CraftingCatalog, EquipmentSlot,
        Exclusions, GearSetup, GearSlot, Item, ItemCatalog, ItemSet, OptimizeOptions,
        OptimizeOutcome, OptimizedGearSetup, PropertyScore, SetCatalog, SetThreshold,
    };
    pub use super::{AbortFlag, Termination};
}
