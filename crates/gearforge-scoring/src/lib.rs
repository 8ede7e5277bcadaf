//! GearForge Scoring
//!
//! This crate turns one candidate loadout into a ranked score:
//! - [`augment`] - picks the best crafting option per augment socket
//! - [`set_bonus`] - evaluates which item-set thresholds are met
//! - [`scorer`] - combines base, augment and set affixes into a
//!   [`ScoreResult`] with the ordered-tuple ranking score

pub mod augment;
pub mod scorer;
pub mod set_bonus;


pub use augment::{
    resolve_all_augments, resolve_best_augment, CraftingSelections, SocketSelection,
};
pub use scorer::{calculate_score, ScoreContext, ScoreResult};
pub use set_bonus::{evaluate_active_sets, ActiveSet};
