//! Shared test fixtures for GearForge crates.
//!
//! This crate provides small catalogs and item builders for testing. It
//! depends only on `gearforge-core` so both the scoring and solver crates
//! can use it as a dev-dependency.
//!
//! - [`builders`] - item, affix and catalog construction helpers
//! - [`catalogs`] - ready-made scenario catalogs (rings, sets, augments)

pub mod builders;
pub mod catalogs;

pub use builders::{ring, statted_item, wildcard_option};
pub use catalogs::{
    guardian_pieces, guardian_set_catalog, red_augment_rows, rings_catalog, standard_properties,
};
