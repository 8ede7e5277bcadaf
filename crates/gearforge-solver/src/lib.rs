//! GearForge Solver Engine
//!
//! This crate provides the combinatorial loadout search:
//! - Per-slot candidate grouping with a relevance/dominance prefilter
//! - Fighting-style validation of weapon/offhand pairs
//! - Depth-first branch-and-bound over the per-slot Cartesian product
//! - Bounded, deterministic top-N collection
//! - Cooperative cancellation and optional rayon parallelism
//!
//! The engine is a stateless pure function of its catalog snapshots: no
//! shared mutable search state survives a call, and repeated calls with
//! identical inputs return identical ordered results.

mod bound;
mod candidates;
pub mod collector;
pub mod search;
pub mod termination;

#[cfg(test)]
mod collector_tests;
#[cfg(test)]
mod search_tests;

pub use collector::{OptimizedGearSetup, TopResults};
pub use search::{
    optimize_gear, optimize_gear_with, OptimizeOptions, OptimizeOutcome, SearchStatistics,
    MIN_PROPERTIES,
};
pub use termination::{AbortFlag, NoTermination, Termination};
