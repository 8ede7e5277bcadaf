//! Score types for ranking candidate loadouts.

mod property;


pub use property::PropertyScore;
