//! Error types for GearForge
//!
//! Pure computation functions degrade gracefully on bad data instead of
//! failing; errors are reserved for boundary conditions such as an absent
//! or unparseable catalog document.

use thiserror::Error;

/// Main error type for GearForge operations
#[derive(Debug, Error)]
pub enum GearForgeError {
    /// A catalog document is absent or structurally malformed as a whole,
    /// as opposed to containing individual bad records (those are skipped).
    #[error("catalog error: {0}")]
    Catalog(String),
}

/// Result type alias for GearForge operations
pub type Result<T> = std::result::Result<T, GearForgeError>;
