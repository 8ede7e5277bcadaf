//! Cooperative termination of a running search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Checked at each branch expansion; a search stops early and reports a
/// cancelled outcome once this returns true.
pub trait Termination: Send + Sync {
    fn is_terminated(&self) -> bool;
}

/// Never terminates; the default for plain calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    fn is_terminated(&self) -> bool {
        false
    }
}

/// A shared abort flag.
///
/// Clone it, hand one clone to the search and keep the other; calling
/// [`AbortFlag::abort`] from any thread stops the search at its next
/// branch expansion.
///
/// # Example
///
/// ```
/// use gearforge_solver::termination::{AbortFlag, Termination};
///
/// let flag = AbortFlag::new();
/// let handle = flag.clone();
/// handle.abort();
/// assert!(flag.is_terminated());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AbortFlag {
    flag: Arc<AtomicBool>,
}

impl AbortFlag {
    /// Creates an unset flag.
    pub fn new() -> AbortFlag {
        AbortFlag::default()
    }

    /// Requests termination.
    pub fn abort(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}

impl Termination for AbortFlag {
    fn is_terminated(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
