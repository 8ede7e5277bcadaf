//! Bounded top-N collection with deterministic ordering.

use gearforge_core::{GearSetup, ItemCatalog, PropertyScore};
use gearforge_scoring::ScoreResult;

/// One surviving candidate: the setup plus its full scoring record.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedGearSetup {
    pub setup: GearSetup,
    pub result: ScoreResult,
}

impl OptimizedGearSetup {
    /// The authoritative ranking score.
    pub fn score(&self) -> &PropertyScore {
        &self.result.score
    }
}

struct RankedEntry {
    candidate: OptimizedGearSetup,
    /// Item names per position, the deterministic tie-break among equal
    /// scores.
    key: Vec<String>,
}

/// A bounded best-first list ordered by the ordered-tuple rule, with ties
/// broken by the canonical item-name key. Structurally identical setups
/// are kept once.
pub struct TopResults {
    capacity: usize,
    entries: Vec<RankedEntry>,
}

impl TopResults {
    /// Creates a collector retaining at most `capacity` candidates.
    pub fn new(capacity: usize) -> TopResults {
        TopResults {
            capacity,
            entries: Vec::with_capacity(capacity.saturating_add(1)),
        }
    }

    /// Number of retained candidates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been retained yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The score of the Nth-best (worst retained) candidate, only once the
    /// collector is full. Pruning compares against this.
    pub fn cutoff(&self) -> Option<&PropertyScore> {
        if self.entries.len() < self.capacity {
            None
        } else {
            self.entries.last().map(|entry| entry.candidate.score())
        }
    }

    /// Offers a candidate; keeps it if it ranks within the top N.
    pub fn offer(&mut self, candidate: OptimizedGearSetup, catalog: &ItemCatalog) {
        if self.capacity == 0 {
            return;
        }
        if self
            .entries
            .iter()
            .any(|entry| entry.candidate.setup == candidate.setup)
        {
            return;
        }
        let key = candidate.setup.canonical_key(catalog);
        let position = self
            .entries
            .partition_point(|entry| ranks_before(entry, candidate.score(), &key));
        if position == self.capacity {
            return;
        }
        self.entries.insert(position, RankedEntry { candidate, key });
        self.entries.truncate(self.capacity);
    }

    /// Merges another collector into this one (used by parallel workers).
    pub fn merge(&mut self, other: TopResults, catalog: &ItemCatalog) {
        for entry in other.entries {
            self.offer(entry.candidate, catalog);
        }
    }

    /// Consumes the collector, yielding candidates best-first.
    pub fn into_sorted_vec(self) -> Vec<OptimizedGearSetup> {
        self.entries.into_iter().map(|entry| entry.candidate).collect()
    }
}

fn ranks_before(entry: &RankedEntry, score: &PropertyScore, key: &[String]) -> bool {
    match entry.candidate.score().cmp(score) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => entry.key.as_slice() < key,
    }
}
