//! The search engine: depth-first branch-and-bound over gear positions.

use std::time::{Duration, Instant};

use rayon::prelude::*;

use gearforge_core::{
    CraftingCatalog, Exclusions, GearSetup, ItemCatalog, PropertyScore, SetCatalog,
};
use gearforge_scoring::{calculate_score, ScoreContext};

use crate::candidates::{build_search_space, SearchSpace};
use crate::collector::{OptimizedGearSetup, TopResults};
use crate::termination::{NoTermination, Termination};

/// The engine refuses to rank with fewer target properties than this.
pub const MIN_PROPERTIES: usize = 3;

/// Caller options for one search.
#[derive(Debug, Clone, Default)]
pub struct OptimizeOptions {
    /// Target properties in priority order; at least [`MIN_PROPERTIES`].
    pub properties: Vec<String>,
    /// Candidates to retain.
    pub max_results: usize,
    /// Skip set bonuses when scoring ("raw gear only").
    pub exclude_set_bonuses: bool,
    /// Exclusion lists supplied by the caller.
    pub exclusions: Exclusions,
    /// Shard the top-level decision across rayon workers. Purely a
    /// throughput option; results are identical to a serial search.
    pub parallel: bool,
}

impl OptimizeOptions {
    /// Options with the given target properties and a default result cap
    /// of 10.
    pub fn new<I, S>(properties: I) -> OptimizeOptions
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OptimizeOptions {
            properties: properties.into_iter().map(Into::into).collect(),
            max_results: 10,
            ..OptimizeOptions::default()
        }
    }

    /// Sets the number of candidates to retain.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Sets the exclusion lists.
    pub fn with_exclusions(mut self, exclusions: Exclusions) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Skips set bonuses when scoring.
    pub fn without_set_bonuses(mut self) -> Self {
        self.exclude_set_bonuses = true;
        self
    }

    /// Enables parallel search.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Counters and timing for one search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Interior nodes whose choices were enumerated.
    pub nodes_expanded: u64,
    /// Branches abandoned because their optimistic bound could not beat
    /// the Nth-best candidate.
    pub branches_pruned: u64,
    /// Complete setups scored.
    pub candidates_scored: u64,
    /// Wall-clock time of the search.
    pub duration: Duration,
}

impl SearchStatistics {
    fn absorb(&mut self, other: &SearchStatistics) {
        self.nodes_expanded += other.nodes_expanded;
        self.branches_pruned += other.branches_pruned;
        self.candidates_scored += other.candidates_scored;
    }
}

/// The result of one search call.
///
/// `InsufficientProperties` is the "not enough input yet" state a caller
/// mid-selection commonly produces; it is a variant rather than an error
/// so the hot path stays exception-free.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizeOutcome {
    /// Fewer than [`MIN_PROPERTIES`] target properties were supplied.
    InsufficientProperties,
    /// The search ran to completion.
    Complete {
        results: Vec<OptimizedGearSetup>,
        statistics: SearchStatistics,
    },
    /// The search was cancelled; `results` holds the best candidates
    /// found before the abort.
    Cancelled {
        results: Vec<OptimizedGearSetup>,
        statistics: SearchStatistics,
    },
}

impl OptimizeOutcome {
    /// The ranked results (empty for `InsufficientProperties`).
    pub fn results(&self) -> &[OptimizedGearSetup] {
        match self {
            OptimizeOutcome::InsufficientProperties => &[],
            OptimizeOutcome::Complete { results, .. }
            | OptimizeOutcome::Cancelled { results, .. } => results,
        }
    }

    /// Consumes the outcome, yielding the ranked results.
    pub fn into_results(self) -> Vec<OptimizedGearSetup> {
        match self {
            OptimizeOutcome::InsufficientProperties => Vec::new(),
            OptimizeOutcome::Complete { results, .. }
            | OptimizeOutcome::Cancelled { results, .. } => results,
        }
    }

    /// Whether the search was cancelled before completion.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, OptimizeOutcome::Cancelled { .. })
    }

    /// The run statistics, when a search actually ran.
    pub fn statistics(&self) -> Option<&SearchStatistics> {
        match self {
            OptimizeOutcome::InsufficientProperties => None,
            OptimizeOutcome::Complete { statistics, .. }
            | OptimizeOutcome::Cancelled { statistics, .. } => Some(statistics),
        }
    }
}

/// Runs a search with no external termination.
pub fn optimize_gear(
    items: &ItemCatalog,
    sets: &SetCatalog,
    crafting: &CraftingCatalog,
    options: &OptimizeOptions,
) -> OptimizeOutcome {
    optimize_gear_with(items, sets, crafting, options, &NoTermination)
}

/// Runs a search, checking `termination` at every branch expansion.
pub fn optimize_gear_with(
    items: &ItemCatalog,
    sets: &SetCatalog,
    crafting: &CraftingCatalog,
    options: &OptimizeOptions,
    termination: &dyn Termination,
) -> OptimizeOutcome {
    let started = Instant::now();
    if options.properties.len() < MIN_PROPERTIES {
        return OptimizeOutcome::InsufficientProperties;
    }
    if items.is_empty() {
        return OptimizeOutcome::Complete {
            results: Vec::new(),
            statistics: SearchStatistics {
                duration: started.elapsed(),
                ..SearchStatistics::default()
            },
        };
    }

    let ctx = ScoreContext {
        items,
        sets,
        crafting,
        exclusions: &options.exclusions,
        targets: &options.properties,
        exclude_set_bonuses: options.exclude_set_bonuses,
    };
    let space = build_search_space(&ctx);
    let suffix = suffix_bounds(&space, ctx.targets.len());

    let (collector, mut statistics, cancelled) = if options.parallel {
        run_parallel(&ctx, &space, &suffix, options.max_results, termination)
    } else {
        let mut worker = Worker::new(&ctx, &space, &suffix, options.max_results, termination);
        let zero = vec![0.0; ctx.targets.len()];
        worker.descend(0, &GearSetup::empty(), &zero);
        (worker.collector, worker.statistics, worker.cancelled)
    };

    statistics.duration = started.elapsed();
    let results = collector.into_sorted_vec();
    tracing::info!(
        results = results.len(),
        nodes = statistics.nodes_expanded,
        pruned = statistics.branches_pruned,
        scored = statistics.candidates_scored,
        elapsed_ms = statistics.duration.as_millis() as u64,
        cancelled,
        "gear search finished"
    );
    if cancelled {
        OptimizeOutcome::Cancelled {
            results,
            statistics,
        }
    } else {
        OptimizeOutcome::Complete {
            results,
            statistics,
        }
    }
}

/// `suffix[d][p]`: optimistic contribution of decisions `d..` to property
/// `p`. The last row is all zeros.
fn suffix_bounds(space: &SearchSpace, property_count: usize) -> Vec<Vec<f64>> {
    let mut suffix = vec![vec![0.0; property_count]; space.decisions.len() + 1];
    for d in (0..space.decisions.len()).rev() {
        for p in 0..property_count {
            suffix[d][p] = space.decisions[d].upper[p] + suffix[d + 1][p];
        }
    }
    suffix
}

fn run_parallel(
    ctx: &ScoreContext<'_>,
    space: &SearchSpace,
    suffix: &[Vec<f64>],
    max_results: usize,
    termination: &dyn Termination,
) -> (TopResults, SearchStatistics, bool) {
    let shards: Vec<(TopResults, SearchStatistics, bool)> = space.decisions[0]
        .choices
        .par_iter()
        .map(|choice| {
            let mut worker = Worker::new(ctx, space, suffix, max_results, termination);
            let mut setup = GearSetup::empty();
            for &(slot, id) in &choice.assignments {
                setup = setup.with(slot, Some(id));
            }
            worker.descend(1, &setup, &choice.upper);
            (worker.collector, worker.statistics, worker.cancelled)
        })
        .collect();

    let mut collector = TopResults::new(max_results);
    let mut statistics = SearchStatistics::default();
    let mut cancelled = false;
    for (shard, shard_stats, shard_cancelled) in shards {
        collector.merge(shard, ctx.items);
        statistics.absorb(&shard_stats);
        cancelled |= shard_cancelled;
    }
    (collector, statistics, cancelled)
}

struct Worker<'a> {
    ctx: &'a ScoreContext<'a>,
    space: &'a SearchSpace,
    suffix: &'a [Vec<f64>],
    termination: &'a dyn Termination,
    collector: TopResults,
    statistics: SearchStatistics,
    cancelled: bool,
}

impl<'a> Worker<'a> {
    fn new(
        ctx: &'a ScoreContext<'a>,
        space: &'a SearchSpace,
        suffix: &'a [Vec<f64>],
        max_results: usize,
        termination: &'a dyn Termination,
    ) -> Worker<'a> {
        Worker {
            ctx,
            space,
            suffix,
            termination,
            collector: TopResults::new(max_results),
            statistics: SearchStatistics::default(),
            cancelled: false,
        }
    }

    fn descend(&mut self, depth: usize, setup: &GearSetup, partial: &[f64]) {
        if self.cancelled {
            return;
        }
        if self.termination.is_terminated() {
            self.cancelled = true;
            return;
        }
        if self.should_prune(depth, partial) {
            self.statistics.branches_pruned += 1;
            return;
        }
        if depth == self.space.decisions.len() {
            self.statistics.candidates_scored += 1;
            let result = calculate_score(self.ctx, setup, None);
            self.collector.offer(
                OptimizedGearSetup {
                    setup: setup.clone(),
                    result,
                },
                self.ctx.items,
            );
            return;
        }

        self.statistics.nodes_expanded += 1;
        for choice in &self.space.decisions[depth].choices {
            let mut child = setup.clone();
            for &(slot, id) in &choice.assignments {
                child = child.with(slot, Some(id));
            }
            let child_partial: Vec<f64> = partial
                .iter()
                .zip(choice.upper.iter())
                .map(|(a, b)| a + b)
                .collect();
            self.descend(depth + 1, &child, &child_partial);
            if self.cancelled {
                return;
            }
        }
    }

    /// A branch is abandoned only when its optimistic completion bound is
    /// strictly below the Nth-best score; equal bounds may still tie and
    /// win on the canonical key, so they are kept.
    fn should_prune(&self, depth: usize, partial: &[f64]) -> bool {
        let Some(cutoff) = self.collector.cutoff() else {
            return false;
        };
        let bound: Vec<f64> = partial
            .iter()
            .enumerate()
            .map(|(p, value)| value + self.suffix[depth][p] + self.space.set_upper[p])
            .collect();
        PropertyScore::from_values(&bound) < *cutoff
    }
}
