//! Meta-strategy running several algorithms concurrently.

use crate::strategies::PackingAlgorithm;
use boxpack_core::{Bin, CancelToken, Error, Goal, Item, PackResult, Result};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

/// Runs a set of packing algorithms concurrently and keeps the best
/// result according to a configurable [`Goal`].
///
/// Every algorithm receives its own deep copy of the inputs, so no bin
/// or item is ever shared between replicas. Results are reduced in
/// arrival order; because the goal treats near-equal candidates as
/// ties (a tie never replaces the incumbent), the first-arriving
/// member of a tie wins, and which replica that is can vary from run
/// to run.
///
/// ```
/// use boxpack_solver::{ParallelStrategy, Strategy};
/// use boxpack_core::Goal;
/// use std::sync::Arc;
///
/// let strategy = ParallelStrategy::new()
///     .with_algorithm(Arc::new(Strategy::MinimizeBins))
///     .with_algorithm(Arc::new(Strategy::BestFit))
///     .with_goal(Goal::tightest_packing());
/// ```
pub struct ParallelStrategy {
    algorithms: Vec<Arc<dyn PackingAlgorithm>>,
    goal: Goal,
}

impl ParallelStrategy {
    /// Creates a meta-strategy with no algorithms and the
    /// [`Goal::minimize_bins`] comparator.
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
            goal: Goal::minimize_bins(),
        }
    }

    /// Appends one algorithm to the execution list.
    pub fn with_algorithm(mut self, algorithm: Arc<dyn PackingAlgorithm>) -> Self {
        self.algorithms.push(algorithm);
        self
    }

    /// Appends several algorithms to the execution list.
    pub fn with_algorithms<I>(mut self, algorithms: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn PackingAlgorithm>>,
    {
        self.algorithms.extend(algorithms);
        self
    }

    /// Sets the comparator used to pick the winner.
    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = goal;
        self
    }
}

impl Default for ParallelStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl PackingAlgorithm for ParallelStrategy {
    fn name(&self) -> &str {
        "Parallel"
    }

    fn pack(&self, cancel: &CancelToken, bins: Vec<Bin>, items: Vec<Item>) -> Result<PackResult> {
        if self.algorithms.is_empty() {
            return Ok(PackResult::new(Vec::new(), items));
        }

        // Bounded to the replica count: every producer can publish
        // without blocking even if the reducer lags.
        let (sender, receiver) = mpsc::sync_channel(self.algorithms.len());

        let best = thread::scope(|scope| {
            for algorithm in &self.algorithms {
                let algorithm = Arc::clone(algorithm);
                let sender = sender.clone();
                let cancel = cancel.clone();
                let bins = bins.clone();
                let items = items.clone();

                scope.spawn(move || {
                    if cancel.is_cancelled() {
                        return;
                    }

                    match algorithm.pack(&cancel, bins, items) {
                        Ok(result) => {
                            log::debug!(
                                "{}: {} packed, {} unfit",
                                algorithm.name(),
                                result.packed_count(),
                                result.unfit_count()
                            );
                            let _ = sender.send(result);
                        }
                        Err(error) => {
                            log::debug!("{}: produced no result: {error}", algorithm.name());
                        }
                    }
                });
            }
            drop(sender);

            let mut best: Option<PackResult> = None;
            for candidate in receiver {
                if self.goal.prefers(&candidate, best.as_ref()) {
                    best = Some(candidate);
                }
            }
            best
        });

        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        match best {
            Some(result) => Ok(result),
            None => {
                log::warn!("no strategy produced a result; reporting all items unfit");
                Ok(PackResult::new(Vec::new(), items))
            }
        }
    }
}
