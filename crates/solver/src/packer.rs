//! The packer facade.

use crate::strategies::{PackingAlgorithm, Strategy};
use boxpack_core::{Bin, CancelToken, Error, Item, PackResult, Result};
use std::sync::Arc;

/// Packs items into bins using a configurable algorithm.
///
/// The packer deep-copies its inputs on entry, so the caller's bins
/// and items are never mutated and a single packer may be used from
/// several threads at once.
///
/// ```
/// use boxpack_solver::{Packer, Strategy};
/// use boxpack_core::{Bin, Item};
///
/// let bins = vec![Bin::new("small", 10.0, 10.0, 10.0, 100.0)];
/// let items = vec![Item::new("cube", 4.0, 4.0, 4.0, 1.0)];
///
/// let packer = Packer::new().with_strategy(Strategy::BestFit);
/// let result = packer.pack(&bins, &items);
/// assert!(result.all_packed());
/// ```
pub struct Packer {
    algorithm: Arc<dyn PackingAlgorithm>,
}

impl Packer {
    /// Creates a packer with the default strategy,
    /// [`Strategy::MinimizeBins`].
    pub fn new() -> Self {
        Self {
            algorithm: Arc::new(Strategy::default()),
        }
    }

    /// Selects one of the built-in strategies.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.algorithm = Arc::new(strategy);
        self
    }

    /// Installs a custom algorithm, such as a
    /// [`ParallelStrategy`](crate::ParallelStrategy) or a user-supplied
    /// implementation.
    pub fn with_algorithm(mut self, algorithm: Arc<dyn PackingAlgorithm>) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Packs `items` into `bins`.
    ///
    /// This form cannot be cancelled and cannot fail: items that fit
    /// nowhere are reported in the result's unfit list.
    pub fn pack(&self, bins: &[Bin], items: &[Item]) -> PackResult {
        // A fresh token never fires, so the run cannot be cancelled and
        // the fallback arm is unreachable.
        match self.pack_ctx(&CancelToken::new(), bins, items) {
            Ok(result) => result,
            Err(_) => PackResult::new(Vec::new(), items.to_vec()),
        }
    }

    /// Packs `items` into `bins` under a cancellation signal.
    ///
    /// Returns [`Error::Cancelled`] when `cancel` fires before the run
    /// completes; any partially constructed result is discarded.
    pub fn pack_ctx(
        &self,
        cancel: &CancelToken,
        bins: &[Bin],
        items: &[Item],
    ) -> Result<PackResult> {
        let result = self.algorithm.pack(cancel, bins.to_vec(), items.to_vec())?;

        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        Ok(result)
    }
}

impl Default for Packer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_strategy_packs() {
        let packer = Packer::new();
        let bins = vec![Bin::new("b1", 10.0, 10.0, 10.0, 100.0)];
        let items = vec![Item::new("i1", 4.0, 4.0, 4.0, 1.0)];

        let result = packer.pack(&bins, &items);
        assert!(result.all_packed());
        assert_eq!(result.packed_count(), 1);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let packer = Packer::new();
        let bins = vec![
            Bin::new("b1", 10.0, 10.0, 10.0, 100.0),
            Bin::new("b2", 20.0, 20.0, 20.0, 100.0),
        ];
        let items = vec![Item::new("i1", 4.0, 4.0, 4.0, 1.0)];

        let _ = packer.pack(&bins, &items);

        assert!(bins.iter().all(|bin| bin.items().is_empty()));
        assert_eq!(bins[0].id(), "b1");
        assert_eq!(items[0].rotation(), boxpack_core::Rotation::Whd);
        assert_eq!(items[0].pivot(), boxpack_core::Pivot::zeros());
    }

    #[test]
    fn test_pack_ctx_cancelled_token_is_an_error() {
        let cancel = CancelToken::new();
        cancel.cancel();

        let packer = Packer::new();
        let bins = vec![Bin::new("b1", 10.0, 10.0, 10.0, 100.0)];
        let items = vec![Item::new("i1", 4.0, 4.0, 4.0, 1.0)];

        let outcome = packer.pack_ctx(&cancel, &bins, &items);
        assert_eq!(outcome.unwrap_err(), Error::Cancelled);
    }

    #[test]
    fn test_pack_ctx_without_cancellation_succeeds() {
        let packer = Packer::new().with_strategy(Strategy::Greedy);
        let bins = vec![Bin::new("b1", 10.0, 10.0, 10.0, 100.0)];
        let items = vec![Item::new("i1", 4.0, 4.0, 4.0, 1.0)];

        let result = packer.pack_ctx(&CancelToken::new(), &bins, &items).unwrap();
        assert!(result.all_packed());
    }

    #[test]
    fn test_with_algorithm_installs_custom_algorithm() {
        struct RejectEverything;

        impl PackingAlgorithm for RejectEverything {
            fn name(&self) -> &str {
                "RejectEverything"
            }

            fn pack(
                &self,
                _cancel: &CancelToken,
                _bins: Vec<Bin>,
                items: Vec<Item>,
            ) -> Result<PackResult> {
                Ok(PackResult::new(Vec::new(), items))
            }
        }

        let packer = Packer::new().with_algorithm(Arc::new(RejectEverything));
        let bins = vec![Bin::new("b1", 10.0, 10.0, 10.0, 100.0)];
        let items = vec![Item::new("i1", 1.0, 1.0, 1.0, 1.0)];

        let result = packer.pack(&bins, &items);
        assert_eq!(result.unfit_count(), 1);
    }
}
