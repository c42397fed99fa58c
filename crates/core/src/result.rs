//! Packing result representation.

use crate::bin::Bin;
use crate::item::Item;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a packing run.
///
/// Holds every bin handed to the strategy, including the ones that
/// ended up empty (callers filter by contents), plus the items no
/// placement attempt could fit. The result owns its bins and items
/// outright; the caller's inputs are never aliased.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackResult {
    /// Bins in the order the strategy walked them.
    pub bins: Vec<Bin>,

    /// Items that did not fit anywhere under the chosen strategy.
    pub unfit_items: Vec<Item>,
}

impl PackResult {
    /// Creates a result from its parts.
    pub fn new(bins: Vec<Bin>, unfit_items: Vec<Item>) -> Self {
        Self { bins, unfit_items }
    }

    /// Returns true if every input item was placed.
    pub fn all_packed(&self) -> bool {
        self.unfit_items.is_empty()
    }

    /// Returns the number of placed items across all bins.
    pub fn packed_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.items().len()).sum()
    }

    /// Returns the number of unfit items.
    pub fn unfit_count(&self) -> usize {
        self.unfit_items.len()
    }

    /// Iterates over the bins that contain at least one item.
    pub fn used_bins(&self) -> impl Iterator<Item = &Bin> {
        self.bins.iter().filter(|bin| !bin.items().is_empty())
    }
}
