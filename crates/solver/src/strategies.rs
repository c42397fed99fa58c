//! Built-in packing strategies.
//!
//! Every driver shares the same pipeline: sort the bins by volume
//! ascending, sort the items by the strategy's own order, promote a
//! preferred bin that could hold the whole load, then walk bins and
//! items under the strategy's discipline. Leftovers become the unfit
//! list of the result.

use crate::engine::{candidate_pivots, fit_item, pack_into_bin};
use boxpack_core::{Bin, CancelToken, Item, PackResult, Pivot, Result};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fit is perfect once the bin's remaining volume drops below this.
const PERFECT_FIT_THRESHOLD: f64 = 0.01;

/// AlmostWorstFit skips bins with more than this share of their
/// capacity still free.
const NEARLY_EMPTY_RATIO: f64 = 0.8;

/// A packing algorithm: the shape the parallel meta-strategy consumes,
/// and the escape hatch for user-supplied strategies.
///
/// Implementations own their `bins` and `items` arguments outright;
/// the [`Packer`](crate::Packer) facade hands every call its own deep
/// copy, so algorithms are free to sort, mutate and move them.
pub trait PackingAlgorithm: Send + Sync {
    /// Identifier used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Packs `items` into `bins` and reports what did not fit.
    fn pack(&self, cancel: &CancelToken, bins: Vec<Bin>, items: Vec<Item>) -> Result<PackResult>;
}

/// The built-in packing heuristics, as a closed set of variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// First-Fit over volume-descending items (First-Fit-Decreasing).
    /// The default.
    #[default]
    MinimizeBins,
    /// First-Fit over volume-ascending items.
    Greedy,
    /// Per item, the bin left with the least remaining volume.
    BestFit,
    /// BestFit over volume-descending items.
    BestFitDecreasing,
    /// A single advancing cursor over the bin list; bins left behind
    /// are never revisited.
    NextFit,
    /// Per item, the bin left with the most remaining volume.
    WorstFit,
    /// WorstFit that avoids nearly empty bins, falling back to plain
    /// WorstFit when that filter rejects every bin.
    AlmostWorstFit,
}

impl Strategy {
    /// All built-in strategies.
    pub const ALL: [Strategy; 7] = [
        Strategy::MinimizeBins,
        Strategy::Greedy,
        Strategy::BestFit,
        Strategy::BestFitDecreasing,
        Strategy::NextFit,
        Strategy::WorstFit,
        Strategy::AlmostWorstFit,
    ];

    /// Returns the strategy's display name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::MinimizeBins => "MinimizeBins",
            Strategy::Greedy => "Greedy",
            Strategy::BestFit => "BestFit",
            Strategy::BestFitDecreasing => "BestFitDecreasing",
            Strategy::NextFit => "NextFit",
            Strategy::WorstFit => "WorstFit",
            Strategy::AlmostWorstFit => "AlmostWorstFit",
        }
    }
}

impl PackingAlgorithm for Strategy {
    fn name(&self) -> &str {
        Strategy::name(self)
    }

    fn pack(&self, cancel: &CancelToken, bins: Vec<Bin>, mut items: Vec<Item>) -> Result<PackResult> {
        match self {
            Strategy::MinimizeBins => {
                sort_by_volume_descending(&mut items);
                run_first_fit(cancel, bins, items)
            }
            Strategy::Greedy => {
                sort_by_volume_ascending(&mut items);
                run_first_fit(cancel, bins, items)
            }
            Strategy::BestFit => {
                sort_by_volume_ascending(&mut items);
                run_best_fit(cancel, bins, items)
            }
            Strategy::BestFitDecreasing => {
                sort_by_volume_descending(&mut items);
                run_best_fit(cancel, bins, items)
            }
            Strategy::NextFit => {
                sort_by_volume_ascending(&mut items);
                run_next_fit(cancel, bins, items)
            }
            Strategy::WorstFit => {
                sort_by_volume_ascending(&mut items);
                run_worst_fit(cancel, bins, items, false)
            }
            Strategy::AlmostWorstFit => {
                sort_by_volume_ascending(&mut items);
                run_worst_fit(cancel, bins, items, true)
            }
        }
    }
}

/// Stable ascending sort by item volume.
fn sort_by_volume_ascending(items: &mut [Item]) {
    items.sort_by(|a, b| a.volume().partial_cmp(&b.volume()).unwrap_or(Ordering::Equal));
}

/// Stable descending sort by item volume.
fn sort_by_volume_descending(items: &mut [Item]) {
    items.sort_by(|a, b| b.volume().partial_cmp(&a.volume()).unwrap_or(Ordering::Equal));
}

/// Sorts bins ascending by volume and promotes the preferred bin.
fn prepare_bins(mut bins: Vec<Bin>, items: &[Item]) -> Vec<Bin> {
    bins.sort_by(|a, b| a.volume().partial_cmp(&b.volume()).unwrap_or(Ordering::Equal));
    preferred_sort(bins, items)
}

/// Promotes the first bin, in volume order, whose capacity, weight
/// limit and longest side cover the whole item set. When one exists it
/// moves to the front with the relative order of the rest preserved,
/// biasing strategies toward a single container when that is feasible.
fn preferred_sort(mut bins: Vec<Bin>, items: &[Item]) -> Vec<Bin> {
    let mut volume = 0.0;
    let mut weight = 0.0;
    let mut max_length = 0.0_f64;

    for item in items {
        volume += item.volume();
        weight += item.weight();
        max_length = max_length.max(item.max_length());
    }

    let preferred = bins.iter().position(|bin| {
        bin.volume() >= volume && bin.max_weight() >= weight && bin.max_length() >= max_length
    });

    if let Some(index) = preferred {
        let bin = bins.remove(index);
        bins.insert(0, bin);
    }

    bins
}

/// First-Fit: walk the bins in order and pack as much as possible into
/// each before moving on.
fn run_first_fit(cancel: &CancelToken, bins: Vec<Bin>, items: Vec<Item>) -> Result<PackResult> {
    let mut bins = prepare_bins(bins, &items);
    let mut remaining = items;

    for bin in &mut bins {
        if remaining.is_empty() || cancel.is_cancelled() {
            break;
        }

        remaining = pack_into_bin(cancel, bin, remaining);
    }

    Ok(PackResult::new(bins, remaining))
}

/// Probes a bin for the first admissible candidate pivot and returns
/// it together with the bin's remaining volume after the placement.
/// The bin itself is untouched; the probe runs on a clone.
fn evaluate_bin(bin: &Bin, item: &Item) -> Option<(Pivot, f64)> {
    for pivot in candidate_pivots(bin) {
        let mut probe = bin.clone();
        if probe.put_item(item, pivot) {
            return Some((pivot, probe.remaining_volume()));
        }
    }

    None
}

/// The bin minimizing remaining volume after placement, among the bins
/// that admit the item at all. Stops early on a perfect fit.
fn find_best_bin(bins: &[Bin], item: &Item) -> Option<(usize, Pivot)> {
    let mut best: Option<(usize, Pivot, f64)> = None;

    for (index, bin) in bins.iter().enumerate() {
        if !bin.can_hold(item) {
            continue;
        }

        let Some((pivot, remaining)) = evaluate_bin(bin, item) else {
            continue;
        };

        if best.map_or(true, |(_, _, r)| remaining < r) {
            best = Some((index, pivot, remaining));
            if remaining < PERFECT_FIT_THRESHOLD {
                break;
            }
        }
    }

    best.map(|(index, pivot, _)| (index, pivot))
}

/// BestFit: each item goes to the bin that it fills tightest.
fn run_best_fit(cancel: &CancelToken, bins: Vec<Bin>, items: Vec<Item>) -> Result<PackResult> {
    let mut bins = prepare_bins(bins, &items);
    let mut unfit = Vec::with_capacity(items.len());
    let mut items = items.into_iter();

    while let Some(item) = items.next() {
        if cancel.is_cancelled() {
            unfit.push(item);
            unfit.extend(items);
            break;
        }

        match find_best_bin(&bins, &item) {
            Some((index, pivot)) => {
                bins[index].put_item(&item, pivot);
            }
            None => unfit.push(item),
        }
    }

    Ok(PackResult::new(bins, unfit))
}

/// NextFit: keep a cursor into the bin list. An item that fails the
/// current bin pushes the cursor forward, and bins behind the cursor
/// are never revisited.
fn run_next_fit(cancel: &CancelToken, bins: Vec<Bin>, items: Vec<Item>) -> Result<PackResult> {
    let mut bins = prepare_bins(bins, &items);
    let mut unfit = Vec::with_capacity(items.len());
    let mut cursor = 0_usize;
    let mut items = items.into_iter();

    while let Some(item) = items.next() {
        if cancel.is_cancelled() {
            unfit.push(item);
            unfit.extend(items);
            break;
        }

        let mut fitted = false;

        if cursor < bins.len() {
            if fit_item(&mut bins[cursor], &item) {
                fitted = true;
            } else {
                cursor += 1;
            }
        }

        if !fitted {
            for index in cursor..bins.len() {
                if fit_item(&mut bins[index], &item) {
                    cursor = index;
                    fitted = true;
                    break;
                }
            }
        }

        if !fitted {
            unfit.push(item);
        }
    }

    Ok(PackResult::new(bins, unfit))
}

/// The bin maximizing remaining volume after placement. With
/// `skip_nearly_empty`, bins that still have more than 80 percent of
/// their capacity free are not considered.
fn find_worst_bin(bins: &[Bin], item: &Item, skip_nearly_empty: bool) -> Option<(usize, Pivot)> {
    let mut worst: Option<(usize, Pivot, f64)> = None;

    for (index, bin) in bins.iter().enumerate() {
        if !bin.can_hold(item) {
            continue;
        }

        if skip_nearly_empty && bin.remaining_volume() > bin.volume() * NEARLY_EMPTY_RATIO {
            continue;
        }

        let Some((pivot, remaining)) = evaluate_bin(bin, item) else {
            continue;
        };

        if worst.map_or(true, |(_, _, r)| remaining > r) {
            worst = Some((index, pivot, remaining));
        }
    }

    worst.map(|(index, pivot, _)| (index, pivot))
}

/// WorstFit and AlmostWorstFit: each item goes to the emptiest
/// admissible bin. The almost variant first tries with the nearly
/// empty bins excluded and falls back to the plain search when the
/// filter leaves nothing.
fn run_worst_fit(
    cancel: &CancelToken,
    bins: Vec<Bin>,
    items: Vec<Item>,
    skip_nearly_empty: bool,
) -> Result<PackResult> {
    let mut bins = prepare_bins(bins, &items);
    let mut unfit = Vec::with_capacity(items.len());
    let mut items = items.into_iter();

    while let Some(item) = items.next() {
        if cancel.is_cancelled() {
            unfit.push(item);
            unfit.extend(items);
            break;
        }

        let mut found = find_worst_bin(&bins, &item, skip_nearly_empty);
        if found.is_none() && skip_nearly_empty {
            found = find_worst_bin(&bins, &item, false);
        }

        match found {
            Some((index, pivot)) => {
                bins[index].put_item(&item, pivot);
            }
            None => unfit.push(item),
        }
    }

    Ok(PackResult::new(bins, unfit))
}
