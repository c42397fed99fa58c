//! Per-bin placement engine.
//!
//! All strategies place items through the same search: an empty bin is
//! tried at the origin, a non-empty bin at the axis-extended corners of
//! its placed items. The First-Fit family additionally falls back to a
//! full-bin repack that rebuilds the layout around the rejected item.

use boxpack_core::{Axis, Bin, CancelToken, Item, Pivot};

/// Anchor pivots derived from the placed items: for each item, in
/// insertion order, its pivot pushed outward along each axis (width,
/// height, depth) by the item's effective extent on that axis.
fn anchors(bin: &Bin) -> Vec<Pivot> {
    let mut anchors = Vec::with_capacity(bin.items().len() * 3);

    for placed in bin.items() {
        let dims = placed.dimensions();
        for axis in Axis::ALL {
            let mut pivot = placed.pivot();
            pivot[axis.index()] += dims[axis.index()];
            anchors.push(pivot);
        }
    }

    anchors
}

/// Candidate pivots for evaluating a bin: the origin first, then the
/// anchors of every placed item.
pub(crate) fn candidate_pivots(bin: &Bin) -> Vec<Pivot> {
    let mut pivots = Vec::with_capacity(1 + bin.items().len() * 3);
    pivots.push(Pivot::zeros());
    pivots.extend(anchors(bin));
    pivots
}

/// Tries to fit `item` into `bin` without disturbing the current
/// layout: at the origin when the bin is empty, otherwise at the first
/// admissible anchor. The anchor walk order (placed item, then axis) is
/// fixed; rotations are searched inside [`Bin::put_item`].
pub fn fit_item(bin: &mut Bin, item: &Item) -> bool {
    if !bin.can_hold(item) {
        return false;
    }

    if bin.items().is_empty() {
        return bin.put_item(item, Pivot::zeros());
    }

    for anchor in anchors(bin) {
        if bin.put_item(item, anchor) {
            return true;
        }
    }

    false
}

/// Rebuilds the bin around `item`: empties it, seeds `item` at the
/// origin and replays the previous contents in their insertion order
/// through the anchor walk. Commits only if everything fits again;
/// otherwise the original layout (rotations, pivots, order, caches) is
/// restored and false is returned.
///
/// The replay uses [`fit_item`], never another repack, so the
/// reshuffle is a single level deep.
pub fn repack_with(bin: &mut Bin, item: &Item) -> bool {
    let snapshot = bin.clone();
    bin.reset();

    if !bin.put_item(item, Pivot::zeros()) {
        *bin = snapshot;
        return false;
    }

    for original in snapshot.items() {
        if !fit_item(bin, original) {
            *bin = snapshot;
            return false;
        }
    }

    true
}

/// Packs a single item into the bin: the plain anchor walk first, then
/// the full-bin repack when the current layout rejects an item that
/// still meets the bin's quotas.
pub fn pack_item(bin: &mut Bin, item: &Item) -> bool {
    if fit_item(bin, item) {
        return true;
    }

    if bin.can_hold(item) && !bin.items().is_empty() {
        return repack_with(bin, item);
    }

    false
}

/// Packs as many of `items` into `bin` as possible, in order, and
/// returns the leftovers. When `cancel` fires, the item in flight and
/// everything after it are returned without further placement
/// attempts.
pub fn pack_into_bin(cancel: &CancelToken, bin: &mut Bin, items: Vec<Item>) -> Vec<Item> {
    let mut unpacked = Vec::with_capacity(items.len());
    let mut items = items.into_iter();

    while let Some(item) = items.next() {
        if cancel.is_cancelled() {
            unpacked.push(item);
            unpacked.extend(items);
            break;
        }

        if !pack_item(bin, &item) {
            unpacked.push(item);
        }
    }

    unpacked
}
