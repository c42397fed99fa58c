//! Bins: the containers items are packed into.

use crate::item::Item;
use crate::rotation::{Dimensions, Pivot, Rotation};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular container with a weight limit.
///
/// Identity (id, dimensions, maximum weight) is immutable after
/// construction. Contents are an ordered list of placed items together
/// with cached volume and weight totals; the caches are updated on
/// every insertion and are always consistent with the list between
/// public operations.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bin {
    id: String,

    /// Dimensions as a `(width, height, depth)` triple.
    whd: Dimensions,

    max_weight: f64,
    volume: f64,
    max_length: f64,

    items: Vec<Item>,
    items_volume: f64,
    items_weight: f64,
}

impl Bin {
    /// Creates a new bin with the given dimensions and weight limit.
    ///
    /// Like [`Item::new`], inputs are accepted without validation.
    pub fn new(id: impl Into<String>, w: f64, h: f64, d: f64, max_weight: f64) -> Self {
        Self {
            id: id.into(),
            whd: Vector3::new(w, h, d),
            max_weight,
            volume: w * h * d,
            max_length: w.max(h).max(d),
            items: Vec::new(),
            items_volume: 0.0,
            items_weight: 0.0,
        }
    }

    /// Creates a flat bin with depth 1, the counterpart of
    /// [`Item::new_2d`].
    pub fn new_2d(id: impl Into<String>, w: f64, h: f64, max_weight: f64) -> Self {
        Self::new(id, w, h, 1.0, max_weight)
    }

    /// Returns the bin's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.whd.x
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.whd.y
    }

    /// Returns the depth.
    pub fn depth(&self) -> f64 {
        self.whd.z
    }

    /// Returns the cached volume.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Returns the weight limit.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Returns the cached length of the longest side.
    pub fn max_length(&self) -> f64 {
        self.max_length
    }

    /// Returns a read-only view of the placed items, in insertion
    /// order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the total volume of the placed items.
    pub fn items_volume(&self) -> f64 {
        self.items_volume
    }

    /// Returns the total weight of the placed items.
    pub fn items_weight(&self) -> f64 {
        self.items_weight
    }

    /// Returns the volume not yet taken by items.
    pub fn remaining_volume(&self) -> f64 {
        self.volume - self.items_volume
    }

    /// Returns the weight budget not yet taken by items.
    pub fn remaining_weight(&self) -> f64 {
        self.max_weight - self.items_weight
    }

    /// Returns true if the item passes both the volume and the weight
    /// quota of this bin, ignoring geometry.
    pub fn can_hold(&self, item: &Item) -> bool {
        self.fits_volume(item) && self.fits_weight(item)
    }

    fn fits_volume(&self, item: &Item) -> bool {
        self.items_volume + item.volume() <= self.volume
    }

    fn fits_weight(&self, item: &Item) -> bool {
        self.items_weight + item.weight() <= self.max_weight
    }

    /// Attempts to place `item` with its minimum corner at `pivot`.
    ///
    /// After the quota check, rotations are tried in the fixed order
    /// 0..5; the first one under which the item stays inside the bin
    /// and does not intersect any placed item wins. On success a copy
    /// of the item, carrying the winning rotation and the pivot, is
    /// appended to the contents and the caches are updated.
    ///
    /// The rotation search order must not change: placements, and with
    /// them the outcome of every strategy, are defined in terms of it.
    pub fn put_item(&mut self, item: &Item, pivot: Pivot) -> bool {
        if !self.can_hold(item) {
            return false;
        }

        let mut candidate = item.clone();
        candidate.set_pivot(pivot);

        for rotation in Rotation::ALL {
            candidate.set_rotation(rotation);
            let dims = candidate.dimensions();

            if self.whd.x < pivot.x + dims.x
                || self.whd.y < pivot.y + dims.y
                || self.whd.z < pivot.z + dims.z
            {
                continue;
            }

            if self.items.iter().any(|placed| placed.intersects(&candidate)) {
                continue;
            }

            self.insert(candidate);
            return true;
        }

        false
    }

    fn insert(&mut self, item: Item) {
        self.items_volume += item.volume();
        self.items_weight += item.weight();
        self.items.push(item);
    }

    /// Empties the bin and zeroes the content caches.
    pub fn reset(&mut self) {
        self.items.clear();
        self.items_volume = 0.0;
        self.items_weight = 0.0;
    }
}
