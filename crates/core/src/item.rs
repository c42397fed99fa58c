//! Items and the axis-aligned intersection test.

use crate::rotation::{Axis, Dimensions, Pivot, Rotation};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Effective dimensions at or below this threshold are degenerate; a
/// degenerate projection never reports an overlap.
const MIN_DIMENSION: f64 = 1e-10;

/// An item that can be packed into a bin.
///
/// Identity (id, stored dimensions, weight) is immutable after
/// construction; volume and longest side are cached once and never
/// recomputed. The rotation and pivot describe the item's current
/// placement and are meaningful only while the item is owned by a bin.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    id: String,

    /// Stored dimensions as a `(width, height, depth)` triple. Kept as
    /// a vector so rotations are a permutation lookup.
    whd: Dimensions,

    weight: f64,
    volume: f64,
    max_length: f64,

    rotation: Rotation,
    pivot: Pivot,
}

impl Item {
    /// Creates a new item with the given dimensions and weight.
    ///
    /// Dimensions are accepted as-is: zero or negative values and empty
    /// identifiers are permitted, and it is the caller's responsibility
    /// to provide sensible inputs.
    pub fn new(id: impl Into<String>, w: f64, h: f64, d: f64, weight: f64) -> Self {
        Self {
            id: id.into(),
            whd: Vector3::new(w, h, d),
            weight,
            volume: w * h * d,
            max_length: w.max(h).max(d),
            rotation: Rotation::default(),
            pivot: Pivot::zeros(),
        }
    }

    /// Creates a flat item with depth 1, useful for packing sheets,
    /// boards, or panels as an effectively 2D problem.
    pub fn new_2d(id: impl Into<String>, w: f64, h: f64, weight: f64) -> Self {
        Self::new(id, w, h, 1.0, weight)
    }

    /// Returns the item's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the stored width.
    pub fn width(&self) -> f64 {
        self.whd.x
    }

    /// Returns the stored height.
    pub fn height(&self) -> f64 {
        self.whd.y
    }

    /// Returns the stored depth.
    pub fn depth(&self) -> f64 {
        self.whd.z
    }

    /// Returns the item's weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the cached volume.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Returns the cached length of the longest side.
    pub fn max_length(&self) -> f64 {
        self.max_length
    }

    /// Returns the current rotation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Returns the current pivot, the item's minimum corner inside its
    /// bin.
    pub fn pivot(&self) -> Pivot {
        self.pivot
    }

    /// Returns the effective dimensions under the current rotation.
    pub fn dimensions(&self) -> Dimensions {
        self.rotation.apply(&self.whd)
    }

    pub(crate) fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    pub(crate) fn set_pivot(&mut self, pivot: Pivot) {
        self.pivot = pivot;
    }

    /// Tests whether the axis-aligned bounding boxes of two items, at
    /// their current rotations and pivots, overlap with positive
    /// volume.
    ///
    /// The test projects both boxes onto the width/height, height/depth
    /// and width/depth planes and compares center distances on each;
    /// the items intersect iff all three projected rectangles overlap.
    /// Shared faces do not count as an intersection, and degenerate
    /// items (any effective dimension at most 1e-10) intersect nothing.
    pub fn intersects(&self, other: &Item) -> bool {
        self.overlaps_on(other, Axis::Width, Axis::Height)
            && self.overlaps_on(other, Axis::Height, Axis::Depth)
            && self.overlaps_on(other, Axis::Width, Axis::Depth)
    }

    /// Rectangle overlap on a single axis pair.
    fn overlaps_on(&self, other: &Item, x: Axis, y: Axis) -> bool {
        let d1 = self.dimensions();
        let d2 = other.dimensions();
        let (x, y) = (x.index(), y.index());

        let (d1x, d1y) = (d1[x], d1[y]);
        let (d2x, d2y) = (d2[x], d2[y]);

        if d1x <= MIN_DIMENSION || d1y <= MIN_DIMENSION || d2x <= MIN_DIMENSION || d2y <= MIN_DIMENSION
        {
            return false;
        }

        let cx1 = self.pivot[x] + d1x / 2.0;
        let cy1 = self.pivot[y] + d1y / 2.0;
        let cx2 = other.pivot[x] + d2x / 2.0;
        let cy2 = other.pivot[y] + d2y / 2.0;

        (cx1 - cx2).abs() < (d1x + d2x) / 2.0 && (cy1 - cy2).abs() < (d1y + d2y) / 2.0
    }
}
