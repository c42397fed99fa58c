//! Axis-aligned rotations and dimension axes.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position of an item's minimum corner inside a bin.
pub type Pivot = Vector3<f64>;

/// A width/height/depth triple.
pub type Dimensions = Vector3<f64>;

/// Axis of a dimension triple: 0 = width, 1 = height, 2 = depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// The width axis (x).
    Width = 0,
    /// The height axis (y).
    Height = 1,
    /// The depth axis (z).
    Depth = 2,
}

impl Axis {
    /// All axes in width, height, depth order. This is the anchor
    /// enumeration order and must not change.
    pub const ALL: [Axis; 3] = [Axis::Width, Axis::Height, Axis::Depth];

    /// Returns the axis as a vector index.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One of the six axis-aligned orientations of a rectangular item.
///
/// Each variant names the permutation of the item's `(w, h, d)` triple
/// that becomes the effective `(width, height, depth)`:
///
/// | Variant | Effective dimensions |
/// |---------|----------------------|
/// | `Whd`   | `(w, h, d)`          |
/// | `Hwd`   | `(h, w, d)`          |
/// | `Hdw`   | `(h, d, w)`          |
/// | `Dhw`   | `(d, h, w)`          |
/// | `Dwh`   | `(d, w, h)`          |
/// | `Wdh`   | `(w, d, h)`          |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    /// Identity orientation.
    #[default]
    Whd = 0,
    /// Width and height swapped.
    Hwd = 1,
    /// Height, depth, width.
    Hdw = 2,
    /// Depth, height, width.
    Dhw = 3,
    /// Depth, width, height.
    Dwh = 4,
    /// Width, depth, height.
    Wdh = 5,
}

impl Rotation {
    /// All rotations in index order 0..5. This is the placement search
    /// order and must not change: results are defined in terms of it.
    pub const ALL: [Rotation; 6] = [
        Rotation::Whd,
        Rotation::Hwd,
        Rotation::Hdw,
        Rotation::Dhw,
        Rotation::Dwh,
        Rotation::Wdh,
    ];

    /// Source index into the stored `(w, h, d)` triple for each of the
    /// three effective axes, per rotation.
    const PERMUTATION: [[usize; 3]; 6] = [
        [0, 1, 2], // Whd
        [1, 0, 2], // Hwd
        [1, 2, 0], // Hdw
        [2, 1, 0], // Dhw
        [2, 0, 1], // Dwh
        [0, 2, 1], // Wdh
    ];

    /// Applies this rotation's permutation to a stored `(w, h, d)`
    /// triple, yielding the effective dimensions.
    pub fn apply(self, whd: &Dimensions) -> Dimensions {
        let map = Self::PERMUTATION[self as usize];
        Vector3::new(whd[map[0]], whd[map[1]], whd[map[2]])
    }

    /// Returns the rotation index (0..5).
    pub fn index(self) -> usize {
        self as usize
    }
}
