//! # boxpack
//!
//! Heuristic 3D bin packing with rotations.
//!
//! Given a heterogeneous fleet of bins (each with fixed dimensions and
//! a weight limit) and a heterogeneous set of items, boxpack places
//! items into bins without overlap, respecting volume, weight and
//! geometry, and reports what did not fit. Seven classic heuristics
//! are built in, plus a parallel meta-strategy that races several of
//! them and keeps the best result under a configurable goal.
//!
//! ## Quick start
//!
//! ```
//! use boxpack::{Bin, Item, Packer, Strategy};
//!
//! let bins = vec![
//!     Bin::new("small", 220.0, 185.0, 50.0, 20_000.0),
//!     Bin::new("large", 530.0, 380.0, 265.0, 20_000.0),
//! ];
//! let items = vec![
//!     Item::new("book", 200.0, 150.0, 30.0, 500.0),
//!     Item::new("mug", 90.0, 90.0, 100.0, 350.0),
//! ];
//!
//! let packer = Packer::new().with_strategy(Strategy::BestFit);
//! let result = packer.pack(&bins, &items);
//! assert!(result.all_packed());
//! ```
//!
//! ## Feature flags
//!
//! - `serde`: serialization support for the data model

/// Core data model: items, bins, rotations, results, goals.
pub use boxpack_core as core;

/// Placement engine, strategies and the packer facade.
pub use boxpack_solver as solver;

// Re-export commonly used types at the root level
pub use boxpack_core::{
    Axis, Bin, CancelToken, Criterion, Direction, Error, Goal, Item, PackResult, Pivot, Result,
    Rotation,
};
pub use boxpack_solver::{Packer, PackingAlgorithm, ParallelStrategy, Strategy};
