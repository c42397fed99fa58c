//! # boxpack-solver
//!
//! Placement engine, packing strategies and the packer facade for the
//! boxpack 3D bin packing engine.
//!
//! ## Components
//!
//! - [`engine`]: the per-bin placement search shared by every strategy
//!   (anchor enumeration, rotation search, full-bin repack)
//! - [`Strategy`]: the seven built-in heuristics
//! - [`ParallelStrategy`]: runs several algorithms concurrently and
//!   keeps the best result under a goal comparator
//! - [`Packer`]: the entry point tying it all together
//!
//! ## Quick start
//!
//! ```
//! use boxpack_core::{Bin, Item};
//! use boxpack_solver::Packer;
//!
//! let bins = vec![Bin::new("box", 100.0, 80.0, 60.0, 1000.0)];
//! let items = vec![
//!     Item::new("a", 40.0, 40.0, 40.0, 10.0),
//!     Item::new("b", 40.0, 40.0, 40.0, 10.0),
//! ];
//!
//! let result = Packer::new().pack(&bins, &items);
//! assert!(result.all_packed());
//! ```
//!
//! ## Feature flags
//!
//! - `serde`: serialization support for the data model

pub mod engine;
pub mod packer;
pub mod parallel;
pub mod strategies;

// Re-exports
pub use packer::Packer;
pub use parallel::ParallelStrategy;
pub use strategies::{PackingAlgorithm, Strategy};
