//! # boxpack-core
//!
//! Core data model for the boxpack 3D bin packing engine.
//!
//! This crate provides the geometric model shared by every packing
//! strategy:
//!
//! - **Items and bins**: [`Item`] and [`Bin`] with cached volume and
//!   weight aggregates
//! - **Rotations**: the six axis-aligned orientations and their fixed
//!   search order ([`Rotation`])
//! - **Intersection**: the axis-aligned overlap predicate on placed
//!   items
//! - **Results and goals**: [`PackResult`] plus the multi-criterion
//!   [`Goal`] comparator used to rank results
//! - **Cancellation**: the cooperative [`CancelToken`] signal
//!
//! ## Feature flags
//!
//! - `serde`: serialization support for the data model

pub mod bin;
pub mod cancel;
pub mod error;
pub mod goal;
pub mod item;
pub mod result;
pub mod rotation;

// Re-exports
pub use bin::Bin;
pub use cancel::CancelToken;
pub use error::{Error, Result};
pub use goal::{Criterion, Direction, Goal, Metric};
pub use item::Item;
pub use result::PackResult;
pub use rotation::{Axis, Dimensions, Pivot, Rotation};
