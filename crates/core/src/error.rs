//! Error types for boxpack.

use thiserror::Error;

/// Result type alias for boxpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during packing.
///
/// Placement itself never fails: an item that cannot be placed is
/// reported in the result's unfit list, and constructors accept any
/// input without validation. The only runtime failure is cooperative
/// cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The caller's cancellation signal fired before packing finished.
    #[error("packing cancelled")]
    Cancelled,
}
