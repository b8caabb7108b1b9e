//! Errors for conversions from dynamically sized data.

use std::result;

use thiserror::Error;

/// Errors returned when building a point at run time.
///
/// Dimension misuse on statically sized points is rejected at compile time
/// and never surfaces here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The number of components does not match the point's dimension.
    #[error("dimension mismatch: expected {expected} components, got {got}")]
    DimensionMismatch {
        /// Dimension of the target point type.
        expected: usize,
        /// Number of components supplied.
        got: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = result::Result<T, Error>;
