//! Error types for math2d operations.
//!
//! Almost every function in math2d is total over finite floats and lets IEEE
//! semantics speak for itself (division by zero yields `inf`/`NaN`). The few
//! places that reject their input do so with [`Error::InvalidArgument`]:
//!
//! - remapping from a degenerate source range (`a1 == a2`)
//! - building a vector from a slice with fewer than two elements
//! - building a color from a slice with fewer than four elements
//!
//! # Usage
//!
//! ```rust
//! use math2d_core::{Error, Result};
//!
//! fn checked_span(a: f64, b: f64) -> Result<f64> {
//!     if a == b {
//!         return Err(Error::degenerate_range(a));
//!     }
//!     Ok(b - a)
//! }
//!
//! assert!(checked_span(2.0, 2.0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by math2d on precondition violations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument violated a documented precondition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use math2d_core::Error;
    ///
    /// let err = Error::too_few_elements("vector", 2, 1);
    /// assert!(err.to_string().contains("expected at least 2"));
    /// ```
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Source range of a remap collapses to a single point.
    #[inline]
    pub fn degenerate_range(at: f64) -> Self {
        Self::InvalidArgument(format!(
            "division by zero: source range [{at}, {at}] is degenerate"
        ))
    }

    /// A slice was too short to build a `what`.
    #[inline]
    pub fn too_few_elements(what: &str, expected: usize, got: usize) -> Self {
        Self::InvalidArgument(format!(
            "{what} needs at least {expected} elements: expected at least {expected}, got {got}"
        ))
    }

    /// Returns `true` if this is an invalid-argument error.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
