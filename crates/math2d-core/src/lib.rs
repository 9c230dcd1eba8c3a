//! # math2d-core
//!
//! Core types shared by the math2d crates.
//!
//! - [`Error`], [`Result`] - precondition failures (`InvalidArgument`)
//! - [`HALF_PI`], [`QUARTER_PI`], [`TWO_PI`], [`DEG2RAD`], [`RAD2DEG`] - angle constants
//! - [`to_deg`], [`to_rad`] - angle conversion
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The rest of the workspace builds on it:
//!
//! ```text
//! math2d-core (this crate)
//!    ^
//!    |
//!    +-- math2d-math (Vector2D, interpolation, noise)
//!    +-- math2d-color (RGB/HSV)
//!    +-- math2d (facade)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod consts;
pub mod error;

pub use consts::*;
pub use error::*;
